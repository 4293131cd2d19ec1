use std::env;
use std::process::ExitCode;

use recipe_harvest::extract_recipe;

fn format_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{hours} hr")
    } else {
        format!("{hours} hr {mins} min")
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(url) = args.get(1) else {
        eprintln!("usage: recipe-harvest <url>");
        return ExitCode::FAILURE;
    };

    match extract_recipe(url).await {
        Ok(recipe) => {
            println!("{}", recipe.title);
            println!();
            if let Some(prep) = recipe.prep_time {
                println!("Prep:  {}", format_time(prep));
            }
            if let Some(cook) = recipe.cook_time {
                println!("Cook:  {}", format_time(cook));
            }
            if let Some(total) = recipe.total_time {
                println!("Total: {}", format_time(total));
            }
            if let Some(servings) = &recipe.servings {
                println!("Serves: {servings}");
            }
            println!("\nIngredients:");
            for ingredient in &recipe.ingredients {
                println!("  - {ingredient}");
            }
            println!("\nInstructions:");
            for (i, step) in recipe.instructions.iter().enumerate() {
                println!("  {}. {step}", i + 1);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
