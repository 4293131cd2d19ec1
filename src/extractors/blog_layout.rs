//! Blog-layout heuristic tier, tuned to the classic WordPress baking-blog
//! shape: an `entry-content` region, measurement-bearing list items or
//! short quantity-first paragraphs for ingredients, ordered lists or
//! verb-bearing paragraphs for steps.

use log::debug;
use scraper::{ElementRef, Selector};

use super::{element_text, FallbackExtractor, ParsingContext};
use crate::model::{Recipe, DEFAULT_TITLE};
use crate::patterns::{
    split_before, BLOG_COOKING_VERBS, BLOG_MEASUREMENT, GRAM_QUANTITY, GRAM_QUANTITY_START,
    LEADING_EGG_COUNT, LEADING_QUANTITY_UNIT, MULTI_GRAM_LINE,
};

/// Paragraphs longer than this cannot be single ingredients.
const MAX_INGREDIENT_PARAGRAPH: usize = 150;

/// Egg-count lines are shorter still.
const MAX_EGG_PARAGRAPH: usize = 100;

/// Ordered-list items at or under this length are headings or noise.
const MIN_LIST_STEP: usize = 20;

/// Verb-bearing paragraphs must exceed this to count as a step.
const MIN_PARAGRAPH_STEP: usize = 50;

pub struct BlogLayoutExtractor;

impl FallbackExtractor for BlogLayoutExtractor {
    fn name(&self) -> &'static str {
        "blog_layout"
    }

    fn extract(&self, context: &ParsingContext<'_>) -> Option<Recipe> {
        let document = context.document;

        let title = document
            .select(&Selector::parse("h1.entry-title").unwrap())
            .next()
            .or_else(|| document.select(&Selector::parse("h1").unwrap()).next())
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let content = document
            .select(&Selector::parse("div.entry-content").unwrap())
            .next()
            .or_else(|| document.select(&Selector::parse("article").unwrap()).next())
            .unwrap_or_else(|| document.root_element());

        let ingredients = find_ingredients(content);
        let instructions = find_instructions(content);

        if ingredients.is_empty() && instructions.is_empty() {
            debug!("blog-layout tier found nothing usable");
            return None;
        }

        let mut recipe = Recipe::new(context.url);
        recipe.title = title;
        recipe.image = find_image(content);
        recipe.ingredients = ingredients;
        recipe.instructions = instructions;
        Some(recipe)
    }
}

/// Three methods in order of confidence: measurement-bearing list items,
/// short quantity-first paragraphs, then run-on multi-gram paragraphs
/// split at each gram-quantity boundary.
fn find_ingredients(content: ElementRef<'_>) -> Vec<String> {
    let mut ingredients = Vec::new();

    for li in content.select(&Selector::parse("ul li").unwrap()) {
        let text = element_text(li);
        if BLOG_MEASUREMENT.is_match(&text) {
            ingredients.push(text);
        }
    }

    if ingredients.is_empty() {
        for p in content.select(&Selector::parse("p").unwrap()) {
            let text = element_text(p);
            // run-on lines with several gram quantities belong to the
            // splitting pass below, not here
            if MULTI_GRAM_LINE.is_match(&text) {
                continue;
            }
            if text.len() < MAX_INGREDIENT_PARAGRAPH && LEADING_QUANTITY_UNIT.is_match(&text) {
                ingredients.push(text);
            } else if text.len() < MAX_EGG_PARAGRAPH && LEADING_EGG_COUNT.is_match(&text) {
                ingredients.push(text);
            }
        }
    }

    if ingredients.is_empty() {
        for p in content.select(&Selector::parse("p").unwrap()) {
            let text = element_text(p);
            if MULTI_GRAM_LINE.is_match(&text) {
                for part in split_before(&text, &GRAM_QUANTITY_START) {
                    let part = part.trim();
                    if !part.is_empty() && GRAM_QUANTITY.is_match(part) {
                        ingredients.push(part.to_string());
                    }
                }
            }
        }
    }

    ingredients
}

/// Ordered-list items first; without an ordered list, paragraphs carrying
/// a cooking verb.
fn find_instructions(content: ElementRef<'_>) -> Vec<String> {
    let mut instructions = Vec::new();

    for li in content.select(&Selector::parse("ol li").unwrap()) {
        let text = element_text(li);
        if text.len() > MIN_LIST_STEP {
            instructions.push(text);
        }
    }

    if instructions.is_empty() {
        for p in content.select(&Selector::parse("p").unwrap()) {
            let text = element_text(p);
            if text.len() > MIN_PARAGRAPH_STEP && BLOG_COOKING_VERBS.is_match(&text) {
                instructions.push(text);
            }
        }
    }

    instructions
}

fn find_image(content: ElementRef<'_>) -> Option<String> {
    let img = content.select(&Selector::parse("img").unwrap()).next()?;
    img.value()
        .attr("src")
        .or_else(|| img.value().attr("data-src"))
        .map(str::to_string)
}
