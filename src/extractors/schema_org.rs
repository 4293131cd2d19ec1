//! Structured-data extractor: Schema.org Recipe objects embedded as
//! JSON-LD. Handles bare objects, arrays of schemas, and `@graph`-wrapped
//! documents; malformed blocks are skipped, never fatal.

use html_escape::decode_html_entities;
use log::debug;
use scraper::Selector;
use serde::Deserialize;
use serde_json::Value;

use super::{FallbackExtractor, ParsingContext};
use crate::model::{Recipe, DEFAULT_TITLE};
use crate::patterns::ISO_DURATION;

pub struct SchemaOrgExtractor;

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    name: Option<String>,
    image: Option<ImageField>,
    #[serde(rename = "recipeIngredient", alias = "ingredients")]
    recipe_ingredient: Option<Vec<String>>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: Option<InstructionsField>,
    #[serde(rename = "prepTime")]
    prep_time: Option<String>,
    #[serde(rename = "cookTime")]
    cook_time: Option<String>,
    #[serde(rename = "totalTime")]
    total_time: Option<String>,
    #[serde(rename = "recipeYield")]
    recipe_yield: Option<YieldField>,
}

#[derive(Debug, Deserialize)]
struct ImageObject {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageField {
    String(String),
    Object(ImageObject),
    MultipleStrings(Vec<String>),
    MultipleObjects(Vec<ImageObject>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionsField {
    String(String),
    Multiple(Vec<InstructionEntry>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionEntry {
    String(String),
    Object(InstructionObject),
    Other(Value),
}

/// HowToStep-ish object; `text` wins over `name`, matching how sections
/// and steps overlap in the wild.
#[derive(Debug, Deserialize)]
struct InstructionObject {
    text: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YieldField {
    String(String),
    Number(serde_json::Number),
    Multiple(Vec<Value>),
}

impl FallbackExtractor for SchemaOrgExtractor {
    fn name(&self) -> &'static str {
        "schema_org"
    }

    fn extract(&self, context: &ParsingContext<'_>) -> Option<Recipe> {
        let selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
        for script in context.document.select(&selector) {
            let raw: String = script.text().collect();
            let value: Value = match serde_json::from_str(&raw) {
                Ok(v) => v,
                Err(err) => {
                    debug!("skipping unparseable JSON-LD block: {err}");
                    continue;
                }
            };

            let Some(node) = find_recipe_node(&value) else {
                continue;
            };
            let recipe: JsonLdRecipe = match serde_json::from_value(node.clone()) {
                Ok(r) => r,
                Err(err) => {
                    debug!("skipping Recipe block with unexpected shape: {err}");
                    continue;
                }
            };

            if let Some(record) = build_record(recipe, context.url) {
                return Some(record);
            }
        }
        None
    }
}

/// True when the node declares itself a Recipe, either as a bare string
/// type or within a type array.
fn is_recipe_type(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(s)) => s == "Recipe",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Recipe")),
        _ => false,
    }
}

/// Unwrap the three container shapes: bare object, array of schemas, and
/// `@graph`-wrapped list. A present `@graph` is authoritative for its block.
fn find_recipe_node(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.iter().find(|item| is_recipe_type(item)),
        Value::Object(map) => {
            if let Some(graph) = map.get("@graph").and_then(Value::as_array) {
                return graph.iter().find(|item| is_recipe_type(item));
            }
            is_recipe_type(value).then_some(value)
        }
        _ => None,
    }
}

/// Entities sometimes arrive double-encoded; decoding twice is safe on
/// singly-encoded text.
fn decode_html_symbols(text: &str) -> String {
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// Parse "PT1H30M"-style durations to total minutes. Missing hour or
/// minute fields count as zero; a missing PT tag means no duration at all.
fn parse_duration(duration: Option<&str>) -> Option<u32> {
    let caps = ISO_DURATION.captures(duration?.trim())?;
    let hours: u32 = caps.get(1).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let minutes: u32 = caps.get(2).map_or(0, |m| m.as_str().parse().unwrap_or(0));
    Some(hours * 60 + minutes)
}

fn first_image(image: ImageField) -> Option<String> {
    let url = match image {
        ImageField::String(url) => Some(url),
        ImageField::Object(obj) => Some(obj.url),
        ImageField::MultipleStrings(urls) => urls.into_iter().next(),
        ImageField::MultipleObjects(objs) => objs.into_iter().next().map(|o| o.url),
        ImageField::Other(_) => None,
    };
    url.filter(|u| !u.trim().is_empty())
}

fn collect_instructions(instructions: InstructionsField) -> Vec<String> {
    match instructions {
        InstructionsField::String(text) => vec![decode_html_symbols(&text)],
        InstructionsField::Multiple(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                InstructionEntry::String(text) => Some(text),
                InstructionEntry::Object(obj) => obj.text.or(obj.name),
                InstructionEntry::Other(_) => None,
            })
            .filter(|text| !text.trim().is_empty())
            .map(|text| decode_html_symbols(&text))
            .collect(),
    }
}

fn yield_to_string(value: YieldField) -> Option<String> {
    match value {
        YieldField::String(s) => Some(s),
        YieldField::Number(n) => Some(n.to_string()),
        YieldField::Multiple(items) => items.into_iter().find_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }),
    }
    .filter(|s| !s.trim().is_empty())
}

fn build_record(recipe: JsonLdRecipe, url: &str) -> Option<Recipe> {
    let mut record = Recipe::new(url);

    record.title = recipe
        .name
        .filter(|n| !n.trim().is_empty())
        .map(|n| decode_html_symbols(&n))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    record.image = recipe.image.and_then(first_image);
    record.prep_time = parse_duration(recipe.prep_time.as_deref());
    record.cook_time = parse_duration(recipe.cook_time.as_deref());
    record.total_time = parse_duration(recipe.total_time.as_deref());
    record.servings = recipe.recipe_yield.and_then(yield_to_string);
    record.ingredients = recipe
        .recipe_ingredient
        .unwrap_or_default()
        .into_iter()
        .filter(|i| !i.trim().is_empty())
        .map(|i| decode_html_symbols(&i))
        .collect();
    record.instructions = recipe
        .recipe_instructions
        .map(collect_instructions)
        .unwrap_or_default();

    // a record with nothing to cook from is no record at all
    if record.is_empty() {
        return None;
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extract(html: &str) -> Option<Recipe> {
        let document = Html::parse_document(html);
        let context = ParsingContext {
            url: "https://example.com/recipe",
            document: &document,
        };
        SchemaOrgExtractor.extract(&context)
    }

    fn page_with_script(json: &str) -> String {
        format!(
            r#"<html><head><script type="application/ld+json">{json}</script></head><body></body></html>"#
        )
    }

    #[test]
    fn test_bare_recipe_object() {
        let html = page_with_script(
            r#"{
                "@type": "Recipe",
                "name": "Milk Bread",
                "recipeIngredient": ["2 cups flour"],
                "recipeInstructions": [{"text": "Mix"}],
                "prepTime": "PT15M"
            }"#,
        );
        let recipe = extract(&html).unwrap();
        assert_eq!(recipe.title, "Milk Bread");
        assert_eq!(recipe.ingredients, vec!["2 cups flour"]);
        assert_eq!(recipe.instructions, vec!["Mix"]);
        assert_eq!(recipe.prep_time, Some(15));
        assert_eq!(recipe.category, "Uncategorized");
        assert_eq!(recipe.source_url, "https://example.com/recipe");
    }

    #[test]
    fn test_array_wrapped_recipe() {
        let html = page_with_script(
            r#"[
                {"@type": "WebSite", "name": "Some Blog"},
                {"@type": "Recipe", "name": "Scones", "recipeIngredient": ["250 g flour"]}
            ]"#,
        );
        let recipe = extract(&html).unwrap();
        assert_eq!(recipe.title, "Scones");
    }

    #[test]
    fn test_graph_wrapped_recipe() {
        let html = page_with_script(
            r#"{
                "@context": "https://schema.org",
                "@graph": [
                    {"@type": "Organization", "name": "Blog Inc"},
                    {"@type": "Recipe", "name": "Focaccia", "recipeInstructions": "Bake it."}
                ]
            }"#,
        );
        let recipe = extract(&html).unwrap();
        assert_eq!(recipe.title, "Focaccia");
        assert_eq!(recipe.instructions, vec!["Bake it."]);
    }

    #[test]
    fn test_type_array_counts_as_recipe() {
        let html = page_with_script(
            r#"{"@type": ["Recipe", "NewsArticle"], "name": "Stew", "recipeIngredient": ["1 kg beef"]}"#,
        );
        assert!(extract(&html).is_some());
    }

    #[test]
    fn test_ingredients_alias_field() {
        let html = page_with_script(
            r#"{"@type": "Recipe", "name": "Toast", "ingredients": ["2 slices bread"]}"#,
        );
        let recipe = extract(&html).unwrap();
        assert_eq!(recipe.ingredients, vec!["2 slices bread"]);
    }

    #[test]
    fn test_instruction_objects_fall_back_to_name() {
        let html = page_with_script(
            r#"{
                "@type": "Recipe",
                "name": "Soup",
                "recipeInstructions": [
                    "Chop the onions",
                    {"text": "Simmer for an hour"},
                    {"name": "Season to taste"},
                    42
                ]
            }"#,
        );
        let recipe = extract(&html).unwrap();
        assert_eq!(
            recipe.instructions,
            vec!["Chop the onions", "Simmer for an hour", "Season to taste"]
        );
    }

    #[test]
    fn test_image_shapes() {
        let object = page_with_script(
            r#"{"@type": "Recipe", "name": "A", "recipeIngredient": ["x"], "image": {"url": "https://img/a.jpg"}}"#,
        );
        assert_eq!(extract(&object).unwrap().image.as_deref(), Some("https://img/a.jpg"));

        let list = page_with_script(
            r#"{"@type": "Recipe", "name": "B", "recipeIngredient": ["x"], "image": ["https://img/1.jpg", "https://img/2.jpg"]}"#,
        );
        assert_eq!(extract(&list).unwrap().image.as_deref(), Some("https://img/1.jpg"));
    }

    #[test]
    fn test_durations() {
        let html = page_with_script(
            r#"{
                "@type": "Recipe",
                "name": "Roast",
                "recipeIngredient": ["1 chicken"],
                "prepTime": "PT20M",
                "cookTime": "PT1H30M",
                "totalTime": "PT2H"
            }"#,
        );
        let recipe = extract(&html).unwrap();
        assert_eq!(recipe.prep_time, Some(20));
        assert_eq!(recipe.cook_time, Some(90));
        assert_eq!(recipe.total_time, Some(120));
    }

    #[test]
    fn test_numeric_yield_is_stringified() {
        let html = page_with_script(
            r#"{"@type": "Recipe", "name": "Buns", "recipeIngredient": ["x"], "recipeYield": 12}"#,
        );
        assert_eq!(extract(&html).unwrap().servings.as_deref(), Some("12"));
    }

    #[test]
    fn test_malformed_block_skipped_before_good_one() {
        let html = r#"<html><head>
            <script type="application/ld+json">{not valid json</script>
            <script type="application/ld+json">{"@type": "Recipe", "name": "Rescue", "recipeIngredient": ["1 egg"]}</script>
            </head><body></body></html>"#;
        assert_eq!(extract(html).unwrap().title, "Rescue");
    }

    #[test]
    fn test_empty_recipe_block_is_not_a_result() {
        let html = page_with_script(r#"{"@type": "Recipe", "name": "Hollow"}"#);
        assert!(extract(&html).is_none());
    }

    #[test]
    fn test_no_recipe_typed_block() {
        let html = page_with_script(r#"{"@type": "NewsArticle", "name": "Not food"}"#);
        assert!(extract(&html).is_none());
    }
}
