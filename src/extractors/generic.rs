//! Last-resort generic tier: broadened unit and verb vocabularies, whole
//! content region scanned flat rather than method-by-method. Broader nets
//! mean more false positives, which is why this tier runs last.

use log::debug;
use scraper::{ElementRef, Selector};

use super::{element_text, FallbackExtractor, ParsingContext};
use crate::model::{Recipe, DEFAULT_TITLE};
use crate::patterns::{
    CONTENT_CLASS, DECORATIVE_IMAGE, GENERIC_COOKING_VERBS, GENERIC_MEASUREMENT,
};

/// List items at or under this length are markup noise, not ingredients.
const MIN_INGREDIENT_ITEM: usize = 3;

/// Instruction paragraphs must exceed this length.
const MIN_PARAGRAPH_STEP: usize = 60;

pub struct GenericExtractor;

impl FallbackExtractor for GenericExtractor {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract(&self, context: &ParsingContext<'_>) -> Option<Recipe> {
        let document = context.document;

        let title = document
            .select(&Selector::parse("h1").unwrap())
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let content = find_content_region(context);

        let mut ingredients = Vec::new();
        for li in content.select(&Selector::parse("li").unwrap()) {
            let text = element_text(li);
            if text.len() > MIN_INGREDIENT_ITEM && GENERIC_MEASUREMENT.is_match(&text) {
                ingredients.push(text);
            }
        }

        let mut instructions = Vec::new();
        for p in content.select(&Selector::parse("p").unwrap()) {
            let text = element_text(p);
            if text.len() > MIN_PARAGRAPH_STEP && GENERIC_COOKING_VERBS.is_match(&text) {
                instructions.push(text);
            }
        }

        if ingredients.is_empty() && instructions.is_empty() {
            debug!("generic tier found nothing usable");
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

/// Common content containers in preference order: article, a div with a
/// content-ish class name, main, then the whole document.
fn find_content_region<'a>(context: &'a ParsingContext<'_>) -> ElementRef<'a> {
    let document = context.document;

    if let Some(article) = document.select(&Selector::parse("article").unwrap()).next() {
        return article;
    }
    for div in document.select(&Selector::parse("div").unwrap()) {
        if let Some(class) = div.value().attr("class") {
            if CONTENT_CLASS.is_match(class) {
                return div;
            }
        }
    }
    if let Some(main) = document.select(&Selector::parse("main").unwrap()).next() {
        return main;
    }
    document.root_element()
}

/// First image whose path does not look like a decorative asset.
fn find_image(content: ElementRef<'_>) -> Option<String> {
    for img in content.select(&Selector::parse("img").unwrap()) {
        let src = img
            .value()
            .attr("src")
            .or_else(|| img.value().attr("data-src"));
        if let Some(src) = src {
            if !DECORATIVE_IMAGE.is_match(src) {
                return Some(src.to_string());
            }
        }
    }
    None
}
