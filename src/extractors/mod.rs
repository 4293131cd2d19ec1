//! Fallback extractors, tried in fixed order once no site-specific parser
//! applies: structured data first, then the blog-layout heuristics, then
//! the fully generic scan. Tiers go from most-specific signal to least
//! because false positives grow with generality.

use scraper::{ElementRef, Html};

use crate::model::Recipe;

mod blog_layout;
mod generic;
mod schema_org;

pub use blog_layout::BlogLayoutExtractor;
pub use generic::GenericExtractor;
pub use schema_org::SchemaOrgExtractor;

/// A fetched page handed to the fallback chain.
pub struct ParsingContext<'a> {
    pub url: &'a str,
    pub document: &'a Html,
}

/// One stage of the fallback chain. `None` means "nothing usable here,
/// try the next extractor" — stages never abort the chain.
pub trait FallbackExtractor {
    fn name(&self) -> &'static str;
    fn extract(&self, context: &ParsingContext<'_>) -> Option<Recipe>;
}

/// The chain in its fixed priority order.
pub fn fallback_chain() -> Vec<Box<dyn FallbackExtractor>> {
    vec![
        Box::new(SchemaOrgExtractor),
        Box::new(BlogLayoutExtractor),
        Box::new(GenericExtractor),
    ]
}

/// Visible text of an element with whitespace collapsed, the way the
/// heuristics expect to match it.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_fallback_chain_order_is_fixed() {
        let names: Vec<&str> = fallback_chain().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["schema_org", "blog_layout", "generic"]);
    }

    #[test]
    fn test_element_text_collapses_whitespace() {
        let html = Html::parse_fragment("<p>  350 g\n   strong <b>flour</b>  </p>");
        let p = html
            .select(&Selector::parse("p").unwrap())
            .next()
            .unwrap();
        assert_eq!(element_text(p), "350 g strong flour");
    }
}
