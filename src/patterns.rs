//! Compiled regex tables for the heuristic extractors and the text
//! normalizer.
//!
//! Each signature lives here as a named static so a tier's matching rules
//! can be unit-tested without HTML fixtures. All patterns compile once at
//! first use via `LazyLock`.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Normalizer patterns
// ---------------------------------------------------------------------------

/// A decimal numeral embedded in ingredient text ("0.5", ".75", "0.6666666").
pub static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d*\.\d+").expect("DECIMAL regex"));

/// A line that concatenates at least two numbered steps ("1. Mix 2. Bake").
pub static EMBEDDED_STEPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+.+\d+\.\s+").expect("EMBEDDED_STEPS regex"));

/// One "digits, period, whitespace" step marker; split points go right
/// before each match.
pub static STEP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+").expect("STEP_MARKER regex"));

/// Leading step numeral to strip from a split segment.
pub static LEADING_STEP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("LEADING_STEP_NUMBER regex"));

// ---------------------------------------------------------------------------
// Blog-layout tier
// ---------------------------------------------------------------------------

/// Measurement signature for list-item ingredients on blog layouts.
pub static BLOG_MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*g\b|\d+\s*ml\b|\d+\s*tsp|\d+\s*tbsp|\d+\s*cup|gram|ounce|\d+\s*oz")
        .expect("BLOG_MEASUREMENT regex")
});

/// Short paragraph opening with a quantity and unit ("350 g flour").
pub static LEADING_QUANTITY_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s*(g|ml|tsp|tbsp|cup)\s+").expect("LEADING_QUANTITY_UNIT regex")
});

/// Count-style egg ingredient ("2 eggs") with no unit word.
pub static LEADING_EGG_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+\s+egg").expect("LEADING_EGG_COUNT regex"));

/// Paragraph carrying two or more gram quantities on one line.
pub static MULTI_GRAM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s*g\s+\w+.*\d+\s*g\s+\w+").expect("MULTI_GRAM_LINE regex")
});

/// A gram-quantity boundary; multi-ingredient lines split right before each.
pub static GRAM_QUANTITY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*g\s+").expect("GRAM_QUANTITY_START regex"));

/// Any gram quantity, used to keep only real fragments after splitting.
pub static GRAM_QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*g\b").expect("GRAM_QUANTITY regex"));

/// Cooking-action verbs that mark a paragraph as an instruction step.
pub static BLOG_COOKING_VERBS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(mix|combine|add|stir|fold|knead|roll|bake|proof|preheat|shape|cut|cover|refrigerate|let|place|brush|repeat)\b")
        .expect("BLOG_COOKING_VERBS regex")
});

// ---------------------------------------------------------------------------
// Generic tier (broadened vocabularies, last resort)
// ---------------------------------------------------------------------------

/// Broadened measurement vocabulary: adds kg/l/lb and spelled-out units.
pub static GENERIC_MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(g|kg|ml|l|oz|lb|cup|cups|tsp|tbsp|teaspoon|tablespoon|gram|grams|ounce|ounces)\b")
        .expect("GENERIC_MEASUREMENT regex")
});

/// Broadened verb vocabulary: adds cook/heat/simmer/boil/fry/pour/whisk.
pub static GENERIC_COOKING_VERBS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(mix|combine|add|stir|fold|knead|roll|bake|proof|preheat|shape|cut|cover|refrigerate|let|place|brush|repeat|cook|heat|simmer|boil|fry|pour|whisk)\b")
        .expect("GENERIC_COOKING_VERBS regex")
});

/// Image paths that suggest decorative assets rather than recipe photos.
pub static DECORATIVE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)logo|icon|avatar|button").expect("DECORATIVE_IMAGE regex"));

/// Class names hinting at the main content container of a page.
pub static CONTENT_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)content|post|entry").expect("CONTENT_CLASS regex"));

// ---------------------------------------------------------------------------
// Structured data
// ---------------------------------------------------------------------------

/// ISO-8601-style duration: "PT15M", "PT1H30M". Hours and minutes are each
/// optional once the PT tag is present.
pub static ISO_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?").expect("ISO_DURATION regex"));

/// Split `text` immediately before every match of `marker`, keeping the
/// marker at the head of each segment. Behaves like a lookahead split, which
/// the regex crate does not support directly.
pub fn split_before<'a>(text: &'a str, marker: &Regex) -> Vec<&'a str> {
    let mut points: Vec<usize> = marker
        .find_iter(text)
        .map(|m| m.start())
        .filter(|&start| start > 0)
        .collect();
    points.push(text.len());

    let mut segments = Vec::with_capacity(points.len());
    let mut prev = 0;
    for point in points {
        segments.push(&text[prev..point]);
        prev = point;
    }
    segments
}
