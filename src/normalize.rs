//! Text normalization applied to every record leaving the extraction
//! pipeline: decimal quantities become cooking fractions, and run-on
//! instruction strings with embedded numbering become discrete steps.

use crate::model::Recipe;
use crate::patterns::{
    split_before, DECIMAL, EMBEDDED_STEPS, LEADING_STEP_NUMBER, STEP_MARKER,
};

/// Cooking fractions worth rendering by name, checked in this order.
const COMMON_FRACTIONS: &[(f64, &str)] = &[
    (0.125, "1/8"),
    (0.25, "1/4"),
    (0.333, "1/3"),
    (0.375, "3/8"),
    (0.5, "1/2"),
    (0.625, "5/8"),
    (0.666, "2/3"),
    (0.667, "2/3"),
    (0.75, "3/4"),
    (0.875, "7/8"),
];

/// Absolute tolerance for snapping to a common fraction.
const FRACTION_TOLERANCE: f64 = 0.02;

/// Largest denominator used when approximating an uncommon value.
const MAX_DENOMINATOR: i64 = 8;

/// Convert a decimal numeral to a human-readable fraction string.
///
/// Whole values render as plain integers, values near a common cooking
/// fraction use it ("2.5" becomes "2 1/2"), and anything else is
/// approximated by the nearest rational with denominator at most 8. Input
/// that fails to parse is returned unchanged.
pub fn decimal_to_fraction(decimal: &str) -> String {
    let num: f64 = match decimal.parse() {
        Ok(n) => n,
        Err(_) => return decimal.to_string(),
    };

    if num == num.trunc() {
        return format!("{}", num as i64);
    }

    let whole = num.trunc() as i64;
    let frac = num - whole as f64;

    for &(value, name) in COMMON_FRACTIONS {
        if (frac - value).abs() < FRACTION_TOLERANCE {
            if whole > 0 {
                return format!("{whole} {name}");
            }
            return name.to_string();
        }
    }

    let (numerator, denominator) = nearest_fraction(num);
    if denominator == 1 {
        return numerator.to_string();
    }
    if numerator > denominator {
        let whole = numerator / denominator;
        let remainder = numerator % denominator;
        if remainder == 0 {
            return whole.to_string();
        }
        return format!("{whole} {remainder}/{denominator}");
    }
    format!("{numerator}/{denominator}")
}

/// Best rational approximation of `num` with denominator <= 8, reduced to
/// lowest terms. Smaller denominators win ties.
fn nearest_fraction(num: f64) -> (i64, i64) {
    let mut best_num = num.round() as i64;
    let mut best_den = 1i64;
    let mut best_err = (num - best_num as f64).abs();

    for den in 2..=MAX_DENOMINATOR {
        let n = (num * den as f64).round() as i64;
        let err = (num - n as f64 / den as f64).abs();
        if err < best_err {
            best_num = n;
            best_den = den;
            best_err = err;
        }
    }

    let divisor = gcd(best_num.abs(), best_den);
    if divisor > 1 {
        (best_num / divisor, best_den / divisor)
    } else {
        (best_num, best_den)
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// Replace every decimal substring in an ingredient line with its fraction
/// form, leaving the rest of the text untouched.
pub fn clean_ingredient(ingredient: &str) -> String {
    DECIMAL
        .replace_all(ingredient, |caps: &regex::Captures| {
            decimal_to_fraction(&caps[0])
        })
        .into_owned()
}

/// Clean all ingredients in a list.
pub fn clean_ingredients(ingredients: &[String]) -> Vec<String> {
    ingredients.iter().map(|i| clean_ingredient(i)).collect()
}

/// Split instruction strings that concatenate multiple numbered steps
/// ("1. Mix 2. Bake") into discrete steps, stripping leading numerals.
///
/// Lines without embedded numbering pass through with only a leading-numeral
/// strip. If splitting leaves nothing usable, the original sequence is
/// returned so a non-empty input never becomes empty.
pub fn split_embedded_steps(instructions: &[String]) -> Vec<String> {
    if instructions.is_empty() {
        return Vec::new();
    }

    let mut cleaned = Vec::new();
    for step in instructions {
        if EMBEDDED_STEPS.is_match(step) {
            for part in split_before(step, &STEP_MARKER) {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                let text = LEADING_STEP_NUMBER.replace(part, "");
                let text = text.trim();
                if !text.is_empty() {
                    cleaned.push(text.to_string());
                }
            }
        } else {
            let text = LEADING_STEP_NUMBER.replace(step.trim(), "");
            let text = text.trim();
            if !text.is_empty() {
                cleaned.push(text.to_string());
            }
        }
    }

    if cleaned.is_empty() {
        instructions.to_vec()
    } else {
        cleaned
    }
}

/// Normalize a record on its way out of the pipeline.
pub fn normalize_recipe(mut recipe: Recipe) -> Recipe {
    recipe.ingredients = clean_ingredients(&recipe.ingredients);
    recipe.instructions = split_embedded_steps(&recipe.instructions);
    recipe
}
