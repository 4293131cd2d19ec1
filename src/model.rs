use serde::{Deserialize, Serialize};

/// Title used when a page yields no usable heading.
pub const DEFAULT_TITLE: &str = "Recipe";

/// Category stamped on every extracted record; categorization proper is the
/// caller's concern.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A structured recipe extracted from a web page.
///
/// Created fresh on every extraction and immutable once returned; all time
/// fields are whole minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub image: Option<String>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub total_time: Option<u32>,
    /// Yield as the source stated it ("4 servings", "6"); not normalized.
    pub servings: Option<String>,
    /// Source document order.
    pub ingredients: Vec<String>,
    /// One discrete step per entry.
    pub instructions: Vec<String>,
    pub source_url: String,
    pub category: String,
}

impl Recipe {
    /// An empty record pointing at `url`, ready for field-by-field fill-in.
    pub fn new(url: &str) -> Self {
        Recipe {
            title: DEFAULT_TITLE.to_string(),
            image: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            servings: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            source_url: url.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// True when the record carries no ingredient and no instruction text.
    pub fn is_empty(&self) -> bool {
        self.ingredients.iter().all(|i| i.trim().is_empty())
            && self.instructions.iter().all(|i| i.trim().is_empty())
    }

    /// Storage key derived from the title: lowercased, spaces to
    /// underscores, capped at 50 characters.
    pub fn id(&self) -> String {
        self.title
            .to_lowercase()
            .replace(' ', "_")
            .chars()
            .take(50)
            .collect()
    }
}
