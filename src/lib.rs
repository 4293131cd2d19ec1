//! Extract structured recipes from cooking-website URLs.
//!
//! A fetched page runs through an ordered chain of parsers: a site-specific
//! scraper when one exists, then Schema.org JSON-LD, then two heuristic
//! tiers that scan raw markup for ingredient- and instruction-shaped text.
//! The first stage to produce usable content wins, and every record is
//! normalized (decimal quantities to cooking fractions, run-on numbered
//! steps split apart) before it reaches the caller.

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod known_sites;
pub mod model;
pub mod normalize;
pub mod patterns;
pub mod pipeline;
pub mod store;

use std::time::Duration;

use crate::config::AppConfig;
use crate::fetch::PageFetcher;
use crate::known_sites::BuiltinScrapers;

pub use crate::error::ExtractError;
pub use crate::model::Recipe;

/// Extract a recipe from `url` using the configured timeout (15s unless
/// overridden via config file or environment).
pub async fn extract_recipe(url: &str) -> Result<Recipe, ExtractError> {
    let config = AppConfig::load().unwrap_or_default();
    extract_recipe_with_timeout(url, Duration::from_secs(config.timeout_secs)).await
}

/// Extract a recipe from `url` with an explicit fetch timeout.
pub async fn extract_recipe_with_timeout(
    url: &str,
    timeout: Duration,
) -> Result<Recipe, ExtractError> {
    let config = AppConfig::load().unwrap_or_default();
    let fetcher =
        PageFetcher::new(timeout, &config.user_agent).map_err(|_| ExtractError::Extraction)?;
    pipeline::run(url, &fetcher, &BuiltinScrapers).await
}
