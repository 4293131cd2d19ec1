//! Extraction orchestrator: one fetch, then the ordered parser chain.
//!
//! Stages: URL guard, fetch, known-site parser, schema fallback, blog
//! fallback, generic fallback. The first stage to produce a record wins;
//! every outgoing record is normalized.

use log::{debug, warn};
use scraper::Html;
use url::Url;

use crate::error::ExtractError;
use crate::extractors::{fallback_chain, ParsingContext};
use crate::fetch::{FetchError, Fetcher};
use crate::known_sites::{ScraperError, SiteRegistry, SiteScraper};
use crate::model::{Recipe, DEFAULT_TITLE};
use crate::normalize::normalize_recipe;

/// Run one extraction attempt end to end.
///
/// Exactly one fetch happens per call; retries are the caller's business.
pub async fn run(
    url: &str,
    fetcher: &dyn Fetcher,
    registry: &dyn SiteRegistry,
) -> Result<Recipe, ExtractError> {
    if !is_valid_url(url) {
        return Err(ExtractError::InvalidUrl);
    }

    let html = fetcher.fetch(url).await.map_err(|err| match err {
        FetchError::Timeout => ExtractError::Timeout,
        FetchError::Connection(detail) => {
            warn!("fetch failed for {url}: {detail}");
            ExtractError::Connection
        }
        FetchError::Status(code) => ExtractError::HttpStatus(code),
    })?;

    match registry.resolve(&html, url) {
        Ok(scraper) => {
            debug!("known-site parser matched {url}");
            return Ok(normalize_recipe(record_from_scraper(scraper.as_ref(), url)));
        }
        Err(ScraperError::SiteNotSupported) => {
            debug!("no known-site parser for {url}, trying fallbacks");
        }
        // a broken site parser is a bug to surface, not something the
        // fallback chain should paper over
        Err(ScraperError::Internal(detail)) => {
            warn!("known-site parser failed for {url}: {detail}");
            return Err(ExtractError::Extraction);
        }
    }

    let document = Html::parse_document(&html);
    let context = ParsingContext { url, document: &document };

    for extractor in fallback_chain() {
        if let Some(recipe) = extractor.extract(&context) {
            debug!("{} extractor produced a record for {url}", extractor.name());
            return Ok(normalize_recipe(recipe));
        }
        debug!("{} extractor found nothing for {url}", extractor.name());
    }

    Err(ExtractError::UnsupportedSite)
}

/// Basic well-formedness: parses, http(s) scheme, has a host.
fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some()
        }
        Err(_) => false,
    }
}

/// Assemble a record from a site-specific scraper, tolerating per-field
/// failures: each accessor that errors or comes back empty just leaves its
/// field at the default.
fn record_from_scraper(scraper: &dyn SiteScraper, url: &str) -> Recipe {
    let mut recipe = Recipe::new(url);
    recipe.title = scraper
        .title()
        .ok()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    recipe.image = scraper.image().ok().filter(|i| !i.trim().is_empty());
    recipe.prep_time = scraper.prep_time().ok();
    recipe.cook_time = scraper.cook_time().ok();
    recipe.total_time = scraper.total_time().ok();
    recipe.servings = scraper.yields().ok().filter(|s| !s.trim().is_empty());
    recipe.ingredients = scraper.ingredients().unwrap_or_default();
    recipe.instructions = scraper.instructions().unwrap_or_default();
    recipe
}
