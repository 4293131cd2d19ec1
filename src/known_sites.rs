//! Seam for site-specific scrapers.
//!
//! The pipeline asks a [`SiteRegistry`] for a parser before falling back to
//! the heuristic chain. Each scraper exposes independently-fallible field
//! accessors: a missing title or time degrades that one field, never the
//! whole record.

use thiserror::Error;

/// A field the scraper could not produce. Carries no detail on purpose;
/// the pipeline treats any accessor failure as "field absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUnavailable;

pub type FieldResult<T> = Result<T, FieldUnavailable>;

/// Why a registry produced no scraper for a page.
#[derive(Error, Debug)]
pub enum ScraperError {
    /// No hand-tuned parser exists for this site; the caller should try
    /// the fallback chain.
    #[error("no site-specific parser for this site")]
    SiteNotSupported,

    /// The parser exists but broke; the caller must not mask this by
    /// falling through.
    #[error("site parser failed: {0}")]
    Internal(String),
}

/// A hand-tuned parser bound to one fetched page.
pub trait SiteScraper {
    fn title(&self) -> FieldResult<String>;
    fn image(&self) -> FieldResult<String>;
    fn prep_time(&self) -> FieldResult<u32>;
    fn cook_time(&self) -> FieldResult<u32>;
    fn total_time(&self) -> FieldResult<u32>;
    fn yields(&self) -> FieldResult<String>;
    fn ingredients(&self) -> FieldResult<Vec<String>>;
    fn instructions(&self) -> FieldResult<Vec<String>>;
}

/// Resolves a fetched page to a site-specific scraper, if one exists.
pub trait SiteRegistry: Send + Sync {
    fn resolve(&self, html: &str, url: &str) -> Result<Box<dyn SiteScraper>, ScraperError>;
}

/// Default registry. Ships without any site parsers, so every lookup
/// reports [`ScraperError::SiteNotSupported`] and extraction proceeds
/// straight to the fallback chain.
#[derive(Debug, Default)]
pub struct BuiltinScrapers;

impl SiteRegistry for BuiltinScrapers {
    fn resolve(&self, _html: &str, _url: &str) -> Result<Box<dyn SiteScraper>, ScraperError> {
        Err(ScraperError::SiteNotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_declines_everything() {
        let registry = BuiltinScrapers;
        let result = registry.resolve("<html></html>", "https://example.com/pie");
        assert!(matches!(result, Err(ScraperError::SiteNotSupported)));
    }
}
