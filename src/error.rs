use thiserror::Error;

/// Errors surfaced by a recipe extraction attempt.
///
/// Every variant renders as a message fit for end users; internal
/// diagnostic detail stays in the logs.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input failed basic URL syntax validation; no network call was made
    #[error("That doesn't look like a valid web address. Please paste the full URL including https://")]
    InvalidUrl,

    /// Network request exceeded its deadline
    #[error("The website took too long to respond. Please try again.")]
    Timeout,

    /// Connection, DNS, or other network-layer failure
    #[error("Couldn't reach that website. Please check the link and try again.")]
    Connection,

    /// Server answered with a non-success status
    #[error("The website returned an error (HTTP {0}). Please check the link and try again.")]
    HttpStatus(u16),

    /// No site-specific parser and every fallback came back empty
    #[error("This website isn't fully supported yet, and we couldn't find the recipe data. Try a different recipe site.")]
    UnsupportedSite,

    /// Catch-all for unexpected failures in fetch or known-site parsing
    #[error("Couldn't find a recipe on that page. Make sure you're pasting a link to a specific recipe, not just the homepage.")]
    Extraction,
}
