pub mod extract;
pub mod fetch;

// Re-export the fetcher surface used by the enrichment pass
pub use fetch::{fetch_page_metadata, resolve_background_image, resolve_favicon};

/// Metadata scraped from one page. Recomputed on every enrichment pass,
/// never persisted; both fields may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageMetadata {
    pub description: String,
    pub og_image_url: String,
}
