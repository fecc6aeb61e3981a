//! Network retrieval of page metadata and artwork
//!
//! All requests are blocking with fixed per-call timeouts. Page and
//! background fetches send a desktop User-Agent (some sites reject library
//! defaults); the favicon service gets the default agent. Failures never
//! propagate
//! to the enrichment pass: they are logged here and degrade to empty
//! metadata or an absent artifact.

use crate::cache::{self, ArtifactKind};
use crate::error::EnrichError;
use crate::metadata::{PageMetadata, extract};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
const FAVICON_SIZE: u32 = 128;

const PAGE_TIMEOUT: Duration = Duration::from_secs(10);
const IMAGE_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch a page and extract its description and og:image URL.
///
/// Any failure (timeout, DNS, non-2xx, transport) returns empty HTML and
/// empty metadata; the cause is only logged.
pub fn fetch_page_metadata(url: &str) -> (String, PageMetadata) {
    let bytes = match get_bytes(url, PAGE_TIMEOUT, Some(USER_AGENT)) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("[webarcade] Failed to fetch metadata for {url}: {e}");
            return (String::new(), PageMetadata::default());
        }
    };

    let html = String::from_utf8_lossy(&bytes).into_owned();
    let meta = PageMetadata {
        description: extract::extract_description(&html),
        og_image_url: extract::extract_og_image(&html),
    };
    (html, meta)
}

/// Materialize the favicon for a game URL via the cache.
///
/// The icon comes from a favicon rendering service parameterized by the
/// URL's host, so this needs only the URL, not the page HTML.
pub fn resolve_favicon(url: &str, identifier: &str, icons_dir: &Path) -> Option<PathBuf> {
    let host = match Url::parse(url) {
        Ok(parsed) => parsed.host_str().map(str::to_string),
        Err(e) => {
            eprintln!("[webarcade] Bad game URL {url} ({identifier}): {e}");
            return None;
        }
    };
    let Some(host) = host else {
        eprintln!("[webarcade] Game URL {url} ({identifier}) has no host, skipping favicon");
        return None;
    };

    // The favicon service accepts the default agent; only real sites get
    // the spoofed one.
    let favicon_url = format!("{FAVICON_SERVICE}?domain={host}&sz={FAVICON_SIZE}");
    match cache::get_or_fetch(icons_dir, identifier, ArtifactKind::Favicon, || {
        get_bytes(&favicon_url, PAGE_TIMEOUT, None)
    }) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("[webarcade] Failed to download favicon for {url} ({identifier}): {e}");
            None
        }
    }
}

/// Materialize the background image declared by a page's og:image tag via
/// the cache. Returns None without fetching when the page declared no image.
pub fn resolve_background_image(
    og_image_url: &str,
    base_url: &str,
    identifier: &str,
    backgrounds_dir: &Path,
) -> Option<PathBuf> {
    if og_image_url.is_empty() {
        return None;
    }

    let image_url = match normalize_image_url(og_image_url, base_url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("[webarcade] Bad og:image URL {og_image_url} ({identifier}): {e}");
            return None;
        }
    };

    match cache::get_or_fetch(backgrounds_dir, identifier, ArtifactKind::Background, || {
        get_bytes(&image_url, IMAGE_TIMEOUT, Some(USER_AGENT))
    }) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("[webarcade] Failed to download background from {image_url} ({identifier}): {e}");
            None
        }
    }
}

/// Resolve a possibly-relative image URL against the page it came from.
///
/// Absolute URLs pass through; protocol-relative URLs inherit the base
/// scheme; root-relative paths inherit scheme and host; everything else
/// resolves per standard URL rules.
pub fn normalize_image_url(image_url: &str, base_url: &str) -> Result<String, EnrichError> {
    if image_url.starts_with("http://") || image_url.starts_with("https://") {
        return Ok(image_url.to_string());
    }

    let base = Url::parse(base_url)
        .map_err(|e| EnrichError::Parse(format!("bad base URL {base_url}: {e}")))?;

    if let Some(rest) = image_url.strip_prefix("//") {
        return Ok(format!("{}://{}", base.scheme(), rest));
    }

    if image_url.starts_with('/') {
        let host = base
            .host_str()
            .ok_or_else(|| EnrichError::Parse(format!("base URL {base_url} has no host")))?;
        return Ok(format!("{}://{}{}", base.scheme(), host, image_url));
    }

    let joined = base
        .join(image_url)
        .map_err(|e| EnrichError::Parse(format!("cannot resolve {image_url} against {base_url}: {e}")))?;
    Ok(joined.to_string())
}

fn build_request(
    client: &reqwest::blocking::Client,
    url: &str,
    user_agent: Option<&str>,
) -> reqwest::blocking::RequestBuilder {
    let request = client.get(url);
    match user_agent {
        Some(ua) => request.header("User-Agent", ua),
        None => request,
    }
}

fn get_bytes(url: &str, timeout: Duration, user_agent: Option<&str>) -> Result<Vec<u8>, EnrichError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| EnrichError::Fetch(e.to_string()))?;

    let response = build_request(&client, url, user_agent)
        .send()
        .map_err(|e| EnrichError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(EnrichError::Fetch(format!("HTTP {}", response.status())));
    }

    let bytes = response
        .bytes()
        .map_err(|e| EnrichError::Fetch(e.to_string()))?;
    Ok(bytes.to_vec())
}
