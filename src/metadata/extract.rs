//! Meta-tag extraction from raw HTML (no I/O)
//!
//! Deliberately not a real HTML parser: only the two common meta-tag
//! attribute orders are recognized, matched case-insensitively over the raw
//! text. Anything else, including arbitrarily malformed tag soup, yields an
//! empty string rather than an error.

use regex::Regex;
use std::sync::LazyLock;

static DESC_NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta\s+(?:name|property)=["'](?:description|og:description)["']\s+content=["']([^"']*)["']"#,
    )
    .unwrap()
});

static DESC_CONTENT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta\s+content=["']([^"']*)["']\s+(?:name|property)=["'](?:description|og:description)["']"#,
    )
    .unwrap()
});

static OG_IMAGE_PROPERTY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+property=["']og:image["']\s+content=["']([^"']*)["']"#).unwrap()
});

static OG_IMAGE_CONTENT_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+content=["']([^"']*)["']\s+property=["']og:image["']"#).unwrap()
});

/// Extract the page description from a `description` or `og:description`
/// meta tag, trying `name/content` order first, then `content/name`.
/// First match wins. Empty string when no tag matches.
pub fn extract_description(html: &str) -> String {
    first_capture(&[&DESC_NAME_FIRST, &DESC_CONTENT_FIRST], html)
}

/// Extract the `og:image` URL declared by the page, both attribute orders.
/// Empty string when no tag matches.
pub fn extract_og_image(html: &str) -> String {
    first_capture(&[&OG_IMAGE_PROPERTY_FIRST, &OG_IMAGE_CONTENT_FIRST], html)
}

fn first_capture(patterns: &[&Regex], html: &str) -> String {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(html)
            && let Some(value) = caps.get(1)
        {
            return decode_entities(value.as_str());
        }
    }
    String::new()
}

/// Decode the common HTML entities found in meta-tag content: the basic
/// named set plus decimal and hex numeric references. Unrecognized entities
/// pass through verbatim.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        // Entity names are short; don't scan far for the terminator.
        let end = tail
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);

        if let Some(end) = end
            && let Some(decoded) = decode_one(&tail[1..end])
        {
            out.push(decoded);
            rest = &tail[end + 1..];
        } else {
            out.push('&');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

fn decode_one(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                num.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
