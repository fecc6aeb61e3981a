//! Stable game identity derivation
//!
//! A game's identity is a content hash of its URL, so renaming a game never
//! changes its cached artwork or its browser profile. Everything here is
//! pure; no filesystem or network access.

use crate::config::WebGame;
use crate::error::EnrichError;
use sha2::{Digest, Sha256};

/// Number of alphanumeric characters of the display name kept in a profile
/// folder name.
const FOLDER_NAME_CHARS: usize = 10;

/// Number of identifier hex characters appended to a profile folder name to
/// keep same-named games apart.
const FOLDER_ID_CHARS: usize = 5;

/// Derive the stable identifier for a game URL: lowercase-hex SHA-256 over
/// the URL's UTF-8 bytes.
pub fn derive_identifier(url: &str) -> Result<String, EnrichError> {
    if url.is_empty() {
        return Err(EnrichError::EmptyInput);
    }
    Ok(format!("{:x}", Sha256::digest(url.as_bytes())))
}

/// Build the filesystem-safe profile folder name for a game.
///
/// Takes up to the first 10 alphanumeric characters of the display name
/// (everything else dropped, not replaced), then `-`, then the first 5 hex
/// characters of the identifier. A name with no alphanumeric characters at
/// all falls back to the literal "game".
pub fn profile_folder_name(game: &WebGame) -> Result<String, EnrichError> {
    let identifier = derive_identifier(&game.url)?;

    let prefix: String = game
        .name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .take(FOLDER_NAME_CHARS)
        .collect();
    let prefix = if prefix.is_empty() { "game" } else { prefix.as_str() };

    Ok(format!("{}-{}", prefix, &identifier[..FOLDER_ID_CHARS]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, url: &str) -> WebGame {
        WebGame {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    // ── derive_identifier ───────────────────────────────────────

    #[test]
    fn identifier_is_sha256_hex() {
        let id = derive_identifier("https://cool.example/play").unwrap();
        assert_eq!(
            id,
            "5784da12ef769fbd649bd990e9e45b90e6b90c59df8e7740b9945cf33f7a2169"
        );
    }

    #[test]
    fn identifier_is_deterministic() {
        let a = derive_identifier("https://example.com/game").unwrap();
        let b = derive_identifier("https://example.com/game").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn identifier_differs_per_url() {
        let urls = [
            "https://example.com/game",
            "https://example.com/game2",
            "https://other.example/",
            "https://a.example/x",
            "https://b.example/y",
        ];
        let ids: Vec<String> = urls
            .iter()
            .map(|u| derive_identifier(u).unwrap())
            .collect();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                assert_ne!(ids[i], ids[j], "{} vs {}", urls[i], urls[j]);
            }
        }
    }

    #[test]
    fn identifier_is_lowercase_and_fixed_length() {
        let id = derive_identifier("https://example.com/game").unwrap();
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn empty_url_is_rejected() {
        assert!(matches!(
            derive_identifier(""),
            Err(EnrichError::EmptyInput)
        ));
    }

    // ── profile_folder_name ─────────────────────────────────────

    #[test]
    fn folder_name_truncates_and_appends_id() {
        let folder = profile_folder_name(&game("Cool Game!!", "https://cool.example/play")).unwrap();
        assert_eq!(folder, "CoolGame-5784d");
    }

    #[test]
    fn folder_name_keeps_at_most_ten_alnum_chars() {
        let folder =
            profile_folder_name(&game("ABCDEFGHIJKLMNOP", "https://example.com/game")).unwrap();
        assert_eq!(folder, "ABCDEFGHIJ-9795f");
    }

    #[test]
    fn folder_name_falls_back_for_symbol_only_names() {
        let folder = profile_folder_name(&game("!!! ---", "https://example.com/game")).unwrap();
        assert_eq!(folder, "game-9795f");
    }

    #[test]
    fn folder_name_ignores_rename() {
        let a = profile_folder_name(&game("Old Name", "https://example.com/game")).unwrap();
        let b = profile_folder_name(&game("New Name", "https://example.com/game")).unwrap();
        assert_eq!(&a[a.len() - 5..], &b[b.len() - 5..]);
    }

    #[test]
    fn same_name_different_url_gets_distinct_folders() {
        let a = profile_folder_name(&game("Duplicate", "https://a.example/x")).unwrap();
        let b = profile_folder_name(&game("Duplicate", "https://b.example/y")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn folder_name_requires_url() {
        assert!(profile_folder_name(&game("Some Game", "")).is_err());
    }
}
