//! Batch enrichment pass
//!
//! For every configured game: derive its identifier, fetch the page for
//! description and og:image, materialize favicon and background artwork
//! through the cache, and resolve the browser profile path. One request at a
//! time, blocking; a failure on any step leaves that field empty and moves
//! on — it never aborts the rest of the pass.

use crate::browser::BrowserFamily;
use crate::config::ArcadeConfig;
use crate::{identity, metadata, profile};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the pass produces for one game. Consumers treat None as
/// "artwork/profile not available this pass"; cache misses are retried on
/// the next pass.
pub struct EnrichedGame {
    pub name: String,
    pub url: String,
    pub identifier: String,
    pub description: String,
    pub icon_path: Option<PathBuf>,
    pub background_path: Option<PathBuf>,
    pub profile_path: Option<PathBuf>,
    pub installed: bool,
}

pub fn enrich_all(cfg: &ArcadeConfig, data_root: &Path) -> Vec<EnrichedGame> {
    let icons_dir = data_root.join("Browser/Icons");
    let backgrounds_dir = data_root.join("Browser/Backgrounds");
    for dir in [&icons_dir, &backgrounds_dir] {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("[webarcade] Failed to create {}: {e}", dir.display());
        }
    }

    let family = BrowserFamily::detect(&cfg.browser_executable_path);
    let installed = Path::new(&cfg.browser_executable_path).exists();

    let mut games = Vec::new();

    for game in &cfg.games {
        let identifier = match identity::derive_identifier(&game.url) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("[webarcade] Skipping '{}': {e}", game.name);
                continue;
            }
        };

        println!("[webarcade] Enriching '{}' ({})", game.name, game.url);

        let (_html, meta) = metadata::fetch_page_metadata(&game.url);
        let icon_path = metadata::resolve_favicon(&game.url, &identifier, &icons_dir);
        let background_path = metadata::resolve_background_image(
            &meta.og_image_url,
            &game.url,
            &identifier,
            &backgrounds_dir,
        );
        let profile_path =
            profile::resolve_profile_path(data_root, family, cfg.use_shared_profile, Some(game));

        games.push(EnrichedGame {
            name: game.name.clone(),
            url: game.url.clone(),
            identifier,
            description: meta.description,
            icon_path,
            background_path,
            profile_path,
            installed,
        });
    }

    games
}
