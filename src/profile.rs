//! Browser profile path resolution
//!
//! Profiles live under `<root>/Browser/Profiles/<family>/`, either one
//! `Shared` directory for all games or one directory per game named after
//! the game. Resolution is pure path construction; directories are created
//! by the launcher, not here.

use crate::browser::BrowserFamily;
use crate::config::WebGame;
use crate::identity;
use std::path::{Path, PathBuf};

/// Resolve where a browser profile lives.
///
/// Shared mode ignores the game entirely. Individual mode requires a game;
/// None signals the caller asked for an individual profile without one, or
/// that the game's folder name could not be derived.
pub fn resolve_profile_path(
    base_dir: &Path,
    family: BrowserFamily,
    shared: bool,
    game: Option<&WebGame>,
) -> Option<PathBuf> {
    let profiles = base_dir.join("Browser/Profiles").join(family.as_str());

    if shared {
        return Some(profiles.join("Shared"));
    }

    let game = game?;
    match identity::profile_folder_name(game) {
        Ok(folder) => Some(profiles.join(folder)),
        Err(e) => {
            eprintln!(
                "[webarcade] Cannot derive profile folder for '{}': {e}",
                game.name
            );
            None
        }
    }
}
