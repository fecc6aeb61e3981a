use serde::{Deserialize, Serialize};

/// A user-curated web game: an arbitrary URL treated as a launchable title.
///
/// The URL is the game's only durable identity input; the name is display
/// text and can be edited freely without affecting cached artwork or the
/// browser profile.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct WebGame {
    pub name: String,
    pub url: String,
}

/// Main application configuration
#[derive(Serialize, Deserialize, Clone)]
pub struct ArcadeConfig {
    /// Browser used to launch games, also classified into a family for
    /// launch arguments and profile layout
    #[serde(default = "default_browser_executable")]
    pub browser_executable_path: String,
    /// One shared profile for all games instead of one profile per game
    #[serde(default)]
    pub use_shared_profile: bool,
    #[serde(default)]
    pub games: Vec<WebGame>,
}

fn default_browser_executable() -> String {
    "/usr/bin/chromium".to_string()
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        ArcadeConfig {
            browser_executable_path: default_browser_executable(),
            use_shared_profile: false,
            games: Vec::new(),
        }
    }
}
