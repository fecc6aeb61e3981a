//! Browser family classification and launch command construction

use std::path::Path;
use std::process::Command;

/// The two browser families webarcade knows how to drive. They differ in
/// profile and window arguments, nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BrowserFamily {
    Chromium,
    Firefox,
}

impl BrowserFamily {
    /// Classify an executable path by name.
    ///
    /// Best-effort heuristic: a case-insensitive `firefox` or `mozilla`
    /// anywhere in the path means Firefox, everything else (including an
    /// empty path) defaults to Chromium. The binary itself is never
    /// inspected.
    pub fn detect(executable_path: &str) -> Self {
        let lower = executable_path.to_lowercase();
        if lower.contains("firefox") || lower.contains("mozilla") {
            BrowserFamily::Firefox
        } else {
            BrowserFamily::Chromium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserFamily::Chromium => "Chromium",
            BrowserFamily::Firefox => "Firefox",
        }
    }
}

/// Build the command that opens a game in its own browser profile.
///
/// The caller creates the profile directory before spawning; Chromium would
/// create it on its own but Firefox refuses to start on a missing profile.
pub fn browser_command(
    executable: &str,
    family: BrowserFamily,
    profile_dir: &Path,
    url: &str,
) -> Command {
    let mut cmd = Command::new(executable);
    match family {
        BrowserFamily::Chromium => {
            cmd.arg(format!("--user-data-dir={}", profile_dir.display()))
                .arg(format!("--app={url}"));
        }
        BrowserFamily::Firefox => {
            cmd.arg("-profile")
                .arg(profile_dir)
                .arg("-no-remote")
                .arg("-new-window")
                .arg(url);
        }
    }
    cmd
}
