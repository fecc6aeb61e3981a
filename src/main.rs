mod browser;
mod cache;
mod config;
mod enrich;
mod error;
mod identity;
mod metadata;
mod paths;
mod profile;

use crate::browser::{BrowserFamily, browser_command};
use crate::config::{ArcadeConfig, load_cfg, save_cfg};
use crate::paths::PATH_ARCADE;
use std::error::Error;

const USAGE_TEXT: &str = "webarcade - launch websites as games in isolated browser profiles

Usage:
  webarcade              Enrich all configured games (metadata, artwork, profiles)
  webarcade --play NAME  Launch a configured game in its browser profile
  webarcade --help       Show this help

Games are configured in settings.json under the webarcade data directory.";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{USAGE_TEXT}");
        std::process::exit(0);
    }

    let cfg = load_cfg();

    if let Some(pos) = args.iter().position(|arg| arg == "--play") {
        let Some(name) = args.get(pos + 1) else {
            eprintln!("[webarcade] --play requires a game name");
            std::process::exit(1);
        };
        if let Err(e) = play(&cfg, name) {
            eprintln!("[webarcade] Failed to launch '{name}': {e}");
            std::process::exit(1);
        }
        return;
    }

    if cfg.games.is_empty() {
        let settings_path = PATH_ARCADE.join("settings.json");

        // First run: write the defaults so there is a file to edit
        if !settings_path.exists()
            && let Err(e) = save_cfg(&cfg)
        {
            eprintln!("[webarcade] Failed to write default settings: {e}");
        }

        println!(
            "[webarcade] No games configured. Add entries to {}",
            settings_path.display()
        );
        return;
    }

    let games = enrich::enrich_all(&cfg, &PATH_ARCADE);

    for game in &games {
        println!("[webarcade] {} <{}> ({})", game.name, game.url, game.identifier);
        if !game.description.is_empty() {
            println!("[webarcade]   description: {}", game.description);
        }
        if let Some(icon) = &game.icon_path {
            println!("[webarcade]   icon: {}", icon.display());
        }
        if let Some(bg) = &game.background_path {
            println!("[webarcade]   background: {}", bg.display());
        }
        if let Some(profile) = &game.profile_path {
            println!("[webarcade]   profile: {}", profile.display());
        }
        if !game.installed {
            println!(
                "[webarcade]   browser not found at {}",
                cfg.browser_executable_path
            );
        }
    }
}

fn play(cfg: &ArcadeConfig, name: &str) -> Result<(), Box<dyn Error>> {
    let game = cfg
        .games
        .iter()
        .find(|g| g.name == name)
        .ok_or_else(|| format!("no game named '{name}'"))?;

    let family = BrowserFamily::detect(&cfg.browser_executable_path);
    let profile_dir =
        profile::resolve_profile_path(&PATH_ARCADE, family, cfg.use_shared_profile, Some(game))
            .ok_or("could not resolve a profile directory")?;

    // The resolver never touches the filesystem; the profile is created here
    // at launch time.
    std::fs::create_dir_all(&profile_dir)?;

    println!(
        "[webarcade] Launching '{}' with {} profile {}",
        game.name,
        family.as_str(),
        profile_dir.display()
    );

    browser_command(&cfg.browser_executable_path, family, &profile_dir, &game.url).spawn()?;
    Ok(())
}
