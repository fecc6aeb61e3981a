use crate::config::types::ArcadeConfig;
use crate::paths::PATH_ARCADE;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> ArcadeConfig {
    load_cfg_from(&PATH_ARCADE)
}

fn load_cfg_from(root: &Path) -> ArcadeConfig {
    let path = root.join("settings.json");

    if let Ok(file) = File::open(path)
        && let Ok(config) = serde_json::from_reader::<_, ArcadeConfig>(BufReader::new(file))
    {
        return config;
    }

    // Return default settings if file doesn't exist or has error
    ArcadeConfig::default()
}

pub fn save_cfg(config: &ArcadeConfig) -> Result<(), Box<dyn Error>> {
    save_cfg_to(&PATH_ARCADE, config)
}

fn save_cfg_to(root: &Path, config: &ArcadeConfig) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(root)?;
    let path = root.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
