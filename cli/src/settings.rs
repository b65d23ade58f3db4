use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use delver_core::RoomSettings;

pub(crate) fn load(path: &Path) -> Result<RoomSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read settings from {}", path.display()))?;
    parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
}

pub(crate) fn parse(text: &str) -> Result<RoomSettings> {
    let settings = toml::from_str(text)?;
    Ok(settings)
}
