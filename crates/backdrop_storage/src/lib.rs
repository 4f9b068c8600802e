use backdrop_core::{FieldConfigOverrides, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Persisted user preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: Theme,
}

/// Save the theme preference to disk as bincode
pub fn save_theme(theme: Theme, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create dir: {e}"))?;
    }
    let data = bincode::serialize(&ThemePreference { theme })
        .map_err(|e| format!("Serialize error: {e}"))?;
    fs::write(path, data).map_err(|e| format!("Write error: {e}"))?;
    Ok(())
}

/// Load the theme preference. A missing file means no preference was stored.
pub fn load_theme(path: &Path) -> Result<Option<Theme>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read(path).map_err(|e| format!("Read error: {e}"))?;
    let pref: ThemePreference =
        bincode::deserialize(&data).map_err(|e| format!("Deserialize error: {e}"))?;
    Ok(Some(pref.theme))
}

/// Stored preference wins; otherwise follow the OS
pub fn resolve_theme(saved: Option<Theme>, os_prefers_dark: bool) -> Theme {
    saved.unwrap_or(Theme::from_dark(os_prefers_dark))
}

/// Read config overrides from a JSON file. A missing file means no overrides.
pub fn load_overrides(path: &Path) -> Result<FieldConfigOverrides, String> {
    if !path.exists() {
        return Ok(FieldConfigOverrides::default());
    }
    let json = fs::read_to_string(path).map_err(|e| format!("Read error: {e}"))?;
    parse_overrides(&json)
}

pub fn parse_overrides(json: &str) -> Result<FieldConfigOverrides, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid config overrides: {e}"))
}
