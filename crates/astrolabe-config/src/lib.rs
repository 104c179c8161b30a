use astrolabe::chart::ChartSettings;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    wheel: Option<ChartSettings>,
}

/// Try common relative paths for `configs/wheel.toml`.
pub fn read_wheel_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/wheel.toml", "../../configs/wheel.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("Loaded wheel settings from {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load wheel.toml from {:?}", paths);
}

/// Parse the `[wheel]` table; absent keys keep their defaults.
pub fn parse_chart_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse wheel.toml: {e}"))?;
    let settings = root.wheel.unwrap_or_default();
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid [wheel] settings: {e}"))?;
    Ok(settings)
}

pub fn load_chart_settings() -> anyhow::Result<ChartSettings> {
    parse_chart_settings(&read_wheel_toml_text()?)
}

pub fn load_chart_settings_from(path: &Path) -> anyhow::Result<ChartSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_chart_settings(&text)
}

/// Settings from `configs/wheel.toml`, or the defaults when no file is found.
pub fn load_chart_settings_or_default() -> anyhow::Result<ChartSettings> {
    match read_wheel_toml_text() {
        Ok(text) => parse_chart_settings(&text),
        Err(e) => {
            log::info!("{e}; using default wheel settings");
            Ok(ChartSettings::default())
        }
    }
}
