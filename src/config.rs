//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output file configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Default marker geometry and appearance (used when CLI flags are unset).
    #[serde(default)]
    pub marker: MarkerConfig,
}

/// Output file configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Path the annotated frame is written to.
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: "images/last.png".to_string() }
    }
}

/// Default marker values from the config file.
#[derive(Debug, Deserialize)]
pub struct MarkerConfig {
    /// Top-left corner as `x,y`.
    pub top_left: String,
    /// Bottom-right corner as `x,y`.
    pub bottom_right: String,
    /// Stroke color as `r,g,b`.
    pub color: String,
    /// Stroke thickness in pixels.
    pub thickness: u32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            top_left: "0,0".to_string(),
            bottom_right: "50,50".to_string(),
            color: "255,0,0".to_string(),
            thickness: 5,
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `FRAMEMARK_CONFIG` environment variable
/// 3. `~/.config/framemark/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("FRAMEMARK_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/framemark/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/framemark/config.toml")
    } else {
        PathBuf::from("framemark.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.output.path, "images/last.png");
        assert_eq!(config.marker.top_left, "0,0");
        assert_eq!(config.marker.bottom_right, "50,50");
        assert_eq!(config.marker.color, "255,0,0");
        assert_eq!(config.marker.thickness, 5);
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.output.path, "images/last.png");
    }

    #[test]
    fn load_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[output]
path = "captures/frame.png"

[marker]
top_left = "5,5"
bottom_right = "100,100"
color = "0,255,0"
thickness = 3
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output.path, "captures/frame.png");
        assert_eq!(config.marker.top_left, "5,5");
        assert_eq!(config.marker.bottom_right, "100,100");
        assert_eq!(config.marker.color, "0,255,0");
        assert_eq!(config.marker.thickness, 3);
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\npath = \"out.png\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output.path, "out.png");
        assert_eq!(config.marker.thickness, 5);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
