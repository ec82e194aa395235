//! Configuration file handling
//!
//! The view reads `foldline.toml` from the working directory, or the file
//! passed with `--config`. Flags given on the command line override values
//! from the file.

use anyhow::{Context, Result};
use foldline_view::ViewConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE: &str = "foldline.toml";

/// Load an explicit config file. A missing file is an error.
pub fn load_file(path: &Path) -> Result<ViewConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = ViewConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load `foldline.toml` from `dir`, falling back to defaults when absent
pub fn load_from_dir(dir: &Path) -> Result<ViewConfig> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        load_file(&path)
    } else {
        debug!(dir = %dir.display(), "no {} found, using defaults", CONFIG_FILE);
        Ok(ViewConfig::default())
    }
}

/// Values from the command line that take precedence over the file
#[derive(Debug, Default)]
pub struct Overrides {
    pub node_count: Option<usize>,
    pub line_color: Option<String>,
    pub background_color: Option<String>,
}

impl Overrides {
    pub fn apply(&self, mut config: ViewConfig) -> Result<ViewConfig> {
        if let Some(count) = self.node_count {
            config = config.with_node_count(count);
        }
        if let Some(hex) = &self.line_color {
            config = config
                .with_line_color(hex)
                .with_context(|| format!("Invalid line color '{}'", hex))?;
        }
        if let Some(hex) = &self.background_color {
            config = config
                .with_background_color(hex)
                .with_context(|| format!("Invalid background color '{}'", hex))?;
        }
        config.validate().context("Invalid view configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldline_core::Color;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("foldline-cli-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_in_dir_uses_defaults() {
        let dir = scratch_dir("empty");
        assert_eq!(load_from_dir(&dir).unwrap(), ViewConfig::default());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_loads_file_from_dir() {
        let dir = scratch_dir("present");
        fs::write(dir.join(CONFIG_FILE), "node_count = 7\n").unwrap();
        assert_eq!(load_from_dir(&dir).unwrap().node_count, 7);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let err = load_file(Path::new("/nonexistent/foldline.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            node_count: Some(3),
            line_color: Some("#FF0000".to_string()),
            background_color: None,
        };
        let config = overrides.apply(ViewConfig::default()).unwrap();
        assert_eq!(config.node_count, 3);
        assert_eq!(config.line_color, Color::from_hex(0xFF0000));
        assert_eq!(config.background_color, Color::from_hex(0xBDBDBD));
    }

    #[test]
    fn test_overrides_reject_zero_nodes() {
        let overrides = Overrides {
            node_count: Some(0),
            ..Default::default()
        };
        assert!(overrides.apply(ViewConfig::default()).is_err());
    }
}
