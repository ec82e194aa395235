//! View configuration
//!
//! Only the node count and the two colors are configurable. In TOML:
//!
//! ```toml
//! node_count = 5
//! line_color = "#0D47A1"
//! background_color = "#BDBDBD"
//! ```

use foldline_core::Color;
use foldline_paint::FoldStyle;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};

pub const DEFAULT_NODE_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub node_count: usize,
    #[serde(with = "hex_color")]
    pub line_color: Color,
    #[serde(with = "hex_color")]
    pub background_color: Color,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let style = FoldStyle::default();
        Self {
            node_count: DEFAULT_NODE_COUNT,
            line_color: style.line_color,
            background_color: style.background_color,
        }
    }
}

impl ViewConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ViewConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(ViewError::InvalidNodeCount(self.node_count));
        }
        Ok(())
    }

    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    pub fn with_line_color(mut self, hex: &str) -> Result<Self> {
        self.line_color = Color::parse_hex(hex)?;
        Ok(self)
    }

    pub fn with_background_color(mut self, hex: &str) -> Result<Self> {
        self.background_color = Color::parse_hex(hex)?;
        Ok(self)
    }

    pub fn style(&self) -> FoldStyle {
        FoldStyle::new(self.line_color, self.background_color)
    }
}

/// Colors as `#RRGGBB` strings
mod hex_color {
    use foldline_core::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s).map_err(de::Error::custom)
    }
}
