use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Upper bound for `item_spacing` / `line_spacing` (pixels).
/// Keeps every line extent computation comfortably inside `u32`.
pub const MAX_SPACING: u32 = u16::MAX as u32;

/// Axis along which a flow layout primarily extends.
///   - `Horizontal`: items advance left-to-right and wrap into rows stacked downwards
///   - `Vertical`: items advance top-to-bottom and wrap into columns stacked rightwards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrowDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl GrowDirection {
    /// Raw tag used by callers that carry the direction as an integer.
    pub fn tag(self) -> u8 {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Horizontal),
            1 => Some(Self::Vertical),
            _ => None,
        }
    }
}

impl FromStr for GrowDirection {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "horizontal" | "row" | "rows" => Ok(Self::Horizontal),
            "v" | "vertical" | "column" | "columns" => Ok(Self::Vertical),
            _ => Err(()),
        }
    }
}

/// Cross-axis alignment of an item inside its line.
///
/// For a horizontal list the cross axis is vertical (the row height);
/// for a vertical list it is horizontal (the column width).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    /// Take the full line thickness.
    Stretch,
}

impl FromStr for Align {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" | "top" | "left" => Ok(Self::Start),
            "center" | "centre" | "middle" => Ok(Self::Center),
            "end" | "bottom" | "right" => Ok(Self::End),
            "stretch" | "fill" => Ok(Self::Stretch),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacerConfig {
    /// Which strategy the factory builds.
    #[serde(default)]
    pub direction: GrowDirection,
    /// Items per line before a forced wrap. 0 = wrap on available space only.
    #[serde(default)]
    pub parallel_items: u32,
    /// Pixels between neighbouring items of one line.
    #[serde(default)]
    pub item_spacing: u32,
    /// Pixels between consecutive lines.
    #[serde(default)]
    pub line_spacing: u32,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            direction: GrowDirection::Horizontal,
            parallel_items: 0,
            item_spacing: 0,
            line_spacing: 0,
        }
    }
}

impl PlacerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if either spacing exceeds [`MAX_SPACING`].
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::PlacerError;

        if self.item_spacing > MAX_SPACING {
            return Err(PlacerError::InvalidConfig(format!(
                "item_spacing ({}) exceeds the maximum of {}",
                self.item_spacing, MAX_SPACING
            )));
        }
        if self.line_spacing > MAX_SPACING {
            return Err(PlacerError::InvalidConfig(format!(
                "line_spacing ({}) exceeds the maximum of {}",
                self.line_spacing, MAX_SPACING
            )));
        }
        Ok(())
    }
}

/// Builder for `PlacerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PlacerConfigBuilder {
    cfg: PlacerConfig,
}

impl PlacerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PlacerConfig::default(),
        }
    }
    pub fn direction(mut self, v: GrowDirection) -> Self {
        self.cfg.direction = v;
        self
    }
    pub fn parallel_items(mut self, v: u32) -> Self {
        self.cfg.parallel_items = v;
        self
    }
    pub fn item_spacing(mut self, v: u32) -> Self {
        self.cfg.item_spacing = v;
        self
    }
    pub fn line_spacing(mut self, v: u32) -> Self {
        self.cfg.line_spacing = v;
        self
    }
    pub fn build(self) -> PlacerConfig {
        self.cfg
    }
}

impl PlacerConfig {
    /// Create a fluent builder for `PlacerConfig`.
    pub fn builder() -> PlacerConfigBuilder {
        PlacerConfigBuilder::new()
    }
}
