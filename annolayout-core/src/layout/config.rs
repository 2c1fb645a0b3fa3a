use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::core::AxisKind;
use crate::foundation::error::{LayoutError, LayoutResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rendering constants supplied by the caller.
///
/// Nothing here is derived from span data; the engine never looks these up from
/// ambient state.
pub struct LayoutConfig {
    /// Height of one row in pixels.
    #[serde(default = "default_row_height")]
    pub row_height: u32,
    /// Vertical padding added once to the total height.
    #[serde(default = "default_padding")]
    pub padding: u32,
    /// Pixels per coordinate; `None` uses [`AxisKind::default_pixel_scale`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_scale: Option<f64>,
}

fn default_row_height() -> u32 {
    24
}

fn default_padding() -> u32 {
    16
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: default_row_height(),
            padding: default_padding(),
            pixel_scale: None,
        }
    }
}

impl LayoutConfig {
    /// Load a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LayoutError::validation(format!("open layout config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader(r: impl Read) -> LayoutResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| LayoutError::serde(format!("layout config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> LayoutResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Check value ranges.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.row_height == 0 {
            return Err(LayoutError::validation("row_height must be > 0"));
        }
        if let Some(scale) = self.pixel_scale
            && (!scale.is_finite() || scale <= 0.0)
        {
            return Err(LayoutError::validation(
                "pixel_scale must be finite and > 0 when set",
            ));
        }
        Ok(())
    }

    /// Pixels per coordinate on `axis`.
    pub fn pixel_scale_for(&self, axis: AxisKind) -> f64 {
        self.pixel_scale.unwrap_or_else(|| axis.default_pixel_scale())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
