//! Scene configuration: which element to paint and what goes on it.
//!
//! The defaults reproduce the stock scene: a blue background covering the
//! whole surface and a red 100×100 square at (100, 100). Every field can be
//! overridden from JSON; missing fields keep their defaults.

use crate::layout::SurfaceSize;
use crate::model::{Color, FillOp, Rect};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Identifier of the canvas element looked up in the host document.
pub const DEFAULT_CANVAS_ID: &str = "gameCanvas";

/// The fixed marker square.
pub const DEFAULT_MARKER: Rect = Rect::new(100.0, 100.0, 100.0, 100.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub canvas_id: String,
    /// Fills the whole surface first.
    pub background: Color,
    pub marker: Rect,
    pub marker_color: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            background: Color::BLUE,
            marker: DEFAULT_MARKER,
            marker_color: Color::RED,
        }
    }
}

impl SceneConfig {
    /// Parse a JSON scene config. Absent fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid scene config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.canvas_id.trim().is_empty() {
            return Err("invalid scene config: canvas_id must not be empty".to_string());
        }
        Ok(())
    }

    /// The paint plan for a surface of `size`, in paint order.
    ///
    /// The background always comes first so the marker stays visible.
    pub fn fill_ops(&self, size: SurfaceSize) -> SmallVec<[FillOp; 2]> {
        smallvec![
            FillOp {
                rect: Rect::new(0.0, 0.0, size.width as f64, size.height as f64),
                color: self.background,
            },
            FillOp {
                rect: self.marker,
                color: self.marker_color,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_stock_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.canvas_id, "gameCanvas");
        assert_eq!(config.background, Color::BLUE);
        assert_eq!(config.marker, Rect::new(100.0, 100.0, 100.0, 100.0));
        assert_eq!(config.marker_color, Color::RED);
    }

    #[test]
    fn fill_ops_background_first() {
        let ops = SceneConfig::default().fill_ops(SurfaceSize::new(640, 480));
        assert_eq!(ops.len(), 2);
        assert!(!ops.spilled());
        assert_eq!(ops[0].rect, Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(ops[0].color, Color::BLUE);
        assert_eq!(ops[1].rect, DEFAULT_MARKER);
        assert_eq!(ops[1].color, Color::RED);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SceneConfig::from_json(r#"{ "background": "black" }"#).unwrap();
        assert_eq!(config.background, Color::rgb8(0, 0, 0));
        assert_eq!(config.canvas_id, DEFAULT_CANVAS_ID);
        assert_eq!(config.marker_color, Color::RED);
    }

    #[test]
    fn full_json() {
        let json = r##"{
            "canvas_id": "stage",
            "background": "#222",
            "marker": { "x": 10, "y": 20, "width": 30, "height": 40 },
            "marker_color": "gold"
        }"##;
        let config = SceneConfig::from_json(json).unwrap();
        assert_eq!(config.canvas_id, "stage");
        assert_eq!(config.background, Color::rgb8(0x22, 0x22, 0x22));
        assert_eq!(config.marker, Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(config.marker_color, Color::rgb8(0xFF, 0xD7, 0x00));
    }

    #[test]
    fn rejects_bad_config() {
        assert!(SceneConfig::from_json(r#"{ "background": "bluish" }"#).is_err());
        assert!(SceneConfig::from_json(r#"{ "canvas_id": "  " }"#).is_err());
        assert!(SceneConfig::from_json(r#"{ "colour": "red" }"#).is_err());
        assert!(SceneConfig::from_json("not json").is_err());
    }
}
