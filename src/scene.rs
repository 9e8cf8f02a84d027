//! Scene files: a JSON description of one grouped scatter
//!
//! ```json
//! {
//!   "series": [[[0, 0, 0], [1, 1, 1]], [[2, 0, 0], [3, 1, 0]]],
//!   "colors": { "palette": [[1, 0, 0, 1], [0, 1, 0, 1]] },
//!   "point_width": 8,
//!   "line_width": 2,
//!   "transform": [{ "rotate": { "angle_deg": 30, "axis": [0, 0, 1] } }],
//!   "show_bounds": true
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::core::{Color, Transform};
use crate::error::SceneError;
use crate::render::Camera;
use crate::scatter::{GroupedLineScatter, Series, SingleColorable};
use crate::theme::PaletteName;

/// How the scene colors its series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneColors {
    Uniform(Color),
    Palette(Vec<Color>),
    /// One of the built-in palettes
    Named(PaletteName),
}

impl Default for SceneColors {
    fn default() -> Self {
        SceneColors::Uniform(Color::BLACK)
    }
}

fn default_width() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub series: Vec<Series>,
    #[serde(default)]
    pub colors: SceneColors,
    #[serde(default = "default_width")]
    pub point_width: f32,
    #[serde(default = "default_width")]
    pub line_width: f32,
    #[serde(default)]
    pub transform: Option<Transform>,
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub show_bounds: bool,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        debug!(
            series = config.series.len(),
            has_transform = config.transform.is_some(),
            "Scene parsed"
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading scene");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the scatter. The scene's transform lives in `self`, so the
    /// result borrows from it.
    pub fn build(&self) -> Result<GroupedLineScatter<'_>, SceneError> {
        let mut scatter = match &self.colors {
            SceneColors::Uniform(c) => {
                let mut s = GroupedLineScatter::new();
                s.set_color(*c);
                s
            }
            SceneColors::Palette(colors) => {
                let mut s = GroupedLineScatter::new();
                s.set_palette(colors.clone())?;
                s
            }
            SceneColors::Named(name) => {
                let mut s = GroupedLineScatter::new();
                s.set_palette(name.colors().to_vec())?;
                s
            }
        };
        scatter.set_data(self.series.clone());
        scatter.set_point_width(self.point_width)?;
        scatter.set_line_width(self.line_width)?;
        scatter.set_transform(self.transform.as_ref());
        scatter.set_bounds_displayed(self.show_bounds);
        Ok(scatter)
    }
}
