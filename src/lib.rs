//! Grouped line-scatter - several 3D point/line series drawn as one object
//!
//! - `scatter`: the primitive, its color assignment and render pass
//! - `render`: the immediate-mode backend capability and a recording backend
//! - `core`: coordinates, colors, bounding boxes, transforms, change events
//! - `scene`: JSON scene files driving the CLI

pub mod core;
pub mod error;
pub mod render;
pub mod scatter;
pub mod scene;
pub mod theme;

pub use crate::core::{BoundingBox3d, Color, Coord3d, Transform, TransformOp};
pub use error::{SceneError, ScatterError};
pub use render::{Camera, Renderer};
pub use scatter::{ColorMode, Drawable, GroupedLineScatter, Palette, Series, SingleColorable};
pub use scene::SceneConfig;
