//! Grouped line-scatter primitive
//!
//! Several independent 3D series drawn as one scene object: point
//! markers joined by a polyline per series, colored uniformly or by a
//! cycling palette.

mod color;
mod drawable;
mod grouped;

pub use color::{ColorCursor, ColorMode, Palette};
pub use drawable::{Drawable, SingleColorable};
pub use grouped::{GroupedLineScatter, Series};
