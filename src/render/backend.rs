//! Immediate-mode rendering capability required from a graphics backend
//!
//! Mirrors a fixed-function pipeline: global state (color, point size,
//! line width, depth test, model matrix) plus begin/vertex/end batches.
//! Drawables mutate this state and do not restore it.

use serde::Serialize;

use crate::core::{Color, Coord3d};

/// Primitive batch kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Primitive {
    /// One point marker per vertex
    Points,
    /// Connected polyline through the vertices, not closed
    LineStrip,
}

/// Depth comparison function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DepthFunc {
    Less,
    LessEqual,
    Always,
}

/// Backend errors are returned to the caller untouched.
pub trait Renderer {
    type Error;

    fn point_size(&mut self, size: f32) -> Result<(), Self::Error>;

    fn line_width(&mut self, width: f32) -> Result<(), Self::Error>;

    fn enable_depth_test(&mut self, func: DepthFunc) -> Result<(), Self::Error>;

    fn color(&mut self, color: Color) -> Result<(), Self::Error>;

    fn begin(&mut self, primitive: Primitive) -> Result<(), Self::Error>;

    /// Only valid between `begin` and `end`
    fn vertex(&mut self, c: Coord3d) -> Result<(), Self::Error>;

    fn end(&mut self) -> Result<(), Self::Error>;

    fn translate(&mut self, offset: Coord3d) -> Result<(), Self::Error>;

    fn rotate(&mut self, angle_deg: f64, axis: Coord3d) -> Result<(), Self::Error>;

    fn scale(&mut self, factors: Coord3d) -> Result<(), Self::Error>;

    /// Emit a whole batch
    fn batch(&mut self, primitive: Primitive, vertices: &[Coord3d]) -> Result<(), Self::Error> {
        self.begin(primitive)?;
        for &c in vertices {
            self.vertex(c)?;
        }
        self.end()
    }
}
