//! Capabilities shared by scene objects

use crate::core::{BoundingBox3d, Color, Transform};
use crate::render::{Camera, Renderer};

/// Something that can emit geometry into a renderer
pub trait Drawable {
    /// Run one complete render pass. Backend errors are returned as-is.
    fn draw<R: Renderer>(&self, renderer: &mut R, camera: &Camera) -> Result<(), R::Error>;

    /// Model-space bounds of the stored data
    fn bounds(&self) -> &BoundingBox3d;

    fn transform(&self) -> Option<&Transform>;

    fn is_displayed(&self) -> bool {
        true
    }
}

/// Drawables with one overall color
pub trait SingleColorable {
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);
}
