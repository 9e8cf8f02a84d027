//! Rendering capability and the headless recording backend

mod backend;
mod camera;
mod recorder;

pub use backend::{DepthFunc, Primitive, Renderer};
pub use camera::Camera;
pub use recorder::{Batch, DrawCommand, RecordingRenderer};
