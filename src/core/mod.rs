//! Platform-agnostic core: value types, transforms, change events

pub mod events;
pub mod transform;
pub mod types;

pub use events::{ChangedField, DrawableChanged, ListenerId, Listeners};
pub use transform::{Transform, TransformOp};
pub use types::{BoundingBox3d, Color, Coord3d};
