//! Viewpoint handed to every drawable on draw

use serde::{Deserialize, Serialize};

use crate::core::Coord3d;

/// Look-at camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Coord3d,
    pub target: Coord3d,
    pub up: Coord3d,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Coord3d::new(0.0, 0.0, 10.0),
            target: Coord3d::ORIGIN,
            up: Coord3d::new(0.0, 1.0, 0.0),
        }
    }
}

impl Camera {
    pub fn new(eye: Coord3d, target: Coord3d, up: Coord3d) -> Self {
        Self { eye, target, up }
    }
}
