//! Model transforms applied to the rendering context before drawing

use serde::{Deserialize, Serialize};

use super::types::Coord3d;
use crate::render::Renderer;

/// One step of a transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    Translate(Coord3d),
    /// Rotation by `angle_deg` degrees around `axis` (need not be normalized)
    Rotate { angle_deg: f64, axis: Coord3d },
    Scale(Coord3d),
}

impl TransformOp {
    fn compute(&self, c: Coord3d) -> Coord3d {
        match *self {
            TransformOp::Translate(t) => c + t,
            TransformOp::Scale(s) => Coord3d::new(c.x * s.x, c.y * s.y, c.z * s.z),
            TransformOp::Rotate { angle_deg, axis } => rotate(c, angle_deg, axis),
        }
    }
}

/// Rodrigues rotation. A zero axis leaves the point untouched.
fn rotate(c: Coord3d, angle_deg: f64, axis: Coord3d) -> Coord3d {
    let len = (axis.x * axis.x + axis.y * axis.y + axis.z * axis.z).sqrt();
    if len == 0.0 {
        return c;
    }
    let (kx, ky, kz) = (axis.x / len, axis.y / len, axis.z / len);
    let (sin, cos) = angle_deg.to_radians().sin_cos();

    let dot = kx * c.x + ky * c.y + kz * c.z;
    let cross = Coord3d::new(ky * c.z - kz * c.y, kz * c.x - kx * c.z, kx * c.y - ky * c.x);

    Coord3d::new(
        c.x * cos + cross.x * sin + kx * dot * (1.0 - cos),
        c.y * cos + cross.y * sin + ky * dot * (1.0 - cos),
        c.z * cos + cross.z * sin + kz * dot * (1.0 - cos),
    )
}

/// Ordered sequence of transform steps.
///
/// `execute` pushes the steps onto the renderer's matrix state in order, so
/// the last step is the first one a vertex goes through. `compute` follows
/// the same convention on the CPU.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn translate(self, offset: Coord3d) -> Self {
        self.then(TransformOp::Translate(offset))
    }

    pub fn rotate(self, angle_deg: f64, axis: Coord3d) -> Self {
        self.then(TransformOp::Rotate { angle_deg, axis })
    }

    pub fn scale(self, factors: Coord3d) -> Self {
        self.then(TransformOp::Scale(factors))
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Apply to the active rendering context
    pub fn execute<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        for op in &self.ops {
            match *op {
                TransformOp::Translate(t) => renderer.translate(t)?,
                TransformOp::Rotate { angle_deg, axis } => renderer.rotate(angle_deg, axis)?,
                TransformOp::Scale(s) => renderer.scale(s)?,
            }
        }
        Ok(())
    }

    /// Map a model-space coordinate the way the renderer would
    pub fn compute(&self, c: Coord3d) -> Coord3d {
        self.ops.iter().rev().fold(c, |acc, op| op.compute(acc))
    }
}
