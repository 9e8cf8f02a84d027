//! Basic value types shared by drawables and renderers
//!
//! - Coord3d: model-space point
//! - Color: RGBA with float channels in [0, 1]
//! - BoundingBox3d: axis-aligned box with an explicit empty state

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// Coord3d
// ============================================================================

/// 3D coordinate. Serialized as `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Coord3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord3d {
    pub const ORIGIN: Coord3d = Coord3d { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise minimum
    pub fn min(self, other: Coord3d) -> Coord3d {
        Coord3d::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    pub fn max(self, other: Coord3d) -> Coord3d {
        Coord3d::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl From<[f64; 3]> for Coord3d {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Coord3d> for [f64; 3] {
    fn from(c: Coord3d) -> Self {
        [c.x, c.y, c.z]
    }
}

impl Add for Coord3d {
    type Output = Coord3d;

    fn add(self, rhs: Coord3d) -> Coord3d {
        Coord3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coord3d {
    type Output = Coord3d;

    fn sub(self, rhs: Coord3d) -> Coord3d {
        Coord3d::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// ============================================================================
// Color
// ============================================================================

/// RGBA color. Serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

// ============================================================================
// BoundingBox3d
// ============================================================================

/// Axis-aligned bounding box.
///
/// A fresh or reset box is the empty sentinel: min is `f64::MAX` and max is
/// `f64::MIN` on every axis, so the first `add` snaps both to that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox3d {
    min: Coord3d,
    max: Coord3d,
}

impl Default for BoundingBox3d {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBox3d {
    /// Empty sentinel
    pub const fn new() -> Self {
        Self {
            min: Coord3d::new(f64::MAX, f64::MAX, f64::MAX),
            max: Coord3d::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    /// Back to the empty sentinel
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Extend to include `c`
    pub fn add(&mut self, c: Coord3d) {
        self.min = self.min.min(c);
        self.max = self.max.max(c);
    }

    pub fn merge(&mut self, other: &BoundingBox3d) {
        if !other.is_empty() {
            self.add(other.min);
            self.add(other.max);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn min(&self) -> Coord3d {
        self.min
    }

    pub fn max(&self) -> Coord3d {
        self.max
    }

    pub fn center(&self) -> Option<Coord3d> {
        if self.is_empty() {
            return None;
        }
        Some(Coord3d::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        ))
    }

    /// The 8 corners: bottom face (z = min) counter-clockwise, then top face.
    pub fn corners(&self) -> Option<[Coord3d; 8]> {
        if self.is_empty() {
            return None;
        }
        let (lo, hi) = (self.min, self.max);
        Some([
            Coord3d::new(lo.x, lo.y, lo.z),
            Coord3d::new(hi.x, lo.y, lo.z),
            Coord3d::new(hi.x, hi.y, lo.z),
            Coord3d::new(lo.x, hi.y, lo.z),
            Coord3d::new(lo.x, lo.y, hi.z),
            Coord3d::new(hi.x, lo.y, hi.z),
            Coord3d::new(hi.x, hi.y, hi.z),
            Coord3d::new(lo.x, hi.y, hi.z),
        ])
    }
}

impl<'a> FromIterator<&'a Coord3d> for BoundingBox3d {
    fn from_iter<I: IntoIterator<Item = &'a Coord3d>>(iter: I) -> Self {
        let mut bbox = BoundingBox3d::new();
        for c in iter {
            bbox.add(*c);
        }
        bbox
    }
}
