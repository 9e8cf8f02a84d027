//! Per-series color assignment
//!
//! A scatter is either drawn in one uniform color or cycles through a
//! non-empty palette. The palette cursor advances once per series and
//! wraps around, restarting at the first color every render pass.

use serde::Serialize;

use crate::core::Color;
use crate::error::ScatterError;

/// Non-empty ordered list of colors
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ScatterError> {
        if colors.is_empty() {
            return Err(ScatterError::InvalidConfiguration(
                "palette must contain at least one color".into(),
            ));
        }
        Ok(Self(colors))
    }

    /// Color for position `i`, wrapping past the end
    pub fn get(&self, i: usize) -> Color {
        self.0[i % self.0.len()]
    }

    pub fn first(&self) -> Color {
        self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the usual `len`/`is_empty` pairing
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ScatterError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

/// How series are colored
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Uniform(Color),
    Palette(Palette),
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Uniform(Color::BLACK)
    }
}

impl ColorMode {
    /// Fresh cursor for one render pass
    pub fn cursor(&self) -> ColorCursor<'_> {
        ColorCursor { mode: self, k: 0 }
    }

    /// Color series `i` gets in a single pass
    pub fn color_at(&self, i: usize) -> Color {
        match self {
            ColorMode::Uniform(c) => *c,
            ColorMode::Palette(p) => p.get(i),
        }
    }
}

/// Running palette index for one pass
#[derive(Debug)]
pub struct ColorCursor<'a> {
    mode: &'a ColorMode,
    k: usize,
}

impl ColorCursor<'_> {
    /// Color for the next series
    pub fn next_color(&mut self) -> Color {
        match self.mode {
            ColorMode::Uniform(c) => *c,
            ColorMode::Palette(p) => {
                let c = p.get(self.k);
                self.k = (self.k + 1) % p.len();
                c
            }
        }
    }
}
