//! Built-in palettes for series coloring

use crate::core::Color;
use crate::scatter::Palette;

/// Category colors, one per series group
pub mod colors {
    use super::Color;

    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 0.8);
    pub const GREEN: Color = Color::new(0.4, 0.8, 0.4, 0.8);
    pub const BLUE: Color = Color::new(0.4, 0.6, 1.0, 0.8);
    pub const ORANGE: Color = Color::new(1.0, 0.8, 0.4, 0.8);
    pub const PURPLE: Color = Color::new(0.8, 0.4, 1.0, 0.8);
    pub const RED: Color = Color::new(1.0, 0.4, 0.4, 0.8);
    pub const CYAN: Color = Color::new(0.4, 1.0, 0.8, 0.8);
    pub const TEAL: Color = Color::new(0.2, 0.8, 0.7, 0.8);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.4, 0.8);
    pub const PINK: Color = Color::new(1.0, 0.6, 0.6, 0.8);
    pub const LIGHT_BLUE: Color = Color::new(0.6, 0.8, 1.0, 0.8);
    pub const LIGHT_GRAY: Color = Color::new(0.8, 0.8, 0.8, 0.8);

    // === Greys (black to white) ===
    pub const GREY_0: Color = Color::rgb(0.0, 0.0, 0.0); // #000000
    pub const GREY_1: Color = Color::rgb(0.314, 0.314, 0.314); // #505050
    pub const GREY_2: Color = Color::rgb(0.627, 0.627, 0.627); // #A0A0A0
    pub const GREY_3: Color = Color::rgb(1.0, 1.0, 1.0); // #FFFFFF
}

/// Every series in a distinct hue, wrapping after 12
pub const CATEGORY: [Color; 12] = [
    colors::GREEN,
    colors::BLUE,
    colors::ORANGE,
    colors::PURPLE,
    colors::RED,
    colors::CYAN,
    colors::TEAL,
    colors::YELLOW,
    colors::PINK,
    colors::LIGHT_BLUE,
    colors::LIGHT_GRAY,
    colors::GRAY,
];

/// Dark to light, for print-friendly plots
pub const MONOCHROME: [Color; 3] = [colors::GREY_0, colors::GREY_1, colors::GREY_2];

/// Named palette selectable from scene files
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteName {
    Category,
    Monochrome,
}

impl PaletteName {
    pub fn colors(self) -> &'static [Color] {
        match self {
            PaletteName::Category => &CATEGORY,
            PaletteName::Monochrome => &MONOCHROME,
        }
    }

    pub fn palette(self) -> Palette {
        Palette::new(self.colors().to_vec()).expect("built-in palettes are non-empty")
    }
}
