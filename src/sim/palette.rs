//! Quadrant colors and the rejection-sampling color picker
//!
//! The palette is a fixed, read-only table. The picker draws from it uniformly
//! and resamples until the draw avoids every excluded color.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_PALETTE_SIZE;

/// An RGBA8 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Placeholder held by quadrants before the first initialization tick
    pub const BLANK: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The 15 candidate quadrant colors
pub const PALETTE: [Color; 15] = [
    Color::rgb(215, 48, 48),
    Color::rgb(101, 78, 206),
    Color::rgb(65, 175, 79),
    Color::rgb(255, 0, 63),
    Color::rgb(255, 199, 17),
    Color::rgb(183, 47, 214),
    Color::rgb(255, 22, 216),
    Color::rgb(255, 185, 173),
    Color::rgb(37, 186, 109),
    Color::rgb(104, 216, 82),
    Color::rgb(232, 158, 109),
    Color::rgb(79, 72, 127),
    Color::rgb(89, 127, 124),
    Color::rgb(127, 89, 89),
    Color::rgb(121, 127, 89),
];

/// Palette rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Fewer distinct colors than the picker may ever be asked to exclude, plus one
    TooSmall { distinct: usize, required: usize },
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteError::TooSmall { distinct, required } => write!(
                f,
                "Palette has {} distinct colors, at least {} required",
                distinct, required
            ),
        }
    }
}

impl std::error::Error for PaletteError {}

/// Draws colors from a palette while avoiding a set of excluded colors
#[derive(Debug, Clone)]
pub struct ColorPicker {
    palette: &'static [Color],
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::standard()
    }
}

impl ColorPicker {
    /// Build a picker, checking that sampling can always terminate.
    ///
    /// The engine never excludes more than four colors, so the palette needs
    /// at least five distinct entries.
    pub fn new(palette: &'static [Color]) -> Result<Self, PaletteError> {
        let mut distinct: Vec<Color> = Vec::with_capacity(palette.len());
        for color in palette {
            if !distinct.contains(color) {
                distinct.push(*color);
            }
        }
        if distinct.len() < MIN_PALETTE_SIZE {
            return Err(PaletteError::TooSmall {
                distinct: distinct.len(),
                required: MIN_PALETTE_SIZE,
            });
        }
        Ok(Self { palette })
    }

    /// Picker over the built-in [`PALETTE`]
    pub fn standard() -> Self {
        Self { palette: &PALETTE }
    }

    pub fn palette(&self) -> &'static [Color] {
        self.palette
    }

    /// Uniformly pick a palette color that is not in `excluding`.
    ///
    /// `excluding` must leave at least one palette color available, or this
    /// never returns. Quadrant rerolls exclude at most four.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R, excluding: &[Color]) -> Color {
        loop {
            let candidate = self.palette[rng.random_range(0..self.palette.len())];
            if !excluding.contains(&candidate) {
                return candidate;
            }
        }
    }
}
