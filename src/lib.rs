//! Color Walk - a four-quadrant color reflex puzzle
//!
//! Core modules:
//! - `sim`: Round state machine, color picker and run timer
//! - `input`: Key/pointer/touch to quadrant direction
//! - `hud`: Result screen time breakdown
//! - `settings`: JSON-backed configuration

pub mod hud;
pub mod input;
pub mod settings;
pub mod sim;

pub use hud::ElapsedParts;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Quadrants around the center (up, right, down, left)
    pub const QUADRANTS: usize = 4;

    /// Correct answers needed to win
    pub const DEFAULT_ROUNDS: u32 = 20;
    /// One extra swap per this many rounds
    pub const DEFAULT_SWAP_INTERVAL: u32 = 3;
    /// Host simulation rate
    pub const DEFAULT_TICK_HZ: u32 = 60;

    /// A reroll excludes all quadrant colors, so the palette needs one more
    pub const MIN_PALETTE_SIZE: usize = QUADRANTS + 1;
}
