//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Clock instants passed in by the host
//! - No rendering or platform dependencies

pub mod palette;
pub mod state;
pub mod tick;
pub mod timer;

pub use palette::{Color, ColorPicker, PALETTE, PaletteError};
pub use state::{Direction, GameState, Outcome, Phase, Snapshot};
pub use tick::{TickInput, advance_round, tick};
pub use timer::Stopwatch;
