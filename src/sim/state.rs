//! Game state and core simulation types
//!
//! Everything the round engine mutates lives in [`GameState`]. Hosts read a
//! [`Snapshot`] each tick and never touch the state directly.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::palette::{Color, ColorPicker};
use super::timer::Stopwatch;
use crate::consts::QUADRANTS;
use crate::settings::Settings;

/// One of the four quadrants, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; QUADRANTS] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Slot index (0=up, 1=right, 2=down, 3=left)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a raw slot index; anything outside 0..=3 is not a direction
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }

    /// Uniformly random direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..QUADRANTS)]
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

/// Round state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Colors not rolled yet; the next tick initializes them
    Uninitialized,
    /// Round 0 accepts any direction; rounds 1.. demand the target
    Playing { round: u32 },
    /// Run ended; any direction resets
    Result { outcome: Outcome },
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing { .. })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Result { outcome } => Some(*outcome),
            _ => None,
        }
    }
}

/// Per-tick view of the game for renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    /// Flat round counter: -1 before init, 0..=rounds while playing,
    /// rounds + 1 on a win, rounds + 2 on a loss
    pub round: i64,
    pub colors: [Color; QUADRANTS],
    /// Frozen run time, present on the result screen
    pub elapsed: Option<Duration>,
    /// Ticks simulated since the state was created
    pub ticks: u64,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: Phase,
    /// Quadrant colors (up, right, down, left)
    pub colors: [Color; QUADRANTS],
    /// Quadrant holding this round's fresh color
    pub target: Direction,
    /// Correct answers needed to win
    pub rounds: u32,
    /// One extra swap every `swap_interval` rounds
    pub swap_interval: u32,
    /// Swaps drawn since the most recent round advance began
    pub last_swap_count: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) stopwatch: Stopwatch,
    pub(crate) picker: ColorPicker,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed and default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings::default(), seed)
    }

    /// Create a game state using the difficulty from `settings`
    pub fn with_settings(settings: &Settings, seed: u64) -> Self {
        Self {
            seed,
            phase: Phase::Uninitialized,
            colors: [Color::BLANK; QUADRANTS],
            target: Direction::Up,
            rounds: settings.rounds.max(1),
            swap_interval: settings.swap_interval.max(1),
            last_swap_count: 0,
            time_ticks: 0,
            stopwatch: Stopwatch::new(),
            picker: ColorPicker::standard(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Replace the color picker (custom palettes)
    pub fn with_picker(mut self, picker: ColorPicker) -> Self {
        self.picker = picker;
        self
    }

    /// Flat round counter, see [`Snapshot::round`]
    pub fn round_number(&self) -> i64 {
        match self.phase {
            Phase::Uninitialized => -1,
            Phase::Playing { round } => round as i64,
            Phase::Result {
                outcome: Outcome::Win,
            } => self.rounds as i64 + 1,
            Phase::Result {
                outcome: Outcome::Lose,
            } => self.rounds as i64 + 2,
        }
    }

    /// Frozen run time, once a result has been reached
    pub fn elapsed(&self) -> Option<Duration> {
        self.stopwatch.elapsed()
    }

    pub fn color_at(&self, dir: Direction) -> Color {
        self.colors[dir.index()]
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            round: self.round_number(),
            colors: self.colors,
            elapsed: match self.phase {
                Phase::Result { .. } => self.stopwatch.elapsed(),
                _ => None,
            },
            ticks: self.time_ticks,
        }
    }

    /// True when no two quadrants share a color
    pub fn colors_distinct(&self) -> bool {
        (0..QUADRANTS).all(|i| (i + 1..QUADRANTS).all(|j| self.colors[i] != self.colors[j]))
    }

    /// Give one quadrant a color different from all four current colors
    pub fn reroll(&mut self, slot: Direction) {
        let excluding = self.colors;
        self.colors[slot.index()] = self.picker.pick(&mut self.rng, &excluding);
    }

    /// Reroll every quadrant in slot order
    pub fn reroll_all(&mut self) {
        for dir in Direction::ALL {
            self.reroll(dir);
        }
    }

    /// Exchange two quadrant colors, keeping `target` on the target color
    pub fn swap(&mut self, a: Direction, b: Direction) {
        if self.target == a {
            self.target = b;
        } else if self.target == b {
            self.target = a;
        }
        self.colors.swap(a.index(), b.index());
    }

    /// Swap two independently drawn quadrants (a no-op when both draws match)
    pub fn random_swap(&mut self) -> (Direction, Direction) {
        let a = Direction::random(&mut self.rng);
        let b = Direction::random(&mut self.rng);
        self.swap(a, b);
        self.last_swap_count += 1;
        (a, b)
    }

    /// Swaps performed when advancing into `round`
    pub fn swaps_for_round(&self, round: u32) -> u32 {
        round / self.swap_interval
    }
}
