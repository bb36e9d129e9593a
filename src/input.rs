//! Raw input to quadrant direction
//!
//! Pointer and touch positions are resolved against the two diagonals of the
//! play area. Keys map straight to directions.

use glam::Vec2;

use crate::sim::{Direction, TickInput};

/// Direction of the quadrant containing a normalized point.
///
/// `pos` is relative to the play area, `(0, 0)` top-left and `(1, 1)`
/// bottom-right. The square is split along both diagonals.
pub fn direction_at(pos: Vec2) -> Direction {
    let below_main = pos.x < pos.y;
    let below_anti = 1.0 - pos.x < pos.y;
    match (below_main, below_anti) {
        (true, true) => Direction::Down,
        (true, false) => Direction::Left,
        (false, true) => Direction::Right,
        (false, false) => Direction::Up,
    }
}

/// Map a pixel position inside a play area to normalized coordinates.
///
/// Returns `None` for positions outside the area or an empty area.
pub fn to_relative(pixel: Vec2, origin: Vec2, size: Vec2) -> Option<Vec2> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    let rel = (pixel - origin) / size;
    if rel.cmplt(Vec2::ZERO).any() || rel.cmpgt(Vec2::ONE).any() {
        return None;
    }
    Some(rel)
}

/// Everything newly pressed during one host frame
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    /// Arrow key pressed this frame
    pub key: Option<Direction>,
    /// Normalized position of a mouse button press this frame
    pub mouse: Option<Vec2>,
    /// Normalized positions of touches that began this frame, in press order
    pub touches: Vec<Vec2>,
}

impl RawInput {
    /// Pick the single direction for this tick.
    ///
    /// Keys win over the mouse, the mouse wins over touches, and only the
    /// first new touch is considered.
    pub fn resolve(&self) -> Option<Direction> {
        if let Some(key) = self.key {
            return Some(key);
        }
        self.mouse
            .or_else(|| self.touches.first().copied())
            .map(direction_at)
    }

    pub fn to_tick_input(&self, autoplay: bool) -> TickInput {
        TickInput {
            direction: self.resolve(),
            autoplay,
        }
    }

    /// Clear one-shot presses after they were consumed
    pub fn clear(&mut self) {
        self.key = None;
        self.mouse = None;
        self.touches.clear();
    }
}
