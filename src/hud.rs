//! Result screen time breakdown
//!
//! The result screen shows minutes, seconds and hundredths as two rows of
//! dots each (tens, then ones). This module only computes the digits.

use std::time::Duration;

use serde::Serialize;

/// Largest minute count the result screen can show
pub const MAX_MINUTES: u32 = 99;

/// Elapsed time split into displayable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElapsedParts {
    /// Whole minutes, clamped to [`MAX_MINUTES`]
    pub minutes: u32,
    pub seconds: u32,
    pub hundredths: u32,
}

impl ElapsedParts {
    pub fn from_duration(elapsed: Duration) -> Self {
        let millis = elapsed.as_millis();
        let minutes = (millis / 60_000).min(MAX_MINUTES as u128) as u32;
        let seconds = ((millis / 1000) % 60) as u32;
        let hundredths = ((millis % 1000) / 10) as u32;
        Self {
            minutes,
            seconds,
            hundredths,
        }
    }

    /// `[(tens, ones); 3]` for minutes, seconds and hundredths
    pub fn digit_rows(&self) -> [(u32, u32); 3] {
        [
            split_digits(self.minutes),
            split_digits(self.seconds),
            split_digits(self.hundredths),
        ]
    }
}

impl std::fmt::Display for ElapsedParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}.{:02}",
            self.minutes, self.seconds, self.hundredths
        )
    }
}

fn split_digits(value: u32) -> (u32, u32) {
    (value / 10, value % 10)
}
