//! Per-tick round progression
//!
//! Advances the round state machine by one host step.

use std::time::Instant;

use super::state::{Direction, GameState, Outcome, Phase};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Direction newly pressed this tick, if any
    pub direction: Option<Direction>,
    /// Demo mode - the game answers itself
    pub autoplay: bool,
}

impl TickInput {
    pub fn pressed(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            ..Default::default()
        }
    }

    /// Input from a raw slot index; out-of-range values count as no input
    pub fn from_index(index: i64) -> Self {
        Self {
            direction: Direction::from_index(index),
            ..Default::default()
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, now: Instant) {
    state.time_ticks += 1;

    let direction = if input.autoplay {
        autoplay_direction(state)
    } else {
        input.direction
    };

    match state.phase {
        Phase::Uninitialized => {
            state.reroll_all();
            state.last_swap_count = 0;
            state.phase = Phase::Playing { round: 0 };
            log::info!("New game (seed {}), colors {:?}", state.seed, state.colors);
        }
        Phase::Playing { round } => {
            // Idle until something is pressed
            let Some(direction) = direction else {
                return;
            };

            if round == 0 {
                state.stopwatch.start(now);
                log::info!("Timer started");
                advance_round(state, 1);
            } else if direction == state.target {
                let next = round + 1;
                if next > state.rounds {
                    finish(state, Outcome::Win, now);
                } else {
                    advance_round(state, next);
                }
            } else {
                log::debug!(
                    "Round {}: pressed {}, target was {}",
                    round,
                    direction.as_str(),
                    state.target.as_str()
                );
                finish(state, Outcome::Lose, now);
            }
        }
        Phase::Result { .. } => {
            if direction.is_some() {
                reset(state);
            }
        }
    }
}

/// Enter `round`: pick a fresh target slot, reroll its color, then shuffle
pub fn advance_round(state: &mut GameState, round: u32) {
    state.target = Direction::random(&mut state.rng);
    state.reroll(state.target);

    state.last_swap_count = 0;
    for _ in 0..state.swaps_for_round(round) {
        let (a, b) = state.random_swap();
        log::trace!("Swap {} <-> {}", a.as_str(), b.as_str());
    }
    state.phase = Phase::Playing { round };

    log::debug!(
        "Round {}: target {}, {} swaps",
        round,
        state.target.as_str(),
        state.last_swap_count
    );
}

fn finish(state: &mut GameState, outcome: Outcome, now: Instant) {
    let elapsed = state.stopwatch.stop(now);
    state.phase = Phase::Result { outcome };
    match outcome {
        Outcome::Win => log::info!("Won in {:.2}s", elapsed.as_secs_f64()),
        Outcome::Lose => log::info!("Lost after {:.2}s", elapsed.as_secs_f64()),
    }
}

fn reset(state: &mut GameState) {
    state.phase = Phase::Uninitialized;
    state.stopwatch.reset();
    state.target = Direction::Up;
    state.last_swap_count = 0;
    log::info!("Reset");
}

/// Direction the demo player presses this tick
fn autoplay_direction(state: &GameState) -> Option<Direction> {
    match state.phase {
        Phase::Uninitialized => None,
        Phase::Playing { .. } => Some(state.target),
        Phase::Result { .. } => Some(Direction::Up),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::palette::{Color, ColorPicker};
    use proptest::prelude::*;
    use std::time::Duration;

    fn started(seed: u64, t0: Instant) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &TickInput::default(), t0);
        state
    }

    fn wrong(dir: Direction) -> Direction {
        Direction::ALL[(dir.index() + 1) % 4]
    }

    #[test]
    fn test_first_tick_initializes() {
        let t0 = Instant::now();
        let state = started(12345, t0);
        assert_eq!(state.phase, Phase::Playing { round: 0 });
        assert!(state.colors_distinct());
        assert!(!state.colors.contains(&Color::BLANK));
        assert_eq!(state.elapsed(), None);
    }

    #[test]
    fn test_idle_while_playing() {
        let t0 = Instant::now();
        let mut state = started(1, t0);
        let colors = state.colors;
        for i in 1..10 {
            tick(&mut state, &TickInput::default(), t0 + Duration::from_millis(i));
        }
        assert_eq!(state.phase, Phase::Playing { round: 0 });
        assert_eq!(state.colors, colors);
    }

    #[test]
    fn test_round_zero_accepts_any_direction() {
        for dir in Direction::ALL {
            let t0 = Instant::now();
            let mut state = started(77, t0);
            tick(&mut state, &TickInput::pressed(dir), t0);
            assert_eq!(state.phase, Phase::Playing { round: 1 });
            assert!(state.stopwatch.is_running());
        }
    }

    #[test]
    fn test_out_of_range_input_is_ignored() {
        let t0 = Instant::now();
        let mut state = started(5, t0);
        tick(&mut state, &TickInput::from_index(9), t0);
        tick(&mut state, &TickInput::from_index(-1), t0);
        assert_eq!(state.phase, Phase::Playing { round: 0 });
    }

    #[test]
    fn test_advance_rerolls_only_target() {
        let t0 = Instant::now();
        let mut state = started(2024, t0);
        tick(&mut state, &TickInput::pressed(Direction::Up), t0);
        // Round 1 and 2 perform no swaps
        let before = state.colors;
        let target = state.target;
        tick(&mut state, &TickInput::pressed(target), t0);
        assert_eq!(state.phase, Phase::Playing { round: 2 });
        assert_eq!(state.last_swap_count, 0);
        for dir in Direction::ALL {
            if dir != state.target {
                assert_eq!(state.color_at(dir), before[dir.index()]);
            }
        }
        assert!(!before.contains(&state.color_at(state.target)));
    }

    #[test]
    fn test_correct_path_wins() {
        let t0 = Instant::now();
        let mut state = started(99, t0);
        let step = Duration::from_millis(250);

        let mut now = t0 + step;
        tick(&mut state, &TickInput::pressed(Direction::Left), now);
        let start = now;
        let mut inputs = 1;

        while state.phase.is_playing() {
            now += step;
            let target = state.target;
            tick(&mut state, &TickInput::pressed(target), now);
            inputs += 1;
        }

        assert_eq!(
            state.phase,
            Phase::Result {
                outcome: Outcome::Win
            }
        );
        assert_eq!(state.round_number(), 21);
        assert_eq!(inputs, 21);
        assert_eq!(state.elapsed(), Some(now - start));
        assert_eq!(state.snapshot().elapsed, Some(now - start));
    }

    #[test]
    fn test_wrong_input_loses() {
        let t0 = Instant::now();
        let mut state = started(3, t0);
        tick(&mut state, &TickInput::pressed(Direction::Up), t0);

        state.phase = Phase::Playing { round: 5 };
        state.target = Direction::Down;
        let later = t0 + Duration::from_secs(3);
        tick(&mut state, &TickInput::pressed(Direction::Up), later);

        assert_eq!(
            state.phase,
            Phase::Result {
                outcome: Outcome::Lose
            }
        );
        assert_eq!(state.round_number(), 22);
        assert_eq!(state.elapsed(), Some(Duration::from_secs(3)));

        // Frozen while waiting on the result screen
        tick(&mut state, &TickInput::default(), later + Duration::from_secs(5));
        assert_eq!(state.elapsed(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_reset_from_result() {
        for outcome in [Outcome::Win, Outcome::Lose] {
            let t0 = Instant::now();
            let mut state = started(8, t0);
            tick(&mut state, &TickInput::pressed(Direction::Up), t0);
            state.phase = Phase::Result { outcome };

            // Idle ticks keep the result
            tick(&mut state, &TickInput::default(), t0);
            assert_eq!(state.phase, Phase::Result { outcome });

            tick(&mut state, &TickInput::pressed(Direction::Right), t0);
            assert_eq!(state.phase, Phase::Uninitialized);
            assert_eq!(state.round_number(), -1);
            assert_eq!(state.elapsed(), None);

            tick(&mut state, &TickInput::default(), t0);
            assert_eq!(state.phase, Phase::Playing { round: 0 });
            assert!(state.colors_distinct());
        }
    }

    #[test]
    fn test_custom_round_count() {
        let settings = Settings {
            rounds: 3,
            ..Default::default()
        };
        let t0 = Instant::now();
        let mut state = GameState::with_settings(&settings, 10);
        tick(&mut state, &TickInput::default(), t0);
        tick(&mut state, &TickInput::pressed(Direction::Up), t0);
        for _ in 0..3 {
            let target = state.target;
            tick(&mut state, &TickInput::pressed(target), t0);
        }
        assert_eq!(state.phase.outcome(), Some(Outcome::Win));
        assert_eq!(state.round_number(), 4);
    }

    #[test]
    fn test_autoplay_wins_and_restarts() {
        let t0 = Instant::now();
        let mut state = GameState::new(4);
        let input = TickInput {
            autoplay: true,
            ..Default::default()
        };
        let mut ticks = 0;
        while state.phase.outcome().is_none() && ticks < 100 {
            tick(&mut state, &input, t0);
            ticks += 1;
        }
        assert_eq!(state.phase.outcome(), Some(Outcome::Win));
        tick(&mut state, &input, t0);
        assert_eq!(state.phase, Phase::Uninitialized);
    }

    #[test]
    fn test_determinism() {
        let t0 = Instant::now();
        let mut state1 = started(31337, t0);
        let mut state2 = started(31337, t0);
        for _ in 0..15 {
            let input = TickInput::pressed(state1.target);
            tick(&mut state1, &input, t0);
            tick(&mut state2, &input, t0);
        }
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.time_ticks, 16);
        assert_eq!(state1.snapshot(), state2.snapshot());
        assert_eq!(state1.snapshot().ticks, 16);
        assert_eq!(state1.target, state2.target);
    }

    #[test]
    fn test_smallest_valid_palette_keeps_playing() {
        static FIVE: [Color; 5] = [
            Color::rgb(200, 0, 0),
            Color::rgb(0, 200, 0),
            Color::rgb(0, 0, 200),
            Color::rgb(200, 200, 0),
            Color::rgb(0, 200, 200),
        ];
        let picker = ColorPicker::new(&FIVE).unwrap();
        let t0 = Instant::now();
        let mut state = GameState::new(2718).with_picker(picker);

        for _ in 0..25 {
            tick(&mut state, &TickInput::default(), t0);
            assert_eq!(state.phase, Phase::Playing { round: 0 });
            assert!(state.colors_distinct());
            assert!(state.colors.iter().all(|c| FIVE.contains(c)));

            tick(&mut state, &TickInput::pressed(Direction::Down), t0);
            while state.phase.is_playing() {
                let before = state.colors;
                let target = state.target;
                tick(&mut state, &TickInput::pressed(target), t0);
                assert!(state.colors_distinct());
                assert!(state.colors.iter().all(|c| FIVE.contains(c)));
                if state.phase.is_playing() {
                    // Only one palette color is left to pick from
                    assert!(!before.contains(&state.color_at(state.target)));
                }
            }
            assert_eq!(state.phase.outcome(), Some(Outcome::Win));

            tick(&mut state, &TickInput::pressed(Direction::Up), t0);
            assert_eq!(state.phase, Phase::Uninitialized);
        }
    }

    proptest! {
        #[test]
        fn prop_colors_stay_distinct(seed: u64, presses in prop::collection::vec(prop::option::of(0i64..6), 0..80)) {
            let t0 = Instant::now();
            let mut state = started(seed, t0);
            for press in presses {
                let input = match press {
                    Some(i) => TickInput::from_index(i),
                    None => TickInput::default(),
                };
                tick(&mut state, &input, t0);
                if state.phase != Phase::Uninitialized {
                    prop_assert!(state.colors_distinct());
                }
            }
        }

        #[test]
        fn prop_target_keeps_fresh_color(seed: u64, rounds in 1u32..=20) {
            let t0 = Instant::now();
            let mut state = started(seed, t0);
            tick(&mut state, &TickInput::pressed(Direction::Up), t0);
            for _ in 1..rounds {
                let before = state.colors;
                let target = state.target;
                tick(&mut state, &TickInput::pressed(target), t0);
                if state.phase.is_playing() {
                    // Wherever the swaps moved it, the target holds the new color
                    prop_assert!(!before.contains(&state.color_at(state.target)));
                }
            }
        }

        #[test]
        fn prop_swap_count_scales_with_round(seed: u64, rounds in 1u32..=20) {
            let t0 = Instant::now();
            let mut state = started(seed, t0);
            tick(&mut state, &TickInput::pressed(Direction::Up), t0);
            prop_assert_eq!(state.last_swap_count, 0);
            for round in 2..=rounds {
                let target = state.target;
                tick(&mut state, &TickInput::pressed(target), t0);
                prop_assert_eq!(state.phase, Phase::Playing { round });
                prop_assert_eq!(state.last_swap_count, round / 3);
            }
        }

        #[test]
        fn prop_wrong_answer_always_loses(seed: u64, round in 1u32..=20) {
            let t0 = Instant::now();
            let mut state = started(seed, t0);
            tick(&mut state, &TickInput::pressed(Direction::Up), t0);
            state.phase = Phase::Playing { round };
            let miss = wrong(state.target);
            tick(&mut state, &TickInput::pressed(miss), t0 + Duration::from_millis(10));
            prop_assert_eq!(state.phase.outcome(), Some(Outcome::Lose));
            prop_assert_eq!(state.elapsed(), Some(Duration::from_millis(10)));
        }
    }
}
