//! Color Walk entry point
//!
//! A headless host: either an autoplay demo at a fixed tick rate, or a
//! line-based terminal session where each line is one key press.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::BufRead;
    use std::time::{Duration, Instant};

    use color_walk::sim::{Direction, GameState, Phase, TickInput, tick};
    use color_walk::{ElapsedParts, Settings};

    /// Settings file path: first CLI argument, then `COLOR_WALK_SETTINGS`
    fn settings_path() -> Option<String> {
        std::env::args()
            .nth(1)
            .or_else(|| std::env::var("COLOR_WALK_SETTINGS").ok())
    }

    fn load_settings() -> Settings {
        match settings_path() {
            Some(path) => Settings::load(path),
            None => {
                log::info!("No settings file given, using defaults");
                Settings::default()
            }
        }
    }

    fn report(state: &GameState) {
        let snapshot = state.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::debug!("Snapshot: {}", json),
            Err(e) => log::warn!("Failed to serialize snapshot: {}", e),
        }
        if let (Some(outcome), Some(elapsed)) = (state.phase.outcome(), snapshot.elapsed) {
            println!("{:?} - {}", outcome, ElapsedParts::from_duration(elapsed));
        }
    }

    fn print_board(state: &GameState) {
        if let Phase::Playing { round } = state.phase {
            let colors: Vec<String> = Direction::ALL
                .iter()
                .map(|dir| format!("{}={}", dir.as_str(), state.color_at(*dir)))
                .collect();
            println!("round {:>2}: {}", round, colors.join(" "));
        }
    }

    /// Parse one typed line into a key press
    fn parse_direction(line: &str) -> Option<Direction> {
        match line.trim().to_lowercase().as_str() {
            "u" | "up" => Some(Direction::Up),
            "r" | "right" => Some(Direction::Right),
            "d" | "down" => Some(Direction::Down),
            "l" | "left" => Some(Direction::Left),
            other => other.parse::<i64>().ok().and_then(Direction::from_index),
        }
    }

    fn run_autoplay(state: &mut GameState, settings: &Settings) {
        let step = Duration::from_secs_f64(1.0 / settings.tick_hz as f64);
        let input = TickInput {
            autoplay: true,
            ..Default::default()
        };
        loop {
            tick(state, &input, Instant::now());
            if state.phase.outcome().is_some() {
                report(state);
                return;
            }
            std::thread::sleep(step);
        }
    }

    fn run_interactive(state: &mut GameState) {
        println!("Press the quadrant whose color just changed: u/r/d/l (or 0-3), one per line.");
        tick(state, &TickInput::default(), Instant::now());
        print_board(state);

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("Failed to read input: {}", e);
                    break;
                }
            };
            let input = TickInput {
                direction: parse_direction(&line),
                ..Default::default()
            };
            if input.direction.is_none() {
                log::warn!("Ignoring input {:?}", line.trim());
            }
            tick(state, &input, Instant::now());

            match state.phase {
                Phase::Result { .. } => {
                    report(state);
                    println!("Press any direction to play again.");
                }
                Phase::Uninitialized => {
                    // Roll the next game right away
                    tick(state, &TickInput::default(), Instant::now());
                    print_board(state);
                }
                Phase::Playing { .. } => print_board(state),
            }
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Color Walk starting...");

        let mut settings = load_settings();
        if let Err(e) = settings.validate() {
            log::error!("Invalid settings: {}, using defaults", e);
            settings = Settings::default();
        }

        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        let mut state = GameState::with_settings(&settings, seed);

        if settings.autoplay {
            run_autoplay(&mut state, &settings);
        } else {
            run_interactive(&mut state);
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `color_walk::sim::tick` directly
}
