//! Orb Rush entry point
//!
//! Wires the clock, keyboard, scheduler, sim, and renderer together and
//! runs a self-playing demo session: a pilot steers toward the nearest
//! orb through the same key-edge boundary a real player would use.

use std::fmt;
use std::thread;
use std::time::Duration;

use serde::Serialize;

use orb_rush::consts::*;
use orb_rush::platform::input::{self, KeyCode, KeyboardState};
use orb_rush::platform::time::{Clock, SystemClock};
use orb_rush::renderer::{LogRenderer, Renderer, Scene};
use orb_rush::sim::{GamePhase, GameState, tick};
use orb_rush::{FixedTimestep, HighScores, Settings};

/// Fatal startup failures; everything in-session is a state transition
#[derive(Debug)]
enum FrontendError {
    /// Drawing surface missing or degenerate
    Surface { width: f32, height: f32 },
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendError::Surface { width, height } => {
                write!(f, "unusable drawing surface: {width}x{height}")
            }
        }
    }
}

impl std::error::Error for FrontendError {}

/// Everything one running session needs
struct App<C: Clock> {
    state: GameState,
    timestep: FixedTimestep,
    keyboard: KeyboardState,
    renderer: LogRenderer,
    clock: C,
    show_fps: bool,
    // FPS tracking over a 60-frame window
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl<C: Clock> App<C> {
    fn new(settings: &Settings, clock: C, seed: u64) -> Result<Self, FrontendError> {
        let (width, height) = (settings.field_width, settings.field_height);
        if !width.is_finite() || !height.is_finite() || width < PLAYER_SIZE || height < PLAYER_SIZE
        {
            return Err(FrontendError::Surface { width, height });
        }

        Ok(Self {
            state: GameState::new(seed, width, height),
            timestep: FixedTimestep::new(),
            keyboard: KeyboardState::new(),
            renderer: LogRenderer::new(),
            clock,
            show_fps: settings.show_fps,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        })
    }

    /// The start/restart trigger, as a pointer click would deliver it
    fn press_activate(&mut self) {
        self.keyboard.click();
    }

    /// One display frame: run the paid-out fixed steps, render once
    fn frame(&mut self) {
        let now = self.clock.now();
        let steps = self.timestep.advance(now);
        for _ in 0..steps {
            steer_toward_nearest_orb(&self.state, &mut self.keyboard);
            let input = input::tick_input(&mut self.keyboard);
            tick(&mut self.state, &input, SIM_DT);
        }
        self.renderer.render(&Scene::from_state(&self.state));
        self.track_fps(now);
    }

    fn track_fps(&mut self, now: f64) {
        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 && now > oldest {
            self.fps = (self.frame_times.len() as f64 / (now - oldest)).round() as u32;
            if self.show_fps && self.frame_index == 0 {
                log::debug!("fps: {}", self.fps);
            }
        }
    }
}

/// Demo pilot: hold whichever keys point at the nearest uncollected
/// orb. Goes through key edges so the whole input boundary is exercised.
fn steer_toward_nearest_orb(state: &GameState, keyboard: &mut KeyboardState) {
    let target = state
        .collectibles
        .iter()
        .filter(|c| !c.collected)
        .min_by(|a, b| {
            let da = a.pos.distance_squared(state.player.pos);
            let db = b.pos.distance_squared(state.player.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    let delta = match target {
        Some(orb) => orb.pos - state.player.pos,
        None => glam::Vec2::ZERO,
    };
    // Deadzone keeps the pilot from strobing keys over the target
    let dead = 2.0;
    set_key(keyboard, KeyCode::ArrowLeft, delta.x < -dead);
    set_key(keyboard, KeyCode::ArrowRight, delta.x > dead);
    set_key(keyboard, KeyCode::ArrowUp, delta.y < -dead);
    set_key(keyboard, KeyCode::ArrowDown, delta.y > dead);
}

fn set_key(keyboard: &mut KeyboardState, code: KeyCode, held: bool) {
    if held {
        keyboard.key_down(code);
    } else {
        keyboard.key_up(code);
    }
}

#[derive(Debug, Serialize)]
struct RoundSummary {
    round: u32,
    phase: GamePhase,
    score: u32,
    orbs_collected: usize,
    time_left: f32,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    rounds: Vec<RoundSummary>,
    high_score: u32,
    leaderboard: HighScores,
}

fn derive_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xDEB5)
}

fn run() -> Result<RunSummary, FrontendError> {
    let settings = Settings::from_env();
    let seed = settings.seed.unwrap_or_else(derive_seed);
    log::info!(
        "orb-rush starting (seed {seed}, field {}x{})",
        settings.field_width,
        settings.field_height
    );

    let mut app = App::new(&settings, SystemClock::new(), seed)?;
    let mut leaderboard = HighScores::new();
    let mut rounds = Vec::new();

    for _ in 0..2 {
        app.press_activate();
        // Real-time frames until the round reaches a terminal state
        loop {
            app.frame();
            if app.state.phase.is_terminal() {
                break;
            }
            thread::sleep(Duration::from_secs_f32(SIM_DT));
        }

        let timestamp = app.clock.now();
        leaderboard.add_score(app.state.score, app.state.orbs_collected() as u32, timestamp);
        rounds.push(RoundSummary {
            round: app.state.round,
            phase: app.state.phase,
            score: app.state.score,
            orbs_collected: app.state.orbs_collected(),
            time_left: app.state.time_left,
        });
        log::info!(
            "round {} finished: {:?} with {} points",
            app.state.round,
            app.state.phase,
            app.state.score
        );
    }

    Ok(RunSummary {
        seed,
        rounds,
        high_score: app.state.high_score,
        leaderboard,
    })
}

fn main() {
    env_logger::init();
    match run() {
        Ok(summary) => {
            if let Ok(json) = serde_json::to_string_pretty(&summary) {
                println!("{json}");
            }
        }
        Err(err) => {
            log::error!("startup failed: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_rush::platform::time::ManualClock;

    fn manual_app(seed: u64) -> App<ManualClock> {
        App::new(&Settings::default(), ManualClock::new(), seed).unwrap()
    }

    #[test]
    fn test_degenerate_surface_is_fatal() {
        let settings = Settings {
            field_width: 0.0,
            field_height: 600.0,
            ..Default::default()
        };
        assert!(App::new(&settings, ManualClock::new(), 1).is_err());
    }

    #[test]
    fn test_autopilot_plays_a_full_round() {
        let mut app = manual_app(4242);
        app.frame();
        app.press_activate();

        // Up to 20 simulated seconds at 60 fps; the countdown alone
        // guarantees a terminal state inside 15.
        let mut frames = 0;
        while !app.state.phase.is_terminal() && frames < 20 * 60 {
            app.clock.advance(SIM_DT as f64);
            app.frame();
            frames += 1;
        }

        assert!(app.state.phase.is_terminal());
        assert!(app.timestep.leftover() < SIM_DT);
        if app.state.phase == GamePhase::Won {
            let expected =
                app.state.orbs_collected() as u32 * PICKUP_BONUS
                    + app.state.time_left.ceil() as u32 * TIME_BONUS_PER_SEC;
            assert_eq!(app.state.score, expected);
        }
        assert_eq!(app.state.high_score, app.state.score);
    }

    #[test]
    fn test_restart_after_terminal_round() {
        let mut app = manual_app(4242);
        app.frame();
        app.press_activate();
        let mut frames = 0;
        while !app.state.phase.is_terminal() && frames < 20 * 60 {
            app.clock.advance(SIM_DT as f64);
            app.frame();
            frames += 1;
        }
        let first_high = app.state.high_score;

        app.press_activate();
        app.clock.advance(SIM_DT as f64);
        app.frame();

        assert_eq!(app.state.phase, GamePhase::Playing);
        assert_eq!(app.state.score, 0);
        assert_eq!(app.state.high_score, first_high);
    }
}
