//! Application lifecycle
//!
//! `App::init` loads assets and starts a game, `App::frame` runs one frame
//! (poll input, step the simulation, log its events, play sounds, draw), and
//! `App::shutdown` releases everything. `App::run` drives the three from
//! macroquad's frame loop.

use macroquad::prelude::*;
// The prelude glob brings in macroquad's own `rand` module
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use crate::assets::GameAssets;
use crate::audio;
use crate::config::{Config, FpsLimit};
use crate::game::{Events, FrameContext, GameClock, GameState, Outcome, ScreenSize};
use crate::input::InputState;
use crate::renderer;

pub struct App {
    config: Config,
    assets: GameAssets,
    input: InputState,
    rng: StdRng,
    clock: GameClock,
    state: GameState,
}

impl App {
    pub async fn init(config: Config) -> Self {
        let assets = GameAssets::load(&config.assets).await;

        let seed = config.seed.unwrap_or_else(clock_seed);
        tracing::info!(seed, fps_limit = ?config.fps_limit, "Starting game");
        let mut rng = StdRng::seed_from_u64(seed);

        let clock = GameClock::new();
        let state = GameState::new(current_screen(), assets.sizes(), clock.now_ns(), &mut rng);

        Self {
            config,
            assets,
            input: InputState::new(),
            rng,
            clock,
            state,
        }
    }

    /// Run one frame. Returns false once the player asked to quit.
    pub fn frame(&mut self) -> bool {
        let screen = current_screen();
        let dt = get_frame_time();
        let ctx = FrameContext::new(dt, self.clock.advance(dt), screen);
        let input = self.input.poll(screen);

        let frame = self.state.step(&ctx, &input, &mut self.rng);

        log_events(&frame.events);
        audio::play_events(&frame.events, &self.assets, &self.config.audio);
        renderer::draw_frame(&frame.commands, &self.assets, screen);

        !frame.exit_requested
    }

    pub async fn run(mut self) {
        loop {
            // Track frame start time for FPS limiting
            let frame_start = get_time();

            if !self.frame() {
                tracing::info!("Exit requested");
                break;
            }

            limit_fps(self.config.fps_limit, frame_start);
            next_frame().await;
        }
        self.shutdown();
    }

    pub fn shutdown(self) {
        let outcome = match self.state.outcome() {
            Some(Outcome::Arrested) => "arrested",
            Some(Outcome::Wrecked) => "wrecked",
            None => "quit",
        };
        tracing::info!(score = self.state.score, health = self.state.health, outcome, "Shutting down");
        self.assets.dispose();
    }
}

/// Write a log line for everything the simulation reported this frame
fn log_events(events: &Events) {
    if events.is_empty() {
        return;
    }
    for hit in events.hits.iter() {
        tracing::debug!(kind = hit.kind.label(), health = hit.health, "Hit");
    }
    for collect in events.collected.iter() {
        tracing::debug!(score = collect.score, "Collected gasoline");
    }
    for speed_up in events.speed_up.iter() {
        tracing::info!(cone_speed = speed_up.cone_speed, "Speed up");
    }
    for outcome in events.game_over.iter() {
        tracing::info!(?outcome, "Game over");
    }
}

fn current_screen() -> ScreenSize {
    ScreenSize::new(screen_width(), screen_height())
}

/// Seed from wall-clock milliseconds (available on native and WASM)
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

/// Wait out the rest of the frame budget
fn limit_fps(limit: FpsLimit, frame_start: f64) {
    let Some(target_frame_time) = limit.frame_time() else { return };

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: no thread::sleep; the browser paces frames
    #[cfg(target_arch = "wasm32")]
    {
        let _ = (target_frame_time, frame_start);
    }
}
