//! Road Rush: a tiny arcade driving game
//!
//! Steer the car along the bottom of the road. Collect falling gasoline for
//! points, avoid cones (they cost health) and never hit a pedestrian (game
//! over on the spot). Every 10 points the traffic gets faster.
//!
//! The game logic lives in the headless `game` module; everything else
//! wires it to macroquad for windowing, drawing, sound and input.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod audio;
mod config;
mod game;
mod input;
mod logger;
mod renderer;

use macroquad::prelude::*;
use app::App;
use config::{Config, ConfigSource, WindowSettings};

fn window_conf(settings: &WindowSettings) -> Conf {
    Conf {
        window_title: format!("{} v{}", settings.title, VERSION),
        window_width: settings.width,
        window_height: settings.height,
        window_resizable: settings.resizable,
        high_dpi: settings.high_dpi,
        ..Default::default()
    }
}

fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let (config, source) = Config::load();
    logger::init(&config.log_filter);
    match source {
        ConfigSource::Defaults => tracing::info!("No config file found, using defaults"),
        ConfigSource::File(path) => tracing::info!("Loaded config from {}", path.display()),
        ConfigSource::Invalid(path, e) => {
            tracing::warn!("Ignoring config {}: {}; using defaults", path.display(), e)
        }
    }

    tracing::info!("=== ROAD RUSH v{} ===", VERSION);

    macroquad::Window::from_config(window_conf(&config.window), async move {
        App::init(config).await.run().await;
    });
}
