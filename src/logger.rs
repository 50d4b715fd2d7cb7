//! Logging setup
//!
//! `tracing` macros are used throughout. On native builds a fmt subscriber
//! prints them to stdout, filtered by `RUST_LOG` when set and otherwise by
//! the config's `log_filter`. On WASM no subscriber is installed.

#[cfg(not(target_arch = "wasm32"))]
pub fn init(default_filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init(_default_filter: &str) {}
