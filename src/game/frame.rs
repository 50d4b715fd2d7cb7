//! Per-frame inputs from the host
//!
//! The host samples the clock and screen once per frame and hands them to
//! the simulation, so the simulation never queries the engine directly.

/// Screen dimensions in pixels. May change between frames (window resize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Timing and screen data for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Monotonic clock in nanoseconds
    pub now_ns: u64,
    pub screen: ScreenSize,
}

impl FrameContext {
    pub fn new(dt: f32, now_ns: u64, screen: ScreenSize) -> Self {
        Self { dt, now_ns, screen }
    }
}

/// Game time in nanoseconds, summed from frame deltas.
///
/// The engine's wall clock can step backwards when the system time is
/// adjusted. Summing non-negative deltas never does, so spawn timers keep
/// firing whatever the wall clock does.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameClock {
    now_ns: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ns(&self) -> u64 {
        self.now_ns
    }

    /// Add one frame's delta (seconds) and return the new time
    pub fn advance(&mut self, dt: f32) -> u64 {
        self.now_ns = self.now_ns.saturating_add(secs_to_nanos(f64::from(dt)));
        self.now_ns
    }
}

/// Convert a seconds timestamp to whole nanoseconds (negative clamps to 0)
pub fn secs_to_nanos(secs: f64) -> u64 {
    (secs.max(0.0) * 1_000_000_000.0) as u64
}
