//! Game Simulation
//!
//! The headless core of Road Rush. One `GameState::step` per frame takes
//! timing, screen size and an input snapshot, and returns the draw list
//! plus the events of that frame. Nothing in here touches the window,
//! textures or audio, so the whole game runs in unit tests.
//!
//! - rect: axis-aligned rectangles and the overlap test
//! - entity: falling entity kinds and sprite sizes
//! - spawn: per-kind spawn timers and random placement
//! - state: game state, the step function, end detection
//! - render: draw list emission
//! - event: per-frame event queues for the host

pub mod rect;
pub mod entity;
pub mod frame;
pub mod input;
pub mod spawn;
pub mod event;
pub mod state;
pub mod render;

// Re-export main types
pub use entity::{Size, Sprite, SpriteSizes};
pub use event::Events;
pub use frame::{FrameContext, GameClock, ScreenSize};
pub use input::InputSnapshot;
pub use render::{RenderCommand, TextColor};
pub use state::{GameState, Outcome};
