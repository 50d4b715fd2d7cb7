//! Input handling with gamepad support
//!
//! Polls keyboard, pointer and gamepad into a single snapshot per frame.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard, mouse and touch only

mod gamepad;
mod state;

pub use state::InputState;
