//! Input snapshot consumed by the simulation
//!
//! The host polls keyboard, pointer and gamepad once per frame and fills
//! this struct. Several fields may be set at once; they all apply.

/// Polled input state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// World-space x of the pointer/touch, when it is down
    pub pointer_x: Option<f32>,
    /// Steer left (held)
    pub left: bool,
    /// Steer right (held)
    pub right: bool,
    /// Teleport to the left edge
    pub snap_left: bool,
    /// Teleport to the right edge
    pub snap_right: bool,
    /// Quit the game
    pub exit: bool,
}
