//! Input polling
//!
//! Reads keyboard, mouse/touch (macroquad) and gamepad once per frame and
//! folds them into one `InputSnapshot` for the simulation.
//!
//! Keyboard: Left/Right steer, A/S snap to the edges, Escape quits.
//! Gamepad: D-pad or left stick steer, LB/RB snap, Start quits.

use macroquad::prelude::*;
use super::gamepad::{Gamepad, PadButton};
use crate::game::{InputSnapshot, ScreenSize};

/// Unified input state that handles keyboard, pointer and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame
    pub fn poll(&mut self, screen: ScreenSize) -> InputSnapshot {
        self.gamepad.poll();
        let steer = self.gamepad.steer();

        InputSnapshot {
            pointer_x: pointer_screen_x().map(|x| unproject_x(x, screen)),
            left: is_key_down(KeyCode::Left) || steer < 0,
            right: is_key_down(KeyCode::Right) || steer > 0,
            snap_left: is_key_down(KeyCode::A) || self.gamepad.is_button_down(PadButton::LeftBumper),
            snap_right: is_key_down(KeyCode::S) || self.gamepad.is_button_down(PadButton::RightBumper),
            exit: is_key_down(KeyCode::Escape) || self.gamepad.is_button_down(PadButton::Start),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen x of the first held touch, or of the mouse while the left button
/// is down
fn pointer_screen_x() -> Option<f32> {
    if let Some(touch) = touches().iter().find(|t| is_touch_held(t.phase)) {
        return Some(touch.position.x);
    }
    if is_mouse_button_down(MouseButton::Left) {
        return Some(mouse_position().0);
    }
    None
}

/// A finger still on the screen. Released and cancelled touches are
/// reported for one more frame and must not move the car.
fn is_touch_held(phase: TouchPhase) -> bool {
    matches!(phase, TouchPhase::Started | TouchPhase::Moved | TouchPhase::Stationary)
}

/// Screen x to world x. The camera is orthographic over the whole screen,
/// so x maps one-to-one; only y is flipped, and the car ignores y. A mouse
/// dragged past the window edge is pulled back onto the screen.
fn unproject_x(screen_x: f32, screen: ScreenSize) -> f32 {
    screen_x.clamp(0.0, screen.width)
}
