//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad; every query reports released

/// How far the left stick must be pushed to count as steering
pub const STICK_THRESHOLD: f32 = 0.5;

/// Gamepad buttons the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    DPadLeft,
    DPadRight,
    /// Left bumper: snap to the left edge
    LeftBumper,
    /// Right bumper: snap to the right edge
    RightBumper,
    Start,
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::PadButton;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn is_button_down(&self, _button: PadButton) -> bool {
            false
        }

        pub fn left_stick_x(&self) -> f32 {
            0.0
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::PadButton;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the gamepad backend failed to start
        gilrs: Option<Gilrs>,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    tracing::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs }
        }

        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            // Events are processed internally by gilrs
            while let Some(event) = gilrs.next_event() {
                if let gilrs::EventType::Connected = event.event {
                    tracing::info!("Gamepad connected: {}", gilrs.gamepad(event.id).name());
                }
            }
        }

        fn active_gamepad(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        pub fn is_button_down(&self, button: PadButton) -> bool {
            let Some(gp) = self.active_gamepad() else { return false };
            let button = match button {
                PadButton::DPadLeft => GilrsButton::DPadLeft,
                PadButton::DPadRight => GilrsButton::DPadRight,
                PadButton::LeftBumper => GilrsButton::LeftTrigger,
                PadButton::RightBumper => GilrsButton::RightTrigger,
                PadButton::Start => GilrsButton::Start,
            };
            gp.is_pressed(button)
        }

        pub fn left_stick_x(&self) -> f32 {
            let Some(gp) = self.active_gamepad() else { return 0.0 };
            gp.value(Axis::LeftStickX)
        }
    }
}

pub use platform::Gamepad;

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

impl Gamepad {
    /// Steering direction from d-pad or stick: -1, 0 or 1
    pub fn steer(&self) -> i32 {
        let stick = self.left_stick_x();
        let left = self.is_button_down(PadButton::DPadLeft) || stick <= -STICK_THRESHOLD;
        let right = self.is_button_down(PadButton::DPadRight) || stick >= STICK_THRESHOLD;
        right as i32 - left as i32
    }
}
