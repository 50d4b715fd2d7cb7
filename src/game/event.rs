//! Event System
//!
//! The simulation never talks to audio or logging directly. It records what
//! happened during a frame as events, and the host reacts to them after the
//! step (play a sound, write a log line).

use super::entity::EntityKind;
use super::state::Outcome;

/// A queue for events of a single type, collected during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The car touched a cone or a person
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub kind: EntityKind,
    /// Health after the hit was applied
    pub health: i32,
}

/// A gasoline can was collected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectEvent {
    /// Score after collecting
    pub score: i32,
}

/// Cones and persons now fall faster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedUpEvent {
    pub cone_speed: f32,
}

/// Everything that happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub hits: EventQueue<HitEvent>,
    pub collected: EventQueue<CollectEvent>,
    pub speed_up: EventQueue<SpeedUpEvent>,
    /// Sent once, on the frame the game ends
    pub game_over: EventQueue<Outcome>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing happened this frame
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
            && self.collected.is_empty()
            && self.speed_up.is_empty()
            && self.game_over.is_empty()
    }

    /// Number of sound effects this frame (every hit and pickup plays one)
    pub fn sound_count(&self) -> usize {
        self.hits.len() + self.collected.len()
    }
}
