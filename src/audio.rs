//! Sound effects
//!
//! Fire-and-forget: every hit and every pickup plays the shared sound once.

use macroquad::audio::{play_sound, PlaySoundParams};
use crate::assets::GameAssets;
use crate::config::AudioSettings;
use crate::game::Events;

/// Play one sound per hit/pickup recorded this frame
pub fn play_events(events: &Events, assets: &GameAssets, settings: &AudioSettings) {
    let Some(volume) = settings.effective_volume() else { return };
    let Some(sound) = assets.sound() else { return };

    for _ in 0..events.sound_count() {
        play_sound(sound, PlaySoundParams { looped: false, volume });
    }
}
