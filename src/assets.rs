//! Textures and sound
//!
//! Everything is loaded once at startup and released together at shutdown.
//! A missing file never stops the game: a missing texture is drawn as a
//! flat placeholder box with a default size, a missing sound means silence.

use std::collections::HashMap;
use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;
use crate::config::AssetPaths;
use crate::game::{Size, Sprite, SpriteSizes};

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    /// Texture could not be loaded
    Texture { name: String, source: String },
    /// Sound could not be loaded
    Sound { name: String, source: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Texture { name, source } => write!(f, "Failed to load texture {}: {}", name, source),
            AssetError::Sound { name, source } => write!(f, "Failed to load sound {}: {}", name, source),
        }
    }
}

impl std::error::Error for AssetError {}

/// File name of a sprite's image
fn sprite_file(paths: &AssetPaths, sprite: Sprite) -> &str {
    match sprite {
        Sprite::Background => &paths.background,
        Sprite::Car => &paths.car,
        Sprite::Gasoline => &paths.gasoline,
        Sprite::Cone => &paths.cone,
        Sprite::Person => &paths.person,
    }
}

/// Entity sizes from whatever textures are available; missing ones keep
/// their placeholder size
pub fn sizes_from(texture_size: impl Fn(Sprite) -> Option<Size>) -> SpriteSizes {
    let defaults = SpriteSizes::default();
    SpriteSizes {
        car: texture_size(Sprite::Car).unwrap_or(defaults.car),
        gasoline: texture_size(Sprite::Gasoline).unwrap_or(defaults.gasoline),
        cone: texture_size(Sprite::Cone).unwrap_or(defaults.cone),
        person: texture_size(Sprite::Person).unwrap_or(defaults.person),
    }
}

/// All loaded game assets
pub struct GameAssets {
    textures: HashMap<Sprite, Texture2D>,
    sound: Option<Sound>,
}

impl GameAssets {
    /// Load every texture and the sound, logging what is missing
    pub async fn load(paths: &AssetPaths) -> Self {
        let mut textures = HashMap::new();
        for sprite in Sprite::ALL {
            match load_sprite(paths, sprite).await {
                Ok(texture) => {
                    textures.insert(sprite, texture);
                }
                Err(e) => tracing::warn!("{}; drawing a placeholder", e),
            }
        }

        let sound = match load_pick_sound(paths).await {
            Ok(sound) => Some(sound),
            Err(e) => {
                tracing::warn!("{}; playing without sound", e);
                None
            }
        };

        tracing::info!(
            textures = textures.len(),
            sound = sound.is_some(),
            "Loaded assets from {}",
            paths.dir
        );
        Self { textures, sound }
    }

    pub fn texture(&self, sprite: Sprite) -> Option<&Texture2D> {
        self.textures.get(&sprite)
    }

    pub fn sound(&self) -> Option<&Sound> {
        self.sound.as_ref()
    }

    /// Entity sizes measured from the loaded textures
    pub fn sizes(&self) -> SpriteSizes {
        sizes_from(|sprite| {
            self.texture(sprite)
                .map(|texture| Size::new(texture.width(), texture.height()))
        })
    }

    /// Release every texture and the sound
    pub fn dispose(self) {
        let count = self.textures.len() + usize::from(self.sound.is_some());
        drop(self.textures);
        drop(self.sound);
        tracing::info!("Released {} assets", count);
    }
}

async fn load_sprite(paths: &AssetPaths, sprite: Sprite) -> Result<Texture2D, AssetError> {
    let path = paths.path(sprite_file(paths, sprite));
    let texture = load_texture(&path)
        .await
        .map_err(|e| AssetError::Texture { name: path.clone(), source: e.to_string() })?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

async fn load_pick_sound(paths: &AssetPaths) -> Result<Sound, AssetError> {
    let path = paths.path(&paths.sound);
    load_sound(&path)
        .await
        .map_err(|e| AssetError::Sound { name: path.clone(), source: e.to_string() })
}
