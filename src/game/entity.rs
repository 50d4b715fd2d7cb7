//! Falling entities and sprite sizes
//!
//! Every entity is a plain rectangle tagged with its kind. The kind decides
//! how fast it falls and what happens when it touches the car.

use super::rect::Rect;

/// The three kinds of falling entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Pickup: scores a point and is removed on contact
    Gasoline,
    /// Obstacle: deals 1 damage per frame of contact
    Cone,
    /// Hazard: instant loss on contact
    Person,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Gasoline, EntityKind::Cone, EntityKind::Person];

    pub fn sprite(self) -> Sprite {
        match self {
            EntityKind::Gasoline => Sprite::Gasoline,
            EntityKind::Cone => Sprite::Cone,
            EntityKind::Person => Sprite::Person,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Gasoline => "gasoline",
            EntityKind::Cone => "cone",
            EntityKind::Person => "person",
        }
    }
}

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Car,
    Gasoline,
    Cone,
    Person,
}

impl Sprite {
    pub const ALL: [Sprite; 5] = [
        Sprite::Background,
        Sprite::Car,
        Sprite::Gasoline,
        Sprite::Cone,
        Sprite::Person,
    ];
}

/// Pixel size of a sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Sizes of the entity sprites, measured from the loaded textures.
/// Entity rectangles take their size from here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub car: Size,
    pub gasoline: Size,
    pub cone: Size,
    pub person: Size,
}

impl SpriteSizes {
    pub fn of(&self, kind: EntityKind) -> Size {
        match kind {
            EntityKind::Gasoline => self.gasoline,
            EntityKind::Cone => self.cone,
            EntityKind::Person => self.person,
        }
    }
}

impl Default for SpriteSizes {
    /// Placeholder sizes used when a texture is missing
    fn default() -> Self {
        Self {
            car: Size::new(64.0, 128.0),
            gasoline: Size::new(48.0, 48.0),
            cone: Size::new(48.0, 56.0),
            person: Size::new(48.0, 96.0),
        }
    }
}

/// A falling entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub rect: Rect,
}

impl Entity {
    pub fn new(kind: EntityKind, x: f32, y: f32, size: Size) -> Self {
        Self {
            kind,
            rect: Rect::new(x, y, size.w, size.h),
        }
    }

    /// Move down by `speed * dt`
    pub fn fall(&mut self, speed: f32, dt: f32) {
        self.rect.y -= speed * dt;
    }
}
