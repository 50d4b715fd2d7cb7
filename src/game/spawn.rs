//! Timed entity spawning
//!
//! Each entity kind has its own fixed-interval timer. A kind is due when
//! strictly more than its interval has passed since its last spawn, or when
//! it has never spawned.

use rand::Rng;
use super::entity::{Entity, EntityKind, SpriteSizes};
use super::frame::ScreenSize;

/// Gasoline spawn interval (ns)
pub const CREATE_GASOLINE_NS: u64 = 1_000_000_000;
/// Cone spawn interval (ns)
pub const CREATE_CONE_NS: u64 = 2_000_000_000;
/// Person spawn interval (ns)
pub const CREATE_PERSON_NS: u64 = 2_111_111_111;

/// Spawn interval for a kind, in nanoseconds
pub fn interval_ns(kind: EntityKind) -> u64 {
    match kind {
        EntityKind::Gasoline => CREATE_GASOLINE_NS,
        EntityKind::Cone => CREATE_CONE_NS,
        EntityKind::Person => CREATE_PERSON_NS,
    }
}

/// Last spawn timestamp per kind
#[derive(Debug, Clone, Default)]
pub struct SpawnTimers {
    gasoline: Option<u64>,
    cone: Option<u64>,
    person: Option<u64>,
}

impl SpawnTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// When this kind last spawned (None = never)
    pub fn last(&self, kind: EntityKind) -> Option<u64> {
        match kind {
            EntityKind::Gasoline => self.gasoline,
            EntityKind::Cone => self.cone,
            EntityKind::Person => self.person,
        }
    }

    fn slot(&mut self, kind: EntityKind) -> &mut Option<u64> {
        match kind {
            EntityKind::Gasoline => &mut self.gasoline,
            EntityKind::Cone => &mut self.cone,
            EntityKind::Person => &mut self.person,
        }
    }

    pub fn is_due(&self, kind: EntityKind, now_ns: u64) -> bool {
        match self.last(kind) {
            Some(last) => now_ns.saturating_sub(last) > interval_ns(kind),
            None => true,
        }
    }

    pub fn mark(&mut self, kind: EntityKind, now_ns: u64) {
        *self.slot(kind) = Some(now_ns);
    }
}

/// Width used as the upper bound of the random spawn x.
///
/// Gasoline and cones both use the gasoline width here; only persons use
/// their own. Collision still uses each entity's real size.
pub fn spawn_bound_width(kind: EntityKind, sizes: &SpriteSizes) -> f32 {
    match kind {
        EntityKind::Gasoline | EntityKind::Cone => sizes.gasoline.w,
        EntityKind::Person => sizes.person.w,
    }
}

/// Uniform random integer x in `[0, screen_width - bound_width]`
pub fn spawn_x<R: Rng + ?Sized>(rng: &mut R, screen_width: f32, bound_width: f32) -> f32 {
    let max = screen_width as i32 - bound_width as i32;
    if max <= 0 {
        return 0.0;
    }
    rng.gen_range(0..=max) as f32
}

/// Create a new entity of `kind` just above the top edge of the screen
pub fn spawn_entity<R: Rng + ?Sized>(
    rng: &mut R,
    kind: EntityKind,
    screen: ScreenSize,
    sizes: &SpriteSizes,
) -> Entity {
    let x = spawn_x(rng, screen.width, spawn_bound_width(kind, sizes));
    Entity::new(kind, x, screen.height, sizes.of(kind))
}
