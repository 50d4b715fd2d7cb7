//! Game state and the per-frame step
//!
//! `GameState::step` is the whole game: input, spawning, falling,
//! collisions, health/score, end detection, and the draw list. It is
//! headless; the host supplies time, screen size, input and randomness.

use rand::Rng;
use super::entity::{Entity, EntityKind, SpriteSizes};
use super::event::{CollectEvent, Events, HitEvent, SpeedUpEvent};
use super::frame::{FrameContext, ScreenSize};
use super::input::InputSnapshot;
use super::rect::Rect;
use super::render::{build_render_list, RenderCommand};
use super::spawn::{spawn_entity, SpawnTimers};

/// Car steering speed (pixels per second)
pub const SPEED: f32 = 600.0;
/// Gasoline fall speed (pixels per second)
pub const SPEED_GASOLINE: f32 = 200.0;
/// Starting fall speed of cones and persons (pixels per second)
pub const INITIAL_CONE_SPEED: f32 = 100.0;
/// Added to the cone speed every `SPEED_UP_EVERY` points
pub const CONE_SPEED_STEP: f32 = 66.0;
pub const SPEED_UP_EVERY: i32 = 10;
pub const INITIAL_HEALTH: i32 = 100;
/// Health value that marks a loss by hitting a person
pub const ARRESTED_HEALTH: i32 = -1;
/// Car distance from the bottom of the screen
pub const PLAYER_Y: f32 = 20.0;

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Health ran out from hitting cones
    Wrecked,
    /// Hit a person
    Arrested,
}

impl Outcome {
    /// None while health is positive
    pub fn from_health(health: i32) -> Option<Self> {
        match health {
            h if h > 0 => None,
            ARRESTED_HEALTH => Some(Outcome::Arrested),
            _ => Some(Outcome::Wrecked),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Wrecked => "The END, U ARE DEAD",
            Outcome::Arrested => "The END, YOU ARE GOING TO PRISON",
        }
    }
}

/// Result of one step
#[derive(Debug, Clone)]
pub struct Frame {
    /// Draw list for this frame
    pub commands: Vec<RenderCommand>,
    /// What happened this frame
    pub events: Events,
    /// The exit key was held
    pub exit_requested: bool,
}

/// Everything the simulation owns
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Rect,
    pub gasolines: Vec<Entity>,
    pub cones: Vec<Entity>,
    pub persons: Vec<Entity>,
    pub score: i32,
    pub health: i32,
    /// Fall speed of cones and persons; only ever increases
    pub cone_speed: f32,
    pub timers: SpawnTimers,
    pub sizes: SpriteSizes,
}

impl GameState {
    /// Fresh state with the car centered and no entities
    pub fn empty(screen: ScreenSize, sizes: SpriteSizes) -> Self {
        let player = Rect::new(
            screen.width / 2.0 - sizes.car.w / 2.0,
            PLAYER_Y,
            sizes.car.w,
            sizes.car.h,
        );
        Self {
            player,
            gasolines: Vec::new(),
            cones: Vec::new(),
            persons: Vec::new(),
            score: 0,
            health: INITIAL_HEALTH,
            cone_speed: INITIAL_CONE_SPEED,
            timers: SpawnTimers::new(),
            sizes,
        }
    }

    /// Start a game: one gasoline can and one cone are already falling
    pub fn new<R: Rng + ?Sized>(screen: ScreenSize, sizes: SpriteSizes, now_ns: u64, rng: &mut R) -> Self {
        let mut state = Self::empty(screen, sizes);
        state.spawn(EntityKind::Gasoline, screen, now_ns, rng);
        state.spawn(EntityKind::Cone, screen, now_ns, rng);
        state
    }

    /// Set once health reaches 0 or below
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_health(self.health)
    }

    pub fn is_over(&self) -> bool {
        self.health <= 0
    }

    /// Advance one frame
    pub fn step<R: Rng + ?Sized>(&mut self, ctx: &FrameContext, input: &InputSnapshot, rng: &mut R) -> Frame {
        let mut events = Events::new();

        let exit_requested = self.apply_input(input, ctx.dt, ctx.screen);

        for kind in EntityKind::ALL {
            if self.timers.is_due(kind, ctx.now_ns) {
                self.spawn(kind, ctx.screen, ctx.now_ns, rng);
            }
        }

        if !self.is_over() {
            self.simulate(ctx.dt, &mut events);
            if let Some(outcome) = self.outcome() {
                events.game_over.send(outcome);
            }
        }

        Frame {
            commands: build_render_list(self, ctx.screen),
            events,
            exit_requested,
        }
    }

    /// Returns true when the exit key is held
    fn apply_input(&mut self, input: &InputSnapshot, dt: f32, screen: ScreenSize) -> bool {
        if let Some(pointer_x) = input.pointer_x {
            self.player.x = pointer_x - self.player.w / 2.0;
        }
        if input.left {
            self.player.x -= SPEED * dt;
            self.player.clamp_x(screen.width);
        }
        if input.right {
            self.player.x += SPEED * dt;
            self.player.clamp_x(screen.width);
        }
        if input.snap_left {
            self.player.x = 0.0;
        }
        if input.snap_right {
            self.player.x = screen.width - self.player.w;
        }
        self.player.clamp_x(screen.width);

        input.exit
    }

    fn spawn<R: Rng + ?Sized>(&mut self, kind: EntityKind, screen: ScreenSize, now_ns: u64, rng: &mut R) {
        let entity = spawn_entity(rng, kind, screen, &self.sizes);
        match kind {
            EntityKind::Gasoline => self.gasolines.push(entity),
            EntityKind::Cone => self.cones.push(entity),
            EntityKind::Person => self.persons.push(entity),
        }
        self.timers.mark(kind, now_ns);
    }

    /// Move everything, resolve collisions, drop what left the screen.
    /// Each collection gets a single retain pass; the closure decides per
    /// entity whether it stays.
    fn simulate(&mut self, dt: f32, events: &mut Events) {
        let player = self.player;
        let cone_speed = self.cone_speed;

        let mut health = self.health;
        self.cones.retain_mut(|cone| {
            cone.fall(cone_speed, dt);
            if cone.rect.overlaps(&player) {
                // Cone damage bottoms out at 0; -1 means a person was hit
                health = (health - 1).max(0);
                events.hits.send(HitEvent { kind: EntityKind::Cone, health });
            }
            !cone.rect.is_below_screen()
        });

        self.persons.retain_mut(|person| {
            person.fall(cone_speed, dt);
            if person.rect.overlaps(&player) {
                health = ARRESTED_HEALTH;
                events.hits.send(HitEvent { kind: EntityKind::Person, health });
            }
            !person.rect.is_below_screen()
        });
        self.health = health;

        let mut score = self.score;
        let mut new_cone_speed = cone_speed;
        self.gasolines.retain_mut(|gasoline| {
            gasoline.fall(SPEED_GASOLINE, dt);
            if gasoline.rect.is_below_screen() {
                return false;
            }
            if gasoline.rect.overlaps(&player) {
                score += 1;
                events.collected.send(CollectEvent { score });
                if score % SPEED_UP_EVERY == 0 {
                    new_cone_speed += CONE_SPEED_STEP;
                    events.speed_up.send(SpeedUpEvent { cone_speed: new_cone_speed });
                }
                return false;
            }
            true
        });
        self.score = score;
        self.cone_speed = new_cone_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::render::{end_message, RenderCommand};
    use crate::game::spawn::{CREATE_CONE_NS, CREATE_GASOLINE_NS, CREATE_PERSON_NS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SCREEN: ScreenSize = ScreenSize::new(800.0, 600.0);

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// State whose timers were all just reset at t=0, so stepping at t=0
    /// never spawns anything
    fn quiet_state() -> GameState {
        let mut state = GameState::empty(SCREEN, SpriteSizes::default());
        for kind in EntityKind::ALL {
            state.timers.mark(kind, 0);
        }
        state
    }

    fn ctx(dt: f32) -> FrameContext {
        FrameContext::new(dt, 0, SCREEN)
    }

    fn step(state: &mut GameState, dt: f32, input: InputSnapshot) -> Frame {
        state.step(&ctx(dt), &input, &mut rng())
    }

    /// An entity of `kind` sitting right on the car
    fn on_player(state: &GameState, kind: EntityKind) -> Entity {
        Entity::new(kind, state.player.x, state.player.y + 10.0, state.sizes.of(kind))
    }

    fn has_text(frame: &Frame, wanted: &RenderCommand) -> bool {
        frame.commands.iter().any(|c| c == wanted)
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(SCREEN, SpriteSizes::default(), 5, &mut rng());
        assert_eq!(state.health, INITIAL_HEALTH);
        assert_eq!(state.score, 0);
        assert_eq!(state.cone_speed, INITIAL_CONE_SPEED);
        assert_eq!(state.player.x, 400.0 - state.sizes.car.w / 2.0);
        assert_eq!(state.player.y, PLAYER_Y);
        assert_eq!(state.gasolines.len(), 1);
        assert_eq!(state.cones.len(), 1);
        assert!(state.persons.is_empty());
        assert_eq!(state.timers.last(EntityKind::Gasoline), Some(5));
        assert_eq!(state.timers.last(EntityKind::Person), None);
    }

    #[test]
    fn test_steering_clamped_to_screen() {
        let mut state = quiet_state();
        let max_x = SCREEN.width - state.player.w;

        step(&mut state, 10.0, InputSnapshot { right: true, ..Default::default() });
        assert_eq!(state.player.x, max_x);

        step(&mut state, 10.0, InputSnapshot { left: true, ..Default::default() });
        assert_eq!(state.player.x, 0.0);

        step(&mut state, 0.1, InputSnapshot { right: true, ..Default::default() });
        assert!((state.player.x - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_pointer_centers_car_and_clamps() {
        let mut state = quiet_state();
        step(&mut state, 0.016, InputSnapshot { pointer_x: Some(300.0), ..Default::default() });
        assert_eq!(state.player.x, 300.0 - state.player.w / 2.0);

        step(&mut state, 0.016, InputSnapshot { pointer_x: Some(5000.0), ..Default::default() });
        assert_eq!(state.player.x, SCREEN.width - state.player.w);

        step(&mut state, 0.016, InputSnapshot { pointer_x: Some(-50.0), ..Default::default() });
        assert_eq!(state.player.x, 0.0);
    }

    #[test]
    fn test_snap_keys() {
        let mut state = quiet_state();
        step(&mut state, 0.0, InputSnapshot { snap_right: true, ..Default::default() });
        assert_eq!(state.player.x, SCREEN.width - state.player.w);
        step(&mut state, 0.0, InputSnapshot { snap_left: true, ..Default::default() });
        assert_eq!(state.player.x, 0.0);
    }

    #[test]
    fn test_exit_requested() {
        let mut state = quiet_state();
        assert!(!step(&mut state, 0.0, InputSnapshot::default()).exit_requested);
        assert!(step(&mut state, 0.0, InputSnapshot { exit: true, ..Default::default() }).exit_requested);
    }

    #[test]
    fn test_pickup_scores_and_removes_only_that_can() {
        let mut state = quiet_state();
        let far = Entity::new(EntityKind::Gasoline, 0.0, 500.0, state.sizes.gasoline);
        state.gasolines.push(far);
        state.gasolines.push(on_player(&state, EntityKind::Gasoline));

        let frame = step(&mut state, 0.0, InputSnapshot::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.gasolines, vec![far]);
        assert_eq!(frame.events.collected.len(), 1);
        assert_eq!(state.health, INITIAL_HEALTH);
    }

    #[test]
    fn test_ten_pickups_speed_up_cones() {
        let mut state = quiet_state();
        for i in 1..=10 {
            state.gasolines.push(on_player(&state, EntityKind::Gasoline));
            let frame = step(&mut state, 0.0, InputSnapshot::default());
            assert_eq!(frame.events.speed_up.is_empty(), i != 10);
            let scores: Vec<i32> = frame.events.collected.iter().map(|e| e.score).collect();
            assert_eq!(scores, vec![i]);
            if i == 10 {
                let speeds: Vec<f32> = frame.events.speed_up.iter().map(|e| e.cone_speed).collect();
                assert_eq!(speeds, vec![166.0]);
            }
        }
        assert_eq!(state.score, 10);
        assert_eq!(state.cone_speed, 166.0);
        assert_eq!(state.health, INITIAL_HEALTH);

        // Speed stays ramped and keeps growing with score
        for _ in 0..10 {
            state.gasolines.push(on_player(&state, EntityKind::Gasoline));
            step(&mut state, 0.0, InputSnapshot::default());
            assert!(state.cone_speed >= 166.0);
        }
        assert_eq!(state.cone_speed, 232.0);
    }

    #[test]
    fn test_ramped_speed_applies_to_cones_and_persons() {
        let mut state = quiet_state();
        state.cone_speed = 166.0;
        state.cones.push(Entity::new(EntityKind::Cone, 0.0, 500.0, state.sizes.cone));
        state.persons.push(Entity::new(EntityKind::Person, 700.0, 500.0, state.sizes.person));
        state.gasolines.push(Entity::new(EntityKind::Gasoline, 0.0, 500.0, state.sizes.gasoline));
        state.player.x = 300.0;

        step(&mut state, 0.5, InputSnapshot::default());
        assert_eq!(state.cones[0].rect.y, 500.0 - 83.0);
        assert_eq!(state.persons[0].rect.y, 500.0 - 83.0);
        assert_eq!(state.gasolines[0].rect.y, 500.0 - 100.0);
    }

    #[test]
    fn test_cone_damage_per_frame() {
        let mut state = quiet_state();
        state.cones.push(on_player(&state, EntityKind::Cone));
        for _ in 0..5 {
            step(&mut state, 0.0, InputSnapshot::default());
        }
        assert_eq!(state.health, 95);
        assert_eq!(state.cones.len(), 1);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_cones_wreck_the_car() {
        let mut state = quiet_state();
        state.health = 5;
        state.cones.push(on_player(&state, EntityKind::Cone));

        let mut game_overs = 0;
        let mut last = None;
        for _ in 0..5 {
            let frame = step(&mut state, 0.0, InputSnapshot::default());
            game_overs += frame.events.game_over.len();
            last = Some(frame);
        }
        assert_eq!(state.health, 0);
        assert_eq!(state.outcome(), Some(Outcome::Wrecked));
        assert_eq!(game_overs, 1);
        let frame = last.unwrap();
        assert!(has_text(&frame, &end_message(Outcome::Wrecked, SCREEN)));

        // Frozen: more frames change nothing
        step(&mut state, 0.0, InputSnapshot::default());
        assert_eq!(state.health, 0);
    }

    #[test]
    fn test_cone_damage_never_reaches_arrested_marker() {
        let mut state = quiet_state();
        state.health = 1;
        state.cones.push(on_player(&state, EntityKind::Cone));
        state.cones.push(on_player(&state, EntityKind::Cone));

        step(&mut state, 0.0, InputSnapshot::default());
        assert_eq!(state.health, 0);
        assert_eq!(state.outcome(), Some(Outcome::Wrecked));
    }

    #[test]
    fn test_person_is_instant_loss() {
        let mut state = quiet_state();
        state.persons.push(on_player(&state, EntityKind::Person));

        let frame = step(&mut state, 0.0, InputSnapshot::default());
        assert_eq!(state.health, ARRESTED_HEALTH);
        assert_eq!(state.outcome(), Some(Outcome::Arrested));
        assert!(has_text(&frame, &end_message(Outcome::Arrested, SCREEN)));
        assert!(!has_text(&frame, &end_message(Outcome::Wrecked, SCREEN)));
        assert_eq!(frame.events.game_over.iter().copied().collect::<Vec<_>>(), vec![Outcome::Arrested]);
        // The person stays
        assert_eq!(state.persons.len(), 1);

        // A cone on top of the car afterwards does nothing
        state.cones.push(on_player(&state, EntityKind::Cone));
        for _ in 0..3 {
            let frame = step(&mut state, 0.1, InputSnapshot::default());
            assert!(frame.events.hits.is_empty());
            assert!(has_text(&frame, &end_message(Outcome::Arrested, SCREEN)));
        }
        assert_eq!(state.health, ARRESTED_HEALTH);
    }

    #[test]
    fn test_person_after_cone_in_same_frame() {
        let mut state = quiet_state();
        state.health = 1;
        state.cones.push(on_player(&state, EntityKind::Cone));
        state.persons.push(on_player(&state, EntityKind::Person));

        let frame = step(&mut state, 0.0, InputSnapshot::default());
        assert_eq!(state.health, ARRESTED_HEALTH);
        assert_eq!(frame.events.hits.len(), 2);
        assert_eq!(frame.events.game_over.len(), 1);
    }

    #[test]
    fn test_world_frozen_after_game_over() {
        let mut state = quiet_state();
        state.health = 0;
        let cone = Entity::new(EntityKind::Cone, 0.0, 300.0, state.sizes.cone);
        let below = Entity::new(EntityKind::Gasoline, 0.0, -500.0, state.sizes.gasoline);
        state.cones.push(cone);
        state.gasolines.push(below);

        for _ in 0..3 {
            step(&mut state, 1.0, InputSnapshot::default());
        }
        assert_eq!(state.cones, vec![cone]);
        assert_eq!(state.gasolines, vec![below]);
    }

    #[test]
    fn test_entities_removed_below_screen() {
        let mut state = quiet_state();
        state.player.x = 600.0;
        state.cones.push(Entity::new(EntityKind::Cone, 0.0, 10.0, state.sizes.cone));
        state.persons.push(Entity::new(EntityKind::Person, 0.0, 10.0, state.sizes.person));
        state.gasolines.push(Entity::new(EntityKind::Gasoline, 0.0, 10.0, state.sizes.gasoline));

        step(&mut state, 2.0, InputSnapshot::default());
        assert!(state.cones.is_empty());
        assert!(state.persons.is_empty());
        assert!(state.gasolines.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.health, INITIAL_HEALTH);
    }

    #[test]
    fn test_spawn_cadence_per_kind() {
        for (kind, interval) in [
            (EntityKind::Gasoline, CREATE_GASOLINE_NS),
            (EntityKind::Cone, CREATE_CONE_NS),
            (EntityKind::Person, CREATE_PERSON_NS),
        ] {
            let mut state = GameState::empty(SCREEN, SpriteSizes::default());
            let mut rng = rng();
            for frame in 0..6u64 {
                let ctx = FrameContext::new(0.0, frame * (interval + 1), SCREEN);
                state.step(&ctx, &InputSnapshot::default(), &mut rng);
                let count = match kind {
                    EntityKind::Gasoline => state.gasolines.len(),
                    EntityKind::Cone => state.cones.len(),
                    EntityKind::Person => state.persons.len(),
                };
                assert_eq!(count as u64, frame + 1, "{} after frame {}", kind.label(), frame);
            }
        }
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut state = quiet_state();
        let ctx = FrameContext::new(0.0, CREATE_GASOLINE_NS, SCREEN);
        state.step(&ctx, &InputSnapshot::default(), &mut rng());
        assert!(state.gasolines.is_empty());

        let ctx = FrameContext::new(0.0, CREATE_GASOLINE_NS + 1, SCREEN);
        state.step(&ctx, &InputSnapshot::default(), &mut rng());
        assert_eq!(state.gasolines.len(), 1);
        assert!(state.cones.is_empty());
        assert!(state.persons.is_empty());
    }

    #[test]
    fn test_spawning_continues_after_game_over() {
        let mut state = quiet_state();
        state.health = 0;
        let ctx = FrameContext::new(1.0, CREATE_GASOLINE_NS + 1, SCREEN);
        state.step(&ctx, &InputSnapshot::default(), &mut rng());
        assert_eq!(state.gasolines.len(), 1);
        assert_eq!(state.gasolines[0].rect.y, SCREEN.height);
    }

    #[test]
    fn test_outcome_from_health() {
        assert_eq!(Outcome::from_health(1), None);
        assert_eq!(Outcome::from_health(0), Some(Outcome::Wrecked));
        assert_eq!(Outcome::from_health(-1), Some(Outcome::Arrested));
        assert_eq!(Outcome::from_health(-7), Some(Outcome::Wrecked));
    }
}
