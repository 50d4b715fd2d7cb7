//! Render command emission
//!
//! The simulation describes a frame as a flat list of draw commands in
//! world space (bottom-left origin, y up). The host renderer executes them
//! in order.

use super::entity::Sprite;
use super::frame::ScreenSize;
use super::rect::Rect;
use super::state::{GameState, Outcome};

/// Colors used for text overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Red,
    Yellow,
    Green,
}

/// A single draw call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a sprite with its bottom-left corner at `rect.x, rect.y`
    Sprite { sprite: Sprite, rect: Rect },
    /// Draw text with its top-left corner at `x, y`
    Text { text: String, x: f32, y: f32, color: TextColor },
}

/// Build the draw list for the current state: background, car, cones,
/// persons, gasoline, then score and health overlays. The end message, if
/// any, goes last so it sits on top.
pub fn build_render_list(state: &GameState, screen: ScreenSize) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(
        state.cones.len() + state.persons.len() + state.gasolines.len() + 5,
    );

    commands.push(RenderCommand::Sprite {
        sprite: Sprite::Background,
        rect: Rect::new(0.0, 0.0, screen.width, screen.height),
    });
    commands.push(RenderCommand::Sprite { sprite: Sprite::Car, rect: state.player });

    for entity in state.cones.iter().chain(&state.persons).chain(&state.gasolines) {
        commands.push(RenderCommand::Sprite { sprite: entity.kind.sprite(), rect: entity.rect });
    }

    commands.push(RenderCommand::Text {
        text: state.score.to_string(),
        x: screen.width - 50.0,
        y: screen.height - 20.0,
        color: TextColor::Yellow,
    });
    commands.push(RenderCommand::Text {
        text: state.health.to_string(),
        x: 20.0,
        y: screen.height - 20.0,
        color: TextColor::Green,
    });

    if let Some(outcome) = state.outcome() {
        commands.push(end_message(outcome, screen));
    }

    commands
}

/// The red end-of-game banner
pub fn end_message(outcome: Outcome, screen: ScreenSize) -> RenderCommand {
    RenderCommand::Text {
        text: outcome.message().to_string(),
        x: screen.height / 2.0,
        y: screen.height / 2.0,
        color: TextColor::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::{Entity, EntityKind, SpriteSizes};

    fn state() -> (GameState, ScreenSize) {
        let screen = ScreenSize::new(800.0, 600.0);
        (GameState::empty(screen, SpriteSizes::default()), screen)
    }

    #[test]
    fn test_draw_order() {
        let (mut state, screen) = state();
        let size = SpriteSizes::default();
        state.gasolines.push(Entity::new(EntityKind::Gasoline, 1.0, 300.0, size.gasoline));
        state.cones.push(Entity::new(EntityKind::Cone, 2.0, 300.0, size.cone));
        state.persons.push(Entity::new(EntityKind::Person, 3.0, 300.0, size.person));

        let sprites: Vec<Sprite> = build_render_list(&state, screen)
            .into_iter()
            .filter_map(|c| match c {
                RenderCommand::Sprite { sprite, .. } => Some(sprite),
                _ => None,
            })
            .collect();
        assert_eq!(
            sprites,
            vec![Sprite::Background, Sprite::Car, Sprite::Cone, Sprite::Person, Sprite::Gasoline]
        );
    }

    #[test]
    fn test_overlays() {
        let (mut state, screen) = state();
        state.score = 7;
        let commands = build_render_list(&state, screen);
        assert!(commands.contains(&RenderCommand::Text {
            text: "7".to_string(),
            x: 750.0,
            y: 580.0,
            color: TextColor::Yellow,
        }));
        assert!(commands.contains(&RenderCommand::Text {
            text: "100".to_string(),
            x: 20.0,
            y: 580.0,
            color: TextColor::Green,
        }));
        // Still playing: no end message
        assert!(!commands.iter().any(|c| matches!(c, RenderCommand::Text { color: TextColor::Red, .. })));
    }

    #[test]
    fn test_end_message_on_top() {
        let (mut state, screen) = state();
        state.health = 0;
        let commands = build_render_list(&state, screen);
        assert_eq!(commands.last(), Some(&end_message(Outcome::Wrecked, screen)));
    }
}
