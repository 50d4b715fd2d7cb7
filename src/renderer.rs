//! Draw list execution
//!
//! Runs the simulation's render commands against macroquad. Commands are in
//! world space (bottom-left origin, y up); macroquad draws top-left origin,
//! y down, so every y is flipped here.

use macroquad::prelude::*;
use crate::assets::GameAssets;
use crate::game::{RenderCommand, ScreenSize, Sprite, TextColor};

/// Overlay font size (the default font at 2x scale)
pub const FONT_SIZE: u16 = 30;

/// Screen-space top of something whose world-space bottom is `world_y`
pub fn flip_y(world_y: f32, height: f32, screen_height: f32) -> f32 {
    screen_height - world_y - height
}

fn placeholder_color(sprite: Sprite) -> Color {
    match sprite {
        Sprite::Background => DARKGRAY,
        Sprite::Car => SKYBLUE,
        Sprite::Gasoline => GOLD,
        Sprite::Cone => ORANGE,
        Sprite::Person => PINK,
    }
}

fn text_color(color: TextColor) -> Color {
    match color {
        TextColor::Red => RED,
        TextColor::Yellow => YELLOW,
        TextColor::Green => GREEN,
    }
}

/// Clear the screen and draw every command in order
pub fn draw_frame(commands: &[RenderCommand], assets: &GameAssets, screen: ScreenSize) {
    clear_background(BLACK);

    for command in commands {
        match command {
            RenderCommand::Sprite { sprite, rect } => match assets.texture(*sprite) {
                Some(texture) => {
                    let y = flip_y(rect.y, texture.height(), screen.height);
                    draw_texture(texture, rect.x, y, WHITE);
                }
                None => {
                    let y = flip_y(rect.y, rect.h, screen.height);
                    draw_rectangle(rect.x, y, rect.w, rect.h, placeholder_color(*sprite));
                }
            },
            RenderCommand::Text { text, x, y, color } => {
                // (x, y) is the top-left of the text; macroquad wants the baseline
                let dims = measure_text(text, None, FONT_SIZE, 1.0);
                let top = flip_y(*y, 0.0, screen.height);
                draw_text(text, *x, top + dims.offset_y, FONT_SIZE as f32, text_color(*color));
            }
        }
    }
}
