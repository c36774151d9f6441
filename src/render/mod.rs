//! Drawing helpers shared by the states: fullscreen blits, anchored
//! text, and the task progress bar.

use macroquad::prelude::*;

/// The hand-picked sprite palette.
pub mod palette {
    use macroquad::color::Color;

    pub const WHITE: Color = Color::new(253.0 / 255.0, 250.0 / 255.0, 243.0 / 255.0, 1.0);
    pub const BLACK: Color = Color::new(56.0 / 255.0, 54.0 / 255.0, 57.0 / 255.0, 1.0);
    pub const RED: Color = Color::new(255.0 / 255.0, 96.0 / 255.0, 137.0 / 255.0, 1.0);
    pub const GREEN: Color = Color::new(169.0 / 255.0, 220.0 / 255.0, 199.0 / 255.0, 1.0);
    pub const BLUE: Color = Color::new(119.0 / 255.0, 220.0 / 255.0, 230.0 / 255.0, 1.0);
}

/// Blit an image scaled to the whole window.
pub fn draw_fullscreen(texture: &Texture2D) {
    draw_texture_ex(
        texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(screen_width(), screen_height())),
            ..Default::default()
        },
    );
}

/// Draw text with its top edge at `y`, horizontally centered on `x`.
pub fn draw_text_midtop(font: &Font, text: &str, size: u16, x: f32, y: f32, color: Color) {
    let dims = measure_text(text, Some(font), size, 1.0);
    draw_text_ex(
        text,
        x - dims.width / 2.0,
        y + dims.offset_y,
        TextParams {
            font: Some(font),
            font_size: size,
            color,
            ..Default::default()
        },
    );
}

const BAR_WIDTH: f32 = 40.0;
const BAR_HEIGHT: f32 = 400.0;

/// Vertical progress bar: green backdrop, white fill growing downward,
/// dark outline. `fill` is 0.0..=1.0.
pub fn draw_progress_bar(x: f32, y: f32, fill: f32) {
    let fill = fill.clamp(0.0, 1.0);
    draw_rectangle(x, y, BAR_WIDTH, BAR_HEIGHT, palette::GREEN);
    draw_rectangle(x, y, BAR_WIDTH, BAR_HEIGHT * fill, palette::WHITE);
    draw_rectangle_lines(x, y, BAR_WIDTH, BAR_HEIGHT, 4.0, palette::BLACK);
}
