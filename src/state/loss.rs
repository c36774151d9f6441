use anyhow::Result;
use macroquad::prelude::{screen_height, screen_width};

use super::{GameState, StateId, StateStatus};
use crate::game::GameContext;
use crate::input::{GameKey, KeyEvent};
use crate::render::{self, palette};

/// Game over screen: shows the final score. Enter returns to the menu,
/// Escape quits.
pub struct Loss {
    status: StateStatus,
    final_score: u32,
}

impl Loss {
    pub fn new() -> Self {
        Self {
            status: StateStatus::default(),
            final_score: 0,
        }
    }
}

impl GameState for Loss {
    fn status(&self) -> &StateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut StateStatus {
        &mut self.status
    }

    fn startup(&mut self, ctx: &mut GameContext) -> Result<()> {
        self.final_score = ctx.session.score();
        ctx.audio.play_music("piano-lofi-rain");
        Ok(())
    }

    fn handle_event(&mut self, event: KeyEvent) {
        if !event.pressed {
            return;
        }
        match event.key {
            GameKey::Escape => self.status.quit = true,
            GameKey::Enter => self.status.finish(StateId::Menu),
            _ => {}
        }
    }

    fn update(&mut self, _dt: f32, _ctx: &mut GameContext) -> Result<()> {
        Ok(())
    }

    fn draw(&self, ctx: &GameContext) -> Result<()> {
        render::draw_fullscreen(ctx.assets.image("game-over")?);
        render::draw_text_midtop(
            ctx.assets.font("OpenSans-Regular")?,
            &format!("Final Score: {}", self.final_score),
            100,
            screen_width() / 2.0,
            screen_height() / 2.5,
            palette::BLACK,
        );
        Ok(())
    }
}

impl Default for Loss {
    fn default() -> Self {
        Self::new()
    }
}
