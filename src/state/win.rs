use anyhow::Result;

use super::{GameState, StateId, StateStatus};
use crate::game::GameContext;
use crate::input::{GameKey, KeyEvent};
use crate::render;

/// Victory screen. Enter returns to the menu, Escape quits.
pub struct Win {
    status: StateStatus,
}

impl Win {
    pub fn new() -> Self {
        Self {
            status: StateStatus::default(),
        }
    }
}

impl GameState for Win {
    fn status(&self) -> &StateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut StateStatus {
        &mut self.status
    }

    fn startup(&mut self, ctx: &mut GameContext) -> Result<()> {
        ctx.audio.play_music("future-grid");
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
        render::draw_fullscreen(ctx.assets.image("winner")?);
        Ok(())
    }
}

impl Default for Win {
    fn default() -> Self {
        Self::new()
    }
}
