use anyhow::Result;

use super::{GameState, StateId, StateStatus};
use crate::game::GameContext;
use crate::input::{GameKey, KeyEvent};
use crate::render;

/// Main menu: Enter starts a game, Escape quits.
pub struct Menu {
    status: StateStatus,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            status: StateStatus::default(),
        }
    }
}

impl GameState for Menu {
    fn status(&self) -> &StateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut StateStatus {
        &mut self.status
    }

    fn startup(&mut self, ctx: &mut GameContext) -> Result<()> {
        ctx.audio.play_music("insert-quarter");
        Ok(())
    }

    fn handle_event(&mut self, event: KeyEvent) {
        if !event.pressed {
            return;
        }
        match event.key {
            GameKey::Escape => self.status.quit = true,
            GameKey::Enter => self.status.finish(StateId::Start),
            _ => {}
        }
    }

    fn update(&mut self, _dt: f32, _ctx: &mut GameContext) -> Result<()> {
        Ok(())
    }

    fn draw(&self, ctx: &GameContext) -> Result<()> {
        render::draw_fullscreen(ctx.assets.image("stick-bop-menu")?);
        Ok(())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
