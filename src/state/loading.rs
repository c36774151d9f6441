use anyhow::Result;
use tracing::info;

use super::{GameState, StateId, StateStatus};
use crate::game::GameContext;
use crate::input::KeyEvent;
use crate::render;

/// Delay before the asset scan so the loading frame is on screen first.
const LOAD_DELAY: f32 = 0.2;

/// First screen: shows the preloaded loading image, then populates the
/// asset store and the sound pool and moves on to the menu.
pub struct Loading {
    status: StateStatus,
    elapsed: f32,
    loaded: bool,
}

impl Loading {
    pub fn new() -> Self {
        Self {
            status: StateStatus::default(),
            elapsed: 0.0,
            loaded: false,
        }
    }
}

impl GameState for Loading {
    fn status(&self) -> &StateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut StateStatus {
        &mut self.status
    }

    fn startup(&mut self, _ctx: &mut GameContext) -> Result<()> {
        // `loaded` deliberately survives: the registry is populated once
        // per program run.
        self.elapsed = 0.0;
        Ok(())
    }

    fn handle_event(&mut self, _event: KeyEvent) {}

    fn update(&mut self, dt: f32, ctx: &mut GameContext) -> Result<()> {
        self.elapsed += dt;
        if self.elapsed >= LOAD_DELAY && !self.loaded {
            let assets_dir = ctx.config.assets_dir.clone();
            ctx.assets.load_all(&assets_dir)?;
            let sounds = ctx.audio.load_sounds(&assets_dir)?;
            info!(sounds, "sound pool ready");
            self.loaded = true;
        }
        if self.loaded {
            self.status.finish(StateId::Menu);
        }
        Ok(())
    }

    fn draw(&self, ctx: &GameContext) -> Result<()> {
        render::draw_fullscreen(ctx.assets.image("loading")?);
        Ok(())
    }
}

impl Default for Loading {
    fn default() -> Self {
        Self::new()
    }
}
