use anyhow::Result;

use super::{GameState, StateId, StateStatus};
use crate::game::{GameContext, difficulty};
use crate::input::KeyEvent;
use crate::render;

/// Phase boundaries of the countdown, in seconds since entry.
const SET_AT: f32 = 1.0;
const GO_AT: f32 = 2.0;
const TASK_AT: f32 = 3.0;

/// Three-second ready / set / go countdown. Entering it starts a fresh
/// game: the score drops to zero and the first task is drawn at random.
pub struct Start {
    status: StateStatus,
    elapsed: f32,
}

impl Start {
    pub fn new() -> Self {
        Self {
            status: StateStatus::default(),
            elapsed: 0.0,
        }
    }
}

impl GameState for Start {
    fn status(&self) -> &StateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut StateStatus {
        &mut self.status
    }

    fn startup(&mut self, ctx: &mut GameContext) -> Result<()> {
        self.elapsed = 0.0;
        ctx.session.reset();
        let first = difficulty::random_task(&mut ctx.rng);
        self.status.next = Some(StateId::Task(first));
        ctx.audio.stop_music();
        ctx.audio.play_sound("ready-set-go");
        Ok(())
    }

    fn handle_event(&mut self, _event: KeyEvent) {}

    fn update(&mut self, dt: f32, _ctx: &mut GameContext) -> Result<()> {
        self.elapsed += dt;
        if self.elapsed >= TASK_AT {
            self.status.done = true;
        }
        Ok(())
    }

    fn draw(&self, ctx: &GameContext) -> Result<()> {
        let name = if self.elapsed >= GO_AT {
            "go"
        } else if self.elapsed >= SET_AT {
            "set"
        } else {
            "ready"
        };
        render::draw_fullscreen(ctx.assets.image(name)?);
        Ok(())
    }
}

impl Default for Start {
    fn default() -> Self {
        Self::new()
    }
}
