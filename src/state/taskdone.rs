use anyhow::Result;

use super::{GameState, StateStatus};
use crate::game::{GameContext, difficulty};
use crate::input::KeyEvent;

/// How long the last task frame lingers before the next round.
const PAUSE: f32 = 0.4;

/// Inter-round breather. Picks the destination on entry (a random base
/// task, a bonus stage at a score milestone, or the win screen) and
/// flips after a short pause. Draws nothing so the previous frame stays
/// on screen.
pub struct TaskDone {
    status: StateStatus,
    elapsed: f32,
}

impl TaskDone {
    pub fn new() -> Self {
        Self {
            status: StateStatus::default(),
            elapsed: 0.0,
        }
    }
}

impl GameState for TaskDone {
    fn status(&self) -> &StateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut StateStatus {
        &mut self.status
    }

    fn startup(&mut self, ctx: &mut GameContext) -> Result<()> {
        self.elapsed = 0.0;
        let next = difficulty::next_after_success(ctx.session.score(), &mut ctx.rng);
        self.status.next = Some(next);
        Ok(())
    }

    fn handle_event(&mut self, _event: KeyEvent) {}

    fn update(&mut self, dt: f32, _ctx: &mut GameContext) -> Result<()> {
        self.elapsed += dt;
        if self.elapsed >= PAUSE {
            self.status.done = true;
        }
        Ok(())
    }

    fn draw(&self, _ctx: &GameContext) -> Result<()> {
        Ok(())
    }
}

impl Default for TaskDone {
    fn default() -> Self {
        Self::new()
    }
}
