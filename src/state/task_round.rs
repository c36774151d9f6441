use anyhow::Result;
use macroquad::prelude::{screen_height, screen_width};
use tracing::debug;

use super::{GameState, StateId, StateStatus};
use crate::game::difficulty::{self, MusicTrack};
use crate::game::gesture::{Gesture, GestureFeedback};
use crate::game::task::TaskId;
use crate::game::GameContext;
use crate::input::KeyEvent;
use crate::render::{self, palette};

const HUD_FONT: &str = "OpenSans-Regular";
const HUD_TEXT_SIZE: u16 = 40;

/// One playthrough of a single minigame: a countdown, a gesture
/// recognizer, and the HUD overlay. The same type backs every task;
/// `TaskId` supplies the bindings, the target, and the sprite naming.
pub struct TaskRound {
    status: StateStatus,
    task: TaskId,
    gesture: Gesture,
    timer_budget: f32,
    elapsed: f32,
    frame: u32,
}

impl TaskRound {
    pub fn new(task: TaskId) -> Self {
        Self {
            status: StateStatus::default(),
            task,
            gesture: task.gesture(),
            timer_budget: 0.0,
            elapsed: 0.0,
            frame: task.still_frame(),
        }
    }

    pub fn task(&self) -> TaskId {
        self.task
    }

    /// Seconds left on the countdown, rounded to the displayed tenth.
    pub fn remaining(&self) -> f32 {
        ((self.timer_budget - self.elapsed) * 10.0).round() / 10.0
    }
}

impl GameState for TaskRound {
    fn status(&self) -> &StateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut StateStatus {
        &mut self.status
    }

    fn startup(&mut self, ctx: &mut GameContext) -> Result<()> {
        self.gesture.reset();
        self.elapsed = 0.0;
        self.timer_budget = difficulty::timer_budget(ctx.session.score());
        self.frame = self.task.still_frame();
        ctx.audio
            .ensure_music(MusicTrack::for_score(ctx.session.score()).asset_name());
        debug!(
            task = self.task.name(),
            budget = self.timer_budget,
            "round start"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: KeyEvent) {
        match self.gesture.on_event(event) {
            GestureFeedback::Windup => {
                self.frame = self.task.windup_frame(self.gesture.progress());
            }
            GestureFeedback::Advance => {
                self.frame = self.task.advance_frame(self.gesture.progress());
            }
            GestureFeedback::None => {}
        }
    }

    fn update(&mut self, dt: f32, ctx: &mut GameContext) -> Result<()> {
        self.elapsed += dt;
        // The completion check comes first so a round finished on the
        // very frame the timer runs out still counts as a win.
        if self.gesture.is_complete() {
            ctx.session.record_success();
            ctx.audio.play_sound("task-done");
            self.status.finish(StateId::TaskDone);
        } else if self.remaining() <= 0.0 {
            self.status.finish(StateId::Loss);
        }
        Ok(())
    }

    fn draw(&self, ctx: &GameContext) -> Result<()> {
        let sprite = self.task.frame_name(self.frame);
        render::draw_fullscreen(ctx.assets.image(&sprite)?);

        let font = ctx.assets.font(HUD_FONT)?;
        let width = screen_width();
        render::draw_text_midtop(
            font,
            &format!("Timer: {}", self.remaining()),
            HUD_TEXT_SIZE,
            width / 2.0,
            0.0,
            palette::BLACK,
        );
        render::draw_text_midtop(
            font,
            &format!("Score: {}", ctx.session.score()),
            HUD_TEXT_SIZE,
            width - 150.0,
            0.0,
            palette::BLACK,
        );
        let fill = self.gesture.progress() as f32 / self.gesture.target() as f32;
        render::draw_progress_bar(width - 100.0, screen_height() / 4.0, fill);
        Ok(())
    }
}
