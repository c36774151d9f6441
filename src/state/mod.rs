//! Game states and the trait the controller drives them through.

pub mod loading;
pub mod loss;
pub mod menu;
pub mod start;
pub mod task_round;
pub mod taskdone;
pub mod win;

pub use loading::Loading;
pub use loss::Loss;
pub use menu::Menu;
pub use start::Start;
pub use task_round::TaskRound;
pub use taskdone::TaskDone;
pub use win::Win;

use std::fmt;

use anyhow::Result;

use crate::game::GameContext;
use crate::game::task::TaskId;
use crate::input::KeyEvent;

/// Identifier for every registered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Loading,
    Menu,
    Start,
    TaskDone,
    Task(TaskId),
    Loss,
    Win,
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateId::Loading => write!(f, "loading"),
            StateId::Menu => write!(f, "menu"),
            StateId::Start => write!(f, "start"),
            StateId::TaskDone => write!(f, "taskdone"),
            StateId::Task(task) => write!(f, "{}", task.name()),
            StateId::Loss => write!(f, "loss"),
            StateId::Win => write!(f, "win"),
        }
    }
}

/// Transition bookkeeping the controller reads and resets. Exactly one
/// of `done`/`quit` may drive a transition in a frame, and `done` is
/// cleared by the flip.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateStatus {
    /// The state finished and wants to flip to `next`.
    pub done: bool,
    /// The state wants the program to exit.
    pub quit: bool,
    /// Destination of the next flip.
    pub next: Option<StateId>,
    /// Who flipped into this state, recorded by the controller.
    pub previous: Option<StateId>,
}

impl StateStatus {
    /// Mark the state finished, headed for `next`.
    pub fn finish(&mut self, next: StateId) {
        self.next = Some(next);
        self.done = true;
    }
}

/// A screen or minigame driven by the state controller.
///
/// Instances are registered once and revisited many times over a run;
/// `startup` is the re-entrant constructor that must restore every
/// per-visit field.
pub trait GameState {
    fn status(&self) -> &StateStatus;

    fn status_mut(&mut self) -> &mut StateStatus;

    /// Reinitialize per-visit fields. Runs on every entry.
    fn startup(&mut self, ctx: &mut GameContext) -> Result<()>;

    /// React to one key edge.
    fn handle_event(&mut self, event: KeyEvent);

    /// Advance by `dt` seconds of real time.
    fn update(&mut self, dt: f32, ctx: &mut GameContext) -> Result<()>;

    /// Render this frame.
    fn draw(&self, ctx: &GameContext) -> Result<()>;
}
