//! The finite state machine driving the whole game.

use std::collections::HashMap;

use anyhow::{Result, bail};
use macroquad::prelude::{get_frame_time, next_frame};
use tracing::debug;

use crate::game::GameContext;
use crate::input::InputProvider;
use crate::state::{GameState, StateId};

/// Longest simulation step fed to a state. Protects the countdowns from
/// wall-clock jumps when the window is dragged or the process is
/// suspended.
const MAX_FRAME_DT: f32 = 0.25;

/// Owns the registered states and the flip protocol between them.
///
/// States are registered once and revisited; every entry goes through
/// `GameState::startup`, which reinitializes the per-visit fields.
pub struct StateController {
    states: HashMap<StateId, Box<dyn GameState>>,
    current: StateId,
    quit: bool,
}

impl StateController {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: StateId::Loading,
            quit: false,
        }
    }

    /// Add a named state. Must happen before the loop starts.
    pub fn register(&mut self, id: StateId, state: Box<dyn GameState>) {
        self.states.insert(id, state);
    }

    /// Select and initialize the starting state.
    pub fn set_initial(&mut self, id: StateId, ctx: &mut GameContext) -> Result<()> {
        if !self.states.contains_key(&id) {
            bail!("initial state '{id}' is not registered");
        }
        self.current = id;
        self.active_mut()?.startup(ctx)
    }

    pub fn current_id(&self) -> StateId {
        self.current
    }

    pub fn quitting(&self) -> bool {
        self.quit
    }

    /// Look up a registered state, mainly for tests and diagnostics.
    pub fn state(&self, id: StateId) -> Option<&dyn GameState> {
        self.states.get(&id).map(|s| s.as_ref())
    }

    fn active_mut(&mut self) -> Result<&mut Box<dyn GameState>> {
        let current = self.current;
        match self.states.get_mut(&current) {
            Some(state) => Ok(state),
            None => bail!("state '{current}' is not registered"),
        }
    }

    /// Forward pending input to the active state. A window-close request
    /// sets the quit flag, which dominates everything else.
    pub fn pump_events(&mut self, input: &mut dyn InputProvider) -> Result<()> {
        if input.quit_requested() {
            self.quit = true;
        }
        let events = input.poll_events();
        let state = self.active_mut()?;
        for event in events {
            state.handle_event(event);
        }
        Ok(())
    }

    /// Run one simulation step: honor a quit request, perform at most
    /// one flip, then update the (possibly new) active state so a state
    /// never renders zero frames.
    pub fn advance(&mut self, dt: f32, ctx: &mut GameContext) -> Result<()> {
        let status = *self.active_mut()?.status();
        if status.quit {
            self.quit = true;
        } else if status.done {
            self.flip(ctx)?;
        }
        self.active_mut()?.update(dt, ctx)
    }

    /// The transition protocol: clear the outgoing done flag, look up
    /// the destination, reinitialize it, and record where it came from.
    fn flip(&mut self, ctx: &mut GameContext) -> Result<()> {
        let previous = self.current;
        let next = {
            let outgoing = self.active_mut()?;
            outgoing.status_mut().done = false;
            outgoing.status().next
        };
        let Some(next) = next else {
            bail!("state '{previous}' finished without a destination");
        };
        if !self.states.contains_key(&next) {
            bail!("state '{previous}' flipped to unregistered state '{next}'");
        }

        self.current = next;
        let incoming = self.active_mut()?;
        incoming.startup(ctx)?;
        incoming.status_mut().previous = Some(previous);
        debug!(from = %previous, to = %next, "state flip");
        Ok(())
    }

    /// Render the active state.
    pub fn draw(&self, ctx: &GameContext) -> Result<()> {
        match self.states.get(&self.current) {
            Some(state) => state.draw(ctx),
            None => bail!("state '{}' is not registered", self.current),
        }
    }

    /// The main frame loop: pump input, advance, draw, present. Returns
    /// when a state requests quit or the window is closed.
    pub async fn run(
        &mut self,
        input: &mut dyn InputProvider,
        ctx: &mut GameContext,
    ) -> Result<()> {
        while !self.quit {
            let dt = get_frame_time().min(MAX_FRAME_DT);
            self.pump_events(input)?;
            self.advance(dt, ctx)?;
            self.draw(ctx)?;
            next_frame().await;
        }
        Ok(())
    }
}

impl Default for StateController {
    fn default() -> Self {
        Self::new()
    }
}
