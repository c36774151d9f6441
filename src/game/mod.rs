//! Core game logic: the session, the difficulty policy, the gesture
//! recognizers, and the task descriptors.

pub mod difficulty;
pub mod gesture;
pub mod session;
pub mod task;

pub use session::GameSession;

use rand::rngs::StdRng;

use crate::assets::AssetStore;
use crate::audio::AudioSystem;
use crate::config::GameConfig;

/// Shared services and session data handed to every state callback.
pub struct GameContext {
    pub config: GameConfig,
    pub session: GameSession,
    pub assets: AssetStore,
    pub audio: AudioSystem,
    pub rng: StdRng,
}

impl GameContext {
    pub fn new(config: GameConfig, audio: AudioSystem, rng: StdRng) -> Self {
        Self {
            config,
            session: GameSession::new(),
            assets: AssetStore::new(),
            audio,
            rng,
        }
    }
}
