//! Score-driven difficulty: countdown budgets, music speed-ups, and
//! bonus-stage routing.

use rand::Rng;

use crate::game::task::TaskId;
use crate::state::StateId;

/// Score at which the game is won.
pub const WIN_SCORE: u32 = 100;

/// Countdown budget in seconds for a round starting at the given score.
pub fn timer_budget(score: u32) -> f32 {
    if score < 25 {
        5.0
    } else if score < 50 {
        4.5
    } else if score < 75 {
        4.0
    } else {
        3.5
    }
}

/// Background music tracks, one per difficulty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    NeonRunner,
    NeonRunnerX125,
    NeonRunnerX150,
    NeonRunnerX175,
}

impl MusicTrack {
    /// Track for the current score band.
    pub fn for_score(score: u32) -> Self {
        if score < 25 {
            Self::NeonRunner
        } else if score < 50 {
            Self::NeonRunnerX125
        } else if score < 75 {
            Self::NeonRunnerX150
        } else {
            Self::NeonRunnerX175
        }
    }

    /// Stem of the sound file backing this track.
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::NeonRunner => "neon-runner",
            Self::NeonRunnerX125 => "neon-runner-x125",
            Self::NeonRunnerX150 => "neon-runner-x150",
            Self::NeonRunnerX175 => "neon-runner-x175",
        }
    }
}

/// Uniform draw from the base task set.
pub fn random_task<R: Rng>(rng: &mut R) -> TaskId {
    TaskId::BASE_TASKS[rng.gen_range(0..TaskId::BASE_TASKS.len())]
}

/// Destination after a successful round. The bonus stages fire on the
/// scores just below each band boundary, a full score wins, and anything
/// else draws a random base task.
pub fn next_after_success<R: Rng>(score: u32, rng: &mut R) -> StateId {
    match score {
        24 => StateId::Task(TaskId::Excalibur1),
        49 => StateId::Task(TaskId::Excalibur2),
        74 => StateId::Task(TaskId::Excalibur3),
        99 => StateId::Task(TaskId::Excalibur4),
        s if s >= WIN_SCORE => StateId::Win,
        _ => StateId::Task(random_task(rng)),
    }
}
