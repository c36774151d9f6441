//! Task descriptors: key bindings, gesture targets, and sprite naming
//! for every minigame.

use crate::game::gesture::{AlternatingKeys, ComboSequence, ComboStage, Gesture, RepeatedKey};
use crate::input::GameKey;

/// Every playable minigame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskId {
    Drilling,
    Mining,
    Woodchopping,
    Flagraising,
    Hammering,
    Tirepumping,
    Excalibur1,
    Excalibur2,
    Excalibur3,
    Excalibur4,
}

impl TaskId {
    /// Tasks eligible for random selection. The excalibur stages are
    /// reached only through score milestones.
    pub const BASE_TASKS: [TaskId; 6] = [
        TaskId::Drilling,
        TaskId::Mining,
        TaskId::Woodchopping,
        TaskId::Flagraising,
        TaskId::Hammering,
        TaskId::Tirepumping,
    ];

    pub const ALL: [TaskId; 10] = [
        TaskId::Drilling,
        TaskId::Mining,
        TaskId::Woodchopping,
        TaskId::Flagraising,
        TaskId::Hammering,
        TaskId::Tirepumping,
        TaskId::Excalibur1,
        TaskId::Excalibur2,
        TaskId::Excalibur3,
        TaskId::Excalibur4,
    ];

    /// Registry name, also used in logs.
    pub fn name(self) -> &'static str {
        match self {
            TaskId::Drilling => "drilling",
            TaskId::Mining => "mining",
            TaskId::Woodchopping => "woodchopping",
            TaskId::Flagraising => "flagraising",
            TaskId::Hammering => "hammering",
            TaskId::Tirepumping => "tirepumping",
            TaskId::Excalibur1 => "excalibur1",
            TaskId::Excalibur2 => "excalibur2",
            TaskId::Excalibur3 => "excalibur3",
            TaskId::Excalibur4 => "excalibur4",
        }
    }

    /// Filename prefix of this task's sprite frames.
    pub fn sprite_prefix(self) -> &'static str {
        match self {
            TaskId::Excalibur1 => "excalibur-1",
            TaskId::Excalibur2 => "excalibur-2",
            TaskId::Excalibur3 => "excalibur-3",
            TaskId::Excalibur4 => "excalibur-4",
            other => other.name(),
        }
    }

    /// Build this task's recognizer with zero progress.
    pub fn gesture(self) -> Gesture {
        match self {
            TaskId::Drilling => Gesture::Repeat(RepeatedKey::new(GameKey::Space, 5)),
            TaskId::Hammering => Gesture::Repeat(RepeatedKey::new(GameKey::Space, 10)),
            TaskId::Mining | TaskId::Woodchopping => {
                Gesture::Alternate(AlternatingKeys::new(GameKey::Right, GameKey::Left, 5))
            }
            TaskId::Flagraising | TaskId::Tirepumping => {
                Gesture::Alternate(AlternatingKeys::new(GameKey::Down, GameKey::Up, 5))
            }
            TaskId::Excalibur1 | TaskId::Excalibur2 | TaskId::Excalibur3 | TaskId::Excalibur4 => {
                Gesture::Combo(ComboSequence::new(vec![
                    ComboStage::PressRelease(GameKey::Up),
                    ComboStage::PressRelease(GameKey::Down),
                    ComboStage::Sequence(GameKey::Left, GameKey::Right),
                    ComboStage::Sequence(GameKey::Left, GameKey::Right),
                    ComboStage::PressRelease(GameKey::Space),
                ]))
            }
        }
    }

    /// Frame shown while no gesture is in flight.
    pub fn still_frame(self) -> u32 {
        1
    }

    /// Frame for a wind-up at the given progress.
    pub fn windup_frame(self, progress: u32) -> u32 {
        match self {
            // Woodchopping only has a swing-back and a strike frame.
            TaskId::Woodchopping => 2,
            _ => 2 * progress + 2,
        }
    }

    /// Frame for a completed gesture that raised progress to `progress`.
    pub fn advance_frame(self, progress: u32) -> u32 {
        match self {
            TaskId::Woodchopping => {
                if progress >= 5 {
                    3
                } else {
                    1
                }
            }
            _ => 2 * progress + 1,
        }
    }

    /// Asset name of the given sprite frame.
    pub fn frame_name(self, frame: u32) -> String {
        format!("{}-{}", self.sprite_prefix(), frame)
    }
}
