//! Input-pattern recognizers for the task minigames.
//!
//! Three archetypes cover every task: a repeated single key, an
//! alternating two-key pair, and an ordered multi-stage combo. Each maps
//! raw key edges to a monotonic progress counter capped at a target.
//! The feedback value only drives sprite selection; it never feeds back
//! into the recognition logic.

use crate::input::{GameKey, KeyEvent};

/// What a key edge meant to the active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureFeedback {
    /// Nothing the gesture cares about.
    None,
    /// The first half of a gesture started (wind-up pose).
    Windup,
    /// A full gesture completed; progress advanced by one.
    Advance,
}

/// One full press-release cycle of a single key advances progress.
/// Holding the key without releasing it does not count.
#[derive(Debug, Clone)]
pub struct RepeatedKey {
    key: GameKey,
    target: u32,
    progress: u32,
    held: bool,
}

impl RepeatedKey {
    pub fn new(key: GameKey, target: u32) -> Self {
        Self {
            key,
            target,
            progress: 0,
            held: false,
        }
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn reset(&mut self) {
        self.progress = 0;
        self.held = false;
    }

    pub fn on_event(&mut self, event: KeyEvent) -> GestureFeedback {
        if event.key != self.key || self.progress >= self.target {
            return GestureFeedback::None;
        }
        if event.pressed {
            if !self.held {
                self.held = true;
                return GestureFeedback::Windup;
            }
        } else if self.held {
            self.held = false;
            self.progress += 1;
            return GestureFeedback::Advance;
        }
        GestureFeedback::None
    }
}

/// Strict two-key alternation. The wind-up key must be pressed and
/// released before a press of the strike key advances progress.
/// Repeating the same key neither advances nor corrupts the cycle, and
/// a strike while the wind-up key is still held is ignored.
#[derive(Debug, Clone)]
pub struct AlternatingKeys {
    windup: GameKey,
    strike: GameKey,
    target: u32,
    progress: u32,
    windup_held: bool,
    strike_held: bool,
    armed: bool,
}

impl AlternatingKeys {
    pub fn new(windup: GameKey, strike: GameKey, target: u32) -> Self {
        Self {
            windup,
            strike,
            target,
            progress: 0,
            windup_held: false,
            strike_held: false,
            armed: false,
        }
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn reset(&mut self) {
        self.progress = 0;
        self.windup_held = false;
        self.strike_held = false;
        self.armed = false;
    }

    pub fn on_event(&mut self, event: KeyEvent) -> GestureFeedback {
        if self.progress >= self.target {
            return GestureFeedback::None;
        }
        if event.key == self.windup {
            if event.pressed {
                let fresh = !self.windup_held && !self.armed && !self.strike_held;
                self.windup_held = true;
                if fresh {
                    return GestureFeedback::Windup;
                }
            } else if self.windup_held {
                self.windup_held = false;
                self.armed = true;
            }
        } else if event.key == self.strike {
            if event.pressed {
                self.strike_held = true;
                if self.armed && !self.windup_held {
                    self.armed = false;
                    self.progress += 1;
                    return GestureFeedback::Advance;
                }
            } else {
                self.strike_held = false;
            }
        }
        GestureFeedback::None
    }
}

/// One stage of a combo gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboStage {
    /// Press and release a single key.
    PressRelease(GameKey),
    /// Press the first key, then the second.
    Sequence(GameKey, GameKey),
}

/// An ordered list of stages. Each stage must fully complete before
/// input for the next one is recognized; input meant for a later stage
/// is ignored rather than buffered.
#[derive(Debug, Clone)]
pub struct ComboSequence {
    stages: Vec<ComboStage>,
    progress: u32,
    /// Stage-local flag: the key is held (PressRelease) or the opening
    /// key has been seen (Sequence).
    opened: bool,
}

impl ComboSequence {
    pub fn new(stages: Vec<ComboStage>) -> Self {
        Self {
            stages,
            progress: 0,
            opened: false,
        }
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn target(&self) -> u32 {
        self.stages.len() as u32
    }

    pub fn reset(&mut self) {
        self.progress = 0;
        self.opened = false;
    }

    pub fn on_event(&mut self, event: KeyEvent) -> GestureFeedback {
        let Some(&stage) = self.stages.get(self.progress as usize) else {
            return GestureFeedback::None;
        };
        match stage {
            ComboStage::PressRelease(key) => {
                if event.key != key {
                    return GestureFeedback::None;
                }
                if event.pressed {
                    if !self.opened {
                        self.opened = true;
                        return GestureFeedback::Windup;
                    }
                } else if self.opened {
                    self.opened = false;
                    self.progress += 1;
                    return GestureFeedback::Advance;
                }
                GestureFeedback::None
            }
            ComboStage::Sequence(first, second) => {
                if !event.pressed {
                    return GestureFeedback::None;
                }
                if event.key == first && !self.opened {
                    self.opened = true;
                    return GestureFeedback::Windup;
                }
                if event.key == second && self.opened {
                    self.opened = false;
                    self.progress += 1;
                    return GestureFeedback::Advance;
                }
                GestureFeedback::None
            }
        }
    }
}

/// A task's recognizer: one of the three archetypes.
#[derive(Debug, Clone)]
pub enum Gesture {
    Repeat(RepeatedKey),
    Alternate(AlternatingKeys),
    Combo(ComboSequence),
}

impl Gesture {
    pub fn on_event(&mut self, event: KeyEvent) -> GestureFeedback {
        match self {
            Self::Repeat(g) => g.on_event(event),
            Self::Alternate(g) => g.on_event(event),
            Self::Combo(g) => g.on_event(event),
        }
    }

    pub fn progress(&self) -> u32 {
        match self {
            Self::Repeat(g) => g.progress(),
            Self::Alternate(g) => g.progress(),
            Self::Combo(g) => g.progress(),
        }
    }

    pub fn target(&self) -> u32 {
        match self {
            Self::Repeat(g) => g.target(),
            Self::Alternate(g) => g.target(),
            Self::Combo(g) => g.target(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= self.target()
    }

    pub fn reset(&mut self) {
        match self {
            Self::Repeat(g) => g.reset(),
            Self::Alternate(g) => g.reset(),
            Self::Combo(g) => g.reset(),
        }
    }
}
