//! Sound playback built on kira.
//!
//! Owns the loaded sound pool (keyed by file stem) and the looped music
//! handle. When no audio backend is available the system stays silent
//! instead of failing the game.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use kira::AudioManager as KiraAudioManager;
use kira::AudioManagerSettings;
use kira::Tween;
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle};
use tracing::{debug, warn};

use crate::assets::{SOUND_EXTENSIONS, scan_dir};

pub struct AudioSystem {
    manager: Option<KiraAudioManager>,
    sounds: HashMap<String, StaticSoundData>,
    music: Option<StaticSoundHandle>,
    current_track: Option<String>,
}

impl AudioSystem {
    /// Create with the default backend; falls back to a silent system
    /// when no audio device is available.
    pub fn new() -> Self {
        let manager = match KiraAudioManager::new(AudioManagerSettings::default()) {
            Ok(manager) => Some(manager),
            Err(e) => {
                warn!("audio unavailable, running silent: {e}");
                None
            }
        };
        Self {
            manager,
            sounds: HashMap::new(),
            music: None,
            current_track: None,
        }
    }

    /// A backend-less system for headless tests.
    pub fn disabled() -> Self {
        Self {
            manager: None,
            sounds: HashMap::new(),
            music: None,
            current_track: None,
        }
    }

    /// Load every sound under `assets_dir/sounds`, keyed by stem.
    /// Returns how many were loaded.
    pub fn load_sounds(&mut self, assets_dir: &Path) -> Result<usize> {
        let mut loaded = 0;
        for (stem, path) in scan_dir(&assets_dir.join("sounds"), SOUND_EXTENSIONS)? {
            let data = StaticSoundData::from_file(&path)
                .with_context(|| format!("failed to load sound {}", path.display()))?;
            self.sounds.insert(stem, data);
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    /// Play a one-shot effect. Unknown names are logged and skipped.
    pub fn play_sound(&mut self, name: &str) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        match self.sounds.get(name) {
            Some(data) => {
                if let Err(e) = manager.play(data.clone()) {
                    warn!("failed to play sound {name}: {e}");
                }
            }
            None => debug!("sound not loaded: {name}"),
        }
    }

    /// Loop the named music track, unless it is already the one playing.
    pub fn ensure_music(&mut self, name: &str) {
        if self.current_track.as_deref() == Some(name) {
            return;
        }
        self.play_music(name);
    }

    /// Start the named track from the beginning, looped, replacing
    /// whatever was playing.
    pub fn play_music(&mut self, name: &str) {
        self.stop_music();
        self.current_track = Some(name.to_string());
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        let Some(data) = self.sounds.get(name) else {
            debug!("music not loaded: {name}");
            return;
        };
        match manager.play(data.clone().loop_region(..)) {
            Ok(handle) => self.music = Some(handle),
            Err(e) => warn!("failed to play music {name}: {e}"),
        }
    }

    /// Stop music playback.
    pub fn stop_music(&mut self) {
        if let Some(mut handle) = self.music.take() {
            handle.stop(Tween::default());
        }
        self.current_track = None;
    }

    /// Stem of the track currently treated as playing.
    pub fn current_track(&self) -> Option<&str> {
        self.current_track.as_deref()
    }
}

impl Default for AudioSystem {
    fn default() -> Self {
        Self::new()
    }
}
