//! Sound-effect service.
//!
//! Built once by the application and handed to whatever triggers playback.
//! Actual output goes through a [`SoundSink`]; the service only tracks
//! volume and mute state and maps game events to effects.

use crate::game_state::move_record::ChessMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Move,
    Capture,
    Check,
    Castle,
    Promote,
    Victory,
}

impl SoundEffect {
    /// Asset file stem for the effect.
    pub const fn asset_name(self) -> &'static str {
        match self {
            SoundEffect::Move => "move",
            SoundEffect::Capture => "capture",
            SoundEffect::Check => "check",
            SoundEffect::Castle => "castle",
            SoundEffect::Promote => "promote",
            SoundEffect::Victory => "victory",
        }
    }
}

/// Volumes are percentages in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundSettings {
    pub music_volume: u8,
    pub sfx_volume: u8,
    pub music_muted: bool,
    pub sfx_muted: bool,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            music_volume: 30,
            sfx_volume: 70,
            music_muted: false,
            sfx_muted: false,
        }
    }
}

/// Playback backend.
pub trait SoundSink {
    /// `volume` is linear in `0.0..=1.0`.
    fn play_effect(&mut self, effect: SoundEffect, volume: f32);

    fn set_music(&mut self, playing: bool, volume: f32);
}

/// Sink that only logs, for headless front ends.
#[derive(Debug, Default)]
pub struct TracingSoundSink;

impl SoundSink for TracingSoundSink {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        tracing::debug!(effect = effect.asset_name(), volume, "sound effect");
    }

    fn set_music(&mut self, playing: bool, volume: f32) {
        tracing::debug!(playing, volume, "background music");
    }
}

pub struct SoundService<S: SoundSink> {
    sink: S,
    settings: SoundSettings,
    music_playing: bool,
}

impl<S: SoundSink> SoundService<S> {
    pub fn new(sink: S, settings: SoundSettings) -> Self {
        Self {
            sink,
            settings,
            music_playing: false,
        }
    }

    #[inline]
    pub fn settings(&self) -> &SoundSettings {
        &self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn play(&mut self, effect: SoundEffect) {
        if self.settings.sfx_muted {
            return;
        }
        self.sink
            .play_effect(effect, f32::from(self.settings.sfx_volume) / 100.0);
    }

    /// Capture sound for captures, move sound otherwise.
    pub fn on_move(&mut self, record: &ChessMove) {
        let effect = if record.is_capture() {
            SoundEffect::Capture
        } else {
            SoundEffect::Move
        };
        self.play(effect);
    }

    pub fn on_game_over(&mut self) {
        self.play(SoundEffect::Victory);
    }

    pub fn play_music(&mut self) {
        self.music_playing = true;
        self.sync_music();
    }

    pub fn pause_music(&mut self) {
        self.music_playing = false;
        self.sync_music();
    }

    pub fn set_music_volume(&mut self, volume: u8) {
        self.settings.music_volume = volume.min(100);
        self.sync_music();
    }

    pub fn set_sfx_volume(&mut self, volume: u8) {
        self.settings.sfx_volume = volume.min(100);
    }

    pub fn toggle_music_mute(&mut self) -> bool {
        self.settings.music_muted = !self.settings.music_muted;
        self.sync_music();
        self.settings.music_muted
    }

    pub fn toggle_sfx_mute(&mut self) -> bool {
        self.settings.sfx_muted = !self.settings.sfx_muted;
        self.settings.sfx_muted
    }

    fn sync_music(&mut self) {
        let audible = self.music_playing && !self.settings.music_muted;
        self.sink
            .set_music(audible, f32::from(self.settings.music_volume) / 100.0);
    }
}
