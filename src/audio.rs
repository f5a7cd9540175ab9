//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

use web_sys::{AudioContext, AudioContextState, GainNode, OscillatorNode, OscillatorType};

use crate::error::PlatformError;
use crate::platform::AudioSink;
use crate::sim::SoundCue;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: 0.8,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Result<(OscillatorNode, GainNode), PlatformError> {
        let rejected = |e: wasm_bindgen::JsValue| PlatformError::AudioRejected(format!("{:?}", e));
        let osc = ctx.create_oscillator().map_err(rejected)?;
        let gain = ctx.create_gain().map_err(rejected)?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).map_err(rejected)?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(rejected)?;

        Ok((osc, gain))
    }

    /// Shot - short falling chirp
    fn play_shoot(&self, ctx: &AudioContext, vol: f32) -> Result<(), PlatformError> {
        let (osc, gain) = self.create_osc(ctx, 900.0, OscillatorType::Square)?;
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.15, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.08)
            .ok();
        osc.frequency().set_value_at_time(900.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(300.0, t + 0.08)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
        Ok(())
    }

    /// Alien destroyed - boom with a crack on top
    fn play_explosion(&self, ctx: &AudioContext, vol: f32) -> Result<(), PlatformError> {
        let (osc, gain) = self.create_osc(ctx, 100.0, OscillatorType::Sawtooth)?;
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.5, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.4)
            .ok();
        osc.frequency().set_value_at_time(100.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(30.0, t + 0.4)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.5).ok();

        // High frequency crack
        let (crack, crack_gain) = self.create_osc(ctx, 1500.0, OscillatorType::Square)?;
        crack_gain.gain().set_value_at_time(vol * 0.2, t).ok();
        crack_gain
            .gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.1)
            .ok();
        crack.start().ok();
        crack.stop_with_when(t + 0.15).ok();
        Ok(())
    }

    /// Power-up collected - rising arpeggio
    fn play_power_up(&self, ctx: &AudioContext, vol: f32) -> Result<(), PlatformError> {
        for (i, freq) in [600.0, 800.0, 1000.0].iter().enumerate() {
            let delay = i as f64 * 0.08;
            let (osc, gain) = self.create_osc(ctx, *freq, OscillatorType::Sine)?;
            let t = ctx.current_time() + delay;
            gain.gain().set_value_at_time(vol * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.2).ok();
        }
        Ok(())
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, cue: SoundCue) -> Result<(), PlatformError> {
        let vol = self.master_volume;
        if vol <= 0.0 {
            return Ok(());
        }

        let ctx = self.ctx.as_ref().ok_or(PlatformError::AudioUnavailable)?;

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            SoundCue::Shoot => self.play_shoot(ctx, vol),
            SoundCue::Explosion => self.play_explosion(ctx, vol),
            SoundCue::PowerUp => self.play_power_up(ctx, vol),
        }
    }
}
