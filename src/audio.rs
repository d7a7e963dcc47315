//! Audio system
//!
//! Procedurally generated beeps, no external files. The sim hands out
//! `GameEvent`s with a suggested `Tone`; the manager applies volume and
//! forwards to whatever backend is plugged in.

use crate::sim::{GameEvent, Tone};

/// Anything that can voice a tone
pub trait AudioSink {
    /// Play `tone` at `volume` (0.0 - 1.0)
    fn play(&mut self, tone: Tone, volume: f32);
}

/// Swallows everything; used headless and in tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, tone: Tone, volume: f32) {
        log::trace!(
            "tone {:.0} Hz for {:.2}s at {:.2}",
            tone.frequency_hz,
            tone.duration_secs,
            volume
        );
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(0.8, false)
    }
}

impl AudioManager {
    /// A manager with no backend; every play is a no-op until one is set
    pub fn new(master_volume: f32, muted: bool) -> Self {
        Self {
            sink: None,
            master_volume: master_volume.clamp(0.0, 1.0),
            muted,
        }
    }

    pub fn set_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.sink = Some(sink);
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Play a raw tone
    pub fn play(&mut self, tone: Tone) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        sink.play(tone, vol);
    }

    /// Voice an event if it has a tone
    pub fn play_event(&mut self, event: &GameEvent) {
        if let Some(tone) = event.tone() {
            self.play(tone);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudioSink;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::AudioSink;
    use crate::sim::{Tone, Waveform};

    /// Web Audio backend: one oscillator per tone with a decaying gain
    pub struct WebAudioSink {
        ctx: Option<AudioContext>,
    }

    impl Default for WebAudioSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudioSink {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }

    fn oscillator_type(waveform: Waveform) -> OscillatorType {
        match waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
            Waveform::Triangle => OscillatorType::Triangle,
        }
    }

    impl AudioSink for WebAudioSink {
        fn play(&mut self, tone: Tone, volume: f32) {
            let Some(ctx) = &self.ctx else { return };

            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let Some((osc, gain)) =
                Self::create_osc(ctx, tone.frequency_hz, oscillator_type(tone.waveform))
            else {
                return;
            };
            let t = ctx.current_time();
            let end = t + f64::from(tone.duration_secs);

            gain.gain().set_value_at_time(0.1 * volume, t).ok();
            gain.gain().exponential_ramp_to_value_at_time(0.01, end).ok();

            osc.start().ok();
            osc.stop_with_when(end).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{PowerUpKind, Waveform};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(Tone, f32)>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, tone: Tone, volume: f32) {
            self.0.borrow_mut().push((tone, volume));
        }
    }

    #[test]
    fn plays_event_tones_at_master_volume() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(0.5, false);
        audio.set_sink(Box::new(recorder.clone()));

        audio.play_event(&GameEvent::PowerUpCollected {
            kind: PowerUpKind::Speed,
        });
        audio.play_event(&GameEvent::GameOver {
            score: 0,
            level: 1,
            kills: 0,
        });

        let played = recorder.0.borrow();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].0, Tone::new(400.0, 0.2, Waveform::Sine));
        assert_eq!(played[0].1, 0.5);
    }

    #[test]
    fn muted_plays_nothing() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(1.0, true);
        audio.set_sink(Box::new(recorder.clone()));
        audio.play(Tone::new(800.0, 0.1, Waveform::Square));
        assert!(recorder.0.borrow().is_empty());

        audio.set_muted(false);
        audio.play(Tone::new(800.0, 0.1, Waveform::Square));
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn volume_is_clamped() {
        let mut audio = AudioManager::new(3.0, false);
        assert_eq!(audio.effective_volume(), 1.0);
        audio.set_master_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
    }

    #[test]
    fn no_sink_is_a_no_op() {
        let mut audio = AudioManager::default();
        assert!(!audio.has_sink());
        audio.play(Tone::new(200.0, 0.3, Waveform::Sawtooth));
    }
}
