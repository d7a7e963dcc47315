//! A running game: the world plus its collaborators
//!
//! The host calls `frame()` once per display refresh. The session samples the
//! clock, steps the sim, voices the frame's events and hands a snapshot to
//! the renderer. Nothing here feeds back into gameplay.

use crate::audio::{AudioManager, AudioSink};
use crate::platform::{Clock, entropy_seed};
use crate::settings::GameConfig;
use crate::sim::{GameEvent, Snapshot, TickInput, World, tick};

/// Presentation backend; reads the snapshot, never the world
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

pub struct Session {
    world: World,
    clock: Box<dyn Clock>,
    audio: AudioManager,
    renderer: Option<Box<dyn Renderer>>,
}

impl Session {
    /// New run; seeds from the config when set, otherwise from the wall clock
    pub fn new(config: GameConfig, clock: Box<dyn Clock>) -> Self {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let audio = AudioManager::new(config.master_volume, config.muted);
        log::info!("Starting run with seed {}", seed);
        Self {
            world: World::new(config, seed),
            clock,
            audio,
            renderer: None,
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_audio_sink(mut self, sink: Box<dyn AudioSink>) -> Self {
        self.audio.set_sink(sink);
        self
    }

    /// Run one display frame; returns the events it produced
    pub fn frame(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let now = self.clock.now_ms();
        tick(&mut self.world, input, now);

        let events = self.world.drain_events();
        for event in &events {
            log::trace!("frame {}: {:?}", self.world.frame, event);
            self.audio.play_event(event);
        }

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.world.snapshot());
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.world.snapshot()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for hosts that inject power-ups or tweak state
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager {
        &mut self.audio
    }

    pub fn is_over(&self) -> bool {
        self.world.phase.is_game_over()
    }
}
