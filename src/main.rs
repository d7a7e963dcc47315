//! Pixel Gunner entry point
//!
//! Native builds run a headless demo: the autopilot plays at a simulated
//! 60 Hz and the run summary is logged. Browser hosts embed the library.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pixel_gunner::audio::NullAudio;
    use pixel_gunner::consts::TARGET_FPS;
    use pixel_gunner::platform::ManualClock;
    use pixel_gunner::sim::{GameEvent, TickInput};
    use pixel_gunner::{GameConfig, Session};
    use std::rc::Rc;

    env_logger::init();
    log::info!("Pixel Gunner (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let frames: u64 = match args.next().map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Bad frame count ({}), using 3600", e);
            3600
        }
        None => 3600,
    };

    let clock = Rc::new(ManualClock::new(0.0));
    let mut session =
        Session::new(config, Box::new(clock.clone())).with_audio_sink(Box::new(NullAudio));
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let frame_ms = 1000.0 / f64::from(TARGET_FPS);

    let mut shots = 0u64;
    let mut played = 0u64;
    while played < frames && !session.is_over() {
        for event in session.frame(&input) {
            if matches!(event, GameEvent::ShotFired { .. }) {
                shots += 1;
            }
        }
        clock.advance(frame_ms);
        played += 1;
    }

    let world = session.world();
    log::info!(
        "Ran {} frames ({:.1}s): wave {}, level {}, score {}, {} kills, {} shots, health {}",
        played,
        played as f64 / f64::from(TARGET_FPS),
        world.wave,
        world.player.level,
        world.score,
        world.monsters_killed,
        shots,
        world.player.health.max(0)
    );
    if let Some(summary) = session.snapshot().summary {
        log::info!("Game over: {:?}", summary);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `Session` directly; nothing to do here
}
