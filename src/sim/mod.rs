//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of presentation:
//! - Seeded RNG only
//! - Time comes in as a parameter, never read from the platform
//! - Stable iteration order (back to front when removing)
//! - No rendering or audio dependencies

pub mod autopilot;
pub mod collision;
pub mod combat;
pub mod cooldown;
pub mod events;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod upgrade;

pub use cooldown::{FrameCooldown, WallClockCooldown};
pub use events::{GameEvent, Tone, Waveform};
pub use snapshot::{RunSummary, ShakeView, Snapshot};
pub use state::{
    Bullet, Color, GamePhase, Monster, Particle, Player, PowerUp, PowerUpKind, ScreenShake, World,
};
pub use tick::{TickInput, tick};
pub use upgrade::{CATALOG, UpgradeKind, UpgradeMenu, UpgradeOption};
