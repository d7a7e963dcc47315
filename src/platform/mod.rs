//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time (cooldown gating)

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock, entropy_seed};
