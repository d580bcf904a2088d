//! Paper Toss - a toss-and-score arcade game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scoring, particles, game state)
//! - `stats`: Persistent player statistics
//!
//! The crate contains no rendering or input handling. A frontend supplies
//! launch velocities and cup placement, drives `step()` at the fixed
//! timestep, and draws whatever the returned snapshots describe.

pub mod sim;
pub mod stats;

pub use stats::{PlayerStats, SavedStats, StatsStore};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (16 ms per frame)
    pub const SIM_DT: f32 = 0.016;

    /// Gravity (px/s^2)
    pub const GRAVITY: f32 = 2500.0;
    /// Per-step multiplicative drag on horizontal velocity
    pub const DRAG: f32 = 0.99;
    /// Velocity fraction kept after a ceiling/wall/floor bounce
    pub const BOUNCE_DAMPING: f32 = 0.6;
    /// Extra horizontal friction applied on each floor bounce
    pub const FLOOR_FRICTION: f32 = 0.9;
    /// Floor height as a fraction of screen height
    pub const FLOOR_LINE: f32 = 0.85;
    /// Vertical speed below which a floor contact ends the throw (px/s)
    pub const FLOOR_STOP_SPEED: f32 = 100.0;

    /// Hand anchor as fractions of screen size (ball rest position)
    pub const HAND_X: f32 = 0.2;
    pub const HAND_Y: f32 = 0.8;

    /// Outcome display delay before the ball returns to hand (seconds)
    pub const SETTLE_DELAY: f32 = 1.0;
    /// A ball this far below the screen is lost (px)
    pub const OFFSCREEN_MARGIN: f32 = 100.0;
    /// Hard per-throw frame bound; damping makes real throws end far sooner
    pub const MAX_FLIGHT_FRAMES: u32 = 2000;
}
