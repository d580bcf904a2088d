//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod config;
pub mod cup;
pub mod particles;
pub mod physics;
pub mod state;
pub mod tick;

pub use config::{
    BurstProfile, CupDims, GameConfig, ScoringPolicy, WindConfig, CLASSIC_PALETTE,
    ENHANCED_PALETTE,
};
pub use cup::Cup;
pub use particles::{Particle, TrailPoint, TRAIL_LENGTH};
pub use physics::{integrate, resolve_bounds, BounceReport};
pub use state::{Ball, GamePhase, GameState, Outcome, Wind};
pub use tick::{Simulation, StepResult};
