//! Game state and core simulation types
//!
//! Everything a frontend needs to draw a frame lives in `GameState`; `step()`
//! hands out value snapshots of it, so all types here are plain data with
//! serde derives.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::WindConfig;
use super::cup::Cup;
use super::particles::{Particle, TrailPoint};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in hand, waiting for a launch
    Idle,
    /// Ball in the air
    Flight,
    /// Outcome decided, message on display before the next round
    Settling,
}

/// Terminal outcome of a throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Scored { perfect: bool, bonus: u32 },
    Missed,
}

/// The thrown ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Tumbling angle in degrees, driven by velocity; visual only
    pub rotation: f32,
    /// True until launched
    pub in_hand: bool,
}

impl Ball {
    /// A fresh ball resting in the hand
    pub fn in_hand(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            rotation: 0.0,
            in_hand: true,
        }
    }
}

/// Per-throw wind, rolled from the mode's `WindConfig`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wind {
    /// -1 (blowing left) or +1 (blowing right)
    pub direction: f32,
    /// Acceleration magnitude (px/s^2 at the top of the screen)
    pub strength: f32,
}

impl Wind {
    /// Roll a new wind: fair coin for direction, uniform strength
    pub fn roll(config: &WindConfig, rng: &mut Pcg32) -> Self {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let strength = rng.random_range(config.min_strength..config.max_strength);
        Self {
            direction,
            strength,
        }
    }

    /// Signed horizontal acceleration
    #[inline]
    pub fn force(&self) -> f32 {
        self.direction * self.strength
    }
}

/// Complete round state, snapshotted by every `step()`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub cup: Cup,
    /// Current wind; `None` when the mode has wind disabled
    pub wind: Option<Wind>,
    pub score: u32,
    pub high_score: u32,
    /// Completed throws
    pub attempts: u32,
    /// Consecutive scores, feeds the combo-multiplier bonus
    pub combo: u32,
    /// Consecutive scores, feeds the streak message and best-streak record
    pub streak: u32,
    pub best_streak: u32,
    pub perfect_shots: u32,
    pub phase: GamePhase,
    /// Frame clock suspended; `step()` does nothing while set
    pub paused: bool,
    /// Outcome text on display during Settling
    pub message: Option<String>,
    pub particles: Vec<Particle>,
    pub trail: Vec<TrailPoint>,
}

impl GameState {
    /// True from launch until the ball returns to hand; the trail records
    /// while this holds
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.phase != GamePhase::Idle
    }
}
