//! Per-mode game configuration
//!
//! The two shipped game modes share one simulation; everything that differs
//! between them (cup size, wind, scoring formula, burst flavor) is fixed
//! here at construction time.

use glam::Vec2;

use crate::consts::*;

/// How a successful throw is converted into points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// Consecutive scores multiply: bonus = combo when combo > 1, else 1
    ComboMultiplier,
    /// Flat bonus: 2 points for a perfect shot, 1 otherwise
    PerfectBonus,
}

/// Wind strength range, rolled per throw
#[derive(Debug, Clone, Copy)]
pub struct WindConfig {
    pub min_strength: f32,
    pub max_strength: f32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            min_strength: 100.0,
            max_strength: 400.0,
        }
    }
}

/// Cup bounding-box dimensions (px)
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct CupDims {
    pub width: f32,
    pub height: f32,
    /// Height of the rim band measured from the cup top
    pub rim_height: f32,
}

/// Particle burst flavor on a scored throw
#[derive(Debug, Clone, Copy)]
pub struct BurstProfile {
    /// Particles on a normal score
    pub count: usize,
    /// Particles on a perfect score
    pub perfect_count: usize,
    /// Horizontal velocity range is [-spread, spread)
    pub spread: f32,
    /// Color choices (ARGB)
    pub palette: &'static [u32],
}

/// Celebration palette shared by both modes (gold, red, teal, mint)
pub const CLASSIC_PALETTE: [u32; 4] = [0xFFFFD700, 0xFFFF6B6B, 0xFF4ECDC4, 0xFF95E1D3];
/// Enhanced-mode palette adds a yellow
pub const ENHANCED_PALETTE: [u32; 5] = [0xFFFFD700, 0xFFFF6B6B, 0xFF4ECDC4, 0xFF95E1D3, 0xFFFFEB3B];

/// Fixed configuration for one simulation session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Screen bounds (px), fixed for the session
    pub screen_width: f32,
    pub screen_height: f32,
    pub ball_radius: f32,
    pub cup: CupDims,
    /// Initial cup position (top-left); clamped to the legal area on startup
    pub cup_start: Vec2,
    /// Wind settings; `None` disables wind entirely
    pub wind: Option<WindConfig>,
    pub scoring: ScoringPolicy,
    pub burst: BurstProfile,
    /// Step the cup away from the hand as the score grows
    pub cup_ladder: bool,
}

impl GameConfig {
    /// Classic mode: wind, combo-multiplier scoring, cup repositioned by score
    pub fn classic(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ball_radius: 24.0,
            cup: CupDims {
                width: 200.0,
                height: 60.0,
                rim_height: 30.0,
            },
            cup_start: Vec2::new(screen_width * 0.75, screen_height * 0.7),
            wind: Some(WindConfig::default()),
            scoring: ScoringPolicy::ComboMultiplier,
            burst: BurstProfile {
                count: 20,
                perfect_count: 20,
                spread: 5.0,
                palette: &CLASSIC_PALETTE,
            },
            cup_ladder: true,
        }
    }

    /// Enhanced mode: no wind, perfect-shot bonus, player-placed cup
    pub fn enhanced(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ball_radius: 24.0,
            cup: CupDims {
                width: 250.0,
                height: 270.0,
                rim_height: 35.0,
            },
            cup_start: Vec2::new(screen_width * 0.55, screen_height * 0.4),
            wind: None,
            scoring: ScoringPolicy::PerfectBonus,
            burst: BurstProfile {
                count: 20,
                perfect_count: 30,
                spread: 6.0,
                palette: &ENHANCED_PALETTE,
            },
            cup_ladder: false,
        }
    }

    /// Ball rest position between throws
    pub fn hand_anchor(&self) -> Vec2 {
        Vec2::new(self.screen_width * HAND_X, self.screen_height * HAND_Y)
    }

    /// Cup X for a given score, stepping toward harder placements
    pub fn ladder_cup_x(&self, score: u32) -> f32 {
        let fraction = match score {
            0..3 => 0.75,
            3..6 => 0.65,
            6..10 => 0.55,
            _ => 0.4 + (score % 3) as f32 * 0.15,
        };
        self.screen_width * fraction
    }

    /// Cup Y used together with the ladder
    pub fn ladder_cup_y(&self) -> f32 {
        self.screen_height * 0.7
    }

    /// Clamp a requested ball position to the draggable area
    pub fn clamp_ball_position(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(50.0, (self.screen_width - 50.0).max(50.0)),
            pos.y.clamp(100.0, (self.screen_height * 0.9).max(100.0)),
        )
    }
}
