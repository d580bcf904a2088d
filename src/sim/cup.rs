//! Cup geometry and scoring zones
//!
//! The cup is an axis-aligned box addressed by its top-left corner. Scoring
//! happens in a band just inside the rim:
//! - horizontally inset 20 px from either edge
//! - vertically from 10 px above the rim line to 35 px below it
//! A narrower 30 px radius around the horizontal center marks a perfect shot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::CupDims;
use crate::consts::FLOOR_LINE;

/// Horizontal inset of the scoring band from the cup edges (px)
pub const RIM_INSET: f32 = 20.0;
/// Scoring band extent above the rim line (px)
pub const ZONE_ABOVE_RIM: f32 = 10.0;
/// Scoring band extent below the rim line (px)
pub const ZONE_BELOW_RIM: f32 = 35.0;
/// Half-width of the perfect zone around the cup center (px)
pub const PERFECT_RADIUS: f32 = 30.0;

/// Minimum cup Y when repositioned (keeps it clear of the score display)
pub const CUP_MIN_Y: f32 = 50.0;

/// The target cup
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cup {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub dims: CupDims,
}

impl Cup {
    pub fn new(pos: Vec2, dims: CupDims) -> Self {
        Self { pos, dims }
    }

    /// Horizontal center of the cup
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.dims.width / 2.0
    }

    /// Y of the rim line (cup top plus rim height)
    #[inline]
    pub fn rim_y(&self) -> f32 {
        self.pos.y + self.dims.rim_height
    }

    /// Where scored balls burst into particles
    pub fn rim_center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.rim_y())
    }

    /// Scoring test: a descending ball inside the rim band counts.
    ///
    /// An ascending ball passing through the band does not score; it has to
    /// come back down into the cup.
    pub fn catches(&self, pos: Vec2, vel: Vec2) -> bool {
        vel.y > 0.0
            && pos.x >= self.pos.x + RIM_INSET
            && pos.x <= self.pos.x + self.dims.width - RIM_INSET
            && pos.y >= self.rim_y() - ZONE_ABOVE_RIM
            && pos.y <= self.rim_y() + ZONE_BELOW_RIM
    }

    /// Perfect-shot test on the crossing X (only meaningful when caught)
    #[inline]
    pub fn is_perfect(&self, x: f32) -> bool {
        (x - self.center_x()).abs() < PERFECT_RADIUS
    }

    /// Clamp a requested top-left position so the cup stays fully on screen,
    /// below the score display and above the floor
    pub fn clamp_position(
        pos: Vec2,
        dims: CupDims,
        screen_width: f32,
        screen_height: f32,
    ) -> Vec2 {
        Vec2::new(
            pos.x.clamp(0.0, (screen_width - dims.width).max(0.0)),
            pos.y.clamp(
                CUP_MIN_Y,
                (screen_height * FLOOR_LINE - dims.height).max(CUP_MIN_Y),
            ),
        )
    }
}
