//! Celebration particles and the ball trail
//!
//! Both are purely visual, but their lifecycles are part of the simulation
//! contract: particles decay on every frame regardless of ball state, the
//! trail records only while a throw is animating. Particle motion is in
//! px-per-frame units, not px-per-second.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::BurstProfile;

/// Alpha lost per frame; a full-alpha particle lives exactly 50 frames
pub const ALPHA_DECAY: f32 = 0.02;
/// Fade cutoff. Subtracting 0.02 from 1.0 fifty times leaves ~4e-7 of
/// rounding residue rather than zero.
const ALPHA_FLOOR: f32 = 1e-6;
/// Per-frame horizontal drag on particles
const PARTICLE_DRAG: f32 = 0.98;
/// Per-frame downward pull on particles
const PARTICLE_GRAVITY: f32 = 0.5;

/// Burst vertical kick range (px/frame, upward)
const BURST_RISE_MIN: f32 = -23.0;
const BURST_RISE_MAX: f32 = -5.0;
/// Particle radii for normal and perfect scores
const PARTICLE_SIZE: f32 = 8.0;
const PERFECT_PARTICLE_SIZE: f32 = 10.0;

/// Trail points kept; the oldest is dropped beyond this
pub const TRAIL_LENGTH: usize = 15;
/// Alpha of the newest trail point when the trail is full
const TRAIL_MAX_ALPHA: f32 = 0.5;

/// A celebration particle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement applied each frame
    pub vel: Vec2,
    /// ARGB color
    pub color: u32,
    /// 1.0 at spawn, removed at 0
    pub alpha: f32,
    pub size: f32,
}

/// One sample of the ball trail, oldest first
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Decay all particles by one frame and drop the dead ones
pub fn step_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.alpha -= ALPHA_DECAY;
        p.pos += p.vel;
        p.vel.x *= PARTICLE_DRAG;
        p.vel.y += PARTICLE_GRAVITY;
    }
    particles.retain(|p| p.alpha > ALPHA_FLOOR);
}

/// Spawn a celebration burst at `origin` (the cup-rim center).
///
/// Each particle draws its horizontal kick, vertical kick and palette color
/// in that order, so bursts replay identically for a given RNG state.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    origin: Vec2,
    profile: &BurstProfile,
    perfect: bool,
    rng: &mut Pcg32,
) {
    let count = if perfect {
        profile.perfect_count
    } else {
        profile.count
    };
    let size = if perfect {
        PERFECT_PARTICLE_SIZE
    } else {
        PARTICLE_SIZE
    };
    for _ in 0..count {
        let vel = Vec2::new(
            rng.random_range(-profile.spread..profile.spread),
            rng.random_range(BURST_RISE_MIN..BURST_RISE_MAX),
        );
        let color = profile.palette[rng.random_range(0..profile.palette.len())];
        particles.push(Particle {
            pos: origin,
            vel,
            color,
            alpha: 1.0,
            size,
        });
    }
}

/// Append the ball position to the trail, keep the newest `TRAIL_LENGTH`
/// points and refresh their alphas so the oldest is faintest
pub fn push_trail(trail: &mut Vec<TrailPoint>, pos: Vec2) {
    trail.push(TrailPoint { pos, alpha: 0.0 });
    if trail.len() > TRAIL_LENGTH {
        trail.remove(0);
    }
    for (i, point) in trail.iter_mut().enumerate() {
        point.alpha = (i + 1) as f32 / TRAIL_LENGTH as f32 * TRAIL_MAX_ALPHA;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::sim::config::GameConfig;
    use rand::SeedableRng;

    fn one_particle(vel: Vec2) -> Vec<Particle> {
        vec![Particle {
            pos: Vec2::new(500.0, 600.0),
            vel,
            color: 0xFFFFD700,
            alpha: 1.0,
            size: 8.0,
        }]
    }

    #[test]
    fn test_particle_decay_law() {
        let mut particles = one_particle(Vec2::new(4.0, -10.0));
        step_particles(&mut particles);
        let p = &particles[0];
        assert!((p.alpha - 0.98).abs() < 1e-6);
        // Position moved by the pre-update velocity
        assert_eq!(p.pos, Vec2::new(504.0, 590.0));
        assert!((p.vel.x - 3.92).abs() < 1e-4);
        assert!((p.vel.y - (-9.5)).abs() < 1e-4);
    }

    #[test]
    fn test_particle_dies_within_50_frames() {
        let mut particles = one_particle(Vec2::new(0.0, -10.0));
        let mut frames = 0;
        let mut last_alpha = particles[0].alpha;
        while !particles.is_empty() {
            step_particles(&mut particles);
            frames += 1;
            if let Some(p) = particles.first() {
                assert!(p.alpha < last_alpha, "alpha must strictly decrease");
                last_alpha = p.alpha;
            }
            assert!(frames <= 50, "particle outlived its decay bound");
        }
        assert_eq!(frames, 50);
    }

    #[test]
    fn test_burst_counts_and_sizes() {
        let profile = GameConfig::enhanced(800.0, 1600.0).burst;
        let mut rng = Pcg32::seed_from_u64(1);

        let mut normal = Vec::new();
        spawn_burst(&mut normal, Vec2::new(575.0, 595.0), &profile, false, &mut rng);
        assert_eq!(normal.len(), 20);
        assert!(normal.iter().all(|p| p.size == 8.0 && p.alpha == 1.0));

        let mut perfect = Vec::new();
        spawn_burst(&mut perfect, Vec2::new(575.0, 595.0), &profile, true, &mut rng);
        assert_eq!(perfect.len(), 30);
        assert!(perfect.iter().all(|p| p.size == 10.0));
    }

    #[test]
    fn test_burst_velocities_and_colors_from_profile() {
        let profile = GameConfig::classic(800.0, 1600.0).burst;
        let mut rng = Pcg32::seed_from_u64(9);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, Vec2::new(575.0, 595.0), &profile, false, &mut rng);
        for p in &particles {
            assert!(p.vel.x >= -5.0 && p.vel.x < 5.0);
            assert!(p.vel.y >= -23.0 && p.vel.y < -5.0);
            assert!(profile.palette.contains(&p.color));
            assert_eq!(p.pos, Vec2::new(575.0, 595.0));
        }
    }

    #[test]
    fn test_trail_caps_at_fifteen_oldest_first() {
        let mut trail = Vec::new();
        for i in 0..20 {
            push_trail(&mut trail, Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
        // Oldest surviving point is the sixth pushed
        assert_eq!(trail[0].pos.x, 5.0);
        assert_eq!(trail[14].pos.x, 19.0);
    }

    #[test]
    fn test_trail_alpha_by_recency() {
        let mut trail = Vec::new();
        for i in 0..15 {
            push_trail(&mut trail, Vec2::new(i as f32, 0.0));
        }
        // Newest point is brightest at 0.5, oldest faintest
        assert!((trail[14].alpha - 0.5).abs() < 1e-6);
        assert!((trail[0].alpha - 1.0 / 15.0 * 0.5).abs() < 1e-6);
        for pair in trail.windows(2) {
            assert!(pair[0].alpha < pair[1].alpha);
        }
    }

    #[test]
    fn test_short_trail_alpha_still_over_full_length() {
        let mut trail = Vec::new();
        push_trail(&mut trail, Vec2::ZERO);
        push_trail(&mut trail, Vec2::ZERO);
        // Two points: 1/15 and 2/15 of the max alpha
        assert!((trail[0].alpha - 1.0 / 15.0 * 0.5).abs() < 1e-6);
        assert!((trail[1].alpha - 2.0 / 15.0 * 0.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_alpha_decays_strictly_to_death(
            alpha in 0.05f32..1.0,
            vx in -10.0f32..10.0,
            vy in -23.0f32..0.0,
        ) {
            let mut particles = one_particle(Vec2::new(vx, vy));
            particles[0].alpha = alpha;
            // One extra frame of slack for rounding residue at the cutoff
            let bound = (alpha / ALPHA_DECAY).ceil() as u32 + 1;
            let mut frames = 0u32;
            let mut last_alpha = alpha;
            while !particles.is_empty() {
                step_particles(&mut particles);
                frames += 1;
                if let Some(p) = particles.first() {
                    prop_assert!(p.alpha < last_alpha);
                    last_alpha = p.alpha;
                }
                prop_assert!(frames <= bound, "particle outlived its decay bound");
            }
        }
    }
}
