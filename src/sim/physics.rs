//! Ball kinematics and screen-boundary resolution
//!
//! Two pure stages run in order each flight frame: `integrate` advances the
//! ball under gravity/drag/wind, then `resolve_bounds` reflects it off the
//! screen edges and floor. The update order inside `integrate` is load-bearing
//! for trajectory reproduction and must not be rearranged.

use super::state::{Ball, Wind};
use crate::consts::*;

/// What `resolve_bounds` did to the ball this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceReport {
    pub ceiling: bool,
    pub wall: bool,
    pub floor_bounce: bool,
    /// Floor contact with too little energy left; the throw is over
    pub dead: bool,
}

/// Advance the ball by one timestep.
///
/// Order: gravity, drag, wind, position, rotation. Wind pushes hardest near
/// the top of the screen and fades to nothing at the bottom.
pub fn integrate(ball: &mut Ball, wind: Option<Wind>, screen_height: f32, dt: f32) {
    ball.vel.y += GRAVITY * dt;
    ball.vel.x *= DRAG;
    if let Some(wind) = wind {
        let falloff = 1.0 - (ball.pos.y / screen_height).clamp(0.0, 1.0);
        ball.vel.x += wind.force() * falloff * dt;
    }
    ball.pos += ball.vel * dt;
    ball.rotation += (ball.vel.x * 0.5 + ball.vel.y * 0.3) * dt;
}

/// Reflect the ball off the ceiling, side walls and floor.
///
/// Every reflection keeps `BOUNCE_DAMPING` of the velocity, so floor-contact
/// energy strictly shrinks and the dead branch is reached in a bounded number
/// of bounces. A dead floor contact leaves position and velocity as
/// integrated; the caller ends the throw.
pub fn resolve_bounds(ball: &mut Ball, screen_width: f32, screen_height: f32) -> BounceReport {
    let mut report = BounceReport::default();
    let r = ball.radius;

    // Ceiling
    if ball.pos.y < r && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y * BOUNCE_DAMPING;
        ball.pos.y = r;
        report.ceiling = true;
    }

    // Side walls
    if ball.pos.x < r {
        ball.vel.x = -ball.vel.x * BOUNCE_DAMPING;
        ball.pos.x = r;
        report.wall = true;
    } else if ball.pos.x > screen_width - r {
        ball.vel.x = -ball.vel.x * BOUNCE_DAMPING;
        ball.pos.x = screen_width - r;
        report.wall = true;
    }

    // Floor
    let floor_y = screen_height * FLOOR_LINE - r;
    if ball.pos.y > floor_y && ball.vel.y > 0.0 {
        if ball.vel.y.abs() > FLOOR_STOP_SPEED {
            ball.vel.y = -ball.vel.y * BOUNCE_DAMPING;
            ball.pos.y = floor_y;
            ball.vel.x *= FLOOR_FRICTION;
            report.floor_bounce = true;
        } else {
            report.dead = true;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: 24.0,
            rotation: 0.0,
            in_hand: false,
        }
    }

    #[test]
    fn test_integrate_gravity_and_drag() {
        let mut ball = ball_at(Vec2::new(200.0, 800.0), Vec2::new(100.0, 0.0));
        integrate(&mut ball, None, 1600.0, SIM_DT);
        // vy picks up G*dt, vx loses one drag factor
        assert!((ball.vel.y - 40.0).abs() < 0.001);
        assert!((ball.vel.x - 99.0).abs() < 0.001);
        // Position moves by the post-update velocity
        assert!((ball.pos.x - (200.0 + 99.0 * SIM_DT)).abs() < 0.001);
        assert!((ball.pos.y - (800.0 + 40.0 * SIM_DT)).abs() < 0.001);
    }

    #[test]
    fn test_integrate_rotation_tracks_velocity() {
        let mut ball = ball_at(Vec2::new(200.0, 800.0), Vec2::new(100.0, 0.0));
        integrate(&mut ball, None, 1600.0, SIM_DT);
        let expected = (ball.vel.x * 0.5 + ball.vel.y * 0.3) * SIM_DT;
        assert!((ball.rotation - expected).abs() < 0.001);
    }

    #[test]
    fn test_wind_fades_with_height() {
        let wind = Some(Wind {
            direction: 1.0,
            strength: 300.0,
        });
        // Near the top: almost full push
        let mut high = ball_at(Vec2::new(400.0, 0.0), Vec2::ZERO);
        integrate(&mut high, wind, 1600.0, SIM_DT);
        assert!((high.vel.x - 300.0 * SIM_DT).abs() < 0.001);
        // At the bottom: no push at all
        let mut low = ball_at(Vec2::new(400.0, 1600.0), Vec2::ZERO);
        integrate(&mut low, wind, 1600.0, SIM_DT);
        assert_eq!(low.vel.x, 0.0);
        // Below the screen the falloff clamps instead of going negative
        let mut under = ball_at(Vec2::new(400.0, 2000.0), Vec2::ZERO);
        integrate(&mut under, wind, 1600.0, SIM_DT);
        assert_eq!(under.vel.x, 0.0);
    }

    #[test]
    fn test_ceiling_bounce_damps() {
        let mut ball = ball_at(Vec2::new(400.0, 10.0), Vec2::new(0.0, -500.0));
        let report = resolve_bounds(&mut ball, 800.0, 1600.0);
        assert!(report.ceiling);
        assert_eq!(ball.pos.y, 24.0);
        assert!((ball.vel.y - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_ceiling_ignores_descending_ball() {
        // Already heading down while above the line: leave it alone
        let mut ball = ball_at(Vec2::new(400.0, 10.0), Vec2::new(0.0, 200.0));
        let report = resolve_bounds(&mut ball, 800.0, 1600.0);
        assert!(!report.ceiling);
        assert_eq!(ball.pos.y, 10.0);
    }

    #[test]
    fn test_wall_bounces_damp_both_sides() {
        let mut left = ball_at(Vec2::new(5.0, 800.0), Vec2::new(-200.0, 0.0));
        let report = resolve_bounds(&mut left, 800.0, 1600.0);
        assert!(report.wall);
        assert_eq!(left.pos.x, 24.0);
        assert!((left.vel.x - 120.0).abs() < 0.001);

        let mut right = ball_at(Vec2::new(795.0, 800.0), Vec2::new(200.0, 0.0));
        let report = resolve_bounds(&mut right, 800.0, 1600.0);
        assert!(report.wall);
        assert_eq!(right.pos.x, 776.0);
        assert!((right.vel.x - (-120.0)).abs() < 0.001);
    }

    #[test]
    fn test_floor_bounce_keeps_energetic_ball() {
        // Floor line at 0.85*1600 - 24 = 1336
        let mut ball = ball_at(Vec2::new(400.0, 1340.0), Vec2::new(100.0, 400.0));
        let report = resolve_bounds(&mut ball, 800.0, 1600.0);
        assert!(report.floor_bounce);
        assert!(!report.dead);
        assert!((ball.pos.y - 1336.0).abs() < 0.001);
        assert!((ball.vel.y - (-240.0)).abs() < 0.001);
        assert!((ball.vel.x - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_floor_contact_below_threshold_is_dead() {
        let mut ball = ball_at(Vec2::new(400.0, 1340.0), Vec2::new(50.0, 80.0));
        let report = resolve_bounds(&mut ball, 800.0, 1600.0);
        assert!(report.dead);
        assert!(!report.floor_bounce);
        // Dead contact leaves the ball untouched
        assert_eq!(ball.pos.y, 1340.0);
        assert_eq!(ball.vel.y, 80.0);
    }

    #[test]
    fn test_floor_ignores_ascending_ball() {
        // Rising through the floor band after a bounce: no new contact
        let mut ball = ball_at(Vec2::new(400.0, 1340.0), Vec2::new(0.0, -200.0));
        let report = resolve_bounds(&mut ball, 800.0, 1600.0);
        assert_eq!(report, BounceReport::default());
    }

    #[test]
    fn test_floor_energy_strictly_decreases() {
        // Repeated bounces shed energy until the dead branch must trigger
        let mut ball = ball_at(Vec2::new(400.0, 1340.0), Vec2::new(0.0, 800.0));
        let mut last_speed = ball.vel.y;
        for _ in 0..10 {
            let report = resolve_bounds(&mut ball, 800.0, 1600.0);
            if report.dead {
                return;
            }
            assert!(report.floor_bounce);
            let rebound = ball.vel.y.abs();
            assert!(rebound < last_speed);
            last_speed = rebound;
            // Pretend the ball came straight back down at the rebound speed
            ball.pos.y = 1340.0;
            ball.vel.y = rebound;
        }
        panic!("ball never went dead");
    }
}
