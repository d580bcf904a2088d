//! Fixed timestep game loop
//!
//! `Simulation` owns the round state and advances it deterministically one
//! 16 ms frame at a time. Callers feed it launch and reposition commands,
//! call `step()` on their own frame clock, and read back snapshots.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::{GameConfig, ScoringPolicy};
use super::cup::Cup;
use super::particles;
use super::physics;
use super::state::{Ball, GamePhase, GameState, Outcome, Wind};
use crate::consts::{MAX_FLIGHT_FRAMES, OFFSCREEN_MARGIN, SETTLE_DELAY, SIM_DT};
use crate::stats::StatsStore;

/// One advanced frame: the post-step snapshot, plus the outcome when this
/// frame ended a throw.
#[derive(Debug, Clone)]
pub struct StepResult {
    pub state: GameState,
    pub outcome: Option<Outcome>,
}

/// Deterministic engine for one play session.
///
/// All randomness (wind rolls, burst velocities) comes from a single seeded
/// PCG stream, so two simulations built with the same config and seed and
/// fed the same commands replay identical trajectories.
pub struct Simulation {
    config: GameConfig,
    state: GameState,
    rng: Pcg32,
    stats: Box<dyn StatsStore>,
    /// Frames left in Settling before the round resets
    settle_frames: u32,
    /// Frames spent in the current Flight
    flight_frames: u32,
}

impl Simulation {
    /// Build a session from a mode config, a replay seed and a stats sink.
    ///
    /// Lifetime records (high score, best streak) are seeded from the sink
    /// so a returning player starts from their saved bests. The cup starts
    /// at the mode's position, clamped on screen.
    pub fn new(config: GameConfig, seed: u64, stats: Box<dyn StatsStore>) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let cup = Cup::new(
            Cup::clamp_position(
                config.cup_start,
                config.cup,
                config.screen_width,
                config.screen_height,
            ),
            config.cup,
        );
        let wind = config.wind.as_ref().map(|w| Wind::roll(w, &mut rng));
        let state = GameState {
            ball: Ball::in_hand(config.hand_anchor(), config.ball_radius),
            cup,
            wind,
            score: 0,
            high_score: stats.high_score(),
            attempts: 0,
            combo: 0,
            streak: 0,
            best_streak: stats.best_streak(),
            perfect_shots: 0,
            phase: GamePhase::Idle,
            paused: false,
            message: None,
            particles: Vec::new(),
            trail: Vec::new(),
        };
        Self {
            config,
            state,
            rng,
            stats,
            settle_frames: 0,
            flight_frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The lifetime stats sink.
    #[inline]
    pub fn stats(&self) -> &dyn StatsStore {
        self.stats.as_ref()
    }

    /// Advance one fixed 16 ms frame and return the snapshot.
    ///
    /// While paused this returns the state untouched: no physics, no
    /// particle decay, no settle countdown.
    pub fn step(&mut self) -> StepResult {
        if self.state.paused {
            return StepResult {
                state: self.state.clone(),
                outcome: None,
            };
        }

        let outcome = match self.state.phase {
            GamePhase::Idle => None,
            GamePhase::Flight => self.flight_frame(),
            GamePhase::Settling => {
                self.settle_frames = self.settle_frames.saturating_sub(1);
                if self.settle_frames == 0 {
                    self.reset_round();
                }
                None
            }
        };

        particles::step_particles(&mut self.state.particles);
        if self.state.is_animating() {
            particles::push_trail(&mut self.state.trail, self.state.ball.pos);
        }

        StepResult {
            state: self.state.clone(),
            outcome,
        }
    }

    /// Throw the ball. Ignored unless the ball is idle in hand and the game
    /// is not paused. Zero velocity is a legal throw; gravity takes over on
    /// the next frame.
    pub fn launch(&mut self, velocity: Vec2) {
        if self.state.phase != GamePhase::Idle || self.state.paused {
            return;
        }
        self.state.ball.vel = velocity;
        self.state.ball.in_hand = false;
        self.state.phase = GamePhase::Flight;
        self.flight_frames = 0;
        log::debug!("launch {:?} from {:?}", velocity, self.state.ball.pos);
    }

    /// Move the cup, clamped fully on screen and above the floor line.
    /// Ignored mid-throw and while paused. Accepted moves are pushed to the
    /// stats sink so the position survives restarts.
    pub fn reposition_cup(&mut self, pos: Vec2) {
        if self.state.phase != GamePhase::Idle || self.state.paused {
            return;
        }
        let clamped = Cup::clamp_position(
            pos,
            self.state.cup.dims,
            self.config.screen_width,
            self.config.screen_height,
        );
        self.state.cup.pos = clamped;
        self.stats.set_cup_position(clamped);
    }

    /// Move the idle ball to a new throwing spot, clamped to the playable
    /// area. Ignored mid-throw and while paused.
    pub fn reposition_ball(&mut self, pos: Vec2) {
        if self.state.phase != GamePhase::Idle || self.state.paused {
            return;
        }
        self.state.ball.pos = self.config.clamp_ball_position(pos);
    }

    pub fn pause(&mut self) {
        self.state.paused = true;
    }

    pub fn resume(&mut self) {
        self.state.paused = false;
    }

    /// One frame of ball flight: integrate, bounce, then check the cup and
    /// the termination bounds.
    fn flight_frame(&mut self) -> Option<Outcome> {
        self.flight_frames += 1;
        physics::integrate(
            &mut self.state.ball,
            self.state.wind,
            self.config.screen_height,
            SIM_DT,
        );
        let report = physics::resolve_bounds(
            &mut self.state.ball,
            self.config.screen_width,
            self.config.screen_height,
        );

        // A dead floor contact misses even inside the scoring band.
        if report.dead {
            return Some(self.finish_missed());
        }
        if self.state.cup.catches(self.state.ball.pos, self.state.ball.vel) {
            return Some(self.finish_scored());
        }
        if self.state.ball.pos.y >= self.config.screen_height + OFFSCREEN_MARGIN
            || self.flight_frames >= MAX_FLIGHT_FRAMES
        {
            return Some(self.finish_missed());
        }
        None
    }

    fn finish_scored(&mut self) -> Outcome {
        let cup = self.state.cup;
        let perfect = self.config.scoring == ScoringPolicy::PerfectBonus
            && cup.is_perfect(self.state.ball.pos.x);

        self.state.streak += 1;
        self.state.combo += 1;
        let bonus = match self.config.scoring {
            ScoringPolicy::PerfectBonus => {
                if perfect {
                    2
                } else {
                    1
                }
            }
            ScoringPolicy::ComboMultiplier => {
                if self.state.combo > 1 {
                    self.state.combo
                } else {
                    1
                }
            }
        };
        self.state.score += bonus;
        self.state.high_score = self.state.high_score.max(self.state.score);
        self.state.best_streak = self.state.best_streak.max(self.state.streak);
        if perfect {
            self.state.perfect_shots += 1;
        }
        self.state.message = Some(self.score_message(perfect, bonus));
        particles::spawn_burst(
            &mut self.state.particles,
            cup.rim_center(),
            &self.config.burst,
            perfect,
            &mut self.rng,
        );
        self.record_throw(true);
        log::debug!(
            "scored +{} -> {} (streak {})",
            bonus,
            self.state.score,
            self.state.streak
        );
        self.enter_settling();
        Outcome::Scored { perfect, bonus }
    }

    fn finish_missed(&mut self) -> Outcome {
        self.state.streak = 0;
        self.state.combo = 0;
        self.state.message = Some("Missed!".to_string());
        self.record_throw(false);
        self.enter_settling();
        Outcome::Missed
    }

    /// Lifetime bookkeeping, exactly once per completed throw.
    fn record_throw(&mut self, scored: bool) {
        self.state.attempts += 1;
        self.stats.record_shot();
        if scored {
            self.stats.record_score();
        }
        if self.state.high_score > self.stats.high_score() {
            self.stats.set_high_score(self.state.high_score);
        }
        if self.state.best_streak > self.stats.best_streak() {
            self.stats.set_best_streak(self.state.best_streak);
        }
    }

    /// Outcome text, most specific first: perfect beats streak beats plain.
    fn score_message(&self, perfect: bool, bonus: u32) -> String {
        if perfect {
            return format!("PERFECT! +{bonus}");
        }
        if self.state.streak >= 5 {
            return match self.config.scoring {
                ScoringPolicy::ComboMultiplier => format!("{}x COMBO!", self.state.combo),
                ScoringPolicy::PerfectBonus => format!("{}x STREAK!", self.state.streak),
            };
        }
        "Scored!".to_string()
    }

    fn enter_settling(&mut self) {
        self.state.phase = GamePhase::Settling;
        self.settle_frames = (SETTLE_DELAY / SIM_DT).ceil() as u32;
    }

    /// Put a fresh ball in hand, clear the round dressing, reroll the wind
    /// and apply the score-based cup ladder.
    fn reset_round(&mut self) {
        self.state.ball = Ball::in_hand(self.config.hand_anchor(), self.config.ball_radius);
        self.state.phase = GamePhase::Idle;
        self.state.message = None;
        self.state.trail.clear();
        self.flight_frames = 0;
        if let Some(wind_config) = &self.config.wind {
            self.state.wind = Some(Wind::roll(wind_config, &mut self.rng));
        }
        if self.config.cup_ladder {
            self.state.cup.pos = Vec2::new(
                self.config.ladder_cup_x(self.state.score),
                self.config.ladder_cup_y(),
            );
        }
    }
}
