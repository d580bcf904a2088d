//! Paper Toss entry point
//!
//! Headless demo session: drives the simulation exactly as a frontend
//! would, printing throw outcomes and lifetime records.

use glam::Vec2;

use paper_toss::sim::{GameConfig, GamePhase, Outcome, Simulation};
use paper_toss::{SavedStats, StatsStore};

const SCREEN_W: f32 = 800.0;
const SCREEN_H: f32 = 1600.0;
const STATS_FILE: &str = "paper_toss_stats.json";

fn main() {
    env_logger::init();
    log::info!("Paper Toss (headless) starting...");

    run_mode(
        "Enhanced",
        GameConfig::enhanced(SCREEN_W, SCREEN_H),
        2024,
        &[
            Vec2::new(440.0, -1900.0),
            Vec2::new(560.0, -1900.0),
            Vec2::new(-300.0, -200.0),
        ],
    );

    run_mode(
        "Classic",
        GameConfig::classic(SCREEN_W, SCREEN_H),
        2024,
        &[
            Vec2::new(700.0, -1100.0),
            Vec2::new(650.0, -1200.0),
            Vec2::new(740.0, -1050.0),
        ],
    );

    let lifetime = SavedStats::open(STATS_FILE).snapshot();
    println!(
        "\nLifetime: {} shots, {} scores ({:.0}% accuracy), high score {}, best streak {}",
        lifetime.total_shots,
        lifetime.total_scores,
        lifetime.accuracy(),
        lifetime.high_score,
        lifetime.best_streak,
    );
}

/// Play a scripted set of throws in one mode, persisting records to the
/// shared stats file.
fn run_mode(name: &str, mut config: GameConfig, seed: u64, throws: &[Vec2]) {
    println!("\n=== {name} mode ===");
    let stats = SavedStats::open(STATS_FILE);
    // A cup spot dragged in an earlier session comes back, unless the mode
    // repositions the cup by score anyway.
    if !config.cup_ladder {
        if let Some(pos) = stats.cup_position() {
            config.cup_start = pos;
        }
    }
    if let Some(wind) = &config.wind {
        log::info!(
            "{name}: wind {:.0}..{:.0} px/s^2",
            wind.min_strength,
            wind.max_strength
        );
    }

    let mut sim = Simulation::new(config, seed, Box::new(stats));
    if let Some(wind) = sim.state().wind {
        println!("  wind: {:+.0} px/s^2", wind.force());
    }
    for &velocity in throws {
        wait_idle(&mut sim);
        sim.launch(velocity);
        let outcome = next_outcome(&mut sim);
        let label = match outcome {
            Outcome::Scored { perfect: true, bonus } => format!("perfect! +{bonus}"),
            Outcome::Scored { perfect: false, bonus } => format!("scored +{bonus}"),
            Outcome::Missed => "missed".to_string(),
        };
        println!(
            "  throw ({:+.0}, {:+.0}) -> {label}, total {}",
            velocity.x,
            velocity.y,
            sim.state().score
        );
    }

    let state = sim.state();
    println!(
        "  session: score {}, streak best {}, attempts {}",
        state.score, state.best_streak, state.attempts
    );
}

/// Step through any settle left over from the previous throw.
fn wait_idle(sim: &mut Simulation) {
    while sim.state().phase != GamePhase::Idle {
        sim.step();
    }
}

/// Step until the current flight resolves. Flights are frame-bounded, so
/// this always returns.
fn next_outcome(sim: &mut Simulation) -> Outcome {
    loop {
        if let Some(outcome) = sim.step().outcome {
            return outcome;
        }
    }
}
