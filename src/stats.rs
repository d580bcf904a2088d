//! Lifetime player records
//!
//! The simulation reports throws through the [`StatsStore`] trait and seeds
//! its session records from it. [`PlayerStats`] is the plain in-memory
//! implementation; [`SavedStats`] wraps it with a JSON file that is written
//! through on every update, so records survive restarts.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Sink for lifetime records, updated by the simulation as throws resolve.
pub trait StatsStore {
    /// A throw finished, scored or not.
    fn record_shot(&mut self);
    /// A throw landed in the cup.
    fn record_score(&mut self);

    fn high_score(&self) -> u32;
    fn set_high_score(&mut self, value: u32);
    fn best_streak(&self) -> u32;
    fn set_best_streak(&mut self, value: u32);
    fn total_shots(&self) -> u32;
    fn total_scores(&self) -> u32;

    /// Last cup spot the player dragged to, if any.
    fn cup_position(&self) -> Option<Vec2> {
        None
    }
    fn set_cup_position(&mut self, _pos: Vec2) {}

    /// Lifetime hit rate in percent.
    fn accuracy(&self) -> f32 {
        if self.total_shots() == 0 {
            0.0
        } else {
            self.total_scores() as f32 / self.total_shots() as f32 * 100.0
        }
    }
}

/// Lifetime records for one player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerStats {
    pub high_score: u32,
    pub best_streak: u32,
    pub total_shots: u32,
    pub total_scores: u32,
    /// Saved cup spot, restored on the next session
    pub cup_position: Option<Vec2>,
}

impl PlayerStats {
    /// Read stats from `path`, or start fresh when the file is missing or
    /// unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(stats) => {
                    log::info!("Loaded player stats from {}", path.display());
                    stats
                }
                Err(e) => {
                    log::warn!("Corrupt stats file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No stats file at {}, starting fresh", path.display());
                Self::default()
            }
        }
    }

    /// Write stats to `path` as pretty JSON.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::error!("Failed to write stats to {}: {}", path.display(), e);
                }
            }
            Err(e) => log::error!("Failed to serialize stats: {}", e),
        }
    }
}

impl StatsStore for PlayerStats {
    fn record_shot(&mut self) {
        self.total_shots += 1;
    }

    fn record_score(&mut self) {
        self.total_scores += 1;
    }

    fn high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, value: u32) {
        self.high_score = value;
    }

    fn best_streak(&self) -> u32 {
        self.best_streak
    }

    fn set_best_streak(&mut self, value: u32) {
        self.best_streak = value;
    }

    fn total_shots(&self) -> u32 {
        self.total_shots
    }

    fn total_scores(&self) -> u32 {
        self.total_scores
    }

    fn cup_position(&self) -> Option<Vec2> {
        self.cup_position
    }

    fn set_cup_position(&mut self, pos: Vec2) {
        self.cup_position = Some(pos);
    }
}

/// File-backed stats: every update lands on disk immediately.
#[derive(Debug)]
pub struct SavedStats {
    stats: PlayerStats,
    path: PathBuf,
}

impl SavedStats {
    /// Open the stats file at `path`, creating fresh records if absent.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stats = PlayerStats::load(&path);
        Self { stats, path }
    }

    #[inline]
    pub fn snapshot(&self) -> PlayerStats {
        self.stats
    }

    fn save(&self) {
        self.stats.save(&self.path);
    }
}

impl StatsStore for SavedStats {
    fn record_shot(&mut self) {
        self.stats.record_shot();
        self.save();
    }

    fn record_score(&mut self) {
        self.stats.record_score();
        self.save();
    }

    fn high_score(&self) -> u32 {
        self.stats.high_score
    }

    fn set_high_score(&mut self, value: u32) {
        self.stats.high_score = value;
        self.save();
    }

    fn best_streak(&self) -> u32 {
        self.stats.best_streak
    }

    fn set_best_streak(&mut self, value: u32) {
        self.stats.best_streak = value;
        self.save();
    }

    fn total_shots(&self) -> u32 {
        self.stats.total_shots
    }

    fn total_scores(&self) -> u32 {
        self.stats.total_scores
    }

    fn cup_position(&self) -> Option<Vec2> {
        self.stats.cup_position
    }

    fn set_cup_position(&mut self, pos: Vec2) {
        self.stats.cup_position = Some(pos);
        self.save();
    }
}
