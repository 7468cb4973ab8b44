//! Configuration types for an evolution run.

use serde::{Deserialize, Serialize};

/// Settings for one evolutionary search run.
///
/// The defaults reproduce the reference configuration: a 10³ maze, fifty
/// candidates per generation with a ten-strong elite set, and termination
/// after one hundred stagnant generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Edge length of the cubic maze volume.
    pub maze_size: i32,
    /// Wall density of seed-phase random mazes (0.0-1.0).
    pub initial_density: f64,
    /// Number of top seed-phase candidates kept as generation 0.
    pub initial_population: usize,
    /// Candidates per bred generation, elites included.
    pub population_size: usize,
    /// Top candidates carried over unchanged into the next generation.
    pub elite_size: usize,
    /// Consecutive generations without improvement before termination.
    pub stagnation_limit: usize,
    /// Wall-clock budget for the seed phase, in seconds.
    pub seed_timeout_secs: u64,
    /// RNG seed for reproducible runs; `None` seeds from entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            maze_size: 10,
            initial_density: 0.2,
            initial_population: 10,
            population_size: 50,
            elite_size: 10,
            stagnation_limit: 100,
            seed_timeout_secs: 100,
            random_seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maze_size < 4 {
            return Err(ConfigError::MazeTooSmall(self.maze_size));
        }
        if !(0.0..=1.0).contains(&self.initial_density) {
            return Err(ConfigError::InvalidDensity(self.initial_density));
        }
        if self.initial_population == 0 || self.population_size == 0 || self.elite_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.elite_size > self.population_size {
            return Err(ConfigError::EliteExceedsPopulation {
                elite: self.elite_size,
                population: self.population_size,
            });
        }
        if self.stagnation_limit == 0 {
            return Err(ConfigError::ZeroStagnationLimit);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Crossover cuts and the default goal placement both need a bit of room.
    #[error("maze size must be at least 4, got {0}")]
    MazeTooSmall(i32),
    #[error("initial wall density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("population sizes must be non-zero")]
    EmptyPopulation,
    #[error("elite set size {elite} exceeds population size {population}")]
    EliteExceedsPopulation { elite: usize, population: usize },
    #[error("stagnation limit must be non-zero")]
    ZeroStagnationLimit,
}
