//! The generational search loop: seed, breed, select, converge.

use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;

use crate::maze::{Pos, VoxelGrid};
use crate::schema::EvolutionConfig;

use super::EvolveError;
use super::breeding::{MazeRng, clear_entry_points};
use super::fitness::FitnessEvaluator;

/// A scored maze. Fitness is the shortest start-to-goal distance; longer
/// paths rank higher.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub distance: u32,
    pub maze: VoxelGrid,
}

/// Offspring are drawn in batches of this many between parallel scoring
/// passes.
const BATCH: usize = 16;

/// Elitist generational search for the most complex maze.
///
/// All randomness flows through one [`MazeRng`]; offspring are generated
/// sequentially on it and only the pure fitness evaluation fans out across
/// threads, so a fixed seed reproduces the whole run.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    rng: MazeRng,
    start: Pos,
    goal: Pos,
    elites: Vec<Candidate>,
    generation: usize,
    best_distance: u32,
    stagnation: usize,
}

impl EvolutionEngine {
    pub fn new(start: Pos, goal: Pos, config: EvolutionConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => MazeRng::new(seed),
            None => MazeRng::from_entropy(),
        };
        Self {
            evaluator: FitnessEvaluator::new(start, goal),
            rng,
            start,
            goal,
            elites: Vec::new(),
            generation: 0,
            best_distance: 0,
            stagnation: 0,
            config,
        }
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best distance seen so far. Monotonically non-decreasing: the elite
    /// set is carried over unchanged, so the champion can never be lost.
    pub fn best_distance(&self) -> u32 {
        self.best_distance
    }

    /// Run until the best distance stagnates past the configured limit and
    /// return the best candidate found.
    pub fn run(&mut self) -> Result<Candidate, EvolveError> {
        self.elites = self.seed_population()?;
        self.best_distance = self.elites[0].distance;
        info!(
            "seeded generation 0 with {} candidates, best distance {}",
            self.elites.len(),
            self.best_distance
        );

        loop {
            let population = self.breed_generation()?;
            self.select(population);
            self.generation += 1;

            info!(
                "generation {}: elite distances {:?}",
                self.generation,
                self.elites.iter().map(|c| c.distance).collect::<Vec<_>>()
            );

            if self.elites[0].distance > self.best_distance {
                self.best_distance = self.elites[0].distance;
                self.stagnation = 0;
            } else {
                self.stagnation += 1;
                if self.stagnation > self.config.stagnation_limit {
                    break;
                }
            }
        }

        Ok(self.elites[0].clone())
    }

    /// Random search for generation 0: draw mazes at the initial density
    /// until enough valid candidates exist or the deadline passes.
    fn seed_population(&mut self) -> Result<Vec<Candidate>, EvolveError> {
        let started = Instant::now();
        let deadline = started + Duration::from_secs(self.config.seed_timeout_secs);
        let wanted = self.config.initial_population * 3;
        let mut found: Vec<Candidate> = Vec::new();

        while found.len() < wanted {
            if Instant::now() >= deadline {
                if found.is_empty() {
                    return Err(EvolveError::SeedTimeout {
                        elapsed_secs: started.elapsed().as_secs(),
                    });
                }
                break;
            }

            let mut batch = Vec::with_capacity(BATCH);
            for _ in 0..BATCH {
                let mut maze = self
                    .rng
                    .random_maze(self.config.maze_size, self.config.initial_density)?;
                clear_entry_points(&mut maze, &[self.start, self.goal])?;
                batch.push(maze);
            }
            found.extend(self.evaluate_batch(batch)?);
            debug!("seed phase: {}/{} valid candidates", found.len(), wanted);
        }

        found.sort_by(|a, b| b.distance.cmp(&a.distance));
        found.truncate(self.config.initial_population);
        Ok(found)
    }

    /// Produce the next population: the elites unchanged, topped up with
    /// valid mutated or crossed offspring.
    fn breed_generation(&mut self) -> Result<Vec<Candidate>, EvolveError> {
        let mut population = self.elites.clone();

        while population.len() < self.config.population_size {
            let mut batch = Vec::with_capacity(BATCH);
            for _ in 0..BATCH {
                let mut offspring = if self.rng.coin() {
                    let mut maze = self.rng.pick(&self.elites).maze.clone();
                    self.rng.mutate(&mut maze)?;
                    maze
                } else {
                    let a = self.rng.pick(&self.elites);
                    let b = self.rng.pick(&self.elites);
                    self.rng.cross(&a.maze, &b.maze)?
                };
                // Mutation or crossover may have corrupted the start or goal
                // footing.
                clear_entry_points(&mut offspring, &[self.start, self.goal])?;
                batch.push(offspring);
            }

            for candidate in self.evaluate_batch(batch)? {
                if population.len() < self.config.population_size {
                    population.push(candidate);
                }
            }
        }

        Ok(population)
    }

    /// Score a batch of mazes in parallel, keeping only those with a path.
    /// Candidate evaluation shares no mutable state, so the batch fans out
    /// freely and synchronizes here.
    fn evaluate_batch(&self, batch: Vec<VoxelGrid>) -> Result<Vec<Candidate>, EvolveError> {
        let evaluator = self.evaluator;
        let scored: Vec<Result<Option<Candidate>, EvolveError>> = batch
            .into_par_iter()
            .map(|maze| {
                let path = evaluator.evaluate(&maze)?;
                Ok(path.map(|p| Candidate {
                    distance: p.distance,
                    maze,
                }))
            })
            .collect();

        let mut valid = Vec::new();
        for result in scored {
            if let Some(candidate) = result? {
                valid.push(candidate);
            }
        }
        Ok(valid)
    }

    /// Keep the top candidates by distance descending as the new elite set.
    fn select(&mut self, mut population: Vec<Candidate>) {
        population.sort_by(|a, b| b.distance.cmp(&a.distance));
        population.truncate(self.config.elite_size);
        self.elites = population;
    }
}
