/// Simulation driver.
///
/// Owns the RNG and every collection in play; runs the INIT → ROUND → DONE
/// state machine one `step()` at a time so callers can watch rounds go by.
/// The caller decides what to print. The engine never does.
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::constants::{DEFAULT_BALL_COUNT, DEFAULT_MAX_DIAMETER, MIN_DIAMETER};
use crate::pairing::{generate_initial_round, matching_impossible, rematch_round};
use crate::stats::usage_percentage;
use crate::types::{Diameter, Pair, RoundOutcome, RoundStats, SimulationReport};

/// Configuration for one simulation run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Pairs created for the first round. Zero is allowed and produces an
    /// empty report rather than an error.
    pub ball_count: usize,
    /// Upper end of the inclusive diameter range. Must be at least
    /// [`MIN_DIAMETER`], or the draw range would be empty.
    pub max_diameter: Diameter,
    /// Fixed RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            ball_count: DEFAULT_BALL_COUNT,
            max_diameter: DEFAULT_MAX_DIAMETER,
            seed: None,
        }
    }
}

/// Rejected configuration. The driver refuses to start rather than panic
/// mid-round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max diameter must be at least {MIN_DIAMETER}, got {0}")]
    EmptyDiameterRange(Diameter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Init,
    Round,
    Done,
}

/// The simulation state machine.
pub struct Simulation {
    config: SimConfig,
    rng: StdRng,
    phase: Phase,
    unused_pairs: Vec<Pair>,
    matched_pairs: Vec<Pair>,
    round_percentages: Vec<f64>,
    rounds: usize,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        if config.max_diameter < MIN_DIAMETER {
            return Err(ConfigError::EmptyDiameterRange(config.max_diameter));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Simulation {
            config,
            rng,
            phase: Phase::Init,
            unused_pairs: Vec::new(),
            matched_pairs: Vec::new(),
            round_percentages: Vec::new(),
            rounds: 0,
        })
    }

    /// Run one state transition. Returns the finished round's stats, or
    /// `None` once matching has become impossible.
    pub fn step(&mut self) -> Option<RoundStats> {
        let outcome = match self.phase {
            Phase::Init => {
                self.phase = Phase::Round;
                generate_initial_round(
                    self.config.ball_count,
                    self.config.max_diameter,
                    &mut self.rng,
                )
            }
            Phase::Round => {
                if matching_impossible(&self.unused_pairs) {
                    self.phase = Phase::Done;
                    return None;
                }
                rematch_round(std::mem::take(&mut self.unused_pairs), &mut self.rng)
            }
            Phase::Done => return None,
        };

        Some(self.record(outcome))
    }

    fn record(&mut self, outcome: RoundOutcome) -> RoundStats {
        self.rounds += 1;
        let usage = usage_percentage(outcome.used_pairs.len(), outcome.unused_pairs.len());
        if let Some(percentage) = usage {
            self.round_percentages.push(percentage);
        }

        let stats = RoundStats {
            round: self.rounds,
            matched: outcome.used_pairs.len(),
            carried: outcome.unused_pairs.len(),
            usage_percentage: usage,
        };

        self.matched_pairs.extend(outcome.used_pairs);
        self.unused_pairs = outcome.unused_pairs;
        stats
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Pairs still eligible for re-pairing.
    pub fn unused_count(&self) -> usize {
        self.unused_pairs.len()
    }

    /// Matched pairs accumulated so far.
    pub fn matched_count(&self) -> usize {
        self.matched_pairs.len()
    }

    /// Consume the driver and build the final report.
    pub fn into_report(self) -> SimulationReport {
        SimulationReport {
            round_percentages: self.round_percentages,
            matched_pairs: self.matched_pairs,
            leftover_pairs: self.unused_pairs,
            rounds: self.rounds,
            initial_pairs: self.config.ball_count,
        }
    }
}

/// Run a configuration to completion and return the report.
pub fn run_simulation(config: SimConfig) -> Result<SimulationReport, ConfigError> {
    let mut sim = Simulation::new(config)?;
    while sim.step().is_some() {}
    Ok(sim.into_report())
}
