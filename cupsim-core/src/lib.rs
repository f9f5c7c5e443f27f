/// cupsim-core: Monte Carlo engine for the ball/cup matching problem.
///
/// Balls and cups carry integer diameters drawn uniformly from a closed
/// range, the same distribution for both. A pair matches when the ball is
/// strictly smaller than the cup; matched pairs leave play, leftovers are
/// re-shuffled and re-paired round after round until no further match is
/// possible. The reported estimate is the mean of the per-round usage
/// percentages. Pure computation, no IO. Bring your own output.
///
/// # Quick start
///
/// ```rust
/// use cupsim_core::{run_simulation, SimConfig};
///
/// let report = run_simulation(SimConfig {
///     ball_count: 1000,
///     max_diameter: 10,
///     seed: Some(7),
/// }).unwrap();
///
/// println!(
///     "{:.4}% used over {} rounds ({} pairs matched)",
///     report.average_usage(),
///     report.rounds,
///     report.matched_pairs.len(),
/// );
/// ```

pub mod constants;
pub mod engine;
pub mod pairing;
pub mod stats;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::{run_simulation, ConfigError, SimConfig, Simulation};
pub use pairing::{
    generate_initial_round, matching_impossible, random_diameter, rematch_round,
};
pub use stats::{mean, usage_percentage};
pub use types::{Diameter, Pair, RoundOutcome, RoundStats, SimulationReport};
