/// Data model for the simulation: pairs, round partitions, and the report.
///
/// All types are plain data. Serde impls sit behind the optional `serde`
/// feature so downstream tools can serialize reports without the core
/// crate paying for it by default.

/// Diameter of a ball or a cup. Always within the configured closed range.
pub type Diameter = u32;

/// One ball/cup association. Immutable once formed: a pair either matches
/// and leaves play, or stays eligible for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    pub ball: Diameter,
    pub cup: Diameter,
}

impl Pair {
    pub fn new(ball: Diameter, cup: Diameter) -> Self {
        Pair { ball, cup }
    }

    /// The matching predicate. Strict: a ball hides only under a strictly
    /// larger cup, equal diameters never match.
    pub fn is_match(&self) -> bool {
        self.ball < self.cup
    }
}

/// Partition produced by one matching round.
///
/// Conservation invariant: `used_pairs.len() + unused_pairs.len()` equals
/// the number of pairs fed into the round.
#[derive(Debug, Clone, Default)]
pub struct RoundOutcome {
    /// Matched pairs, removed from further play.
    pub used_pairs: Vec<Pair>,
    /// Failed candidates plus recombined leftovers. Always a concrete
    /// collection, empty rather than absent when nothing remains.
    pub unused_pairs: Vec<Pair>,
}

impl RoundOutcome {
    /// Total pairs accounted for by this round.
    pub fn total(&self) -> usize {
        self.used_pairs.len() + self.unused_pairs.len()
    }
}

/// Per-round numbers surfaced while the simulation is running.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundStats {
    /// 1-based round number, the initial generation round included.
    pub round: usize,
    /// Pairs matched in this round.
    pub matched: usize,
    /// Pairs carried over to the next round.
    pub carried: usize,
    /// Share of this round's pairs that matched. `None` when the round had
    /// no pairs at all (a zero-ball configuration).
    pub usage_percentage: Option<f64>,
}

/// Final result of a completed simulation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationReport {
    /// Usage percentage of every round that had pairs, in round order.
    pub round_percentages: Vec<f64>,
    /// All matched pairs accumulated across rounds.
    pub matched_pairs: Vec<Pair>,
    /// Pairs still unmatched when matching became impossible.
    pub leftover_pairs: Vec<Pair>,
    /// Rounds executed.
    pub rounds: usize,
    /// Pair count the simulation started with.
    pub initial_pairs: usize,
}

impl SimulationReport {
    /// Arithmetic mean of the per-round usage percentages. 0.0 when no
    /// round produced a percentage (zero configured balls).
    pub fn average_usage(&self) -> f64 {
        crate::stats::mean(&self.round_percentages).unwrap_or(0.0)
    }
}
