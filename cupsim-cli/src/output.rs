/// Output formatting: terminal text and JSON.
use cupsim_core::{mean, SimulationReport};
use serde::Serialize;

/// How much the run prints while working. Levels are ordered, so
/// comparisons gate the optional streams: `Quiet < Info < Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Info,
    Debug,
}

#[derive(Serialize)]
struct JsonTrial {
    trial: usize,
    average_usage_percentage: f64,
    rounds: usize,
    matched_pairs: usize,
    round_percentages: Vec<f64>,
}

#[derive(Serialize)]
struct JsonOutput {
    average_usage_percentage: f64,
    balls: usize,
    max_diameter: u32,
    trials: Vec<JsonTrial>,
}

/// Mean of the per-trial estimates. 0.0 with no trials (unreachable from
/// the CLI, which rejects --trials 0).
fn overall_average(reports: &[SimulationReport]) -> f64 {
    let averages: Vec<f64> = reports.iter().map(|r| r.average_usage()).collect();
    mean(&averages).unwrap_or(0.0)
}

/// Print results as plain text. Quiet mode emits the bare number only.
pub fn print_text(reports: &[SimulationReport], verbosity: Verbosity) {
    let overall = overall_average(reports);

    if verbosity == Verbosity::Quiet {
        println!("{overall:.4}");
        return;
    }

    if let [report] = reports {
        println!(
            "Average ball/cup usage: {:.4}% ({} pairs, {} rounds, {} matched)",
            overall,
            report.initial_pairs,
            report.rounds,
            report.matched_pairs.len(),
        );
        return;
    }

    for (i, report) in reports.iter().enumerate() {
        println!(
            "trial {:>2}: {:.4}% ({} rounds, {} matched)",
            i + 1,
            report.average_usage(),
            report.rounds,
            report.matched_pairs.len(),
        );
    }

    let averages: Vec<f64> = reports.iter().map(|r| r.average_usage()).collect();
    let min = averages.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = averages.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!(
        "\nAverage ball/cup usage over {} trials: {:.4}% (min {:.4}%, max {:.4}%)",
        reports.len(),
        overall,
        min,
        max,
    );
}

/// Print results as JSON.
pub fn print_json(reports: &[SimulationReport], balls: usize, max_diameter: u32) {
    let trials: Vec<JsonTrial> = reports
        .iter()
        .enumerate()
        .map(|(i, report)| JsonTrial {
            trial: i + 1,
            average_usage_percentage: report.average_usage(),
            rounds: report.rounds,
            matched_pairs: report.matched_pairs.len(),
            round_percentages: report.round_percentages.clone(),
        })
        .collect();

    let output = JsonOutput {
        average_usage_percentage: overall_average(reports),
        balls,
        max_diameter,
        trials,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(percentages: Vec<f64>) -> SimulationReport {
        SimulationReport {
            round_percentages: percentages,
            matched_pairs: Vec::new(),
            leftover_pairs: Vec::new(),
            rounds: 0,
            initial_pairs: 0,
        }
    }

    #[test]
    fn test_verbosity_levels_are_ordered() {
        assert!(Verbosity::Quiet < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
    }

    #[test]
    fn test_overall_average_spans_trials() {
        let reports = vec![report(vec![2.0]), report(vec![4.0])];
        assert!((overall_average(&reports) - 3.0).abs() < 1e-10);
    }
}
