mod config;
mod output;

use clap::Parser;
use cupsim_core::constants::{DEFAULT_BALL_COUNT, DEFAULT_MAX_DIAMETER};
use cupsim_core::{SimConfig, Simulation, SimulationReport};
use std::path::PathBuf;

use crate::output::Verbosity;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "cupsim",
    version,
    about = "Estimate ball/cup matching usage by Monte Carlo simulation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the simulation
    Run(RunArgs),
    /// Create a default config file at ~/.config/cupsim/config.toml
    Init,
}

#[derive(Parser)]
struct RunArgs {
    /// Number of ball/cup pairs in the initial population
    #[arg(long)]
    balls: Option<usize>,

    /// Largest diameter in the uniform [1, N] draw
    #[arg(long)]
    max_diameter: Option<u32>,

    /// Repeat the full simulation this many times and average the estimates
    #[arg(long)]
    trials: Option<usize>,

    /// RNG seed for reproducible runs (trial t runs with seed + t)
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print per-round matched/carried counts and percentages
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print the final estimate
    #[arg(short, long)]
    quiet: bool,

    /// Path to config file (default: ~/.config/cupsim/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default ball count, diameter range, etc.");
        }
    }
}

fn run(args: RunArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let balls = args.balls.or(cfg.balls).unwrap_or(DEFAULT_BALL_COUNT);
    let max_diameter = args
        .max_diameter
        .or(cfg.max_diameter)
        .unwrap_or(DEFAULT_MAX_DIAMETER);
    let trials = args.trials.or(cfg.trials).unwrap_or(1);

    if trials == 0 {
        bail("--trials must be at least 1");
    }

    let verbosity = if args.quiet {
        Verbosity::Quiet
    } else if args.verbose {
        Verbosity::Debug
    } else {
        Verbosity::Info
    };

    if verbosity >= Verbosity::Debug {
        eprintln!(
            "Simulating {} pairs, diameters 1..={}, {} trial(s)",
            balls, max_diameter, trials,
        );
    }

    let mut reports: Vec<SimulationReport> = Vec::with_capacity(trials);

    for trial in 0..trials {
        // Offset the seed per trial so trials stay independent while the
        // whole batch is reproducible from one seed.
        let sim_config = SimConfig {
            ball_count: balls,
            max_diameter,
            seed: args.seed.map(|s| s + trial as u64),
        };
        let mut sim = Simulation::new(sim_config).unwrap_or_else(|e| bail(e));

        if verbosity >= Verbosity::Debug && trials > 1 {
            eprintln!("trial {}/{}", trial + 1, trials);
        }

        while let Some(stats) = sim.step() {
            if verbosity >= Verbosity::Debug {
                match stats.usage_percentage {
                    Some(percentage) => eprintln!(
                        "  round {}: {} matched, {} carried ({:.4}%)",
                        stats.round, stats.matched, stats.carried, percentage,
                    ),
                    None => eprintln!("  round {}: no pairs to match", stats.round),
                }
            }
        }

        if verbosity >= Verbosity::Debug {
            eprintln!(
                "  done: {} matched, {} unmatchable left",
                sim.matched_count(),
                sim.unused_count(),
            );
        }

        reports.push(sim.into_report());
    }

    if args.json {
        output::print_json(&reports, balls, max_diameter);
    } else {
        output::print_text(&reports, verbosity);
    }
}
