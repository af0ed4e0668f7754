//! Evocycle CLI - run evolution cycles from the command line.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use evocycle_core::{CycleRecord, CycleType, StrategyKind};
use evocycle_evolution::{CycleRequest, EngineConfig, EvolutionEngine, MetricsSnapshot};
use evocycle_execution::templates_for;
use evocycle_registry::StrategyRegistries;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "evocycle")]
#[command(about = "Evolution cycle orchestration engine", long_about = None)]
struct Cli {
    /// JSON engine config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible cycles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pause between phases in milliseconds
    #[arg(long, global = true)]
    pause_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more evolution cycles
    Run {
        /// Cycle type
        #[arg(long = "type")]
        cycle_type: Option<String>,
        /// Cycle duration in seconds
        #[arg(long)]
        duration: Option<f64>,
        /// Number of cycles to run
        #[arg(long, default_value = "1")]
        count: usize,
        /// Starting consciousness level
        #[arg(long)]
        base_consciousness: Option<f64>,
        /// Print cycles and metrics as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered strategies
    Strategies,
    /// Show the phase plan of each cycle type
    Templates {
        /// Cycle duration in seconds
        #[arg(long, default_value = "30")]
        duration: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Run { cycle_type, duration, count, base_consciousness, json } => {
            let engine = EvolutionEngine::new(config.clone());
            engine.initialize().await;

            let mut cycles = Vec::with_capacity(count);
            for _ in 0..count {
                let mut request = CycleRequest::new(
                    cycle_type.clone().unwrap_or_else(|| config.default_cycle_type.clone()),
                    duration.unwrap_or(config.default_duration_secs),
                );
                if let Some(level) = base_consciousness {
                    request = request.with_base_consciousness(level);
                }
                let cycle = engine.run_cycle(request).await?;
                if !json {
                    print_cycle(&cycle);
                }
                cycles.push(cycle);
            }

            let metrics = engine.get_metrics().await?;
            if json {
                let output = serde_json::json!({ "cycles": cycles, "metrics": metrics });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_metrics(&metrics);
            }
            info!("Completed {} cycles", cycles.len());
        }
        Commands::Strategies => {
            let registries = StrategyRegistries::configured();
            for kind in StrategyKind::ALL {
                let names = registries.names(kind);
                println!("{} ({})", kind, names.len());
                for name in names {
                    println!("  {}", name);
                }
            }
        }
        Commands::Templates { duration } => {
            if !duration.is_finite() || duration <= 0.0 {
                bail!("duration must be positive, got {}", duration);
            }
            for ty in CycleType::ALL {
                println!("{}", ty);
                for template in templates_for(ty) {
                    println!(
                        "  {:<28} {:>8.2}s  {}",
                        template.name,
                        duration * template.fraction,
                        template.focus,
                    );
                }
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = cli.pause_ms {
        config = config.with_phase_pause_ms(ms);
    }
    Ok(config)
}

fn print_cycle(cycle: &CycleRecord) {
    println!("Cycle: {} ({})", cycle.id, cycle.cycle_type);
    for phase in &cycle.phases {
        println!(
            "  {} | {:<28} | {:>7.2}s | effectiveness {:.3}",
            phase.id,
            phase.name,
            phase.planned_duration_secs,
            phase.effectiveness().unwrap_or_default(),
        );
    }
    println!("  Mutations: {}", cycle.mutations.len());
    println!("  Adaptations: {}", cycle.adaptations.len());
    println!("  Transformations: {}", cycle.transformations.len());
    println!("  Evolutions: {}", cycle.evolutions.len());
    println!("  Fitness: {:.3}", cycle.fitness);
    println!("  Complexity: {:.2}", cycle.complexity);
    println!("  Consciousness: {:.2}", cycle.consciousness);
}

fn print_metrics(metrics: &MetricsSnapshot) {
    let summary = &metrics.running_summary;
    println!("Evocycle Metrics");
    println!("  Cycles: {}", metrics.cycle_count);
    println!("  Strategies: {}", metrics.registry_sizes.total());
    println!("  Total mutations: {}", summary.total_mutations);
    println!("  Total adaptations: {}", summary.total_adaptations);
    println!("  Total transformations: {}", summary.total_transformations);
    println!("  Total evolutions: {}", summary.total_evolutions);
    if let Some(at) = metrics.last_activity {
        println!("  Last activity: {}", at);
    }
}
