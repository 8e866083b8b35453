use anyhow::{Context, Result};
use clap::Parser;
use earth_grounding::prelude::*;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Calc {
            electrode,
            rho,
            input,
            target,
        } => {
            let design = match input {
                Some(path) => GroundingDesign::load(&path)
                    .with_context(|| format!("failed to load design {}", path.display()))?,
                None => {
                    let rho = rho.ok_or(DomainError::MissingParameter("rho"))?;
                    GroundingDesign::new(electrode.resolve()?, SoilResistivity::new(rho)?)
                }
            };
            let config = match target {
                Some(ohms) => {
                    let config = config.with_target_resistance(ohms);
                    config.validate()?;
                    config
                }
                None => config,
            };
            let engine = GroundingEngine::new(config);
            let report = Report::new(&engine, design.evaluate(&engine)?)?;
            if cli.json {
                println!("{}", report.to_json()?);
            } else {
                print!("{report}");
            }
        }
        Commands::Sweep {
            electrode,
            rho,
            parameter,
            start,
            stop,
            points,
            log,
        } => {
            let parameter: SweepParameter = parameter.parse()?;
            let (start, stop) = match (start, stop, parameter.default_range()) {
                (Some(start), Some(stop), _) => (start, stop),
                (start, stop, Some((low, high))) => (start.unwrap_or(low), stop.unwrap_or(high)),
                (None, _, None) => return Err(DomainError::MissingParameter("start").into()),
                (_, None, None) => return Err(DomainError::MissingParameter("stop").into()),
            };
            let electrode = electrode.resolve()?;
            let rho = match (rho, parameter) {
                (Some(value), _) => SoilResistivity::new(value)?,
                (None, SweepParameter::Resistivity) => SoilResistivity::new(start)?,
                (None, _) => return Err(DomainError::MissingParameter("rho").into()),
            };
            let values = if log {
                logspace(start, stop, points)?
            } else {
                linspace(start, stop, points)
            };
            let engine = GroundingEngine::new(config);
            let samples = engine.sweep(&electrode, rho, parameter, values)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&samples)?);
            } else {
                write_sweep_csv(std::io::stdout().lock(), parameter, &samples)?;
            }
        }
        Commands::Compare { electrode, rho, csv } => {
            let electrode = electrode.resolve()?;
            let engine = GroundingEngine::new(config);
            let mut rows = engine.compare_soils(&electrode)?;
            if let Some(value) = rho {
                let resistivity = SoilResistivity::new(value)?;
                rows.push(SoilComparison {
                    soil: resistivity.kind(),
                    resistivity,
                    resistance: engine.compute(&electrode, resistivity)?.resistance,
                });
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if csv {
                write_comparison_csv(std::io::stdout().lock(), &rows)?;
            } else {
                println!("{:<10}  {:>12}  {:>12}", "soil", "resistivity", "resistance");
                for row in &rows {
                    println!(
                        "{:<10}  {:>12}  {:>12}",
                        row.soil.to_string(),
                        row.resistivity.to_string(),
                        format!("{:.1}", Resistance::new(row.resistance))
                    );
                }
            }
        }
        Commands::Example => {
            let design = GroundingDesign::new(
                RodArray::new(4, STANDARD_ROD_LENGTH, STANDARD_ROD_DIAMETER, 3.0)?.into(),
                SoilResistivity::new(100.0)?,
            );
            println!("{}", design.to_json()?);
        }
    }
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
