use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use earth_grounding::electrodes::{ElectrodeConfiguration, ElectrodeKind, ElectrodeParameters};
use earth_grounding::errors::DomainError;

#[derive(Parser, Debug)]
#[command(
    name = "grounding",
    version,
    about = "Earth-grounding electrode resistance calculator"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Engine configuration file (JSON)")]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the resistance of one electrode
    Calc {
        #[command(flatten)]
        electrode: ElectrodeArgs,
        #[arg(long, help = "Soil resistivity (ohm-metres)")]
        rho: Option<f64>,
        #[arg(long, conflicts_with_all = ["kind", "rho"], help = "Read the design from a JSON file")]
        input: Option<PathBuf>,
        #[arg(long, help = "Design target in ohms for rod-count advice")]
        target: Option<f64>,
    },
    /// Vary one parameter and print resistance as CSV
    Sweep {
        #[command(flatten)]
        electrode: ElectrodeArgs,
        #[arg(long, help = "Soil resistivity (ohm-metres)")]
        rho: Option<f64>,
        #[arg(long, help = "resistivity, length, diameter, depth, area, spacing or total-length")]
        parameter: String,
        #[arg(long, help = "First value (defaults to 10 for resistivity)")]
        start: Option<f64>,
        #[arg(long, help = "Last value (defaults to 10000 for resistivity)")]
        stop: Option<f64>,
        #[arg(long, default_value_t = 50)]
        points: usize,
        #[arg(long, default_value_t = false, help = "Logarithmic spacing")]
        log: bool,
    },
    /// Compare the electrode across typical soil types
    Compare {
        #[command(flatten)]
        electrode: ElectrodeArgs,
        #[arg(long, help = "Add a row for this resistivity (ohm-metres)")]
        rho: Option<f64>,
        #[arg(long, help = "Print the comparison as CSV")]
        csv: bool,
    },
    /// Print a sample design file
    Example,
}

#[derive(Args, Debug, Default)]
pub struct ElectrodeArgs {
    #[arg(long, help = "1-4 or single-rod, rod-array, buried-conductor, ground-grid")]
    pub kind: Option<String>,
    #[arg(long, help = "Rod or conductor length (m)")]
    pub length: Option<f64>,
    #[arg(long, help = "Rod or conductor diameter (m)")]
    pub diameter: Option<f64>,
    #[arg(long, help = "Number of rods")]
    pub count: Option<u32>,
    #[arg(long, help = "Rod spacing (m)")]
    pub spacing: Option<f64>,
    #[arg(long, help = "Burial depth (m)")]
    pub depth: Option<f64>,
    #[arg(long, help = "Grid area (m^2)")]
    pub area: Option<f64>,
    #[arg(long, help = "Total grid conductor length (m)")]
    pub total_length: Option<f64>,
}

impl ElectrodeArgs {
    pub fn resolve(&self) -> Result<ElectrodeConfiguration, DomainError> {
        let kind: ElectrodeKind = self
            .kind
            .as_deref()
            .ok_or(DomainError::MissingParameter("kind"))?
            .parse()?;
        let params = ElectrodeParameters {
            length: self.length,
            diameter: self.diameter,
            count: self.count,
            spacing: self.spacing,
            depth: self.depth,
            area: self.area,
            total_length: self.total_length,
        };
        ElectrodeConfiguration::from_parameters(kind, &params)
    }
}
