use crate::domain::constants::DEFAULT_TOLERANCE_DEG;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ephem-golden",
    version,
    about = "Validate harmonic longitude manifests against golden data"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Log debug detail to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare every golden row with its manifest and check node opposition.
    Check {
        #[arg(long, env = "EPHEM_GOLDEN", help = "Golden CSV file")]
        golden: PathBuf,
        #[arg(long, env = "EPHEM_MANIFESTS", help = "Directory of manifest JSON files")]
        manifests: PathBuf,
        #[arg(
            long,
            env = "EPHEM_TOL",
            default_value_t = DEFAULT_TOLERANCE_DEG,
            help = "Angular tolerance in degrees"
        )]
        tol: f64,
    },
    /// Print the canonical model a manifest normalizes to.
    Show { manifest: PathBuf },
    /// Evaluate one body on one date.
    Eval {
        #[arg(long, env = "EPHEM_MANIFESTS")]
        manifests: PathBuf,
        #[arg(long)]
        body: String,
        #[arg(long, help = "Target date, YYYY-MM-DD")]
        date: String,
    },
}
