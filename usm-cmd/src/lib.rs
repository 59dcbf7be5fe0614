//! Command implementations for the mortality dashboard CLI.
//!
//! Provides subcommands for exporting the full dashboard page and for
//! printing a single ranking table without going through the browser.

use clap::Subcommand;
use std::path::PathBuf;
use usm_nchs::dataset::DatasetPaths;

pub mod generate;
pub mod rank;

#[derive(Subcommand)]
pub enum Command {
    /// Build the dashboard and export it as one self-contained HTML page
    Generate {
        /// Firearm mortality CSV
        #[arg(long, default_value_os_t = DatasetPaths::default().firearm)]
        firearm_csv: PathBuf,

        /// Homicide mortality CSV
        #[arg(long, default_value_os_t = DatasetPaths::default().homicide)]
        homicide_csv: PathBuf,

        /// Drug overdose mortality CSV
        #[arg(long, default_value_os_t = DatasetPaths::default().drug_overdose)]
        overdose_csv: PathBuf,

        /// US state boundary GeoJSON
        #[arg(long, default_value = "us-states.json")]
        boundaries: PathBuf,

        /// Output HTML path
        #[arg(short, long, default_value = "dashboard.html")]
        output: PathBuf,
    },

    /// Print one ranking table to stdout as CSV (Rank,State,Value)
    Rank {
        /// Year to rank
        #[arg(long)]
        year: i32,

        /// Category: firearm | homicide | drug-overdose
        #[arg(long, default_value = "firearm")]
        category: String,

        /// Metric: rate | deaths
        #[arg(long, default_value = "rate")]
        metric: String,

        /// Direction: asc | desc
        #[arg(long, default_value = "desc")]
        sort: String,

        /// Firearm mortality CSV
        #[arg(long, default_value_os_t = DatasetPaths::default().firearm)]
        firearm_csv: PathBuf,

        /// Homicide mortality CSV
        #[arg(long, default_value_os_t = DatasetPaths::default().homicide)]
        homicide_csv: PathBuf,

        /// Drug overdose mortality CSV
        #[arg(long, default_value_os_t = DatasetPaths::default().drug_overdose)]
        overdose_csv: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Generate {
            firearm_csv,
            homicide_csv,
            overdose_csv,
            boundaries,
            output,
        } => {
            let paths = DatasetPaths {
                firearm: firearm_csv,
                homicide: homicide_csv,
                drug_overdose: overdose_csv,
            };
            generate::run_generate(&paths, &boundaries, &output)
        }
        Command::Rank {
            year,
            category,
            metric,
            sort,
            firearm_csv,
            homicide_csv,
            overdose_csv,
        } => {
            let paths = DatasetPaths {
                firearm: firearm_csv,
                homicide: homicide_csv,
                drug_overdose: overdose_csv,
            };
            rank::run_rank(year, &category, &metric, &sort, &paths)
        }
    }
}
