// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{AnalogError, AnalogParams, AnalogScore, get_analog, rank_analogs};
pub use domain::{Signal, Year};
pub use models::{SignalSeries, SignalStore};

use {
    crate::config::ANALOG,
    anyhow::Result,
    clap::{Args, Parser, Subcommand},
    std::path::PathBuf,
};

#[cfg(feature = "backtest")]
use crate::config::BACKTEST;

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root holding oceanic_nino_index/, teleconnections/ and snowfall_data/
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Analog search knobs shared by every subcommand
#[derive(Args, Debug, Clone, Copy)]
pub struct AnalogArgs {
    /// Preceding years concatenated into each comparison window
    #[arg(long, default_value_t = ANALOG.look_back)]
    pub look_back: u32,

    /// Earliest year a candidate may come from (before the look-back shift)
    #[arg(long, default_value_t = ANALOG.start_year)]
    pub start_year: Year,

    /// Power applied to each per-period difference
    #[arg(long, default_value_t = ANALOG.distance_exponent)]
    pub exponent: f64,

    /// Number of analog years to use
    #[arg(long, default_value_t = ANALOG.count)]
    pub count: usize,
}

impl From<AnalogArgs> for AnalogParams {
    fn from(args: AnalogArgs) -> Self {
        Self {
            look_back: args.look_back,
            start_year: args.start_year,
            distance_exponent: args.exponent,
            count: args.count,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the historical years most similar to a winter
    Analogs {
        /// Year the winter starts in (2022 = 2022-23)
        #[arg(long)]
        year: Year,
        #[command(flatten)]
        analog: AnalogArgs,
    },
    /// Predict a winter's snowfall at an airport from its analogs
    Predict {
        #[arg(long)]
        year: Year,
        /// Airport code, e.g. IAD
        #[arg(long)]
        airport: String,
        #[command(flatten)]
        analog: AnalogArgs,
    },
    /// Back-test predictions against recorded snowfall
    #[cfg(feature = "backtest")]
    Accuracy {
        #[arg(long)]
        airport: String,
        /// First winter to score
        #[arg(long, default_value_t = BACKTEST.first_year)]
        from: Year,
        /// Stop before this winter
        #[arg(long, default_value_t = BACKTEST.end_year)]
        to: Year,
        #[command(flatten)]
        analog: AnalogArgs,
        /// Print the report as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Loads the datasets the command needs and prints its result.
/// This is the public API for the binary to call
pub fn run(cli: Cli) -> Result<()> {
    let store = data::load_signal_store(&cli.data_dir)?;

    match cli.command {
        Command::Analogs { year, analog } => {
            let params = AnalogParams::from(analog);
            let ranking = rank_analogs(&store, year, &params)?;
            let top = &ranking[..params.count.min(ranking.len())];
            println!("{}", report::format_analogs(year, top));
        }
        Command::Predict {
            year,
            airport,
            analog,
        } => {
            let snowfall = data::load_snowfall(&cli.data_dir, &airport)?;
            let prediction =
                engine::predict(&store, &snowfall, &airport, year, &AnalogParams::from(analog))?;
            println!("{}", report::format_analog_data(&prediction, year));
        }
        #[cfg(feature = "backtest")]
        Command::Accuracy {
            airport,
            from,
            to,
            analog,
            json,
        } => {
            let snowfall = data::load_snowfall(&cli.data_dir, &airport)?;
            let config = engine::BacktestConfig {
                first_year: from,
                end_year: to,
                analog: AnalogParams::from(analog),
            };
            let accuracy = engine::check_accuracy(&store, &snowfall, &airport, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&accuracy)?);
            } else {
                println!("{}", report::format_accuracy(&accuracy));
            }
        }
    }

    Ok(())
}
