//! Command-line front end for the race driver.
//!
//! Flags override values read from `--config`; anything left unset falls back
//! to [`RaceConfig::default`].

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::error::Result;
use crate::race;
use crate::race::config::RaceConfig;
use crate::race::report;

#[derive(Parser, Debug, Default)]
#[command(name = "ps-wheelsieve", version, about = "Wheel-6 bit-packed prime sieve race")]
pub struct Args {
    /// Upper limit for calculating prime numbers
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Time limit in seconds
    #[arg(short, long)]
    pub time: Option<f64>,

    /// Print found prime numbers
    #[arg(short, long)]
    pub show: bool,

    /// Implementation tag for the drag-race line
    #[arg(long)]
    pub tag: Option<String>,

    /// Seconds to idle before timing starts
    #[arg(long)]
    pub settle: Option<f64>,

    /// TOML file with race settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> Result<RaceConfig> {
        let mut config = match &self.config {
            Some(path) => RaceConfig::load(path)?,
            None => RaceConfig::default(),
        };

        if let Some(limit) = self.limit {
            config.limit = limit;
        }

        if let Some(time) = self.time {
            config.time = time;
        }

        if let Some(tag) = self.tag {
            config.tag = tag;
        }

        if let Some(settle) = self.settle {
            config.settle = settle;
        }

        config.show |= self.show;

        Ok(config)
    }
}

/// Races with the merged configuration and renders the report.
pub fn execute(args: Args) -> Result<String> {
    let config = args.into_config()?;
    let outcome = race::run(&config)?;

    Ok(report::render(&outcome, &config.tag, config.show))
}

pub fn run() -> ExitCode {
    match execute(Args::parse()) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "race failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
