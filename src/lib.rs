pub mod config;
pub mod error;
pub mod extract;
pub mod level;
pub mod load;
pub mod stimulus;
pub mod verify;

use config::Config;
use error::*;
use verify::Mismatch;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Check a simulated ripple-carry adder against its truth table.
#[derive(Parser)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify an adder simulation trace
    Check {
        /// Trace table with a header line, a time column and one column per pin
        trace: PathBuf,
    },

    /// Write a piecewise-linear stimulus file
    Pwl {
        /// Output file
        output: PathBuf,

        /// Initial voltage in volts
        #[clap(long, default_value_t = 0.0)]
        v1: f64,

        /// Peak voltage in volts
        #[clap(long, default_value_t = 5.0)]
        v2: f64,

        /// Delay before the first pulse in seconds
        #[clap(long, default_value_t = 100e-9)]
        delay: f64,

        /// Rise time in seconds
        #[clap(long, default_value_t = 20e-9)]
        rise_time: f64,

        /// Fall time in seconds
        #[clap(long, default_value_t = 20e-9)]
        fall_time: f64,

        /// Time at the peak level in seconds
        #[clap(long, default_value_t = 230e-9)]
        pulse_width: f64,

        /// Pulse period in seconds
        #[clap(long, default_value_t = 500e-9)]
        period: f64,

        /// Number of pulse cycles
        #[clap(long, default_value_t = 5)]
        cycles: usize,
    },
}

/// Load a trace, extract all pins and verify the sweep.
///
/// Extraction errors abort before verification; the returned findings
/// are complete for the whole sweep.
pub fn check(config: &Config, path: impl AsRef<Path>) -> Result<Vec<Mismatch>> {
    let trace = load::read_trace(path, config.columns())?;
    let bundle = extract::extract_all(config, &trace)?;

    Ok(verify::verify(config, &bundle))
}
