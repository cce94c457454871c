use addercheck::{check, config::Config, stimulus, Command, Opts};

use anyhow::{bail, Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    let opts = Opts::parse();
    let config = Config::default();

    match opts.command {
        Command::Check { trace } => {
            let findings = check(&config, &trace)
                .with_context(|| format!("Failed to check trace '{}'", trace.display()))?;

            for finding in &findings {
                println!("{}", finding);
            }

            if findings.is_empty() {
                println!("All {} rows verified.", config.cnt());
            } else {
                bail!("Verification failed with {} mismatches", findings.len());
            }
        }

        Command::Pwl {
            output,
            v1,
            v2,
            delay,
            rise_time,
            fall_time,
            pulse_width,
            period,
            cycles,
        } => {
            let params = stimulus::PulseParams {
                v1,
                v2,
                delay,
                rise_time,
                fall_time,
                pulse_width,
                period,
            };

            stimulus::write_pwl_file(&output, &params, cycles)
                .with_context(|| format!("Failed to write '{}'", output.display()))?;

            println!("Wrote {} cycles to '{}'.", cycles, output.display());
        }
    }

    Ok(())
}
