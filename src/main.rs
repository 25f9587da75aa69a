//! `cpu-schedule` command-line driver.
//!
//! Loads a CSV workload, runs the selected engines in sequence and prints
//! each report.

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info};

use cpu_schedule::config::{Command, OutputFormat, RunConfig, USAGE};
use cpu_schedule::render::render_report;
use cpu_schedule::scheduler::run_all;
use cpu_schedule::telemetry::init_tracing;
use cpu_schedule::Workload;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("error: {e}");
            if matches!(
                e.downcast_ref::<cpu_schedule::Error>(),
                Some(cpu_schedule::Error::InvalidArgs(_))
            ) {
                eprintln!();
                eprint!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match RunConfig::from_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::Run(config) => config,
    };

    let workload = Workload::from_path(&config.workload_path)?;
    info!(
        path = %config.workload_path.display(),
        processes = workload.len(),
        "workload loaded"
    );

    let reports = run_all(&workload, &config.build_engines());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => {
            for report in &reports {
                render_report(&mut out, report)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &reports)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
