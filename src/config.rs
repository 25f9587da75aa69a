//! Run configuration parsed from command-line arguments.
//!
//! ```text
//! cpu-schedule [OPTIONS] <workload.csv>
//!
//!   --quantum <n>              round-robin quantum (default 2)
//!   --response <final|first>   round-robin response-time definition
//!   --format <text|json>       output format (default text)
//!   --only <engine>            fcfs, sjf, priority or rr; repeatable
//! ```

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::scheduler::{EngineKind, ResponseTime, RoundRobin, Scheduler, DEFAULT_QUANTUM};

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "\
usage: cpu-schedule [OPTIONS] <workload.csv>

Simulates FCFS, SJF, priority and round-robin scheduling over a CSV
workload (id, burst, arrival[, priority] per line).

options:
  --quantum <n>              round-robin time quantum (default 2)
  --response <final|first>   round-robin response time: start of the
                             completing slice (final) or of the first slice
  --format <text|json>       output format (default text)
  --only <engine>            run only fcfs, sjf, priority or rr (repeatable)
  -h, --help                 print this help
";

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Gantt chart and tables.
    #[default]
    Text,
    /// JSON array of reports.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::invalid_args(format!("unknown format '{other}'"))),
        }
    }
}

impl FromStr for ResponseTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "final" => Ok(Self::FinalDispatch),
            "first" => Ok(Self::FirstDispatch),
            other => Err(Error::invalid_args(format!(
                "unknown response-time definition '{other}'"
            ))),
        }
    }
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print usage and exit.
    Help,
    /// Simulate a workload.
    Run(RunConfig),
}

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Workload CSV file.
    pub workload_path: PathBuf,
    /// Round-robin quantum.
    pub quantum: NonZeroU32,
    /// Round-robin response-time definition.
    pub response: ResponseTime,
    /// Output format.
    pub format: OutputFormat,
    /// Engines to run, in order.
    pub engines: Vec<EngineKind>,
}

impl RunConfig {
    /// Creates a config for `workload_path` with all defaults.
    pub fn new(workload_path: impl Into<PathBuf>) -> Self {
        Self {
            workload_path: workload_path.into(),
            quantum: NonZeroU32::new(DEFAULT_QUANTUM).unwrap_or(NonZeroU32::MIN),
            response: ResponseTime::default(),
            format: OutputFormat::default(),
            engines: EngineKind::ALL.to_vec(),
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the round-robin response-time definition.
    pub fn with_response(mut self, response: ResponseTime) -> Self {
        self.response = response;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Restricts the run to the given engines.
    pub fn with_engines(mut self, engines: Vec<EngineKind>) -> Self {
        self.engines = engines;
        self
    }

    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    /// [`Error::InvalidArgs`] when no workload is given, an option is
    /// unknown, or an option value is missing or invalid.
    pub fn from_args<I, S>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let mut path: Option<String> = None;
        let mut quantum = None;
        let mut response = ResponseTime::default();
        let mut format = OutputFormat::default();
        let mut engines = Vec::new();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| Error::invalid_args(format!("{flag} requires a value")))
            };

            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--quantum" => {
                    let raw = value("--quantum")?;
                    let q = raw.parse::<NonZeroU32>().map_err(|_| {
                        Error::invalid_args(format!("quantum must be a positive integer, got '{raw}'"))
                    })?;
                    quantum = Some(q);
                }
                "--response" => response = value("--response")?.parse()?,
                "--format" => format = value("--format")?.parse()?,
                "--only" => {
                    let kind: EngineKind = value("--only")?.parse()?;
                    if !engines.contains(&kind) {
                        engines.push(kind);
                    }
                }
                flag if flag.starts_with('-') => {
                    return Err(Error::invalid_args(format!("unknown option '{flag}'")));
                }
                file => {
                    if path.is_some() {
                        return Err(Error::invalid_args("only one workload file may be given"));
                    }
                    path = Some(file.to_string());
                }
            }
        }

        let path = path
            .ok_or_else(|| Error::invalid_args("must give a scheduling file to process"))?;

        let mut config = RunConfig::new(path)
            .with_response(response)
            .with_format(format);
        if let Some(q) = quantum {
            config = config.with_quantum(q);
        }
        if !engines.is_empty() {
            config = config.with_engines(engines);
        }
        Ok(Command::Run(config))
    }

    /// Round-robin engine configured from these settings.
    pub fn round_robin(&self) -> RoundRobin {
        RoundRobin::new()
            .with_quantum(self.quantum)
            .with_response_time(self.response)
    }

    /// Instantiates the selected engines, in order.
    pub fn build_engines(&self) -> Vec<Box<dyn Scheduler>> {
        let rr = self.round_robin();
        self.engines.iter().map(|kind| kind.build(&rr)).collect()
    }
}
