//! CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling disciplines over a fixed
//! batch of processes and reports per-process timing metrics plus the
//! execution timeline (Gantt chart) of each run.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `ScheduleRow`,
//!   `ScheduleReport`
//! - **`workload`**: Validated process batches, CSV loading, random generation
//! - **`validation`**: Input integrity checks (duplicate IDs, bad fields)
//! - **`dispatching`**: Ordering rules, rule engine, ready queue
//! - **`scheduler`**: FCFS, SJF, priority and round-robin engines
//! - **`render`**: Text output (title, Gantt bar, schedule table)
//! - **`config`**: Command-line configuration
//! - **`error`**: Crate error type
//! - **`telemetry`**: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use cpu_schedule::scheduler::{default_engines, run_all};
//! use cpu_schedule::Workload;
//!
//! let workload = Workload::parse_csv("1,5,0\n2,3,0\n3,2,0\n").unwrap();
//! let reports = run_all(&workload, &default_engines());
//!
//! assert_eq!(reports.len(), 4);
//! assert_eq!(reports[0].summary.last_completion, 10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
pub use workload::Workload;
