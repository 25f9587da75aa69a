//! Scheduling domain models.
//!
//! Provides the data types shared by every engine: the input process
//! record, the execution timeline, and the per-run report.
//!
//! # Terminology
//!
//! | Type | Meaning |
//! |------|---------|
//! | Process | One unit of CPU work (id, arrival, burst, priority) |
//! | TimelineEntry | A contiguous interval one process held the CPU |
//! | ScheduleRow | Wait/turnaround/completion of one finished process |
//! | ScheduleReport | Title + timeline + rows + summary of one run |

mod process;
mod report;
mod timeline;

pub use process::Process;
pub use report::{RunSummary, ScheduleReport, ScheduleRow};
pub use timeline::{Timeline, TimelineEntry};
