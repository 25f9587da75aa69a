//! Text rendering of schedule reports.
//!
//! Produces the title banner, the Gantt bar and the schedule table for
//! one [`ScheduleReport`]. Rendering never fails except on I/O.

use std::io::{self, Write};

use crate::models::{ScheduleReport, Timeline};

/// Writes the full report: title, Gantt chart and table.
pub fn render_report<W: Write>(w: &mut W, report: &ScheduleReport) -> io::Result<()> {
    render_title(w, &report.title)?;
    render_gantt(w, &report.timeline)?;
    render_table(w, report)
}

/// Writes a title between two dash rules twice its length.
pub fn render_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt bar followed by the dispatch start times and the
/// final stop time.
pub fn render_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for entry in timeline.iter() {
        let pid = entry.process_id.to_string();
        let padding = " ".repeat(8usize.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    for entry in timeline.iter() {
        write!(w, "{}\t", entry.start)?;
    }
    if let Some(stop) = timeline.last_stop() {
        write!(w, "{stop}")?;
    }
    write!(w, "\n\n")
}

/// Writes the per-process table with averages in the footer.
pub fn render_table<W: Write>(w: &mut W, report: &ScheduleReport) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let with_response = report.rows.iter().any(|r| r.response.is_some());
    let mut header = vec!["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];
    if with_response {
        header.push("Response");
    }

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            let mut cells = vec![
                r.id.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival.to_string(),
                r.wait.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ];
            if with_response {
                cells.push(r.response.map(|v| v.to_string()).unwrap_or_default());
            }
            cells
        })
        .collect();

    let summary = &report.summary;
    let mut labels = vec!["", "", "", "", "Average", "Average", "Throughput"];
    let mut values = vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.2}", summary.average_wait),
        format!("{:.2}", summary.average_turnaround),
        format!("{:.2}/t", summary.throughput),
    ];
    if with_response {
        labels.push("Average");
        values.push(
            summary
                .average_response
                .map(|v| format!("{v:.2}"))
                .unwrap_or_default(),
        );
    }
    let labels: Vec<String> = labels.into_iter().map(String::from).collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .chain([&labels, &values])
                .map(|row| row[col].len())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{border}+");

    let line = |cells: &[String]| -> String {
        let inner = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!(" {cell:>width$} "))
            .collect::<Vec<_>>()
            .join("|");
        format!("|{inner}|")
    };

    let header: Vec<String> = header.into_iter().map(String::from).collect();
    writeln!(w, "{border}")?;
    writeln!(w, "{}", line(&header))?;
    writeln!(w, "{border}")?;
    for row in &rows {
        writeln!(w, "{}", line(row))?;
    }
    writeln!(w, "{border}")?;
    writeln!(w, "{}", line(&labels))?;
    writeln!(w, "{}", line(&values))?;
    writeln!(w, "{border}")?;
    writeln!(w)
}
