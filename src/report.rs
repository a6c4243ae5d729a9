//! Renders a [`SimulationResult`] for a terminal, a spreadsheet or a visualizer.

use std::io::Write;

use crate::core::SimulationResult;
use crate::utils::{OutputFormat, SchedulingError};
use crate::TimeStep;

pub fn write_report<W: Write>(
    result: &SimulationResult,
    format: OutputFormat,
    writer: W,
) -> Result<(), SchedulingError> {
    match format {
        OutputFormat::Text => write_text(result, writer),
        OutputFormat::Json => write_json(result, writer),
        OutputFormat::Csv => write_csv(result, writer),
    }
}

/// One Gantt line per task: `.` idle, `w` wait, `#` exe, `!` miss.
pub fn write_text<W: Write>(result: &SimulationResult, mut writer: W) -> Result<(), SchedulingError> {
    writeln!(
        writer,
        "{} simulation over [0, {}), utilisation {:.3}",
        result.policy(),
        result.horizon(),
        result.tasks().utilisation()
    )?;
    writeln!(writer, "{:>5} {:>6} {:>6} {:>6} {:>6}  timeline", "task", "C", "T", "D", "offset")?;

    for (task, timeline) in result.tasks().iter().zip(result.timelines()) {
        writeln!(
            writer,
            "{:>5} {:>6} {:>6} {:>6} {:>6}  {}",
            task.id(),
            task.wcet(),
            task.period(),
            task.deadline(),
            task.offset(),
            timeline.to_gantt()
        )?;
    }

    match result.first_miss() {
        None => writeln!(writer, "schedulable: yes")?,
        Some((task, t)) => writeln!(writer, "schedulable: no (task {} misses at t={})", task, t)?,
    }

    Ok(())
}

pub fn write_json<W: Write>(result: &SimulationResult, writer: W) -> Result<(), SchedulingError> {
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}

/// Header `task,0,1,..,H-1` then one row of labels per task.
pub fn write_csv<W: Write>(result: &SimulationResult, writer: W) -> Result<(), SchedulingError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let header = std::iter::once("task".to_string())
        .chain((0..result.horizon()).map(|t| t.to_string()));
    wtr.write_record(header)?;

    for timeline in result.timelines() {
        let row = std::iter::once(timeline.task_id().to_string())
            .chain(timeline.states().iter().map(|s| s.as_str().to_string()));
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Status of every task at instant `t` plus the execution indicator up to `t`.
pub fn write_status_at<W: Write>(
    result: &SimulationResult,
    t: TimeStep,
    mut writer: W,
) -> Result<(), SchedulingError> {
    writeln!(writer, "t = {}", t)?;
    for timeline in result.timelines() {
        writeln!(writer, "  task {}: {}", timeline.task_id(), timeline.status_at(t))?;
    }
    writeln!(writer, "execution indicator: {:.1}%", result.execution_ratio(t))?;
    Ok(())
}
