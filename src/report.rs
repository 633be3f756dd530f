/*!
 * Text Reports
 * Plain-text rendering of timelines, metric tables and verdicts
 */

use crate::banker::{RequestOutcome, SafetyReport};
use crate::core::limits::TASK_LABEL_PREFIX;
use crate::realtime::{RmsReport, RmsVerdict};
use crate::scheduler::{RunReport, Timeline};
use crate::workload::Outcome;
use std::fmt;

/// Display adapter rendering an [`Outcome`] for a terminal
pub struct TextReport<'a>(pub &'a Outcome);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Outcome::Cpu(report) => write_run(f, report),
            Outcome::Compare { reports } => {
                for report in reports {
                    write_run(f, report)?;
                    writeln!(f)?;
                }
                write_comparison(f, reports)
            }
            Outcome::Bankers { safety, request } => {
                write_safety(f, safety)?;
                if let Some(request) = request {
                    write_request(f, request)?;
                }
                Ok(())
            }
            Outcome::RateMonotonic(report) => write_rms(f, report),
        }
    }
}

/// Gantt line: `| P0 0-5 | P1 5-8 |`
pub struct GanttLine<'a>(pub &'a Timeline);

impl fmt::Display for GanttLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(empty)");
        }
        f.write_str("|")?;
        for entry in self.0 {
            write!(f, " {} {}-{} |", entry.slot, entry.start, entry.end)?;
        }
        Ok(())
    }
}

fn write_run(f: &mut fmt::Formatter<'_>, report: &RunReport) -> fmt::Result {
    let mode = if report.policy.is_preemptive() {
        "preemptive"
    } else {
        "non-preemptive"
    };
    write!(f, "== {} ({}", report.policy.display_name(), mode)?;
    if let Some(q) = report.quantum {
        write!(f, ", quantum {}", q)?;
    }
    writeln!(f, ") ==")?;
    writeln!(f, "{}", GanttLine(&report.timeline))?;
    writeln!(f)?;

    writeln!(
        f,
        "{:<8} {:>7} {:>5} {:>8} {:>5} {:>10} {:>10} {:>7} {:>8}",
        "PID", "Arrival", "Burst", "Priority", "Start", "Completion", "Turnaround", "Waiting", "Response"
    )?;
    for m in &report.processes {
        writeln!(
            f,
            "{:<8} {:>7} {:>5} {:>8} {:>5} {:>10} {:>10} {:>7} {:>8}",
            m.pid,
            m.arrival_time,
            m.burst_time,
            m.priority,
            m.start_time,
            m.completion_time,
            m.turnaround_time,
            m.waiting_time,
            m.response_time
        )?;
    }

    let avg = &report.averages;
    writeln!(
        f,
        "Average waiting {:.2}, turnaround {:.2}, response {:.2}",
        avg.waiting, avg.turnaround, avg.response
    )?;
    writeln!(f, "CPU utilization {:.1}%", report.cpu_utilization * 100.0)
}

fn write_comparison(f: &mut fmt::Formatter<'_>, reports: &[RunReport]) -> fmt::Result {
    writeln!(f, "== Comparison ==")?;
    writeln!(
        f,
        "{:<28} {:>8} {:>11} {:>9} {:>9}",
        "Policy", "Waiting", "Turnaround", "Response", "Makespan"
    )?;
    for r in reports {
        writeln!(
            f,
            "{:<28} {:>8.2} {:>11.2} {:>9.2} {:>9}",
            r.policy.display_name(),
            r.averages.waiting,
            r.averages.turnaround,
            r.averages.response,
            r.makespan()
        )?;
    }
    Ok(())
}

fn write_safety(f: &mut fmt::Formatter<'_>, safety: &SafetyReport) -> fmt::Result {
    if safety.safe {
        writeln!(f, "System is in a SAFE state")?;
        writeln!(f, "Safe sequence: {}", safety.labels().join(" -> "))
    } else {
        writeln!(f, "System is NOT in a safe state")
    }
}

fn write_request(f: &mut fmt::Formatter<'_>, request: &RequestOutcome) -> fmt::Result {
    match request {
        RequestOutcome::Granted { sequence, .. } => {
            let safety = SafetyReport {
                safe: true,
                sequence: sequence.clone(),
            };
            writeln!(
                f,
                "Request granted; safe sequence after grant: {}",
                safety.labels().join(" -> ")
            )
        }
        RequestOutcome::MustWait => writeln!(f, "Request must wait: not enough units available"),
        RequestOutcome::Unsafe => writeln!(f, "Request denied: granting it would leave the system unsafe"),
        RequestOutcome::ExceedsClaim => writeln!(f, "Request denied: exceeds the declared maximum claim"),
    }
}

fn write_rms(f: &mut fmt::Formatter<'_>, report: &RmsReport) -> fmt::Result {
    let feasibility = &report.feasibility;
    writeln!(
        f,
        "Utilization {:.3}, bound {:.3} ({} tasks)",
        feasibility.utilization, feasibility.bound, feasibility.task_count
    )?;

    match report.verdict {
        RmsVerdict::BoundExceeded => writeln!(f, "WARNING: {}", report.verdict.message()),
        RmsVerdict::Schedulable => {
            writeln!(f, "{}", report.verdict.message())?;
            if let Some(hyperperiod) = report.hyperperiod {
                writeln!(f, "Hyperperiod: {}", hyperperiod)?;
            }
            writeln!(f, "Total time slots: {}", report.slot_count())?;
            if let Some(timeline) = &report.timeline {
                writeln!(f, "{}", GanttLine(&timeline.coalesced()))?;
            }
            for miss in &report.deadline_misses {
                writeln!(
                    f,
                    "Deadline miss: {}{} at {} ({} units left)",
                    TASK_LABEL_PREFIX, miss.task, miss.at, miss.remaining
                )?;
            }
            Ok(())
        }
    }
}
