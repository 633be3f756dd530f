/*!
 * Scheduling Lab - Command Line Entry Point
 *
 * Usage: sched-lab <workload.json> [--json]
 *
 * Reads one workload file, runs it and prints a text report, or the raw
 * outcome as pretty JSON with `--json`.
 */

use miette::{IntoDiagnostic, Result};
use sched_lab::{init_tracing, SimError, Simulator, SimulatorConfig, TextReport, Workload};
use tracing::info;

const USAGE: &str = "usage: sched-lab <workload.json> [--json]";

fn main() -> Result<()> {
    init_tracing();

    let mut path = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if path.is_none() => path = Some(arg),
            _ => return Err(SimError::Configuration(format!("unexpected argument '{}'", arg)).into()),
        }
    }
    let path = path.ok_or_else(|| SimError::Configuration(USAGE.to_string()))?;

    let config = SimulatorConfig::from_env()?;
    info!(?config, path = %path, "Starting run");

    let workload = Workload::from_path(&path)?;
    let outcome = workload.execute(&Simulator::new(config))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome).into_diagnostic()?);
    } else {
        print!("{}", TextReport(&outcome));
    }

    Ok(())
}
