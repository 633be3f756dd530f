/*!
 * Workload Tests
 * Loading workload files from disk and executing them end to end
 */

use pretty_assertions::assert_eq;
use sched_lab::{Outcome, SimError, Simulator, TextReport, ValidationError, Workload};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_workload(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_cpu_workload_from_file() {
    let file = write_workload(
        r#"{
            "kind": "cpu",
            "policy": "fcfs",
            "processes": [
                { "pid": "P0", "arrival_time": 0, "burst_time": 5 },
                { "pid": "P1", "arrival_time": 1, "burst_time": 3 }
            ]
        }"#,
    );

    let workload = Workload::from_path(file.path()).unwrap();
    let outcome = workload.execute(&Simulator::default()).unwrap();

    let Outcome::Cpu(report) = &outcome else {
        panic!("expected cpu outcome, got {:?}", outcome);
    };
    assert_eq!(report.processes[1].waiting_time, 4);

    let text = TextReport(&outcome).to_string();
    assert!(text.contains("| P0 0-5 | P1 5-8 |"));
    assert!(text.contains("Average waiting 2.00"));
}

#[test]
fn test_compare_workload() {
    let file = write_workload(
        r#"{
            "kind": "compare",
            "quantum": 3,
            "processes": [
                { "pid": "A", "arrival_time": 0, "burst_time": 4, "priority": 1 },
                { "pid": "B", "arrival_time": 2, "burst_time": 2, "priority": 0 }
            ]
        }"#,
    );

    let outcome = Workload::from_path(file.path())
        .unwrap()
        .execute(&Simulator::default())
        .unwrap();
    let Outcome::Compare { reports } = outcome else {
        panic!("expected comparison");
    };
    assert_eq!(reports.len(), 6);
    assert!(reports.iter().all(|r| r.makespan() == 6));
}

#[test]
fn test_bankers_workload_json_output() {
    let file = write_workload(
        r#"{
            "kind": "bankers",
            "available": [3, 3, 2],
            "max": [[7,5,3],[3,2,2],[9,0,2],[2,2,2],[4,3,3]],
            "allocation": [[0,1,0],[2,0,0],[3,0,2],[2,1,1],[0,0,2]],
            "request": { "process": 1, "units": [1, 0, 2] }
        }"#,
    );

    let outcome = Workload::from_path(file.path())
        .unwrap()
        .execute(&Simulator::default())
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["kind"], "bankers");
    assert_eq!(json["safety"]["safe"], true);
    assert_eq!(json["safety"]["sequence"], serde_json::json!([1, 3, 4, 0, 2]));
    assert_eq!(json["request"]["outcome"], "granted");
}

#[test]
fn test_invalid_process_reported_as_validation_error() {
    let file = write_workload(
        r#"{ "kind": "cpu", "policy": "sjf",
             "processes": [{ "pid": "P0", "arrival_time": -1, "burst_time": 2 }] }"#,
    );

    let err = Workload::from_path(file.path())
        .unwrap()
        .execute(&Simulator::default())
        .unwrap_err();
    assert!(matches!(
        err,
        SimError::Validation(ValidationError::NegativeArrival { arrival: -1, .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Workload::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_malformed_json_is_workload_error() {
    let file = write_workload("{ not json");
    let err = Workload::from_path(file.path()).unwrap_err();
    assert!(matches!(err, SimError::Workload(_)));
}
