/*!
 * Banker's Algorithm Tests
 * Safety check and resource-request handling on textbook states
 */

use pretty_assertions::assert_eq;
use sched_lab::banker::{parse_row, units_from_signed};
use sched_lab::{is_safe, RequestOutcome, ResourceState, Units, ValidationError};

fn textbook_max() -> Vec<Vec<Units>> {
    ["7,5,3", "3,2,2", "9,0,2", "2,2,2", "4,3,3"]
        .iter()
        .map(|row| parse_row(row).unwrap())
        .collect()
}

fn textbook_allocation() -> Vec<Vec<Units>> {
    ["0,1,0", "2,0,0", "3,0,2", "2,1,1", "0,0,2"]
        .iter()
        .map(|row| parse_row(row).unwrap())
        .collect()
}

#[test]
fn test_textbook_state_is_safe() {
    let report = is_safe(&[3, 3, 2], &textbook_max(), &textbook_allocation()).unwrap();
    assert!(report.safe);
    assert_eq!(report.sequence, vec![1, 3, 4, 0, 2]);
    assert_eq!(report.labels().join(","), "P1,P3,P4,P0,P2");
}

#[test]
fn test_starved_state_is_unsafe() {
    let report = is_safe(&[0, 0, 0], &textbook_max(), &textbook_allocation()).unwrap();
    assert!(!report.safe);
    assert!(report.sequence.is_empty());
}

#[test]
fn test_safe_sequence_is_replayable() {
    let state = ResourceState::new(vec![3, 3, 2], textbook_max(), textbook_allocation()).unwrap();
    let report = state.check_safety();

    let mut work = state.available().to_vec();
    for &p in &report.sequence {
        for (j, w) in work.iter_mut().enumerate() {
            assert!(state.need()[p][j] <= *w, "P{} cannot finish", p);
            *w += state.allocation()[p][j];
        }
    }
    // Everything is returned at the end
    assert_eq!(work, vec![10, 5, 7]);
}

#[test]
fn test_request_leaves_caller_state_untouched() {
    let state = ResourceState::new(vec![3, 3, 2], textbook_max(), textbook_allocation()).unwrap();
    let before = state.clone();

    let outcome = state.request(1, &[1, 0, 2]).unwrap();
    assert!(matches!(outcome, RequestOutcome::Granted { .. }));
    assert_eq!(state, before);
}

#[test]
fn test_dimension_errors() {
    let err = is_safe(&[1, 1], &[vec![1, 1, 1]], &[vec![0, 0, 0]]).unwrap_err();
    assert!(matches!(err, ValidationError::DimensionMismatch(_)));

    let err = is_safe(&[1], &[vec![1]], &[vec![2]]).unwrap_err();
    assert!(matches!(err, ValidationError::NegativeNeed { .. }));
}

#[test]
fn test_negative_boundary_input() {
    let err = units_from_signed(&[3, -3, 2], "available").unwrap_err();
    assert_eq!(
        err,
        ValidationError::NegativeUnits {
            context: "available".into(),
            value: -3
        }
    );
}
