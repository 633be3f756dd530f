/*!
 * Banker's Input
 * Row parsing and signed-to-unsigned conversion at the input boundary
 */

use super::state::Units;
use crate::core::{ValidationError, ValidationResult};

/// Parse a comma-separated row such as `"3, 3, 2"`
pub fn parse_row(line: &str) -> ValidationResult<Vec<Units>> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ValidationError::Malformed("empty resource row".into()));
    }

    line.split(',')
        .map(|field| {
            let field = field.trim();
            let value: i64 = field.parse().map_err(|_| {
                ValidationError::Malformed(format!("'{}' is not an integer", field))
            })?;
            to_units(value, "row")
        })
        .collect()
}

/// Convert a signed vector, rejecting negative entries
pub fn units_from_signed(values: &[i64], context: &str) -> ValidationResult<Vec<Units>> {
    values.iter().map(|&v| to_units(v, context)).collect()
}

/// Convert a signed matrix row by row
pub fn matrix_from_signed(rows: &[Vec<i64>], context: &str) -> ValidationResult<Vec<Vec<Units>>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| units_from_signed(row, &format!("{}[{}]", context, i)))
        .collect()
}

fn to_units(value: i64, context: &str) -> ValidationResult<Units> {
    if value < 0 {
        return Err(ValidationError::NegativeUnits {
            context: context.to_string(),
            value,
        });
    }
    Units::try_from(value)
        .map_err(|_| ValidationError::Malformed(format!("{} exceeds {}", value, Units::MAX)))
}
