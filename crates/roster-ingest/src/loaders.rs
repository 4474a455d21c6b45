//! Typed loaders for the report input files.
//!
//! Column positions are fixed by the file contracts; integers that fail to
//! parse default to zero rather than failing the row.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use roster_model::{AdultAssignment, ClassCatalogEntry, StudentAssignment};

use crate::csv_table::read_csv_table;

fn field(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

fn int_or_zero(row: &[String], index: usize) -> i32 {
    row.get(index)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Load the class catalog.
///
/// Columns: `[id, session, name, interest_area, grade_min, grade_max,
/// capacity, location, meet_location]`.
pub fn load_class_catalog(path: &Path) -> Result<Vec<ClassCatalogEntry>> {
    let table = read_csv_table(path)?;
    let mut catalog = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let entry = ClassCatalogEntry {
            id: field(row, 0),
            session: int_or_zero(row, 1),
            name: field(row, 2),
            interest_area: field(row, 3),
            grade_min: int_or_zero(row, 4),
            grade_max: int_or_zero(row, 5),
            capacity: int_or_zero(row, 6),
            location: field(row, 7),
            meet_location: field(row, 8),
        };
        if entry.grade_min > entry.grade_max {
            warn!(
                class_id = %entry.id,
                grade_min = entry.grade_min,
                grade_max = entry.grade_max,
                "catalog entry has inverted grade range"
            );
        }
        catalog.push(entry);
    }
    Ok(catalog)
}

/// Load adult class assignments.
///
/// Columns: `[class_id, full_name, email, note]`.
pub fn load_adult_assignments(path: &Path) -> Result<Vec<AdultAssignment>> {
    let table = read_csv_table(path)?;
    let assignments = table
        .rows
        .iter()
        .map(|row| AdultAssignment {
            class_id: field(row, 0),
            full_name: field(row, 1),
            email: field(row, 2),
            note: field(row, 3),
        })
        .collect();
    Ok(assignments)
}

/// Load final student assignments.
///
/// Columns: `[class_name, session, class_id, student_full_name, grade,
/// teacher, stream, interest]`.
pub fn load_student_assignments(path: &Path) -> Result<Vec<StudentAssignment>> {
    let table = read_csv_table(path)?;
    let assignments = table
        .rows
        .iter()
        .map(|row| StudentAssignment {
            class_name: field(row, 0),
            session: int_or_zero(row, 1),
            class_id: field(row, 2),
            student_full_name: field(row, 3),
            grade: int_or_zero(row, 4),
            teacher: field(row, 5),
            stream: field(row, 6),
            interest: field(row, 7),
        })
        .collect();
    Ok(assignments)
}
