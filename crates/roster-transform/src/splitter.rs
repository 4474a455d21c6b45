//! Form splitter: one raw sign-up submission per row, up to two adults and
//! four students per household.
//!
//! IDs are generated, not derived from input data: `adult_id` and
//! `student_id` are running counters starting at 1, incremented once per
//! emitted row; `household_id` increments once per input row and is shared
//! by every row that household produced.

use std::ops::Range;

use roster_ingest::CsvTable;

use crate::recode::recode_participation;
use crate::reshape::move_block;
use crate::schema;

/// The split output: normalized adult and student row sets.
#[derive(Debug, Clone)]
pub struct FormSplit {
    pub adult_headers: Vec<String>,
    pub adult_rows: Vec<Vec<String>>,
    pub student_headers: Vec<String>,
    pub student_rows: Vec<Vec<String>>,
}

fn field(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

fn slice(row: &[String], range: Range<usize>) -> impl Iterator<Item = String> + '_ {
    range.map(|index| field(row, index))
}

fn strip_slot_prefixes(header: &str) -> String {
    let mut name = header.to_string();
    for prefix in schema::SLOT_PREFIXES {
        name = name.replace(prefix, "");
    }
    name
}

/// Recode the participation answer and move the availability block next to
/// it. Applied to every assembled adult row and to the adult header row.
fn finish_adult_row(mut row: Vec<String>) -> Vec<String> {
    if let Some(value) = row.get_mut(schema::PARTICIPATION_COLUMN) {
        let recoded = recode_participation(value).to_string();
        *value = recoded;
    }
    move_block(
        row,
        schema::AVAILABILITY_BLOCK,
        schema::AVAILABILITY_INSERT_AT,
    )
}

fn adult_headers(stripped: &[String]) -> Vec<String> {
    let mut headers = vec![
        "adult_id".to_string(),
        "household_id".to_string(),
        field(stripped, schema::ADULT1_NAME),
        "email".to_string(),
    ];
    headers.extend(slice(stripped, schema::ADULT1_SURVEY));
    headers.push("anything_else".to_string());
    move_block(
        headers,
        schema::AVAILABILITY_BLOCK,
        schema::AVAILABILITY_INSERT_AT,
    )
}

fn student_headers(stripped: &[String]) -> Vec<String> {
    let mut headers = vec!["student_id".to_string(), "household_id".to_string()];
    headers.extend(slice(stripped, schema::student_slots()[0].fields.clone()));
    headers
}

/// Split the raw form export into adult and student row sets.
///
/// Missing columns read as empty strings; rows too short for the
/// availability block skip the reorder (degraded passthrough, see
/// [`move_block`]).
pub fn split_form(table: &CsvTable) -> FormSplit {
    let stripped: Vec<String> = table
        .headers
        .iter()
        .map(|header| strip_slot_prefixes(header))
        .collect();

    let mut adult_rows = Vec::new();
    let mut student_rows = Vec::new();
    let mut adult_id = 0u64;
    let mut student_id = 0u64;
    let mut household_id = 0u64;

    for row in &table.rows {
        household_id += 1;

        adult_id += 1;
        let mut adult = vec![
            adult_id.to_string(),
            household_id.to_string(),
            field(row, schema::ADULT1_NAME),
            field(row, schema::CONTACT_EMAIL),
        ];
        adult.extend(slice(row, schema::ADULT1_SURVEY));
        // One "anything else" answer per household, duplicated per adult.
        adult.push(field(row, schema::ANYTHING_ELSE));
        adult_rows.push(finish_adult_row(adult));

        if field(row, schema::ADULT2_FLAG) == "Yes" {
            adult_id += 1;
            let mut adult = vec![adult_id.to_string(), household_id.to_string()];
            adult.extend(slice(row, schema::ADULT2_FIELDS));
            adult_rows.push(finish_adult_row(adult));
        }

        for slot in schema::student_slots() {
            if let Some(flag) = slot.flag {
                if field(row, flag) != "Yes" {
                    continue;
                }
            }
            student_id += 1;
            let mut student = vec![student_id.to_string(), household_id.to_string()];
            student.extend(slice(row, slot.fields.clone()));
            student_rows.push(student);
        }
    }

    FormSplit {
        adult_headers: adult_headers(&stripped),
        adult_rows,
        student_headers: student_headers(&stripped),
        student_rows,
    }
}
