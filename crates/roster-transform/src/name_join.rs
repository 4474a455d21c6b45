//! Exact full-name join between the student roster and the preferences
//! file.
//!
//! The roster key is `trim(first_name) + " " + trim(last_name)`; the
//! preferences key is `trim(full_name)`. Matching is case-sensitive exact
//! string equality. Duplicate preference full names are last-write-wins in
//! the lookup (the later row in file order overwrites the earlier), which
//! silently prefers one of the ambiguous rows; it is logged but preserved.

use std::collections::{BTreeMap, BTreeSet};

use roster_ingest::CsvTable;
use tracing::warn;

/// Roster column holding the first name.
pub const ROSTER_FIRST_NAME: usize = 0;
/// Roster column holding the last name.
pub const ROSTER_LAST_NAME: usize = 1;
/// Preferences column holding the student's full name.
pub const PREFERENCES_FULL_NAME: usize = 2;

/// Output of the join: the merged roster and the never-matched preference
/// rows, each with its header row.
#[derive(Debug, Clone)]
pub struct NameJoin {
    pub merged_headers: Vec<String>,
    pub merged_rows: Vec<Vec<String>>,
    pub unmatched_headers: Vec<String>,
    pub unmatched_rows: Vec<Vec<String>>,
}

fn field(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

/// Join the roster against the preferences by full name.
///
/// Every roster row appears exactly once in the merged output, with the
/// preference fields appended when matched and empty trailing fields when
/// not. Every preference row whose full name never matched appears exactly
/// once in the unmatched output, in file order.
pub fn join_by_full_name(roster: &CsvTable, preferences: &CsvTable) -> NameJoin {
    let mut lookup: BTreeMap<String, &Vec<String>> = BTreeMap::new();
    for row in &preferences.rows {
        let full_name = field(row, PREFERENCES_FULL_NAME).trim().to_string();
        if lookup.insert(full_name.clone(), row).is_some() {
            warn!(full_name = %full_name, "duplicate preference full name, keeping the later row");
        }
    }

    let mut merged_headers = roster.headers.clone();
    merged_headers.extend(preferences.headers.iter().cloned());

    let pad_width = preferences.headers.len();
    let mut matched: BTreeSet<String> = BTreeSet::new();
    let mut merged_rows = Vec::with_capacity(roster.rows.len());
    for row in &roster.rows {
        let first = field(row, ROSTER_FIRST_NAME);
        let last = field(row, ROSTER_LAST_NAME);
        let full_name = format!("{} {}", first.trim(), last.trim());
        let mut out = row.clone();
        match lookup.get(full_name.as_str()) {
            Some(preference_row) => {
                out.extend(preference_row.iter().cloned());
                matched.insert(full_name);
            }
            None => out.extend(std::iter::repeat_n(String::new(), pad_width)),
        }
        merged_rows.push(out);
    }

    let unmatched_rows = preferences
        .rows
        .iter()
        .filter(|row| {
            let full_name = field(row, PREFERENCES_FULL_NAME);
            !matched.contains(full_name.trim())
        })
        .cloned()
        .collect();

    NameJoin {
        merged_headers,
        merged_rows,
        unmatched_headers: preferences.headers.clone(),
        unmatched_rows,
    }
}
