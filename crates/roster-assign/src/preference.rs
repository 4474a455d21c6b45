//! Parsing of the student preferences file.
//!
//! Interest areas are plucked out of the column names: a column
//! `student_interest_games_puzzles` contributes the area `games_puzzles`.

use std::collections::BTreeMap;

use roster_ingest::CsvTable;
use roster_model::{Result, RosterError};

/// Prefix tagging interest columns in the preferences file.
pub const INTEREST_PREFIX: &str = "student_interest_";

/// Column holding the student's full name.
pub const FULL_NAME_COLUMN: &str = "student_full_name";

/// How interested a student is in one area. The ordering matters: `Very`
/// preferences are tried before `Maybe`, and `Nope` only as a last resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InterestLevel {
    Very,
    Maybe,
    Nope,
}

impl InterestLevel {
    /// Map a form answer to a level. Anything unrecognized counts as
    /// `Nope`.
    pub fn from_answer(answer: &str) -> Self {
        match answer {
            "Very Interested" => InterestLevel::Very,
            "Interested" => InterestLevel::Maybe,
            _ => InterestLevel::Nope,
        }
    }
}

/// One student's stated interest in one area.
#[derive(Debug, Clone)]
pub struct Preference {
    pub area: String,
    pub level: InterestLevel,
}

/// The parsed preferences file.
#[derive(Debug, Clone)]
pub struct ParsedPreferences {
    /// Every interest area named by the header, in column order.
    pub areas: Vec<String>,
    pub by_student: BTreeMap<String, Vec<Preference>>,
}

impl ParsedPreferences {
    /// All-areas-`Very` defaults for students without a preferences row.
    /// Sorting them to the back of the queue keeps the algorithm simple.
    pub fn default_preferences(&self) -> Vec<Preference> {
        self.areas
            .iter()
            .map(|area| Preference {
                area: area.clone(),
                level: InterestLevel::Very,
            })
            .collect()
    }
}

/// Pluck the interest area out of a preferences column name.
pub fn interest_area(column: &str) -> Option<&str> {
    column.strip_prefix(INTEREST_PREFIX)
}

/// Parse the preferences table into per-student preference lists.
pub fn parse_preferences(table: &CsvTable) -> Result<ParsedPreferences> {
    let name_column = table.column(FULL_NAME_COLUMN).ok_or_else(|| {
        RosterError::Message(format!("preferences file has no {FULL_NAME_COLUMN} column"))
    })?;
    let interest_columns: Vec<(usize, String)> = table
        .headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| interest_area(header).map(|area| (index, area.to_string())))
        .collect();
    let areas = interest_columns
        .iter()
        .map(|(_, area)| area.clone())
        .collect();

    let mut by_student = BTreeMap::new();
    for row in &table.rows {
        let name = row
            .get(name_column)
            .map(|value| value.trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let preferences = interest_columns
            .iter()
            .map(|(index, area)| Preference {
                area: area.clone(),
                level: InterestLevel::from_answer(
                    row.get(*index).map(String::as_str).unwrap_or(""),
                ),
            })
            .collect();
        by_student.insert(name, preferences);
    }
    Ok(ParsedPreferences { areas, by_student })
}
