use serde::{Deserialize, Serialize};

/// One class offering from the catalog file.
///
/// Loaded once per run and immutable thereafter. `grade_min`/`grade_max`
/// are inclusive; `grade_min <= grade_max` is expected but not enforced
/// beyond a warning at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCatalogEntry {
    /// Unique class identifier. Sorted as a plain string everywhere.
    pub id: String,
    pub session: i32,
    pub name: String,
    pub interest_area: String,
    pub grade_min: i32,
    pub grade_max: i32,
    /// Maximum number of students.
    pub capacity: i32,
    pub location: String,
    /// Where the class gathers before walking to `location`.
    pub meet_location: String,
}

impl ClassCatalogEntry {
    /// Returns true when `grade` falls inside the inclusive grade range.
    pub fn admits_grade(&self, grade: i32) -> bool {
        grade >= self.grade_min && grade <= self.grade_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(min: i32, max: i32) -> ClassCatalogEntry {
        ClassCatalogEntry {
            id: "C1".to_string(),
            session: 1,
            name: "Chess".to_string(),
            interest_area: "games_puzzles".to_string(),
            grade_min: min,
            grade_max: max,
            capacity: 12,
            location: "Room 2".to_string(),
            meet_location: "Front hall".to_string(),
        }
    }

    #[test]
    fn grade_range_is_inclusive() {
        let class = entry(2, 5);
        assert!(!class.admits_grade(1));
        assert!(class.admits_grade(2));
        assert!(class.admits_grade(5));
        assert!(!class.admits_grade(6));
    }
}
