use serde::{Deserialize, Serialize};

/// An adult attached to a class.
///
/// `class_id` is a foreign key into the catalog in spirit only: an id with
/// no catalog entry is silently dropped when reports are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdultAssignment {
    pub class_id: String,
    pub full_name: String,
    pub email: String,
    /// Free-text note from the assignment sheet.
    pub note: String,
}

/// One row of the final student assignment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAssignment {
    /// Redundant copy of the catalog class name.
    pub class_name: String,
    pub session: i32,
    pub class_id: String,
    pub student_full_name: String,
    pub grade: i32,
    /// Homeroom teacher, used to group the teacher-facing report.
    pub teacher: String,
    pub stream: String,
    pub interest: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_assignment_round_trips_through_json() {
        let assignment = StudentAssignment {
            class_name: "Chess".to_string(),
            session: 1,
            class_id: "C1".to_string(),
            student_full_name: "Ann Young".to_string(),
            grade: 3,
            teacher: "Ms. Park".to_string(),
            stream: "A".to_string(),
            interest: "games_puzzles".to_string(),
        };
        let json = serde_json::to_string(&assignment).expect("serialize assignment");
        let round: StudentAssignment = serde_json::from_str(&json).expect("deserialize assignment");
        assert_eq!(round, assignment);
    }
}
