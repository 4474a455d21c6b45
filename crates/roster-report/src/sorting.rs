//! The documented comparators.
//!
//! All sorts are stable and case-insensitive via plain lowercasing; there
//! is no locale collation. The two reports deliberately disagree on student
//! order: the class list sorts by grade then first name, the teacher list
//! by full name only.

use roster_model::{AdultAssignment, StudentAssignment};

fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// First whitespace-delimited token of a full name.
fn first_token(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// Adults within a class: ascending by full name.
pub fn sort_adults_by_name(adults: &mut [AdultAssignment]) {
    adults.sort_by(|a, b| fold(&a.full_name).cmp(&fold(&b.full_name)));
}

/// Students within a class for the class-grouped report: ascending by
/// grade, ties broken by the first name token.
pub fn sort_students_by_grade_then_first_name(students: &mut [StudentAssignment]) {
    students.sort_by(|a, b| {
        a.grade.cmp(&b.grade).then_with(|| {
            fold(first_token(&a.student_full_name)).cmp(&fold(first_token(&b.student_full_name)))
        })
    });
}

/// Students within a class for the teacher-grouped report: ascending by
/// full name; grade is not a key here.
pub fn sort_students_by_full_name(students: &mut [StudentAssignment]) {
    students.sort_by(|a, b| fold(&a.student_full_name).cmp(&fold(&b.student_full_name)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, grade: i32) -> StudentAssignment {
        StudentAssignment {
            class_name: String::new(),
            session: 1,
            class_id: "C1".to_string(),
            student_full_name: name.to_string(),
            grade,
            teacher: String::new(),
            stream: String::new(),
            interest: String::new(),
        }
    }

    fn adult(name: &str) -> AdultAssignment {
        AdultAssignment {
            class_id: "C1".to_string(),
            full_name: name.to_string(),
            email: String::new(),
            note: String::new(),
        }
    }

    #[test]
    fn class_list_order_is_grade_then_first_name() {
        let mut students = vec![
            student("bob x", 2),
            student("ann y", 1),
            student("zoe z", 1),
        ];
        sort_students_by_grade_then_first_name(&mut students);
        let names: Vec<&str> = students
            .iter()
            .map(|s| s.student_full_name.as_str())
            .collect();
        assert_eq!(names, vec!["ann y", "zoe z", "bob x"]);
    }

    #[test]
    fn teacher_list_order_ignores_grade() {
        let mut students = vec![
            student("Bob Young", 1),
            student("ann young", 5),
        ];
        sort_students_by_full_name(&mut students);
        assert_eq!(students[0].student_full_name, "ann young");
        assert_eq!(students[1].student_full_name, "Bob Young");
    }

    #[test]
    fn adult_order_is_case_insensitive() {
        let mut adults = vec![adult("zelda Adams"), adult("Ann Zimmer")];
        sort_adults_by_name(&mut adults);
        assert_eq!(adults[0].full_name, "Ann Zimmer");
    }
}
