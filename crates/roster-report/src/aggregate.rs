//! Per-class aggregation of catalog entries and assignments.

use std::collections::BTreeMap;

use tracing::debug;

use roster_model::{AdultAssignment, ClassCatalogEntry, StudentAssignment};

/// One class's catalog entry plus everyone assigned to it.
///
/// Built fresh each run; the map it lives in is the only state the report
/// generators share.
#[derive(Debug, Clone)]
pub struct ClassAggregate {
    pub catalog: ClassCatalogEntry,
    pub adults: Vec<AdultAssignment>,
    pub students: Vec<StudentAssignment>,
}

impl ClassAggregate {
    fn new(catalog: ClassCatalogEntry) -> Self {
        Self {
            catalog,
            adults: Vec::new(),
            students: Vec::new(),
        }
    }
}

/// Attach every assignment to its class, keyed by class id.
///
/// Only catalog entries seed the map. An assignment whose class id has no
/// catalog entry is dropped without warning: classes are sometimes removed
/// from the catalog after assignments were recorded, and those records must
/// not resurface in reports. The `BTreeMap` gives the lexicographic class
/// ordering the class-grouped report renders in ("10" sorts before "9").
pub fn join_assignments(
    catalog: Vec<ClassCatalogEntry>,
    adults: Vec<AdultAssignment>,
    students: Vec<StudentAssignment>,
) -> BTreeMap<String, ClassAggregate> {
    let mut classes: BTreeMap<String, ClassAggregate> = BTreeMap::new();
    for entry in catalog {
        classes.insert(entry.id.clone(), ClassAggregate::new(entry));
    }
    let mut dropped = 0usize;
    for adult in adults {
        match classes.get_mut(&adult.class_id) {
            Some(aggregate) => aggregate.adults.push(adult),
            None => dropped += 1,
        }
    }
    for student in students {
        match classes.get_mut(&student.class_id) {
            Some(aggregate) => aggregate.students.push(student),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(dropped, "assignments referenced class ids not in the catalog");
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_entry(id: &str) -> ClassCatalogEntry {
        ClassCatalogEntry {
            id: id.to_string(),
            session: 1,
            name: format!("Class {id}"),
            interest_area: "games_puzzles".to_string(),
            grade_min: 1,
            grade_max: 6,
            capacity: 10,
            location: "Room 1".to_string(),
            meet_location: "Hall".to_string(),
        }
    }

    fn adult(class_id: &str, name: &str) -> AdultAssignment {
        AdultAssignment {
            class_id: class_id.to_string(),
            full_name: name.to_string(),
            email: String::new(),
            note: String::new(),
        }
    }

    fn student(class_id: &str, name: &str) -> StudentAssignment {
        StudentAssignment {
            class_name: String::new(),
            session: 1,
            class_id: class_id.to_string(),
            student_full_name: name.to_string(),
            grade: 2,
            teacher: "Ms. Park".to_string(),
            stream: String::new(),
            interest: String::new(),
        }
    }

    #[test]
    fn every_record_lands_on_exactly_its_own_class() {
        let classes = join_assignments(
            vec![catalog_entry("A"), catalog_entry("B")],
            vec![adult("A", "Jane Doe"), adult("B", "Sam Roe")],
            vec![student("A", "Kid One"), student("A", "Kid Two")],
        );
        assert_eq!(classes["A"].adults.len(), 1);
        assert_eq!(classes["A"].students.len(), 2);
        assert_eq!(classes["B"].adults.len(), 1);
        assert!(classes["B"].students.is_empty());
    }

    #[test]
    fn unknown_class_ids_are_dropped_and_never_create_aggregates() {
        let classes = join_assignments(
            vec![catalog_entry("A")],
            vec![adult("GONE", "Jane Doe")],
            vec![student("GONE", "Kid One")],
        );
        assert_eq!(classes.len(), 1);
        assert!(classes["A"].adults.is_empty());
        assert!(classes["A"].students.is_empty());
    }

    #[test]
    fn class_ids_iterate_in_plain_string_order() {
        let classes = join_assignments(
            vec![catalog_entry("9"), catalog_entry("10")],
            Vec::new(),
            Vec::new(),
        );
        let ids: Vec<&str> = classes.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["10", "9"]);
    }
}
