//! The teacher-grouped Markdown report.
//!
//! Students are regrouped by their homeroom teacher, then by class within
//! each teacher. Unlike the class list, students here sort by full name
//! alone; grade is not a key.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use roster_model::StudentAssignment;

use crate::aggregate::ClassAggregate;
use crate::sorting::sort_students_by_full_name;

/// One class and its students under a single teacher.
#[derive(Debug, Clone)]
pub struct TeacherClassGroup {
    pub class_name: String,
    pub location: String,
    pub meet_location: String,
    pub students: Vec<StudentAssignment>,
}

/// Regroup the aggregates as teacher -> class id -> group.
///
/// Both `BTreeMap` levels give the rendered ordering: teachers ascending by
/// name, classes within a teacher ascending by class id.
pub fn group_by_teacher(
    classes: &BTreeMap<String, ClassAggregate>,
) -> BTreeMap<String, BTreeMap<String, TeacherClassGroup>> {
    let mut teachers: BTreeMap<String, BTreeMap<String, TeacherClassGroup>> = BTreeMap::new();
    for aggregate in classes.values() {
        for student in &aggregate.students {
            let group = teachers
                .entry(student.teacher.clone())
                .or_default()
                .entry(aggregate.catalog.id.clone())
                .or_insert_with(|| TeacherClassGroup {
                    class_name: aggregate.catalog.name.clone(),
                    location: aggregate.catalog.location.clone(),
                    meet_location: aggregate.catalog.meet_location.clone(),
                    students: Vec::new(),
                });
            group.students.push(student.clone());
        }
    }
    teachers
}

fn render_teacher_section(teacher: &str, classes: &BTreeMap<String, TeacherClassGroup>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {teacher}\n\n"));
    for group in classes.values() {
        out.push_str(&format!(
            "## {} ({}, meet at {})\n\n",
            group.class_name, group.location, group.meet_location
        ));
        let mut students = group.students.clone();
        sort_students_by_full_name(&mut students);
        for student in &students {
            out.push_str(&format!(
                "- {} (grade {})\n",
                student.student_full_name, student.grade
            ));
        }
        out.push('\n');
    }
    out
}

/// Render the whole teacher list, one section per teacher.
pub fn render_teacher_list(classes: &BTreeMap<String, ClassAggregate>) -> String {
    let mut out = String::new();
    for (teacher, groups) in &group_by_teacher(classes) {
        out.push_str(&render_teacher_section(teacher, groups));
    }
    out
}

/// Write the teacher list to `path`, appending one section per teacher.
pub fn write_teacher_list(path: &Path, classes: &BTreeMap<String, ClassAggregate>) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create teacher list: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for (teacher, groups) in &group_by_teacher(classes) {
        writer
            .write_all(render_teacher_section(teacher, groups).as_bytes())
            .with_context(|| format!("write teacher list: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush teacher list: {}", path.display()))?;
    Ok(())
}
