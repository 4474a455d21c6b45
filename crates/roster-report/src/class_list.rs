//! The class-grouped Markdown report.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::ClassAggregate;
use crate::sorting::{sort_adults_by_name, sort_students_by_grade_then_first_name};

/// Render one class section.
///
/// The aggregate arrives fully populated; this step sorts and formats and
/// performs no other business logic.
fn render_class_section(aggregate: &ClassAggregate) -> String {
    let catalog = &aggregate.catalog;
    let mut out = String::new();
    out.push_str(&format!("## {} ({})\n\n", catalog.name, catalog.id));
    out.push_str(&format!("- Session: {}\n", catalog.session));
    out.push_str(&format!("- Interest area: {}\n", catalog.interest_area));
    out.push_str(&format!(
        "- Grades: {}-{}\n",
        catalog.grade_min, catalog.grade_max
    ));
    out.push_str(&format!(
        "- Location: {} (meet at {})\n\n",
        catalog.location, catalog.meet_location
    ));

    let mut adults = aggregate.adults.clone();
    sort_adults_by_name(&mut adults);
    out.push_str("### Adults\n\n");
    for adult in &adults {
        if adult.note.is_empty() {
            out.push_str(&format!("- {} ({})\n", adult.full_name, adult.email));
        } else {
            out.push_str(&format!(
                "- {} ({}): {}\n",
                adult.full_name, adult.email, adult.note
            ));
        }
    }

    let mut students = aggregate.students.clone();
    sort_students_by_grade_then_first_name(&mut students);
    out.push_str("\n### Students\n\n");
    for student in &students {
        out.push_str(&format!(
            "- {} (grade {}, {})\n",
            student.student_full_name, student.grade, student.teacher
        ));
    }
    out.push('\n');
    out
}

/// Render the whole class list, one section per class in ascending class-id
/// order.
pub fn render_class_list(classes: &BTreeMap<String, ClassAggregate>) -> String {
    let mut out = String::new();
    for aggregate in classes.values() {
        out.push_str(&render_class_section(aggregate));
    }
    out
}

/// Write the class list to `path`, appending one section per class.
///
/// Any write error aborts immediately; sections already written stay on
/// disk.
pub fn write_class_list(path: &Path, classes: &BTreeMap<String, ClassAggregate>) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create class list: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for aggregate in classes.values() {
        writer
            .write_all(render_class_section(aggregate).as_bytes())
            .with_context(|| format!("write class list: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush class list: {}", path.display()))?;
    Ok(())
}
