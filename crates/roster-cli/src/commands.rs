//! Subcommand implementations.
//!
//! Each run function owns the I/O for one pipeline stage: read the inputs,
//! call the pure transform, write the outputs, and return a [`RunSummary`]
//! for the console table. Split and merge outputs carry a timestamp in the
//! filename so re-runs never overwrite earlier output; assignment and
//! report outputs use fixed names because downstream stages read them back.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_assign::{SolverInput, solve};
use roster_ingest::{
    load_adult_assignments, load_class_catalog, load_student_assignments, read_csv_table,
    write_rows,
};
use roster_model::StudentAssignment;
use roster_report::{group_by_teacher, join_assignments, write_class_list, write_teacher_list};
use roster_transform::{join_by_full_name, split_form};

use crate::cli::{AssignArgs, MergePreferencesArgs, ReportArgs, SplitFormArgs};
use crate::types::{OutputSummary, RunSummary};

const FINAL_ASSIGNMENT_HEADERS: [&str; 8] = [
    "class_name",
    "session",
    "class_id",
    "student_full_name",
    "grade",
    "teacher",
    "stream",
    "interest",
];

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-%H%M").to_string()
}

fn output(label: &str, path: PathBuf, records: usize) -> OutputSummary {
    OutputSummary {
        label: label.to_string(),
        path,
        records,
    }
}

pub fn run_split_form(args: &SplitFormArgs) -> Result<RunSummary> {
    let span = info_span!("split_form", form = %args.form.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(&args.form)?;
    let split = split_form(&table);

    let stamp = timestamp();
    let adults_path = args.output_dir.join(format!("adults-{stamp}.csv"));
    let students_path = args.output_dir.join(format!("students-{stamp}.csv"));
    write_rows(&adults_path, &split.adult_headers, &split.adult_rows)?;
    write_rows(&students_path, &split.student_headers, &split.student_rows)?;

    info!(
        household_count = table.rows.len(),
        adult_count = split.adult_rows.len(),
        student_count = split.student_rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "form split complete"
    );
    Ok(RunSummary {
        outputs: vec![
            output("adults", adults_path, split.adult_rows.len()),
            output("students", students_path, split.student_rows.len()),
        ],
        notes: Vec::new(),
    })
}

pub fn run_merge_preferences(args: &MergePreferencesArgs) -> Result<RunSummary> {
    let span = info_span!(
        "merge_preferences",
        roster = %args.roster.display(),
        preferences = %args.preferences.display(),
    );
    let _guard = span.enter();
    let start = Instant::now();

    let roster = read_csv_table(&args.roster)?;
    let preferences = read_csv_table(&args.preferences)?;
    let join = join_by_full_name(&roster, &preferences);

    let stamp = timestamp();
    let merged_path = args
        .output_dir
        .join(format!("student_list_preferences-{stamp}.csv"));
    let unmatched_path = args.output_dir.join(format!("unmatched-{stamp}.csv"));
    write_rows(&merged_path, &join.merged_headers, &join.merged_rows)?;
    write_rows(&unmatched_path, &join.unmatched_headers, &join.unmatched_rows)?;

    info!(
        roster_count = roster.rows.len(),
        preference_count = preferences.rows.len(),
        unmatched_count = join.unmatched_rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "merge complete"
    );
    let mut notes = Vec::new();
    if !join.unmatched_rows.is_empty() {
        notes.push(format!(
            "{} preference rows had no roster match",
            join.unmatched_rows.len()
        ));
    }
    Ok(RunSummary {
        outputs: vec![
            output("merged", merged_path, join.merged_rows.len()),
            output("unmatched", unmatched_path, join.unmatched_rows.len()),
        ],
        notes,
    })
}

pub fn run_assign(args: &AssignArgs) -> Result<RunSummary> {
    let span = info_span!("assign", session = args.session);
    let _guard = span.enter();
    let start = Instant::now();

    let roster = read_csv_table(&args.roster)?;
    let preferences = read_csv_table(&args.preferences)?;
    let catalog = load_class_catalog(&args.catalog)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding assignment shuffle");

    let placement = solve(&SolverInput {
        roster: &roster,
        preferences: &preferences,
        catalog: &catalog,
        session: args.session,
        seed,
    })?;

    let path = args.output_dir.join("final_assignments.csv");
    let headers: Vec<String> = FINAL_ASSIGNMENT_HEADERS
        .iter()
        .map(|header| (*header).to_string())
        .collect();
    let rows: Vec<Vec<String>> = placement.assignments.iter().map(assignment_row).collect();
    write_rows(&path, &headers, &rows)
        .with_context(|| format!("write assignments: {}", path.display()))?;

    for fill in &placement.fill {
        info!(
            class = %fill.name,
            assigned = fill.assigned,
            capacity = fill.capacity,
            "course fill"
        );
    }
    info!(
        student_count = placement.assignments.len(),
        unplaced_count = placement.unplaced.len(),
        duration_ms = start.elapsed().as_millis(),
        "assignment complete"
    );
    let mut notes = Vec::new();
    if !placement.missing_preferences.is_empty() {
        notes.push(format!(
            "{} students had no preferences row: {}",
            placement.missing_preferences.len(),
            placement.missing_preferences.join(", ")
        ));
    }
    if !placement.unplaced.is_empty() {
        notes.push(format!(
            "{} students fell through to the fallback: {}",
            placement.unplaced.len(),
            placement.unplaced.join(", ")
        ));
    }
    Ok(RunSummary {
        outputs: vec![output("assignments", path, placement.assignments.len())],
        notes,
    })
}

fn assignment_row(assignment: &StudentAssignment) -> Vec<String> {
    vec![
        assignment.class_name.clone(),
        assignment.session.to_string(),
        assignment.class_id.clone(),
        assignment.student_full_name.clone(),
        assignment.grade.to_string(),
        assignment.teacher.clone(),
        assignment.stream.clone(),
        assignment.interest.clone(),
    ]
}

pub fn run_report(args: &ReportArgs) -> Result<RunSummary> {
    let span = info_span!("report", catalog = %args.catalog.display());
    let _guard = span.enter();
    let start = Instant::now();

    let catalog = load_class_catalog(&args.catalog)?;
    let adults = load_adult_assignments(&args.adults)?;
    let students = load_student_assignments(&args.assignments)?;
    let classes = join_assignments(catalog, adults, students);
    let teacher_count = group_by_teacher(&classes).len();

    let class_list_path = args.output_dir.join("class_list.md");
    let teacher_list_path = args.output_dir.join("teacher_list.md");
    write_class_list(&class_list_path, &classes)?;
    write_teacher_list(&teacher_list_path, &classes)?;

    info!(
        class_count = classes.len(),
        teacher_count,
        duration_ms = start.elapsed().as_millis(),
        "reports complete"
    );
    Ok(RunSummary {
        outputs: vec![
            output("class list", class_list_path, classes.len()),
            output("teacher list", teacher_list_path, teacher_count),
        ],
        notes: Vec::new(),
    })
}
