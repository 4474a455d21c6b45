//! The assignment solver.
//!
//! Students are ordered pickiest-first (fewest `Very` areas) and walked
//! through their preferences from `Very` down to `Nope`. Preference order
//! within a level and the candidate courses for an area are shuffled with a
//! seedable RNG so repeated sessions do not always favor the same students
//! or the same course listings; a fixed seed reproduces a run exactly.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use roster_ingest::CsvTable;
use roster_model::{ClassCatalogEntry, StudentAssignment};

use crate::preference::{InterestLevel, ParsedPreferences, Preference, parse_preferences};

/// Everything the solver needs for one run.
pub struct SolverInput<'a> {
    /// The student roster (`first_name,last_name,grade,teacher,stream`).
    pub roster: &'a CsvTable,
    /// The preferences file.
    pub preferences: &'a CsvTable,
    pub catalog: &'a [ClassCatalogEntry],
    /// Only catalog entries for this session are considered.
    pub session: i32,
    pub seed: u64,
}

/// The solved placement.
#[derive(Debug)]
pub struct Placement {
    /// One row per student, in assignment order.
    pub assignments: Vec<StudentAssignment>,
    /// Students with no preferences row (assigned all-`Very` defaults).
    pub missing_preferences: Vec<String>,
    /// Students no real course could admit.
    pub unplaced: Vec<String>,
    /// Final fill per course, catalog order, fallback last.
    pub fill: Vec<CourseFill>,
}

/// How full one course ended up.
#[derive(Debug, Clone)]
pub struct CourseFill {
    pub class_id: String,
    pub name: String,
    pub assigned: usize,
    pub capacity: i32,
}

struct Candidate {
    full_name: String,
    grade: i32,
    teacher: String,
    stream: String,
    /// Shuffled, then ordered `Very` before `Maybe` before `Nope`.
    ordered_preferences: Vec<Preference>,
    counts: (usize, usize, usize),
}

struct Course {
    entry: ClassCatalogEntry,
    remaining: i32,
}

impl Course {
    fn available_to(&self, grade: i32) -> bool {
        self.remaining > 0 && self.entry.admits_grade(grade)
    }
}

/// Grade range wide enough to admit anyone, for the fallback course.
const FALLBACK_GRADE_MAX: i32 = 999;

fn fallback_entry(session: i32) -> ClassCatalogEntry {
    ClassCatalogEntry {
        id: String::new(),
        session,
        name: "Fallback".to_string(),
        interest_area: "none".to_string(),
        grade_min: 0,
        grade_max: FALLBACK_GRADE_MAX,
        capacity: FALLBACK_GRADE_MAX,
        location: String::new(),
        meet_location: String::new(),
    }
}

fn order_preferences(mut preferences: Vec<Preference>, rng: &mut StdRng) -> Vec<Preference> {
    preferences.shuffle(rng);
    let mut ordered = Vec::with_capacity(preferences.len());
    for level in [InterestLevel::Very, InterestLevel::Maybe, InterestLevel::Nope] {
        ordered.extend(
            preferences
                .iter()
                .filter(|preference| preference.level == level)
                .cloned(),
        );
    }
    ordered
}

fn preference_counts(preferences: &[Preference]) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for preference in preferences {
        match preference.level {
            InterestLevel::Very => counts.0 += 1,
            InterestLevel::Maybe => counts.1 += 1,
            InterestLevel::Nope => counts.2 += 1,
        }
    }
    counts
}

fn build_candidates(
    roster: &CsvTable,
    parsed: &ParsedPreferences,
    rng: &mut StdRng,
) -> Result<(Vec<Candidate>, Vec<String>)> {
    let first = roster
        .column("first_name")
        .context("roster has no first_name column")?;
    let last = roster
        .column("last_name")
        .context("roster has no last_name column")?;
    let grade = roster
        .column("grade")
        .context("roster has no grade column")?;
    let teacher = roster.column("teacher");
    let stream = roster.column("stream");

    let field = |row: &[String], index: Option<usize>| -> String {
        index
            .and_then(|index| row.get(index).cloned())
            .unwrap_or_default()
    };

    let mut candidates = Vec::with_capacity(roster.rows.len());
    let mut missing = Vec::new();
    for row in &roster.rows {
        let full_name = format!(
            "{} {}",
            field(row, Some(first)).trim(),
            field(row, Some(last)).trim()
        );
        let preferences = match parsed.by_student.get(&full_name) {
            Some(preferences) => preferences.clone(),
            None => {
                missing.push(full_name.clone());
                parsed.default_preferences()
            }
        };
        let ordered = order_preferences(preferences, rng);
        let counts = preference_counts(&ordered);
        candidates.push(Candidate {
            full_name,
            grade: field(row, Some(grade)).trim().parse().unwrap_or(0),
            teacher: field(row, teacher),
            stream: field(row, stream),
            ordered_preferences: ordered,
            counts,
        });
    }
    // Pickiest first: fewest Very areas, then fewest Maybe. Ties keep
    // roster order (stable sort).
    candidates.sort_by_key(|candidate| candidate.counts);
    Ok((candidates, missing))
}

/// Solve one session's assignments.
pub fn solve(input: &SolverInput<'_>) -> Result<Placement> {
    let mut rng = StdRng::seed_from_u64(input.seed);
    let parsed = parse_preferences(input.preferences)?;
    let known_areas: BTreeSet<&str> = parsed.areas.iter().map(String::as_str).collect();

    // Course 0 is the fallback; it admits anyone and never fills.
    let mut courses = vec![Course {
        entry: fallback_entry(input.session),
        remaining: FALLBACK_GRADE_MAX,
    }];
    let mut courses_by_area: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for entry in input.catalog {
        if entry.session != input.session {
            continue;
        }
        if !known_areas.contains(entry.interest_area.as_str()) {
            bail!(
                "unexpected interest area ({}) for class {}",
                entry.interest_area,
                entry.name
            );
        }
        courses_by_area
            .entry(entry.interest_area.clone())
            .or_default()
            .push(courses.len());
        courses.push(Course {
            entry: entry.clone(),
            remaining: entry.capacity,
        });
    }

    let (candidates, missing_preferences) = build_candidates(input.roster, &parsed, &mut rng)?;
    info!(
        student_count = candidates.len(),
        course_count = courses.len() - 1,
        session = input.session,
        "assigning students"
    );

    let mut assignments = Vec::with_capacity(candidates.len());
    let mut unplaced = Vec::new();
    for candidate in candidates {
        let mut placed = None;
        for preference in &candidate.ordered_preferences {
            let Some(indices) = courses_by_area.get_mut(&preference.area) else {
                continue;
            };
            indices.shuffle(&mut rng);
            placed = indices
                .iter()
                .copied()
                .find(|&index| courses[index].available_to(candidate.grade));
            if placed.is_some() {
                break;
            }
        }
        let index = match placed {
            Some(index) => index,
            None => {
                debug!(student = %candidate.full_name, "no available class, using fallback");
                unplaced.push(candidate.full_name.clone());
                0
            }
        };
        courses[index].remaining -= 1;
        let entry = &courses[index].entry;
        assignments.push(StudentAssignment {
            class_name: entry.name.clone(),
            session: entry.session,
            class_id: entry.id.clone(),
            student_full_name: candidate.full_name,
            grade: candidate.grade,
            teacher: candidate.teacher,
            stream: candidate.stream,
            interest: entry.interest_area.clone(),
        });
    }

    let mut fill: Vec<CourseFill> = courses[1..]
        .iter()
        .map(|course| CourseFill {
            class_id: course.entry.id.clone(),
            name: course.entry.name.clone(),
            assigned: (course.entry.capacity - course.remaining).max(0) as usize,
            capacity: course.entry.capacity,
        })
        .collect();
    let fallback = &courses[0];
    fill.push(CourseFill {
        class_id: fallback.entry.id.clone(),
        name: fallback.entry.name.clone(),
        assigned: (fallback.entry.capacity - fallback.remaining).max(0) as usize,
        capacity: fallback.entry.capacity,
    });

    Ok(Placement {
        assignments,
        missing_preferences,
        unplaced,
        fill,
    })
}
