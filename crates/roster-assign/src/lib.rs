//! Preference-based class assignment.

pub mod preference;
pub mod solver;

pub use preference::{InterestLevel, ParsedPreferences, Preference, parse_preferences};
pub use solver::{CourseFill, Placement, SolverInput, solve};
