//! Deterministic row transforms for the roster pipelines.
//!
//! Two transforms live here: the form splitter, which reshapes the raw
//! sign-up export into normalized adult and student rosters, and the
//! full-name joiner, which merges the student roster with the preferences
//! file. Both are pure: all I/O stays with the callers.

pub mod name_join;
pub mod recode;
pub mod reshape;
pub mod schema;
pub mod splitter;

pub use name_join::{NameJoin, join_by_full_name};
pub use recode::recode_participation;
pub use reshape::move_block;
pub use splitter::{FormSplit, split_form};
