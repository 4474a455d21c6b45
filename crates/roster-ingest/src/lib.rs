//! CSV ingestion for the roster pipelines.
//!
//! Everything is read whole into memory: each run is a fresh batch job with
//! no state carried between invocations.

mod csv_table;
mod loaders;

pub use csv_table::{CsvTable, read_csv_table, write_rows};
pub use loaders::{load_adult_assignments, load_class_catalog, load_student_assignments};
