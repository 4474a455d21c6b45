//! Shared record types for the roster pipelines.
//!
//! Every entity here is a plain row record loaded fresh each run; nothing
//! persists between invocations.

pub mod assignment;
pub mod catalog;
pub mod error;

pub use assignment::{AdultAssignment, StudentAssignment};
pub use catalog::ClassCatalogEntry;
pub use error::{Result, RosterError};
