//! Report generation: per-class aggregation plus the class-grouped and
//! teacher-grouped Markdown lists.

pub mod aggregate;
pub mod class_list;
pub mod sorting;
pub mod teacher_list;

pub use aggregate::{ClassAggregate, join_assignments};
pub use class_list::{render_class_list, write_class_list};
pub use teacher_list::{TeacherClassGroup, group_by_teacher, render_teacher_list, write_teacher_list};
