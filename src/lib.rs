//! Curriculum catalog library for `edu-catalog`
//!
//! Flattens a Department → Specialization → Level → Semester → Material tree
//! into course records, then merges, filters, exports and reports on them.
//! The CLI in `src/cli` is a thin layer over this crate.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
