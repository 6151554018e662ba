//! Core module: curriculum models, catalog derivation and everything built on it

pub mod assistant;
pub mod catalog;
pub mod catalog_export;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod report;

/// Returns the current version of the `edu-catalog` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
