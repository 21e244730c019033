//! Score evaluation and grade reporting.
//!
//! This module validates raw percentage scores, maps valid scores onto
//! letter-grade bands, attaches a fixed performance message per grade,
//! and aggregates whole rosters into summary reports.

pub mod evaluate;
pub mod grade;
pub mod message;
pub mod reporter;
pub mod summary;
pub mod types;
pub mod validate;
