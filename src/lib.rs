//! Deterministic per-student question generation core.
//!
//! Given an approved question template (text with `{name}` placeholders,
//! numeric variables, a correct-answer formula and distractor formulas),
//! [`generator::generate`] produces a personalized question instance keyed
//! off the student's roll number and the question's position in the test.
//! The same inputs always produce the same output; different students get
//! different numbers.
//!
//! The core performs no I/O. Persistence and HTTP belong to the surrounding
//! platform.

pub mod assembly;
pub mod config;
pub mod constants;
pub mod generator;
pub mod logging;
pub mod types;
pub mod validation;
