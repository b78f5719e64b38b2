//! Guided authoring and heuristic quality assessment for graduate
//! application documents.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
