//! Derived metrics, heuristic impact estimates, and rule-based recommendations
//! for a single Tasking Manager project snapshot.

pub mod campaign;
pub mod config;
pub mod error;
pub mod telemetry;
