//! Greedy sentence coverage.

pub mod planner;
pub mod result;

pub use self::planner::{CoveragePlanner, DEFAULT_MAX_SENTENCES};
pub use self::result::{CoveragePlan, CoverageResult, fallback_sentence};
