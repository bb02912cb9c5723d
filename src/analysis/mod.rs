pub mod demographics;
pub mod stats;

pub use demographics::{compute_report, DemographicReport};
pub use stats::ValueCounts;
