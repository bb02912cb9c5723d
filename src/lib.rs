//! Summary statistics over the census "adult" extract: load the CSV, clean
//! it, compute ten demographic aggregates and hand them back as a
//! [`DemographicReport`].

pub mod analysis;
pub mod config;
pub mod error;
pub mod process;
pub mod report;

pub use analysis::{DemographicReport, ValueCounts};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, Result};

use tracing::info;

/// Load, clean and summarize the table named by `config`.
#[tracing::instrument(level = "info", skip(config), fields(path = %config.source_path.display()))]
pub fn analyze(config: &AnalyzerConfig) -> Result<DemographicReport> {
    let raw = process::load_census_csv(&config.source_path)?;
    let records = process::clean_table(raw);
    let report = analysis::compute_report(&records);
    info!(rows = records.len(), races = report.race_count.len(), "computed statistics");

    if config.print_data {
        report::print_report(&report);
    }
    Ok(report)
}

/// Run against the default `adult.data.csv` in the working directory.
pub fn calculate_demographic_data(print_data: bool) -> Result<DemographicReport> {
    analyze(&AnalyzerConfig::default().with_print_data(print_data))
}
