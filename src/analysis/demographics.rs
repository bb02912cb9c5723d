use serde::Serialize;
use tracing::warn;

use crate::analysis::stats::{
    first_max, group_rates, mean, rate_where, round1, value_counts, ValueCounts,
};
use crate::process::Record;

pub const RICH_SALARY: &str = ">50K";
pub const MALE: &str = "Male";
pub const BACHELORS: &str = "Bachelors";
pub const HIGHER_EDUCATION: [&str; 3] = ["Bachelors", "Masters", "Doctorate"];
pub const INDIA: &str = "India";

/// The ten statistics of one run. `None` marks a value that is undefined for
/// the input, e.g. a mean or percentage over zero rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicReport {
    pub race_count: ValueCounts,
    pub average_age_men: Option<f64>,
    pub percentage_bachelors: Option<f64>,
    pub higher_education_rich: Option<f64>,
    pub lower_education_rich: Option<f64>,
    pub min_work_hours: Option<i64>,
    pub rich_percentage: Option<f64>,
    pub highest_earning_country: Option<String>,
    pub highest_earning_country_percentage: Option<f64>,
    #[serde(rename = "top_IN_occupation")]
    pub top_in_occupation: Option<String>,
}

fn is_rich(r: &Record) -> bool {
    r.salary == RICH_SALARY
}

fn is_higher_education(r: &Record) -> bool {
    HIGHER_EDUCATION.contains(&r.education.as_str())
}

pub fn race_count(records: &[Record]) -> ValueCounts {
    value_counts(records.iter().map(|r| r.race.as_str()))
}

pub fn average_age_men(records: &[Record]) -> Option<f64> {
    mean(records.iter().filter(|r| r.sex == MALE).filter_map(|r| r.age)).map(round1)
}

pub fn percentage_bachelors(records: &[Record]) -> Option<f64> {
    rate_where(records, |r| r.education == BACHELORS).map(round1)
}

/// `>50K` share among rows with and without advanced education.
pub fn education_rich(records: &[Record]) -> (Option<f64>, Option<f64>) {
    let (higher, lower): (Vec<&Record>, Vec<&Record>) =
        records.iter().partition(|r| is_higher_education(r));
    (
        rate_where(higher.iter().copied(), is_rich).map(round1),
        rate_where(lower.iter().copied(), is_rich).map(round1),
    )
}

pub fn min_work_hours(records: &[Record]) -> Option<i64> {
    records.iter().filter_map(|r| r.hours_per_week).min()
}

/// `>50K` share among the rows working exactly `min_hours`.
pub fn rich_percentage(records: &[Record], min_hours: Option<i64>) -> Option<f64> {
    let min_hours = min_hours?;
    rate_where(
        records.iter().filter(|r| r.hours_per_week == Some(min_hours)),
        is_rich,
    )
    .map(round1)
}

/// Country with the highest `>50K` share. Countries are compared in sorted
/// order and the first one reaching the maximum wins.
pub fn highest_earning_country(records: &[Record]) -> Option<(String, f64)> {
    let rates = group_rates(records, |r| r.native_country.as_str(), is_rich);
    first_max(&rates).map(|(country, pct)| (country.to_string(), round1(pct)))
}

pub fn top_in_occupation(records: &[Record]) -> Option<String> {
    let counts = value_counts(
        records
            .iter()
            .filter(|r| r.native_country == INDIA && is_rich(r))
            .map(|r| r.occupation.as_str()),
    );
    counts.top().map(|(occupation, _)| occupation.to_string())
}

/// Run every statistic over the cleaned table.
pub fn compute_report(records: &[Record]) -> DemographicReport {
    let (higher_education_rich, lower_education_rich) = education_rich(records);
    let min_hours = min_work_hours(records);
    let (country, country_pct) = highest_earning_country(records).unzip();

    let report = DemographicReport {
        race_count: race_count(records),
        average_age_men: average_age_men(records),
        percentage_bachelors: percentage_bachelors(records),
        higher_education_rich,
        lower_education_rich,
        min_work_hours: min_hours,
        rich_percentage: rich_percentage(records, min_hours),
        highest_earning_country: country,
        highest_earning_country_percentage: country_pct,
        top_in_occupation: top_in_occupation(records),
    };

    for name in report.undefined_fields() {
        warn!(statistic = name, "undefined for this input");
    }
    report
}

impl DemographicReport {
    /// Names of the statistics that came out as `None`.
    pub fn undefined_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("average_age_men", self.average_age_men.is_none()),
            ("percentage_bachelors", self.percentage_bachelors.is_none()),
            ("higher_education_rich", self.higher_education_rich.is_none()),
            ("lower_education_rich", self.lower_education_rich.is_none()),
            ("min_work_hours", self.min_work_hours.is_none()),
            ("rich_percentage", self.rich_percentage.is_none()),
            ("highest_earning_country", self.highest_earning_country.is_none()),
            ("top_IN_occupation", self.top_in_occupation.is_none()),
        ];
        checks
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }

    /// Every percentage-valued field, for range checks.
    pub fn percentages(&self) -> [Option<f64>; 5] {
        [
            self.percentage_bachelors,
            self.higher_education_rich,
            self.lower_education_rich,
            self.rich_percentage,
            self.highest_earning_country_percentage,
        ]
    }
}
