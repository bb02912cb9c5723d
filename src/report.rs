use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::analysis::DemographicReport;

fn fmt_pct(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.1}", v),
        None => "NaN".to_string(),
    }
}

fn fmt_label(v: Option<&str>) -> &str {
    v.unwrap_or("n/a")
}

fn race_table(report: &DemographicReport) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(vec![
        Cell::new("Race").style_spec("bFg"),
        Cell::new("Count").style_spec("bFg"),
    ]));
    for (race, n) in report.race_count.iter() {
        table.add_row(Row::new(vec![
            Cell::new(race),
            Cell::new(&n.to_string()).style_spec("r"),
        ]));
    }
    table
}

/// Human-readable rendering of every statistic.
pub fn render_report(report: &DemographicReport) -> String {
    let min_hours = report
        .min_work_hours
        .map(|h| h.to_string())
        .unwrap_or_else(|| "NaN".to_string());

    format!(
        "Number of each race:\n\
         {races}\
         Average age of men: {age}\n\
         Percentage with Bachelors degrees: {bachelors}%\n\
         Percentage with higher education that earn >50K: {higher}%\n\
         Percentage without higher education that earn >50K: {lower}%\n\
         Min work time: {min_hours} hours/week\n\
         Percentage of rich among those who work fewest hours: {rich}%\n\
         Country with highest percentage of rich: {country}\n\
         Highest percentage of rich people in country: {country_pct}%\n\
         Top occupations in India: {occupation}\n",
        races = race_table(report),
        age = fmt_pct(report.average_age_men),
        bachelors = fmt_pct(report.percentage_bachelors),
        higher = fmt_pct(report.higher_education_rich),
        lower = fmt_pct(report.lower_education_rich),
        rich = fmt_pct(report.rich_percentage),
        country = fmt_label(report.highest_earning_country.as_deref()),
        country_pct = fmt_pct(report.highest_earning_country_percentage),
        occupation = fmt_label(report.top_in_occupation.as_deref()),
    )
}

pub fn print_report(report: &DemographicReport) {
    print!("{}", render_report(report));
}

/// Serialized layout for exported reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// `.yaml`/`.yml` → YAML, anything else → JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ExportFormat::Yaml
            }
            _ => ExportFormat::Json,
        }
    }
}

pub fn serialize_report(report: &DemographicReport, fmt: ExportFormat) -> Result<String> {
    let mut text = match fmt {
        ExportFormat::Json => {
            serde_json::to_string_pretty(report).context("serializing report as JSON")?
        }
        ExportFormat::Yaml => serde_yaml::to_string(report).context("serializing report as YAML")?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Write the report next to `path` first, then rename over it.
pub fn write_report<P: AsRef<Path>>(report: &DemographicReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let text = serialize_report(report, ExportFormat::from_path(path))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "report".to_string());
    let tmp_path: PathBuf = path.with_file_name(format!(".{}.tmp", file_name));

    let written = fs::File::create(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))
        .and_then(|mut tmp| {
            tmp.write_all(text.as_bytes())
                .with_context(|| format!("writing {}", tmp_path.display()))
        })
        .and_then(|()| {
            fs::rename(&tmp_path, path)
                .with_context(|| format!("renaming {} -> {}", tmp_path.display(), path.display()))
        });

    if written.is_err() && tmp_path.exists() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}
