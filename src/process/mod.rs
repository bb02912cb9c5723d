// src/process/mod.rs
pub mod convert;
pub mod raw_table;
pub mod schema;
pub mod trimming;
pub mod utils;

use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::info;

use crate::error::{AnalyzerError, Result};
pub use raw_table::RawTable;
pub use schema::Record;

/// Open `path` and read the census table into memory.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_census_csv<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let file = File::open(&path).map_err(|e| AnalyzerError::io(path.as_ref(), e))?;
    load_census_reader(file)
}

/// Read a header line followed by comma-separated data rows.
///
/// Rows shorter than the schema are kept here and dropped by cleaning; rows
/// wider than the schema mean the file is not the table we expect.
pub fn load_census_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = schema::validate_header(rdr.headers()?)?;
    let mut table = RawTable {
        headers,
        ..Default::default()
    };

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.len() > schema::COLUMN_COUNT {
            return Err(AnalyzerError::Schema(format!(
                "line {} has {} fields, expected {}",
                line,
                record.len(),
                schema::COLUMN_COUNT
            )));
        }
        table.rows.push(record.iter().map(str::to_string).collect());
        table.lines.push(line);
    }

    info!(rows = table.len(), "loaded rows");
    Ok(table)
}

/// Drop incomplete rows, trim every cell and coerce numeric columns.
pub fn clean_table(mut table: RawTable) -> Vec<Record> {
    let dropped = trimming::drop_incomplete_rows(&mut table);
    trimming::apply_trimming(&mut table);
    let records = convert::convert_to_records(&table);
    info!(kept = records.len(), dropped, "cleaned table");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,demographic_analyzer::process=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    const HEADER: &str = "age,workclass,fnlwgt,education,education-num,marital-status,occupation,relationship,race,sex,capital-gain,capital-loss,hours-per-week,native-country,salary\n";

    #[test]
    fn test_load_and_clean_example() -> anyhow::Result<()> {
        init_test_logging();
        let content = format!(
            "{HEADER}\
39, State-gov, 77516, Bachelors, 13, Never-married, Adm-clerical, Not-in-family, White, Male, 2174, 0, 40, United-States, <=50K
50, Self-emp-not-inc, 83311, Bachelors, 13, Married-civ-spouse, Exec-managerial, Husband, White, Male, 0, 0, 13, United-States, <=50K
38, Private, 215646, HS-grad, 9
abc, Private, 234721, 11th, 7, Married-civ-spouse, Handlers-cleaners, Husband, Black, Male, 0, 0, 40, United-States, >50K

"
        );

        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;

        let raw = load_census_csv(tmp.path())?;
        assert_eq!(raw.headers[13], "native-country");
        assert_eq!(raw.len(), 4);

        let records = clean_table(raw);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].workclass, "State-gov");
        assert_eq!(records[1].hours_per_week, Some(13));
        assert_eq!(records[2].age, None);
        assert_eq!(records[2].salary, ">50K");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_not_found() {
        let err = load_census_csv("definitely/not/here.csv").unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }

    #[test]
    fn test_narrow_header_is_schema_error() {
        let content = "a,b,c\n1,2,3\n";
        let err = load_census_reader(Cursor::new(content)).unwrap_err();
        assert!(matches!(err, AnalyzerError::Schema(_)));
    }

    #[test]
    fn test_empty_input_is_schema_error() {
        let err = load_census_reader(Cursor::new("")).unwrap_err();
        assert!(matches!(err, AnalyzerError::Schema(_)));
    }

    #[test]
    fn test_wide_row_is_schema_error() {
        let content = format!("{HEADER}{}\n", vec!["1"; 16].join(","));
        let err = load_census_reader(Cursor::new(content)).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
