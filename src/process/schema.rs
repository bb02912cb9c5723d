use crate::error::{AnalyzerError, Result};
use serde::Serialize;

/// Column order of the census extract. The header line in the file is only
/// checked for width; these names replace whatever it says.
pub const COLUMN_NAMES: [&str; 15] = [
    "age",
    "workclass",
    "fnlwgt",
    "education",
    "education-num",
    "marital-status",
    "occupation",
    "relationship",
    "race",
    "sex",
    "capital-gain",
    "capital-loss",
    "hours-per-week",
    "native-country",
    "salary",
];

pub const COLUMN_COUNT: usize = COLUMN_NAMES.len();

pub const AGE: usize = 0;
pub const WORKCLASS: usize = 1;
pub const FNLWGT: usize = 2;
pub const EDUCATION: usize = 3;
pub const EDUCATION_NUM: usize = 4;
pub const MARITAL_STATUS: usize = 5;
pub const OCCUPATION: usize = 6;
pub const RELATIONSHIP: usize = 7;
pub const RACE: usize = 8;
pub const SEX: usize = 9;
pub const CAPITAL_GAIN: usize = 10;
pub const CAPITAL_LOSS: usize = 11;
pub const HOURS_PER_WEEK: usize = 12;
pub const NATIVE_COUNTRY: usize = 13;
pub const SALARY: usize = 14;

/// One cleaned row. Numeric columns are `None` when the cell did not parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub age: Option<i64>,
    pub workclass: String,
    pub fnlwgt: Option<i64>,
    pub education: String,
    pub education_num: Option<i64>,
    pub marital_status: String,
    pub occupation: String,
    pub relationship: String,
    pub race: String,
    pub sex: String,
    pub capital_gain: Option<i64>,
    pub capital_loss: Option<i64>,
    pub hours_per_week: Option<i64>,
    pub native_country: String,
    pub salary: String,
}

/// Check the header width and hand back the canonical column names.
pub fn validate_header(header: &csv::StringRecord) -> Result<Vec<String>> {
    if header.len() != COLUMN_COUNT {
        return Err(AnalyzerError::Schema(format!(
            "expected {} header fields, found {}",
            COLUMN_COUNT,
            header.len()
        )));
    }
    Ok(COLUMN_NAMES.iter().map(|s| s.to_string()).collect())
}
