use crate::process::{raw_table::RawTable, schema::*, utils::coerce_int};
use tracing::debug;

/// Convert trimmed string rows into typed records. Cells that fail integer
/// coercion become `None`; this never fails.
pub fn convert_to_records(table: &RawTable) -> Vec<Record> {
    let mut coerce_misses = 0usize;

    let mut int_cell = |row: &[String], idx: usize, line: u64| -> Option<i64> {
        let v = coerce_int(&row[idx]);
        if v.is_none() {
            coerce_misses += 1;
            debug!(line, column = COLUMN_NAMES[idx], value = %row[idx], "not an integer");
        }
        v
    };

    let records: Vec<Record> = table
        .rows
        .iter()
        .zip(&table.lines)
        .map(|(row, &line)| {
            let row = row.as_slice();
            Record {
                age: int_cell(row, AGE, line),
                workclass: row[WORKCLASS].clone(),
                fnlwgt: int_cell(row, FNLWGT, line),
                education: row[EDUCATION].clone(),
                education_num: int_cell(row, EDUCATION_NUM, line),
                marital_status: row[MARITAL_STATUS].clone(),
                occupation: row[OCCUPATION].clone(),
                relationship: row[RELATIONSHIP].clone(),
                race: row[RACE].clone(),
                sex: row[SEX].clone(),
                capital_gain: int_cell(row, CAPITAL_GAIN, line),
                capital_loss: int_cell(row, CAPITAL_LOSS, line),
                hours_per_week: int_cell(row, HOURS_PER_WEEK, line),
                native_country: row[NATIVE_COUNTRY].clone(),
                salary: row[SALARY].clone(),
            }
        })
        .collect();

    if coerce_misses > 0 {
        debug!(coerce_misses, "numeric cells coerced to null");
    }
    records
}
