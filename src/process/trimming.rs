use crate::process::{raw_table::RawTable, schema::COLUMN_COUNT, utils::clean_str};
use tracing::debug;

/// Cell texts read as missing values, matched exactly as they appear in the
/// file (so `" NA"` with its leading space is an ordinary value).
pub const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

/// Remove rows that are missing cells: too few fields, or a field that is
/// empty or one of `MISSING_TOKENS`. Returns how many rows were dropped.
pub fn drop_incomplete_rows(table: &mut RawTable) -> usize {
    let before = table.rows.len();
    let mut kept_rows = Vec::with_capacity(before);
    let mut kept_lines = Vec::with_capacity(before);

    for (row, line) in table.rows.drain(..).zip(table.lines.drain(..)) {
        if row.len() < COLUMN_COUNT || row.iter().any(|cell| is_missing(cell)) {
            debug!(line, fields = row.len(), "dropping incomplete row");
            continue;
        }
        kept_rows.push(row);
        kept_lines.push(line);
    }

    table.rows = kept_rows;
    table.lines = kept_lines;
    before - table.rows.len()
}

/// Trim every cell in place.
pub fn apply_trimming(table: &mut RawTable) {
    for cell in table.rows.iter_mut().flat_map(|row| row.iter_mut()) {
        if cell.trim().len() != cell.len() {
            *cell = clean_str(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(fill: &str) -> Vec<String> {
        vec![fill.to_string(); COLUMN_COUNT]
    }

    #[test]
    fn test_drop_incomplete_rows() {
        let mut short = full_row("x");
        short.truncate(3);
        let mut hole = full_row("x");
        hole[5] = String::new();

        let mut table = RawTable {
            headers: Vec::new(),
            rows: vec![full_row("a"), short, hole, vec![String::new()], full_row(" b ")],
            lines: vec![2, 3, 4, 5, 6],
        };

        assert_eq!(drop_incomplete_rows(&mut table), 3);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.lines, vec![2, 6]);
    }

    #[test]
    fn test_whitespace_only_cell_survives_then_trims_to_empty() {
        let mut row = full_row(" x ");
        row[1] = "  ".to_string();
        let mut table = RawTable {
            headers: Vec::new(),
            rows: vec![row],
            lines: vec![2],
        };

        assert_eq!(drop_incomplete_rows(&mut table), 0);
        apply_trimming(&mut table);
        assert_eq!(table.rows[0][0], "x");
        assert_eq!(table.rows[0][1], "");
    }

    #[test]
    fn test_missing_tokens_drop_the_row() {
        let mut na_age = full_row("x");
        na_age[0] = "NA".to_string();
        let mut null_country = full_row("x");
        null_country[13] = "null".to_string();
        let mut padded = full_row("x");
        padded[0] = " NA".to_string();

        let mut table = RawTable {
            headers: Vec::new(),
            rows: vec![na_age, null_country, padded, full_row("y")],
            lines: vec![2, 3, 4, 5],
        };

        assert_eq!(drop_incomplete_rows(&mut table), 2);
        assert_eq!(table.lines, vec![4, 5]);
        assert!(is_missing("N/A"));
        assert!(!is_missing("?"));
    }
}
