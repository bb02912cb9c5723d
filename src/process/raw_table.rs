#[derive(Debug, Default)]
pub struct RawTable {
    /// Canonical column names; the file's own header text is discarded.
    pub headers: Vec<String>,
    /// Each data row as read, one String per field. Rows may be short until
    /// `drop_incomplete_rows` has run.
    pub rows: Vec<Vec<String>>,
    /// 1-based line number in the source for each entry of `rows`.
    pub lines: Vec<u64>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
