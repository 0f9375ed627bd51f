#![deny(unsafe_code)]

/// A raw tabular dataset as loaded from disk.
///
/// The first column holds the composite key; every remaining column is headed
/// by a year label. Cells are kept exactly as read; trimming happens in the
/// cleaning stages, not here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Headers of the year columns (everything after the composite key).
    pub fn year_headers(&self) -> &[String] {
        if self.headers.is_empty() {
            &[]
        } else {
            &self.headers[1..]
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
