#![deny(unsafe_code)]

use crate::error::ModelError;

/// The four identifier fields carried by every raw row's first cell.
///
/// Fields are assigned positionally and deliberately not trimmed: only the
/// year and value stages trim their inputs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositeKey {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
}

impl CompositeKey {
    /// Split a raw first-cell value on `,` into exactly four fields.
    ///
    /// `row` is the zero-based data row index, used only for error reporting.
    pub fn parse(raw: &str, row: usize) -> Result<Self, ModelError> {
        let fields: Vec<&str> = raw.split(',').collect();
        if fields.len() != 4 {
            return Err(ModelError::MalformedKey {
                row,
                found: fields.len(),
                key: raw.to_string(),
            });
        }
        Ok(Self {
            unit: fields[0].to_string(),
            sex: fields[1].to_string(),
            age: fields[2].to_string(),
            region: fields[3].to_string(),
        })
    }
}

/// One cleaned long-format observation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LongRecord {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i32,
    pub value: f64,
}

/// The ordered output dataset: one record per retained (row, year) pair,
/// in reshape traversal order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LongTable {
    pub records: Vec<LongRecord>,
}

impl LongTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LongRecord) {
        self.records.push(record);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
