use serde::{Deserialize, Serialize};

/// A single table cell: either a numeric value or an explicitly missing one.
///
/// Missing cells are tagged at load time so downstream code never has to
/// guess what an empty string means. Serializes as a JSON number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// The numeric value, or `None` when missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Missing => None,
        }
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => CellValue::Number(v),
            None => CellValue::Missing,
        }
    }
}
