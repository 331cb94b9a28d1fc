use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Calendar year a parameter value applies to.
pub type Year = i32;

/// One wide-format row: a parameter label and one value per year column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRow {
    pub label: String,
    pub values: Vec<CellValue>,
}

/// The as-loaded wide-format table: one row per parameter, one column per
/// year. Invariant: every row holds exactly `years.len()` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamTable {
    /// Header of the identifier column, carried verbatim from the file.
    pub label_column: String,
    /// Year columns in file order.
    pub years: Vec<Year>,
    /// Parameter rows in file order.
    pub rows: Vec<ParamRow>,
}

impl ParamTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn year_count(&self) -> usize {
        self.years.len()
    }
}

/// A single (parameter, year, value) observation in long format; the unit
/// used for filtering and plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamPoint {
    pub parameter: String,
    pub year: Year,
    pub value: CellValue,
}

#[cfg(test)]
mod tests {
    use super::{ParamPoint, ParamRow, ParamTable};
    use crate::value::CellValue;

    fn sample_table() -> ParamTable {
        ParamTable {
            label_column: "Standard Deduction".to_string(),
            years: vec![2025, 2026],
            rows: vec![ParamRow {
                label: "Child Tax Credit".to_string(),
                values: vec![CellValue::Number(2000.0), CellValue::Missing],
            }],
        }
    }

    #[test]
    fn counts_reflect_shape() {
        let table = sample_table();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.year_count(), 2);
    }

    #[test]
    fn point_serializes_missing_value_as_null() {
        let point = ParamPoint {
            parameter: "Child Tax Credit".to_string(),
            year: 2026,
            value: CellValue::Missing,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "parameter": "Child Tax Credit",
                "year": 2026,
                "value": null,
            })
        );
    }
}
