//! Wide-to-long reshape.

use taxview_types::{ParamPoint, ParamTable};

/// Melt a wide table into long format: one point per (row, year column)
/// pair, ordered by row order then year-column order. Values pass through
/// unchanged, including missing ones.
pub fn melt(table: &ParamTable) -> Vec<ParamPoint> {
    let mut points = Vec::with_capacity(table.row_count() * table.year_count());
    for row in &table.rows {
        for (year, value) in table.years.iter().zip(&row.values) {
            points.push(ParamPoint {
                parameter: row.label.clone(),
                year: *year,
                value: *value,
            });
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::melt;
    use taxview_types::{CellValue, ParamRow, ParamTable};

    fn table(rows: Vec<(&str, Vec<CellValue>)>, years: Vec<i32>) -> ParamTable {
        ParamTable {
            label_column: "Parameter".to_string(),
            years,
            rows: rows
                .into_iter()
                .map(|(label, values)| ParamRow {
                    label: label.to_string(),
                    values,
                })
                .collect(),
        }
    }

    #[test]
    fn yields_one_point_per_row_column_pair() {
        let table = table(
            vec![
                ("A", vec![CellValue::Number(1.0), CellValue::Number(2.0)]),
                ("B", vec![CellValue::Number(3.0), CellValue::Missing]),
                ("C", vec![CellValue::Number(5.0), CellValue::Number(6.0)]),
            ],
            vec![2025, 2026],
        );
        let points = melt(&table);
        assert_eq!(points.len(), 3 * 2);
    }

    #[test]
    fn order_is_row_major() {
        let table = table(
            vec![
                ("A", vec![CellValue::Number(1.0), CellValue::Number(2.0)]),
                ("B", vec![CellValue::Number(3.0), CellValue::Number(4.0)]),
            ],
            vec![2025, 2026],
        );
        let points = melt(&table);
        let order: Vec<(&str, i32)> = points
            .iter()
            .map(|p| (p.parameter.as_str(), p.year))
            .collect();
        assert_eq!(
            order,
            vec![("A", 2025), ("A", 2026), ("B", 2025), ("B", 2026)]
        );
    }

    #[test]
    fn melts_the_standard_deduction_example() {
        let table = table(
            vec![(
                "Standard Deduction (Single)",
                vec![CellValue::Number(15000.0), CellValue::Number(15300.0)],
            )],
            vec![2025, 2026],
        );
        let points = melt(&table);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].parameter, "Standard Deduction (Single)");
        assert_eq!(points[0].year, 2025);
        assert_eq!(points[0].value, CellValue::Number(15000.0));
        assert_eq!(points[1].year, 2026);
        assert_eq!(points[1].value, CellValue::Number(15300.0));
    }

    #[test]
    fn missing_values_pass_through() {
        let table = table(vec![("A", vec![CellValue::Missing])], vec![2030]);
        let points = melt(&table);
        assert!(points[0].value.is_missing());
    }
}
