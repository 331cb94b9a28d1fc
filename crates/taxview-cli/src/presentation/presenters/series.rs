//! Pure presenter: turns one selected parameter into everything the
//! renderers need, with no terminal access.

use taxview_core::ParamDataset;
use taxview_types::{ParamPoint, Year};

use crate::presentation::formatters::currency;

/// View model for one selected parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesView {
    pub parameter: String,
    /// (year, value) pairs with missing values omitted; the drawn line
    /// naturally gaps where years are absent.
    pub chart_points: Vec<(f64, f64)>,
    /// Every point including missing ones; the table shows them all.
    pub table_rows: Vec<ParamPoint>,
    /// Triggers the user-visible warning banner.
    pub has_missing: bool,
    /// X axis spans the full known year range, gaps included.
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// One tick label per known year.
    pub x_labels: Vec<String>,
    /// Currency-formatted tick labels for the value axis.
    pub y_labels: Vec<String>,
}

pub fn build_series_view(
    dataset: &ParamDataset,
    parameter: &str,
    currency_symbol: &str,
) -> SeriesView {
    let table_rows = dataset.series(parameter);
    let chart_points: Vec<(f64, f64)> = table_rows
        .iter()
        .filter_map(|point| point.value.as_f64().map(|v| (point.year as f64, v)))
        .collect();
    let has_missing = table_rows.iter().any(|point| point.value.is_missing());

    let x_bounds = year_bounds(dataset.years());
    let x_labels = dataset.years().iter().map(|year| year.to_string()).collect();
    let y_bounds = value_bounds(&chart_points);
    let y_labels = vec![
        currency::format_currency(y_bounds[0], currency_symbol),
        currency::format_currency((y_bounds[0] + y_bounds[1]) / 2.0, currency_symbol),
        currency::format_currency(y_bounds[1], currency_symbol),
    ];

    SeriesView {
        parameter: parameter.to_string(),
        chart_points,
        table_rows,
        has_missing,
        x_bounds,
        y_bounds,
        x_labels,
        y_labels,
    }
}

fn year_bounds(years: &[Year]) -> [f64; 2] {
    match (years.first(), years.last()) {
        (Some(first), Some(last)) if first != last => [*first as f64, *last as f64],
        (Some(only), _) => [*only as f64 - 1.0, *only as f64 + 1.0],
        _ => [0.0, 1.0],
    }
}

/// Pad the value range so the series never sits on the chart border. A
/// flat or empty series still gets a non-degenerate range.
fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (_, value) in points {
        min = min.min(*value);
        max = max.max(*value);
    }
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let span = (max - min).max(max.abs() * 0.05).max(1.0);
    [min - span * 0.1, max + span * 0.1]
}

#[cfg(test)]
mod tests {
    use super::build_series_view;
    use taxview_core::ParamDataset;
    use taxview_types::{CellValue, ParamRow, ParamTable};

    fn dataset_with_gap() -> ParamDataset {
        ParamDataset::from_table(ParamTable {
            label_column: "Parameter".to_string(),
            years: vec![2029, 2030, 2031],
            rows: vec![
                ParamRow {
                    label: "Estate Tax Exemption".to_string(),
                    values: vec![
                        CellValue::Number(15280000.0),
                        CellValue::Missing,
                        CellValue::Number(15970000.0),
                    ],
                },
                ParamRow {
                    label: "Child Tax Credit".to_string(),
                    values: vec![
                        CellValue::Number(2000.0),
                        CellValue::Number(2000.0),
                        CellValue::Number(2000.0),
                    ],
                },
            ],
        })
    }

    #[test]
    fn chart_gaps_where_the_table_still_shows_the_row() {
        let view = build_series_view(&dataset_with_gap(), "Estate Tax Exemption", "$");

        assert!(view.has_missing);
        // Table keeps all three years, missing one included
        assert_eq!(view.table_rows.len(), 3);
        assert!(view.table_rows.iter().any(|p| p.year == 2030 && p.value.is_missing()));
        // Chart skips x=2030
        assert_eq!(view.chart_points.len(), 2);
        assert!(view.chart_points.iter().all(|(x, _)| *x != 2030.0));
    }

    #[test]
    fn complete_series_has_no_warning() {
        let view = build_series_view(&dataset_with_gap(), "Child Tax Credit", "$");
        assert!(!view.has_missing);
        assert_eq!(view.chart_points.len(), 3);
    }

    #[test]
    fn unknown_parameter_yields_an_empty_view_without_warning() {
        let view = build_series_view(&dataset_with_gap(), "Nonexistent", "$");
        assert!(view.table_rows.is_empty());
        assert!(view.chart_points.is_empty());
        assert!(!view.has_missing);
        assert_eq!(view.y_bounds, [0.0, 1.0]);
    }

    #[test]
    fn x_axis_always_spans_the_full_year_range() {
        let view = build_series_view(&dataset_with_gap(), "Estate Tax Exemption", "$");
        assert_eq!(view.x_bounds, [2029.0, 2031.0]);
        assert_eq!(view.x_labels, vec!["2029", "2030", "2031"]);
    }

    #[test]
    fn y_labels_are_currency_formatted() {
        let view = build_series_view(&dataset_with_gap(), "Child Tax Credit", "$");
        assert_eq!(view.y_labels.len(), 3);
        assert!(view.y_labels.iter().all(|label| label.starts_with('$')));
        assert!(view.y_labels[1].contains("2,000"));
    }
}
