//! Wide-table CSV loader.
//!
//! All structural and type validation happens here, at the boundary:
//! year headers must parse as integers, value cells must be numeric or
//! blank, and every row must have exactly one value per year column.
//! Downstream code only ever sees a well-formed [`ParamTable`].

use std::path::Path;

use taxview_types::{CellValue, Error, ParamRow, ParamTable, Result, Year};

/// Read a wide-format parameter table from a delimited file with a header
/// row of `<label column>, <year>, <year>, ...`.
pub fn load_table(path: &Path) -> Result<ParamTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(map_csv_error)?;

    let headers = reader.headers().map_err(map_csv_error)?.clone();
    let mut header_fields = headers.iter();
    let label_column = match header_fields.next() {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => {
            return Err(Error::Parse {
                line: 1,
                message: "missing identifier column in header".to_string(),
            });
        }
    };

    let mut years: Vec<Year> = Vec::new();
    for column in header_fields {
        let column = column.trim();
        let year: Year = column.parse().map_err(|_| Error::YearHeader {
            column: column.to_string(),
        })?;
        years.push(year);
    }
    if years.is_empty() {
        return Err(Error::Parse {
            line: 1,
            message: "header has no year columns".to_string(),
        });
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(map_csv_error)?;
        // 1-based file line, counting the header
        let line = index + 2;

        let mut fields = record.iter();
        let label = match fields.next() {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => {
                return Err(Error::Parse {
                    line,
                    message: "empty parameter label".to_string(),
                });
            }
        };

        let mut values = Vec::with_capacity(years.len());
        for (year, cell) in years.iter().zip(fields) {
            let value = parse_cell(cell).ok_or_else(|| Error::Parse {
                line,
                message: format!("non-numeric value '{}' in column {}", cell.trim(), year),
            })?;
            values.push(value);
        }

        rows.push(ParamRow { label, values });
    }

    Ok(ParamTable {
        label_column,
        years,
        rows,
    })
}

/// Parse one value cell. Blank cells are `Missing`; currency decoration
/// (`$` prefix, thousands commas) is stripped before numeric parsing.
/// Returns `None` for anything that still fails to parse.
fn parse_cell(raw: &str) -> Option<CellValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(CellValue::Missing);
    }
    let normalized: String = trimmed
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    normalized.parse::<f64>().ok().map(CellValue::Number)
}

fn map_csv_error(err: csv::Error) -> Error {
    let line = err.position().map(|pos| pos.line() as usize).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => Error::Parse {
            line,
            message: format!("expected {} fields, found {}", expected_len, len),
        },
        kind => Error::Parse {
            line,
            message: format!("malformed CSV: {:?}", kind),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::parse_cell;
    use taxview_types::CellValue;

    #[test]
    fn blank_cells_are_missing() {
        assert_eq!(parse_cell(""), Some(CellValue::Missing));
        assert_eq!(parse_cell("   "), Some(CellValue::Missing));
    }

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_cell("15000"), Some(CellValue::Number(15000.0)));
        assert_eq!(parse_cell("0.5"), Some(CellValue::Number(0.5)));
        assert_eq!(parse_cell("-750"), Some(CellValue::Number(-750.0)));
    }

    #[test]
    fn currency_decoration_is_stripped() {
        assert_eq!(parse_cell("$15,000"), Some(CellValue::Number(15000.0)));
        assert_eq!(parse_cell("13,990,000"), Some(CellValue::Number(13990000.0)));
    }

    #[test]
    fn non_numeric_cells_are_rejected() {
        assert_eq!(parse_cell("n/a"), None);
        assert_eq!(parse_cell("12abc"), None);
    }
}
