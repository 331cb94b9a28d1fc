use std::fmt;

use taxview_types::ParamPoint;

use super::currency;

/// Plain-text rendition of a parameter's yearly values, one row per year.
/// Missing values render as a dash so gaps stay visible in the table.
pub struct SeriesTableView<'a> {
    rows: &'a [ParamPoint],
    currency_symbol: &'a str,
}

impl<'a> SeriesTableView<'a> {
    pub fn new(rows: &'a [ParamPoint], currency_symbol: &'a str) -> Self {
        Self {
            rows,
            currency_symbol,
        }
    }
}

impl fmt::Display for SeriesTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<6}  {:>14}", "YEAR", "VALUE")?;
        for row in self.rows {
            let value = match row.value.as_f64() {
                Some(v) => currency::format_currency(v, self.currency_symbol),
                None => "-".to_string(),
            };
            writeln!(f, "{:<6}  {:>14}", row.year, value)?;
        }
        Ok(())
    }
}
