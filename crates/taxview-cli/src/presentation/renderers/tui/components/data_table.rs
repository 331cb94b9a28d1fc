use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use taxview_types::CellValue;

use crate::presentation::formatters::currency;
use crate::presentation::presenters::series::SeriesView;

/// Raw rows for the selected parameter. Missing values stay in the table
/// (dimmed dash) even though the chart omits them.
pub(crate) fn render(f: &mut Frame, area: Rect, view: &SeriesView, currency_symbol: &str) {
    let header = Row::new(vec![
        Cell::from("Year").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Value").style(Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let rows: Vec<Row> = view
        .table_rows
        .iter()
        .map(|point| {
            let value_cell = match point.value {
                CellValue::Number(v) => Cell::from(currency::format_currency(v, currency_symbol)),
                CellValue::Missing => Cell::from("-").style(Style::default().fg(Color::DarkGray)),
            };
            Row::new(vec![Cell::from(point.year.to_string()), value_cell])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(12)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Data "),
        );

    f.render_widget(table, area);
}
