use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::presenters::series::SeriesView;

/// Non-blocking warning shown when the selected series has missing years.
pub(crate) fn render(f: &mut Frame, area: Rect, view: &SeriesView) {
    let missing_years: Vec<String> = view
        .table_rows
        .iter()
        .filter(|point| point.value.is_missing())
        .map(|point| point.year.to_string())
        .collect();

    let line = Line::from(vec![
        Span::styled("⚠ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(
                "Some years have missing values ({}). These are excluded from the chart.",
                missing_years.join(", ")
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
