use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::presentation::presenters::series::SeriesView;

/// Line-plus-marker chart of one parameter over the full year range.
/// Missing years are absent from the data, so the line gaps there while
/// the x axis still shows every year.
pub(crate) fn render(f: &mut Frame, area: Rect, view: &SeriesView) {
    let datasets = vec![
        Dataset::default()
            .name(view.parameter.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&view.chart_points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::LightBlue))
            .data(&view.chart_points),
    ];

    let x_labels: Vec<Line> = view
        .x_labels
        .iter()
        .map(|label| Line::from(label.as_str()))
        .collect();
    let y_labels: Vec<Line> = view
        .y_labels
        .iter()
        .map(|label| Line::from(label.as_str()))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", view.parameter),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::DarkGray))
                .bounds(view.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(Style::default().fg(Color::DarkGray))
                .bounds(view.y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
