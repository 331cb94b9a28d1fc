use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::AppState;
use super::components;

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let view = state.current_view();
    let has_warning = view.as_ref().is_some_and(|v| v.has_missing);

    let mut constraints = vec![Constraint::Length(1), Constraint::Min(0)];
    if has_warning {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(chunks[1]);

    render_parameter_list(f, body[0], state);

    if let Some(view) = &view {
        // Table gets its natural height, chart the rest
        let table_height = (view.table_rows.len() as u16 + 3).min(body[1].height / 2);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(table_height)])
            .split(body[1]);

        components::chart::render(f, right[0], view);
        components::data_table::render(f, right[1], view, &state.currency_symbol);
    }

    let mut chunk_idx = 2;
    if has_warning {
        if let Some(view) = &view {
            components::banner::render(f, chunks[chunk_idx], view);
        }
        chunk_idx += 1;
    }
    render_footer(f, chunks[chunk_idx]);
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Tax Parameters",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        match state.selected_parameter() {
            Some(name) => Span::styled(
                format!(" → {}", name),
                Style::default().fg(Color::White),
            ),
            None => Span::raw(""),
        },
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(title), area);
}

fn render_parameter_list(f: &mut Frame, area: Rect, state: &mut AppState) {
    let items: Vec<ListItem> = state
        .parameters
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Parameters "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::LightCyan)),
        Span::styled(" select parameter  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::LightCyan)),
        Span::styled(" quit", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(footer), area);
}
