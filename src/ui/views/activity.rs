//! Activity log: the full station table, uncapped, with a selection
//! cursor for scrolling.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::api::model::Station;
use crate::classify;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TITLE_ACCENT};

pub fn render(frame: &mut Frame<'_>, area: Rect, stations: &[Station], selected: usize) {
    let header = Row::new(
        ["Station", "Line", "Status", "Passengers", "Trend", "Wait Time"]
            .map(|title| Cell::from(Span::styled(title, Style::default().fg(MUTED_TEXT)))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows = stations.iter().map(|station| {
        Row::new(vec![
            Cell::from(Span::styled(
                station.name.clone(),
                Style::default().fg(HEADER_TEXT),
            )),
            Cell::from(Span::styled(
                station.line.label(),
                Style::default().fg(classify::line_color(station.line)),
            )),
            Cell::from(Span::styled(
                station.status.label(),
                Style::default()
                    .fg(classify::status_color(station.status))
                    .add_modifier(Modifier::BOLD),
            )),
            Cell::from(station.passengers.to_string()),
            Cell::from(Line::from(Span::styled(
                format!(
                    "{} {}",
                    classify::trend_glyph(station.trend),
                    station.trend.label()
                ),
                Style::default().fg(classify::trend_color(station.trend)),
            ))),
            Cell::from(format!("{} min", station.wait_time)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                "Network Activity",
                Style::default().fg(TITLE_ACCENT),
            ))
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
    .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if !stations.is_empty() {
        state.select(Some(selected.min(stations.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
