//! Summary strip: the four aggregate counters shown above every view.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::model::NetworkSnapshot;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_LOW, STATUS_MEDIUM, STATUS_PEAK, TITLE_ACCENT,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, snapshot: &NetworkSnapshot) {
    if area.height == 0 {
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let summary = &snapshot.summary;
    let entries = [
        (
            "Total Passengers",
            format_count(summary.total_passengers),
            TITLE_ACCENT,
        ),
        (
            "Active Trains",
            snapshot.trains.len().to_string(),
            STATUS_LOW,
        ),
        (
            "Peak Stations",
            summary.peak_stations.to_string(),
            STATUS_PEAK,
        ),
        (
            "Avg Wait Time",
            format!("{} min", summary.average_wait_time),
            STATUS_MEDIUM,
        ),
    ];

    for (cell, (title, value, accent)) in cells.iter().zip(entries) {
        let line = Line::from(vec![
            Span::styled(format!(" {}: ", title), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                value,
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(Span::styled("▎", Style::default().fg(accent))),
        );
        frame.render_widget(widget, *cell);
    }
}

/// Thousands-separated count, e.g. 1234567 -> "1,234,567".
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
