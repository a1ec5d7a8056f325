//! Dashboard: train detail cards on the left, peak-station cards on the
//! right. Card counts are capped by the projection helpers in
//! `super`; everything beyond the cap is simply not rendered.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::model::{NetworkSnapshot, Station, Train};
use crate::classify;
use crate::ui::theme::{
    BAR_TRACK, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_PEAK, TITLE_ACCENT,
};

const TRAIN_CARD_HEIGHT: u16 = 4;
const STATION_CARD_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame<'_>, area: Rect, snapshot: &NetworkSnapshot) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_trains(frame, columns[0], super::dashboard_trains(&snapshot.trains));
    render_peak_stations(frame, columns[1], &super::peak_stations(&snapshot.stations));
}

fn render_trains(frame: &mut Frame<'_>, area: Rect, trains: &[Train]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Train Status", Style::default().fg(TITLE_ACCENT)))
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (idx, train) in trains.iter().enumerate() {
        let Some(card) = card_rect(inner, idx, TRAIN_CARD_HEIGHT) else {
            break;
        };
        frame.render_widget(train_card(train, card.width as usize), card);
    }
}

fn train_card(train: &Train, width: usize) -> Paragraph<'static> {
    let rush = train.seat_rush_level;
    let title = Line::from(vec![
        Span::styled(
            train.id.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(rush.label(), Style::default().fg(classify::rush_color(rush))),
    ]);
    let detail = Line::from(vec![
        Span::styled("Occupancy: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!(
                "{}/{} ({}%)",
                train.current_occupancy, train.total_capacity, train.occupancy_percent
            ),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled("  Seats: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(train.available_seats.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled("  Next: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(train.next_station.clone(), Style::default().fg(HEADER_TEXT)),
    ]);

    Paragraph::new(vec![title, detail, bar_line(train.occupancy_percent, width)])
}

/// Occupancy bar: fill ratio equals the server-provided percent, clamped
/// to the 0-100 domain; color from the 70/40 thresholds.
fn bar_line(percent: f64, width: usize) -> Line<'static> {
    let filled = bar_fill(percent, width);
    Line::from(vec![
        Span::styled(
            "█".repeat(filled),
            Style::default().fg(classify::occupancy_color(percent)),
        ),
        Span::styled("░".repeat(width.saturating_sub(filled)), Style::default().fg(BAR_TRACK)),
    ])
}

fn bar_fill(percent: f64, width: usize) -> usize {
    (classify::occupancy_ratio(percent) * width as f64).round() as usize
}

fn render_peak_stations(frame: &mut Frame<'_>, area: Rect, stations: &[&Station]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Peak Stations", Style::default().fg(STATUS_PEAK)))
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if stations.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                " No stations at HIGH or PEAK right now.",
                Style::default().fg(MUTED_TEXT),
            )),
            inner,
        );
        return;
    }

    for (idx, station) in stations.iter().enumerate() {
        let Some(card) = card_rect(inner, idx, STATION_CARD_HEIGHT) else {
            break;
        };
        frame.render_widget(station_card(station), card);
    }
}

fn station_card(station: &Station) -> Paragraph<'static> {
    let title = Line::from(vec![
        Span::styled(
            station.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            station.status.label(),
            Style::default()
                .fg(classify::status_color(station.status))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let detail = Line::from(vec![
        Span::styled("Passengers: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(station.passengers.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled("  Wait: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(format!("{} min", station.wait_time), Style::default().fg(HEADER_TEXT)),
        Span::styled("  Line: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            station.line.label(),
            Style::default().fg(classify::line_color(station.line)),
        ),
    ]);

    Paragraph::new(vec![title, detail])
}

/// Rect for the idx-th stacked card, or None once the column is full.
fn card_rect(inner: Rect, idx: usize, card_height: u16) -> Option<Rect> {
    let y = inner.y + idx as u16 * card_height;
    if y + card_height > inner.y + inner.height {
        return None;
    }
    Some(Rect {
        x: inner.x + 1,
        y,
        width: inner.width.saturating_sub(2),
        height: card_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill_tracks_the_percent() {
        assert_eq!(bar_fill(0.0, 20), 0);
        assert_eq!(bar_fill(50.0, 20), 10);
        assert_eq!(bar_fill(100.0, 20), 20);
        assert_eq!(bar_fill(82.9, 10), 8);
    }

    #[test]
    fn bar_fill_clamps_out_of_domain_percents() {
        assert_eq!(bar_fill(140.0, 20), 20);
        assert_eq!(bar_fill(-5.0, 20), 0);
    }

    #[test]
    fn cards_stop_at_the_column_edge() {
        let inner = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 10,
        };
        assert!(card_rect(inner, 0, TRAIN_CARD_HEIGHT).is_some());
        assert!(card_rect(inner, 1, TRAIN_CARD_HEIGHT).is_some());
        // Third card would need rows 8..12; only 10 exist.
        assert!(card_rect(inner, 2, TRAIN_CARD_HEIGHT).is_none());
    }
}
