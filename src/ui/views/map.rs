//! Network map: decorative line tracks, one dot per station at its
//! server-supplied coordinates, and up to six train markers laid out by
//! list order. Train markers do not reflect real position; the slot
//! layout is fixed and kept stable for compatibility.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as Track, Rectangle};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::model::{CrowdStatus, NetworkSnapshot, Station};
use crate::classify;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, LINE_BLUE, LINE_GREEN, LINE_RED, MUTED_TEXT,
    TITLE_ACCENT,
};

/// Server map space: 700x600, y growing downward. The canvas y axis
/// grows upward, so every y is flipped on the way in.
const MAP_WIDTH: f64 = 700.0;
const MAP_HEIGHT: f64 = 600.0;

/// Static decorative track geometry; not data-driven.
const TRACKS: [((f64, f64), (f64, f64), Color); 3] = [
    ((50.0, 30.0), (250.0, 150.0), LINE_RED),
    ((650.0, 350.0), (250.0, 180.0), LINE_GREEN),
    ((100.0, 200.0), (250.0, 230.0), LINE_BLUE),
];

const TRAIN_MARKER_WIDTH: f64 = 30.0;
const TRAIN_MARKER_HEIGHT: f64 = 15.0;

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &NetworkSnapshot,
    selected: usize,
    pulse_on: bool,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled("Network Map", Style::default().fg(TITLE_ACCENT)))
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, MAP_WIDTH])
        .y_bounds([0.0, MAP_HEIGHT])
        .paint(|ctx| paint_network(ctx, snapshot, pulse_on));
    frame.render_widget(canvas, columns[0]);

    render_station_panel(frame, columns[1], &snapshot.stations, selected);
}

fn paint_network(ctx: &mut Context<'_>, snapshot: &NetworkSnapshot, pulse_on: bool) {
    for ((x1, y1), (x2, y2), color) in TRACKS {
        ctx.draw(&Track {
            x1,
            y1: flip(y1),
            x2,
            y2: flip(y2),
            color,
        });
    }
    ctx.layer();

    for station in &snapshot.stations {
        ctx.draw(&Circle {
            x: station.x,
            y: flip(station.y),
            radius: station_radius(station.status, pulse_on),
            color: classify::status_color(station.status),
        });
        // Label sits above the dot.
        ctx.print(
            station.x,
            flip(station.y) + 15.0,
            Line::styled(truncate_name(&station.name), Style::default().fg(HEADER_TEXT)),
        );
    }

    for (idx, train) in super::map_trains(&snapshot.trains).iter().enumerate() {
        let (x, y) = train_slot(idx);
        let color = classify::train_marker_color(train.line);
        ctx.draw(&Rectangle {
            x,
            y: flip(y + TRAIN_MARKER_HEIGHT),
            width: TRAIN_MARKER_WIDTH,
            height: TRAIN_MARKER_HEIGHT,
            color,
        });
        ctx.print(
            x + TRAIN_MARKER_WIDTH / 2.0,
            flip(y + TRAIN_MARKER_HEIGHT / 2.0),
            Line::styled(marker_label(&train.id), Style::default().fg(color)),
        );
    }
}

fn render_station_panel(frame: &mut Frame<'_>, area: Rect, stations: &[Station], selected: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Stations", Style::default().fg(TITLE_ACCENT)))
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner_height = block.inner(area).height as usize;

    // Keep the cursor visible inside the panel.
    let offset = if inner_height == 0 {
        0
    } else {
        selected.saturating_sub(inner_height.saturating_sub(1))
    };

    let lines: Vec<Line> = stations
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner_height)
        .map(|(idx, station)| {
            let mut line = Line::from(vec![
                Span::styled(
                    format!(" {:<18}", truncate_name(&station.name)),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(
                    format!("{:<8}", station.status.label()),
                    Style::default()
                        .fg(classify::status_color(station.status))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>5} ", station.passengers),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(
                    classify::trend_glyph(station.trend),
                    Style::default().fg(classify::trend_color(station.trend)),
                ),
            ]);
            if idx == selected {
                line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            line
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn flip(y: f64) -> f64 {
    MAP_HEIGHT - y
}

/// PEAK dots are enlarged and pulse with the UI tick; everything else is
/// a fixed-size dot.
fn station_radius(status: CrowdStatus, pulse_on: bool) -> f64 {
    match status {
        CrowdStatus::Peak if pulse_on => 13.0,
        CrowdStatus::Peak => 10.0,
        _ => 8.0,
    }
}

/// Layout slot for the idx-th train marker, in server coordinates
/// (pre-flip): x walks right in steps of 100, y cycles three rows.
fn train_slot(idx: usize) -> (f64, f64) {
    (100.0 + idx as f64 * 100.0, 300.0 + (idx % 3) as f64 * 80.0)
}

/// Markers carry the numeric part of the train id ("T104" -> "104").
fn marker_label(id: &str) -> String {
    id.chars().skip(1).collect()
}

/// Long station names are shortened to keep map labels readable.
fn truncate_name(name: &str) -> String {
    if name.chars().count() > 15 {
        let short: String = name.chars().take(12).collect();
        format!("{}...", short)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn train_slots_walk_right_and_cycle_rows() {
        assert_eq!(train_slot(0), (100.0, 300.0));
        assert_eq!(train_slot(1), (200.0, 380.0));
        assert_eq!(train_slot(2), (300.0, 460.0));
        assert_eq!(train_slot(3), (400.0, 300.0));
        assert_eq!(train_slot(5), (600.0, 460.0));
    }

    #[test]
    fn flip_inverts_the_y_axis() {
        assert_eq!(flip(0.0), 600.0);
        assert_eq!(flip(600.0), 0.0);
        assert_eq!(flip(150.0), 450.0);
    }

    #[test]
    fn peak_dots_are_enlarged_and_pulse() {
        assert_eq!(station_radius(CrowdStatus::Low, false), 8.0);
        assert_eq!(station_radius(CrowdStatus::High, true), 8.0);
        assert_eq!(station_radius(CrowdStatus::Peak, false), 10.0);
        assert_eq!(station_radius(CrowdStatus::Peak, true), 13.0);
    }

    #[test]
    fn long_names_are_truncated_with_ellipsis() {
        assert_eq!(truncate_name("Ameerpet"), "Ameerpet");
        assert_eq!(truncate_name("Secunderabad East"), "Secunderabad...");
        // Exactly fifteen chars passes through untouched.
        assert_eq!(truncate_name("123456789012345"), "123456789012345");
    }

    #[test]
    fn marker_label_strips_the_prefix() {
        assert_eq!(marker_label("T104"), "104");
        assert_eq!(marker_label(""), "");
    }
}
