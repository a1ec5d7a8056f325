use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, ViewMode};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT, TITLE_ACCENT};
use crate::ui::{stats, views};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let base_url = app.config().get().api.base_url;

    frame.render_widget(Header::new().widget(app.view(), &base_url), regions.header);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);

    let Some(snapshot) = app.snapshot() else {
        draw_connecting(frame, &base_url, regions.body);
        return;
    };

    stats::render(frame, regions.stats, snapshot);

    match app.view() {
        ViewMode::Map => views::map::render(
            frame,
            regions.body,
            snapshot,
            app.selected_station(),
            app.pulse_on(),
        ),
        ViewMode::Dashboard => views::dashboard::render(frame, regions.body, snapshot),
        ViewMode::Activity => {
            views::activity::render(frame, regions.body, &snapshot.stations, app.selected_station())
        }
    }
}

/// Shown until the first snapshot commits.
fn draw_connecting(frame: &mut Frame<'_>, base_url: &str, body: ratatui::layout::Rect) {
    let area = centered_rect(60, 20, body);
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::styled("Connecting to metro service…", Style::default().fg(TITLE_ACCENT)),
        Line::styled(base_url.to_string(), Style::default().fg(MUTED_TEXT)),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);
}
