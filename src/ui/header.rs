use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::ViewMode;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TITLE_ACCENT};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title bar: product name, the endpoint being watched, and the view
    /// tabs with the active one highlighted.
    pub fn widget(&self, active: ViewMode, base_url: &str) -> Paragraph<'static> {
        let title_style = Style::default().fg(TITLE_ACCENT).add_modifier(Modifier::BOLD);
        let muted_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![
            Span::styled("  MetroWatch", title_style),
            Span::styled("  Metro Crowd Monitor", muted_style),
            Span::styled(format!("  ·  {}", base_url), muted_style),
            Span::styled("    ", muted_style),
        ];

        for view in ViewMode::ALL {
            let style = if view == active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                muted_style
            };
            spans.push(Span::styled(format!(" {} ", view.title()), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
