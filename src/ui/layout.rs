use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed chrome regions around the active view.
pub struct Regions {
    pub header: Rect,
    pub stats: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let stats_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(area.height.saturating_sub(header_height + stats_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let stats = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: stats_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + stats_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + stats_height + footer_height),
    };
    Regions {
        header,
        stats,
        body,
        footer,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_full_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };
        let regions = layout_regions(area);
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.stats.height, 3);
        assert_eq!(regions.footer.height, 3);
        assert_eq!(
            regions.header.height + regions.stats.height + regions.body.height + regions.footer.height,
            area.height
        );
        assert_eq!(regions.body.y, 6);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let regions = layout_regions(area);
        assert_eq!(regions.header.height, 2);
        assert_eq!(regions.stats.height, 0);
        assert_eq!(regions.body.height, 0);
    }
}
