//! Pure presentation mappings for server-supplied classifications.
//!
//! Everything here is a stateless input-to-output table; the poll cycle
//! and the renderer both stay out of it.

use ratatui::style::Color;

use crate::api::model::{CrowdStatus, MetroLine, RushLevel, Trend};
use crate::ui::theme;

/// Fixed four-color palette per status, neutral gray for anything the
/// server sends that we don't recognize.
pub fn status_color(status: CrowdStatus) -> Color {
    match status {
        CrowdStatus::Low => theme::STATUS_LOW,
        CrowdStatus::Medium => theme::STATUS_MEDIUM,
        CrowdStatus::High => theme::STATUS_HIGH,
        CrowdStatus::Peak => theme::STATUS_PEAK,
        CrowdStatus::Unknown => theme::STATUS_NEUTRAL,
    }
}

pub fn trend_glyph(trend: Trend) -> &'static str {
    match trend {
        Trend::Increasing => "↑",
        Trend::Decreasing => "↓",
        Trend::Stable => "→",
    }
}

pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Increasing => theme::TREND_UP,
        Trend::Decreasing => theme::TREND_DOWN,
        Trend::Stable => theme::TREND_FLAT,
    }
}

pub fn rush_color(rush: RushLevel) -> Color {
    match rush {
        RushLevel::Low => theme::RUSH_LOW,
        RushLevel::Moderate => theme::RUSH_MODERATE,
        RushLevel::High => theme::RUSH_HIGH,
    }
}

/// Occupancy-bar color: >70 red, >40 amber, else green. Boundaries are
/// strict, matching the server's own rush thresholds.
pub fn occupancy_color(percent: f64) -> Color {
    if percent > 70.0 {
        theme::STATUS_PEAK
    } else if percent > 40.0 {
        theme::STATUS_MEDIUM
    } else {
        theme::STATUS_LOW
    }
}

/// Occupancy-bar fill as a 0..=1 ratio. The server promises 0-100 but the
/// clamp keeps a misbehaving payload from overflowing the bar.
pub fn occupancy_ratio(percent: f64) -> f64 {
    (percent / 100.0).clamp(0.0, 1.0)
}

/// Line color for station badges; an unknown line renders blue.
pub fn line_color(line: MetroLine) -> Color {
    match line {
        MetroLine::Red => theme::LINE_RED,
        MetroLine::Green => theme::LINE_GREEN,
        MetroLine::Blue => theme::LINE_BLUE,
        MetroLine::Unknown => theme::LINE_BLUE,
    }
}

/// Line color for train map markers; unknown lines render neutral gray.
pub fn train_marker_color(line: MetroLine) -> Color {
    match line {
        MetroLine::Red => theme::LINE_RED,
        MetroLine::Green => theme::LINE_GREEN,
        MetroLine::Blue => theme::LINE_BLUE,
        MetroLine::Unknown => theme::STATUS_NEUTRAL,
    }
}
