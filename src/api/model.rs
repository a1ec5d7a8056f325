//! Wire types for the monitoring service.
//!
//! Field names follow the server payloads exactly (a mix of camelCase and
//! snake_case); unknown enum values decode to a fallback variant instead of
//! failing the whole poll.

use serde::Deserialize;

/// Station crowding classification, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CrowdStatus {
    Low,
    Medium,
    High,
    Peak,
    #[serde(other)]
    Unknown,
}

impl CrowdStatus {
    /// HIGH and PEAK stations count as "peak" for the dashboard panel.
    pub fn is_peak(self) -> bool {
        matches!(self, CrowdStatus::High | CrowdStatus::Peak)
    }

    pub fn label(self) -> &'static str {
        match self {
            CrowdStatus::Low => "LOW",
            CrowdStatus::Medium => "MEDIUM",
            CrowdStatus::High => "HIGH",
            CrowdStatus::Peak => "PEAK",
            CrowdStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Passenger-count trend. Anything the server sends beyond the two known
/// directions renders as stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    #[serde(other)]
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

/// Qualitative train-crowding label derived server-side from occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RushLevel {
    #[serde(rename = "Low Rush")]
    Low,
    #[serde(rename = "Moderate Rush")]
    Moderate,
    #[serde(other)]
    High,
}

impl RushLevel {
    pub fn label(self) -> &'static str {
        match self {
            RushLevel::Low => "Low Rush",
            RushLevel::Moderate => "Moderate Rush",
            RushLevel::High => "High Rush",
        }
    }
}

/// Line membership for stations and trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetroLine {
    Red,
    Green,
    Blue,
    #[serde(other)]
    Unknown,
}

impl MetroLine {
    pub fn label(self) -> &'static str {
        match self {
            MetroLine::Red => "RED",
            MetroLine::Green => "GREEN",
            MetroLine::Blue => "BLUE",
            MetroLine::Unknown => "?",
        }
    }
}

/// One station as reported by `/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct Station {
    pub id: u32,
    pub name: String,
    pub line: MetroLine,
    /// Map placement in the server's 700x600 coordinate space, y down.
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub capacity: u32,
    pub passengers: u32,
    pub status: CrowdStatus,
    pub trend: Trend,
    #[serde(rename = "waitTime")]
    pub wait_time: u32,
    /// Free-text note attached to busier stations.
    #[serde(rename = "coachTip", default)]
    pub note: Option<String>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
}

/// One train as reported by `/trains`.
#[derive(Debug, Clone, Deserialize)]
pub struct Train {
    pub id: String,
    pub line: MetroLine,
    /// Fractional position along the line. Parsed but not used for map
    /// placement; markers are laid out by list order.
    #[serde(default)]
    pub position: f64,
    pub current_occupancy: u32,
    pub total_capacity: u32,
    pub occupancy_percent: f64,
    pub seat_rush_level: RushLevel,
    #[serde(default)]
    pub available_seats: u32,
    #[serde(default)]
    pub standing_passengers: u32,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub speed: u32,
    #[serde(rename = "nextStation", default)]
    pub next_station: String,
}

/// Aggregate counters recomputed server-side each poll.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Summary {
    #[serde(rename = "totalStations", default)]
    pub total_stations: u32,
    #[serde(rename = "totalPassengers", default)]
    pub total_passengers: u64,
    #[serde(rename = "peakStations", default)]
    pub peak_stations: u32,
    #[serde(rename = "averageWaitTime", default)]
    pub average_wait_time: f64,
}

/// Body of `GET /status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub summary: Summary,
}

/// Body of `GET /trains`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainsResponse {
    #[serde(default)]
    pub trains: Vec<Train>,
}

/// The full station+train+summary state from one successful poll.
///
/// Each poll replaces the previous snapshot wholesale; nothing is merged.
#[derive(Debug, Clone, Default)]
pub struct NetworkSnapshot {
    pub stations: Vec<Station>,
    pub summary: Summary,
    pub trains: Vec<Train>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station_json() -> &'static str {
        r#"{
            "id": 8,
            "name": "Ameerpet",
            "line": "red",
            "x": 250,
            "y": 150,
            "capacity": 700,
            "coachTip": "Super busy! Coaching institutes area",
            "passengers": 512,
            "status": "PEAK",
            "trend": "increasing",
            "waitTime": 6,
            "lastUpdated": "2026-08-07T09:12:00"
        }"#
    }

    #[test]
    fn station_decodes_mixed_case_fields() {
        let station: Station = serde_json::from_str(sample_station_json()).expect("decode");
        assert_eq!(station.name, "Ameerpet");
        assert_eq!(station.line, MetroLine::Red);
        assert_eq!(station.status, CrowdStatus::Peak);
        assert_eq!(station.trend, Trend::Increasing);
        assert_eq!(station.wait_time, 6);
        assert_eq!(station.note.as_deref(), Some("Super busy! Coaching institutes area"));
    }

    #[test]
    fn unknown_status_falls_back() {
        let json = sample_station_json().replace("\"PEAK\"", "\"OVERLOADED\"");
        let station: Station = serde_json::from_str(&json).expect("decode");
        assert_eq!(station.status, CrowdStatus::Unknown);
    }

    #[test]
    fn unknown_trend_reads_as_stable() {
        let json = sample_station_json().replace("\"increasing\"", "\"wobbling\"");
        let station: Station = serde_json::from_str(&json).expect("decode");
        assert_eq!(station.trend, Trend::Stable);
    }

    #[test]
    fn status_severity_is_ordered() {
        assert!(CrowdStatus::Low < CrowdStatus::Medium);
        assert!(CrowdStatus::Medium < CrowdStatus::High);
        assert!(CrowdStatus::High < CrowdStatus::Peak);
        assert!(CrowdStatus::Peak.is_peak());
        assert!(CrowdStatus::High.is_peak());
        assert!(!CrowdStatus::Medium.is_peak());
    }

    #[test]
    fn empty_status_body_defaults_everything() {
        let response: StatusResponse = serde_json::from_str("{}").expect("decode");
        assert!(response.stations.is_empty());
        assert_eq!(response.summary, Summary::default());
        assert_eq!(response.summary.total_passengers, 0);
    }

    #[test]
    fn status_body_without_summary_keeps_stations() {
        let body = format!(r#"{{ "stations": [{}] }}"#, sample_station_json());
        let response: StatusResponse = serde_json::from_str(&body).expect("decode");
        assert_eq!(response.stations.len(), 1);
        assert_eq!(response.summary.peak_stations, 0);
    }

    #[test]
    fn train_decodes_and_tolerates_rush_variants() {
        let body = r#"{
            "trains": [{
                "id": "T104",
                "line": "green",
                "position": 0.42,
                "current_occupancy": 290,
                "total_capacity": 350,
                "occupancy_percent": 82.9,
                "seat_rush_level": "High Rush",
                "available_seats": 0,
                "standing_passengers": 240,
                "direction": "northbound",
                "speed": 52,
                "nextStation": "Tarnaka"
            }],
            "summary": { "totalTrains": 1 }
        }"#;
        let response: TrainsResponse = serde_json::from_str(body).expect("decode");
        let train = &response.trains[0];
        assert_eq!(train.seat_rush_level, RushLevel::High);
        assert_eq!(train.next_station, "Tarnaka");

        let crushed = body.replace("\"High Rush\"", "\"Crush Rush\"");
        let response: TrainsResponse = serde_json::from_str(&crushed).expect("decode");
        assert_eq!(response.trains[0].seat_rush_level, RushLevel::High);
    }

    #[test]
    fn empty_trains_body_defaults() {
        let response: TrainsResponse = serde_json::from_str("{}").expect("decode");
        assert!(response.trains.is_empty());
    }

    #[test]
    fn unknown_line_is_tolerated() {
        let json = sample_station_json().replace("\"red\"", "\"purple\"");
        let station: Station = serde_json::from_str(&json).expect("decode");
        assert_eq!(station.line, MetroLine::Unknown);
        assert_eq!(station.line.label(), "?");
    }

    #[test]
    fn summary_fields_default_individually() {
        let summary: Summary =
            serde_json::from_str(r#"{ "totalPassengers": 4200 }"#).expect("decode");
        assert_eq!(summary.total_passengers, 4200);
        assert_eq!(summary.peak_stations, 0);
        assert_eq!(summary.average_wait_time, 0.0);
    }
}
