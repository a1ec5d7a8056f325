use serde_json::{json, Value};

/// One tracked user-behavior event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// Recorded once at startup.
    PageView,
    /// The user switched to another view.
    ViewChange { view: &'static str },
    /// The user selected a station.
    StationClick { station: String },
    /// The user inspected a train.
    TrainView { train: String },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView => "page_view",
            AnalyticsEvent::ViewChange { .. } => "view_change",
            AnalyticsEvent::StationClick { .. } => "station_click",
            AnalyticsEvent::TrainView { .. } => "train_view",
        }
    }

    fn params(&self) -> Value {
        match self {
            AnalyticsEvent::PageView => json!({
                "page_title": "MetroWatch",
            }),
            AnalyticsEvent::ViewChange { view } => json!({
                "event_category": "Navigation",
                "event_label": view,
                "value": 1,
            }),
            AnalyticsEvent::StationClick { station } => json!({
                "event_category": "Interaction",
                "event_label": station,
            }),
            AnalyticsEvent::TrainView { train } => json!({
                "event_category": "Interaction",
                "event_label": train,
            }),
        }
    }

    /// Measurement-protocol body for this event.
    pub fn payload(&self, client_id: &str) -> Value {
        json!({
            "client_id": client_id,
            "events": [{
                "name": self.name(),
                "params": self.params(),
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_match_protocol() {
        assert_eq!(AnalyticsEvent::PageView.name(), "page_view");
        assert_eq!(AnalyticsEvent::ViewChange { view: "map" }.name(), "view_change");
        assert_eq!(
            AnalyticsEvent::StationClick { station: "Ameerpet".into() }.name(),
            "station_click"
        );
        assert_eq!(
            AnalyticsEvent::TrainView { train: "T104".into() }.name(),
            "train_view"
        );
    }

    #[test]
    fn view_change_is_a_navigation_event() {
        let params = AnalyticsEvent::ViewChange { view: "dashboard" }.params();
        assert_eq!(params["event_category"], "Navigation");
        assert_eq!(params["event_label"], "dashboard");
        assert_eq!(params["value"], 1);
    }

    #[test]
    fn interaction_events_carry_labels() {
        let params = AnalyticsEvent::StationClick { station: "Hitech City".into() }.params();
        assert_eq!(params["event_category"], "Interaction");
        assert_eq!(params["event_label"], "Hitech City");
    }

    #[test]
    fn payload_wraps_event_with_client_id() {
        let payload = AnalyticsEvent::PageView.payload("abc-123");
        assert_eq!(payload["client_id"], "abc-123");
        assert_eq!(payload["events"][0]["name"], "page_view");
    }
}
