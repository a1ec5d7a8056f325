//! Fire-and-forget usage analytics.
//!
//! The client is constructed once at boot and handed to whoever needs to
//! report; there is no global handle. Events go over an unbounded channel
//! to a background worker that posts them to the collection endpoint.
//! When the reporter is unconfigured every call is a silent no-op, and a
//! failed send is logged and dropped. Nothing here ever blocks rendering
//! or returns an error to a call site.

mod event;

pub use event::AnalyticsEvent;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::debug;
use uuid::Uuid;

use crate::config::AnalyticsConfig;

/// Handle for reporting events. Cheap to clone.
#[derive(Clone)]
pub struct AnalyticsClient {
    tx: Option<UnboundedSender<AnalyticsEvent>>,
}

impl AnalyticsClient {
    /// Client wired to a worker via `tx`.
    pub fn new(tx: UnboundedSender<AnalyticsEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Client that drops every event.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Record the initial page view.
    pub fn page_view(&self) {
        self.emit(AnalyticsEvent::PageView);
    }

    /// Record a navigation to `view`. Callers emit this once per
    /// effective view switch.
    pub fn view_change(&self, view: &'static str) {
        self.emit(AnalyticsEvent::ViewChange { view });
    }

    /// Record a station selection. Not bound to any input handler yet.
    pub fn station_click(&self, station: &str) {
        self.emit(AnalyticsEvent::StationClick {
            station: station.to_string(),
        });
    }

    /// Record a train inspection. Not bound to any input handler yet.
    pub fn train_view(&self, train: &str) {
        self.emit(AnalyticsEvent::TrainView {
            train: train.to_string(),
        });
    }

    fn emit(&self, event: AnalyticsEvent) {
        if let Some(tx) = &self.tx {
            // Worker gone means shutdown is underway; drop silently.
            let _ = tx.send(event);
        }
    }
}

/// Background worker draining the event channel.
///
/// Exits when the last client handle is dropped.
pub async fn run_worker(config: AnalyticsConfig, mut rx: UnboundedReceiver<AnalyticsEvent>) {
    let (Some(measurement_id), Some(api_secret)) = (config.measurement_id, config.api_secret)
    else {
        return;
    };

    let client = match reqwest::Client::builder().build() {
        Ok(client) => client,
        Err(err) => {
            debug!(error = %err, "analytics disabled: HTTP client build failed");
            return;
        }
    };

    let client_id = Uuid::new_v4().to_string();
    let url = format!(
        "{}?measurement_id={}&api_secret={}",
        config.endpoint, measurement_id, api_secret
    );

    while let Some(event) = rx.recv().await {
        match client.post(&url).json(&event.payload(&client_id)).send().await {
            Ok(response) => {
                debug!(event = event.name(), status = %response.status(), "analytics event sent");
            }
            Err(err) => {
                debug!(event = event.name(), error = %err, "analytics event dropped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn disabled_client_swallows_events() {
        let client = AnalyticsClient::disabled();
        assert!(!client.is_enabled());
        // Must be a no-op, not a panic.
        client.page_view();
        client.view_change("map");
        client.station_click("Ameerpet");
        client.train_view("T101");
    }

    #[test]
    fn enabled_client_forwards_events_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let client = AnalyticsClient::new(tx);
        assert!(client.is_enabled());

        client.page_view();
        client.view_change("activity");
        client.train_view("T104");

        assert_eq!(rx.try_recv().expect("event"), AnalyticsEvent::PageView);
        assert_eq!(
            rx.try_recv().expect("event"),
            AnalyticsEvent::ViewChange { view: "activity" }
        );
        assert_eq!(
            rx.try_recv().expect("event"),
            AnalyticsEvent::TrainView { train: "T104".to_string() }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_after_worker_gone_is_silent() {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = AnalyticsClient::new(tx);
        drop(rx);
        client.page_view();
    }
}
