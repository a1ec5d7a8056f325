//! Periodic snapshot poller.
//!
//! Cycles are spawned on a fixed cadence without awaiting the previous
//! one, so a slow response never stalls the timer. Every cycle carries a
//! monotonically increasing sequence number; the app commits only the
//! highest sequence it has seen, which makes the overlapping-cycle race
//! benign.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::api::client::ApiClient;
use crate::api::model::NetworkSnapshot;
use crate::config::ApiConfig;
use crate::ui::events::AppEvent;

/// Commands the UI can send to the poller.
#[derive(Debug)]
pub enum PollerCommand {
    /// Run a poll cycle now, out of cadence.
    RefreshNow,
}

pub type PollerCommandSender = mpsc::Sender<PollerCommand>;

/// One sequence-tagged poll result.
#[derive(Debug, Clone)]
pub struct PollUpdate {
    pub seq: u64,
    pub snapshot: NetworkSnapshot,
}

/// Run the poll loop until the command channel closes.
///
/// The first tick fires immediately, so a snapshot is requested at
/// startup before the first interval elapses.
pub async fn run(
    config: ApiConfig,
    events: Sender<AppEvent>,
    mut commands: mpsc::Receiver<PollerCommand>,
) {
    let client = Arc::new(ApiClient::new(&config));
    let seq = Arc::new(AtomicU64::new(0));
    let mut ticker = tokio::time::interval(Duration::from_secs(config.poll_interval_seconds));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => spawn_cycle(&client, &seq, &events),
            command = commands.recv() => match command {
                Some(PollerCommand::RefreshNow) => spawn_cycle(&client, &seq, &events),
                None => break,
            },
        }
    }
}

fn spawn_cycle(client: &Arc<ApiClient>, seq: &Arc<AtomicU64>, events: &Sender<AppEvent>) {
    let client = Arc::clone(client);
    let seq = seq.fetch_add(1, Ordering::Relaxed) + 1;
    let events = events.clone();

    tokio::spawn(async move {
        match client.fetch_snapshot().await {
            Ok(snapshot) => {
                debug!(
                    seq,
                    stations = snapshot.stations.len(),
                    trains = snapshot.trains.len(),
                    "poll cycle complete"
                );
                let _ = events.send(AppEvent::Snapshot(PollUpdate { seq, snapshot }));
            }
            Err(err) => {
                warn!(seq, error = %err, "poll cycle failed; previous snapshot stays on screen");
                let _ = events.send(AppEvent::PollFailed {
                    seq,
                    error: err.to_string(),
                });
            }
        }
    });
}
