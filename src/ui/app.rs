use crate::analytics::AnalyticsClient;
use crate::api::model::NetworkSnapshot;
use crate::api::poller::{PollUpdate, PollerCommand, PollerCommandSender};
use crate::config::ConfigStore;

/// The three mutually exclusive projections of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Map,
    Dashboard,
    Activity,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Map, ViewMode::Dashboard, ViewMode::Activity];

    /// Wire/analytics name of the view.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Map => "map",
            ViewMode::Dashboard => "dashboard",
            ViewMode::Activity => "activity",
        }
    }

    /// Tab caption.
    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Map => "Map",
            ViewMode::Dashboard => "Dashboard",
            ViewMode::Activity => "Activity",
        }
    }

    pub fn from_name(name: &str) -> Option<ViewMode> {
        Self::ALL.iter().copied().find(|view| view.name() == name)
    }

    pub fn next(self) -> ViewMode {
        match self {
            ViewMode::Map => ViewMode::Dashboard,
            ViewMode::Dashboard => ViewMode::Activity,
            ViewMode::Activity => ViewMode::Map,
        }
    }
}

pub struct App {
    should_quit: bool,
    view: ViewMode,
    /// Last committed snapshot; `None` until the first poll lands.
    snapshot: Option<NetworkSnapshot>,
    /// Highest poll sequence committed so far. Stale in-flight results
    /// carry a lower number and are discarded.
    last_seq: u64,
    last_poll_error: Option<String>,
    tick_count: u64,
    selected_station: usize,
    config: ConfigStore,
    analytics: AnalyticsClient,
    poller: Option<PollerCommandSender>,
}

impl App {
    pub fn new(config: ConfigStore, analytics: AnalyticsClient) -> Self {
        let view = ViewMode::from_name(&config.get().ui.default_view).unwrap_or(ViewMode::Map);
        Self {
            should_quit: false,
            view,
            snapshot: None,
            last_seq: 0,
            last_poll_error: None,
            tick_count: 0,
            selected_station: 0,
            config,
            analytics,
            poller: None,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch views. Selecting the already-active view does nothing and
    /// emits nothing; an effective switch emits exactly one navigation
    /// event.
    pub fn set_view(&mut self, view: ViewMode) {
        if self.view == view {
            return;
        }
        self.view = view;
        self.analytics.view_change(view.name());
    }

    pub fn cycle_view(&mut self) {
        self.set_view(self.view.next());
    }

    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Phase bit for the PEAK-marker pulse on the map.
    pub fn pulse_on(&self) -> bool {
        self.tick_count % 2 == 0
    }

    /// Commit a poll result. Only a sequence newer than everything seen
    /// so far replaces the snapshot; the replacement is wholesale.
    pub fn apply_update(&mut self, update: PollUpdate) {
        if update.seq <= self.last_seq {
            return;
        }
        self.last_seq = update.seq;
        self.snapshot = Some(update.snapshot);
        self.last_poll_error = None;
        self.clamp_selection();
    }

    /// A failed cycle keeps the previous snapshot on screen; only the
    /// error text is retained for diagnostics.
    pub fn record_poll_failure(&mut self, _seq: u64, error: String) {
        self.last_poll_error = Some(error);
    }

    pub fn snapshot(&self) -> Option<&NetworkSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn last_poll_error(&self) -> Option<&str> {
        self.last_poll_error.as_deref()
    }

    pub fn set_poller(&mut self, sender: PollerCommandSender) {
        self.poller = Some(sender);
    }

    /// Ask the poller for an immediate out-of-cadence cycle. A full
    /// command queue just means a refresh is already pending.
    pub fn request_refresh(&mut self) {
        if let Some(sender) = &self.poller {
            let _ = sender.try_send(PollerCommand::RefreshNow);
        }
    }

    pub fn selected_station(&self) -> usize {
        self.selected_station
    }

    pub fn select_next(&mut self) {
        let count = self.station_count();
        if count > 0 && self.selected_station + 1 < count {
            self.selected_station += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_station = self.selected_station.saturating_sub(1);
    }

    fn station_count(&self) -> usize {
        self.snapshot.as_ref().map(|s| s.stations.len()).unwrap_or(0)
    }

    fn clamp_selection(&mut self) {
        let count = self.station_count();
        if count == 0 {
            self.selected_station = 0;
        } else if self.selected_station >= count {
            self.selected_station = count - 1;
        }
    }
}
