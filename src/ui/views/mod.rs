//! The three snapshot projections.
//!
//! The cap/filter helpers live here, widget-free, so the projection
//! rules can be unit-tested without a terminal.

pub mod activity;
pub mod dashboard;
pub mod map;

use crate::api::model::{Station, Train};

/// The dashboard shows at most this many train cards.
pub const DASHBOARD_TRAIN_LIMIT: usize = 8;
/// The map renders at most this many train markers.
pub const MAP_TRAIN_LIMIT: usize = 6;
/// The dashboard shows at most this many peak-station cards.
pub const PEAK_STATION_LIMIT: usize = 10;

/// First eight trains, in server order.
pub fn dashboard_trains(trains: &[Train]) -> &[Train] {
    &trains[..trains.len().min(DASHBOARD_TRAIN_LIMIT)]
}

/// First six trains, in server order.
pub fn map_trains(trains: &[Train]) -> &[Train] {
    &trains[..trains.len().min(MAP_TRAIN_LIMIT)]
}

/// Stations at HIGH or PEAK, first ten in server order.
pub fn peak_stations(stations: &[Station]) -> Vec<&Station> {
    stations
        .iter()
        .filter(|station| station.status.is_peak())
        .take(PEAK_STATION_LIMIT)
        .collect()
}
