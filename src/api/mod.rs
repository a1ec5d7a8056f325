pub mod client;
pub mod model;
pub mod poller;

pub use client::{ApiClient, ApiError};
pub use model::NetworkSnapshot;
pub use poller::{PollUpdate, PollerCommand, PollerCommandSender};
