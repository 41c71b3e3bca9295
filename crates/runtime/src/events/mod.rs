//! Topic-based event routing for battle drivers.
//!
//! Sessions and campaigns publish to the [`EventBus`]; UIs, logs, and
//! replay sinks subscribe to the topics they care about.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BattleOutcome, CampaignOutcome, LifecycleEvent, RewardEvent, TurnEvent};
