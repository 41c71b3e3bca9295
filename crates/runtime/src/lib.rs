//! Async drivers for battles and campaigns.
//!
//! This crate wires the deterministic battle engine to the outside world:
//! action providers supply hero intent, the event bus streams what
//! happened, and the drive loops own sequencing. Consumers embed
//! [`BattleSession`] for a single fight or [`Campaign`] for a roster run.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider traits and error types clients implement
//! - [`events`] provides the topic-based event bus for flexible routing
//! - [`session`] drives one battle to its terminal phase
//! - [`campaign`] walks a roster with one persistent hero
pub mod api;
pub mod campaign;
pub mod events;
pub mod session;

pub use api::{
    ActionProvider, AdvancementChooser, AttackActionProvider, FirstOfferChooser, InventoryHandler,
    Result, RuntimeError, ScriptedActionProvider,
};
pub use campaign::{Campaign, CampaignReport};
pub use events::{
    BattleOutcome, CampaignOutcome, Event, EventBus, LifecycleEvent, RewardEvent, Topic, TurnEvent,
};
pub use session::{BattleReport, BattleSession};
