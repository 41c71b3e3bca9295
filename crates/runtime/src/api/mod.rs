//! Public API types for embedding the battle runtime.
pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{
    ActionProvider, AdvancementChooser, AttackActionProvider, FirstOfferChooser, InventoryHandler,
    ScriptedActionProvider,
};
