//! Combat resolution: mitigation math, skill effects, passive triggers.

mod damage;
mod effects;
mod passives;

pub use damage::mitigate;
pub use effects::resolve_skill;
pub use passives::{hero_has, try_revive};
