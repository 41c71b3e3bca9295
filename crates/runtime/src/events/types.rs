//! Serializable event payloads published by battle drivers.
//!
//! Every payload is plain data so external sinks (UIs, logs, replays) can
//! consume the stream without touching battle state.
use battle_core::{
    AdvancementOffer, BattleEvent, HeroAction, MonsterId, SkillSlot, VictoryRewards,
};
use serde::{Deserialize, Serialize};

/// Battle and campaign lifecycle markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// A campaign run opened with the given roster length.
    CampaignStarted { encounters: usize, seed: u64 },
    /// A battle opened against a monster.
    BattleOpened { monster: MonsterId, seed: u64 },
    /// The battle paused for inventory management.
    BattleSuspended { cycle: u64 },
    /// Combat resumed in the same cycle.
    BattleResumed { cycle: u64 },
    /// The battle reached a terminal phase.
    BattleClosed { outcome: BattleOutcome, cycles: u64 },
    /// The campaign run finished.
    CampaignEnded {
        outcome: CampaignOutcome,
        victories: u32,
    },
}

/// Terminal result of one battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Won,
    Lost,
}

/// How a campaign run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignOutcome {
    /// Every roster encounter fell.
    Cleared,
    /// The hero lost at the named encounter. Fleeing counts as a loss.
    Fallen { encounter: MonsterId },
}

/// Per-cycle resolution, exactly as the engine reported it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TurnEvent {
    /// Start-of-cycle upkeep ran: frost opener, buff decay, regeneration.
    CycleOpened { cycle: u64, events: Vec<BattleEvent> },
    /// The engine refused the submission; the provider was asked again.
    ActionRejected {
        cycle: u64,
        action: HeroAction,
        error: String,
        code: String,
    },
    /// The action resolved, along with everything that followed from it.
    ActionResolved {
        cycle: u64,
        action: HeroAction,
        events: Vec<BattleEvent>,
    },
}

/// Victory payouts and level-up advancement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RewardEvent {
    /// The felled monster paid out.
    VictoryPaid {
        monster: MonsterId,
        rewards: VictoryRewards,
    },
    /// A level-up produced an offer sheet.
    AdvancementOffered {
        level: u32,
        offers: Vec<AdvancementOffer>,
    },
    /// The chooser took an offer; skills report the slot they landed in.
    AdvancementApplied {
        offer: AdvancementOffer,
        slot: Option<SkillSlot>,
    },
}
