//! Walks a roster of encounters with one persistent hero.

use battle_core::{
    BattleEnv, BattleState, Hero, Monster, MonsterId, Side, apply_offer, compute_seed, context,
    generate_offers,
};
use tracing::{Instrument, debug, info, info_span};

use crate::api::{ActionProvider, AdvancementChooser, InventoryHandler, Result, RuntimeError};
use crate::events::{BattleOutcome, CampaignOutcome, Event, EventBus, LifecycleEvent, RewardEvent};
use crate::session::BattleSession;

/// Terminal summary of one campaign run.
#[derive(Debug, Clone)]
pub struct CampaignReport {
    /// The hero as the run left them.
    pub hero: Hero,
    pub outcome: CampaignOutcome,
    /// Encounters won, in roster order.
    pub victories: u32,
}

/// Drives battles through a fixed roster, carrying the hero between them.
///
/// Each encounter derives its own battle seed from the campaign seed and
/// the roster position, so a full run replays exactly. Victory payouts
/// settle inside each battle; level-up offer sheets are drawn here and
/// put to the [`AdvancementChooser`].
pub struct Campaign<'a> {
    env: BattleEnv<'a>,
    roster: Vec<MonsterId>,
    seed: u64,
    provider: &'a dyn ActionProvider,
    inventory: Option<&'a dyn InventoryHandler>,
    chooser: Option<&'a dyn AdvancementChooser>,
    bus: EventBus,
}

impl<'a> Campaign<'a> {
    pub fn new(
        env: BattleEnv<'a>,
        roster: Vec<MonsterId>,
        seed: u64,
        provider: &'a dyn ActionProvider,
        bus: EventBus,
    ) -> Self {
        Self {
            env,
            roster,
            seed,
            provider,
            inventory: None,
            chooser: None,
            bus,
        }
    }

    /// Attaches a handler for inventory suspensions.
    pub fn with_inventory_handler(mut self, handler: &'a dyn InventoryHandler) -> Self {
        self.inventory = Some(handler);
        self
    }

    /// Attaches a chooser for level-up offer sheets. Without one every
    /// sheet is published and declined.
    pub fn with_advancement_chooser(mut self, chooser: &'a dyn AdvancementChooser) -> Self {
        self.chooser = Some(chooser);
        self
    }

    /// The bus this campaign publishes on.
    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    /// Runs the roster front to back and reports where the run ended.
    pub async fn run(&self, hero: Hero) -> Result<CampaignReport> {
        let span = info_span!(
            "campaign",
            seed = self.seed,
            encounters = self.roster.len(),
        );
        self.walk(hero).instrument(span).await
    }

    async fn walk(&self, mut hero: Hero) -> Result<CampaignReport> {
        self.bus
            .publish(Event::Lifecycle(LifecycleEvent::CampaignStarted {
                encounters: self.roster.len(),
                seed: self.seed,
            }));

        let mut victories = 0u32;
        let mut outcome = CampaignOutcome::Cleared;

        for (position, &monster_id) in self.roster.iter().enumerate() {
            let definition = self
                .env
                .monsters()?
                .definition(monster_id)
                .ok_or(RuntimeError::UnknownMonster(monster_id))?;
            let battle_seed =
                compute_seed(self.seed, position as u64, Side::Hero, context::ENCOUNTER);
            debug!(position, monster = %monster_id, battle_seed, "encounter starts");

            let state = BattleState::new(hero, Monster::spawn(definition), battle_seed);
            let mut session = BattleSession::new(state, self.env, self.provider, &self.bus);
            if let Some(handler) = self.inventory {
                session = session.with_inventory_handler(handler);
            }
            let report = session.run().await?;
            hero = report.hero;

            match report.outcome {
                BattleOutcome::Won => {
                    victories += 1;
                    if let Some(rewards) = &report.rewards
                        && let Some(level) = rewards.new_level
                    {
                        hero = self
                            .offer_advancement(hero, level, report.seed, report.cycles)
                            .await?;
                    }
                }
                BattleOutcome::Lost => {
                    outcome = CampaignOutcome::Fallen {
                        encounter: monster_id,
                    };
                    break;
                }
            }
        }

        info!(victories, ?outcome, "campaign closed");
        self.bus
            .publish(Event::Lifecycle(LifecycleEvent::CampaignEnded {
                outcome,
                victories,
            }));

        Ok(CampaignReport {
            hero,
            outcome,
            victories,
        })
    }

    /// Draws the offer sheet for a fresh level and lets the chooser pick.
    ///
    /// The draw is pinned to the battle that caused the level-up, so a
    /// replayed campaign sees the same sheets.
    async fn offer_advancement(
        &self,
        mut hero: Hero,
        level: u32,
        seed: u64,
        cycle: u64,
    ) -> Result<Hero> {
        let offers = generate_offers(&hero, &self.env, seed, cycle)?;
        if offers.is_empty() {
            return Ok(hero);
        }
        self.bus
            .publish(Event::Reward(RewardEvent::AdvancementOffered {
                level,
                offers: offers.to_vec(),
            }));

        let Some(chooser) = self.chooser else {
            return Ok(hero);
        };
        if let Some(offer) = chooser.choose(&hero, &offers).await? {
            let slot = apply_offer(&mut hero, offer)?;
            debug!(?offer, ?slot, "advancement applied");
            self.bus
                .publish(Event::Reward(RewardEvent::AdvancementApplied {
                    offer,
                    slot,
                }));
        }
        Ok(hero)
    }
}
