//! Drives one battle from open to terminal phase.

use battle_core::{
    BattleEngine, BattleEnv, BattleError, BattleState, CycleFlow, Hero, VictoryRewards,
};
use tracing::{Instrument, debug, info_span, warn};

use crate::api::{ActionProvider, InventoryHandler, Result, RuntimeError};
use crate::events::{BattleOutcome, Event, EventBus, LifecycleEvent, RewardEvent, TurnEvent};

/// Terminal summary of one driven battle.
#[derive(Debug, Clone)]
pub struct BattleReport {
    /// The hero as they left the field, buffs cleared.
    pub hero: Hero,
    pub outcome: BattleOutcome,
    /// Cycles fully completed before the battle ended.
    pub cycles: u64,
    /// The seed the battle ran under.
    pub seed: u64,
    /// Victory payout; `None` on a loss.
    pub rewards: Option<VictoryRewards>,
}

/// Runs one battle: prime the cycle, ask the provider, execute, repeat.
///
/// Recoverable and validation rejections go back to the provider for
/// another pick in the same cycle. Internal and fatal errors abort the
/// run. An inventory suspension calls the [`InventoryHandler`], then
/// combat resumes without the cycle ticking twice.
pub struct BattleSession<'a> {
    state: BattleState,
    env: BattleEnv<'a>,
    provider: &'a dyn ActionProvider,
    inventory: Option<&'a dyn InventoryHandler>,
    bus: &'a EventBus,
}

impl<'a> BattleSession<'a> {
    pub fn new(
        state: BattleState,
        env: BattleEnv<'a>,
        provider: &'a dyn ActionProvider,
        bus: &'a EventBus,
    ) -> Self {
        Self {
            state,
            env,
            provider,
            inventory: None,
            bus,
        }
    }

    /// Attaches a handler for inventory suspensions. Without one the
    /// battle resumes immediately when the hero opens the inventory.
    pub fn with_inventory_handler(mut self, handler: &'a dyn InventoryHandler) -> Self {
        self.inventory = Some(handler);
        self
    }

    /// Drives the battle to its terminal phase and reports how it went.
    pub async fn run(self) -> Result<BattleReport> {
        let span = info_span!(
            "battle",
            monster = %self.state.monster.id,
            seed = self.state.session.seed,
        );
        self.drive().instrument(span).await
    }

    async fn drive(mut self) -> Result<BattleReport> {
        let monster = self.state.monster.id;
        let seed = self.state.session.seed;
        self.bus
            .publish(Event::Lifecycle(LifecycleEvent::BattleOpened {
                monster,
                seed,
            }));

        let verdict = loop {
            let cycle = self.state.session.cycle;
            let opening = BattleEngine::new(&mut self.state)
                .begin_cycle(&self.env)
                .map_err(RuntimeError::Engine)?;
            if !opening.is_empty() {
                debug!(cycle, upkeep = opening.len(), "cycle opened");
                self.bus.publish(Event::Turn(TurnEvent::CycleOpened {
                    cycle,
                    events: opening,
                }));
            }

            let action = self.provider.provide_action(&self.state).await?;
            debug!(cycle, ?action, "action submitted");

            let outcome = match BattleEngine::new(&mut self.state).execute(&self.env, action) {
                Ok(outcome) => outcome,
                Err(error) if !error.severity().is_internal() => {
                    warn!(cycle, %error, code = error.error_code(), "action refused");
                    self.bus.publish(Event::Turn(TurnEvent::ActionRejected {
                        cycle,
                        action,
                        error: error.to_string(),
                        code: error.error_code().to_string(),
                    }));
                    continue;
                }
                Err(error) => return Err(RuntimeError::Engine(error)),
            };

            match outcome.flow {
                CycleFlow::Continue => {
                    self.bus.publish(Event::Turn(TurnEvent::ActionResolved {
                        cycle,
                        action,
                        events: outcome.events,
                    }));
                }
                CycleFlow::Suspended => {
                    debug!(cycle, "suspended for inventory");
                    self.bus
                        .publish(Event::Lifecycle(LifecycleEvent::BattleSuspended {
                            cycle,
                        }));
                    if let Some(handler) = self.inventory {
                        handler
                            .manage(&mut self.state.hero, self.env.items()?)
                            .await?;
                    }
                    self.bus
                        .publish(Event::Lifecycle(LifecycleEvent::BattleResumed { cycle }));
                }
                CycleFlow::Victory(rewards) => {
                    self.bus.publish(Event::Turn(TurnEvent::ActionResolved {
                        cycle,
                        action,
                        events: outcome.events,
                    }));
                    self.bus.publish(Event::Reward(RewardEvent::VictoryPaid {
                        monster,
                        rewards: rewards.clone(),
                    }));
                    break (BattleOutcome::Won, Some(rewards));
                }
                CycleFlow::Defeat => {
                    self.bus.publish(Event::Turn(TurnEvent::ActionResolved {
                        cycle,
                        action,
                        events: outcome.events,
                    }));
                    break (BattleOutcome::Lost, None);
                }
            }
        };

        let (outcome, rewards) = verdict;
        let cycles = self.state.session.cycle;
        debug!(?outcome, cycles, "battle closed");
        self.bus
            .publish(Event::Lifecycle(LifecycleEvent::BattleClosed {
                outcome,
                cycles,
            }));

        Ok(BattleReport {
            hero: self.state.into_hero(),
            outcome,
            cycles,
            seed,
            rewards,
        })
    }
}
