//! Turn sequencing and action execution pipeline.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`BattleState`].
//! One call to [`BattleEngine::begin_cycle`] plus one successful call to
//! [`BattleEngine::execute`] resolves a full battle cycle: hero action,
//! death checks, monster counter-attack, and cycle close. All mutations
//! flow through the three-phase transition pipeline so a refused action
//! can never leave a half-applied cycle behind.

mod cycle;
mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{HeroAction, MonsterAttackAction};
use crate::combat::try_revive;
use crate::env::BattleEnv;
use crate::error::ErrorContext;
use crate::events::BattleEvent;
use crate::reward::{VictoryRewards, resolve_victory};
use crate::state::{BattlePhase, BattleState};

/// How an executed action left the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleFlow {
    /// The cycle completed and the next one awaits an action.
    Continue,
    /// The battle suspended for inventory management. No cycle was
    /// consumed; the current one resumes on the next action.
    Suspended,
    /// The monster fell and the payout was resolved.
    Victory(VictoryRewards),
    /// The hero fell or fled.
    Defeat,
}

/// Complete outcome of one executed hero action: the ordered event log of
/// everything that resolved, and where it left the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub events: Vec<BattleEvent>,
    pub flow: CycleFlow,
}

/// Battle engine driving one battle's state machine.
///
/// The engine borrows the state exclusively for each call, keeping
/// ownership with the caller between cycles so the driver can inspect or
/// persist it freely while awaiting the next action.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    /// Opens the current cycle: frost opener, buff decay, regeneration.
    ///
    /// Idempotent within a cycle. Once the cycle is primed, further calls
    /// return no events, so resuming after an inventory suspension or a
    /// refused action never ticks buffs twice.
    pub fn begin_cycle(&mut self, env: &BattleEnv<'_>) -> Result<Vec<BattleEvent>, ExecuteError> {
        if self.state.is_over() {
            return Err(ExecuteError::BattleAlreadyOver);
        }
        if self.state.phase != BattlePhase::AwaitingHeroAction {
            return Err(self.invariant("begin_cycle while a cycle is resolving"));
        }
        if self.state.session.cycle_primed {
            return Ok(Vec::new());
        }

        let events = cycle::run_cycle_start(self.state, env)?;
        self.state.session.cycle_primed = true;
        Ok(events)
    }

    /// Executes one hero action and everything that follows from it.
    ///
    /// On success the battle has either advanced one full cycle, ended, or
    /// suspended for inventory. On error nothing changed: the cycle stays
    /// primed and the same or another action can be submitted.
    pub fn execute(
        &mut self,
        env: &BattleEnv<'_>,
        action: HeroAction,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        if self.state.is_over() {
            return Err(ExecuteError::BattleAlreadyOver);
        }
        if self.state.phase != BattlePhase::AwaitingHeroAction {
            return Err(self.invariant("execute while a cycle is resolving"));
        }
        if !self.state.session.cycle_primed {
            return Err(ExecuteError::CycleNotPrimed {
                cycle: self.state.session.cycle,
            });
        }

        match action {
            HeroAction::Flee => {
                self.state.phase = BattlePhase::BattleLost;
                return Ok(ExecutionOutcome {
                    events: vec![BattleEvent::HeroFled],
                    flow: CycleFlow::Defeat,
                });
            }
            HeroAction::OpenInventory => {
                return Ok(ExecutionOutcome {
                    events: Vec::new(),
                    flow: CycleFlow::Suspended,
                });
            }
            _ => {}
        }

        self.state.phase = BattlePhase::ResolvingHeroAction;
        let mut events = match transition::execute_hero_action(action, self.state, env) {
            Ok(events) => events,
            Err(error) => {
                // Refused actions mutate nothing; return to the prompt.
                self.state.phase = BattlePhase::AwaitingHeroAction;
                return Err(error);
            }
        };

        self.state.phase = BattlePhase::CheckMonsterAlive;
        if !self.state.monster.is_alive() {
            return self.close_with_victory(env, events);
        }

        // The hero can fall to their own cast (drain cost, blast recoil).
        if self.state.hero.health.is_empty() {
            match try_revive(self.state, env)? {
                Some(event) => events.push(event),
                None => return Ok(self.close_with_defeat(events)),
            }
        }

        self.state.phase = BattlePhase::MonsterActs;
        let counter = transition::drive_transition(&MonsterAttackAction, self.state, env)
            .map_err(ExecuteError::MonsterAttack)?;
        events.extend(counter);

        self.state.phase = BattlePhase::CheckHeroAlive;
        if self.state.hero.health.is_empty() {
            match try_revive(self.state, env)? {
                Some(event) => events.push(event),
                None => return Ok(self.close_with_defeat(events)),
            }
        }

        // Retaliation during the counter can finish the monster.
        if !self.state.monster.is_alive() {
            return self.close_with_victory(env, events);
        }

        self.state.session.cycle += 1;
        self.state.session.cycle_primed = false;
        self.state.phase = BattlePhase::AwaitingHeroAction;
        Ok(ExecutionOutcome {
            events,
            flow: CycleFlow::Continue,
        })
    }

    fn close_with_victory(
        &mut self,
        env: &BattleEnv<'_>,
        mut events: Vec<BattleEvent>,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        events.push(BattleEvent::MonsterSlain);
        let (rewards, reward_events) = resolve_victory(self.state, env)?;
        events.extend(reward_events);
        self.state.phase = BattlePhase::BattleWon;
        Ok(ExecutionOutcome {
            events,
            flow: CycleFlow::Victory(rewards),
        })
    }

    fn close_with_defeat(&mut self, mut events: Vec<BattleEvent>) -> ExecutionOutcome {
        events.push(BattleEvent::HeroDowned);
        self.state.phase = BattlePhase::BattleLost;
        ExecutionOutcome {
            events,
            flow: CycleFlow::Defeat,
        }
    }

    fn invariant(&self, message: &'static str) -> ExecuteError {
        ExecuteError::InvariantViolation {
            context: ErrorContext::new(self.state.session.cycle).with_message(message),
        }
    }
}
