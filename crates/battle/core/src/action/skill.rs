//! Skill casts.

use super::transition::ActionTransition;
use crate::combat::resolve_skill;
use crate::env::{BattleEnv, OracleError, SkillDefinition};
use crate::error::{BattleError, ErrorSeverity};
use crate::events::BattleEvent;
use crate::state::{BattleState, SkillSlot};

/// Casts the skill in one of the hero's numbered slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseSkillAction {
    pub slot: SkillSlot,
}

/// Errors a skill cast can be refused with.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    /// The slot does not name a learned skill.
    #[error("no learned skill in {slot}")]
    UnknownSlot { slot: SkillSlot },
    /// The hero's mana balance does not cover the cost.
    #[error("not enough mana: need {required}, have {available}")]
    InsufficientMana { required: u32, available: u32 },
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl BattleError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownSlot { .. } => ErrorSeverity::Validation,
            Self::InsufficientMana { .. } => ErrorSeverity::Recoverable,
            Self::Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSlot { .. } => "UNKNOWN_SKILL_SLOT",
            Self::InsufficientMana { .. } => "INSUFFICIENT_MANA",
            Self::Oracle(inner) => inner.error_code(),
        }
    }
}

impl UseSkillAction {
    pub const fn new(slot: SkillSlot) -> Self {
        Self { slot }
    }

    fn definition<'a>(
        &self,
        state: &BattleState,
        env: &BattleEnv<'a>,
    ) -> Result<&'a SkillDefinition, SkillError> {
        let skill = state
            .hero
            .skills
            .get(self.slot)
            .ok_or(SkillError::UnknownSlot { slot: self.slot })?;
        Ok(env
            .skills()?
            .definition(skill)
            .ok_or(OracleError::SkillNotFound(skill))?)
    }
}

impl ActionTransition for UseSkillAction {
    type Error = SkillError;

    fn pre_validate(&self, state: &BattleState, env: &BattleEnv<'_>) -> Result<(), SkillError> {
        let definition = self.definition(state, env)?;
        let available = state.hero.mana.current();
        if available < definition.mana_cost {
            return Err(SkillError::InsufficientMana {
                required: definition.mana_cost,
                available,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        env: &BattleEnv<'_>,
    ) -> Result<Vec<BattleEvent>, SkillError> {
        let definition = self.definition(state, env)?;
        if !state.hero.mana.spend(definition.mana_cost) {
            return Err(SkillError::InsufficientMana {
                required: definition.mana_cost,
                available: state.hero.mana.current(),
            });
        }

        let mut events = vec![BattleEvent::SkillUsed {
            skill: definition.id,
        }];
        events.extend(resolve_skill(state, env, definition)?);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SkillKind;
    use crate::testkit;

    #[test]
    fn cast_spends_mana_and_reports_the_skill() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        let definition = fixtures.skills.by_kind(SkillKind::Damage);
        let slot = state.hero.skills.learn(definition.id).unwrap();
        let action = UseSkillAction::new(slot);

        action.pre_validate(&state, &env).unwrap();
        let events = action.apply(&mut state, &env).unwrap();

        assert_eq!(
            events[0],
            BattleEvent::SkillUsed {
                skill: definition.id
            }
        );
        assert_eq!(events.len(), 2);
        assert_eq!(
            state.hero.mana.current(),
            state.hero.mana.maximum() - definition.mana_cost
        );
    }

    #[test]
    fn empty_slot_is_rejected_before_any_mutation() {
        let (state, fixtures) = testkit::battle();
        let env = fixtures.env();
        let action = UseSkillAction::new(SkillSlot(7));

        assert_eq!(
            action.pre_validate(&state, &env),
            Err(SkillError::UnknownSlot {
                slot: SkillSlot(7)
            })
        );
    }

    #[test]
    fn insufficient_mana_is_recoverable() {
        let (mut state, fixtures) = testkit::battle();
        let env = fixtures.env();
        let definition = fixtures.skills.by_kind(SkillKind::Damage);
        let slot = state.hero.skills.learn(definition.id).unwrap();
        state.hero.mana.deplete(state.hero.mana.current());

        let error = UseSkillAction::new(slot)
            .pre_validate(&state, &env)
            .unwrap_err();

        assert_eq!(
            error,
            SkillError::InsufficientMana {
                required: definition.mana_cost,
                available: 0
            }
        );
        assert!(error.severity().is_recoverable());
        assert!(state.hero.health.is_full());
    }
}
