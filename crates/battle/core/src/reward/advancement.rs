//! Level-up advancement offers.
//!
//! Each level-up lets the hero pick one new ability. The offer sheet holds
//! up to [`BattleConfig::MAX_ADVANCEMENT_OFFERS`] unowned candidates: two
//! passives drawn by rarity weight without replacement and one skill drawn
//! uniformly, padded from whichever pool still has candidates when the
//! other runs dry.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::env::{
    BattleEnv, OracleError, PassiveDefinition, SkillDefinition, compute_seed, context,
};
use crate::error::{BattleError, ErrorSeverity};
use crate::state::{Hero, PassiveId, Side, SkillId, SkillSlot};

/// One candidate on the offer sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AdvancementOffer {
    Skill(SkillId),
    Passive(PassiveId),
}

/// Errors from applying an advancement pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdvancementError {
    #[error("skill bar is full")]
    SkillBarFull,
    #[error("ability is already owned")]
    AlreadyOwned,
    #[error("passive set is full")]
    PassiveSetFull,
}

impl BattleError for AdvancementError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SkillBarFull => "SKILL_BAR_FULL",
            Self::AlreadyOwned => "ABILITY_ALREADY_OWNED",
            Self::PassiveSetFull => "PASSIVE_SET_FULL",
        }
    }
}

/// Draws the offer sheet for one level-up.
///
/// `seed` and `cycle` pin the draws to a position in the battle so offer
/// sheets replay exactly. Only abilities the hero does not own are
/// candidates; a full skill bar or passive set empties the matching pool.
pub fn generate_offers(
    hero: &Hero,
    env: &BattleEnv<'_>,
    seed: u64,
    cycle: u64,
) -> Result<ArrayVec<AdvancementOffer, { BattleConfig::MAX_ADVANCEMENT_OFFERS }>, OracleError> {
    let rng = env.rng()?;
    let mut roll_index = 0u32;
    let mut roll = |candidates: u32| {
        let draw_seed = compute_seed(seed, cycle, Side::Hero, context::OFFER_BASE + roll_index);
        roll_index += 1;
        rng.next_u32(draw_seed) % candidates.max(1)
    };

    let mut passives: Vec<&PassiveDefinition> = if hero.passives.len() < BattleConfig::MAX_PASSIVES
    {
        env.passives()?
            .definitions()
            .iter()
            .filter(|definition| !hero.passives.has(definition.id))
            .collect()
    } else {
        Vec::new()
    };
    let mut skills: Vec<&SkillDefinition> = if hero.skills.len() < BattleConfig::MAX_SKILL_SLOTS {
        env.skills()?
            .definitions()
            .iter()
            .filter(|definition| !hero.skills.knows(definition.id))
            .collect()
    } else {
        Vec::new()
    };

    let mut offers = ArrayVec::new();

    for _ in 0..2 {
        if offers.is_full() {
            break;
        }
        if let Some(passive) = take_weighted(&mut passives, &mut roll) {
            offers.push(AdvancementOffer::Passive(passive));
        }
    }
    if !offers.is_full() && !skills.is_empty() {
        let index = roll(skills.len() as u32) as usize;
        offers.push(AdvancementOffer::Skill(skills.remove(index).id));
    }

    // Pad from whatever is left once a pool has run dry.
    while !offers.is_full() {
        if let Some(passive) = take_weighted(&mut passives, &mut roll) {
            offers.push(AdvancementOffer::Passive(passive));
        } else if !skills.is_empty() {
            let index = roll(skills.len() as u32) as usize;
            offers.push(AdvancementOffer::Skill(skills.remove(index).id));
        } else {
            break;
        }
    }

    Ok(offers)
}

/// Applies the hero's pick from the offer sheet.
///
/// Returns the slot a learned skill landed in; passives return `None`.
pub fn apply_offer(
    hero: &mut Hero,
    offer: AdvancementOffer,
) -> Result<Option<SkillSlot>, AdvancementError> {
    match offer {
        AdvancementOffer::Skill(skill) => {
            if hero.skills.knows(skill) {
                return Err(AdvancementError::AlreadyOwned);
            }
            let slot = hero.skills.learn(skill).ok_or(AdvancementError::SkillBarFull)?;
            Ok(Some(slot))
        }
        AdvancementOffer::Passive(passive) => {
            if hero.passives.has(passive) {
                return Err(AdvancementError::AlreadyOwned);
            }
            if !hero.passives.learn(passive) {
                return Err(AdvancementError::PassiveSetFull);
            }
            Ok(None)
        }
    }
}

/// Removes one candidate by rarity weight. Commoner entries are likelier;
/// weights come from [`crate::env::Rarity::weight`].
fn take_weighted(
    candidates: &mut Vec<&PassiveDefinition>,
    roll: &mut impl FnMut(u32) -> u32,
) -> Option<PassiveId> {
    let total: u32 = candidates
        .iter()
        .map(|definition| definition.rarity.weight())
        .sum();
    if total == 0 {
        return None;
    }

    let mut pick = roll(total);
    let mut chosen = candidates.len() - 1;
    for (index, definition) in candidates.iter().enumerate() {
        let weight = definition.rarity.weight();
        if pick < weight {
            chosen = index;
            break;
        }
        pick -= weight;
    }
    Some(candidates.remove(chosen).id)
}
