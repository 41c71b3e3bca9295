//! Shared fixtures for battle-core unit tests.
//!
//! The catalogs here are deliberately tiny and slanted toward round
//! numbers so expected values in assertions can be recomputed by eye:
//! the hero totals 15 attack / 10 defense with starting gear, and the
//! stock monster is a 50 HP / 10 attack / 2 defense goblin worth 50
//! experience with one 70 percent whisker drop.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::env::{
    BattleEnv, Env, ItemDefinition, ItemKind, ItemOracle, LootRule, MonsterDefinition,
    MonsterOracle, PassiveDefinition, PassiveKind, PassiveOracle, Rarity, RngOracle,
    SkillDefinition, SkillKind, SkillOracle, SkillPower,
};
use crate::state::{
    BattleState, BuffLedger, Equipment, Hero, Inventory, ItemId, Monster, MonsterId, PassiveId,
    PassiveSet, SkillId, SkillSlots,
};
use crate::stats::ResourcePool;

pub const CLAW_GLOVES: ItemId = ItemId(1);
pub const KITTEN_HOOD: ItemId = ItemId(2);
pub const WHISKER: ItemId = ItemId(3);
pub const POTION: ItemId = ItemId(4);
pub const CLAW_BLADE: ItemId = ItemId(5);

pub const QUICK_LEARNER: PassiveId = PassiveId(1);
pub const TREASURE_HUNTER: PassiveId = PassiveId(2);
pub const REGEN: PassiveId = PassiveId(3);
pub const MANA_TRICKLE: PassiveId = PassiveId(4);
pub const FROST_AURA: PassiveId = PassiveId(5);
pub const THORN_HIDE: PassiveId = PassiveId(6);
pub const SHADOW_STEP: PassiveId = PassiveId(7);
pub const PHOENIX_HEART: PassiveId = PassiveId(8);

pub const GOBLIN: MonsterId = MonsterId(1);

/// Rng stub that returns the same value for every seed.
///
/// `rolling(n)` makes every `roll_d100` produce exactly `n` and every
/// `range` draw `min + (n - 1) % span`, so `rolling(1)` passes every
/// percent check at the minimum of every range and `rolling(100)` fails
/// every check below 100.
pub struct FixedRng {
    value: u32,
}

impl FixedRng {
    pub fn rolling(roll: u32) -> Self {
        Self { value: roll - 1 }
    }
}

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.value
    }
}

pub struct ItemTable {
    definitions: Vec<ItemDefinition>,
}

impl ItemOracle for ItemTable {
    fn definition(&self, item: ItemId) -> Option<&ItemDefinition> {
        self.definitions.iter().find(|entry| entry.id == item)
    }

    fn definitions(&self) -> &[ItemDefinition] {
        &self.definitions
    }
}

pub struct SkillTable {
    definitions: Vec<SkillDefinition>,
}

impl SkillTable {
    /// First cataloged skill of the given kind.
    pub fn by_kind(&self, kind: SkillKind) -> &SkillDefinition {
        self.definitions
            .iter()
            .find(|entry| entry.kind == kind)
            .expect("every skill kind has a fixture")
    }
}

impl SkillOracle for SkillTable {
    fn definition(&self, skill: SkillId) -> Option<&SkillDefinition> {
        self.definitions.iter().find(|entry| entry.id == skill)
    }

    fn definitions(&self) -> &[SkillDefinition] {
        &self.definitions
    }
}

pub struct PassiveTable {
    definitions: Vec<PassiveDefinition>,
}

impl PassiveOracle for PassiveTable {
    fn definition(&self, passive: PassiveId) -> Option<&PassiveDefinition> {
        self.definitions.iter().find(|entry| entry.id == passive)
    }

    fn definitions(&self) -> &[PassiveDefinition] {
        &self.definitions
    }
}

pub struct MonsterTable {
    definitions: Vec<MonsterDefinition>,
}

impl MonsterOracle for MonsterTable {
    fn definition(&self, monster: MonsterId) -> Option<&MonsterDefinition> {
        self.definitions.iter().find(|entry| entry.id == monster)
    }

    fn definitions(&self) -> &[MonsterDefinition] {
        &self.definitions
    }
}

/// Owns one of every catalog plus a config and a default rng, so tests can
/// borrow a full [`BattleEnv`] from a single binding.
pub struct Fixtures {
    pub items: ItemTable,
    pub skills: SkillTable,
    pub passives: PassiveTable,
    pub monsters: MonsterTable,
    pub config: BattleConfig,
    pub rng: FixedRng,
}

impl Fixtures {
    /// Environment over every fixture catalog. The default rng rolls a
    /// constant 100, so no chance effect fires unless a test swaps it.
    pub fn env(&self) -> BattleEnv<'_> {
        Env::with_all(
            &self.items,
            &self.skills,
            &self.passives,
            &self.monsters,
            &self.rng,
            &self.config,
        )
        .into_battle_env()
    }

    /// Same catalogs, custom rolls.
    pub fn env_with_rng<'a>(&'a self, rng: &'a dyn RngOracle) -> BattleEnv<'a> {
        Env::new(
            Some(&self.items as &dyn ItemOracle),
            Some(&self.skills as &dyn SkillOracle),
            Some(&self.passives as &dyn PassiveOracle),
            Some(&self.monsters as &dyn MonsterOracle),
            Some(rng),
            Some(&self.config),
        )
    }
}

pub fn fixtures() -> Fixtures {
    Fixtures {
        items: items(),
        skills: skills(),
        passives: passives(),
        monsters: monsters(),
        config: BattleConfig::new(),
        rng: FixedRng::rolling(100),
    }
}

/// A fresh battle against the stock goblin, seeded at zero.
pub fn battle() -> (BattleState, Fixtures) {
    (BattleState::new(hero(), monster(), 0), fixtures())
}

/// The standard starting hero: 100 HP, 50 mana, 10/5 base stats, claw
/// gloves and kitten hood equipped, the first two skills learned.
pub fn hero() -> Hero {
    let mut skills = SkillSlots::new();
    skills.learn(SkillId(1));
    skills.learn(SkillId(2));
    let mut equipment = Equipment::default();
    equipment.equip_weapon(CLAW_GLOVES);
    equipment.equip_armor(KITTEN_HOOD);

    Hero {
        name: "Whiskers".to_owned(),
        level: 1,
        experience: 0,
        experience_to_next: 100,
        gold: 50,
        potions: 3,
        health: ResourcePool::new(100),
        mana: ResourcePool::new(50),
        attack: 10,
        defense: 5,
        equipment,
        inventory: Inventory::new(),
        skills,
        passives: PassiveSet::new(),
        buffs: BuffLedger::new(),
    }
}

pub fn monster() -> Monster {
    Monster::spawn(&goblin())
}

pub fn items() -> ItemTable {
    ItemTable {
        definitions: vec![
            ItemDefinition {
                id: CLAW_GLOVES,
                name: "claw gloves".to_owned(),
                kind: ItemKind::Weapon { attack_bonus: 5 },
                value: 5,
            },
            ItemDefinition {
                id: KITTEN_HOOD,
                name: "kitten hood".to_owned(),
                kind: ItemKind::Armor { defense_bonus: 5 },
                value: 5,
            },
            ItemDefinition {
                id: WHISKER,
                name: "whisker".to_owned(),
                kind: ItemKind::Loot,
                value: 3,
            },
            ItemDefinition {
                id: POTION,
                name: "potion".to_owned(),
                kind: ItemKind::Consumable,
                value: 25,
            },
            ItemDefinition {
                id: CLAW_BLADE,
                name: "claw blade".to_owned(),
                kind: ItemKind::Weapon { attack_bonus: 15 },
                value: 50,
            },
        ],
    }
}

fn skills() -> SkillTable {
    let entry = |id: u32, name: &str, mana_cost: u32, power: SkillPower, kind: SkillKind| {
        SkillDefinition {
            id: SkillId(id),
            name: name.to_owned(),
            mana_cost,
            power,
            kind,
        }
    };
    SkillTable {
        definitions: vec![
            entry(1, "scratch", 15, SkillPower::Scaled(150), SkillKind::Damage),
            entry(2, "spark", 20, SkillPower::Flat(30), SkillKind::MagicDamage),
            entry(3, "lick wounds", 25, SkillPower::Flat(40), SkillKind::Heal),
            entry(4, "flurry", 30, SkillPower::Scaled(70), SkillKind::MultiHit),
            entry(5, "guard up", 20, SkillPower::Flat(0), SkillKind::BuffDefense),
            entry(6, "berserk", 10, SkillPower::Flat(0), SkillKind::Berserk),
            entry(7, "drain", 20, SkillPower::Flat(20), SkillKind::Drain),
            entry(8, "risky blast", 25, SkillPower::Flat(40), SkillKind::RiskyBlast),
            entry(9, "ice wall", 15, SkillPower::Flat(0), SkillKind::IceWall),
            entry(
                10,
                "lightning chain",
                20,
                SkillPower::Flat(25),
                SkillKind::LightningChain,
            ),
        ],
    }
}

fn passives() -> PassiveTable {
    let entry = |id: PassiveId, name: &str, rarity: Rarity, kind: PassiveKind| PassiveDefinition {
        id,
        name: name.to_owned(),
        rarity,
        kind,
    };
    PassiveTable {
        definitions: vec![
            entry(
                QUICK_LEARNER,
                "quick learner",
                Rarity::Common,
                PassiveKind::ExperienceBoost,
            ),
            entry(
                TREASURE_HUNTER,
                "treasure hunter",
                Rarity::Common,
                PassiveKind::GoldBoost,
            ),
            entry(REGEN, "regen", Rarity::Uncommon, PassiveKind::Regen),
            entry(
                MANA_TRICKLE,
                "mana trickle",
                Rarity::Uncommon,
                PassiveKind::ManaRegen,
            ),
            entry(FROST_AURA, "frost aura", Rarity::Rare, PassiveKind::FrostAura),
            entry(
                THORN_HIDE,
                "thorn hide",
                Rarity::Rare,
                PassiveKind::Retaliation,
            ),
            entry(SHADOW_STEP, "shadow step", Rarity::Epic, PassiveKind::Dodge),
            entry(
                PHOENIX_HEART,
                "phoenix heart",
                Rarity::Legendary,
                PassiveKind::Revive,
            ),
        ],
    }
}

fn goblin() -> MonsterDefinition {
    let mut loot = ArrayVec::new();
    loot.push(LootRule {
        item: WHISKER,
        chance_percent: 70,
        min_quantity: 1,
        max_quantity: 2,
    });
    MonsterDefinition {
        id: GOBLIN,
        name: "goblin".to_owned(),
        max_health: 50,
        attack: 10,
        defense: 2,
        experience_reward: 50,
        loot,
    }
}

fn monsters() -> MonsterTable {
    MonsterTable {
        definitions: vec![goblin()],
    }
}
