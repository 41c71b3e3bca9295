//! The stock content shipped with the engine.
//!
//! Ids are stable contract: saved heroes, loot rules, and campaign plans
//! all reference catalog entries by these numbers. New entries append; old
//! ids never change meaning.

use battle_core::{
    BuffLedger, Equipment, Hero, Inventory, ItemDefinition, ItemKind, LootRule,
    MonsterDefinition, MonsterId, PassiveDefinition, PassiveKind, PassiveSet, Rarity,
    ResourcePool, SkillDefinition, SkillKind, SkillPower, SkillSlots,
};

use crate::catalogs::{ItemCatalog, MonsterCatalog, PassiveCatalog, SkillCatalog};

/// Stable ids of the built-in items.
pub mod items {
    use battle_core::ItemId;

    pub const CLAW_GLOVES: ItemId = ItemId(1);
    pub const KITTEN_HOOD: ItemId = ItemId(2);
    pub const WHISKER: ItemId = ItemId(3);
    pub const SILK_BALL: ItemId = ItemId(4);
    pub const CAT_BONE: ItemId = ItemId(5);
    pub const TIGER_FANG: ItemId = ItemId(6);
    pub const CLAW_BLADE: ItemId = ItemId(7);
    pub const PRINCESS_CLOAK: ItemId = ItemId(8);
    pub const POTION: ItemId = ItemId(9);
}

/// Stable ids of the built-in skills.
pub mod skills {
    use battle_core::SkillId;

    pub const POWER_STRIKE: SkillId = SkillId(1);
    pub const FIREBALL: SkillId = SkillId(2);
    pub const HEAL: SkillId = SkillId(3);
    pub const ICE_ARROW: SkillId = SkillId(4);
    pub const DOUBLE_STRIKE: SkillId = SkillId(5);
    pub const MAGIC_SHIELD: SkillId = SkillId(6);
    pub const BERSERK: SkillId = SkillId(7);
    pub const DRAIN_LIFE: SkillId = SkillId(8);
    pub const RISKY_BLAST: SkillId = SkillId(9);
    pub const ICE_WALL: SkillId = SkillId(10);
    pub const LIGHTNING_CHAIN: SkillId = SkillId(11);
}

/// Stable ids of the built-in passives.
pub mod passives {
    use battle_core::PassiveId;

    pub const QUICK_LEARNER: PassiveId = PassiveId(1);
    pub const TREASURE_HUNTER: PassiveId = PassiveId(2);
    pub const REGEN: PassiveId = PassiveId(3);
    pub const MANA_TRICKLE: PassiveId = PassiveId(4);
    pub const FROST_AURA: PassiveId = PassiveId(5);
    pub const RETALIATION: PassiveId = PassiveId(6);
    pub const SHADOW_STEP: PassiveId = PassiveId(7);
    pub const PHOENIX_HEART: PassiveId = PassiveId(8);
}

/// Stable ids of the built-in monsters.
pub mod monsters {
    use battle_core::MonsterId;

    pub const GOBLIN: MonsterId = MonsterId(1);
    pub const SPIDER: MonsterId = MonsterId(2);
    pub const SKELETON: MonsterId = MonsterId(3);
    pub const ORC: MonsterId = MonsterId(4);
    pub const DRAGON: MonsterId = MonsterId(5);
}

/// The built-in item catalog: starter gear, upgrades, loot, and the potion.
pub fn item_catalog() -> ItemCatalog {
    let entry = |id, name: &str, kind, value| ItemDefinition {
        id,
        name: name.to_owned(),
        kind,
        value,
    };
    ItemCatalog::new(vec![
        entry(
            items::CLAW_GLOVES,
            "Claw Gloves",
            ItemKind::Weapon { attack_bonus: 5 },
            5,
        ),
        entry(
            items::KITTEN_HOOD,
            "Kitten Hood",
            ItemKind::Armor { defense_bonus: 5 },
            5,
        ),
        entry(items::WHISKER, "Whisker", ItemKind::Loot, 3),
        entry(items::SILK_BALL, "Silk Ball", ItemKind::Loot, 5),
        entry(items::CAT_BONE, "Cat Bone", ItemKind::Loot, 2),
        entry(items::TIGER_FANG, "Tiger Fang", ItemKind::Loot, 10),
        entry(
            items::CLAW_BLADE,
            "Claw Blade",
            ItemKind::Weapon { attack_bonus: 15 },
            50,
        ),
        entry(
            items::PRINCESS_CLOAK,
            "Princess Cloak",
            ItemKind::Armor { defense_bonus: 15 },
            60,
        ),
        entry(items::POTION, "Health Potion", ItemKind::Consumable, 25),
    ])
}

/// The built-in skill catalog.
pub fn skill_catalog() -> SkillCatalog {
    let entry = |id, name: &str, mana_cost, power, kind| SkillDefinition {
        id,
        name: name.to_owned(),
        mana_cost,
        power,
        kind,
    };
    SkillCatalog::new(vec![
        entry(
            skills::POWER_STRIKE,
            "Power Strike",
            15,
            SkillPower::Scaled(150),
            SkillKind::Damage,
        ),
        entry(
            skills::FIREBALL,
            "Fireball",
            20,
            SkillPower::Flat(30),
            SkillKind::MagicDamage,
        ),
        entry(
            skills::HEAL,
            "Heal",
            25,
            SkillPower::Flat(40),
            SkillKind::Heal,
        ),
        entry(
            skills::ICE_ARROW,
            "Ice Arrow",
            18,
            SkillPower::Flat(15),
            SkillKind::MagicDamage,
        ),
        entry(
            skills::DOUBLE_STRIKE,
            "Double Strike",
            30,
            SkillPower::Scaled(70),
            SkillKind::MultiHit,
        ),
        entry(
            skills::MAGIC_SHIELD,
            "Magic Shield",
            20,
            SkillPower::Flat(0),
            SkillKind::BuffDefense,
        ),
        entry(
            skills::BERSERK,
            "Berserk",
            10,
            SkillPower::Flat(0),
            SkillKind::Berserk,
        ),
        entry(
            skills::DRAIN_LIFE,
            "Drain Life",
            20,
            SkillPower::Flat(20),
            SkillKind::Drain,
        ),
        entry(
            skills::RISKY_BLAST,
            "Risky Blast",
            25,
            SkillPower::Flat(40),
            SkillKind::RiskyBlast,
        ),
        entry(
            skills::ICE_WALL,
            "Ice Wall",
            15,
            SkillPower::Flat(0),
            SkillKind::IceWall,
        ),
        entry(
            skills::LIGHTNING_CHAIN,
            "Lightning Chain",
            20,
            SkillPower::Flat(25),
            SkillKind::LightningChain,
        ),
    ])
}

/// The built-in passive catalog.
pub fn passive_catalog() -> PassiveCatalog {
    let entry = |id, name: &str, rarity, kind| PassiveDefinition {
        id,
        name: name.to_owned(),
        rarity,
        kind,
    };
    PassiveCatalog::new(vec![
        entry(
            passives::QUICK_LEARNER,
            "Quick Learner",
            Rarity::Common,
            PassiveKind::ExperienceBoost,
        ),
        entry(
            passives::TREASURE_HUNTER,
            "Treasure Hunter",
            Rarity::Common,
            PassiveKind::GoldBoost,
        ),
        entry(
            passives::REGEN,
            "Regeneration",
            Rarity::Uncommon,
            PassiveKind::Regen,
        ),
        entry(
            passives::MANA_TRICKLE,
            "Mana Trickle",
            Rarity::Uncommon,
            PassiveKind::ManaRegen,
        ),
        entry(
            passives::FROST_AURA,
            "Frost Aura",
            Rarity::Rare,
            PassiveKind::FrostAura,
        ),
        entry(
            passives::RETALIATION,
            "Retaliation",
            Rarity::Rare,
            PassiveKind::Retaliation,
        ),
        entry(
            passives::SHADOW_STEP,
            "Shadow Step",
            Rarity::Epic,
            PassiveKind::Dodge,
        ),
        entry(
            passives::PHOENIX_HEART,
            "Phoenix Heart",
            Rarity::Legendary,
            PassiveKind::Revive,
        ),
    ])
}

/// The built-in monster roster.
pub fn monster_catalog() -> MonsterCatalog {
    let entry = |id,
                 name: &str,
                 max_health,
                 attack,
                 defense,
                 experience_reward,
                 loot: &[LootRule]| MonsterDefinition {
        id,
        name: name.to_owned(),
        max_health,
        attack,
        defense,
        experience_reward,
        loot: loot.iter().copied().collect(),
    };
    let rule = |item, chance_percent, min_quantity, max_quantity| LootRule {
        item,
        chance_percent,
        min_quantity,
        max_quantity,
    };
    MonsterCatalog::new(vec![
        entry(
            monsters::GOBLIN,
            "Goblin",
            50,
            10,
            2,
            50,
            &[rule(items::WHISKER, 70, 1, 2)],
        ),
        entry(
            monsters::SPIDER,
            "Spider",
            70,
            15,
            4,
            75,
            &[rule(items::SILK_BALL, 60, 1, 1)],
        ),
        entry(
            monsters::SKELETON,
            "Skeleton",
            90,
            18,
            5,
            100,
            &[rule(items::CAT_BONE, 80, 1, 3)],
        ),
        entry(
            monsters::ORC,
            "Orc",
            150,
            25,
            10,
            150,
            &[rule(items::TIGER_FANG, 50, 1, 1)],
        ),
        entry(monsters::DRAGON, "Dragon", 500, 40, 20, 1000, &[]),
    ])
}

/// Encounter order for the stock campaign, final boss last.
pub fn campaign_roster() -> Vec<MonsterId> {
    vec![
        monsters::GOBLIN,
        monsters::SPIDER,
        monsters::SKELETON,
        monsters::ORC,
        monsters::DRAGON,
    ]
}

/// The standard level-1 loadout: starter gear equipped, the first two
/// attack skills learned, three potions in the belt.
pub fn starting_hero(name: impl Into<String>) -> Hero {
    let mut skill_bar = SkillSlots::new();
    skill_bar.learn(skills::POWER_STRIKE);
    skill_bar.learn(skills::FIREBALL);
    let mut equipment = Equipment::default();
    equipment.equip_weapon(items::CLAW_GLOVES);
    equipment.equip_armor(items::KITTEN_HOOD);

    Hero {
        name: name.into(),
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
        skills: skill_bar,
        passives: PassiveSet::new(),
        buffs: BuffLedger::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{ItemOracle, MonsterOracle, PassiveOracle, SkillOracle, SkillSlot};

    #[test]
    fn catalogs_carry_the_full_roster() {
        assert_eq!(item_catalog().definitions().len(), 9);
        assert_eq!(skill_catalog().definitions().len(), 11);
        assert_eq!(passive_catalog().definitions().len(), 8);
        assert_eq!(monster_catalog().definitions().len(), 5);
    }

    #[test]
    fn ids_are_unique_within_each_catalog() {
        let items = item_catalog();
        let mut ids: Vec<_> = items.definitions().iter().map(|item| item.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.definitions().len());

        let skills = skill_catalog();
        let mut ids: Vec<_> = skills.definitions().iter().map(|skill| skill.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), skills.definitions().len());
    }

    #[test]
    fn every_loot_rule_points_at_a_cataloged_item() {
        let items = item_catalog();
        for monster in monster_catalog().definitions() {
            for rule in &monster.loot {
                assert!(
                    items.definition(rule.item).is_some(),
                    "{} drops unknown item {:?}",
                    monster.name,
                    rule.item
                );
            }
        }
    }

    #[test]
    fn skill_numbers_match_the_design_sheet() {
        let skills = skill_catalog();
        let strike = skills.definition(super::skills::POWER_STRIKE).unwrap();
        assert_eq!(strike.mana_cost, 15);
        assert_eq!(strike.power, SkillPower::Scaled(150));
        assert_eq!(strike.kind, SkillKind::Damage);

        let blast = skills.definition(super::skills::RISKY_BLAST).unwrap();
        assert_eq!(blast.mana_cost, 25);
        assert_eq!(blast.power, SkillPower::Flat(40));
        assert_eq!(blast.kind, SkillKind::RiskyBlast);
    }

    #[test]
    fn rarities_run_common_to_legendary() {
        let passives = passive_catalog();
        let learner = passives.definition(super::passives::QUICK_LEARNER).unwrap();
        assert_eq!(learner.rarity, Rarity::Common);
        assert_eq!(learner.kind, PassiveKind::ExperienceBoost);

        let phoenix = passives.definition(super::passives::PHOENIX_HEART).unwrap();
        assert_eq!(phoenix.rarity, Rarity::Legendary);
        assert_eq!(phoenix.kind, PassiveKind::Revive);
    }

    #[test]
    fn the_goblin_drops_whiskers() {
        let monsters = monster_catalog();
        let goblin = monsters.definition(super::monsters::GOBLIN).unwrap();
        assert_eq!(goblin.max_health, 50);
        assert_eq!(goblin.experience_reward, 50);
        assert_eq!(goblin.loot.len(), 1);
        assert_eq!(goblin.loot[0].item, items::WHISKER);
        assert_eq!(goblin.loot[0].chance_percent, 70);
        assert_eq!((goblin.loot[0].min_quantity, goblin.loot[0].max_quantity), (1, 2));

        let dragon = monsters.definition(super::monsters::DRAGON).unwrap();
        assert!(dragon.loot.is_empty());
    }

    #[test]
    fn the_roster_ends_at_the_dragon() {
        let roster = campaign_roster();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.first(), Some(&monsters::GOBLIN));
        assert_eq!(roster.last(), Some(&monsters::DRAGON));
    }

    #[test]
    fn the_starting_hero_is_battle_ready() {
        let hero = starting_hero("Whiskers");
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.experience_to_next, 100);
        assert_eq!(hero.gold, 50);
        assert_eq!(hero.potions, 3);
        assert_eq!(hero.health.maximum(), 100);
        assert_eq!(hero.mana.maximum(), 50);
        assert_eq!(hero.attack, 10);
        assert_eq!(hero.defense, 5);
        assert_eq!(hero.equipment.weapon, Some(items::CLAW_GLOVES));
        assert_eq!(hero.equipment.armor, Some(items::KITTEN_HOOD));
        assert_eq!(hero.skills.get(SkillSlot(1)), Some(skills::POWER_STRIKE));
        assert_eq!(hero.skills.get(SkillSlot(2)), Some(skills::FIREBALL));
        assert!(hero.passives.is_empty());
        assert!(hero.inventory.is_empty());
    }
}
