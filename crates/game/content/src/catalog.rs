//! Item catalogs.

use wastes_core::{ItemId, ItemKind, ItemTemplate, UseDirective};

fn weapon(id: u32, name: &'static str, icon: &'static str, description: &'static str, damage: u32) -> ItemTemplate {
    ItemTemplate {
        id: ItemId(id),
        name,
        kind: ItemKind::Weapon,
        icon,
        description,
        damage: Some(damage),
        armor: None,
        effect: None,
        price: Some(10),
        use_directive: None,
        default_quantity: 1,
    }
}

fn armor(id: u32, name: &'static str, icon: &'static str, description: &'static str, value: u32) -> ItemTemplate {
    ItemTemplate {
        id: ItemId(id),
        name,
        kind: ItemKind::Armor,
        icon,
        description,
        damage: None,
        armor: Some(value),
        effect: None,
        price: Some(10),
        use_directive: None,
        default_quantity: 1,
    }
}

fn healer(id: u32, name: &'static str, icon: &'static str, description: &'static str, heal: u32, price: u32) -> ItemTemplate {
    ItemTemplate {
        id: ItemId(id),
        name,
        kind: ItemKind::Miscellaneous,
        icon,
        description,
        damage: None,
        armor: None,
        effect: Some("Heals the whole squad"),
        price: Some(price),
        use_directive: Some(UseDirective::HealSquad(heal)),
        default_quantity: 1,
    }
}

/// Gear and goods available from the very start of the game.
pub fn starter_items() -> Vec<ItemTemplate> {
    vec![
        weapon(1, "Iron sword", "⚔️", "Plain but dependable. Fit for a green fighter.", 5),
        armor(2, "Steel cuirass", "🛡️", "Heavy plate with serious stopping power.", 10),
        weapon(3, "Wooden bow", "🏹", "Good enough for hunting and keeping trouble at bay.", 3),
        armor(4, "Leather tunic", "🎽", "Light and quiet. A scout's second skin.", 4),
        weapon(5, "Shock staff", "🪄", "An old cattle prod rewired far past its rating.", 8),
        armor(6, "Iron helmet", "🪖", "Keeps your skull where it belongs.", 5),
        weapon(7, "Crossbow", "🎯", "Slow to load, quick to end arguments.", 7),
        armor(8, "Chainmail shirt", "⛓️", "Flexible rings, decent trade of weight for cover.", 8),
        weapon(9, "Boot knife", "🔪", "Fast, silent, always within reach.", 4),
        weapon(10, "Battle axe", "🪓", "Swings heavy enough to settle most disputes.", 12),
        armor(11, "Plate harness", "🥋", "A full set of scavenged plating.", 15),
        weapon(12, "Flame rod", "🔥", "Spits burning fuel a few paces.", 10),
        armor(13, "Frost shield", "❄️", "Cold to the touch; colder to whoever hits it.", 7),
        ItemTemplate {
            id: ItemId(14),
            name: "Health tonic",
            kind: ItemKind::Miscellaneous,
            icon: "🧪",
            description: "Restores a little strength. Tastes like rust.",
            damage: None,
            armor: None,
            effect: Some("Restores a little health"),
            price: Some(10),
            use_directive: None,
            default_quantity: 5,
        },
        ItemTemplate {
            id: ItemId(15),
            name: "Scrap iron",
            kind: ItemKind::Resource,
            icon: "🪨",
            description: "Base stock for forging anything that cuts or covers.",
            damage: None,
            armor: None,
            effect: Some("Crafting material"),
            price: Some(10),
            use_directive: None,
            default_quantity: 20,
        },
        ItemTemplate {
            id: ItemId(16),
            name: "Mutant scale",
            kind: ItemKind::Quest,
            icon: "🐲",
            description: "A rare hide fragment someone will pay dearly for.",
            damage: None,
            armor: None,
            effect: Some("Quest item"),
            price: None,
            use_directive: None,
            default_quantity: 1,
        },
    ]
}

/// The loot pool: combat rewards, merchant stock, and map spawns all roll
/// from here.
pub fn reward_pool() -> Vec<ItemTemplate> {
    vec![
        // Knives (damage 3-8)
        weapon(101, "Rusty shiv", "🔪", "Better than nothing.", 3),
        weapon(102, "Iron stiletto", "🔪", "Sharp and quick.", 4),
        weapon(103, "Raider cleaver", "🔪", "Crude but effective.", 5),
        weapon(104, "Honed blade", "🔪", "Elegant and lethal.", 6),
        weapon(105, "Assassin's dagger", "🔪", "Soaked in something unpleasant.", 7),
        weapon(106, "Polished dirk", "🔪", "Light and improbably durable.", 8),
        // Swords (damage 5-15)
        weapon(107, "Short sword", "⚔️", "Standard line-infantry issue, once.", 5),
        weapon(108, "Long sword", "⚔️", "Takes training to use well.", 7),
        weapon(109, "Scimitar", "⚔️", "A curved blade for slashing work.", 8),
        weapon(110, "Knight's sword", "⚔️", "A relic of better days.", 10),
        weapon(111, "Claymore", "⚔️", "Two hands, one outcome.", 12),
        weapon(112, "Rune blade", "⚔️", "Glows faintly near old-world tech.", 15),
        // Axes (damage 6-18)
        weapon(113, "Hatchet", "🪓", "Handy in camp and in a scrap.", 6),
        weapon(114, "War axe", "🪓", "Bites through light armor.", 9),
        weapon(115, "Broad axe", "🪓", "A barbarian's answer to everything.", 11),
        weapon(116, "Forged axe", "🪓", "Perfectly balanced by a patient smith.", 14),
        weapon(117, "Headsman's axe", "🪓", "A two-handed executioner's tool.", 16),
        weapon(118, "Warlord's axe", "🪓", "It has a taste for blood.", 18),
        // Bows (damage 4-14)
        weapon(119, "Short bow", "🏹", "Made for fast shooting.", 4),
        weapon(120, "Long bow", "🏹", "Reaches far across the flats.", 6),
        weapon(121, "Hunting bow", "🏹", "Reliable and accurate.", 8),
        weapon(122, "Composite bow", "🏹", "Powerful and compact.", 10),
        weapon(123, "Marksman's bow", "🏹", "It rarely misses.", 12),
        weapon(124, "Whisper bow", "🏹", "The string sings a quiet dirge.", 14),
        // Helms (armor 2-8)
        armor(151, "Leather hood", "🪖", "Keeps out the wind and prying eyes.", 2),
        armor(152, "Iron helmet", "🪖", "Simple, honest protection.", 4),
        armor(153, "Steel helmet", "🪖", "Takes a hit and asks for another.", 6),
        armor(154, "Great helm", "🪖", "Covers the whole head.", 7),
        armor(155, "Beast-skull helm", "🪖", "Carved from something enormous.", 8),
        // Chest pieces (armor 5-20)
        armor(156, "Padded jacket", "🎽", "Better than walking bare.", 5),
        armor(157, "Chain shirt", "⛓️", "Stops the slashing kind of trouble.", 8),
        armor(158, "Iron cuirass", "🛡️", "Dependable torso cover.", 12),
        armor(159, "Steel plate", "🥋", "Full coverage for the careful.", 16),
        armor(160, "Composite plate", "💎", "Nearly unbreakable salvage.", 20),
        // Shields and more (armor 1-10)
        armor(161, "Cloth gloves", "🧤", "For delicate fingers.", 1),
        armor(162, "Leather boots", "👢", "Comfortable on long marches.", 2),
        armor(163, "Wooden shield", "🛡️", "Blocks the weak stuff.", 3),
        armor(164, "Iron shield", "🛡️", "A fighter's steady companion.", 6),
        armor(165, "Tower shield", "🛡️", "Hides almost all of you.", 10),
        armor(166, "Bone armor", "🦴", "Inspires a particular kind of dread.", 14),
        // Squad healing consumables
        healer(201, "Herbal powder", "🌿", "Ground healing herbs. Restores 2 HP to every squad member.", 2, 25),
        healer(202, "Healing salve", "🩹", "A thick, sharp-smelling paste. Restores 5 HP to every squad member.", 5, 60),
        healer(203, "Field medkit", "⛑️", "Emergency supplies. Restores 10 HP to every squad member.", 10, 120),
        healer(204, "Combat stimulant", "💉", "Military-grade revival shot. Restores 20 HP to every squad member.", 20, 250),
        // Main quest item
        ItemTemplate {
            id: ItemId(301),
            name: "Water purifier chip",
            kind: ItemKind::Quest,
            icon: "💧",
            description: "An intricate filtration controller. The Oasis cannot survive without it.",
            damage: None,
            armor: None,
            effect: Some("Quest item"),
            price: None,
            use_directive: None,
            default_quantity: 1,
        },
    ]
}

/// Item ids merchants may request in fetch quests.
pub(crate) fn quest_item_pool() -> Vec<ItemId> {
    vec![
        ItemId(101), // Rusty shiv
        ItemId(107), // Short sword
        ItemId(113), // Hatchet
        ItemId(119), // Short bow
        ItemId(151), // Leather hood
        ItemId(156), // Padded jacket
        ItemId(201), // Herbal powder
        ItemId(15),  // Scrap iron
    ]
}

/// Item ids the generic overworld spawner drops.
pub(crate) fn loot_table() -> Vec<ItemId> {
    vec![
        ItemId(101), // Rusty shiv
        ItemId(201), // Herbal powder
    ]
}
