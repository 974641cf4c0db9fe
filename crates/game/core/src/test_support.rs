//! Shared fixtures for unit tests: a compact catalog exercising every item
//! kind and pool the simulation draws from.

use crate::catalog::{Catalog, CityDef, FactionTemplate, ItemTemplate};
use crate::state::{ItemId, ItemKind, UseDirective, WorldPos};

fn weapon(id: u32, name: &'static str, damage: u32) -> ItemTemplate {
    ItemTemplate {
        id: ItemId(id),
        name,
        kind: ItemKind::Weapon,
        icon: "⚔️",
        description: "test weapon",
        damage: Some(damage),
        armor: None,
        effect: None,
        price: Some(10),
        use_directive: None,
        default_quantity: 1,
    }
}

fn armor(id: u32, name: &'static str, value: u32) -> ItemTemplate {
    ItemTemplate {
        id: ItemId(id),
        name,
        kind: ItemKind::Armor,
        icon: "🛡️",
        description: "test armor",
        damage: None,
        armor: Some(value),
        effect: None,
        price: Some(10),
        use_directive: None,
        default_quantity: 1,
    }
}

pub(crate) fn minimal_catalog() -> Catalog {
    let starter_items = vec![
        weapon(1, "Short sword", 5),
        weapon(9, "Boot knife", 4),
        ItemTemplate {
            id: ItemId(15),
            name: "Scrap iron",
            kind: ItemKind::Resource,
            icon: "🪨",
            description: "crafting stock",
            damage: None,
            armor: None,
            effect: Some("Crafting material"),
            price: Some(10),
            use_directive: None,
            default_quantity: 20,
        },
    ];

    let reward_pool = vec![
        weapon(101, "Rusty shiv", 3),
        weapon(107, "Short sword", 5),
        weapon(113, "Hatchet", 6),
        weapon(119, "Short bow", 4),
        armor(151, "Leather hood", 2),
        armor(156, "Padded jacket", 5),
        ItemTemplate {
            id: ItemId(201),
            name: "Herbal powder",
            kind: ItemKind::Miscellaneous,
            icon: "🌿",
            description: "restores 2 HP to the whole squad",
            damage: None,
            armor: None,
            effect: Some("Heals 2 HP (squad)"),
            price: Some(25),
            use_directive: Some(UseDirective::HealSquad(2)),
            default_quantity: 1,
        },
        ItemTemplate {
            id: ItemId(202),
            name: "Healing salve",
            kind: ItemKind::Miscellaneous,
            icon: "🩹",
            description: "restores 5 HP to the whole squad",
            damage: None,
            armor: None,
            effect: Some("Heals 5 HP (squad)"),
            price: Some(60),
            use_directive: Some(UseDirective::HealSquad(5)),
            default_quantity: 1,
        },
        ItemTemplate {
            id: ItemId(301),
            name: "Water purifier chip",
            kind: ItemKind::Quest,
            icon: "💧",
            description: "vital for the Oasis",
            damage: None,
            armor: None,
            effect: Some("Quest item"),
            price: None,
            use_directive: None,
            default_quantity: 1,
        },
    ];

    Catalog {
        starter_items,
        reward_pool,
        quest_item_pool: vec![
            ItemId(101),
            ItemId(107),
            ItemId(113),
            ItemId(119),
            ItemId(151),
            ItemId(156),
            ItemId(201),
            ItemId(15),
        ],
        loot_table: vec![ItemId(101), ItemId(201)],
        cities: vec![
            CityDef {
                id: "oasis",
                name: "Oasis",
                merchant_name: "Hassan",
                position: WorldPos::new(150.0, 50.0),
                color: "#4ade80",
            },
            CityDef {
                id: "scrapheap",
                name: "Scrapheap",
                merchant_name: "Rusty Pete",
                position: WorldPos::new(50.0, 170.0),
                color: "#f59e0b",
            },
        ],
        faction_templates: vec![
            FactionTemplate {
                name: "Waste Marauders",
                icon: "🤠",
                color: "#ca8a04",
            },
            FactionTemplate {
                name: "Feral Ghouls",
                icon: "💀",
                color: "#78716c",
            },
        ],
    }
}
