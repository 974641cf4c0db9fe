//! Faction flavor templates rolled at world init and on every respawn.

use wastes_core::FactionTemplate;

pub fn faction_templates() -> Vec<FactionTemplate> {
    vec![
        FactionTemplate {
            name: "Waste Marauders",
            icon: "🤠",
            color: "#ca8a04",
        },
        FactionTemplate {
            name: "Roaming Mutants",
            icon: "🧟",
            color: "#16a34a",
        },
        FactionTemplate {
            name: "Rusted Bolts",
            icon: "🤖",
            color: "#a8a29e",
        },
        FactionTemplate {
            name: "Corrosion Cultists",
            icon: "⚙️",
            color: "#b91c1c",
        },
        FactionTemplate {
            name: "Feral Ghouls",
            icon: "💀",
            color: "#78716c",
        },
        FactionTemplate {
            name: "Rad-Hound Pack",
            icon: "🐕",
            color: "#eab308",
        },
        FactionTemplate {
            name: "Toxic Drifters",
            icon: "🤢",
            color: "#84cc16",
        },
        FactionTemplate {
            name: "Flesh Eaters",
            icon: "🍽️",
            color: "#dc2626",
        },
        FactionTemplate {
            name: "Scavengers",
            icon: "🗑️",
            color: "#64748b",
        },
        FactionTemplate {
            name: "Giant Insects",
            icon: "🐜",
            color: "#4d7c0f",
        },
    ]
}
