//! The city registry, consumed read-only by the world tick.

use wastes_core::{CityDef, WorldPos};

pub fn cities() -> Vec<CityDef> {
    vec![
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
        CityDef {
            id: "fountain",
            name: "Fountain",
            merchant_name: "Aqua",
            position: WorldPos::new(30.0, 40.0),
            color: "#38bdf8",
        },
    ]
}
