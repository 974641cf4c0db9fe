//! Merchant stock generation, trading, and city transitions.

mod quests;

pub use quests::{QuestError, main_quest_entry};

use std::f32::consts::TAU;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::inventory::Inventory;
use crate::rng::SessionRng;
use crate::state::{ItemKind, Mode, SessionState, StackId, StackIds, WorldPos};

/// Rejections for trades. Transactions are all-or-nothing: an error leaves
/// silver and both inventories untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TradeError {
    #[error("not enough silver")]
    InsufficientSilver,
    #[error("quest items cannot be sold")]
    QuestItemNotSellable,
    #[error("not inside a city")]
    NoMerchant,
    #[error("stack not found")]
    StackNotFound,
}

/// Rolls a merchant stock: a fixed-size set of unique non-quest items from
/// the reward pool (fewer only when the pool runs out). Stackable kinds get
/// a randomized quantity, gear always comes as singles.
pub fn roll_merchant_stock(catalog: &Catalog, rng: &mut SessionRng, ids: &mut StackIds) -> Inventory {
    let mut stock = Inventory::new();
    let mut chosen = Vec::new();
    let sellable = catalog
        .reward_pool
        .iter()
        .filter(|t| t.kind != ItemKind::Quest)
        .count();

    while stock.len() < GameConfig::MERCHANT_STOCK_SIZE && chosen.len() < sellable {
        let Some(template) = rng.pick(&catalog.reward_pool).copied() else {
            break;
        };
        if template.kind == ItemKind::Quest || chosen.contains(&template.id) {
            continue;
        }
        let quantity = if template.kind.is_stackable() && rng.unit_f32() > 0.7 {
            rng.range_u32(1, 5)
        } else {
            1
        };
        stock.insert_stack(template.instantiate(ids, quantity));
        chosen.push(template.id);
    }
    stock
}

impl SessionState {
    /// Enters a city: switches mode and re-rolls that merchant's stock.
    /// Merchant inventories do not accumulate between visits.
    pub fn enter_city(&mut self, city_id: &str, catalog: &Catalog, rng: &mut SessionRng) {
        let stock = roll_merchant_stock(catalog, rng, &mut self.stack_ids);
        self.merchant_stocks.insert(city_id.to_string(), stock);
        self.current_city = Some(city_id.to_string());
        self.mode = Mode::City;
    }

    /// Leaves the current city, repositioning the player just outside the
    /// city radius at a random bearing so the next tick does not immediately
    /// re-trigger the contact.
    pub fn exit_city(&mut self, catalog: &Catalog, rng: &mut SessionRng) {
        if let Some(city) = self
            .current_city
            .take()
            .and_then(|id| catalog.city(&id))
        {
            let angle = rng.range_f32(0.0, TAU);
            self.player_position = WorldPos::new(
                city.position.x + GameConfig::CITY_EXIT_DISTANCE * angle.cos(),
                city.position.y + GameConfig::CITY_EXIT_DISTANCE * angle.sin(),
            )
            .clamped(GameConfig::MAP_WIDTH, GameConfig::MAP_HEIGHT);
        }
        self.mode = Mode::Map;
    }

    /// Buys a stack from the current city's merchant. Debits the full price
    /// or rejects; the stack moves wholesale, keeping its id.
    pub fn buy(&mut self, stack: StackId) -> Result<(), TradeError> {
        let city = self.current_city.clone().ok_or(TradeError::NoMerchant)?;
        let stock = self
            .merchant_stocks
            .get_mut(&city)
            .ok_or(TradeError::NoMerchant)?;
        let price = stock
            .get(stack)
            .ok_or(TradeError::StackNotFound)?
            .price
            .unwrap_or(0);
        if self.silver < price {
            return Err(TradeError::InsufficientSilver);
        }
        let item = stock.remove_stack(stack).ok_or(TradeError::StackNotFound)?;
        self.silver -= price;
        self.inventory.insert_stack(item);
        Ok(())
    }

    /// Sells an inventory stack to the current city's merchant. Quest items
    /// are never sellable.
    pub fn sell(&mut self, stack: StackId) -> Result<(), TradeError> {
        let city = self.current_city.clone().ok_or(TradeError::NoMerchant)?;
        let item = self.inventory.get(stack).ok_or(TradeError::StackNotFound)?;
        if item.kind == ItemKind::Quest {
            return Err(TradeError::QuestItemNotSellable);
        }
        let price = item.price.unwrap_or(0);
        let item = self
            .inventory
            .remove_stack(stack)
            .ok_or(TradeError::StackNotFound)?;
        self.silver += price;
        self.merchant_stocks
            .entry(city)
            .or_default()
            .insert_stack(item);
        Ok(())
    }
}
