//! Inventory as an indexed stack arena.
//!
//! Stacks live in a map keyed by [`StackId`] with explicit create/destroy,
//! which keeps the uniqueness invariant trivial: an id exists in exactly one
//! arena slot or nowhere.

use std::collections::BTreeMap;

use crate::catalog::ItemTemplate;
use crate::state::{ItemId, ItemStack, StackId, StackIds};

/// Errors for inventory mutations that reject at the point of request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("stack not found")]
    StackNotFound,
    #[error("split amount must be between 1 and quantity - 1")]
    InvalidSplitAmount,
    #[error("stacks cannot be merged")]
    NotMergeable,
}

/// A collection of item stacks (player bag or merchant stock).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    stacks: BTreeMap<StackId, ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            stacks: BTreeMap::new(),
        }
    }

    pub fn from_stacks(stacks: impl IntoIterator<Item = ItemStack>) -> Self {
        Self {
            stacks: stacks.into_iter().map(|s| (s.stack_id, s)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn get(&self, id: StackId) -> Option<&ItemStack> {
        self.stacks.get(&id)
    }

    /// Stacks in stable (allocation) order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.values()
    }

    /// Total quantity of an item id summed across all its stacks.
    pub fn total_quantity(&self, item: ItemId) -> u32 {
        self.stacks
            .values()
            .filter(|s| s.item == item)
            .map(|s| s.quantity)
            .sum()
    }

    pub fn contains_item(&self, item: ItemId) -> bool {
        self.stacks.values().any(|s| s.item == item)
    }

    /// Instantiates `quantity` of a template into the inventory: merges into
    /// an existing stack for stackable kinds, otherwise creates a new stack.
    /// Returns the id of the stack that received the items.
    pub fn add_from_template(
        &mut self,
        ids: &mut StackIds,
        template: &ItemTemplate,
        quantity: u32,
    ) -> StackId {
        if template.kind.is_stackable() {
            if let Some(existing) = self
                .stacks
                .values_mut()
                .find(|s| s.item == template.id)
            {
                existing.quantity += quantity;
                return existing.stack_id;
            }
        }
        let stack = template.instantiate(ids, quantity);
        let id = stack.stack_id;
        self.stacks.insert(id, stack);
        id
    }

    /// Takes ownership of an existing stack, merging stackables into a
    /// same-id stack when one is present (the incoming stack id is then
    /// discarded). Used by pickups and combat rewards.
    pub fn absorb(&mut self, stack: ItemStack) -> StackId {
        if stack.is_stackable() {
            if let Some(existing) = self.stacks.values_mut().find(|s| s.item == stack.item) {
                existing.quantity += stack.quantity;
                return existing.stack_id;
            }
        }
        let id = stack.stack_id;
        self.stacks.insert(id, stack);
        id
    }

    /// Inserts a stack verbatim, preserving its id. Used by trades and
    /// equip swaps, where the stack merely changes owner.
    pub fn insert_stack(&mut self, stack: ItemStack) {
        self.stacks.insert(stack.stack_id, stack);
    }

    pub fn remove_stack(&mut self, id: StackId) -> Option<ItemStack> {
        self.stacks.remove(&id)
    }

    /// Removes exactly `quantity` of `item`, consuming the smallest stacks
    /// first. A partially consumed stack keeps its id; emptied stacks are
    /// destroyed. No-op (returns false) when the total on hand is short —
    /// callers pre-check via [`Inventory::total_quantity`].
    pub fn remove_quantity(&mut self, item: ItemId, quantity: u32) -> bool {
        if self.total_quantity(item) < quantity {
            return false;
        }
        let mut order: Vec<(u32, StackId)> = self
            .stacks
            .values()
            .filter(|s| s.item == item)
            .map(|s| (s.quantity, s.stack_id))
            .collect();
        order.sort();

        let mut remaining = quantity;
        for (available, id) in order {
            if remaining == 0 {
                break;
            }
            if available > remaining {
                if let Some(stack) = self.stacks.get_mut(&id) {
                    stack.quantity -= remaining;
                }
                remaining = 0;
            } else {
                self.stacks.remove(&id);
                remaining -= available;
            }
        }
        true
    }

    /// Splits `amount` off a stack into a new stack with a fresh id.
    /// Rejects `amount >= quantity` and `amount == 0`.
    pub fn split(
        &mut self,
        ids: &mut StackIds,
        id: StackId,
        amount: u32,
    ) -> Result<StackId, InventoryError> {
        let source = self.stacks.get_mut(&id).ok_or(InventoryError::StackNotFound)?;
        if amount == 0 || amount >= source.quantity {
            return Err(InventoryError::InvalidSplitAmount);
        }
        source.quantity -= amount;
        let mut split_off = source.clone();
        split_off.stack_id = ids.allocate();
        split_off.quantity = amount;
        let new_id = split_off.stack_id;
        self.stacks.insert(new_id, split_off);
        Ok(new_id)
    }

    /// Merges `source` into `target`: same item id, both stackable. The
    /// target keeps its id and absorbs the source's quantity; the source is
    /// destroyed.
    pub fn merge(&mut self, source: StackId, target: StackId) -> Result<(), InventoryError> {
        if source == target {
            return Err(InventoryError::NotMergeable);
        }
        let (src_item, src_kind, src_quantity) = {
            let s = self.stacks.get(&source).ok_or(InventoryError::StackNotFound)?;
            (s.item, s.kind, s.quantity)
        };
        let dst = self.stacks.get(&target).ok_or(InventoryError::StackNotFound)?;
        if dst.item != src_item || !src_kind.is_stackable() {
            return Err(InventoryError::NotMergeable);
        }
        self.stacks.remove(&source);
        if let Some(dst) = self.stacks.get_mut(&target) {
            dst.quantity += src_quantity;
        }
        Ok(())
    }

    /// Consumes one unit from a stack, destroying it at zero. Returns the
    /// removed unit's item id, or `None` if the stack does not exist.
    pub fn consume_one(&mut self, id: StackId) -> Option<ItemId> {
        let stack = self.stacks.get_mut(&id)?;
        let item = stack.item;
        if stack.quantity > 1 {
            stack.quantity -= 1;
        } else {
            self.stacks.remove(&id);
        }
        Some(item)
    }

    /// Destroys every stack of the given item id. Used by the main-quest
    /// turn-in, which takes the chip wholesale.
    pub fn remove_all_of(&mut self, item: ItemId) {
        self.stacks.retain(|_, s| s.item != item);
    }

    pub fn into_stacks(self) -> Vec<ItemStack> {
        self.stacks.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ItemKind, StackIds};

    fn template(id: u32, kind: ItemKind) -> ItemTemplate {
        ItemTemplate {
            id: ItemId(id),
            name: "scrap",
            kind,
            icon: "x",
            description: "test item",
            damage: None,
            armor: None,
            effect: None,
            price: Some(10),
            use_directive: None,
            default_quantity: 1,
        }
    }

    #[test]
    fn stackable_add_merges_into_existing_stack() {
        let mut ids = StackIds::new();
        let mut inv = Inventory::new();
        let ore = template(15, ItemKind::Resource);

        let first = inv.add_from_template(&mut ids, &ore, 20);
        let second = inv.add_from_template(&mut ids, &ore, 7);

        assert_eq!(first, second);
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.total_quantity(ItemId(15)), 27);
    }

    #[test]
    fn non_stackable_add_always_creates_a_stack() {
        let mut ids = StackIds::new();
        let mut inv = Inventory::new();
        let sword = template(1, ItemKind::Weapon);

        inv.add_from_template(&mut ids, &sword, 1);
        inv.add_from_template(&mut ids, &sword, 1);

        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn split_then_merge_round_trips_quantity() {
        let mut ids = StackIds::new();
        let mut inv = Inventory::new();
        let ore = template(15, ItemKind::Resource);

        let original = inv.add_from_template(&mut ids, &ore, 9);
        let split_off = inv.split(&mut ids, original, 4).unwrap();
        assert_eq!(inv.get(original).unwrap().quantity, 5);
        assert_eq!(inv.get(split_off).unwrap().quantity, 4);

        inv.merge(split_off, original).unwrap();
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.get(original).unwrap().quantity, 9);
        assert!(inv.get(split_off).is_none());
    }

    #[test]
    fn split_rejects_whole_stack() {
        let mut ids = StackIds::new();
        let mut inv = Inventory::new();
        let ore = template(15, ItemKind::Resource);
        let id = inv.add_from_template(&mut ids, &ore, 3);

        assert_eq!(
            inv.split(&mut ids, id, 3),
            Err(InventoryError::InvalidSplitAmount)
        );
        assert_eq!(
            inv.split(&mut ids, id, 0),
            Err(InventoryError::InvalidSplitAmount)
        );
    }

    #[test]
    fn remove_quantity_consumes_smallest_stacks_first() {
        let mut ids = StackIds::new();
        let mut inv = Inventory::new();
        let ore = template(15, ItemKind::Resource);

        // Three separate stacks: 2, 5, 9.
        let big = inv.add_from_template(&mut ids, &ore, 16);
        let mid = inv.split(&mut ids, big, 5).unwrap();
        let small = inv.split(&mut ids, big, 2).unwrap();
        assert_eq!(inv.get(big).unwrap().quantity, 9);

        assert!(inv.remove_quantity(ItemId(15), 6));
        // 2 and 5 are eaten smallest-first; 9 loses nothing until needed.
        assert!(inv.get(small).is_none());
        assert_eq!(inv.get(mid).unwrap().quantity, 1);
        assert_eq!(inv.get(big).unwrap().quantity, 9);
        assert_eq!(inv.total_quantity(ItemId(15)), 10);
    }

    #[test]
    fn remove_quantity_is_a_noop_when_short() {
        let mut ids = StackIds::new();
        let mut inv = Inventory::new();
        let ore = template(15, ItemKind::Resource);
        inv.add_from_template(&mut ids, &ore, 3);

        assert!(!inv.remove_quantity(ItemId(15), 4));
        assert_eq!(inv.total_quantity(ItemId(15)), 3);
    }

    #[test]
    fn merge_rejects_different_items_and_non_stackables() {
        let mut ids = StackIds::new();
        let mut inv = Inventory::new();
        let ore = inv.add_from_template(&mut ids, &template(15, ItemKind::Resource), 2);
        let herb = inv.add_from_template(&mut ids, &template(16, ItemKind::Resource), 2);
        let sword_a = inv.add_from_template(&mut ids, &template(1, ItemKind::Weapon), 1);
        let sword_b = inv.add_from_template(&mut ids, &template(1, ItemKind::Weapon), 1);

        assert_eq!(inv.merge(ore, herb), Err(InventoryError::NotMergeable));
        assert_eq!(inv.merge(sword_a, sword_b), Err(InventoryError::NotMergeable));
    }

    #[test]
    fn consume_one_destroys_emptied_stack() {
        let mut ids = StackIds::new();
        let mut inv = Inventory::new();
        let potion = template(14, ItemKind::Miscellaneous);
        let id = inv.add_from_template(&mut ids, &potion, 2);

        assert_eq!(inv.consume_one(id), Some(ItemId(14)));
        assert_eq!(inv.get(id).unwrap().quantity, 1);
        assert_eq!(inv.consume_one(id), Some(ItemId(14)));
        assert!(inv.get(id).is_none());
    }
}
