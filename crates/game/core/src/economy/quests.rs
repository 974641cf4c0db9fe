//! The quest ledger: merchant fetch quests and the main quest line.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::rng::SessionRng;
use crate::state::{MainQuestState, Mode, Quest, QuestStatus, SessionState};

/// Rejections for quest bookkeeping. No partial transaction occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("not inside a city")]
    NoGiver,
    #[error("this giver already has an active quest")]
    AlreadyActive,
    #[error("quest not found")]
    QuestNotFound,
    #[error("not enough of the requested item")]
    NotEnoughItems,
    #[error("the quest item is not in the inventory")]
    MissingQuestItem,
    #[error("the main quest is not at this stage")]
    WrongStage,
    #[error("item cannot be requested")]
    UnpricedItem,
}

impl SessionState {
    /// The active quest from the given giver, if any.
    pub fn active_quest_for(&self, city_id: &str, giver: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| {
            q.giver_city_id == city_id && q.giver_name == giver && q.status == QuestStatus::Active
        })
    }

    /// Rolls a pending quest offer from the current city's merchant: one item
    /// from the curated pool, a random required quantity, reward priced at
    /// `price * quantity * 2`. The offer is not recorded until accepted.
    pub fn offer_quest(
        &mut self,
        catalog: &Catalog,
        rng: &mut SessionRng,
    ) -> Result<Quest, QuestError> {
        let city_id = self.current_city.clone().ok_or(QuestError::NoGiver)?;
        let city = catalog.city(&city_id).ok_or(QuestError::NoGiver)?;
        if self.active_quest_for(&city_id, city.merchant_name).is_some() {
            return Err(QuestError::AlreadyActive);
        }

        let item_id = rng
            .pick(&catalog.quest_item_pool)
            .copied()
            .ok_or(QuestError::UnpricedItem)?;
        let template = catalog.template(item_id).ok_or(QuestError::UnpricedItem)?;
        let price = template.price.ok_or(QuestError::UnpricedItem)?;

        let required_quantity =
            rng.range_u32(GameConfig::QUEST_QUANTITY_MIN, GameConfig::QUEST_QUANTITY_MAX);
        let reward_silver = price * required_quantity * GameConfig::QUEST_REWARD_FACTOR;

        let serial = self.next_quest_serial;
        self.next_quest_serial += 1;

        Ok(Quest {
            id: format!("quest-{serial}"),
            giver_city_id: city_id,
            giver_name: city.merchant_name.to_string(),
            city_name: city.name.to_string(),
            item: template.id,
            item_name: template.name.to_string(),
            item_icon: template.icon.to_string(),
            required_quantity,
            reward_silver,
            description: format!(
                "Bring me {}x {} ({}). I pay well.",
                required_quantity, template.name, template.icon
            ),
            status: QuestStatus::Active,
        })
    }

    /// Records an accepted offer in the ledger.
    pub fn accept_quest(&mut self, quest: Quest) {
        self.log(format!(
            "New job: bring {} (x{})",
            quest.item_name, quest.required_quantity
        ));
        self.quests.push(quest);
    }

    /// True when the inventory holds enough of the quest's item, summed
    /// across all stacks.
    pub fn can_complete_quest(&self, quest_id: &str) -> bool {
        self.quests
            .iter()
            .find(|q| q.id == quest_id)
            .is_some_and(|q| self.inventory.total_quantity(q.item) >= q.required_quantity)
    }

    /// Completes a ledger quest: removes exactly the required quantity
    /// (smallest stacks first), credits the reward, drops the entry.
    pub fn complete_quest(&mut self, quest_id: &str) -> Result<u32, QuestError> {
        let index = self
            .quests
            .iter()
            .position(|q| q.id == quest_id)
            .ok_or(QuestError::QuestNotFound)?;
        let (item, required, reward) = {
            let q = &self.quests[index];
            (q.item, q.required_quantity, q.reward_silver)
        };
        if !self.inventory.remove_quantity(item, required) {
            return Err(QuestError::NotEnoughItems);
        }
        self.silver += reward;
        self.quests.remove(index);
        self.log(format!("Job done! You received {reward} silver."));
        Ok(reward)
    }

    /// Starts the main quest line after the intro: sets the find phase,
    /// records the fixed ledger entry, and puts the player on the map.
    pub fn begin_main_quest(&mut self, catalog: &Catalog) {
        self.main_quest = MainQuestState::FindChip;
        if !self.quests.iter().any(|q| q.id == GameConfig::MAIN_QUEST_ID) {
            self.quests.push(main_quest_entry(catalog));
        }
        self.mode = Mode::Map;
        self.log("Main job: find the water purifier chip for the Oasis.");
    }

    /// Turns the chip in to the elder. Removes every chip stack, credits the
    /// fixed reward, and closes the quest line.
    pub fn complete_main_quest(&mut self) -> Result<u32, QuestError> {
        if self.main_quest != MainQuestState::FindChip {
            return Err(QuestError::WrongStage);
        }
        if !self.inventory.contains_item(GameConfig::MAIN_QUEST_ITEM) {
            return Err(QuestError::MissingQuestItem);
        }
        self.inventory.remove_all_of(GameConfig::MAIN_QUEST_ITEM);
        self.silver += GameConfig::MAIN_QUEST_REWARD;
        self.main_quest = MainQuestState::Completed;
        self.quests.retain(|q| q.id != GameConfig::MAIN_QUEST_ID);
        self.log(format!(
            "Main job done! You saved the Oasis and received {} silver.",
            GameConfig::MAIN_QUEST_REWARD
        ));
        Ok(GameConfig::MAIN_QUEST_REWARD)
    }
}

/// The fixed main-quest ledger entry.
pub fn main_quest_entry(catalog: &Catalog) -> Quest {
    let (item_name, item_icon) = catalog
        .template(GameConfig::MAIN_QUEST_ITEM)
        .map(|t| (t.name.to_string(), t.icon.to_string()))
        .unwrap_or_else(|| ("Water purifier chip".to_string(), "💧".to_string()));
    Quest {
        id: GameConfig::MAIN_QUEST_ID.to_string(),
        giver_city_id: "oasis".to_string(),
        giver_name: "Elder of the Oasis".to_string(),
        city_name: "Oasis".to_string(),
        item: GameConfig::MAIN_QUEST_ITEM,
        item_name,
        item_icon,
        required_quantity: 1,
        reward_silver: GameConfig::MAIN_QUEST_REWARD,
        description: "Find the water purifier chip lost in the wastes to save the Oasis."
            .to_string(),
        status: QuestStatus::Active,
    }
}
