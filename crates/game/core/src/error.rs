//! Errors for invalid player actions.
//!
//! Every variant is a rejection at the point of request: state is never
//! mutated on an error path.

/// Invalid inventory/equipment/roster request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("stack not found")]
    StackNotFound,
    #[error("item cannot be equipped")]
    NotEquippable,
    #[error("item has no use")]
    NotUsable,
    #[error("slot is already empty")]
    SlotEmpty,
    #[error("the last squad member cannot be removed")]
    LastCharacter,
    #[error("no such character")]
    NoSuchCharacter,
}
