//! Unified error types surfaced by the runtime API.

use thiserror::Error;

pub use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no combat session is active")]
    NoCombat,

    #[error(transparent)]
    Combat(#[from] wastes_core::CombatError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
