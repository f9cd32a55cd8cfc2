//! Reward module - claim coordination for the payments collaborator
//!
//! Re-exports only. All logic in submodules.

mod claim;
mod retry;

pub use claim::{validate_player_name, ClaimState, RewardClaim, RewardStep, REWARD_SUCCESS_MS};
pub use retry::RetryPolicy;
