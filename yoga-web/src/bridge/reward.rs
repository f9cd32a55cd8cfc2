//! Reward claim entry points
//!
//! JS performs the payments SDK calls; each function returns the next
//! step as JSON (`{"step": "create_payee" | "send_reward" | "retry_after"
//! | "claimed" | "gave_up", ...}`).

use wasm_bindgen::prelude::*;

use super::state::with_game;
use crate::error::Result;
use crate::reward::RewardStep;

fn to_json(step: Result<RewardStep>) -> std::result::Result<String, JsValue> {
    let step = step?;
    Ok(serde_json::to_string(&step).map_err(crate::Error::from)?)
}

/// Player name from the name-entry form. Returns the trimmed name.
#[wasm_bindgen]
pub fn set_player_name(name: &str) -> std::result::Result<String, JsValue> {
    let name = with_game(|game| game.reward.set_player(name).map(str::to_string))?;
    log::info!("Player: {}", name);
    Ok(name)
}

#[wasm_bindgen]
pub fn claim_reward(now_ms: f64) -> std::result::Result<String, JsValue> {
    to_json(with_game(|game| game.claim_reward(now_ms)))
}

/// Backoff delay from a `retry_after` step has elapsed
#[wasm_bindgen]
pub fn reward_retry(now_ms: f64) -> std::result::Result<String, JsValue> {
    to_json(with_game(|game| game.reward_retry(now_ms)))
}

#[wasm_bindgen]
pub fn reward_payee_created(now_ms: f64) -> std::result::Result<String, JsValue> {
    to_json(with_game(|game| game.reward_payee_created(now_ms)))
}

#[wasm_bindgen]
pub fn reward_sent(now_ms: f64) -> std::result::Result<String, JsValue> {
    to_json(with_game(|game| game.reward_sent(now_ms)))
}

#[wasm_bindgen]
pub fn reward_failed(reason: &str, now_ms: f64) -> std::result::Result<String, JsValue> {
    to_json(with_game(|game| game.reward_failed(reason, now_ms)))
}

/// Whether the claim button should be enabled
#[wasm_bindgen]
pub fn can_claim_reward() -> bool {
    with_game(|game| {
        game.session.any_pose_completed()
            && game.reward.player().is_some()
            && !game.reward.in_flight()
            && !game.reward.is_claimed()
    })
}
