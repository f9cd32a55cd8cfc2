//! Session controls and state readout for the UI

use wasm_bindgen::prelude::*;

use super::state::with_game;
use crate::challenge::TickOutcome;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Apply a JSON `GameConfig`. Resets score and completions.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    with_game(|game| game.configure(json))?;
    Ok(())
}

/// Replace the curriculum with a JSON array of challenges
#[wasm_bindgen]
pub fn load_sequence(json: &str) -> Result<(), JsValue> {
    with_game(|game| game.load_sequence(json))?;
    Ok(())
}

// ============================================================================
// HOLD TIMER
// ============================================================================

/// Start the hold-timer ticker. Pass the returned id to every
/// `timer_tick`; older ids stop working.
#[wasm_bindgen]
pub fn start_ticker() -> u32 {
    with_game(|game| game.session.start_ticker())
}

#[wasm_bindgen]
pub fn stop_ticker() {
    with_game(|game| game.session.stop_ticker());
}

/// Called from a `setInterval` at the configured tick period.
///
/// Returns true on the tick that completes the current challenge.
#[wasm_bindgen]
pub fn timer_tick(ticker: u32, now_ms: f64) -> bool {
    with_game(|game| {
        matches!(
            game.session.tick(ticker, now_ms),
            Some(TickOutcome::Completed { .. })
        )
    })
}

/// View is going away: stop the ticker and drop the detection signal
#[wasm_bindgen]
pub fn teardown() {
    with_game(|game| game.session.teardown());
}

// ============================================================================
// USER ACTIONS
// ============================================================================

#[wasm_bindgen]
pub fn next_pose(now_ms: f64) {
    with_game(|game| game.session.next_pose(now_ms));
}

#[wasm_bindgen]
pub fn go_to_pose(index: usize) -> Result<(), JsValue> {
    with_game(|game| game.session.go_to_pose(index))?;
    Ok(())
}

/// Change the hold target (seconds). Resets score and completions.
#[wasm_bindgen]
pub fn set_target_time(seconds: f64) -> Result<(), JsValue> {
    with_game(|game| game.session.set_target_time(seconds))?;
    Ok(())
}

#[wasm_bindgen]
pub fn reset_challenge() {
    with_game(|game| game.session.reset());
}

// ============================================================================
// READOUT
// ============================================================================

/// Pending events as a JSON array (each taken once)
#[wasm_bindgen]
pub fn drain_events() -> Result<String, JsValue> {
    let events = with_game(|game| game.session.drain_events());
    Ok(serde_json::to_string(&events).map_err(crate::Error::from)?)
}

/// Alerts still on screen at `now_ms`, as a JSON array
#[wasm_bindgen]
pub fn active_notifications(now_ms: f64) -> Result<String, JsValue> {
    let notifications = with_game(|game| game.session.active_notifications(now_ms));
    Ok(serde_json::to_string(&notifications).map_err(crate::Error::from)?)
}

/// Full session state as JSON for rendering
#[wasm_bindgen]
pub fn session_snapshot() -> Result<String, JsValue> {
    let json = with_game(|game| serde_json::to_string(&game.session.snapshot()));
    Ok(json.map_err(crate::Error::from)?)
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_game(|game| game.session.score())
}

#[wasm_bindgen]
pub fn get_level() -> u32 {
    with_game(|game| game.session.level())
}

#[wasm_bindgen]
pub fn get_hold_time() -> f32 {
    with_game(|game| game.session.hold_time())
}

#[wasm_bindgen]
pub fn get_current_pose_index() -> usize {
    with_game(|game| game.session.current_index())
}
