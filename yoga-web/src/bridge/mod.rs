//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod reward;
mod session;
mod state;

pub use landmarks::{
    update_landmarks,
    clear_detection,
    report_no_signal,
    set_reference_landmarks,
    clear_reference,
    is_pose_matched,
};

pub use session::{
    // Configuration
    configure,
    load_sequence,
    // Hold timer
    start_ticker,
    stop_ticker,
    timer_tick,
    teardown,
    // User actions
    next_pose,
    go_to_pose,
    set_target_time,
    reset_challenge,
    // Readout
    drain_events,
    active_notifications,
    session_snapshot,
    get_score,
    get_level,
    get_hold_time,
    get_current_pose_index,
};

pub use reward::{
    set_player_name,
    claim_reward,
    reward_retry,
    reward_payee_created,
    reward_sent,
    reward_failed,
    can_claim_reward,
};
