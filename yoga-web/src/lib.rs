//! Yoga Web - Pose Hold Challenge
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen start hook
//!
//! JavaScript runs the camera, the MediaPipe pose model and the payments
//! SDK. Rust scores poses against the reference image and owns the
//! hold-timer / level / score state.

pub mod challenge;
pub mod config;
pub mod error;
pub mod pose;
pub mod reward;

mod bridge;
mod logging;

use wasm_bindgen::prelude::*;

pub use error::{Error, Result};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{update_landmarks, clear_detection, report_no_signal};
pub use bridge::{set_reference_landmarks, clear_reference, is_pose_matched};
pub use bridge::{configure, load_sequence, start_ticker, stop_ticker, timer_tick, teardown};
pub use bridge::{next_pose, go_to_pose, set_target_time, reset_challenge};
pub use bridge::{drain_events, active_notifications, session_snapshot};
pub use bridge::{get_score, get_level, get_hold_time, get_current_pose_index};
pub use bridge::{set_player_name, claim_reward, reward_retry};
pub use bridge::{reward_payee_created, reward_sent, reward_failed, can_claim_reward};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    log::info!("✅ Pose challenge core loaded");
}
