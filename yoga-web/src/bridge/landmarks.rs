//! Landmark input from JavaScript
//!
//! Receives MediaPipe landmarks for camera frames and reference images
//! and feeds them to the session.

use wasm_bindgen::prelude::*;

use super::state::with_game;
use crate::pose::Pose;

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with flat Float32Array of 99 values
/// (33 landmarks × 3 coordinates: x, y, z) for each detected camera frame.
///
/// Returns the similarity to the reference pose (0 when there is none).
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) -> f32 {
    with_game(|game| match Pose::from_flat(data) {
        Ok(pose) => game.session.observe_frame(Some(&pose)).similarity(),
        Err(err) => {
            log::warn!("{}", err);
            game.session.lose_signal();
            0.0
        }
    })
}

/// Called when the detector found nobody in the frame
#[wasm_bindgen]
pub fn clear_detection() {
    with_game(|game| {
        game.session.observe_frame(None);
    });
}

/// Called when the camera or model is unavailable
#[wasm_bindgen]
pub fn report_no_signal() {
    with_game(|game| game.session.lose_signal());
    log::warn!("Detection source unavailable");
}

/// Landmarks detected in the current target image (99 values)
#[wasm_bindgen]
pub fn set_reference_landmarks(data: &[f32]) -> Result<(), JsValue> {
    let pose = Pose::from_flat(data)?;
    with_game(|game| game.session.set_reference(pose));
    Ok(())
}

/// Target image is loading, or nobody was detected in it
#[wasm_bindgen]
pub fn clear_reference() {
    with_game(|game| game.session.clear_reference());
}

/// Whether the latest frame matched the reference
#[wasm_bindgen]
pub fn is_pose_matched() -> bool {
    with_game(|game| game.session.signal().matched())
}
