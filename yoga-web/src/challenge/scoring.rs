//! Points awarded for a completed hold

/// Hold duration (seconds) that earns exactly the base points
pub const BASELINE_HOLD_SECONDS: f64 = 5.0;

/// Points for completing a challenge
///
/// `round(points × multiplier × target / 5)`. Longer holds pay
/// proportionally more.
pub fn points_earned(points: u32, difficulty_multiplier: f64, target_seconds: f64) -> u32 {
    let raw = points as f64 * difficulty_multiplier * (target_seconds / BASELINE_HOLD_SECONDS);
    raw.round().max(0.0) as u32
}
