//! Pose similarity scoring
//!
//! Both poses are normalized, then the eight joint angles in
//! [`JOINT_TRIPLES`] are compared. An average difference of 0° scores
//! 1.0 and anything at or past [`ANGLE_TOLERANCE_DEG`] scores 0.0.

use super::landmarks::{Pose, JOINT_TRIPLES};
use super::normalize::normalize;

/// Average angle difference that maps to similarity 0
pub const ANGLE_TOLERANCE_DEG: f32 = 45.0;

/// Similarity above this counts as a match
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.8;

/// Similarity in [0, 1], 0 when either pose is missing
pub fn compare(a: Option<&Pose>, b: Option<&Pose>) -> f32 {
    match (a, b) {
        (Some(a), Some(b)) => compare_poses(a, b),
        _ => 0.0,
    }
}

/// Similarity in [0, 1] between two detected poses
pub fn compare_poses(a: &Pose, b: &Pose) -> f32 {
    let na = normalize(a);
    let nb = normalize(b);

    let total_diff: f32 = JOINT_TRIPLES
        .iter()
        .map(|triple| (na.angle(triple) - nb.angle(triple)).abs())
        .sum();
    let avg_diff = total_diff / JOINT_TRIPLES.len() as f32;

    let similarity = (1.0 - avg_diff / ANGLE_TOLERANCE_DEG).max(0.0);
    if similarity.is_finite() {
        similarity
    } else {
        0.0
    }
}

/// Match decision (strictly above threshold)
pub fn is_match(similarity: f32, threshold: f32) -> bool {
    similarity > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::landmarks::{Landmark, LANDMARK_COUNT};
    use crate::pose::test_poses::{arms_raised_pose, standing_pose};

    #[test]
    fn test_self_similarity_is_perfect() {
        let pose = standing_pose();
        assert!((compare_poses(&pose, &pose) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric() {
        let a = standing_pose();
        let b = arms_raised_pose();
        assert_eq!(compare_poses(&a, &b), compare_poses(&b, &a));
    }

    #[test]
    fn test_translated_pose_matches() {
        let pose = standing_pose();
        let moved = pose.map(|lm| Landmark::new(lm.x + 0.2, lm.y - 0.1, lm.z));
        assert!((compare_poses(&pose, &moved) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_scaled_pose_matches() {
        let pose = standing_pose();
        let far = pose.map(|lm| Landmark::new(lm.x * 0.5, lm.y * 0.5, lm.z));
        assert!(is_match(compare_poses(&pose, &far), DEFAULT_MATCH_THRESHOLD));
    }

    #[test]
    fn test_different_pose_does_not_match() {
        let similarity = compare_poses(&standing_pose(), &arms_raised_pose());
        assert!(similarity < DEFAULT_MATCH_THRESHOLD);
        assert!(similarity >= 0.0);
    }

    #[test]
    fn test_missing_pose_scores_zero() {
        let pose = standing_pose();
        assert_eq!(compare(None, Some(&pose)), 0.0);
        assert_eq!(compare(Some(&pose), None), 0.0);
        assert_eq!(compare(None, None), 0.0);
    }

    #[test]
    fn test_degenerate_pose_is_finite() {
        let flat = Pose::new([Landmark::new(0.4, 0.4, 0.0); LANDMARK_COUNT]);
        let similarity = compare_poses(&flat, &standing_pose());
        assert!(similarity.is_finite());
        assert!((0.0..=1.0).contains(&similarity));
    }

    #[test]
    fn test_nan_landmarks_score_zero() {
        let garbage = standing_pose().map(|_| Landmark::new(f32::NAN, f32::NAN, f32::NAN));
        assert_eq!(compare_poses(&garbage, &standing_pose()), 0.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_match(0.8, 0.8));
        assert!(is_match(0.81, 0.8));
    }
}
