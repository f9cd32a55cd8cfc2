//! Pose module - landmark normalization and similarity scoring
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod compare;
mod landmarks;
mod normalize;

pub use angles::joint_angle;
pub use compare::{compare, compare_poses, is_match, ANGLE_TOLERANCE_DEG, DEFAULT_MATCH_THRESHOLD};
pub use landmarks::{
    Landmark, Pose,
    JOINT_TRIPLES, LANDMARK_COUNT, VALUES_PER_LANDMARK,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW, LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP, LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE,
};
pub use normalize::{normalize, NormalizedPose};

#[cfg(test)]
pub(crate) mod test_poses {
    use super::*;

    /// Upright, arms hanging slightly out from the body
    pub fn standing_pose() -> Pose {
        let mut lms = [Landmark::new(0.5, 0.2, -0.1); LANDMARK_COUNT];
        lms[LEFT_SHOULDER] = Landmark::new(0.45, 0.30, -0.05);
        lms[RIGHT_SHOULDER] = Landmark::new(0.55, 0.30, -0.05);
        lms[LEFT_ELBOW] = Landmark::new(0.40, 0.45, -0.02);
        lms[RIGHT_ELBOW] = Landmark::new(0.60, 0.45, -0.02);
        lms[LEFT_WRIST] = Landmark::new(0.38, 0.60, 0.0);
        lms[RIGHT_WRIST] = Landmark::new(0.62, 0.60, 0.0);
        lms[LEFT_HIP] = Landmark::new(0.47, 0.60, 0.0);
        lms[RIGHT_HIP] = Landmark::new(0.53, 0.60, 0.0);
        lms[LEFT_KNEE] = Landmark::new(0.46, 0.75, 0.02);
        lms[RIGHT_KNEE] = Landmark::new(0.54, 0.75, 0.02);
        lms[LEFT_ANKLE] = Landmark::new(0.46, 0.90, 0.05);
        lms[RIGHT_ANKLE] = Landmark::new(0.54, 0.90, 0.05);
        Pose::new(lms)
    }

    /// Same body with both arms raised overhead
    pub fn arms_raised_pose() -> Pose {
        let mut lms = *standing_pose().landmarks();
        lms[LEFT_ELBOW] = Landmark::new(0.38, 0.18, -0.02);
        lms[RIGHT_ELBOW] = Landmark::new(0.62, 0.18, -0.02);
        lms[LEFT_WRIST] = Landmark::new(0.35, 0.05, 0.0);
        lms[RIGHT_WRIST] = Landmark::new(0.65, 0.05, 0.0);
        Pose::new(lms)
    }
}
