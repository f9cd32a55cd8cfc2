//! Pose normalization
//!
//! Re-centers a pose on the hip midpoint and scales it by torso length
//! (hip midpoint → shoulder midpoint), so distance from the camera and
//! position in frame drop out. Camera roll and left/right mirroring are
//! NOT removed.

use nalgebra::{Vector2, Vector3};

use super::angles::joint_angle;
use super::landmarks::{
    Landmark, Pose, LANDMARK_COUNT, LEFT_HIP, LEFT_SHOULDER, RIGHT_HIP, RIGHT_SHOULDER,
};

/// A pose in hip-centered, torso-length units
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPose {
    points: [Vector3<f32>; LANDMARK_COUNT],
}

impl NormalizedPose {
    pub fn point(&self, index: usize) -> Vector3<f32> {
        self.points[index]
    }

    /// Interior angle (degrees) at the middle landmark of `triple`
    pub fn angle(&self, triple: &[usize; 3]) -> f32 {
        let [a, b, c] = *triple;
        joint_angle(self.xy(a), self.xy(b), self.xy(c))
    }

    fn xy(&self, index: usize) -> Vector2<f32> {
        self.points[index].xy()
    }
}

fn midpoint(a: Landmark, b: Landmark) -> Vector2<f32> {
    Vector2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Normalize a pose for comparison
pub fn normalize(pose: &Pose) -> NormalizedPose {
    let center = midpoint(pose[LEFT_HIP], pose[RIGHT_HIP]);
    let shoulder_mid = midpoint(pose[LEFT_SHOULDER], pose[RIGHT_SHOULDER]);

    // Hips on top of shoulders (or garbage input) would divide by zero
    let torso_length = (shoulder_mid - center).norm();
    let scale = if torso_length > 0.0 && torso_length.is_finite() {
        torso_length
    } else {
        1.0
    };

    let mut points = [Vector3::zeros(); LANDMARK_COUNT];
    for (point, lm) in points.iter_mut().zip(pose.landmarks().iter()) {
        let z = if lm.z.is_finite() { lm.z / scale } else { 0.0 };
        *point = Vector3::new((lm.x - center.x) / scale, (lm.y - center.y) / scale, z);
    }

    NormalizedPose { points }
}
