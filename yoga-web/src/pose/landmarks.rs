//! Landmark and pose types
//!
//! MediaPipe Pose produces 33 landmarks per detected body. The indices
//! below are the detector's contract and must not be renumbered.

use std::ops::Index;

use crate::error::{Error, Result};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark on the wire (x, y, z)
pub const VALUES_PER_LANDMARK: usize = 3;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Joint triples (a, b, c) compared by their interior angle at b
pub const JOINT_TRIPLES: [[usize; 3]; 8] = [
    [LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST],
    [RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST],
    [LEFT_ELBOW, LEFT_SHOULDER, LEFT_HIP],
    [RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_HIP],
    [LEFT_HIP, LEFT_KNEE, LEFT_ANKLE],
    [RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE],
    [LEFT_KNEE, LEFT_HIP, LEFT_SHOULDER],
    [RIGHT_KNEE, RIGHT_HIP, RIGHT_SHOULDER],
];

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 3D landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth, NaN when the detector gave none
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One detected body: all 33 landmarks in detector order
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl Pose {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Build a pose from a flat Float32Array of 99 values
    /// (33 landmarks × 3 coordinates: x, y, z)
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        if data.len() != LANDMARK_COUNT * VALUES_PER_LANDMARK {
            return Err(Error::LandmarkLength(data.len()));
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (lm, chunk) in landmarks
            .iter_mut()
            .zip(data.chunks_exact(VALUES_PER_LANDMARK))
        {
            *lm = Landmark::new(chunk[0], chunk[1], chunk[2]);
        }

        Ok(Self { landmarks })
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Apply `f` to every landmark, producing a new pose
    pub fn map(&self, f: impl Fn(Landmark) -> Landmark) -> Self {
        let mut landmarks = self.landmarks;
        for lm in landmarks.iter_mut() {
            *lm = f(*lm);
        }
        Self { landmarks }
    }
}

impl Index<usize> for Pose {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }
}
