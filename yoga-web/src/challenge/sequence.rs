//! Challenge curriculum - ordered list of target poses

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Multiplier growth applied to every challenge per completed level
pub const LEVEL_DIFFICULTY_GROWTH: f64 = 1.2;

/// One pose-target entry in the curriculum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseChallenge {
    pub id: u32,
    pub name: String,
    pub image_path: String,
    #[serde(default)]
    pub completed: bool,
    pub points: u32,
    pub difficulty_multiplier: f64,
}

impl PoseChallenge {
    pub fn new(id: u32, name: &str, image_path: &str, points: u32, difficulty_multiplier: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            image_path: image_path.to_string(),
            completed: false,
            points,
            difficulty_multiplier,
        }
    }
}

/// Ordered, non-empty list of challenges
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChallengeSequence {
    challenges: Vec<PoseChallenge>,
}

impl Default for ChallengeSequence {
    fn default() -> Self {
        Self {
            challenges: vec![
                PoseChallenge::new(1, "Warrior Pose II", "/image.png", 100, 1.0),
                PoseChallenge::new(2, "Upward Dog", "/upward-dog.jpg", 150, 1.2),
                PoseChallenge::new(3, "Tree Pose", "/tree-pose.jpg", 200, 1.4),
                PoseChallenge::new(4, "Downward Dog", "/downward-dog.jpg", 250, 1.6),
            ],
        }
    }
}

impl ChallengeSequence {
    pub fn new(mut challenges: Vec<PoseChallenge>) -> Result<Self> {
        if challenges.is_empty() {
            return Err(Error::Config("challenge sequence is empty".into()));
        }
        if let Some(bad) = challenges
            .iter()
            .find(|c| !(c.difficulty_multiplier.is_finite() && c.difficulty_multiplier > 0.0))
        {
            return Err(Error::Config(format!(
                "challenge {} has invalid difficulty_multiplier {}",
                bad.id, bad.difficulty_multiplier
            )));
        }
        // A fresh curriculum never starts out completed
        for challenge in challenges.iter_mut() {
            challenge.completed = false;
        }
        Ok(Self { challenges })
    }

    /// Load a curriculum from a JSON array of challenges
    pub fn from_json(json: &str) -> Result<Self> {
        let challenges: Vec<PoseChallenge> = serde_json::from_str(json)?;
        Self::new(challenges)
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PoseChallenge> {
        self.challenges.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PoseChallenge> {
        self.challenges.iter()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.challenges.len()
    }

    /// Mark a challenge completed. Returns false if it already was.
    pub(crate) fn mark_completed(&mut self, index: usize) -> bool {
        match self.challenges.get_mut(index) {
            Some(challenge) if !challenge.completed => {
                challenge.completed = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear_completed(&mut self) {
        for challenge in self.challenges.iter_mut() {
            challenge.completed = false;
        }
    }

    /// Scale every multiplier up for the next level
    pub(crate) fn escalate(&mut self) {
        for challenge in self.challenges.iter_mut() {
            challenge.difficulty_multiplier *= LEVEL_DIFFICULTY_GROWTH;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curriculum() {
        let seq = ChallengeSequence::default();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.get(0).unwrap().name, "Warrior Pose II");
        assert_eq!(seq.get(3).unwrap().points, 250);
        assert!(seq.iter().all(|c| !c.completed));
        assert!(seq.is_last(3));
        assert!(!seq.is_last(2));
    }

    #[test]
    fn test_from_json_ignores_completed_flag() {
        let json = r#"[
            {"id": 7, "name": "Chair", "image_path": "/chair.png", "points": 120,
             "difficulty_multiplier": 1.1, "completed": true}
        ]"#;
        let seq = ChallengeSequence::from_json(json).unwrap();
        assert_eq!(seq.len(), 1);
        assert!(!seq.get(0).unwrap().completed);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(ChallengeSequence::from_json("[]"), Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let json = r#"[{"id": 1, "name": "A", "image_path": "/a.png", "points": 10,
                        "difficulty_multiplier": 0.0}]"#;
        assert!(matches!(ChallengeSequence::from_json(json), Err(Error::Config(_))));
    }

    #[test]
    fn test_mark_completed_once() {
        let mut seq = ChallengeSequence::default();
        assert!(seq.mark_completed(1));
        assert!(!seq.mark_completed(1));
        assert!(!seq.mark_completed(99));
        seq.clear_completed();
        assert!(!seq.get(1).unwrap().completed);
    }

    #[test]
    fn test_escalate_only_grows() {
        let mut seq = ChallengeSequence::default();
        seq.escalate();
        let multipliers: Vec<f64> = seq.iter().map(|c| c.difficulty_multiplier).collect();
        let expected = [1.2, 1.44, 1.68, 1.92];
        for (m, e) in multipliers.iter().zip(expected.iter()) {
            assert!((m - e).abs() < 1e-12);
        }
    }
}
