//! Game configuration
//!
//! Static settings applied at session start or by an explicit user
//! action. JavaScript passes them as JSON; missing fields fall back to
//! the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pose::DEFAULT_MATCH_THRESHOLD;
use crate::reward::RetryPolicy;

pub const DEFAULT_TARGET_HOLD_SECONDS: f64 = 5.0;
pub const DEFAULT_TICK_PERIOD_MS: u32 = 100;
pub const DEFAULT_NOTIFICATION_MS: u32 = 3000;
pub const DEFAULT_REWARD_AMOUNT: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds a pose must be held without interruption
    pub target_hold_seconds: f64,
    /// Similarity strictly above this counts as a match
    pub match_threshold: f32,
    /// Hold-timer tick period
    pub tick_period_ms: u32,
    /// On-screen lifetime of challenge and level alerts
    pub notification_ms: u32,
    /// TSD sent when a reward is claimed
    pub reward_amount: u32,
    pub reward_retry: RetryPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_hold_seconds: DEFAULT_TARGET_HOLD_SECONDS,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            reward_amount: DEFAULT_REWARD_AMOUNT,
            reward_retry: RetryPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_target_time(self.target_hold_seconds)?;
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(Error::Config(format!(
                "match_threshold must be within [0, 1], got {}",
                self.match_threshold
            )));
        }
        if self.tick_period_ms == 0 {
            return Err(Error::Config("tick_period_ms must be positive".into()));
        }
        if self.notification_ms == 0 {
            return Err(Error::Config("notification_ms must be positive".into()));
        }
        Ok(())
    }

    /// Target hold time in whole milliseconds
    pub fn target_hold_ms(&self) -> u64 {
        (self.target_hold_seconds * 1000.0).round() as u64
    }
}

pub(crate) fn validate_target_time(seconds: f64) -> Result<()> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(Error::TargetTime(seconds))
    }
}
