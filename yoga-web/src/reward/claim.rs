//! Reward claim coordinator
//!
//! The payments SDK lives in JavaScript. This state machine tells the JS
//! side which call to make next and reacts to the outcome:
//!
//! ```text
//! Ready → CreatingPayee → SendingReward → Claimed
//!              │                │
//!              └──── failed ────┴→ WaitingRetry → (retry) → ...
//!                                      └→ Ready (gave up, claim again later)
//! ```
//!
//! Payee creation is remembered, so a retry after a failed send goes
//! straight to sending. A claimed reward is never sent twice. Nothing
//! here touches the session's score or completion flags.

use serde::Serialize;

use super::retry::RetryPolicy;
use crate::error::{Error, Result};

/// On-screen lifetime of the reward success message
pub const REWARD_SUCCESS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClaimState {
    #[default]
    Ready,
    CreatingPayee,
    SendingReward,
    WaitingRetry,
    Claimed,
}

/// What the JS side should do next
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum RewardStep {
    CreatePayee { payee: String, amount: u32, attempt: u32 },
    SendReward { payee: String, amount: u32, attempt: u32 },
    RetryAfter { delay_ms: u64, attempt: u32 },
    Claimed { message: String },
    GaveUp { message: String },
}

/// Trim and check a player name from the name-entry form
pub fn validate_player_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyPlayerName);
    }
    Ok(trimmed.to_string())
}

pub struct RewardClaim {
    policy: RetryPolicy,
    amount: u32,
    player: Option<String>,
    state: ClaimState,
    attempts: u32,
    payee_ready: bool,
}

impl RewardClaim {
    pub fn new(policy: RetryPolicy, amount: u32) -> Self {
        Self {
            policy,
            amount,
            player: None,
            state: ClaimState::Ready,
            attempts: 0,
            payee_ready: false,
        }
    }

    /// Set the player who receives the reward
    pub fn set_player(&mut self, name: &str) -> Result<&str> {
        if self.in_flight() {
            return Err(Error::ClaimNotAllowed("a claim is in progress"));
        }
        let name = validate_player_name(name)?;
        if self.player.as_deref() != Some(name.as_str()) {
            self.payee_ready = false;
        }
        Ok(self.player.insert(name).as_str())
    }

    /// Replace the retry policy and amount for future claims
    pub fn configure(&mut self, policy: RetryPolicy, amount: u32) {
        self.policy = policy;
        self.amount = amount;
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn state(&self) -> ClaimState {
        self.state
    }

    pub fn is_claimed(&self) -> bool {
        self.state == ClaimState::Claimed
    }

    pub fn in_flight(&self) -> bool {
        matches!(
            self.state,
            ClaimState::CreatingPayee | ClaimState::SendingReward | ClaimState::WaitingRetry
        )
    }

    /// Start a claim. Requires a player and at least one completed pose.
    pub fn begin(&mut self, any_pose_completed: bool) -> Result<RewardStep> {
        if self.is_claimed() {
            return Err(Error::ClaimNotAllowed("reward already claimed"));
        }
        if self.in_flight() {
            return Err(Error::ClaimNotAllowed("a claim is in progress"));
        }
        if !any_pose_completed {
            return Err(Error::ClaimNotAllowed("complete a pose first"));
        }
        if self.player.is_none() {
            return Err(Error::ClaimNotAllowed("no player name set"));
        }

        self.attempts = 1;
        log::info!("Processing reward - attempt 1/{}", self.policy.max_retries + 1);
        Ok(self.attempt_step())
    }

    /// Next attempt once the backoff delay has passed
    pub fn retry(&mut self) -> Result<RewardStep> {
        if self.state != ClaimState::WaitingRetry {
            return Err(Error::RewardSequence("retry without a pending backoff"));
        }
        self.attempts += 1;
        log::info!(
            "Processing reward - attempt {}/{}",
            self.attempts,
            self.policy.max_retries + 1
        );
        Ok(self.attempt_step())
    }

    /// JS reports the payee exists
    pub fn payee_created(&mut self) -> Result<RewardStep> {
        if self.state != ClaimState::CreatingPayee {
            return Err(Error::RewardSequence("payee created while not creating a payee"));
        }
        self.payee_ready = true;
        Ok(self.attempt_step())
    }

    /// JS reports the reward went out
    pub fn reward_sent(&mut self) -> Result<RewardStep> {
        if self.state != ClaimState::SendingReward {
            return Err(Error::RewardSequence("reward sent while not sending"));
        }
        self.state = ClaimState::Claimed;
        let player = self.player.as_deref().unwrap_or_default();
        log::info!("Sent {} TSD to {}", self.amount, player);
        Ok(RewardStep::Claimed {
            message: format!(
                "Congratulations {}! You've earned {} TSD for completing the yoga challenge!",
                player, self.amount
            ),
        })
    }

    /// JS reports the current call failed
    pub fn failed(&mut self, reason: &str) -> Result<RewardStep> {
        if !matches!(self.state, ClaimState::CreatingPayee | ClaimState::SendingReward) {
            return Err(Error::RewardSequence("failure reported with no call in progress"));
        }
        log::warn!("Reward attempt {} failed: {}", self.attempts, reason);

        if self.policy.should_retry(self.attempts) {
            self.state = ClaimState::WaitingRetry;
            let delay_ms = self.policy.backoff_ms(self.attempts);
            return Ok(RewardStep::RetryAfter {
                delay_ms,
                attempt: self.attempts,
            });
        }

        log::error!("All reward attempts failed");
        self.state = ClaimState::Ready;
        self.attempts = 0;
        Ok(RewardStep::GaveUp {
            message: format!("Failed to process reward: {}", reason),
        })
    }

    fn attempt_step(&mut self) -> RewardStep {
        let payee = self.player.clone().unwrap_or_default();
        if self.payee_ready {
            self.state = ClaimState::SendingReward;
            RewardStep::SendReward {
                payee,
                amount: self.amount,
                attempt: self.attempts,
            }
        } else {
            self.state = ClaimState::CreatingPayee;
            RewardStep::CreatePayee {
                payee,
                amount: self.amount,
                attempt: self.attempts,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_claim() -> RewardClaim {
        let mut claim = RewardClaim::new(RetryPolicy::default(), 30);
        claim.set_player("  Asha ").unwrap();
        claim
    }

    #[test]
    fn test_name_is_trimmed_and_required() {
        assert_eq!(validate_player_name("  Asha ").unwrap(), "Asha");
        assert!(matches!(validate_player_name("   "), Err(Error::EmptyPlayerName)));
    }

    #[test]
    fn test_happy_path() {
        let mut claim = ready_claim();
        assert_eq!(claim.player(), Some("Asha"));

        let step = claim.begin(true).unwrap();
        assert_eq!(step, RewardStep::CreatePayee { payee: "Asha".into(), amount: 30, attempt: 1 });

        let step = claim.payee_created().unwrap();
        assert_eq!(step, RewardStep::SendReward { payee: "Asha".into(), amount: 30, attempt: 1 });

        match claim.reward_sent().unwrap() {
            RewardStep::Claimed { message } => {
                assert!(message.starts_with("Congratulations Asha!"));
                assert!(message.contains("30 TSD"));
            }
            other => panic!("unexpected step {:?}", other),
        }
        assert!(claim.is_claimed());
    }

    #[test]
    fn test_requires_completed_pose_and_player() {
        let mut claim = RewardClaim::new(RetryPolicy::default(), 30);
        assert!(matches!(claim.begin(true), Err(Error::ClaimNotAllowed(_))));

        claim.set_player("Asha").unwrap();
        assert!(matches!(claim.begin(false), Err(Error::ClaimNotAllowed(_))));
        assert_eq!(claim.state(), ClaimState::Ready);
    }

    #[test]
    fn test_never_claims_twice() {
        let mut claim = ready_claim();
        claim.begin(true).unwrap();
        claim.payee_created().unwrap();
        claim.reward_sent().unwrap();

        assert!(matches!(claim.begin(true), Err(Error::ClaimNotAllowed(_))));
    }

    #[test]
    fn test_no_double_submit_while_in_flight() {
        let mut claim = ready_claim();
        claim.begin(true).unwrap();
        assert!(matches!(claim.begin(true), Err(Error::ClaimNotAllowed(_))));
        assert!(matches!(claim.set_player("Other"), Err(Error::ClaimNotAllowed(_))));
    }

    #[test]
    fn test_retry_skips_existing_payee() {
        let mut claim = ready_claim();
        claim.begin(true).unwrap();
        claim.payee_created().unwrap();

        let step = claim.failed("timeout").unwrap();
        assert_eq!(step, RewardStep::RetryAfter { delay_ms: 1000, attempt: 1 });

        let step = claim.retry().unwrap();
        assert_eq!(step, RewardStep::SendReward { payee: "Asha".into(), amount: 30, attempt: 2 });
    }

    #[test]
    fn test_gives_up_then_allows_new_claim() {
        let mut claim = ready_claim();
        claim.begin(true).unwrap();

        assert_eq!(claim.failed("down").unwrap(), RewardStep::RetryAfter { delay_ms: 1000, attempt: 1 });
        claim.retry().unwrap();
        assert_eq!(claim.failed("down").unwrap(), RewardStep::RetryAfter { delay_ms: 2000, attempt: 2 });
        claim.retry().unwrap();

        let step = claim.failed("down").unwrap();
        assert_eq!(step, RewardStep::GaveUp { message: "Failed to process reward: down".into() });
        assert_eq!(claim.state(), ClaimState::Ready);

        // Player can press claim again without replaying a pose
        assert!(matches!(claim.begin(true).unwrap(), RewardStep::CreatePayee { attempt: 1, .. }));
    }

    #[test]
    fn test_out_of_order_callbacks_rejected() {
        let mut claim = ready_claim();
        assert!(matches!(claim.payee_created(), Err(Error::RewardSequence(_))));
        assert!(matches!(claim.reward_sent(), Err(Error::RewardSequence(_))));
        assert!(matches!(claim.failed("x"), Err(Error::RewardSequence(_))));
        assert!(matches!(claim.retry(), Err(Error::RewardSequence(_))));
    }

    #[test]
    fn test_step_json_shape() {
        let step = RewardStep::RetryAfter { delay_ms: 1000, attempt: 1 };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["step"], "retry_after");
        assert_eq!(json["delay_ms"], 1000);
    }
}
