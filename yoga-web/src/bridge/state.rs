//! Game state shared by every bridge entry point
//!
//! One session and one reward claim per page, kept in thread-local
//! storage (WASM is single-threaded). All mutation goes through
//! [`with_game`], so a frame comparison and a timer tick can never
//! interleave.

use std::cell::RefCell;

use crate::challenge::{ChallengeSequence, NotificationKind, Session};
use crate::config::GameConfig;
use crate::error::Result;
use crate::reward::{RewardClaim, RewardStep, REWARD_SUCCESS_MS};

pub(crate) struct Game {
    pub session: Session,
    pub reward: RewardClaim,
}

impl Default for Game {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            reward: RewardClaim::new(config.reward_retry, config.reward_amount),
            session: Session::new(config, ChallengeSequence::default()),
        }
    }
}

thread_local! {
    static GAME: RefCell<Game> = RefCell::new(Game::default());
}

pub(crate) fn with_game<R>(f: impl FnOnce(&mut Game) -> R) -> R {
    GAME.with(|cell| f(&mut cell.borrow_mut()))
}

impl Game {
    pub fn configure(&mut self, json: &str) -> Result<()> {
        let config = GameConfig::from_json(json)?;
        self.reward.configure(config.reward_retry, config.reward_amount);
        self.session.configure(config)?;
        log::info!("Game configured: {:?}", self.session.config());
        Ok(())
    }

    pub fn load_sequence(&mut self, json: &str) -> Result<()> {
        let sequence = ChallengeSequence::from_json(json)?;
        self.session.load_sequence(sequence);
        Ok(())
    }

    pub fn claim_reward(&mut self, now_ms: f64) -> Result<RewardStep> {
        let step = self.reward.begin(self.session.any_pose_completed())?;
        Ok(self.publish(step, now_ms))
    }

    pub fn reward_retry(&mut self, now_ms: f64) -> Result<RewardStep> {
        let step = self.reward.retry()?;
        Ok(self.publish(step, now_ms))
    }

    pub fn reward_payee_created(&mut self, now_ms: f64) -> Result<RewardStep> {
        let step = self.reward.payee_created()?;
        Ok(self.publish(step, now_ms))
    }

    pub fn reward_sent(&mut self, now_ms: f64) -> Result<RewardStep> {
        let step = self.reward.reward_sent()?;
        Ok(self.publish(step, now_ms))
    }

    pub fn reward_failed(&mut self, reason: &str, now_ms: f64) -> Result<RewardStep> {
        let step = self.reward.failed(reason)?;
        Ok(self.publish(step, now_ms))
    }

    /// Post the user-visible outcome of a finished claim
    fn publish(&mut self, step: RewardStep, now_ms: f64) -> RewardStep {
        match &step {
            RewardStep::Claimed { message } => {
                self.session.notify(
                    message.clone(),
                    NotificationKind::RewardSuccess,
                    REWARD_SUCCESS_MS,
                    now_ms,
                );
            }
            RewardStep::GaveUp { message } => {
                let lifetime = self.session.config().notification_ms;
                self.session
                    .notify(message.clone(), NotificationKind::Info, lifetime, now_ms);
            }
            _ => {}
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::HoldState;
    use crate::pose::test_poses::standing_pose;

    fn game_with_completed_pose() -> Game {
        let mut game = Game::default();
        game.reward.set_player("Asha").unwrap();
        game.session.set_reference(standing_pose());
        game.session.observe_frame(Some(&standing_pose()));
        let ticker = game.session.start_ticker();
        for i in 0..50 {
            game.session.tick(ticker, i as f64 * 100.0);
        }
        assert_eq!(game.session.hold_state(), HoldState::Complete);
        game
    }

    #[test]
    fn test_configure_updates_session_and_reward() {
        let mut game = Game::default();
        game.configure(r#"{"target_hold_seconds": 3, "reward_amount": 50}"#).unwrap();
        assert_eq!(game.session.config().target_hold_seconds, 3.0);

        game.reward.set_player("Asha").unwrap();
        game.session.set_reference(standing_pose());
        game.session.observe_frame(Some(&standing_pose()));
        let ticker = game.session.start_ticker();
        for _ in 0..30 {
            game.session.tick(ticker, 0.0);
        }
        match game.claim_reward(0.0).unwrap() {
            RewardStep::CreatePayee { amount, .. } => assert_eq!(amount, 50),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_bad_config_leaves_session_alone() {
        let mut game = Game::default();
        assert!(game.configure(r#"{"tick_period_ms": 0}"#).is_err());
        assert_eq!(game.session.config().tick_period_ms, 100);
    }

    #[test]
    fn test_load_sequence() {
        let mut game = Game::default();
        game.load_sequence(
            r#"[{"id": 5, "name": "Boat", "image_path": "/boat.png", "points": 90,
                 "difficulty_multiplier": 1.0}]"#,
        )
        .unwrap();
        assert_eq!(game.session.sequence().len(), 1);
        assert_eq!(game.session.current_challenge().unwrap().name, "Boat");
    }

    #[test]
    fn test_claim_success_posts_notification() {
        let mut game = game_with_completed_pose();
        game.claim_reward(10_000.0).unwrap();
        game.reward_payee_created(10_000.0).unwrap();
        game.reward_sent(10_000.0).unwrap();

        let active = game.session.active_notifications(14_000.0);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NotificationKind::RewardSuccess);
    }

    #[test]
    fn test_reward_failure_keeps_score() {
        let mut game = game_with_completed_pose();
        let score = game.session.score();

        game.claim_reward(0.0).unwrap();
        for _ in 0..2 {
            assert!(matches!(game.reward_failed("offline", 0.0).unwrap(), RewardStep::RetryAfter { .. }));
            game.reward_retry(0.0).unwrap();
        }
        let step = game.reward_failed("offline", 0.0).unwrap();
        assert!(matches!(step, RewardStep::GaveUp { .. }));

        assert_eq!(game.session.score(), score);
        assert!(game.session.sequence().get(0).unwrap().completed);
        assert!(game
            .session
            .active_notifications(0.0)
            .iter()
            .any(|n| n.message == "Failed to process reward: offline"));
    }

    #[test]
    fn test_claim_before_any_completion_rejected() {
        let mut game = Game::default();
        game.reward.set_player("Asha").unwrap();
        assert!(game.claim_reward(0.0).is_err());
    }
}
