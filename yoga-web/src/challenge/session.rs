//! Challenge session - the single owner of game state
//!
//! Frames update the latest match signal, ticks advance the hold timer,
//! and user actions (next pose, go to pose, target change, reset) are the
//! only way out of a completed challenge. Nothing here renders or
//! performs I/O; results are queued as events and notifications.

use serde::Serialize;

use super::events::{EventQueue, GameEvent, Notification, NotificationBoard, NotificationKind};
use super::hold_timer::{HoldState, HoldTimer, HoldTimerState, TickOutcome};
use super::scoring::points_earned;
use super::sequence::{ChallengeSequence, PoseChallenge};
use super::ticker::Ticker;
use crate::config::{validate_target_time, GameConfig};
use crate::error::{Error, Result};
use crate::pose::{compare, is_match, Pose};

/// Latest detection result
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Signal {
    /// No person detected, no reference yet, or detector unavailable
    #[default]
    NoSignal,
    Detected { similarity: f32, matched: bool },
}

impl Signal {
    pub fn matched(&self) -> bool {
        matches!(self, Signal::Detected { matched: true, .. })
    }

    pub fn similarity(&self) -> f32 {
        match self {
            Signal::Detected { similarity, .. } => *similarity,
            Signal::NoSignal => 0.0,
        }
    }
}

/// Serializable view of the session for the UI
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub level: u32,
    pub score: u32,
    pub current_index: usize,
    pub target_hold_seconds: f64,
    pub timer: HoldTimerState,
    pub has_signal: bool,
    pub matched: bool,
    pub similarity: f32,
    pub has_reference: bool,
    pub any_pose_completed: bool,
    pub sequence: &'a ChallengeSequence,
}

pub struct Session {
    config: GameConfig,
    sequence: ChallengeSequence,
    current_index: usize,
    level: u32,
    score: u32,
    timer: HoldTimer,
    ticker: Ticker,
    reference: Option<Pose>,
    signal: Signal,
    any_pose_completed: bool,
    events: EventQueue,
    notifications: NotificationBoard,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default(), ChallengeSequence::default())
    }
}

impl Session {
    pub fn new(config: GameConfig, sequence: ChallengeSequence) -> Self {
        Self {
            timer: HoldTimer::new(config.tick_period_ms),
            config,
            sequence,
            current_index: 0,
            level: 1,
            score: 0,
            ticker: Ticker::default(),
            reference: None,
            signal: Signal::NoSignal,
            any_pose_completed: false,
            events: EventQueue::default(),
            notifications: NotificationBoard::default(),
        }
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Apply a new configuration. Resets the session.
    pub fn configure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.timer.set_tick_period(config.tick_period_ms);
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Replace the curriculum and start over at level 1, first pose
    pub fn load_sequence(&mut self, sequence: ChallengeSequence) {
        self.sequence = sequence;
        self.level = 1;
        self.current_index = 0;
        self.reference = None;
        self.signal = Signal::NoSignal;
        self.notifications.clear();
        self.reset();
        log::info!("Loaded curriculum with {} poses", self.sequence.len());
    }

    // ------------------------------------------------------------------------
    // Detection input
    // ------------------------------------------------------------------------

    /// Set the reference pose for the current target image
    pub fn set_reference(&mut self, reference: Pose) {
        self.reference = Some(reference);
        self.signal = Signal::NoSignal;
    }

    /// Drop the reference while a new target image loads, or when nobody
    /// was detected in it
    pub fn clear_reference(&mut self) {
        self.reference = None;
        self.signal = Signal::NoSignal;
    }

    /// Compare a camera frame against the reference and store the result
    ///
    /// `None` means no person was detected this frame.
    pub fn observe_frame(&mut self, frame: Option<&Pose>) -> Signal {
        self.signal = match (frame, self.reference.as_ref()) {
            (Some(frame), Some(reference)) => {
                let similarity = compare(Some(frame), Some(reference));
                Signal::Detected {
                    similarity,
                    matched: is_match(similarity, self.config.match_threshold),
                }
            }
            _ => Signal::NoSignal,
        };
        self.signal
    }

    /// Detector or camera went away
    pub fn lose_signal(&mut self) {
        self.signal = Signal::NoSignal;
    }

    // ------------------------------------------------------------------------
    // Timer
    // ------------------------------------------------------------------------

    pub fn start_ticker(&mut self) -> u32 {
        self.ticker.start()
    }

    pub fn stop_ticker(&mut self) {
        self.ticker.stop();
    }

    /// Advance the hold timer by one period using the latest signal
    ///
    /// Returns `None` when `generation` is not the live ticker.
    pub fn tick(&mut self, generation: u32, now_ms: f64) -> Option<TickOutcome> {
        if !self.ticker.accepts(generation) {
            log::debug!("Ignoring tick from stale ticker generation {}", generation);
            return None;
        }

        let outcome = self.timer.tick(self.signal.matched(), self.config.target_hold_ms());
        if let TickOutcome::Completed { .. } = outcome {
            self.complete_current(now_ms);
        }
        Some(outcome)
    }

    fn complete_current(&mut self, now_ms: f64) {
        let Some(challenge) = self.sequence.get(self.current_index) else {
            return;
        };
        let challenge_id = challenge.id;
        let earned = points_earned(
            challenge.points,
            challenge.difficulty_multiplier,
            self.config.target_hold_seconds,
        );

        self.sequence.mark_completed(self.current_index);
        self.score = self.score.saturating_add(earned);
        self.any_pose_completed = true;

        log::info!(
            "Challenge {} complete: +{} points (total {})",
            challenge_id,
            earned,
            self.score
        );

        self.events.push(GameEvent::ChallengeComplete {
            challenge_id,
            points_earned: earned,
            new_total_score: self.score,
        });
        self.notify(
            format!("Challenge Complete! +{} Points", earned),
            NotificationKind::Info,
            self.config.notification_ms,
            now_ms,
        );
    }

    // ------------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------------

    /// Advance to the next pose, or finish the level after the last one
    pub fn next_pose(&mut self, now_ms: f64) {
        self.timer.reset();

        if !self.sequence.is_last(self.current_index) {
            self.select(self.current_index + 1);
            return;
        }

        let finished = self.level;
        self.level += 1;
        self.sequence.clear_completed();
        self.sequence.escalate();
        self.select(0);

        log::info!("Level {} complete, starting level {}", finished, self.level);

        self.events.push(GameEvent::LevelComplete { new_level: self.level });
        self.notify(
            format!("Level {} Complete! All poses mastered!", finished),
            NotificationKind::Info,
            self.config.notification_ms,
            now_ms,
        );
    }

    /// Jump to a specific pose
    pub fn go_to_pose(&mut self, index: usize) -> Result<()> {
        if index >= self.sequence.len() {
            return Err(Error::PoseIndex {
                index,
                len: self.sequence.len(),
            });
        }
        self.timer.reset();
        self.select(index);
        Ok(())
    }

    /// Change the hold target. Resets the session.
    pub fn set_target_time(&mut self, seconds: f64) -> Result<()> {
        validate_target_time(seconds)?;
        self.config.target_hold_seconds = seconds;
        self.reset();
        Ok(())
    }

    /// Zero the score, clear every completion and the timer
    pub fn reset(&mut self) {
        self.score = 0;
        self.sequence.clear_completed();
        self.timer.reset();
        self.any_pose_completed = false;
    }

    /// View torn down: stop the ticker and drop the detection signal
    pub fn teardown(&mut self) {
        self.ticker.stop();
        self.timer.reset();
        self.signal = Signal::NoSignal;
    }

    fn select(&mut self, index: usize) {
        // A new target image needs a new reference pose
        if index != self.current_index {
            self.current_index = index;
            self.reference = None;
            self.signal = Signal::NoSignal;
        }
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    pub fn notify(&mut self, message: String, kind: NotificationKind, lifetime_ms: u32, now_ms: f64) {
        self.notifications.post(message, kind, lifetime_ms, now_ms);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn active_notifications(&mut self, now_ms: f64) -> Vec<Notification> {
        self.notifications.active(now_ms)
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            level: self.level,
            score: self.score,
            current_index: self.current_index,
            target_hold_seconds: self.config.target_hold_seconds,
            timer: self.timer.snapshot(),
            has_signal: self.signal != Signal::NoSignal,
            matched: self.signal.matched(),
            similarity: self.signal.similarity(),
            has_reference: self.reference.is_some(),
            any_pose_completed: self.any_pose_completed,
            sequence: &self.sequence,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sequence(&self) -> &ChallengeSequence {
        &self.sequence
    }

    pub fn current_challenge(&self) -> Option<&PoseChallenge> {
        self.sequence.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hold_state(&self) -> HoldState {
        self.timer.state()
    }

    pub fn hold_time(&self) -> f32 {
        self.timer.hold_time()
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }

    pub fn any_pose_completed(&self) -> bool {
        self.any_pose_completed
    }
}
