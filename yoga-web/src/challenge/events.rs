//! Game events and on-screen notifications
//!
//! Events are queued for JavaScript to drain (reward issuance, UI).
//! Notifications are short-lived alert messages with an expiry time.

use std::collections::VecDeque;

use serde::Serialize;

/// Output events consumed by the UI and reward collaborators
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    ChallengeComplete {
        challenge_id: u32,
        points_earned: u32,
        new_total_score: u32,
    },
    LevelComplete {
        new_level: u32,
    },
}

/// Alert style (matches the UI's CSS classes)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    RewardSuccess,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at_ms: f64,
}

/// FIFO queue of undelivered events
#[derive(Default)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Notifications currently on screen
#[derive(Default)]
pub struct NotificationBoard {
    items: Vec<Notification>,
}

impl NotificationBoard {
    pub fn post(&mut self, message: String, kind: NotificationKind, lifetime_ms: u32, now_ms: f64) {
        self.items.push(Notification {
            message,
            kind,
            expires_at_ms: now_ms + lifetime_ms as f64,
        });
    }

    /// Notifications still visible at `now_ms`; expired ones are dropped
    pub fn active(&mut self, now_ms: f64) -> Vec<Notification> {
        self.items.retain(|n| n.expires_at_ms > now_ms);
        self.items.clone()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
