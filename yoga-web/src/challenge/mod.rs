//! Challenge module - hold timer, curriculum and scoring
//!
//! Re-exports only. All logic in submodules.

mod events;
mod hold_timer;
mod scoring;
mod sequence;
mod session;
mod ticker;

pub use events::{EventQueue, GameEvent, Notification, NotificationBoard, NotificationKind};
pub use hold_timer::{HoldState, HoldTimer, HoldTimerState, TickOutcome};
pub use scoring::{points_earned, BASELINE_HOLD_SECONDS};
pub use sequence::{ChallengeSequence, PoseChallenge, LEVEL_DIFFICULTY_GROWTH};
pub use session::{Session, SessionSnapshot, Signal};
pub use ticker::Ticker;
