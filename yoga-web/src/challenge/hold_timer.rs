//! Hold timer - continuous-hold tracking for the current challenge
//!
//! Idle → Holding on the first matched tick, Holding → Idle as soon as
//! the match is lost (no partial credit), Holding → Complete once the
//! accumulated hold reaches the target. Complete is terminal until the
//! owner calls [`HoldTimer::reset`].
//!
//! Hold time is counted in whole ticks so that N ticks of 100 ms reach
//! exactly N × 100 ms.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HoldState {
    #[default]
    Idle,
    Holding,
    Complete,
}

/// Result of a single tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Not matched, nothing held
    Idle,
    /// Matched and accumulating
    Holding { hold_time: f32 },
    /// Match lost before target - hold discarded
    Broken,
    /// Target reached on this tick (fires once)
    Completed { hold_time: f32 },
    /// Already complete, tick ignored
    AlreadyComplete,
}

/// Timer view exposed to the UI
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HoldTimerState {
    pub hold_time: f32,
    pub active: bool,
    pub challenge_complete: bool,
}

pub struct HoldTimer {
    state: HoldState,
    held_ticks: u32,
    tick_period_ms: u32,
}

impl HoldTimer {
    pub fn new(tick_period_ms: u32) -> Self {
        Self {
            state: HoldState::Idle,
            held_ticks: 0,
            tick_period_ms,
        }
    }

    /// Advance one tick period with the latest match signal
    pub fn tick(&mut self, matched: bool, target_ms: u64) -> TickOutcome {
        match self.state {
            HoldState::Complete => TickOutcome::AlreadyComplete,
            HoldState::Idle if !matched => TickOutcome::Idle,
            HoldState::Holding if !matched => {
                self.state = HoldState::Idle;
                self.held_ticks = 0;
                TickOutcome::Broken
            }
            HoldState::Idle | HoldState::Holding => {
                if self.state == HoldState::Idle {
                    self.state = HoldState::Holding;
                    self.held_ticks = 0;
                }
                self.held_ticks += 1;

                if self.held_ms() >= target_ms {
                    self.state = HoldState::Complete;
                    TickOutcome::Completed { hold_time: self.hold_time() }
                } else {
                    TickOutcome::Holding { hold_time: self.hold_time() }
                }
            }
        }
    }

    /// Back to Idle with nothing held
    pub fn reset(&mut self) {
        self.state = HoldState::Idle;
        self.held_ticks = 0;
    }

    pub fn set_tick_period(&mut self, tick_period_ms: u32) {
        self.tick_period_ms = tick_period_ms;
        self.reset();
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    /// Seconds held so far
    pub fn hold_time(&self) -> f32 {
        self.held_ms() as f32 / 1000.0
    }

    pub fn snapshot(&self) -> HoldTimerState {
        HoldTimerState {
            hold_time: self.hold_time(),
            active: self.state == HoldState::Holding,
            challenge_complete: self.state == HoldState::Complete,
        }
    }

    fn held_ms(&self) -> u64 {
        self.held_ticks as u64 * self.tick_period_ms as u64
    }
}
