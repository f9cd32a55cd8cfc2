//! Ticker lease
//!
//! The JS side drives the hold timer with a `setInterval`. Each start
//! hands out a new generation; ticks carrying any other generation are
//! ignored, so an interval left running after teardown cannot touch
//! session state.

#[derive(Default)]
pub struct Ticker {
    generation: u32,
    running: bool,
}

impl Ticker {
    /// Start (or restart) the ticker, invalidating older generations
    pub fn start(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        self.generation
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a tick from `generation` may mutate state
    pub fn accepts(&self, generation: u32) -> bool {
        self.running && generation == self.generation
    }
}
