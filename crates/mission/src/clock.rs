//! Pausable simulation clock.

/// Monotonic simulation time that stops while paused.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    elapsed: f64,
    ticks: u64,
    paused: bool,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by `dt` seconds. Returns `false` without advancing while paused.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.paused {
            return false;
        }
        self.elapsed += f64::from(dt);
        self.ticks += 1;
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Simulation seconds elapsed while unpaused.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed * 1000.0) as u64
    }

    /// Ticks that actually ran.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
