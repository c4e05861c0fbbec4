/// Countdown that succeeds once `duration` seconds of simulation time pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TimerAction {
    duration: f32,
    timer: f32,
}

impl TimerAction {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            timer: duration,
        }
    }

    /// Sets a new duration and rewinds the countdown.
    pub fn initialize(&mut self, duration: f32) {
        self.duration = duration;
        self.timer = duration;
    }

    pub(crate) fn restart(&mut self) {
        self.timer = self.duration;
    }

    /// Consumes `dt` seconds. Returns `true` once the countdown has run out.
    pub(crate) fn advance(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        self.timer <= 0.0
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn remaining(&self) -> f32 {
        self.timer
    }
}
