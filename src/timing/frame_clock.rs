use std::time::Instant;

use super::FrameClock;

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Seconds elapsed since the previous tick. The first tick returns 0.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let time_step = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        time_step
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn first_tick_is_zero_then_measures_the_gap() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        assert_eq!(clock.tick_at(start), 0.0);
        assert_relative_eq!(
            clock.tick_at(start + Duration::from_millis(250)),
            0.25,
            epsilon = 1e-6
        );
    }
}
