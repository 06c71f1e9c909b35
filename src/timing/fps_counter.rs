use std::time::Instant;

use super::FpsCounter;

impl FpsCounter {
    /// Create a counter which reports once every `interval` frames.
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            window_start: None,
        }
    }

    /// Record a frame.
    ///
    /// # Returns
    ///
    /// The average frames per second over the last `interval` frames when
    /// the interval is complete, otherwise None.
    pub fn frame(&mut self) -> Option<f64> {
        self.frame_at(Instant::now())
    }

    /// Record a frame which completed at the given instant.
    pub fn frame_at(&mut self, now: Instant) -> Option<f64> {
        let window_start = match self.window_start {
            Some(start) => start,
            None => {
                self.window_start = Some(now);
                return None;
            }
        };

        self.frames += 1;
        if self.frames < self.interval {
            return None;
        }

        let elapsed = now.saturating_duration_since(window_start).as_secs_f64();
        let fps = if elapsed > 0.0 {
            self.frames as f64 / elapsed
        } else {
            0.0
        };
        self.frames = 0;
        self.window_start = Some(now);
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reports_once_per_interval() {
        let mut counter = FpsCounter::new(60);
        let start = Instant::now();
        assert_eq!(counter.frame_at(start), None);

        let mut reports = vec![];
        for i in 1..=120 {
            let now = start + Duration::from_millis(10 * i);
            if let Some(fps) = counter.frame_at(now) {
                reports.push(fps);
            }
        }

        assert_eq!(reports.len(), 2);
        for fps in reports {
            assert_relative_eq!(fps, 100.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_interval_is_treated_as_one() {
        let mut counter = FpsCounter::new(0);
        let start = Instant::now();
        counter.frame_at(start);
        let fps = counter.frame_at(start + Duration::from_millis(500));
        assert_relative_eq!(fps.unwrap_or_default(), 2.0, epsilon = 1e-9);
    }
}
