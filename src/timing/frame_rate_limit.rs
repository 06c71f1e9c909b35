use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use super::FrameRateLimit;

impl FrameRateLimit {
    /// Create a new frame rate limit for a given target fps
    pub fn new(target_fps: u32, frames_to_track: usize) -> Self {
        Self {
            frames_to_track: frames_to_track.max(1),
            frame_starts: VecDeque::with_capacity(frames_to_track + 1),
            target_duration: Duration::from_secs(1) / target_fps.max(1),
        }
    }

    /// The time budget for a single frame.
    pub fn target_duration(&self) -> Duration {
        self.target_duration
    }

    /// Call at the beginning of each frame to establish the start-point when
    /// computing elapsed time.
    pub fn start_frame(&mut self) {
        self.start_frame_at(Instant::now());
    }

    /// Sleep for any remaining time in the target fps.
    pub fn sleep_to_limit(&self) {
        if let Some(remaining) = self.remaining_at(Instant::now()) {
            spin_sleep::sleep(remaining);
        }
    }

    /// Return the average amount of time spent on the last n frames.
    /// N is the value given for `frames_to_track` when creating the frame
    /// rate limit.
    pub fn avg_frame_time(&self) -> Duration {
        self.avg_frame_time_at(Instant::now())
    }
}

impl FrameRateLimit {
    fn start_frame_at(&mut self, now: Instant) {
        if self.frame_starts.len() > self.frames_to_track {
            self.frame_starts.pop_back();
        }
        self.frame_starts.push_front(now);
    }

    /// The time left in the current frame's budget, if any.
    fn remaining_at(&self, now: Instant) -> Option<Duration> {
        let frame_start = self.frame_starts.front()?;
        let elapsed = now.saturating_duration_since(*frame_start);
        self.target_duration.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    fn avg_frame_time_at(&self, now: Instant) -> Duration {
        match self.frame_starts.back() {
            Some(oldest_frame) => {
                now.saturating_duration_since(*oldest_frame)
                    / self.frame_starts.len() as u32
            }
            None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_duration_is_derived_from_fps() {
        let limit = FrameRateLimit::new(50, 10);
        assert_eq!(limit.target_duration(), Duration::from_millis(20));
    }

    #[test]
    fn nothing_remains_before_the_first_frame() {
        let limit = FrameRateLimit::new(60, 10);
        assert_eq!(limit.remaining_at(Instant::now()), None);
        assert_eq!(limit.avg_frame_time(), Duration::ZERO);
    }

    #[test]
    fn remaining_time_shrinks_as_the_frame_progresses() {
        let mut limit = FrameRateLimit::new(10, 10);
        let start = Instant::now();
        limit.start_frame_at(start);

        assert_eq!(
            limit.remaining_at(start + Duration::from_millis(30)),
            Some(Duration::from_millis(70))
        );
        assert_eq!(
            limit.remaining_at(start + Duration::from_millis(150)),
            None
        );
    }

    #[test]
    fn only_the_most_recent_frames_are_tracked() {
        let mut limit = FrameRateLimit::new(60, 2);
        let start = Instant::now();
        for i in 0..10 {
            limit.start_frame_at(start + Duration::from_millis(10 * i));
        }
        assert_eq!(limit.frame_starts.len(), 3);

        let now = start + Duration::from_millis(100);
        // the oldest tracked start is at 70ms
        assert_eq!(limit.avg_frame_time_at(now), Duration::from_millis(10));
    }
}
