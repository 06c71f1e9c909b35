mod fps_counter;
mod frame_clock;
mod frame_rate_limit;

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

/// A Vulkan application will generally run as fast as it possibly can to
/// get images on screen. Often this is desirable, but when workloads are low
/// it can cause unreasonably high frame-rates and therefore unexpectedly high
/// CPU/GPU utilization. To prevent this, a frame rate limit can be imposed
/// which just sleeps or yields for a bit of time each frame.
pub struct FrameRateLimit {
    frames_to_track: usize,
    frame_starts: VecDeque<Instant>,
    target_duration: Duration,
}

/// Counts presented frames and reports the average frames-per-second once
/// every `interval` frames.
pub struct FpsCounter {
    interval: u32,
    frames: u32,
    window_start: Option<Instant>,
}

/// Measures the time step between consecutive frames.
pub struct FrameClock {
    last_tick: Option<Instant>,
}
