//! Frame-rate tracking
//!
//! The whole point of the demo is comparing how many bodies each strategy
//! can push at a steady frame rate, so the HUD shows FPS next to body count.

use crate::consts::STATS_WINDOW;

/// Rolling FPS estimate over the last `STATS_WINDOW` frames
#[derive(Debug, Clone)]
pub struct FrameStats {
    frame_times: [f64; STATS_WINDOW],
    frame_index: usize,
    recorded: usize,
    fps: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; STATS_WINDOW],
            frame_index: 0,
            recorded: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp (ms) and return the current estimate.
    /// Stays at 0 until the window has filled once.
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % STATS_WINDOW;
        self.recorded = (self.recorded + 1).min(STATS_WINDOW);

        if self.recorded == STATS_WINDOW {
            // Slot after the newest write holds the oldest sample
            let oldest = self.frame_times[self.frame_index];
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                let intervals = (STATS_WINDOW - 1) as f64;
                self.fps = (intervals * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Forget history (after a long pause the old samples are meaningless)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_until_window_full() {
        let mut stats = FrameStats::new();
        for i in 0..STATS_WINDOW - 1 {
            assert_eq!(stats.record(i as f64 * 16.0), 0);
        }
        assert!(stats.record(STATS_WINDOW as f64 * 16.0) > 0);
    }

    #[test]
    fn test_steady_sixty() {
        let mut stats = FrameStats::new();
        let frame = 1000.0 / 60.0;
        for i in 0..STATS_WINDOW * 3 {
            stats.record(i as f64 * frame);
        }
        assert_eq!(stats.fps(), 60);
    }

    #[test]
    fn test_steady_thirty_from_zero_origin() {
        let mut stats = FrameStats::new();
        let frame = 1000.0 / 30.0;
        for i in 0..STATS_WINDOW + 5 {
            stats.record(i as f64 * frame);
        }
        assert_eq!(stats.fps(), 30);
    }

    #[test]
    fn test_reset() {
        let mut stats = FrameStats::new();
        for i in 0..STATS_WINDOW {
            stats.record(i as f64 * 10.0);
        }
        assert!(stats.fps() > 0);
        stats.reset();
        assert_eq!(stats.fps(), 0);
    }
}
