use std::time::Instant;

/// Frame number and wall-clock timing for one redraw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Hands out a `FrameInfo` per redraw
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_number: u64,
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame_number: 0,
            start,
            last: start,
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    /// Frame observed at `now`; instants before the previous frame count as zero delta
    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let info = FrameInfo {
            number: self.frame_number,
            time: now.saturating_duration_since(self.start).as_secs_f32(),
            delta: now.saturating_duration_since(self.last).as_secs_f32(),
        };
        self.frame_number += 1;
        self.last = self.last.max(now);
        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
