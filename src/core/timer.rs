/// Frames-per-second estimate, refreshed once per `interval` seconds
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    interval: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            frames: 0,
            elapsed: 0.0,
            interval,
        }
    }

    /// Count one frame; returns the fresh estimate when the window closes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed < self.interval {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_counter_reports_once_per_interval() {
        let mut counter = FpsCounter::new(1.0);

        for _ in 0..59 {
            assert!(counter.tick(1.0 / 60.0).is_none());
        }
        let fps = counter.tick(1.0 / 60.0 + 1e-4).unwrap();
        assert!((fps - 60.0).abs() < 0.1);
    }

    #[test]
    fn fps_counter_restarts_after_report() {
        let mut counter = FpsCounter::new(0.5);
        assert!(counter.tick(0.6).is_some());
        assert!(counter.tick(0.1).is_none());
        let fps = counter.tick(0.4).unwrap();
        assert!((fps - 4.0).abs() < 1e-4);
    }
}
