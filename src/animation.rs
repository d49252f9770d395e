use glam::Vec3;

use crate::core::{Button, Controller};

/// Animation clock advance per rendered frame
pub const TIME_STEP: f32 = 0.02;
/// Default change of `t` per frame while a key is held
pub const DEFAULT_SPEED: f32 = 0.001;
/// Vertical amplitude of the hovering motion
pub const BOB_AMPLITUDE: f32 = 0.002;

const INITIAL_T: f32 = 0.90;

/// Camel and carpet travelling on a straight line between two points
///
/// Holding ArrowDown moves towards `end`, ArrowUp back towards `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Caravan {
    start: Vec3,
    end: Vec3,
    t: f32,
    speed: f32,
    time: f32,
}

impl Caravan {
    pub fn new(start: Vec3, end: Vec3, speed: f32) -> Self {
        Self {
            start,
            end,
            t: INITIAL_T,
            speed,
            time: 0.0,
        }
    }

    /// Route from the far dune to just in front of the camera eye
    pub fn towards_camera(camera_position: Vec3, speed: f32) -> Self {
        Self::new(
            Vec3::new(0.0, 2.011, 10.0),
            camera_position - Vec3::new(0.0, 0.0, 0.4),
            speed,
        )
    }

    /// One frame of input polling and clock advance
    pub fn advance(&mut self, controller: &dyn Controller) {
        self.time += TIME_STEP;

        if controller.is_down(Button::ArrowUp) {
            self.t -= self.speed;
        }
        if controller.is_down(Button::ArrowDown) {
            self.t += self.speed;
        }
        self.t = self.t.clamp(0.0, 1.0);
    }

    /// `start + t * (end - start)`
    pub fn position(&self) -> Vec3 {
        self.start.lerp(self.end, self.t)
    }

    /// Vertical hover offset for the current frame
    pub fn bob(&self) -> f32 {
        self.time.sin() * BOB_AMPLITUDE
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }
}
