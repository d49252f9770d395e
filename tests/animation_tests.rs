use desert_scene::animation::{Caravan, BOB_AMPLITUDE, DEFAULT_SPEED, TIME_STEP};
use desert_scene::core::{Button, WinitController};
use glam::Vec3;
use winit::event::ElementState;

#[cfg(test)]
mod animation_tests {
    use super::*;

    fn caravan() -> Caravan {
        Caravan::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), DEFAULT_SPEED)
    }

    #[test]
    fn test_arrow_down_moves_towards_end() {
        let mut caravan = caravan();
        let mut keys = WinitController::new();
        keys.set_button(Button::ArrowDown, ElementState::Pressed);

        caravan.advance(&keys);

        assert!((caravan.t() - 0.901).abs() < 1e-6);
        assert!((caravan.position().z - 9.01).abs() < 1e-4);
    }

    #[test]
    fn test_arrow_up_moves_towards_start() {
        let mut caravan = caravan();
        let mut keys = WinitController::new();
        keys.set_button(Button::ArrowUp, ElementState::Pressed);

        for _ in 0..100 {
            caravan.advance(&keys);
        }

        assert!((caravan.t() - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_route_parameter_is_clamped_at_end() {
        let mut caravan = caravan();
        let mut keys = WinitController::new();
        keys.set_button(Button::ArrowDown, ElementState::Pressed);

        for _ in 0..500 {
            caravan.advance(&keys);
        }

        assert_eq!(caravan.t(), 1.0);
        assert_eq!(caravan.position(), Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_route_parameter_is_clamped_at_start() {
        let mut caravan = Caravan::new(Vec3::ZERO, Vec3::X, 0.5);
        let mut keys = WinitController::new();
        keys.set_button(Button::ArrowUp, ElementState::Pressed);

        for _ in 0..5 {
            caravan.advance(&keys);
        }

        assert_eq!(caravan.t(), 0.0);
        assert_eq!(caravan.position(), Vec3::ZERO);
    }

    #[test]
    fn test_released_key_stops_movement() {
        let mut caravan = caravan();
        let mut keys = WinitController::new();
        keys.set_button(Button::ArrowDown, ElementState::Pressed);
        caravan.advance(&keys);
        keys.set_button(Button::ArrowDown, ElementState::Released);
        let t = caravan.t();

        caravan.advance(&keys);

        assert_eq!(caravan.t(), t);
    }

    #[test]
    fn test_clock_advances_every_frame() {
        let mut caravan = caravan();
        let keys = WinitController::new();

        for _ in 0..50 {
            caravan.advance(&keys);
        }

        let expected = (50.0 * TIME_STEP).sin() * BOB_AMPLITUDE;
        assert!((caravan.bob() - expected).abs() < 1e-6);
    }
}
