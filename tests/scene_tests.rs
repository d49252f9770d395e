use desert_scene::animation::{Caravan, DEFAULT_SPEED};
use desert_scene::camera::{Camera, CameraPreset};
use desert_scene::scenes::{builtin_mesh, DesertScene, DrawCall, MeshKind, PYRAMIDS};
use glam::{Mat4, Vec3};

#[cfg(test)]
mod scene_tests {
    use super::*;

    fn frame() -> (Vec<DrawCall>, Caravan) {
        let camera = Camera::from_preset(CameraPreset::Overhead);
        let caravan = Caravan::towards_camera(camera.position, DEFAULT_SPEED);
        let scene = DesertScene::new(camera.up);
        (scene.draw_calls(&caravan), caravan)
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_ten_draw_calls_per_frame() {
        let (calls, _) = frame();
        assert_eq!(calls.len(), 10);
    }

    #[test]
    fn test_ground_is_flipped_and_pushed_back() {
        let (calls, _) = frame();
        let plane = calls[0];
        assert_eq!(plane.mesh, MeshKind::Plane);

        // Half turn about x applied after the translation
        let origin = plane.model.transform_point3(Vec3::ZERO);
        assert!(close(origin, Vec3::new(0.0, 0.0, 100.0)));
        let up = plane.model.transform_vector3(Vec3::Y);
        assert!(close(up, Vec3::NEG_Y));
    }

    #[test]
    fn test_pyramids_are_placed_and_scaled() {
        let (calls, _) = frame();
        for (call, &(position, scale)) in calls[1..6].iter().zip(PYRAMIDS.iter()) {
            assert_eq!(call.mesh, MeshKind::Pyramid);
            assert!(close(call.model.transform_point3(Vec3::ZERO), position));
            assert!(close(
                call.model.transform_point3(Vec3::Y),
                position + Vec3::Y * scale
            ));
        }
    }

    #[test]
    fn test_moon_is_drawn_twice_at_the_same_place() {
        let (calls, _) = frame();
        let front = calls[6];
        let back = calls[7];
        assert_eq!(front.mesh, MeshKind::Moon);
        assert_eq!(back.mesh, MeshKind::Moon);

        let centre = Vec3::new(2.0, 8.0, 50.0);
        assert!(close(front.model.transform_point3(Vec3::ZERO), centre));
        assert!(close(back.model.transform_point3(Vec3::ZERO), centre));
        assert_ne!(front.model, back.model);
    }

    #[test]
    fn test_camel_rides_the_caravan() {
        let (calls, caravan) = frame();
        let camel = calls[9];
        assert_eq!(camel.mesh, MeshKind::Camel);

        let expected = caravan.position() + Vec3::Y * caravan.bob();
        assert!(close(camel.model.transform_point3(Vec3::ZERO), expected));
        assert!(close(
            camel.model.transform_vector3(Vec3::splat(1000.0)),
            Vec3::ONE
        ));
    }

    #[test]
    fn test_carpet_sits_under_the_camel() {
        let (calls, caravan) = frame();
        let carpet = calls[8];
        assert_eq!(carpet.mesh, MeshKind::Carpet);

        let expected =
            caravan.position() + Vec3::Y * caravan.bob() + Vec3::new(0.0, -0.013, -0.04);
        assert!(close(carpet.model.transform_point3(Vec3::ZERO), expected));
    }

    #[test]
    fn test_every_builtin_kind_has_a_mesh() {
        for kind in [
            MeshKind::Plane,
            MeshKind::Pyramid,
            MeshKind::Moon,
            MeshKind::Carpet,
        ] {
            let mesh = builtin_mesh(kind).unwrap();
            assert!(mesh.triangle_count() > 0);
        }
        assert!(builtin_mesh(MeshKind::Camel).is_none());
    }

    #[test]
    fn test_moon_matrices() {
        let (calls, _) = frame();
        let front = Mat4::from_translation(Vec3::new(2.0, 8.0, 50.0))
            * Mat4::from_scale(Vec3::new(3.0, 2.13, 3.0))
            * Mat4::from_axis_angle(Vec3::X, 30f32.to_radians());
        let back = front
            * Mat4::from_axis_angle(
                Vec3::new(1.0, 0.0, 1.0).normalize(),
                std::f32::consts::PI,
            );

        assert!(calls[6].model.abs_diff_eq(front, 1e-4));
        assert!(calls[7].model.abs_diff_eq(back, 1e-4));
    }
}
