use clap::Parser;
use desert_scene::camera::CameraPreset;
use desert_scene::cli::Cli;
use std::path::PathBuf;

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["desert-scene"]).unwrap();
        assert_eq!(cli.model, PathBuf::from("assets/kamila.obj"));
        assert!(cli.shader.is_none());
        assert_eq!(cli.camera, CameraPreset::Overhead);
        assert_eq!(cli.window_scale, 0.8);
        assert_eq!(cli.speed, 0.001);
        assert_eq!(cli.window_size(), (2048, 1152));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "desert-scene",
            "--model",
            "camel.glb",
            "--shader",
            "flat.wgsl",
            "--camera",
            "overview",
            "--window-scale",
            "0.5",
            "--speed",
            "0.01",
        ])
        .unwrap();
        assert_eq!(cli.model, PathBuf::from("camel.glb"));
        assert_eq!(cli.shader, Some(PathBuf::from("flat.wgsl")));
        assert_eq!(cli.camera, CameraPreset::Overview);
        assert_eq!(cli.window_size(), (1280, 720));
        assert_eq!(cli.speed, 0.01);
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        assert!(Cli::try_parse_from(["desert-scene", "--window-scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["desert-scene", "--window-scale", "-1"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_camera() {
        assert!(Cli::try_parse_from(["desert-scene", "--camera", "orbit"]).is_err());
    }

    #[test]
    fn test_rejects_non_finite_speed() {
        for value in ["NaN", "inf", "-inf"] {
            assert!(
                Cli::try_parse_from(["desert-scene", "--speed", value]).is_err(),
                "accepted --speed {}",
                value
            );
        }
    }

    #[test]
    fn test_rejects_negative_speed() {
        assert!(Cli::try_parse_from(["desert-scene", "--speed=-0.5"]).is_err());
    }

    #[test]
    fn test_accepts_zero_speed() {
        let cli = Cli::try_parse_from(["desert-scene", "--speed", "0"]).unwrap();
        assert_eq!(cli.speed, 0.0);
    }
}
