// Test the POV mockup layout solver's containment and proportion rules

use tv_planner_wasm::models::ViewingParameters;
use tv_planner_wasm::renderers::layout_engine::{compute_pov_layout, Viewport};

const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 720.0 };

#[test]
fn test_tv_stays_inside_wall_for_all_eye_heights() {
    // Sweep eye heights across the full wall height
    for step in 1..=54 {
        let params = ViewingParameters {
            eye_height_m: step as f64 * 0.05,
            ..Default::default()
        };
        let layout = compute_pov_layout(&params, &VIEWPORT).unwrap();

        assert!(
            layout.tv.top >= layout.wall.top - 0.1,
            "TV above wall at eye height {} m",
            params.eye_height_m
        );
        assert!(
            layout.tv.bottom() <= layout.wall.bottom() + 0.2,
            "TV below wall at eye height {} m",
            params.eye_height_m
        );
    }
}

#[test]
fn test_tv_stays_inside_wall_for_all_mount_heights() {
    for step in 1..=26 {
        let params = ViewingParameters {
            tv_mount_height_m: step as f64 * 0.1,
            ..Default::default()
        };
        let layout = compute_pov_layout(&params, &VIEWPORT).unwrap();

        assert!(layout.tv.top >= layout.wall.top - 0.1);
        assert!(layout.tv.bottom() <= layout.wall.bottom() + 0.2);
    }
}

#[test]
fn test_wall_never_exceeds_ninety_percent_of_viewport_width() {
    // Nose against a hall-width wall
    let params = ViewingParameters {
        distance_m: 0.2,
        wall_width_m: 12.0,
        wall_height_m: 2.4,
        ..Default::default()
    };
    let layout = compute_pov_layout(&params, &VIEWPORT).unwrap();
    assert!(layout.wall.width <= VIEWPORT.width * 0.9 + 0.1);
}

#[test]
fn test_wall_height_clamp_re_derives_width() {
    // A tall narrow wall triggers the 80% height clamp; the width must
    // shrink with it so the aspect ratio survives
    let params = ViewingParameters {
        wall_width_m: 2.0,
        wall_height_m: 4.0,
        ..Default::default()
    };
    let layout = compute_pov_layout(&params, &VIEWPORT).unwrap();

    assert!(layout.wall.height <= VIEWPORT.height * 0.8 + 0.1);
    let aspect = layout.wall.width as f64 / layout.wall.height as f64;
    assert!((aspect - 0.5).abs() < 0.01);
}

#[test]
fn test_tv_keeps_its_own_aspect_ratio() {
    // The TV is 16:9 regardless of the wall's 4:3-ish shape
    let layout = compute_pov_layout(&ViewingParameters::default(), &VIEWPORT).unwrap();

    let aspect = layout.tv.width as f64 / layout.tv.height as f64;
    assert!((aspect - 166.0 / 93.4).abs() < 0.01);
}

#[test]
fn test_tv_width_is_physical_share_of_wall() {
    let layout = compute_pov_layout(&ViewingParameters::default(), &VIEWPORT).unwrap();

    let share = layout.tv.width as f64 / layout.wall.width as f64;
    assert!((share - 1.66 / 3.6).abs() < 0.01);
}

#[test]
fn test_human_silhouette_proportions() {
    let params = ViewingParameters::default();
    let layout = compute_pov_layout(&params, &VIEWPORT).unwrap();

    // 1.7 m reference height against the 2.7 m wall, 0.4 aspect
    let expected_height = layout.wall.height as f64 * 1.7 / 2.7;
    assert!((layout.human.height as f64 - expected_height).abs() < 0.2);
    assert!((layout.human.width as f64 / layout.human.height as f64 - 0.4).abs() < 0.01);
    assert!((layout.human.bottom() - layout.wall.bottom()).abs() < 0.2);
}

#[test]
fn test_wall_raised_above_true_center() {
    let layout = compute_pov_layout(&ViewingParameters::default(), &VIEWPORT).unwrap();

    let wall_center = layout.wall.top + layout.wall.height / 2.0;
    let bias = VIEWPORT.height * 0.05;
    assert!((wall_center + bias - VIEWPORT.height / 2.0).abs() < 0.2);
}

#[test]
fn test_layout_is_deterministic() {
    let params = ViewingParameters::default();
    let first = compute_pov_layout(&params, &VIEWPORT).unwrap();
    let second = compute_pov_layout(&params, &VIEWPORT).unwrap();
    assert_eq!(first, second);
}
