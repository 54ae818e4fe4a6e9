// Test the whole-frame recompute and the serialized shape the JS layer sees

use serde_json::json;
use tv_planner_wasm::api::core::build_frame;
use tv_planner_wasm::models::ViewingParameters;
use tv_planner_wasm::recommend::RecommendationBand;
use tv_planner_wasm::renderers::layout_engine::Viewport;

const VIEWPORT: Viewport = Viewport { width: 960.0, height: 540.0 };

#[test]
fn test_frame_assembles_every_surface() {
    let frame = build_frame(&ViewingParameters::default(), &VIEWPORT).unwrap();

    assert!(frame.geometry.horizontal_angle_deg > 0.0);
    assert_eq!(frame.bands.horizontal_angle, RecommendationBand::Good);
    // Ideal width at 3.1 m is ~177.8 cm; 85" (188.2 cm) is nearest
    assert_eq!(frame.recommendation.best_size_in, 85);
    assert!(frame.advisory.contains("recommended"));
    assert_eq!(frame.info_panel.size, "75 in");
    assert!(frame.pov.tv.width > 0.0);
    assert_eq!(frame.top_view.distance_ticks.len(), 5);
    assert!(frame.side_view.height_annotation.is_none());
}

#[test]
fn test_frame_recompute_is_idempotent() {
    let params = ViewingParameters {
        selected_size: 85,
        distance_m: 2.4,
        ..Default::default()
    };
    let first = build_frame(&params, &VIEWPORT).unwrap();
    let second = build_frame(&params, &VIEWPORT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_frame_fails_whole_on_invalid_input() {
    let params = ViewingParameters { wall_width_m: 0.0, ..Default::default() };
    assert!(build_frame(&params, &VIEWPORT).is_err());
}

#[test]
fn test_bands_serialize_as_css_classes() {
    let frame = build_frame(&ViewingParameters::default(), &VIEWPORT).unwrap();
    let value = serde_json::to_value(&frame.bands).unwrap();

    assert_eq!(
        value,
        json!({
            "horizontal_angle": "good",
            "height_offset": "good",
            "wall_occupancy": "good",
        })
    );
}

#[test]
fn test_parameters_round_trip_through_serde() {
    let params = ViewingParameters {
        selected_size: 98,
        distance_m: 4.2,
        tv_mount_height_m: 1.25,
        eye_height_m: 1.05,
        wall_width_m: 4.0,
        wall_height_m: 2.5,
    };
    let value = serde_json::to_value(params).unwrap();
    assert_eq!(value["selected_size"], 98);
    assert_eq!(value["distance_m"], 4.2);

    let back: ViewingParameters = serde_json::from_value(value).unwrap();
    assert_eq!(back, params);
}

#[test]
fn test_layout_rect_serializes_flat_pixel_fields() {
    let frame = build_frame(&ViewingParameters::default(), &VIEWPORT).unwrap();
    let value = serde_json::to_value(&frame.pov.wall).unwrap();

    for field in ["left", "top", "width", "height"] {
        assert!(value.get(field).is_some(), "missing {}", field);
    }
}
