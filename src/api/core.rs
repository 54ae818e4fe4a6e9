//! WASM API for the planner core
//!
//! JavaScript-facing compute functions. Each call deserializes the current
//! parameters, recomputes from scratch, and serializes the result back;
//! the core keeps no state between calls, so every function is idempotent
//! and safe to call on every input event or viewport resize.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{core_error, deserialize, serialize};
use crate::api::types::PlannerFrame;
use crate::errors::PlannerError;
use crate::geometry::compute_geometry;
use crate::models::catalog::TV_SIZE_CATALOG;
use crate::models::ViewingParameters;
use crate::recommend::{classify_metrics, compose_advisory, recommend_size, AdvisoryContext};
use crate::renderers::diagrams::{compute_side_view_layout, compute_top_view_layout};
use crate::renderers::info_panel::build_info_panel;
use crate::renderers::layout_engine::{compute_pov_layout, Viewport};

/// Assemble a complete frame for one parameter set and viewport
///
/// This is the Rust-level entry point behind [`compute_frame`]; it is also
/// what integration tests drive.
pub fn build_frame(
    params: &ViewingParameters,
    viewport: &Viewport,
) -> Result<PlannerFrame, PlannerError> {
    let geometry = compute_geometry(params)?;
    let bands = classify_metrics(&geometry);
    let recommendation = recommend_size(params.distance_m)?;
    let advisory = compose_advisory(&AdvisoryContext {
        params,
        geometry: &geometry,
        recommendation: &recommendation,
    });
    let info_panel = build_info_panel(params, &geometry)?;
    let pov = compute_pov_layout(params, viewport)?;
    let top_view = compute_top_view_layout(params, viewport)?;
    let side_view = compute_side_view_layout(params, viewport)?;

    Ok(PlannerFrame {
        geometry,
        bands,
        recommendation,
        advisory,
        info_panel,
        pov,
        top_view,
        side_view,
    })
}

/// Compute viewing angles, height offset, and wall occupancy
#[wasm_bindgen(js_name = computeGeometry)]
pub fn compute_geometry_js(params: JsValue) -> Result<JsValue, JsValue> {
    let params: ViewingParameters = deserialize(params, "Invalid viewing parameters")?;
    let geometry = compute_geometry(&params).map_err(core_error)?;
    serialize(&geometry, "Failed to serialize geometry result")
}

/// Classify the badged metrics into good/warning/bad bands
#[wasm_bindgen(js_name = classifyMetrics)]
pub fn classify_metrics_js(params: JsValue) -> Result<JsValue, JsValue> {
    let params: ViewingParameters = deserialize(params, "Invalid viewing parameters")?;
    let geometry = compute_geometry(&params).map_err(core_error)?;
    serialize(&classify_metrics(&geometry), "Failed to serialize metric bands")
}

/// Recommend a size range for a viewing distance in metres
#[wasm_bindgen(js_name = recommendSize)]
pub fn recommend_size_js(distance_m: f64) -> Result<JsValue, JsValue> {
    let recommendation = recommend_size(distance_m).map_err(core_error)?;
    serialize(&recommendation, "Failed to serialize size recommendation")
}

/// Compose the advisory text for the current parameters
#[wasm_bindgen(js_name = buildAdvisory)]
pub fn build_advisory_js(params: JsValue) -> Result<String, JsValue> {
    let params: ViewingParameters = deserialize(params, "Invalid viewing parameters")?;
    let geometry = compute_geometry(&params).map_err(core_error)?;
    let recommendation = recommend_size(params.distance_m).map_err(core_error)?;
    Ok(compose_advisory(&AdvisoryContext {
        params: &params,
        geometry: &geometry,
        recommendation: &recommendation,
    }))
}

/// Build the formatted info panel readings
#[wasm_bindgen(js_name = computeInfoPanel)]
pub fn compute_info_panel_js(params: JsValue) -> Result<JsValue, JsValue> {
    let params: ViewingParameters = deserialize(params, "Invalid viewing parameters")?;
    let geometry = compute_geometry(&params).map_err(core_error)?;
    let panel = build_info_panel(&params, &geometry).map_err(core_error)?;
    serialize(&panel, "Failed to serialize info panel")
}

/// Compute the POV mockup rectangles for a viewport
#[wasm_bindgen(js_name = computePovLayout)]
pub fn compute_pov_layout_js(params: JsValue, viewport: JsValue) -> Result<JsValue, JsValue> {
    let params: ViewingParameters = deserialize(params, "Invalid viewing parameters")?;
    let viewport: Viewport = deserialize(viewport, "Invalid viewport")?;
    let layout = compute_pov_layout(&params, &viewport).map_err(core_error)?;
    serialize(&layout, "Failed to serialize POV layout")
}

/// Compute the top-down diagram scene for a viewport
#[wasm_bindgen(js_name = computeTopViewLayout)]
pub fn compute_top_view_layout_js(params: JsValue, viewport: JsValue) -> Result<JsValue, JsValue> {
    let params: ViewingParameters = deserialize(params, "Invalid viewing parameters")?;
    let viewport: Viewport = deserialize(viewport, "Invalid viewport")?;
    let layout = compute_top_view_layout(&params, &viewport).map_err(core_error)?;
    serialize(&layout, "Failed to serialize top view layout")
}

/// Compute the side-elevation diagram scene for a viewport
#[wasm_bindgen(js_name = computeSideViewLayout)]
pub fn compute_side_view_layout_js(params: JsValue, viewport: JsValue) -> Result<JsValue, JsValue> {
    let params: ViewingParameters = deserialize(params, "Invalid viewing parameters")?;
    let viewport: Viewport = deserialize(viewport, "Invalid viewport")?;
    let layout = compute_side_view_layout(&params, &viewport).map_err(core_error)?;
    serialize(&layout, "Failed to serialize side view layout")
}

/// Recompute everything for one input event
#[wasm_bindgen(js_name = computeFrame)]
pub fn compute_frame(params: JsValue, viewport: JsValue) -> Result<JsValue, JsValue> {
    let params: ViewingParameters = deserialize(params, "Invalid viewing parameters")?;
    let viewport: Viewport = deserialize(viewport, "Invalid viewport")?;

    crate::wasm_log!(
        "computeFrame: {}\" at {}m, viewport {}x{}",
        params.selected_size,
        params.distance_m,
        viewport.width,
        viewport.height
    );

    let frame = build_frame(&params, &viewport).map_err(core_error)?;
    serialize(&frame, "Failed to serialize planner frame")
}

/// The size catalog, for building the size selector UI
#[wasm_bindgen(js_name = catalogEntries)]
pub fn catalog_entries() -> Result<js_sys::Array, JsValue> {
    let entries = js_sys::Array::new();
    for tv in TV_SIZE_CATALOG {
        entries.push(&serialize(tv, "Failed to serialize catalog entry")?);
    }
    Ok(entries)
}

/// The startup parameter defaults
#[wasm_bindgen(js_name = defaultParameters)]
pub fn default_parameters() -> Result<JsValue, JsValue> {
    serialize(&ViewingParameters::default(), "Failed to serialize default parameters")
}
