//! JavaScript bindings for both solvers.
//!
//! Inputs arrive as already-parsed JS values (the web layer owns form and
//! JSON parsing) and results are returned as plain JS objects.

use crate::ga::{GaConfig, GaConfigOverrides};
use crate::knapsack::{solve_selection, Item};
use crate::routing::solve_routing;
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `items`: `[{ name, weight, value }]`; `config`: a partial `GaConfig`.
#[wasm_bindgen(js_name = solveSelection)]
pub fn solve_selection_js(items: JsValue, capacity: f64, config: JsValue) -> Result<JsValue, JsValue> {
    let items: Vec<Item> = serde_wasm_bindgen::from_value(items).map_err(to_js_error)?;
    let config = config_from_js(config, GaConfig::knapsack())?;
    let report = solve_selection(items, capacity, &config).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&report).map_err(to_js_error)
}

/// `distances`: square `number[][]`; `config`: a partial `GaConfig`.
#[wasm_bindgen(js_name = solveRouting)]
pub fn solve_routing_js(distances: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let distances: Vec<Vec<f64>> = serde_wasm_bindgen::from_value(distances).map_err(to_js_error)?;
    let config = config_from_js(config, GaConfig::routing())?;
    let report = solve_routing(distances, &config).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&report).map_err(to_js_error)
}

/// `undefined`/`null` selects `preset`; otherwise the given fields are
/// layered over `preset`.
fn config_from_js(config: JsValue, preset: GaConfig) -> Result<GaConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(preset);
    }
    let overrides: GaConfigOverrides =
        serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
    Ok(overrides.apply_to(preset))
}
