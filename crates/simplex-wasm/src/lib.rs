use wasm_bindgen::prelude::*;
use simplex_core::{FieldParams, ScaledField};

/// 2D simplex noise, nominally in [-1, 1].
#[wasm_bindgen]
pub fn noise2d(x: f64, y: f64) -> f64 {
    simplex_core::noise2d(x, y)
}

/// 3D simplex noise, nominally in [-1, 1].
#[wasm_bindgen]
pub fn noise3d(x: f64, y: f64, z: f64) -> f64 {
    simplex_core::noise3d(x, y, z)
}

/// 4D stub: always 0.
#[wasm_bindgen]
pub fn noise4d(x: f64, y: f64, z: f64, w: f64) -> f64 {
    simplex_core::noise4d(x, y, z, w)
}

/// Scaled field for shake/jitter consumers, configured from `FieldParams` JSON,
/// e.g. `{"frequency": 4.0, "amplitude": 0.2, "offset": [0, 100, 0, 0]}`.
#[wasm_bindgen]
pub struct ShakeField {
    inner: ScaledField,
}

#[wasm_bindgen]
impl ShakeField {
    #[wasm_bindgen(constructor)]
    pub fn new(params_json: &str) -> Result<ShakeField, JsValue> {
        let params = FieldParams::from_json(params_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid params: {e}")))?;
        Self::from_params(params).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = sample2d)]
    pub fn sample2d(&self, x: f64, y: f64) -> f64 {
        self.inner.sample2d(x, y)
    }

    #[wasm_bindgen(js_name = sample3d)]
    pub fn sample3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.inner.sample3d(x, y, z)
    }
}

impl ShakeField {
    fn from_params(params: FieldParams) -> Result<Self, simplex_core::NoiseError> {
        Ok(Self { inner: ScaledField::new(params)? })
    }
}
