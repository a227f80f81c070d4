use serde::Deserialize;
use statemap_shared::{LoadError, Projector, WidgetConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(module = "/js/geo.js")]
extern "C" {
    #[wasm_bindgen(js_name = loadStateShapes, catch)]
    fn load_state_shapes(
        url: &str,
        width: f64,
        height: f64,
        scale: f64,
    ) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_name = projectPoint)]
    fn project_point(lng: f64, lat: f64) -> JsValue;
}

/// One projected state outline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct StateShape {
    pub id: String,
    /// SVG path data in viewport coordinates.
    pub d: String,
    pub centroid: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct StateGeometry {
    pub shapes: Vec<StateShape>,
    /// Interior borders drawn as a single mesh path.
    pub borders: String,
}

impl StateGeometry {
    pub fn centroid(&self, fips_id: &str) -> Option<(f64, f64)> {
        self.shapes
            .iter()
            .find(|shape| shape.id == fips_id)
            .and_then(|shape| shape.centroid)
    }

    pub fn ids(&self) -> impl Iterator<Item = String> + '_ {
        self.shapes.iter().map(|shape| shape.id.clone())
    }
}

fn js_error(value: JsValue) -> LoadError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"));
    LoadError::Geometry(message)
}

/// Fetch the atlas, project it for the configured viewport and return the outlines.
/// Also fixes the projection that [`D3Projector`] uses afterwards.
pub(crate) async fn load_geometry(config: &WidgetConfig) -> Result<StateGeometry, LoadError> {
    let promise = load_state_shapes(
        &config.atlas_url,
        config.width,
        config.height,
        config.projection_scale,
    )
    .map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| LoadError::Geometry(e.to_string()))
}

/// Projects through the Albers USA projection set up by [`load_geometry`].
/// Points outside the projection's coverage yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct D3Projector;

impl Projector for D3Projector {
    fn project(&self, lng: f64, lat: f64) -> Option<(f64, f64)> {
        let value = project_point(lng, lat);
        if value.is_null() || value.is_undefined() {
            return None;
        }
        serde_wasm_bindgen::from_value(value).ok()
    }
}
