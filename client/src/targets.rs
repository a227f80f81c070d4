use std::collections::HashMap;

use leptos::prelude::*;
use statemap_shared::{Color, PinMarker, RenderTargets};

/// The reactive storage behind the three map layers. Views read fills from
/// here and never compute a color themselves.
#[derive(Clone, Copy)]
pub(crate) struct MapLayers {
    pub state_fills: RwSignal<HashMap<String, Color>>,
    pub callout_fills: RwSignal<HashMap<String, Color>>,
    pub pins: RwSignal<Vec<PinMarker>>,
    /// Shown until the first paint after both loads.
    unpainted: Color,
}

impl MapLayers {
    pub fn new(unpainted: Color) -> Self {
        Self {
            state_fills: RwSignal::new(HashMap::new()),
            callout_fills: RwSignal::new(HashMap::new()),
            pins: RwSignal::new(Vec::new()),
            unpainted,
        }
    }

    pub fn state_fill(&self, fips_id: &str) -> String {
        let fill = self.state_fills.with(|fills| fills.get(fips_id).copied());
        fill.unwrap_or(self.unpainted).to_css()
    }

    pub fn callout_fill(&self, fips_id: &str) -> String {
        let fill = self.callout_fills.with(|fills| fills.get(fips_id).copied());
        fill.unwrap_or(self.unpainted).to_css()
    }
}

/// Collects one paint pass and writes it to the signals in a single update per layer.
pub(crate) struct SignalTargets {
    layers: MapLayers,
    states: Vec<(String, Color)>,
    callouts: Vec<(String, Color)>,
    pins: Option<Vec<PinMarker>>,
}

impl SignalTargets {
    pub fn new(layers: MapLayers) -> Self {
        Self {
            layers,
            states: Vec::new(),
            callouts: Vec::new(),
            pins: None,
        }
    }

    pub fn flush(self) {
        if !self.states.is_empty() {
            self.layers
                .state_fills
                .update(|fills| fills.extend(self.states));
        }
        if !self.callouts.is_empty() {
            self.layers
                .callout_fills
                .update(|fills| fills.extend(self.callouts));
        }
        if let Some(pins) = self.pins {
            self.layers.pins.set(pins);
        }
    }
}

impl RenderTargets for SignalTargets {
    fn paint_state(&mut self, fips_id: &str, fill: Color) {
        self.states.push((fips_id.to_string(), fill));
    }

    fn paint_callout(&mut self, fips_id: &str, fill: Color) {
        self.callouts.push((fips_id.to_string(), fill));
    }

    fn sync_pins(&mut self, pins: &[PinMarker]) {
        self.pins = Some(pins.to_vec());
    }
}
