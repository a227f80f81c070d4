use leptos::prelude::*;
use statemap_shared::callouts::{CalloutLayout, layout_callouts};
use statemap_shared::config::PinStyle;
use statemap_shared::stories::PanelState;
use statemap_shared::{
    Effect, ElementKind, InteractionController, MapEngine, PointerInput, StateDirectory,
    WidgetConfig,
};

use crate::bridge;
use crate::data;
use crate::geo::{self, D3Projector, StateGeometry};
use crate::map_view::MapView;
use crate::panel::InfoPanel;
use crate::targets::{MapLayers, SignalTargets};

/// Tooltip text and its viewport position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TooltipView {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Everything the map, tooltip and panel share. Every field is `Copy`, so the
/// context moves freely into event handlers.
#[derive(Clone, Copy)]
pub(crate) struct WidgetContext {
    pub engine: StoredValue<MapEngine>,
    pub controller: InteractionController,
    pub layers: MapLayers,
    pub geometry: RwSignal<Option<StateGeometry>>,
    pub callouts: RwSignal<Vec<CalloutLayout>>,
    pub tooltip: RwSignal<Option<TooltipView>>,
    pub panel: RwSignal<PanelState>,
    pub view_box: StoredValue<String>,
    pub pin_style: PinStyle,
}

impl WidgetContext {
    /// Route pointer input through the controller and apply what it asks for.
    pub fn pointer(&self, kind: ElementKind, fips_id: &str, input: PointerInput) {
        let controller = self.controller;
        let effects = self
            .engine
            .try_update_value(|engine| controller.handle(engine, kind, fips_id, input))
            .unwrap_or_default();
        self.apply(effects);
    }

    pub fn close_panel(&self) {
        let controller = self.controller;
        let effects = self
            .engine
            .try_update_value(|engine| controller.close_panel(engine))
            .unwrap_or_default();
        self.apply(effects);
    }

    pub fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RepaintState(fips_id) => self.paint(|engine, targets| {
                    engine.repaint_state(&fips_id, targets);
                }),
                Effect::RepaintAll => self.paint(|engine, targets| {
                    engine.repaint_all(targets);
                }),
                Effect::ShowTooltip { text, x, y } => {
                    self.tooltip.set(Some(TooltipView { text, x, y }));
                }
                Effect::MoveTooltip { x, y } => self.tooltip.update(|tooltip| {
                    if let Some(tooltip) = tooltip {
                        tooltip.x = x;
                        tooltip.y = y;
                    }
                }),
                Effect::HideTooltip => self.tooltip.set(None),
                Effect::Notify(message) => bridge::post_to_parent(&message),
                Effect::ShowPanel { name, count } => {
                    self.panel.set(PanelState::Open { name, count });
                }
                Effect::HidePanel => self.panel.set(PanelState::Hidden),
            }
        }
    }

    /// Full render including pins, once both startup loads are in.
    fn render_if_ready(&self) {
        self.paint(|engine, targets| {
            if engine.render(targets, &D3Projector) {
                tracing::debug!("map rendered");
            }
        });
    }

    fn paint(&self, f: impl FnOnce(&MapEngine, &mut SignalTargets)) {
        let mut targets = SignalTargets::new(self.layers);
        self.engine.with_value(|engine| f(engine, &mut targets));
        targets.flush();
    }
}

#[component]
pub fn App(config: WidgetConfig, directory: StateDirectory) -> impl IntoView {
    let ctx = WidgetContext {
        engine: StoredValue::new(MapEngine::new(directory, config.palette)),
        controller: InteractionController::new(config.tooltip),
        layers: MapLayers::new(config.palette.empty),
        geometry: RwSignal::new(None),
        callouts: RwSignal::new(Vec::new()),
        tooltip: RwSignal::new(None),
        panel: RwSignal::new(PanelState::Hidden),
        view_box: StoredValue::new(config.view_box()),
        pin_style: config.pin,
    };
    provide_context(ctx);

    // The two startup loads run concurrently; the engine joins them.
    let geometry_config = config.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match geo::load_geometry(&geometry_config).await {
            Ok(geometry) => {
                let callouts = ctx.engine.with_value(|engine| {
                    layout_callouts(
                        |fips_id| geometry.centroid(fips_id),
                        |fips_id| engine.identity(fips_id).abbrev,
                    )
                });
                let ids: Vec<String> = geometry.ids().collect();
                ctx.callouts.set(callouts);
                ctx.geometry.set(Some(geometry));
                let joined = ctx
                    .engine
                    .try_update_value(|engine| engine.mark_map_drawn(ids))
                    .unwrap_or(false);
                if joined {
                    ctx.render_if_ready();
                }
            }
            Err(e) => tracing::error!(error = %e, url = %geometry_config.atlas_url, "failed to load state geometry"),
        }
    });

    let data_url = config.data_url.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let records = match data::fetch_customers(&data_url).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(error = %e, url = %data_url, "failed to load customer data");
                Vec::new()
            }
        };
        // A reload after the join repaints too, so pins and fills follow the new records.
        let ready = ctx
            .engine
            .try_update_value(|engine| {
                engine.load_records(records);
                engine.is_ready()
            })
            .unwrap_or(false);
        if ready {
            ctx.render_if_ready();
        }
        // An open panel was derived from the previous records.
        let controller = ctx.controller;
        let refresh = ctx.engine.with_value(|engine| controller.refresh_panel(engine));
        ctx.apply(refresh);
    });

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && ctx.panel.with_untracked(PanelState::is_open) {
            ctx.close_panel();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="statemap-root" style="position: relative; width: 100%; font-family: 'Inter', system-ui, sans-serif;">
            <MapView />
            <InfoPanel />
            <Tooltip />
        </div>
    }
}

#[component]
fn Tooltip() -> impl IntoView {
    let ctx: WidgetContext = expect_context();

    view! {
        {move || {
            let Some(tooltip) = ctx.tooltip.get() else {
                return view! { <div style="display:none;" /> }.into_any();
            };
            view! {
                <div
                    class="statemap-tooltip"
                    style:left=format!("{}px", tooltip.x)
                    style:top=format!("{}px", tooltip.y)
                    style="position: fixed; pointer-events: none; z-index: 100; background: rgba(17,24,39,0.92); color: #f9fafb; padding: 4px 8px; border-radius: 4px; font-size: 0.8rem; white-space: nowrap; box-shadow: 0 2px 8px rgba(0,0,0,0.25);"
                >
                    {tooltip.text}
                </div>
            }
            .into_any()
        }}
    }
}
