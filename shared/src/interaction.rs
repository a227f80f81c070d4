use crate::colors::ColorPolicy;
use crate::config::TooltipOffsets;
use crate::engine::MapEngine;
use crate::events::WidgetMessage;

/// Which interactive element received the pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    State,
    Callout,
}

/// Pointer input in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Enter { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Leave,
    Click,
}

/// What the view layer must do in response to an input.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Repaint one state's polygon and callout.
    RepaintState(String),
    RepaintAll,
    ShowTooltip { text: String, x: f64, y: f64 },
    MoveTooltip { x: f64, y: f64 },
    HideTooltip,
    Notify(WidgetMessage),
    ShowPanel { name: String, count: usize },
    HidePanel,
}

/// `"1 customer"`, `"2 customers"`.
pub fn customer_label(count: usize) -> String {
    let noun = if count == 1 { "customer" } else { "customers" };
    format!("{count} {noun}")
}

/// `"Texas: 1 customer"`.
pub fn tooltip_text(name: &str, count: usize) -> String {
    format!("{name}: {}", customer_label(count))
}

/// Turns pointer input on states and callouts into engine mutations and view effects.
/// Holds no state of its own; hover and selection live in the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionController {
    offsets: TooltipOffsets,
}

impl InteractionController {
    pub fn new(offsets: TooltipOffsets) -> Self {
        Self { offsets }
    }

    pub fn handle<P: ColorPolicy>(
        &self,
        engine: &mut MapEngine<P>,
        kind: ElementKind,
        fips_id: &str,
        input: PointerInput,
    ) -> Vec<Effect> {
        match input {
            PointerInput::Enter { x, y } => {
                engine.hover(fips_id);
                let identity = engine.identity(fips_id);
                let count = engine.count_for_fips(fips_id);
                let (x, y) = self.tooltip_position(kind, x, y);

                let mut effects = Vec::with_capacity(2);
                if !engine.is_selected(fips_id) {
                    effects.push(Effect::RepaintState(fips_id.to_string()));
                }
                effects.push(Effect::ShowTooltip {
                    text: tooltip_text(identity.name, count),
                    x,
                    y,
                });
                effects
            }
            PointerInput::Move { x, y } => {
                let (x, y) = self.tooltip_position(kind, x, y);
                vec![Effect::MoveTooltip { x, y }]
            }
            PointerInput::Leave => {
                engine.unhover(fips_id);
                let mut effects = Vec::with_capacity(2);
                if !engine.is_selected(fips_id) {
                    effects.push(Effect::RepaintState(fips_id.to_string()));
                }
                effects.push(Effect::HideTooltip);
                effects
            }
            PointerInput::Click => {
                engine.select(Some(fips_id));
                let name = engine.identity(fips_id).name.to_string();
                let count = engine.count_for_fips(fips_id);
                tracing::info!(state = %name, fips_id, count, "state selected");
                vec![
                    Effect::RepaintAll,
                    Effect::Notify(WidgetMessage::StateSelected {
                        state: name.clone(),
                        state_id: fips_id.to_string(),
                        customer_count: count,
                    }),
                    Effect::ShowPanel { name, count },
                ]
            }
        }
    }

    /// Closing the panel drops the selection.
    pub fn close_panel<P: ColorPolicy>(&self, engine: &mut MapEngine<P>) -> Vec<Effect> {
        engine.clear_selection();
        vec![Effect::RepaintAll, Effect::HidePanel]
    }

    /// Re-open the panel for the current selection with fresh counts, after the
    /// record set was replaced. Nothing to do without a selection.
    pub fn refresh_panel<P: ColorPolicy>(&self, engine: &MapEngine<P>) -> Vec<Effect> {
        let Some(fips_id) = engine.selection() else {
            return Vec::new();
        };
        vec![Effect::ShowPanel {
            name: engine.identity(fips_id).name.to_string(),
            count: engine.count_for_fips(fips_id),
        }]
    }

    fn tooltip_position(&self, kind: ElementKind, x: f64, y: f64) -> (f64, f64) {
        let (dx, dy) = match kind {
            ElementKind::State => self.offsets.state,
            ElementKind::Callout => self.offsets.callout,
        };
        (x + dx, y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Palette;
    use crate::engine::tests::{Recorder, ready_engine, record};

    fn controller() -> InteractionController {
        InteractionController::new(TooltipOffsets::default())
    }

    #[test]
    fn tooltip_text_pluralizes() {
        assert_eq!(tooltip_text("Texas", 1), "Texas: 1 customer");
        assert_eq!(tooltip_text("California", 2), "California: 2 customers");
        assert_eq!(tooltip_text("Wyoming", 0), "Wyoming: 0 customers");
        assert_eq!(customer_label(1), "1 customer");
    }

    #[test]
    fn enter_hovers_and_shows_tooltip_near_pointer() {
        let mut engine = ready_engine();
        let effects = controller().handle(
            &mut engine,
            ElementKind::State,
            "06",
            PointerInput::Enter { x: 100.0, y: 50.0 },
        );
        assert_eq!(
            effects,
            vec![
                Effect::RepaintState("06".to_string()),
                Effect::ShowTooltip {
                    text: "California: 2 customers".to_string(),
                    x: 110.0,
                    y: 40.0,
                },
            ]
        );
        assert_eq!(engine.state_color("06"), Palette::default().hover);
    }

    #[test]
    fn callout_tooltip_uses_its_own_offset() {
        let mut engine = ready_engine();
        let effects = controller().handle(
            &mut engine,
            ElementKind::Callout,
            "25",
            PointerInput::Move { x: 100.0, y: 50.0 },
        );
        assert_eq!(effects, vec![Effect::MoveTooltip { x: 118.0, y: 14.0 }]);
    }

    #[test]
    fn hovering_selected_state_does_not_repaint() {
        let mut engine = ready_engine();
        let c = controller();
        c.handle(&mut engine, ElementKind::State, "48", PointerInput::Click);
        let enter = c.handle(
            &mut engine,
            ElementKind::State,
            "48",
            PointerInput::Enter { x: 0.0, y: 0.0 },
        );
        assert!(!enter.iter().any(|e| matches!(e, Effect::RepaintState(_))));
        assert_eq!(engine.state_color("48"), Palette::default().selected);

        let leave = c.handle(&mut engine, ElementKind::State, "48", PointerInput::Leave);
        assert_eq!(leave, vec![Effect::HideTooltip]);
        assert_eq!(engine.state_color("48"), Palette::default().selected);
    }

    #[test]
    fn leave_restores_resting_color() {
        let mut engine = ready_engine();
        let c = controller();
        c.handle(
            &mut engine,
            ElementKind::State,
            "56",
            PointerInput::Enter { x: 0.0, y: 0.0 },
        );
        assert_eq!(engine.state_color("56"), Palette::default().hover_empty);
        let effects = c.handle(&mut engine, ElementKind::State, "56", PointerInput::Leave);
        assert_eq!(
            effects,
            vec![Effect::RepaintState("56".to_string()), Effect::HideTooltip]
        );
        assert_eq!(engine.state_color("56"), Palette::default().empty);
    }

    #[test]
    fn clicking_massachusetts_callout_selects_notifies_and_opens_panel() {
        let mut engine = ready_engine();
        let effects = controller().handle(
            &mut engine,
            ElementKind::Callout,
            "25",
            PointerInput::Click,
        );
        assert_eq!(engine.selection(), Some("25"));
        assert_eq!(
            effects,
            vec![
                Effect::RepaintAll,
                Effect::Notify(WidgetMessage::StateSelected {
                    state: "Massachusetts".to_string(),
                    state_id: "25".to_string(),
                    customer_count: 1,
                }),
                Effect::ShowPanel {
                    name: "Massachusetts".to_string(),
                    count: 1,
                },
            ]
        );

        let mut targets = Recorder::default();
        engine.repaint_all(&mut targets);
        assert_eq!(targets.states["25"], Palette::default().selected);
        assert_eq!(targets.callouts["25"], Palette::default().selected);
    }

    #[test]
    fn clicking_elsewhere_reverts_previous_selection() {
        let mut engine = ready_engine();
        let c = controller();
        c.handle(&mut engine, ElementKind::Callout, "25", PointerInput::Click);
        c.handle(&mut engine, ElementKind::State, "06", PointerInput::Click);

        let mut targets = Recorder::default();
        engine.repaint_all(&mut targets);
        let palette = Palette::default();
        assert_eq!(targets.states["25"], palette.primary);
        assert_eq!(targets.callouts["25"], palette.primary);
        assert_eq!(targets.states["06"], palette.selected);
    }

    #[test]
    fn zero_customer_state_still_opens_panel() {
        let mut engine = ready_engine();
        let effects = controller().handle(&mut engine, ElementKind::State, "56", PointerInput::Click);
        assert!(effects.contains(&Effect::ShowPanel {
            name: "Wyoming".to_string(),
            count: 0,
        }));
        assert_eq!(engine.state_color("56"), Palette::default().selected_empty);
    }

    #[test]
    fn repeated_click_is_idempotent() {
        let mut engine = ready_engine();
        let c = controller();
        let first = c.handle(&mut engine, ElementKind::State, "06", PointerInput::Click);
        let mut after_first = Recorder::default();
        engine.repaint_all(&mut after_first);

        let second = c.handle(&mut engine, ElementKind::State, "06", PointerInput::Click);
        let mut after_second = Recorder::default();
        engine.repaint_all(&mut after_second);

        assert_eq!(first, second);
        assert_eq!(after_first.states, after_second.states);
        assert_eq!(after_first.callouts, after_second.callouts);
    }

    #[test]
    fn reload_refreshes_open_panel() {
        let mut engine = ready_engine();
        let c = controller();
        c.handle(&mut engine, ElementKind::State, "06", PointerInput::Click);
        engine.load_records(vec![record(Some("CA")), record(Some("CA")), record(Some("CA"))]);
        assert_eq!(
            c.refresh_panel(&engine),
            vec![Effect::ShowPanel {
                name: "California".to_string(),
                count: 3,
            }]
        );
    }

    #[test]
    fn reload_without_selection_leaves_panel_alone() {
        let mut engine = ready_engine();
        engine.load_records(vec![record(Some("TX"))]);
        assert!(controller().refresh_panel(&engine).is_empty());
    }

    #[test]
    fn closing_panel_clears_selection() {
        let mut engine = ready_engine();
        let c = controller();
        c.handle(&mut engine, ElementKind::State, "06", PointerInput::Click);
        let effects = c.close_panel(&mut engine);
        assert_eq!(effects, vec![Effect::RepaintAll, Effect::HidePanel]);
        assert_eq!(engine.selection(), None);
        assert_eq!(engine.state_color("06"), Palette::default().primary);
    }
}
