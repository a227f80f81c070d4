use crate::aggregate::{StateCounts, aggregate};
use crate::callouts::has_callout;
use crate::colors::{Color, ColorPolicy, HoverState, Palette};
use crate::customer::CustomerRecord;
use crate::pins::{PinMarker, Projector, derive_pins};
use crate::selection::Selection;
use crate::states::{StateDirectory, StateIdentity};

/// The three independently drawn map layers. Implementations only store what
/// they are given; every fill comes from [`MapEngine::state_color`].
pub trait RenderTargets {
    fn paint_state(&mut self, fips_id: &str, fill: Color);
    fn paint_callout(&mut self, fips_id: &str, fill: Color);
    fn sync_pins(&mut self, pins: &[PinMarker]);
}

/// Join of the two startup loads. Colors are painted only once both are in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Readiness {
    map_drawn: bool,
    data_loaded: bool,
}

impl Readiness {
    fn is_ready(self) -> bool {
        self.map_drawn && self.data_loaded
    }
}

/// Owns the customer data, the selection and hover state, and the color policy.
#[derive(Debug, Clone)]
pub struct MapEngine<P = Palette> {
    directory: StateDirectory,
    policy: P,
    records: Vec<CustomerRecord>,
    counts: StateCounts,
    selection: Selection,
    hovered: Option<String>,
    drawn: Vec<String>,
    readiness: Readiness,
}

impl<P: ColorPolicy> MapEngine<P> {
    pub fn new(directory: StateDirectory, policy: P) -> Self {
        Self {
            directory,
            policy,
            records: Vec::new(),
            counts: StateCounts::default(),
            selection: Selection::new(),
            hovered: None,
            drawn: Vec::new(),
            readiness: Readiness::default(),
        }
    }

    pub fn directory(&self) -> &StateDirectory {
        &self.directory
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn counts(&self) -> &StateCounts {
        &self.counts
    }

    pub fn identity(&self, fips_id: &str) -> StateIdentity {
        self.directory.resolve_by_fips(fips_id)
    }

    /// Customer count for a FIPS id; unknown ids count as zero.
    pub fn count_for_fips(&self, fips_id: &str) -> usize {
        self.identity(fips_id)
            .abbrev
            .map_or(0, |abbrev| self.counts.count(abbrev))
    }

    /// Replace the record set and recompute counts. Returns `true` if this
    /// load completed the startup join.
    pub fn load_records(&mut self, records: Vec<CustomerRecord>) -> bool {
        let was_ready = self.readiness.is_ready();
        self.counts = aggregate(&records);
        self.records = records;
        self.readiness.data_loaded = true;
        tracing::info!(
            records = self.records.len(),
            states = self.counts.len(),
            counted = self.counts.total(),
            "customer data loaded"
        );
        !was_ready && self.readiness.is_ready()
    }

    /// Record the state ids the geometry layer drew. Returns `true` if this
    /// completed the startup join.
    pub fn mark_map_drawn(&mut self, fips_ids: impl IntoIterator<Item = String>) -> bool {
        let was_ready = self.readiness.is_ready();
        self.drawn = fips_ids.into_iter().collect();
        self.readiness.map_drawn = true;
        tracing::info!(states = self.drawn.len(), "map geometry drawn");
        !was_ready && self.readiness.is_ready()
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    /// Fill for a state given an explicit count and pointer state.
    /// Ids outside the directory are painted as if they had no customers.
    pub fn color_for(&self, fips_id: &str, count: usize, hover: HoverState) -> Color {
        let count = if self.directory.contains_fips(fips_id) {
            count
        } else {
            0
        };
        self.policy.fill(count, hover)
    }

    pub fn hover_state(&self, fips_id: &str) -> HoverState {
        HoverState {
            selected: self.selection.is_selected(fips_id),
            hovered: self.hovered.as_deref() == Some(fips_id),
        }
    }

    /// Current fill of a state. Every layer paints through this.
    pub fn state_color(&self, fips_id: &str) -> Color {
        self.color_for(
            fips_id,
            self.count_for_fips(fips_id),
            self.hover_state(fips_id),
        )
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.get()
    }

    pub fn is_selected(&self, fips_id: &str) -> bool {
        self.selection.is_selected(fips_id)
    }

    /// Set the single selection. Returns `true` if it changed; callers
    /// repaint everything either way.
    pub fn select(&mut self, fips_id: Option<&str>) -> bool {
        let changed = self.selection.set(fips_id);
        if changed {
            tracing::debug!(selected = ?fips_id, "selection changed");
        }
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        self.select(None)
    }

    pub fn hover(&mut self, fips_id: &str) {
        self.hovered = Some(fips_id.to_string());
    }

    /// Clear hover if it is still on this state.
    pub fn unhover(&mut self, fips_id: &str) {
        if self.hovered.as_deref() == Some(fips_id) {
            self.hovered = None;
        }
    }

    /// Repaint one state's polygon and, if it has one, its callout label.
    /// Returns `false` while the startup join is incomplete.
    pub fn repaint_state(&self, fips_id: &str, targets: &mut impl RenderTargets) -> bool {
        if !self.is_ready() {
            return false;
        }
        let fill = self.state_color(fips_id);
        targets.paint_state(fips_id, fill);
        if has_callout(fips_id) {
            targets.paint_callout(fips_id, fill);
        }
        true
    }

    /// Repaint every drawn state and callout.
    pub fn repaint_all(&self, targets: &mut impl RenderTargets) -> bool {
        if !self.is_ready() {
            return false;
        }
        for fips_id in &self.drawn {
            self.repaint_state(fips_id, targets);
        }
        true
    }

    /// Full render: all fills plus the customer pins.
    pub fn render(&self, targets: &mut impl RenderTargets, projector: &impl Projector) -> bool {
        if !self.repaint_all(targets) {
            return false;
        }
        targets.sync_pins(&derive_pins(&self.records, projector));
        true
    }
}
