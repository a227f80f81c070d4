use std::collections::HashSet;

use crate::customer::CustomerRecord;

/// Screen projection of geographic coordinates. `None` means the point falls
/// outside the projection (e.g. territories Albers USA does not cover).
pub trait Projector {
    fn project(&self, lng: f64, lat: f64) -> Option<(f64, f64)>;
}

impl<F> Projector for F
where
    F: Fn(f64, f64) -> Option<(f64, f64)>,
{
    fn project(&self, lng: f64, lat: f64) -> Option<(f64, f64)> {
        self(lng, lat)
    }
}

/// A customer marker in screen space, keyed for keyed list rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PinMarker {
    pub key: String,
    pub x: f64,
    pub y: f64,
}

/// Stable key for a record: its id, or its position in the load when it has none.
pub fn pin_key(record: &CustomerRecord, index: usize) -> String {
    match &record.id {
        Some(id) => format!("id:{id}"),
        None => format!("row:{index}"),
    }
}

/// Project every record with valid coordinates. Invalid or unprojectable
/// records are skipped one by one; duplicate keys keep the first record.
pub fn derive_pins(records: &[CustomerRecord], projector: &impl Projector) -> Vec<PinMarker> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut pins = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for (index, record) in records.iter().enumerate() {
        let Some((lng, lat)) = record.coordinates() else {
            skipped += 1;
            continue;
        };
        let Some((x, y)) = projector
            .project(lng, lat)
            .filter(|(x, y)| x.is_finite() && y.is_finite())
        else {
            skipped += 1;
            continue;
        };
        let key = pin_key(record, index);
        if !seen.insert(key.clone()) {
            continue;
        }
        pins.push(PinMarker { key, x, y });
    }

    tracing::info!(pins = pins.len(), skipped, "derived customer pins");
    pins
}
