/// Small East Coast states that get an offset label with a leader line.
/// `(fips, dx, dy)`: label offset from the state's projected centroid.
pub const CALLOUT_OFFSETS: &[(&str, f64, f64)] = &[
    ("50", -22.0, -48.0), // Vermont
    ("33", 34.0, -42.0),  // New Hampshire
    ("25", 58.0, -18.0),  // Massachusetts
    ("44", 52.0, 4.0),    // Rhode Island
    ("09", 46.0, 24.0),   // Connecticut
    ("34", 44.0, 8.0),    // New Jersey
    ("10", 40.0, 16.0),   // Delaware
    ("24", 54.0, 34.0),   // Maryland
    ("11", 48.0, 52.0),   // District of Columbia
];

/// Where one callout label and its leader line go, in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct CalloutLayout {
    pub fips_id: &'static str,
    pub abbrev: &'static str,
    /// Leader line start (the state's centroid).
    pub anchor: (f64, f64),
    /// Label center.
    pub label: (f64, f64),
}

pub fn has_callout(fips_id: &str) -> bool {
    CALLOUT_OFFSETS.iter().any(|(fips, _, _)| *fips == fips_id)
}

/// Lay out callouts for the states whose centroid is known.
/// `abbrev_for` supplies the label text; states without one are skipped.
pub fn layout_callouts(
    centroid: impl Fn(&str) -> Option<(f64, f64)>,
    abbrev_for: impl Fn(&str) -> Option<&'static str>,
) -> Vec<CalloutLayout> {
    CALLOUT_OFFSETS
        .iter()
        .filter_map(|&(fips_id, dx, dy)| {
            let (cx, cy) = centroid(fips_id)?;
            let abbrev = abbrev_for(fips_id)?;
            Some(CalloutLayout {
                fips_id,
                abbrev,
                anchor: (cx, cy),
                label: (cx + dx, cy + dy),
            })
        })
        .collect()
}
