/// The one selected state (by FIPS id), if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, fips_id: &str) -> bool {
        self.selected.as_deref() == Some(fips_id)
    }

    /// Replace the selection. Returns `true` if it changed.
    pub fn set(&mut self, fips_id: Option<&str>) -> bool {
        if self.selected.as_deref() == fips_id {
            return false;
        }
        self.selected = fips_id.map(str::to_string);
        true
    }

    pub fn clear(&mut self) -> bool {
        self.set(None)
    }
}
