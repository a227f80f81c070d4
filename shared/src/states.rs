use std::collections::{HashMap, HashSet};

use crate::error::DirectoryError;

pub const UNKNOWN_STATE_NAME: &str = "Unknown";

/// FIPS code -> state name, as used by the us-atlas topology ids.
pub const FIPS_NAMES: &[(&str, &str)] = &[
    ("01", "Alabama"),
    ("02", "Alaska"),
    ("04", "Arizona"),
    ("05", "Arkansas"),
    ("06", "California"),
    ("08", "Colorado"),
    ("09", "Connecticut"),
    ("10", "Delaware"),
    ("11", "District of Columbia"),
    ("12", "Florida"),
    ("13", "Georgia"),
    ("15", "Hawaii"),
    ("16", "Idaho"),
    ("17", "Illinois"),
    ("18", "Indiana"),
    ("19", "Iowa"),
    ("20", "Kansas"),
    ("21", "Kentucky"),
    ("22", "Louisiana"),
    ("23", "Maine"),
    ("24", "Maryland"),
    ("25", "Massachusetts"),
    ("26", "Michigan"),
    ("27", "Minnesota"),
    ("28", "Mississippi"),
    ("29", "Missouri"),
    ("30", "Montana"),
    ("31", "Nebraska"),
    ("32", "Nevada"),
    ("33", "New Hampshire"),
    ("34", "New Jersey"),
    ("35", "New Mexico"),
    ("36", "New York"),
    ("37", "North Carolina"),
    ("38", "North Dakota"),
    ("39", "Ohio"),
    ("40", "Oklahoma"),
    ("41", "Oregon"),
    ("42", "Pennsylvania"),
    ("44", "Rhode Island"),
    ("45", "South Carolina"),
    ("46", "South Dakota"),
    ("47", "Tennessee"),
    ("48", "Texas"),
    ("49", "Utah"),
    ("50", "Vermont"),
    ("51", "Virginia"),
    ("53", "Washington"),
    ("54", "West Virginia"),
    ("55", "Wisconsin"),
    ("56", "Wyoming"),
];

/// Two-letter postal abbreviation -> state name.
pub const ABBREV_NAMES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// One state seen through all three key spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateIdentity {
    pub fips_id: Option<&'static str>,
    pub name: &'static str,
    pub abbrev: Option<&'static str>,
}

impl StateIdentity {
    pub const UNKNOWN: Self = Self {
        fips_id: None,
        name: UNKNOWN_STATE_NAME,
        abbrev: None,
    };
}

/// Immutable lookup tables between FIPS ids, names and abbreviations.
/// Both directions are built once; lookups never scan.
#[derive(Debug, Clone)]
pub struct StateDirectory {
    ordered: Vec<StateIdentity>,
    by_fips: HashMap<&'static str, usize>,
    by_abbrev: HashMap<&'static str, usize>,
    by_name: HashMap<&'static str, usize>,
}

impl StateDirectory {
    /// Directory for the 50 states plus DC.
    pub fn us() -> Result<Self, DirectoryError> {
        Self::from_tables(FIPS_NAMES, ABBREV_NAMES)
    }

    /// Join the two name tables. Every name must appear in both, exactly once.
    pub fn from_tables(
        fips_names: &[(&'static str, &'static str)],
        abbrev_names: &[(&'static str, &'static str)],
    ) -> Result<Self, DirectoryError> {
        let mut abbrev_by_name: HashMap<&'static str, &'static str> =
            HashMap::with_capacity(abbrev_names.len());
        let mut seen_abbrevs = HashSet::with_capacity(abbrev_names.len());
        for &(abbrev, name) in abbrev_names {
            if !seen_abbrevs.insert(abbrev) {
                return Err(DirectoryError::DuplicateKey {
                    key: abbrev.to_string(),
                });
            }
            if abbrev_by_name.insert(name, abbrev).is_some() {
                return Err(DirectoryError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }

        let mut ordered: Vec<StateIdentity> = Vec::with_capacity(fips_names.len());
        let mut seen_fips = HashSet::with_capacity(fips_names.len());
        let mut seen_names = HashSet::with_capacity(fips_names.len());

        for &(fips, name) in fips_names {
            let Some(&abbrev) = abbrev_by_name.get(name) else {
                return Err(DirectoryError::MissingAbbreviation {
                    name: name.to_string(),
                });
            };
            if !seen_fips.insert(fips) {
                return Err(DirectoryError::DuplicateKey {
                    key: fips.to_string(),
                });
            }
            if !seen_names.insert(name) {
                return Err(DirectoryError::DuplicateName {
                    name: name.to_string(),
                });
            }
            ordered.push(StateIdentity {
                fips_id: Some(fips),
                name,
                abbrev: Some(abbrev),
            });
        }

        if let Some(&(_, name)) = abbrev_names
            .iter()
            .find(|(_, name)| !seen_names.contains(name))
        {
            return Err(DirectoryError::MissingFips {
                name: name.to_string(),
            });
        }

        ordered.sort_by_key(|identity| identity.fips_id);
        let mut by_fips = HashMap::with_capacity(ordered.len());
        let mut by_abbrev = HashMap::with_capacity(ordered.len());
        let mut by_name = HashMap::with_capacity(ordered.len());
        for (idx, identity) in ordered.iter().enumerate() {
            if let Some(fips) = identity.fips_id {
                by_fips.insert(fips, idx);
            }
            if let Some(abbrev) = identity.abbrev {
                by_abbrev.insert(abbrev, idx);
            }
            by_name.insert(identity.name, idx);
        }

        Ok(Self {
            ordered,
            by_fips,
            by_abbrev,
            by_name,
        })
    }

    pub fn resolve_by_fips(&self, fips_id: &str) -> StateIdentity {
        self.lookup(self.by_fips.get(fips_id))
    }

    pub fn resolve_by_abbrev(&self, abbrev: &str) -> StateIdentity {
        self.lookup(self.by_abbrev.get(abbrev))
    }

    pub fn resolve_by_name(&self, name: &str) -> StateIdentity {
        self.lookup(self.by_name.get(name))
    }

    pub fn contains_fips(&self, fips_id: &str) -> bool {
        self.by_fips.contains_key(fips_id)
    }

    /// All known states in FIPS order.
    pub fn iter(&self) -> impl Iterator<Item = &StateIdentity> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    fn lookup(&self, idx: Option<&usize>) -> StateIdentity {
        idx.and_then(|&idx| self.ordered.get(idx))
            .copied()
            .unwrap_or(StateIdentity::UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_directory_has_fifty_states_and_dc() {
        let directory = StateDirectory::us().unwrap();
        assert_eq!(directory.len(), 51);
        assert!(directory.contains_fips("11"));
    }

    #[test]
    fn every_fips_round_trips_through_abbreviation() {
        let directory = StateDirectory::us().unwrap();
        for &(fips, name) in FIPS_NAMES {
            let identity = directory.resolve_by_fips(fips);
            assert_eq!(identity.name, name);
            let abbrev = identity.abbrev.expect("known state has an abbreviation");
            assert_eq!(directory.resolve_by_abbrev(abbrev).fips_id, Some(fips));
        }
    }

    #[test]
    fn resolves_all_three_key_spaces() {
        let directory = StateDirectory::us().unwrap();
        let california = directory.resolve_by_fips("06");
        assert_eq!(california.name, "California");
        assert_eq!(california.abbrev, Some("CA"));
        assert_eq!(directory.resolve_by_abbrev("CA"), california);
        assert_eq!(directory.resolve_by_name("California"), california);
    }

    #[test]
    fn unknown_ids_resolve_to_sentinel() {
        let directory = StateDirectory::us().unwrap();
        let unknown = directory.resolve_by_fips("99");
        assert_eq!(unknown.name, UNKNOWN_STATE_NAME);
        assert_eq!(unknown.abbrev, None);
        assert_eq!(unknown, StateIdentity::UNKNOWN);
        assert_eq!(directory.resolve_by_abbrev("PR"), StateIdentity::UNKNOWN);
        assert_eq!(directory.resolve_by_name("Puerto Rico"), StateIdentity::UNKNOWN);
    }

    #[test]
    fn iterates_in_fips_order() {
        let directory = StateDirectory::us().unwrap();
        let ids: Vec<_> = directory.iter().filter_map(|s| s.fips_id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.first(), Some(&"01"));
        assert_eq!(ids.last(), Some(&"56"));
    }

    #[test]
    fn rejects_name_missing_from_abbreviation_table() {
        let fips = &[("06", "California"), ("48", "Texas")];
        let abbrevs = &[("CA", "California")];
        assert_eq!(
            StateDirectory::from_tables(fips, abbrevs).unwrap_err(),
            DirectoryError::MissingAbbreviation {
                name: "Texas".to_string()
            }
        );
    }

    #[test]
    fn rejects_name_missing_from_fips_table() {
        let fips = &[("06", "California")];
        let abbrevs = &[("CA", "California"), ("TX", "Texas")];
        assert_eq!(
            StateDirectory::from_tables(fips, abbrevs).unwrap_err(),
            DirectoryError::MissingFips {
                name: "Texas".to_string()
            }
        );
    }

    #[test]
    fn rejects_duplicate_keys() {
        let fips = &[("06", "California"), ("06", "Texas")];
        let abbrevs = &[("CA", "California"), ("TX", "Texas")];
        assert_eq!(
            StateDirectory::from_tables(fips, abbrevs).unwrap_err(),
            DirectoryError::DuplicateKey {
                key: "06".to_string()
            }
        );
    }
}
