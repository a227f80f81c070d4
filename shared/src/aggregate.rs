use std::collections::HashMap;

use crate::customer::CustomerRecord;

/// Per-state customer counts keyed by abbreviation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateCounts(HashMap<String, usize>);

impl StateCounts {
    /// Count for an abbreviation; states with no customers read as zero.
    pub fn count(&self, abbrev: &str) -> usize {
        self.0.get(abbrev).copied().unwrap_or(0)
    }

    /// Sum over all states, equal to the number of records that name a state.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct states with at least one customer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reduce records to per-state counts. Records without a state are skipped.
pub fn aggregate(records: &[CustomerRecord]) -> StateCounts {
    let counts = records
        .iter()
        .filter_map(|record| record.state.as_deref())
        .fold(HashMap::new(), |mut counts, abbrev| {
            *counts.entry(abbrev.to_string()).or_insert(0) += 1;
            counts
        });
    StateCounts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: Option<&str>) -> CustomerRecord {
        CustomerRecord {
            state: state.map(str::to_string),
            ..CustomerRecord::default()
        }
    }

    #[test]
    fn counts_by_abbreviation_and_skips_missing_state() {
        let records = [
            record(Some("CA")),
            record(Some("CA")),
            record(Some("TX")),
            record(None),
        ];
        let counts = aggregate(&records);
        assert_eq!(counts.count("CA"), 2);
        assert_eq!(counts.count("TX"), 1);
        assert_eq!(counts.count("WY"), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn total_matches_records_with_state() {
        let records: Vec<_> = ["NY", "NJ", "NY", "", "MA", "NY"]
            .iter()
            .map(|s| record((!s.is_empty()).then_some(*s)))
            .collect();
        let with_state = records.iter().filter(|r| r.state.is_some()).count();
        assert_eq!(aggregate(&records).total(), with_state);
    }

    #[test]
    fn record_order_does_not_matter() {
        let mut records = vec![
            record(Some("WA")),
            record(Some("OR")),
            record(None),
            record(Some("WA")),
        ];
        let forward = aggregate(&records);
        records.reverse();
        assert_eq!(aggregate(&records), forward);
    }

    #[test]
    fn empty_input_gives_empty_counts() {
        let counts = aggregate(&[]);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }
}
