use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LoadError;

/// Record identifier as it appears in `map.json`: numeric or string.
/// Non-integral numbers are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One customer entry. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub state: Option<String>,
    #[serde(default, alias = "blogUrl", deserialize_with = "non_empty_string")]
    pub blog_url: Option<String>,
}

impl CustomerRecord {
    /// `(lng, lat)` when both are finite and inside geographic range.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let (lat, lng) = (self.lat?, self.lng?);
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some((lng, lat))
    }
}

/// Parse the body of `map.json`. The body must be an array; entries that are
/// not records are skipped one by one.
pub fn parse_customers(body: &str) -> Result<Vec<CustomerRecord>, LoadError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let total = entries.len();
    let records: Vec<CustomerRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed customer record");
                None
            }
        })
        .collect();
    tracing::debug!(records = records.len(), skipped = total - records.len(), "parsed customer records");
    Ok(records)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Numbers and numeric strings become coordinates; anything else is treated as missing.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCoordinate>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawCoordinate::Number(n)) => Some(n),
        Some(RawCoordinate::Text(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        Some(RawCoordinate::Other(_)) | None => None,
    })
}

/// Integers and strings become ids; `2.0` reads as `2`. Any other type means no id.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => Some(match n.as_i64() {
            Some(int) => RecordId::Number(int),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    RecordId::Number(f as i64)
                }
                _ => RecordId::Text(n.to_string()),
            },
        }),
        Some(serde_json::Value::String(s)) => Some(RecordId::Text(s)),
        _ => None,
    })
}

/// Non-blank strings pass through; blanks and other types are treated as missing.
fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_sparse_records() {
        let body = r#"[
            {"id": 1, "lat": 37.77, "lng": -122.42, "state": "CA", "blog_url": "https://example.com/a"},
            {"id": "b-2", "lat": null, "lng": null, "state": null, "blog_url": null},
            {"state": "TX"}
        ]"#;
        let records = parse_customers(body).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, Some(RecordId::Number(1)));
        assert_eq!(records[0].blog_url.as_deref(), Some("https://example.com/a"));
        assert_eq!(records[1].id, Some(RecordId::Text("b-2".to_string())));
        assert_eq!(records[1].state, None);
        assert_eq!(records[2].id, None);
        assert_eq!(records[2].state.as_deref(), Some("TX"));
    }

    #[test]
    fn numeric_strings_are_accepted_as_coordinates() {
        let records = parse_customers(r#"[{"lat": "40.5", "lng": " -74.0 "}]"#).unwrap();
        assert_eq!(records[0].coordinates(), Some((-74.0, 40.5)));
    }

    #[test]
    fn garbage_coordinates_are_missing() {
        let records =
            parse_customers(r#"[{"lat": "north", "lng": true}, {"lat": {}, "lng": []}]"#).unwrap();
        assert!(records.iter().all(|r| r.lat.is_none() && r.lng.is_none()));
    }

    #[test]
    fn float_id_does_not_drop_the_batch() {
        let records =
            parse_customers(r#"[{"id": 1, "state": "CA"}, {"id": 2.0, "state": "TX"}, {"id": 2.5}]"#)
                .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, Some(RecordId::Number(1)));
        assert_eq!(records[1].id, Some(RecordId::Number(2)));
        assert_eq!(records[1].state.as_deref(), Some("TX"));
        assert_eq!(records[2].id, Some(RecordId::Text("2.5".to_string())));
    }

    #[test]
    fn odd_field_types_become_missing() {
        let records = parse_customers(
            r#"[
                {"id": 1, "state": "CA"},
                {"id": true, "state": 48, "blog_url": false},
                {"id": {}, "state": ["TX"], "blogUrl": 7}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].state.as_deref(), Some("CA"));
        for record in &records[1..] {
            assert_eq!(record.id, None);
            assert_eq!(record.state, None);
            assert_eq!(record.blog_url, None);
        }
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let records = parse_customers(r#"[1, {"state": "CA"}, "x", null, {"state": "TX"}]"#).unwrap();
        let states: Vec<_> = records.iter().map(|r| r.state.as_deref()).collect();
        assert_eq!(states, vec![Some("CA"), Some("TX")]);
    }

    #[test]
    fn camel_case_blog_url_is_accepted() {
        let records = parse_customers(r#"[{"blogUrl": "https://example.com/b"}]"#).unwrap();
        assert_eq!(records[0].blog_url.as_deref(), Some("https://example.com/b"));
    }

    #[test]
    fn empty_state_counts_as_no_state() {
        let records = parse_customers(r#"[{"state": ""}, {"state": "  "}]"#).unwrap();
        assert!(records.iter().all(|r| r.state.is_none()));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let record = CustomerRecord {
            lat: Some(95.0),
            lng: Some(-100.0),
            ..CustomerRecord::default()
        };
        assert_eq!(record.coordinates(), None);

        let half = CustomerRecord {
            lat: Some(40.0),
            ..CustomerRecord::default()
        };
        assert_eq!(half.coordinates(), None);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(
            parse_customers("{not json"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            parse_customers(r#"{"id": 1}"#),
            Err(LoadError::Parse(_))
        ));
    }
}
