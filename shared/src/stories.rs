use crate::customer::{CustomerRecord, RecordId};
use crate::states::StateDirectory;

/// A customer with a published story, shown in the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerStory {
    pub id: Option<RecordId>,
    pub blog_url: String,
}

/// Stories for the state with this display name, in record order.
/// The panel only knows the name, so it is resolved back to an abbreviation here.
pub fn stories_for_state(
    directory: &StateDirectory,
    records: &[CustomerRecord],
    state_name: &str,
) -> Vec<CustomerStory> {
    let Some(abbrev) = directory.resolve_by_name(state_name).abbrev else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|record| record.state.as_deref() == Some(abbrev))
        .filter_map(|record| {
            Some(CustomerStory {
                id: record.id.clone(),
                blog_url: record.blog_url.clone()?,
            })
        })
        .collect()
}

/// Visibility of the info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Hidden,
    Open {
        name: String,
        count: usize,
    },
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, state: &str, blog: Option<&str>) -> CustomerRecord {
        CustomerRecord {
            id: Some(RecordId::Number(id)),
            state: Some(state.to_string()),
            blog_url: blog.map(str::to_string),
            ..CustomerRecord::default()
        }
    }

    #[test]
    fn lists_only_stories_for_named_state() {
        let directory = StateDirectory::us().unwrap();
        let records = [
            record(1, "CA", Some("https://blog/1")),
            record(2, "CA", None),
            record(3, "TX", Some("https://blog/3")),
            record(4, "CA", Some("https://blog/4")),
        ];
        let stories = stories_for_state(&directory, &records, "California");
        let urls: Vec<_> = stories.iter().map(|s| s.blog_url.as_str()).collect();
        assert_eq!(urls, ["https://blog/1", "https://blog/4"]);
    }

    #[test]
    fn unknown_name_has_no_stories() {
        let directory = StateDirectory::us().unwrap();
        let records = [record(1, "CA", Some("https://blog/1"))];
        assert!(stories_for_state(&directory, &records, "Unknown").is_empty());
    }
}
