use serde::{Deserialize, Serialize};

/// Messages posted from the embedded widget to its parent frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WidgetMessage {
    #[serde(rename = "stateSelected")]
    StateSelected {
        state: String,
        #[serde(rename = "stateId")]
        state_id: String,
        #[serde(rename = "customerCount")]
        customer_count: usize,
    },
}
