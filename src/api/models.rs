use serde::{Deserialize, Serialize};

/// Limits arrive either as typed text (`"25"`, `"all"`) or as a JSON number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawLimit {
    Text(String),
    Number(i64),
}

impl RawLimit {
    pub fn to_raw(&self) -> String {
        match self {
            RawLimit::Text(s) => s.clone(),
            RawLimit::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub term: String,
    #[serde(default)]
    pub limit: Option<RawLimit>,
    #[serde(default)]
    pub entity: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub term: String,
    pub result_count: u64,
    pub lines: Vec<String>,
    pub history: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: String,
    pub terms: Vec<String>,
}
