use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SearchError;

/// The iTunes Search API refuses to return more than this many results.
pub const MAX_RESULTS: u32 = 200;
pub const DEFAULT_ENTITY: &str = "album";
/// Pre-filled limit for interactive front ends.
pub const DEFAULT_LIMIT: ResultLimit = ResultLimit(5);

/// Normalized result limit, always within `1..=MAX_RESULTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimit(u32);

impl ResultLimit {
    pub const MAX: ResultLimit = ResultLimit(MAX_RESULTS);

    pub fn new(n: i64) -> Result<Self, SearchError> {
        if n < 1 {
            return Err(SearchError::invalid_input("Limit must be >= 1"));
        }
        if n > MAX_RESULTS as i64 {
            log::debug!("capping limit {n} to {MAX_RESULTS}");
            return Ok(Self::MAX);
        }
        Ok(ResultLimit(n as u32))
    }

    /// Parses raw user input. Blank or missing input and `all` (any case)
    /// both mean the API maximum.
    pub fn parse(raw: Option<&str>) -> Result<Self, SearchError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::MAX);
        };
        if raw.eq_ignore_ascii_case("all") {
            return Ok(Self::MAX);
        }

        match raw.parse::<i64>() {
            Ok(n) => Self::new(n),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self::MAX),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                Err(SearchError::invalid_input("Limit must be >= 1"))
            }
            Err(_) => Err(SearchError::invalid_input(format!("Invalid limit: {raw}"))),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        Self::MAX
    }
}

impl FromStr for ResultLimit {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for ResultLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated search. Only constructible through [`SearchRequest::new`] or
/// [`SearchRequest::from_raw`], so the term is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    term: String,
    entity: String,
    limit: ResultLimit,
}

impl SearchRequest {
    pub fn new(term: &str, limit: ResultLimit, entity: Option<&str>) -> Result<Self, SearchError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(SearchError::invalid_input("Search term cannot be empty"));
        }

        let entity = entity
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_ENTITY);

        Ok(SearchRequest {
            term: term.to_string(),
            entity: entity.to_string(),
            limit,
        })
    }

    /// Builds a request straight from the strings a front end collected.
    pub fn from_raw(
        term: &str,
        limit: Option<&str>,
        entity: Option<&str>,
    ) -> Result<Self, SearchError> {
        // Term is checked first so an empty form reports the missing term.
        if term.trim().is_empty() {
            return Err(SearchError::invalid_input("Search term cannot be empty"));
        }
        let limit = ResultLimit::parse(limit)?;
        Self::new(term, limit, entity)
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn limit(&self) -> ResultLimit {
        self.limit
    }

    pub fn query_params(&self) -> [(&'static str, String); 3] {
        [
            ("term", self.term.clone()),
            ("entity", self.entity.clone()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: u64,
    #[serde(default)]
    pub results: Vec<ResultRecord>,
}

/// One entry of `results`, kept as the raw JSON object so the payload passes
/// through unchanged. The fields the formatter needs are read on demand.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ResultRecord {
    fields: Map<String, Value>,
}

impl ResultRecord {
    pub fn new(artist_name: &str, collection_name: &str, track_count: u32) -> ResultRecord {
        let mut fields = Map::new();
        fields.insert("artistName".into(), Value::from(artist_name));
        fields.insert("collectionName".into(), Value::from(collection_name));
        fields.insert("trackCount".into(), Value::from(track_count));
        ResultRecord { fields }
    }

    pub fn artist_name(&self) -> Option<&str> {
        self.fields.get("artistName").and_then(Value::as_str)
    }

    pub fn collection_name(&self) -> Option<&str> {
        self.fields.get("collectionName").and_then(Value::as_str)
    }

    /// Track count as display text. Numbers and non-empty strings are shown
    /// as given; `null`, a missing key or any other type reads as unknown.
    pub fn track_count(&self) -> Option<String> {
        match self.fields.get("trackCount")? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
