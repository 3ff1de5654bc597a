use std::future::Future;

use crate::data_models::{SearchRequest, SearchResponse};
use crate::error::SearchError;
use crate::format::format_results;

/// Anything that can answer a validated search. Front ends hold one of these
/// instead of a concrete HTTP client.
pub trait SearchProvider: Send + Sync {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<SearchResponse, SearchError>> + Send;
}

/// A finished search, ready to be shown.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub request: SearchRequest,
    pub response: SearchResponse,
    pub lines: Vec<String>,
}

/// Validates raw input and runs one search, returning the response untouched.
pub async fn search_terms<P: SearchProvider>(
    provider: &P,
    term: &str,
    limit: Option<&str>,
    entity: Option<&str>,
) -> Result<SearchResponse, SearchError> {
    let request = SearchRequest::from_raw(term, limit, entity)?;
    provider.search(&request).await
}

pub async fn run_search<P: SearchProvider>(
    provider: &P,
    term: &str,
    limit: Option<&str>,
    entity: Option<&str>,
) -> Result<SearchOutcome, SearchError> {
    let request = SearchRequest::from_raw(term, limit, entity)?;
    let response = provider.search(&request).await?;
    let lines = format_results(&response);

    Ok(SearchOutcome {
        request,
        response,
        lines,
    })
}
