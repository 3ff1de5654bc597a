use std::io::Cursor;
use std::sync::Mutex;

use musicsearch::data_models::{ResultRecord, SearchRequest, SearchResponse};
use musicsearch::error::SearchError;
use musicsearch::repl::{PROMPT, repl};
use musicsearch::search::SearchProvider;

/// Answers every term except `offline`, which fails like a dropped connection.
#[derive(Default)]
struct FakeProvider {
    seen: Mutex<Vec<(String, String, u32)>>,
}

impl SearchProvider for FakeProvider {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.seen.lock().unwrap().push((
            request.term().to_string(),
            request.entity().to_string(),
            request.limit().get(),
        ));
        match request.term() {
            "offline" => Err(SearchError::Network("connection refused".into())),
            "nothing" => Ok(SearchResponse::default()),
            _ => Ok(SearchResponse {
                result_count: 1,
                results: vec![ResultRecord::new("The Beatles", "Abbey Road", 17)],
            }),
        }
    }
}

async fn run_session(provider: &FakeProvider, input: &str) -> (Vec<String>, String) {
    let mut output = Vec::new();
    let history = repl(provider, Cursor::new(input), &mut output, "5", "album")
        .await
        .unwrap();
    (history.terms().to_vec(), String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_session_prints_results_and_history() {
    let provider = FakeProvider::default();
    let (terms, output) = run_session(&provider, " beatles \nquit\n").await;

    assert_eq!(terms, vec!["beatles"]);
    assert_eq!(
        output,
        format!(
            "{PROMPT}Results found: 1\n\
             The Beatles – Abbey Road (Tracks: 17)\n\
             Search history: beatles\n\
             {PROMPT}\n"
        )
    );
    assert_eq!(
        *provider.seen.lock().unwrap(),
        vec![("beatles".to_string(), "album".to_string(), 5)]
    );
}

#[tokio::test]
async fn test_errors_are_printed_and_session_continues() {
    let provider = FakeProvider::default();
    let (terms, output) = run_session(&provider, "\noffline\nnothing\nexit\n").await;

    assert_eq!(
        output,
        format!(
            "{PROMPT}Error: Search term cannot be empty\n\
             Search history: \n\
             {PROMPT}Error: iTunes API request failed: connection refused\n\
             Search history: offline\n\
             {PROMPT}No results found.\n\
             Search history: offline | nothing\n\
             {PROMPT}\n"
        )
    );
    // Rejected input is not recorded; a failed lookup is.
    assert_eq!(terms, vec!["offline", "nothing"]);
}

#[tokio::test]
async fn test_quit_stops_reading() {
    let provider = FakeProvider::default();
    let (terms, _) = run_session(&provider, "abba\n  quit  \nqueen\n").await;

    assert_eq!(terms, vec!["abba"]);
    assert_eq!(provider.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_end_of_input_ends_session() {
    let provider = FakeProvider::default();
    let (terms, output) = run_session(&provider, "abba\nqueen").await;

    assert_eq!(terms, vec!["abba", "queen"]);
    assert!(output.ends_with(&format!("Search history: abba | queen\n{PROMPT}\n")));
}

#[tokio::test]
async fn test_empty_input() {
    let provider = FakeProvider::default();
    let (terms, output) = run_session(&provider, "").await;

    assert!(terms.is_empty());
    assert_eq!(output, format!("{PROMPT}\n"));
    assert!(provider.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_limit_reported_per_term() {
    let provider = FakeProvider::default();
    let mut output = Vec::new();
    let history = repl(&provider, Cursor::new("abba\n"), &mut output, "abc", "album")
        .await
        .unwrap();

    assert!(history.is_empty());
    assert!(String::from_utf8(output).unwrap().contains("Error: Invalid limit: abc\n"));
    assert!(provider.seen.lock().unwrap().is_empty());
}
