use crate::data_models::{ResultRecord, SearchResponse};

pub const NO_RESULTS: &str = "No results found.";
const UNKNOWN_FIELD: &str = "Unknown";
const UNKNOWN_TRACKS: &str = "?";

/// Renders a response into display lines: a count header followed by one
/// line per record, in response order.
pub fn format_results(response: &SearchResponse) -> Vec<String> {
    if response.results.is_empty() {
        return vec![NO_RESULTS.to_string()];
    }

    let mut lines = Vec::with_capacity(response.results.len() + 1);
    lines.push(format!("Results found: {}", response.result_count));
    lines.extend(response.results.iter().map(format_record));
    lines
}

pub fn format_record(record: &ResultRecord) -> String {
    let artist = record.artist_name().unwrap_or(UNKNOWN_FIELD);
    let album = record.collection_name().unwrap_or(UNKNOWN_FIELD);
    let tracks = record
        .track_count()
        .unwrap_or_else(|| UNKNOWN_TRACKS.to_string());

    format!("{artist} – {album} (Tracks: {tracks})")
}
