use std::io::{BufRead, Write};

use anyhow::Result;

use crate::history::SearchHistory;
use crate::search::{SearchProvider, run_search};

pub const PROMPT: &str = "Enter a search term: ";

/// Line-oriented search session. Each input line is one term; `quit`, `exit`
/// or end of input ends the session. Search errors are printed and the
/// session carries on. Returns the session's history.
pub async fn repl<P, R, W>(
    provider: &P,
    input: R,
    mut output: W,
    limit: &str,
    entity: &str,
) -> Result<SearchHistory>
where
    P: SearchProvider,
    R: BufRead,
    W: Write,
{
    let mut history = SearchHistory::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let term = line?;
        if matches!(term.trim(), "quit" | "exit") {
            break;
        }

        match run_search(provider, &term, Some(limit), Some(entity)).await {
            Ok(outcome) => {
                history.record(outcome.request.term());
                for line in outcome.lines {
                    writeln!(output, "{line}")?;
                }
            }
            Err(e) => {
                // A failed lookup still counts as a submitted term.
                if e.is_network() {
                    history.record(term.trim());
                }
                log::debug!("search {term:?} failed: {e}");
                writeln!(output, "Error: {e}")?;
            }
        }
        writeln!(output, "{}", history.render())?;
    }
    writeln!(output)?;
    Ok(history)
}
