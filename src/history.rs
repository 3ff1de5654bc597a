const HISTORY_LABEL: &str = "Search history: ";

/// Terms submitted during one session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    terms: Vec<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, term: &str) {
        self.terms.push(term.to_string());
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn render(&self) -> String {
        format!("{HISTORY_LABEL}{}", self.terms.join(" | "))
    }
}

#[test]
fn test_render_history() {
    let mut history = SearchHistory::new();
    assert_eq!(history.render(), "Search history: ");
    assert!(history.is_empty());

    history.record("beatles");
    assert_eq!(history.render(), "Search history: beatles");

    history.record("abba");
    history.record("queen");
    assert_eq!(history.render(), "Search history: beatles | abba | queen");
    assert_eq!(history.terms().len(), 3);
}
