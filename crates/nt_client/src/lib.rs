//! Client side of the summary protocol: fetches a category, then drives each
//! article card from `Idle` through `Loading` to `Displayed`, falling back to
//! the extractive summary whenever the server cannot supply a usable one.

pub mod api;
pub mod controller;

pub use api::{HttpNewsApi, NewsApi};
pub use controller::{Card, CardState, DisplayedSummary, PendingSummary, SummaryController, SummaryOrigin};

pub const EMPTY_LIST_MESSAGE: &str = "No articles available.";

const MAX_TITLE_CHARS: usize = 60;
const SHORT_TITLE_CHARS: usize = 57;

/// Shorten long titles for card headings.
pub fn display_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let short: String = title.chars().take(SHORT_TITLE_CHARS).collect();
        format!("{}...", short)
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("Short title"), "Short title");
        let long = "x".repeat(61);
        let shown = display_title(&long);
        assert_eq!(shown.chars().count(), 60);
        assert!(shown.ends_with("..."));
        assert_eq!(display_title(&"y".repeat(60)), "y".repeat(60));
    }
}
