//! Scrape viewer core: URL validation, the request state machine and view-model helpers.
mod effect;
mod msg;
mod result;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::{Effect, NOTIFICATION_TTL};
pub use msg::Msg;
pub use result::{ScrapeResult, Section};
pub use state::{AppState, Notification, NotificationId, RequestId, RequestOutcome};
pub use update::{
    update, AUTO_CORRECTED_MESSAGE, EMPTY_INPUT_MESSAGE, EXPORT_COMPLETE_MESSAGE,
    INVALID_URL_MESSAGE, NOTHING_TO_EXPORT_MESSAGE, SCRAPE_COMPLETE_MESSAGE,
};
pub use validate::{has_http_scheme, hostname_of, is_valid_url, normalize_url};
pub use view_model::{AppViewModel, ResultView, SectionView, SuggestionView};

/// Shortcuts offered under the URL input.
pub const SUGGESTED_URLS: &[&str] = &[
    "https://example.com/",
    "https://en.wikipedia.org/wiki/Artificial_intelligence",
    "https://fastapi.tiangolo.com/",
    "https://github.com/",
];
