use crate::view_model::{AppViewModel, ResultView, SectionView, SuggestionView};
use crate::{hostname_of, ScrapeResult, SUGGESTED_URLS};

pub type RequestId = u64;
pub type NotificationId = u64;

/// Where the current scrape attempt stands.
///
/// A result and an error can never coexist, and `Loading` only exists while a
/// request is in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestOutcome {
    #[default]
    Idle,
    Loading { request_id: RequestId },
    Succeeded(ScrapeResult),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    outcome: RequestOutcome,
    notification: Option<Notification>,
    last_request_id: RequestId,
    last_notification_id: NotificationId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, RequestOutcome::Loading { .. })
    }

    pub fn result(&self) -> Option<&ScrapeResult> {
        match &self.outcome {
            RequestOutcome::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            RequestOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let result = self.result();
        AppViewModel {
            input: self.input.clone(),
            loading: self.is_loading(),
            can_submit: !self.is_loading(),
            hostname: result.and_then(|r| hostname_of(&r.url())),
            error: self.error().map(ToOwned::to_owned),
            show_empty_state: matches!(self.outcome, RequestOutcome::Idle),
            result: result.map(build_result_view),
            notification: self.notification.as_ref().map(|n| n.text.clone()),
            suggestions: SUGGESTED_URLS
                .iter()
                .map(|url| SuggestionView {
                    url: (*url).to_string(),
                    label: hostname_of(url).unwrap_or_else(|| (*url).to_string()),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    /// Moves to `Loading` and hands out the id of the new request.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.outcome = RequestOutcome::Loading { request_id };
        self.dirty = true;
        request_id
    }

    pub(crate) fn in_flight(&self) -> Option<RequestId> {
        match self.outcome {
            RequestOutcome::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub(crate) fn succeed(&mut self, result: ScrapeResult) {
        self.outcome = RequestOutcome::Succeeded(result);
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.outcome = RequestOutcome::Failed(message);
        self.dirty = true;
    }

    /// Replaces any visible notification and returns the id of the new one.
    pub(crate) fn notify(&mut self, text: impl Into<String>) -> NotificationId {
        self.last_notification_id += 1;
        let id = self.last_notification_id;
        self.notification = Some(Notification {
            id,
            text: text.into(),
        });
        self.dirty = true;
        id
    }

    /// Clears the notification only if `id` is still the visible one.
    pub(crate) fn expire_notification(&mut self, id: NotificationId) {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.clear_notification();
        }
    }

    pub(crate) fn clear_notification(&mut self) {
        if self.notification.take().is_some() {
            self.dirty = true;
        }
    }
}

fn build_result_view(result: &ScrapeResult) -> ResultView {
    let title = result.title();
    let title = if title.is_empty() {
        "(none)".to_string()
    } else {
        title
    };

    ResultView {
        url: result.url(),
        title,
        description: result.description(),
        language: result.language(),
        interactions_json: pretty_json(result.interactions()),
        sections: result
            .sections()
            .enumerate()
            .map(|(index, section)| SectionView {
                key: section.id().unwrap_or_else(|| index.to_string()),
                label: section.label(),
                kind: section.kind(),
                default_open: index == 0,
                body_json: pretty_json(section.as_value()),
            })
            .collect(),
    }
}

fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("<unprintable: {err}>"))
}
