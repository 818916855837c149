use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User clicked the Scrape button.
    SubmitClicked,
    /// User pressed Enter inside the URL input box.
    EnterPressed,
    /// User picked one of the suggested URLs.
    SuggestionSelected(String),
    /// User clicked Download JSON.
    DownloadClicked,
    /// Engine finished a scrape request. `Ok` carries the backend's `result` object.
    ScrapeCompleted {
        request_id: crate::RequestId,
        result: Result<Value, String>,
    },
    /// Export of the current result finished; `Ok` carries the written path.
    ExportFinished(Result<String, String>),
    /// Display time of a notification ran out.
    NotificationExpired { id: crate::NotificationId },
    /// User dismissed the notification.
    NotificationDismissed,
}
