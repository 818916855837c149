use crate::{
    is_valid_url, normalize_url, AppState, Effect, Msg, ScrapeResult, NOTIFICATION_TTL,
};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a valid URL.";
pub const INVALID_URL_MESSAGE: &str = "Invalid URL format";
pub const AUTO_CORRECTED_MESSAGE: &str = "Auto-added https://";
pub const SCRAPE_COMPLETE_MESSAGE: &str = "Scrape complete";
pub const EXPORT_COMPLETE_MESSAGE: &str = "JSON downloaded";
pub const NOTHING_TO_EXPORT_MESSAGE: &str = "Nothing to download yet";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::EnterPressed => {
            if state.input().trim().is_empty() {
                notify(&mut state, EMPTY_INPUT_MESSAGE)
            } else {
                submit(&mut state)
            }
        }
        Msg::SuggestionSelected(url) => {
            state.set_input(url.clone());
            notify(&mut state, format!("URL selected: {url}"))
        }
        Msg::DownloadClicked => match state.result() {
            Some(result) => vec![Effect::ExportResult {
                result: result.as_value().clone(),
            }],
            None => notify(&mut state, NOTHING_TO_EXPORT_MESSAGE),
        },
        Msg::ScrapeCompleted { request_id, result } => {
            if state.in_flight() != Some(request_id) {
                // Superseded or unknown request; keep the current outcome.
                return (state, Vec::new());
            }
            match result.and_then(ScrapeResult::from_value) {
                Ok(result) => {
                    state.succeed(result);
                    notify(&mut state, SCRAPE_COMPLETE_MESSAGE)
                }
                Err(message) => {
                    state.fail(message.clone());
                    notify(&mut state, message)
                }
            }
        }
        Msg::ExportFinished(outcome) => match outcome {
            Ok(_path) => notify(&mut state, EXPORT_COMPLETE_MESSAGE),
            Err(message) => notify(&mut state, format!("Download failed: {message}")),
        },
        Msg::NotificationExpired { id } => {
            state.expire_notification(id);
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.clear_notification();
            Vec::new()
        }
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.is_loading() {
        return Vec::new();
    }

    let trimmed = state.input().trim().to_string();
    if trimmed.is_empty() {
        return notify(state, EMPTY_INPUT_MESSAGE);
    }
    if !is_valid_url(&trimmed) {
        return notify(state, INVALID_URL_MESSAGE);
    }

    let mut effects = Vec::with_capacity(2);
    let canonical = normalize_url(&trimmed);
    if canonical != trimmed {
        state.set_input(canonical.clone());
        effects.extend(notify(state, AUTO_CORRECTED_MESSAGE));
    }

    let request_id = state.begin_request();
    effects.push(Effect::Scrape {
        request_id,
        url: canonical,
    });
    effects
}

fn notify(state: &mut AppState, text: impl Into<String>) -> Vec<Effect> {
    let id = state.notify(text);
    vec![Effect::ScheduleNotificationClear {
        id,
        after: NOTIFICATION_TTL,
    }]
}
