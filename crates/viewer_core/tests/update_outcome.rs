use std::sync::Once;

use pretty_assertions::assert_eq;
use serde_json::json;
use viewer_core::{
    update, AppState, Effect, Msg, RequestOutcome, ScrapeResult, EXPORT_COMPLETE_MESSAGE,
    NOTHING_TO_EXPORT_MESSAGE, NOTIFICATION_TTL, SCRAPE_COMPLETE_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

fn loading_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("example.com".to_string()));
    let (state, _) = update(state, Msg::SubmitClicked);
    state
}

fn complete(state: AppState, result: Result<serde_json::Value, String>) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::ScrapeCompleted {
            request_id: 1,
            result,
        },
    )
}

fn sample_result() -> serde_json::Value {
    json!({
        "url": "https://example.com/",
        "scrapedAt": "2024-01-01T00:00:00Z",
        "meta": {
            "title": "Example Domain",
            "description": "",
            "language": "en",
            "canonical": null
        },
        "interactions": { "clicks": [], "scrolls": 0, "pages": ["https://example.com/"] },
        "sections": [
            {
                "id": "hero-0",
                "type": "hero",
                "label": "Example Domain",
                "sourceUrl": "https://example.com/",
                "content": { "headings": ["Example Domain"], "text": "..." },
                "rawHtml": "<div></div>",
                "truncated": false
            }
        ],
        "errors": []
    })
}

#[test]
fn success_stores_result_unchanged() {
    init_logging();
    let (state, effects) = complete(loading_state(), Ok(sample_result()));

    let result = state.result().expect("result stored");
    assert_eq!(result.as_value(), &sample_result());
    assert_eq!(result.title(), "Example Domain");
    assert_eq!(result.sections().next().map(|s| s.kind()).as_deref(), Some("hero"));
    assert!(state.error().is_none());
    assert!(!state.is_loading());
    assert_eq!(
        state.notification().map(|n| n.text.as_str()),
        Some(SCRAPE_COMPLETE_MESSAGE)
    );
    assert_eq!(
        effects,
        vec![Effect::ScheduleNotificationClear {
            id: 2,
            after: NOTIFICATION_TTL,
        }]
    );
}

#[test]
fn failure_records_message_and_notifies() {
    init_logging();
    let (state, effects) = complete(loading_state(), Err("timeout".to_string()));

    assert_eq!(state.outcome(), &RequestOutcome::Failed("timeout".to_string()));
    assert!(state.result().is_none());
    assert_eq!(state.notification().map(|n| n.text.as_str()), Some("timeout"));
    assert_eq!(effects.len(), 1);
}

#[test]
fn non_object_result_fails() {
    init_logging();
    let (state, _) = complete(loading_state(), Ok(json!("just a string")));

    assert_eq!(state.error(), Some("Backend result is not a JSON object"));
}

#[test]
fn missing_fields_default() {
    let result = ScrapeResult::from_value(json!({})).expect("empty object is accepted");
    assert_eq!(result.url(), "");
    assert_eq!(result.sections().count(), 0);
    assert!(result.interactions().is_null());
}

#[test]
fn null_and_non_string_fields_still_succeed() {
    init_logging();
    let payload = json!({
        "url": "https://example.com/",
        "meta": { "title": null, "description": 12, "language": null },
        "interactions": null,
        "sections": [
            { "id": 1, "label": "Hero", "type": "hero" },
            { "id": null, "label": 3, "type": null }
        ]
    });
    let (state, _) = complete(loading_state(), Ok(payload.clone()));

    assert!(state.error().is_none());
    assert_eq!(state.result().map(ScrapeResult::as_value), Some(&payload));

    let view = state.view().result.expect("result view");
    assert_eq!(view.title, "(none)");
    assert_eq!(view.description, "12");
    assert_eq!(view.language, "");
    assert_eq!(view.interactions_json, "null");
    assert_eq!(view.sections[0].key, "1");
    assert_eq!(view.sections[1].key, "1");
    assert_eq!(view.sections[1].label, "3");
    assert_eq!(view.sections[1].kind, "");
}

#[test]
fn partial_result_exports_exactly_as_received() {
    init_logging();
    let payload = json!({ "url": "https://a.com" });
    let (state, _) = complete(loading_state(), Ok(payload.clone()));
    let (_, effects) = update(state, Msg::DownloadClicked);

    assert_eq!(effects, vec![Effect::ExportResult { result: payload }]);
}

#[test]
fn export_keeps_backend_key_order() {
    init_logging();
    let body = r#"{"url":"https://a.com","meta":{"title":"A"},"errors":[],"interactions":{}}"#;
    let payload: serde_json::Value = serde_json::from_str(body).unwrap();
    let (state, _) = complete(loading_state(), Ok(payload));
    let (_, effects) = update(state, Msg::DownloadClicked);

    let [Effect::ExportResult { result }] = effects.as_slice() else {
        panic!("expected a single export effect, got {effects:?}");
    };
    assert_eq!(serde_json::to_string(result).unwrap(), body);
}

#[test]
fn newer_notification_survives_older_expiry() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::EnterPressed);
    let first_id = state.notification().unwrap().id;
    let (state, _) = update(state, Msg::SuggestionSelected("https://github.com/".to_string()));
    let second_id = state.notification().unwrap().id;
    assert!(second_id > first_id);

    let (state, _) = update(state, Msg::NotificationExpired { id: first_id });
    assert_eq!(
        state.notification().map(|n| n.text.as_str()),
        Some("URL selected: https://github.com/")
    );

    let (state, _) = update(state, Msg::NotificationExpired { id: second_id });
    assert!(state.notification().is_none());
}

#[test]
fn dismiss_clears_notification() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::EnterPressed);
    let (mut state, _) = update(state, Msg::NotificationDismissed);

    assert!(state.notification().is_none());
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn download_exports_wrapped_result() {
    init_logging();
    let (state, _) = complete(loading_state(), Ok(sample_result()));
    let (state, effects) = update(state, Msg::DownloadClicked);

    assert_eq!(
        effects,
        vec![Effect::ExportResult {
            result: sample_result()
        }]
    );

    let (state, _) = update(
        state,
        Msg::ExportFinished(Ok("/tmp/scrape-result.json".to_string())),
    );
    assert_eq!(
        state.notification().map(|n| n.text.as_str()),
        Some(EXPORT_COMPLETE_MESSAGE)
    );
}

#[test]
fn download_without_result_only_notifies() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::DownloadClicked);

    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::ExportResult { .. })));
    assert_eq!(
        state.notification().map(|n| n.text.as_str()),
        Some(NOTHING_TO_EXPORT_MESSAGE)
    );
}

#[test]
fn export_failure_is_reported() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::ExportFinished(Err("disk full".to_string())),
    );
    assert_eq!(
        state.notification().map(|n| n.text.as_str()),
        Some("Download failed: disk full")
    );
}
