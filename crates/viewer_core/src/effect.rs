use std::time::Duration;

use serde_json::Value;

/// How long a notification stays visible before it clears itself.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// POST the canonical URL to the backend's scrape endpoint.
    Scrape {
        request_id: crate::RequestId,
        url: String,
    },
    /// Deliver `Msg::NotificationExpired { id }` after `after`.
    ScheduleNotificationClear {
        id: crate::NotificationId,
        after: Duration,
    },
    /// Write the given result object to the export file.
    ExportResult { result: Value },
}
