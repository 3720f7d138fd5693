//! Notification side effects.
//!
//! The router turns a domain-agnostic [`NotificationEvent`] into a resolved
//! [`Presentation`] and hands it to the platform adapter. Presentation is
//! fire-and-forget: the router never reports success or failure back to the
//! feature that triggered it, and it does no queueing.

use std::sync::Arc;

/// Notification channel the platform adapter registers at startup.
pub const CHANNEL_ID: &str = "courier_notifications";
pub const CHANNEL_NAME: &str = "Courier Notifications";
pub const CHANNEL_DESCRIPTION: &str = "Delivery and account updates";

/// Urgency tier of a notification event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    High,
    /// Also disables auto-dismiss and keeps the presentation ongoing until
    /// explicitly cleared.
    Critical,
}

/// Platform priority a severity tier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Default,
    High,
    Max,
}

/// One notification side effect, independent of the triggering domain.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    pub title: String,
    pub body: String,
    /// Presenting two events with the same id replaces the first instead of
    /// stacking a second notification.
    pub correlation_id: String,
    pub severity: Severity,
    /// Keeps the presentation from auto-dismissing on tap.
    pub sticky: bool,
    /// Service the notification deep-links back into when tapped.
    pub service_id: Option<String>,
}

/// Fully resolved presentation handed to the platform adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub channel_id: &'static str,
    pub title: String,
    pub body: String,
    pub correlation_id: String,
    pub priority: Priority,
    pub auto_dismiss: bool,
    /// Persistent until explicitly cleared.
    pub ongoing: bool,
    pub deep_link_service_id: Option<String>,
}

/// Platform notification surface.
///
/// Implementations must replace the visible notification when a correlation
/// id is presented again.
pub trait NotificationPresenter: Send + Sync {
    fn present(&self, presentation: Presentation);
}

/// Presenter for headless hosts: writes the notification to the log and
/// nothing else.
pub struct LogPresenter;

impl NotificationPresenter for LogPresenter {
    fn present(&self, presentation: Presentation) {
        tracing::info!(
            correlation_id = %presentation.correlation_id,
            title = %presentation.title,
            body = %presentation.body,
            "notification"
        );
    }
}

#[derive(Clone)]
pub struct NotificationRouter {
    presenter: Arc<dyn NotificationPresenter>,
}

impl NotificationRouter {
    pub fn new(presenter: Arc<dyn NotificationPresenter>) -> Self {
        Self { presenter }
    }

    /// Resolves the event to a presentation and hands it off.
    pub fn present(&self, event: NotificationEvent) {
        let critical = event.severity == Severity::Critical;
        let presentation = Presentation {
            channel_id: CHANNEL_ID,
            title: event.title,
            body: event.body,
            correlation_id: event.correlation_id,
            priority: match event.severity {
                Severity::Normal => Priority::Default,
                Severity::High => Priority::High,
                Severity::Critical => Priority::Max,
            },
            auto_dismiss: !(event.sticky || critical),
            ongoing: critical,
            deep_link_service_id: event.service_id,
        };

        tracing::debug!(correlation_id = %presentation.correlation_id, "presenting notification");
        self.presenter.present(presentation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Recording {
        presented: Mutex<Vec<Presentation>>,
    }

    impl NotificationPresenter for Recording {
        fn present(&self, presentation: Presentation) {
            self.presented.lock().push(presentation);
        }
    }

    fn event(severity: Severity, sticky: bool) -> NotificationEvent {
        NotificationEvent {
            title: "Rating sent".to_string(),
            body: "Thanks for your feedback!".to_string(),
            correlation_id: "rating_submitted".to_string(),
            severity,
            sticky,
            service_id: Some("svc1".to_string()),
        }
    }

    /// Tests the severity-to-priority mapping.
    ///
    /// Expected: Normal → Default, High → High, Critical → Max
    #[test]
    fn maps_severity_to_priority() {
        let recording = Arc::new(Recording {
            presented: Mutex::new(Vec::new()),
        });
        let router = NotificationRouter::new(recording.clone());

        router.present(event(Severity::Normal, false));
        router.present(event(Severity::High, false));
        router.present(event(Severity::Critical, false));

        let presented = recording.presented.lock();
        assert_eq!(presented[0].priority, Priority::Default);
        assert_eq!(presented[1].priority, Priority::High);
        assert_eq!(presented[2].priority, Priority::Max);
    }

    /// Tests dismiss and persistence flags per tier.
    ///
    /// Expected: normal auto-dismisses; sticky and critical do not; only
    /// critical is ongoing
    #[test]
    fn resolves_dismissal_flags() {
        let recording = Arc::new(Recording {
            presented: Mutex::new(Vec::new()),
        });
        let router = NotificationRouter::new(recording.clone());

        router.present(event(Severity::High, false));
        router.present(event(Severity::High, true));
        router.present(event(Severity::Critical, false));

        let presented = recording.presented.lock();
        assert!(presented[0].auto_dismiss && !presented[0].ongoing);
        assert!(!presented[1].auto_dismiss && !presented[1].ongoing);
        assert!(!presented[2].auto_dismiss && presented[2].ongoing);
    }

    /// Tests that the channel and deep link ride along.
    ///
    /// Expected: channel id constant and originating service id preserved
    #[test]
    fn carries_channel_and_deep_link() {
        let recording = Arc::new(Recording {
            presented: Mutex::new(Vec::new()),
        });
        let router = NotificationRouter::new(recording.clone());

        router.present(event(Severity::Normal, false));

        let presented = recording.presented.lock();
        assert_eq!(presented[0].channel_id, CHANNEL_ID);
        assert_eq!(presented[0].deep_link_service_id, Some("svc1".to_string()));
    }
}
