//! Ratings exchanged after a completed delivery.

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::{self, row_id, BackendClient};
use crate::error::validation::ValidationError;
use crate::model::rating::{NewRating, ServiceStatus};
use crate::notify::{NotificationEvent, NotificationRouter, Severity};
use crate::observer::{Observer, ObserverCell, Subscription};
use crate::session::SessionContext;

/// One-tap tags offered alongside the star rating.
pub const POSITIVE_TAGS: &[&str] = &[
    "Punctual",
    "Polite",
    "Careful",
    "Fast",
    "Reliable",
    "Professional",
];
pub const NEGATIVE_TAGS: &[&str] = &["Late", "Rude", "Careless", "Slow", "Unreliable"];

/// Events delivered to the rating observer.
#[derive(Debug, Clone)]
pub enum RatingEvent {
    /// Terminal success of one submission.
    Submitted {
        rating_id: String,
        rating: u8,
        comment: String,
    },
    /// An inbound rating pushed by the platform layer.
    Received {
        rating: u8,
        comment: String,
        rater_name: String,
    },
    Error { message: String },
}

struct RatingInner {
    backend: BackendClient,
    notifier: NotificationRouter,
    session: SessionContext,
    observer: ObserverCell<RatingEvent>,
}

#[derive(Clone)]
pub struct RatingService {
    inner: Arc<RatingInner>,
}

impl RatingService {
    pub fn new(
        backend: BackendClient,
        notifier: NotificationRouter,
        session: SessionContext,
    ) -> Self {
        Self {
            inner: Arc::new(RatingInner {
                backend,
                notifier,
                session,
                observer: ObserverCell::new(),
            }),
        }
    }

    /// Registers the rating observer, replacing any previous registration.
    pub fn subscribe(&self, observer: Arc<dyn Observer<RatingEvent>>) -> Subscription {
        self.inner.observer.subscribe(observer)
    }

    /// Submits a rating for the counterpart of a completed service.
    ///
    /// Values outside 1-5 fail validation immediately, without a network
    /// call. On success the observer gets `Submitted` and a confirmation
    /// notification is presented; on failure the observer gets a generic
    /// error and no notification.
    pub fn submit_rating(&self, service_id: &str, rated_id: &str, rating: u8, comment: &str) {
        if !(1..=5).contains(&rating) {
            tracing::warn!(rating, "rejected out-of-range rating");
            self.inner.observer.emit(RatingEvent::Error {
                message: ValidationError::RatingOutOfRange(rating).to_string(),
            });
            return;
        }

        let payload = NewRating {
            service_id: service_id.to_string(),
            rater_id: self.inner.session.user_id.clone(),
            rated_id: rated_id.to_string(),
            rating,
            comment: comment.to_string(),
        };
        let service_id = service_id.to_string();
        let comment = comment.to_string();

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            match backend::rating::submit(&inner.backend, &payload).await {
                Ok(body) => {
                    let rating_id = row_id(&body).unwrap_or_else(|| Uuid::new_v4().to_string());
                    inner.observer.emit(RatingEvent::Submitted {
                        rating_id,
                        rating,
                        comment,
                    });
                    inner.notifier.present(NotificationEvent {
                        title: "Rating sent".to_string(),
                        body: "Thanks for your feedback!".to_string(),
                        correlation_id: "rating_submitted".to_string(),
                        severity: Severity::High,
                        sticky: false,
                        service_id: Some(service_id),
                    });
                }
                Err(err) => {
                    tracing::error!(%err, "failed to submit rating");
                    inner.observer.emit(RatingEvent::Error {
                        message: "Could not submit your rating".to_string(),
                    });
                }
            }
        });
    }

    /// Stars only, no comment.
    pub fn submit_quick_rating(&self, service_id: &str, rated_id: &str, rating: u8) {
        self.submit_rating(service_id, rated_id, rating, "");
    }

    /// Stars plus one-tap tags; the tags become the comment text.
    pub fn submit_rating_with_tags(
        &self,
        service_id: &str,
        rated_id: &str,
        rating: u8,
        tags: &[&str],
    ) {
        self.submit_rating(service_id, rated_id, rating, &tags.join(", "));
    }

    /// Feeds an inbound rating from the platform push layer: notifies the
    /// observer and presents a notification.
    pub fn rating_received(&self, rating: u8, comment: &str, rater_name: &str) {
        self.inner.observer.emit(RatingEvent::Received {
            rating,
            comment: comment.to_string(),
            rater_name: rater_name.to_string(),
        });

        let mut body = format!("You received {rating} stars from {rater_name}");
        if rating >= 4 {
            body.push_str(" - great work!");
        }
        self.inner.notifier.present(NotificationEvent {
            title: "New rating received".to_string(),
            body,
            correlation_id: "rating_received".to_string(),
            severity: Severity::High,
            sticky: false,
            service_id: None,
        });
    }

    /// Label for a star value on the rating screen.
    pub fn label(rating: u8) -> &'static str {
        match rating {
            1 => "Very poor",
            2 => "Poor",
            3 => "Average",
            4 => "Good",
            5 => "Excellent",
            _ => "Not rated",
        }
    }

    /// Display color for a star value.
    pub fn color(rating: u8) -> &'static str {
        match rating {
            1 => "#FF4444",
            2 => "#FF8800",
            3 => "#FFBB00",
            4 => "#88BB00",
            5 => "#00BB00",
            _ => "#888888",
        }
    }

    /// Mean of the given ratings, or 0.0 when there are none.
    pub fn average(ratings: &[u8]) -> f64 {
        if ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        f64::from(sum) / ratings.len() as f64
    }

    /// Whether a service has reached a state that can be rated.
    pub fn can_rate(status: ServiceStatus) -> bool {
        matches!(status, ServiceStatus::Completed | ServiceStatus::Delivered)
    }
}
