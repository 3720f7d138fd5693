//! Chat between the courier and the requesting company.

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::{self, parse_rows, row_id, BackendClient};
use crate::error::validation::ValidationError;
use crate::model::message::{ChatMessage, MessageKind, NewMessage};
use crate::notify::{NotificationEvent, NotificationRouter, Severity};
use crate::observer::{Observer, ObserverCell, Subscription};
use crate::session::SessionContext;

/// Canned one-tap messages offered in the chat UI.
pub const QUICK_MESSAGES: &[&str] = &[
    "🏍️ On my way!",
    "📍 Arrived at the pickup point",
    "✅ Package collected",
    "🎉 Delivery completed",
    "⏰ Running about 5 minutes late",
];

/// Events delivered to the chat observer.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// Terminal success of one send. The id is the backend's row id, or a
    /// local receipt id when the backend echoed none.
    MessageSent { message_id: String },
    /// An inbound message pushed by the platform layer.
    MessageReceived {
        sender_id: String,
        sender_name: String,
        content: String,
    },
    /// Local typing echo; never leaves the device.
    TypingChanged { user_id: String, is_typing: bool },
    HistoryLoaded { messages: Vec<ChatMessage> },
    Error { message: String },
}

struct ChatInner {
    backend: BackendClient,
    notifier: NotificationRouter,
    session: SessionContext,
    observer: ObserverCell<ChatEvent>,
}

#[derive(Clone)]
pub struct ChatService {
    inner: Arc<ChatInner>,
}

impl ChatService {
    pub fn new(
        backend: BackendClient,
        notifier: NotificationRouter,
        session: SessionContext,
    ) -> Self {
        Self {
            inner: Arc::new(ChatInner {
                backend,
                notifier,
                session,
                observer: ObserverCell::new(),
            }),
        }
    }

    /// Registers the chat observer, replacing any previous registration.
    pub fn subscribe(&self, observer: Arc<dyn Observer<ChatEvent>>) -> Subscription {
        self.inner.observer.subscribe(observer)
    }

    /// Sends a message within a service conversation.
    ///
    /// Empty content fails validation immediately, without a network call.
    /// Exactly one terminal event reaches the observer: `MessageSent` on a
    /// 2xx outcome, `Error` otherwise.
    pub fn send_message(
        &self,
        service_id: &str,
        receiver_id: &str,
        content: &str,
        kind: MessageKind,
    ) {
        if content.trim().is_empty() {
            tracing::warn!("rejected empty chat message");
            self.inner.observer.emit(ChatEvent::Error {
                message: ValidationError::EmptyMessage.to_string(),
            });
            return;
        }

        let message = NewMessage {
            service_id: service_id.to_string(),
            sender_id: self.inner.session.user_id.clone(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            message_type: kind,
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            match backend::chat::send_message(&inner.backend, &message).await {
                Ok(payload) => {
                    let message_id =
                        row_id(&payload).unwrap_or_else(|| Uuid::new_v4().to_string());
                    inner.observer.emit(ChatEvent::MessageSent { message_id });
                }
                Err(err) => {
                    tracing::error!(%err, "failed to send chat message");
                    inner.observer.emit(ChatEvent::Error {
                        message: "Could not send your message".to_string(),
                    });
                }
            }
        });
    }

    /// Sends the current position as a maps link.
    pub fn send_location_message(
        &self,
        service_id: &str,
        receiver_id: &str,
        latitude: f64,
        longitude: f64,
    ) {
        let content = format!(
            "📍 Location: https://www.google.com/maps?q={latitude:.6},{longitude:.6}"
        );
        self.send_message(service_id, receiver_id, &content, MessageKind::Location);
    }

    /// Sends one of the [`QUICK_MESSAGES`].
    pub fn send_quick_message(&self, service_id: &str, receiver_id: &str, text: &str) {
        self.send_message(service_id, receiver_id, text, MessageKind::Text);
    }

    /// Loads the conversation history of a service, oldest first.
    pub fn load_history(&self, service_id: &str) {
        let service_id = service_id.to_string();
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = backend::chat::list_messages(&inner.backend, &service_id).await;
            let event = match outcome {
                Ok(payload) => match parse_rows::<ChatMessage>(&payload) {
                    Ok(messages) => ChatEvent::HistoryLoaded { messages },
                    Err(err) => {
                        tracing::error!(%err, service_id, "malformed message history payload");
                        ChatEvent::Error {
                            message: "Could not load messages".to_string(),
                        }
                    }
                },
                Err(err) => {
                    tracing::error!(%err, service_id, "failed to load message history");
                    ChatEvent::Error {
                        message: "Could not load messages".to_string(),
                    }
                }
            };
            inner.observer.emit(event);
        });
    }

    /// Echoes a typing indicator to the observer. Local only.
    pub fn set_typing(&self, user_id: &str, is_typing: bool) {
        tracing::debug!(user_id, is_typing, "typing status changed");
        self.inner.observer.emit(ChatEvent::TypingChanged {
            user_id: user_id.to_string(),
            is_typing,
        });
    }

    /// Feeds an inbound message from the platform push layer: notifies the
    /// observer and presents a chat notification deep-linked to the service.
    pub fn message_received(
        &self,
        service_id: &str,
        sender_id: &str,
        sender_name: &str,
        content: &str,
    ) {
        self.inner.observer.emit(ChatEvent::MessageReceived {
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            content: content.to_string(),
        });

        self.inner.notifier.present(NotificationEvent {
            title: format!("New message from {sender_name}"),
            body: content.to_string(),
            correlation_id: format!("chat_{service_id}"),
            severity: Severity::High,
            sticky: false,
            service_id: Some(service_id.to_string()),
        });
    }
}
