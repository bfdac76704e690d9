//! Notification surface.
//!
//! Turns a messaging-system message targeted at the notification surface
//! into a scheduled local notification, and handles taps and dismissals
//! on that notification.

mod message;

pub use message::{
    Message, MessageMetadata, MessageSource, MessageSurface, NotificationPoster,
    NotificationRequest, NotificationScheduler, SurfaceNotification,
};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::config::NotificationConfig;

/// User-info key carrying the originating message id.
pub const MESSAGE_ID_KEY: &str = "message-id-key";
/// Message action that opens a new tab when the notification is tapped.
pub const OPEN_NEW_TAB_ACTION: &str = "OPEN_NEW_TAB";

pub struct NotificationSurfaceManager {
    messages: Arc<dyn MessageSource>,
    scheduler: Arc<dyn NotificationScheduler>,
    poster: Arc<dyn NotificationPoster>,
    delay: Duration,
}

impl NotificationSurfaceManager {
    pub fn new(
        messages: Arc<dyn MessageSource>,
        scheduler: Arc<dyn NotificationScheduler>,
        poster: Arc<dyn NotificationPoster>,
        config: &NotificationConfig,
    ) -> Self {
        Self {
            messages,
            scheduler,
            poster,
            delay: Duration::from_secs(config.delay_secs),
        }
    }

    fn current_message(&self) -> Option<Message> {
        self.messages
            .next_message(MessageSurface::Notification)
            .filter(|m| !m.is_expired())
    }

    /// A non-expired notification message is available.
    pub fn should_show_surface(&self) -> bool {
        self.current_message().is_some()
    }

    /// Schedules the current message as a local notification.
    pub fn show_notification_surface(&self) {
        let Some(message) = self.current_message() else {
            tracing::debug!("no notification message to show");
            return;
        };

        let mut user_info = HashMap::new();
        user_info.insert(MESSAGE_ID_KEY.to_string(), message.id.clone());

        self.scheduler.schedule(NotificationRequest {
            id: message.id.clone(),
            title: message.title.clone().unwrap_or_default(),
            body: message.text.clone(),
            user_info,
            delay: self.delay,
        });
        self.messages.on_message_displayed(&message);
        tracing::info!(message_id = %message.id, "notification scheduled");
    }

    fn message_from(&self, user_info: &HashMap<String, String>) -> Option<Message> {
        let id = user_info.get(MESSAGE_ID_KEY)?;
        let message = self.messages.message_for_id(id);
        if message.is_none() {
            tracing::debug!(message_id = %id, "notification refers to unknown message");
        }
        message
    }

    /// Handles a tap on a delivered notification.
    pub fn did_tap_notification(&self, user_info: &HashMap<String, String>) {
        let Some(message) = self.message_from(user_info) else {
            return;
        };

        self.messages.on_message_pressed(&message);
        if message.action == OPEN_NEW_TAB_ACTION {
            self.poster.post(SurfaceNotification::OpenNewTab);
        }
    }

    /// Handles the user dismissing a delivered notification.
    pub fn did_dismiss_notification(&self, user_info: &HashMap<String, String>) {
        if let Some(message) = self.message_from(user_info) {
            self.messages.on_message_dismissed(&message);
        }
    }
}
