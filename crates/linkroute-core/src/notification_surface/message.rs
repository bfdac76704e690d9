//! Messaging types consumed by the notification surface.

use std::collections::HashMap;
use std::time::Duration;

/// Where a message is meant to be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageSurface {
    Notification,
    NewTabCard,
    Survey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageMetadata {
    pub id: String,
    pub impressions: u32,
    pub dismissals: u32,
    pub is_expired: bool,
}

/// One message from the messaging system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub surface: MessageSurface,
    pub title: Option<String>,
    pub text: String,
    pub button_label: Option<String>,
    /// Action identifier, e.g. `OPEN_NEW_TAB`.
    pub action: String,
    pub triggers: Vec<String>,
    pub metadata: MessageMetadata,
}

impl Message {
    pub fn is_expired(&self) -> bool {
        self.metadata.is_expired
    }
}

/// Source of messages plus the lifecycle callbacks it wants to hear about.
pub trait MessageSource: Send + Sync {
    /// Highest-priority eligible message for `surface`.
    fn next_message(&self, surface: MessageSurface) -> Option<Message>;
    fn message_for_id(&self, id: &str) -> Option<Message>;
    fn on_message_displayed(&self, message: &Message);
    fn on_message_pressed(&self, message: &Message);
    fn on_message_dismissed(&self, message: &Message);
}

/// A local notification to deliver after `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub id: String,
    pub title: String,
    pub body: String,
    pub user_info: HashMap<String, String>,
    pub delay: Duration,
}

/// OS-level local notification scheduling.
pub trait NotificationScheduler: Send + Sync {
    fn schedule(&self, request: NotificationRequest);
}

/// In-app notifications the surface raises for the rest of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceNotification {
    OpenNewTab,
}

/// In-process notification centre.
pub trait NotificationPoster: Send + Sync {
    fn post(&self, notification: SurfaceNotification);
}
