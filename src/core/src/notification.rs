use std::fmt::Display;
use std::time::Duration;

pub const DEFAULT_NOTIFICATION_DELAY: Duration = Duration::from_millis(2000);
pub const NOTIFICATION_FADE: Duration = Duration::from_millis(300);

/// Dismissible banner for a rejected gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub delay: Duration,
    pub fade: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, delay: Duration) -> Self {
        Notification {
            message: message.into(),
            delay,
            fade: NOTIFICATION_FADE,
        }
    }

    pub fn from_error<E: Display>(error: &E, delay: Duration) -> Self {
        Notification::new(error.to_string(), delay)
    }

    /// Fade in, hold, fade out
    pub fn total_visible(&self) -> Duration {
        self.fade + self.delay + self.fade
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RosterError;

    #[test]
    fn test_notification_from_roster_error() {
        let error = RosterError::NotFound("Foo".to_string());

        let notification = Notification::from_error(&error, DEFAULT_NOTIFICATION_DELAY);

        assert_eq!(notification.message, "Player Foo not found");
        assert_eq!(notification.total_visible(), Duration::from_millis(2600));
    }
}
