//! Short-lived status messages ("Copied to clipboard!", "Saved", ...).

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    message: Option<String>,
    expires_at: Option<Instant>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` until `ttl` has elapsed.
    pub fn show_for(&mut self, message: impl Into<String>, ttl: Duration) {
        self.show_until(message, Instant::now() + ttl);
    }

    pub fn show_until(&mut self, message: impl Into<String>, deadline: Instant) {
        self.message = Some(message.into());
        self.expires_at = Some(deadline);
    }

    /// Shows `message` until replaced or cleared.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.expires_at = None;
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.expires_at = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Drops the message once its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if self.expires_at.is_some_and(|deadline| now >= deadline) {
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_deadline_only() {
        let now = Instant::now();
        let mut status = StatusLine::new();
        status.show_until("Saved", now + Duration::from_secs(2));

        status.expire(now + Duration::from_secs(1));
        assert_eq!(status.message(), Some("Saved"));

        status.expire(now + Duration::from_secs(2));
        assert_eq!(status.message(), None);
    }

    #[test]
    fn test_sticky_message_survives_expire() {
        let mut status = StatusLine::new();
        status.show("Typing...");
        status.expire(Instant::now() + Duration::from_secs(3600));
        assert_eq!(status.message(), Some("Typing..."));
    }
}
