use std::time::Duration;

/// A single deferred payload on the button clock. Scheduling again replaces
/// whatever was pending, so only the latest request is ever delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct OneShot<T> {
    pending: Option<(Duration, T)>,
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> OneShot<T> {
    /// Returns the payload that was replaced, if any.
    pub fn schedule(&mut self, due: Duration, payload: T) -> Option<T> {
        self.pending.replace((due, payload)).map(|(_, p)| p)
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, p)| p)
    }

    pub fn due(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    pub fn peek(&self) -> Option<(Duration, T)>
    where
        T: Copy,
    {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hand out the payload once `now` reaches its due time.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match self.pending {
            Some((due, _)) if now >= due => self.cancel(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_due_time() {
        let mut shot = OneShot::default();
        shot.schedule(Duration::from_secs(1), true);

        assert_eq!(shot.poll(Duration::from_millis(999)), None);
        assert_eq!(shot.poll(Duration::from_secs(1)), Some(true));
        assert_eq!(shot.poll(Duration::from_secs(2)), None);
        assert!(!shot.is_pending());
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let mut shot = OneShot::default();
        assert_eq!(shot.schedule(Duration::from_secs(1), "first"), None);
        assert_eq!(shot.schedule(Duration::from_secs(2), "second"), Some("first"));

        assert_eq!(shot.poll(Duration::from_millis(1_500)), None);
        assert_eq!(shot.due(), Some(Duration::from_secs(2)));
        assert_eq!(shot.poll(Duration::from_secs(2)), Some("second"));
    }

    #[test]
    fn test_peek_leaves_payload_pending() {
        let mut shot = OneShot::default();
        assert_eq!(shot.peek(), None);

        shot.schedule(Duration::from_secs(1), false);
        assert_eq!(shot.peek(), Some((Duration::from_secs(1), false)));
        assert!(shot.is_pending());
    }
}
