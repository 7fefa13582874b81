use std::time::{Duration, Instant};

/// A one-shot action scheduled for a point in time.
///
/// Nothing runs in the background: the owner polls it once per frame with the
/// current time and reacts when it reports that it fired. Firing happens at
/// most once per schedule. `cancel` drops a pending deadline without firing.
#[derive(Debug, Default, Clone, Copy)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule the action `delay` after `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Time left until the deadline, zero if already due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::from_millis(800));

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(799)));
        assert!(timer.poll(start + Duration::from_millis(800)));
        assert!(!timer.poll(start + Duration::from_millis(900)));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::from_millis(10));
        assert!(timer.cancel());
        assert!(!timer.poll(start + Duration::from_secs(1)));
        assert!(!timer.cancel(), "second cancel has nothing to drop");
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::from_millis(100));
        timer.schedule(start + Duration::from_millis(50), Duration::from_millis(100));
        assert!(!timer.poll(start + Duration::from_millis(120)));
        assert!(timer.poll(start + Duration::from_millis(150)));
    }

    #[test]
    fn test_remaining_saturates() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        assert_eq!(timer.remaining(start), None);
        timer.schedule(start, Duration::from_millis(300));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(
            timer.remaining(start + Duration::from_secs(2)),
            Some(Duration::ZERO)
        );
    }
}
