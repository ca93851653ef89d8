// src/debounce.rs
use std::time::{Duration, Instant};

/// Single-shot quiet-period timer. Every `trigger` pushes the deadline out
/// (never stacks); `poll` fires once after the input has been quiet.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self { Self { quiet, deadline: None } }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn is_pending(&self) -> bool { self.deadline.is_some() }

    /// True exactly once per burst, when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before `poll` would fire (for scheduling a repaint).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) { self.deadline = None; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrigger_resets_deadline() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut d = Debouncer::new(ms(200));

        d.trigger(t0);
        d.trigger(t0 + ms(150));
        assert!(!d.poll(t0 + ms(250)));
        assert_eq!(d.remaining(t0 + ms(250)), Some(ms(100)));
        assert!(d.poll(t0 + ms(350)));
        assert!(!d.poll(t0 + ms(400)));
        assert!(!d.is_pending());
    }

    #[test]
    fn cancel_drops_pending_fire() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(200));
        d.trigger(t0);
        d.cancel();
        assert!(!d.poll(t0 + Duration::from_secs(1)));
    }
}
