//! Time-based value transitions.
//!
//! A transition is a pure function of the clock: it stores its endpoints,
//! start instant, and duration, and interpolates on demand. Retargeting
//! re-bases the start value at the current interpolated position, which is
//! what lets a superseding render take over in-flight animations without
//! visible jumps (last-write-wins).

use std::time::{Duration, Instant};

/// Symmetric cubic ease, the default feel for UI transitions.
fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
}

impl Animated {
    /// A value that is already at its target.
    pub fn fixed(value: f64, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    /// Start a transition from `from` to `to`, beginning at `start`
    /// (which may be in the future to express a delay).
    pub fn transition(from: f64, to: f64, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// The interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = now.duration_since(self.start).as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_cubic_in_out(t)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.duration.is_zero() || now >= self.start + self.duration
    }

    /// Redirect toward a new target, starting from wherever the value is
    /// right now.
    pub fn retarget(&mut self, to: f64, now: Instant, start: Instant, duration: Duration) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = start;
        self.duration = duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_values_are_done_immediately() {
        let now = Instant::now();
        let a = Animated::fixed(3.0, now);
        assert!(a.is_done(now));
        assert_eq!(a.value_at(now), 3.0);
        assert_eq!(a.value_at(now + Duration::from_secs(10)), 3.0);
    }

    #[test]
    fn transition_interpolates_between_endpoints() {
        let now = Instant::now();
        let a = Animated::transition(0.0, 10.0, now, Duration::from_millis(100));
        assert_eq!(a.value_at(now), 0.0);
        let mid = a.value_at(now + Duration::from_millis(50));
        assert!(mid > 0.0 && mid < 10.0);
        assert_eq!(a.value_at(now + Duration::from_millis(100)), 10.0);
        assert_eq!(a.value_at(now + Duration::from_millis(200)), 10.0);
    }

    #[test]
    fn zero_duration_is_instantaneous() {
        let now = Instant::now();
        let a = Animated::transition(0.0, 10.0, now, Duration::ZERO);
        assert_eq!(a.value_at(now), 10.0);
        assert!(a.is_done(now));
    }

    #[test]
    fn delayed_start_holds_the_initial_value() {
        let now = Instant::now();
        let a = Animated::transition(1.0, 2.0, now + Duration::from_millis(50), Duration::from_millis(50));
        assert_eq!(a.value_at(now), 1.0);
        assert_eq!(a.value_at(now + Duration::from_millis(200)), 2.0);
    }

    #[test]
    fn retarget_rebases_at_current_position() {
        let now = Instant::now();
        let mut a = Animated::transition(0.0, 10.0, now, Duration::from_millis(100));
        let later = now + Duration::from_millis(50);
        let at_fifty = a.value_at(later);

        a.retarget(-5.0, later, later, Duration::from_millis(100));
        // No jump: the new transition starts where the old one was.
        assert_eq!(a.value_at(later), at_fifty);
        assert_eq!(a.target(), -5.0);
        assert_eq!(a.value_at(later + Duration::from_millis(100)), -5.0);
    }

    #[test]
    fn ease_is_symmetric_and_bounded() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-12);
    }
}
