//! Clock-driven schedule for transient water ripples
//!
//! The schedule owns the set of live ripples. The caller feeds it the current
//! time (milliseconds since mount) and arms a single timer for
//! [`RippleSchedule::next_deadline`]. Nothing here touches a real clock, so
//! the whole lifecycle can be driven by a mock clock in tests.
//!
//! Timeline with the default timing (period 4s, lifetime 3s):
//!
//! ```text
//! t=0      4000      7000  8000      11000
//!          spawn #0  drop  spawn #1  drop
//! ```

use rand::Rng;
use std::collections::VecDeque;

/// Spawn period of the ripple timer
pub const DEFAULT_RIPPLE_PERIOD_MS: u64 = 4000;

/// How long a ripple stays in the tree
pub const DEFAULT_RIPPLE_LIFETIME_MS: u64 = 3000;

/// Initial diameter; the CSS animation scales it up
pub const RIPPLE_SIZE_PX: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RippleTiming {
    pub period_ms: u64,
    pub lifetime_ms: u64,
}

impl Default for RippleTiming {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_RIPPLE_PERIOD_MS,
            lifetime_ms: DEFAULT_RIPPLE_LIFETIME_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RippleError {
    #[error("ripple period must be greater than zero")]
    ZeroPeriod,
}

/// One live ripple
#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub created_at_ms: u64,
    pub expires_at_ms: u64,
}

impl Ripple {
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {:.2}%; top: {:.2}%;",
            self.x,
            self.y,
            size = RIPPLE_SIZE_PX
        )
    }
}

/// What changed during one [`RippleSchedule::advance`] call
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleDelta {
    pub spawned: Vec<u64>,
    pub expired: Vec<u64>,
}

impl RippleDelta {
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.expired.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RippleSchedule {
    timing: RippleTiming,
    next_spawn_at_ms: u64,
    next_id: u64,
    /// Ordered by expiry; the lifetime is constant so creation order works
    live: VecDeque<Ripple>,
    cancelled: bool,
}

impl RippleSchedule {
    /// Create a schedule whose first spawn happens one period after `t=0`
    pub fn new(timing: RippleTiming) -> Result<Self, RippleError> {
        if timing.period_ms == 0 {
            return Err(RippleError::ZeroPeriod);
        }
        Ok(Self {
            timing,
            next_spawn_at_ms: timing.period_ms,
            next_id: 0,
            live: VecDeque::new(),
            cancelled: false,
        })
    }

    pub fn timing(&self) -> RippleTiming {
        self.timing
    }

    pub fn live(&self) -> impl Iterator<Item = &Ripple> {
        self.live.iter()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total number of ripples ever spawned
    pub fn spawned_total(&self) -> u64 {
        self.next_id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop spawning. Ripples already live still expire on schedule.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Next instant at which [`advance`](Self::advance) has work to do
    pub fn next_deadline(&self) -> Option<u64> {
        let expiry = self.live.front().map(|r| r.expires_at_ms);
        let spawn = (!self.cancelled).then_some(self.next_spawn_at_ms);
        match (expiry, spawn) {
            (Some(e), Some(s)) => Some(e.min(s)),
            (e, s) => e.or(s),
        }
    }

    /// Process every spawn and expiry due at or before `now_ms`, in order.
    ///
    /// Expiries are handled before a spawn falling on the same instant.
    /// A missed spawn is replayed at its scheduled time, so a ripple whose
    /// whole lifetime already passed is spawned and dropped in the same call.
    pub fn advance<R: Rng + ?Sized>(&mut self, now_ms: u64, rng: &mut R) -> RippleDelta {
        let mut delta = RippleDelta::default();

        loop {
            let expiry = self
                .live
                .front()
                .map(|r| r.expires_at_ms)
                .filter(|&t| t <= now_ms);
            let spawn = (!self.cancelled && self.next_spawn_at_ms <= now_ms)
                .then_some(self.next_spawn_at_ms);

            match (expiry, spawn) {
                (Some(e), Some(s)) if e <= s => self.expire_front(&mut delta),
                (Some(_), None) => self.expire_front(&mut delta),
                (_, Some(at)) => self.spawn_at(at, rng, &mut delta),
                (None, None) => break,
            }
        }

        delta
    }

    fn expire_front(&mut self, delta: &mut RippleDelta) {
        if let Some(ripple) = self.live.pop_front() {
            delta.expired.push(ripple.id);
        }
    }

    fn spawn_at<R: Rng + ?Sized>(&mut self, at_ms: u64, rng: &mut R, delta: &mut RippleDelta) {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push_back(Ripple {
            id,
            x: rng.gen_range(0.0..=100.0),
            y: rng.gen_range(0.0..=100.0),
            created_at_ms: at_ms,
            expires_at_ms: at_ms + self.timing.lifetime_ms,
        });
        self.next_spawn_at_ms = at_ms + self.timing.period_ms;
        delta.spawned.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn schedule() -> RippleSchedule {
        RippleSchedule::new(RippleTiming::default()).unwrap()
    }

    #[test]
    fn test_zero_period_rejected() {
        let timing = RippleTiming {
            period_ms: 0,
            lifetime_ms: 3000,
        };
        assert_eq!(RippleSchedule::new(timing).unwrap_err(), RippleError::ZeroPeriod);
    }

    #[test]
    fn test_nothing_before_first_period() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut schedule = schedule();

        assert_eq!(schedule.next_deadline(), Some(4000));
        assert!(schedule.advance(3999, &mut rng).is_empty());
        assert_eq!(schedule.live_count(), 0);
    }

    #[test]
    fn test_spawn_on_period_boundary() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut schedule = schedule();

        let delta = schedule.advance(4000, &mut rng);
        assert_eq!(delta.spawned, vec![0]);
        assert_eq!(schedule.live_count(), 1);

        let ripple = schedule.live().next().unwrap();
        assert_eq!(ripple.created_at_ms, 4000);
        assert_eq!(ripple.expires_at_ms, 7000);
        assert!((0.0..=100.0).contains(&ripple.x));
        assert!((0.0..=100.0).contains(&ripple.y));
    }

    #[test]
    fn test_next_deadline_prefers_earliest_event() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut schedule = schedule();

        schedule.advance(4000, &mut rng);
        assert_eq!(schedule.next_deadline(), Some(7000));

        schedule.advance(7000, &mut rng);
        assert_eq!(schedule.next_deadline(), Some(8000));
    }

    #[test]
    fn test_catch_up_replays_missed_events_in_order() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut schedule = schedule();

        let delta = schedule.advance(12_500, &mut rng);
        assert_eq!(delta.spawned, vec![0, 1, 2]);
        assert_eq!(delta.expired, vec![0, 1]);

        let live: Vec<u64> = schedule.live().map(|r| r.id).collect();
        assert_eq!(live, vec![2]);
    }

    #[test]
    fn test_expiry_before_spawn_on_same_instant() {
        let mut rng = SmallRng::seed_from_u64(0);
        let timing = RippleTiming {
            period_ms: 1000,
            lifetime_ms: 1000,
        };
        let mut schedule = RippleSchedule::new(timing).unwrap();

        schedule.advance(1000, &mut rng);
        let delta = schedule.advance(2000, &mut rng);

        assert_eq!(delta.expired, vec![0]);
        assert_eq!(delta.spawned, vec![1]);
        assert_eq!(schedule.live_count(), 1);
    }

    #[test]
    fn test_cancel_keeps_pending_expiry() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut schedule = schedule();

        schedule.advance(4000, &mut rng);
        schedule.cancel();

        assert!(schedule.is_cancelled());
        assert_eq!(schedule.next_deadline(), Some(7000));

        let delta = schedule.advance(7000, &mut rng);
        assert_eq!(delta.expired, vec![0]);
        assert_eq!(schedule.next_deadline(), None);
    }

    #[test]
    fn test_ripple_style() {
        let ripple = Ripple {
            id: 0,
            x: 25.0,
            y: 75.5,
            created_at_ms: 0,
            expires_at_ms: 3000,
        };
        assert_eq!(
            ripple.style(),
            "width: 20px; height: 20px; left: 25.00%; top: 75.50%;"
        );
    }
}
