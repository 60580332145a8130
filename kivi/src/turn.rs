use std::time::{Duration, Instant};

use crate::DiceState;

/// Countdown clock for one turn.
///
/// Every method takes an explicit `now` so the accounting stays exact under
/// test; [`Game`](crate::Game) feeds in `Instant::now()`.
#[derive(Copy, Clone, Debug)]
pub struct TurnClock {
    started_at: Instant,
    paused_at: Option<Instant>,
    duration: Duration,
}

impl TurnClock {
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            started_at: now,
            paused_at: None,
            duration,
        }
    }

    /// Freezes the countdown. Pausing twice has no further effect.
    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Continues a paused countdown. The paused span does not count towards
    /// the elapsed time, so the start instant moves forward by its length.
    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.started_at += now.saturating_duration_since(paused_at);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        let end = self.paused_at.unwrap_or(now);
        end.saturating_duration_since(self.started_at)
    }

    /// Time left on the countdown, floored at zero.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    /// Whether the countdown has run out. A paused clock never expires.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.paused_at.is_none() && self.elapsed(now) >= self.duration
    }
}

/// Everything scoped to one player's turn: the dice, the undecided stone and
/// the clock. Replaced wholesale when the next turn starts.
#[derive(Clone, Debug)]
pub(crate) struct Turn {
    pub(crate) dice: DiceState,
    pub(crate) tentative: Option<(usize, usize)>,
    pub(crate) clock: TurnClock,
}

impl Turn {
    pub(crate) fn begin(duration: Duration, now: Instant) -> Self {
        Self {
            dice: DiceState::new(),
            tentative: None,
            clock: TurnClock::start(duration, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURN: Duration = Duration::from_secs(30);

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn pause_does_not_count_towards_elapsed_time() {
        let start = Instant::now();
        let mut clock = TurnClock::start(TURN, start);
        clock.pause(start + secs(12));
        assert_eq!(clock.remaining(start + secs(12)), secs(18));
        // 5 seconds pass while paused
        assert_eq!(clock.remaining(start + secs(17)), secs(18));
        clock.resume(start + secs(17));
        assert_eq!(clock.remaining(start + secs(17)), secs(18));
        assert_eq!(clock.remaining(start + secs(20)), secs(15));
    }

    #[test]
    fn paused_clocks_never_expire() {
        let start = Instant::now();
        let mut clock = TurnClock::start(TURN, start);
        clock.pause(start + secs(1));
        assert!(!clock.is_expired(start + secs(100)));
        clock.resume(start + secs(100));
        assert!(!clock.is_expired(start + secs(128)));
        assert!(clock.is_expired(start + secs(129)));
    }

    #[test]
    fn double_pause_and_resume_are_no_ops() {
        let start = Instant::now();
        let mut clock = TurnClock::start(TURN, start);
        clock.resume(start + secs(3));
        assert_eq!(clock.remaining(start + secs(3)), secs(27));
        clock.pause(start + secs(5));
        clock.pause(start + secs(9));
        clock.resume(start + secs(10));
        // only the span from second 5 to second 10 was excluded
        assert_eq!(clock.remaining(start + secs(12)), secs(23));
    }

    #[test]
    fn expiry_is_exact() {
        let start = Instant::now();
        let clock = TurnClock::start(TURN, start);
        assert!(!clock.is_expired(start + secs(29)));
        assert!(clock.is_expired(start + secs(30)));
        assert_eq!(clock.remaining(start + secs(31)), secs(0));
    }
}
