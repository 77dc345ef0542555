use std::fmt;
use std::time::{Duration, Instant};

/// Minutes and seconds since the clock was last started.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ElapsedTime {
    pub minutes: u32,
    pub seconds: u8,
}

impl ElapsedTime {
    /// Adds one second, rolling 60 seconds into a minute.
    pub fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.minutes += 1;
            self.seconds = 0;
        }
    }
}

/// Formats as `MM:SS`; minutes keep growing past 99.
impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// What an [`Interval`] does with firings it missed while the caller was late.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MissedFirings {
    /// Fire once per missed period until caught up.
    Burst,
    /// Fire once, then wait a full period from the late poll.
    Skip,
}

/// A cancellable periodic timer driven by caller-supplied instants.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: Duration,
    missed: MissedFirings,
    next_due: Option<Instant>,
}

impl Interval {
    #[must_use]
    pub fn new(period: Duration, missed: MissedFirings) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            missed,
            next_due: None,
        }
    }

    /// Schedules the first firing one period after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Stops the timer. Safe to call when already stopped.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns the pending firing instant if it is at or before `now`.
    #[must_use]
    pub fn due(&self, now: Instant) -> Option<Instant> {
        self.next_due.filter(|due| *due <= now)
    }

    /// Reschedules after a firing observed at `now`.
    fn fire(&mut self, now: Instant) {
        let Some(due) = self.next_due.as_mut() else {
            return;
        };

        *due += self.period;
        if self.missed == MissedFirings::Skip && *due <= now {
            *due = now + self.period;
        }
    }
}

/// One timer firing reported by [`Clock::next_event`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ClockEvent {
    Tick,
    Second(ElapsedTime),
}

/// Tick timer and elapsed-time timer sharing one start/stop lifecycle.
///
/// A late poll moves the snake at most once, while the elapsed time still
/// counts every second that passed.
#[derive(Debug, Clone)]
pub struct Clock {
    tick: Interval,
    second: Interval,
    elapsed: ElapsedTime,
}

impl Clock {
    #[must_use]
    pub fn new(tick_period: Duration, second_period: Duration) -> Self {
        Self {
            tick: Interval::new(tick_period, MissedFirings::Skip),
            second: Interval::new(second_period, MissedFirings::Burst),
            elapsed: ElapsedTime::default(),
        }
    }

    /// Arms both timers from zero. Does nothing while the tick timer runs.
    ///
    /// Returns true when the timers were armed.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }

        self.arm(now);
        true
    }

    /// Cancels any running timers, then arms both from zero.
    pub fn restart(&mut self, now: Instant) {
        self.stop();
        self.arm(now);
    }

    /// Cancels both timers. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.tick.cancel();
        self.second.cancel();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tick.is_armed()
    }

    #[must_use]
    pub fn elapsed(&self) -> ElapsedTime {
        self.elapsed
    }

    /// Fires the earliest timer due at or before `now`.
    ///
    /// Call repeatedly until it returns `None` to catch up. When both timers
    /// are due at the same instant the elapsed-time timer fires first.
    pub fn next_event(&mut self, now: Instant) -> Option<ClockEvent> {
        match (self.second.due(now), self.tick.due(now)) {
            (Some(second), Some(tick)) if second <= tick => Some(self.fire_second(now)),
            (_, Some(_)) => {
                self.tick.fire(now);
                Some(ClockEvent::Tick)
            }
            (Some(_), None) => Some(self.fire_second(now)),
            (None, None) => None,
        }
    }

    fn fire_second(&mut self, now: Instant) -> ClockEvent {
        self.second.fire(now);
        self.elapsed.advance();
        ClockEvent::Second(self.elapsed)
    }

    fn arm(&mut self, now: Instant) {
        self.elapsed = ElapsedTime::default();
        self.tick.arm(now);
        self.second.arm(now);
    }
}
