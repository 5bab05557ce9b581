//! Tick scheduling without a hardware timer interrupt.
//!
//! Provides portable tick pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between polls.

use embassy_time::{Duration, Instant};

use crate::mailbox::{Event, EventMailbox};

/// Default timer tick period.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

/// Result of a poll.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Whether a timer tick was signalled by this poll.
    pub fired: bool,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Software replacement for the periodic timer interrupt.
///
/// This scheduler:
/// - Signals [`Event::TimerElapsed`] once per period
/// - Skips the backlog instead of bursting after a long stall
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut ticks = TickScheduler::new(DEFAULT_TICK_PERIOD);
///
/// loop {
///     let result = ticks.poll(Instant::from_millis(now_ms()), &EVENTS);
///     dispatcher.run();
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct TickScheduler {
    next_tick: Instant,
    period: Duration,
}

impl TickScheduler {
    /// Create a scheduler whose first tick is due immediately.
    pub const fn new(period: Duration) -> Self {
        Self {
            next_tick: Instant::from_millis(0),
            period,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Signal a tick if one is due and return timing information.
    ///
    /// If we have fallen more than two periods behind, the schedule restarts
    /// at `now` so only one tick is signalled for the whole stall.
    pub fn poll(&mut self, now: Instant, events: &EventMailbox) -> TickResult {
        let max_drift = Duration::from_ticks(self.period.as_ticks() * 2);
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        let fired = now >= self.next_tick;
        if fired {
            events.signal(Event::TimerElapsed);
            self.next_tick += self.period;
        }

        let sleep_duration = if self.next_tick > now {
            self.next_tick - now
        } else {
            Duration::from_ticks(0)
        };

        TickResult {
            fired,
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }
}
