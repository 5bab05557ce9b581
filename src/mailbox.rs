//! Interrupt-safe event latches for `no_std` environments.
//!
//! Interrupt handlers only set a latch and return. The dispatch pass takes
//! all latches at once under a single critical section, so a latch set while
//! a pass is running is seen by the next pass.

use core::cell::Cell;

use critical_section::Mutex;

/// Asynchronous signals the dispatcher reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Periodic timer tick
    TimerElapsed,
    /// Pin-change interrupt on one of the distribution switches
    DistributionChanged,
    /// Rising edge on gate input 1
    Gate1Triggered,
    /// Rising edge on gate input 2
    Gate2Triggered,
    /// Failure reported from outside the core
    ErrorOccurred,
}

/// Snapshot of the latches taken at the start of a dispatch pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingEvents {
    pub timer_elapsed: bool,
    pub distribution_changed: bool,
    pub gate1: bool,
    pub gate2: bool,
    pub error_occurred: bool,
}

impl PendingEvents {
    /// Nothing pending
    pub const NONE: Self = Self {
        timer_elapsed: false,
        distribution_changed: false,
        gate1: false,
        gate2: false,
        error_occurred: false,
    };

    /// Set the latch for `event`
    pub const fn latch(&mut self, event: Event) {
        match event {
            Event::TimerElapsed => self.timer_elapsed = true,
            Event::DistributionChanged => self.distribution_changed = true,
            Event::Gate1Triggered => self.gate1 = true,
            Event::Gate2Triggered => self.gate2 = true,
            Event::ErrorOccurred => self.error_occurred = true,
        }
    }

    pub const fn is_empty(&self) -> bool {
        !(self.timer_elapsed
            || self.distribution_changed
            || self.gate1
            || self.gate2
            || self.error_occurred)
    }
}

/// Latch storage shared between interrupt handlers and the dispatch pass.
///
/// Signalling an already latched event is a no-op; events are flags, not a
/// queue.
pub struct EventMailbox {
    inner: Mutex<Cell<PendingEvents>>,
}

impl EventMailbox {
    /// Create a mailbox with no latch set.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(PendingEvents::NONE)),
        }
    }

    /// Get a signalling handle for an interrupt handler.
    pub const fn signaller(&self) -> EventSignal<'_> {
        EventSignal { mailbox: self }
    }

    /// Latch an event. Never blocks beyond the critical section.
    pub fn signal(&self, event: Event) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut pending = cell.get();
            pending.latch(event);
            cell.set(pending);
        });
    }

    /// Read and clear every latch in one step.
    pub fn take(&self) -> PendingEvents {
        critical_section::with(|cs| self.inner.borrow(cs).replace(PendingEvents::NONE))
    }

    /// Read the latches without clearing them.
    pub fn pending(&self) -> PendingEvents {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for EventMailbox {
    fn default() -> Self {
        Self::new()
    }
}

/// A signalling handle for an [`EventMailbox`].
///
/// This is a lightweight reference that can be copied into each interrupt
/// handler.
#[derive(Clone, Copy)]
pub struct EventSignal<'a> {
    mailbox: &'a EventMailbox,
}

impl EventSignal<'_> {
    /// Latch an event.
    pub fn signal(&self, event: Event) {
        self.mailbox.signal(event);
    }
}
