//! Top-level event dispatch
//!
//! [`Dispatcher::run`] is called over and over by the main loop. Each call
//! takes the pending latches once and processes them to completion; nothing
//! in a pass blocks beyond a bounded hardware transfer.

#[cfg(feature = "defmt")]
use defmt::{debug, info, warn};
use embedded_hal::digital::OutputPin;

use crate::animation::{Animation, AnimationStatus};
use crate::buffer::SampleBuffers;
use crate::config::ModuleConfig;
use crate::error::Error;
use crate::generator::{EntropySource, Generator};
use crate::mailbox::EventMailbox;
use crate::selector::DistributionSelector;
use crate::status_led::{StatusLed, StatusLedMode};
use crate::switches::SwitchBank;
use crate::transmitter::Transmitter;
use crate::trigger::{self, GateSet};

/// Operating phase of the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchState {
    /// Power-up animation still running; gates are held back
    AnimationPhase,
    /// Gates update the outputs
    Working,
}

/// Hardware collaborators handed to the dispatcher
pub struct Peripherals<T, R, S, P> {
    pub transmitter: T,
    pub entropy: R,
    pub switches: S,
    pub status_pin: P,
}

/// The module's event-driven state machine
///
/// Owns every component; interrupt handlers reach it only through the shared
/// [`EventMailbox`].
pub struct Dispatcher<'a, T, R, S, P>
where
    T: Transmitter,
    R: EntropySource,
    S: SwitchBank,
    P: OutputPin,
{
    // External dependencies and configuration
    events: &'a EventMailbox,
    config: ModuleConfig,
    transmitter: T,
    generator: Generator<R>,
    switches: S,

    // Internal state
    state: DispatchState,
    has_error: bool,
    pending_gates: GateSet,
    distribution_pending: bool,
    debounce_counter: u32,
    rng_reset_counter: u32,

    // Internal dependencies
    buffers: SampleBuffers,
    selector: DistributionSelector,
    animation: Animation,
    status_led: StatusLed<P>,
}

impl<'a, T, R, S, P> Dispatcher<'a, T, R, S, P>
where
    T: Transmitter,
    R: EntropySource,
    S: SwitchBank,
    P: OutputPin,
{
    /// Create a dispatcher in the animation phase with empty pools.
    ///
    /// Call [`init`](Self::init) before the first [`run`](Self::run).
    pub fn new(
        events: &'a EventMailbox,
        peripherals: Peripherals<T, R, S, P>,
        config: &ModuleConfig,
    ) -> Self {
        Self {
            events,
            config: *config,
            transmitter: peripherals.transmitter,
            generator: Generator::new(peripherals.entropy),
            switches: peripherals.switches,
            state: DispatchState::AnimationPhase,
            has_error: false,
            pending_gates: GateSet::new(false, false),
            distribution_pending: false,
            debounce_counter: 0,
            rng_reset_counter: 0,
            buffers: SampleBuffers::new(),
            selector: DistributionSelector::new(),
            animation: Animation::new(),
            status_led: StatusLed::new(peripherals.status_pin, config.status_led),
        }
    }

    /// Fill both pools and schedule a first (debounced) switch read
    pub fn init(&mut self) {
        if let Err(error) = self.buffers.fill(&mut self.generator) {
            self.handle_error(error);
        }
        self.distribution_pending = true;
    }

    /// Process everything latched since the previous pass
    pub fn run(&mut self) {
        let pending = self.events.take();
        if pending.distribution_changed {
            self.distribution_pending = true;
        }

        // Gates seen during the animation stay latched until `Working`.
        self.pending_gates = self
            .pending_gates
            .merge(GateSet::new(pending.gate1, pending.gate2));
        if self.state == DispatchState::Working && self.pending_gates.any() {
            let gates = core::mem::take(&mut self.pending_gates);
            self.process_gates(gates);
        }

        if pending.timer_elapsed {
            self.process_tick();
        }

        if pending.error_occurred {
            self.handle_external_error();
        }
    }

    /// Current operating phase
    pub const fn state(&self) -> DispatchState {
        self.state
    }

    /// Whether any failure has been handled since power-up
    pub const fn has_error(&self) -> bool {
        self.has_error
    }

    /// Gates latched but not yet processed
    pub const fn pending_gates(&self) -> GateSet {
        self.pending_gates
    }

    /// Whether a switch change is waiting to be debounced
    pub const fn is_distribution_pending(&self) -> bool {
        self.distribution_pending
    }

    pub const fn debounce_counter(&self) -> u32 {
        self.debounce_counter
    }

    pub const fn buffers(&self) -> &SampleBuffers {
        &self.buffers
    }

    pub const fn selector(&self) -> &DistributionSelector {
        &self.selector
    }

    pub const fn animation(&self) -> &Animation {
        &self.animation
    }

    pub const fn status_led(&self) -> &StatusLed<P> {
        &self.status_led
    }

    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub const fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }

    pub const fn generator(&self) -> &Generator<R> {
        &self.generator
    }

    pub const fn generator_mut(&mut self) -> &mut Generator<R> {
        &mut self.generator
    }

    pub const fn switches_mut(&mut self) -> &mut S {
        &mut self.switches
    }

    fn process_gates(&mut self, gates: GateSet) {
        let result = trigger::fire(
            gates,
            &mut self.buffers,
            &self.selector,
            &mut self.transmitter,
            &mut self.generator,
        );
        if let Err(error) = result {
            self.handle_error(error);
        }
    }

    fn process_tick(&mut self) {
        self.status_led.process_tick();
        self.process_rng_reset();

        if self.distribution_pending {
            self.process_distribution();
        }

        if self.state == DispatchState::AnimationPhase {
            match self.animation.clock(&mut self.transmitter) {
                AnimationStatus::Completed => {
                    #[cfg(feature = "defmt")]
                    info!("[Dispatcher] animation complete, working");
                    self.state = DispatchState::Working;
                }
                AnimationStatus::Error => self.handle_error(Error::TransferFailure),
                AnimationStatus::Ongoing => {}
            }
        }
    }

    /// Periodic RNG reset, works around seed errors of the peripheral
    fn process_rng_reset(&mut self) {
        if self.config.rng_reset_interval == 0 {
            return;
        }
        self.rng_reset_counter += 1;
        if self.rng_reset_counter >= self.config.rng_reset_interval {
            self.generator.reset();
            self.rng_reset_counter = 0;
        }
    }

    /// Debounce step: read the switches once the counter exceeds the delay
    fn process_distribution(&mut self) {
        if self.debounce_counter <= self.config.debounce_delay {
            self.debounce_counter += 1;
            return;
        }

        self.distribution_pending = false;
        self.debounce_counter = 0;
        match self.switches.read() {
            Ok(distributions) => {
                #[cfg(feature = "defmt")]
                debug!("[Dispatcher] distributions: {}", distributions);
                self.selector.set_all(distributions);
            }
            Err(error) => self.handle_error(error),
        }
    }

    fn handle_external_error(&mut self) {
        #[cfg(feature = "defmt")]
        warn!("[Dispatcher] error signalled");
        self.enter_error_mode();
    }

    fn handle_error(&mut self, _error: Error) {
        #[cfg(feature = "defmt")]
        warn!("[Dispatcher] {}", _error);
        self.enter_error_mode();
    }

    /// Idempotent: only switches the status LED pattern
    fn enter_error_mode(&mut self) {
        self.has_error = true;
        self.status_led.set_mode(StatusLedMode::Error);
    }
}
