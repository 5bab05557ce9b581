//! PCB status LED
//!
//! The only visible failure report of the module: a short blip every
//! ~50 ticks in normal operation, a fast blink once anything went wrong.

use embedded_hal::digital::OutputPin;

/// Default tick count after which the normal-mode blip switches on
pub const DEFAULT_NORMAL_ON_TICKS: u32 = 48;

/// Default tick count after which the normal-mode blip switches off
pub const DEFAULT_NORMAL_OFF_TICKS: u32 = 50;

/// Default tick count between toggles in error mode
pub const DEFAULT_ERROR_TOGGLE_TICKS: u32 = 5;

/// Operating mode of the status LED
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLedMode {
    /// Permanently lit
    On,
    /// Short periodic blip
    #[default]
    Normal,
    /// Fast even blink
    Error,
    /// Permanently dark
    Off,
}

/// Tick thresholds of the blink patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLedConfig {
    /// Normal mode: the LED lights once the counter exceeds this
    pub normal_on_ticks: u32,
    /// Normal mode: the LED goes dark and the counter restarts once it
    /// exceeds this
    pub normal_off_ticks: u32,
    /// Error mode: the LED toggles each time the counter exceeds this
    pub error_toggle_ticks: u32,
}

impl Default for StatusLedConfig {
    fn default() -> Self {
        Self {
            normal_on_ticks: DEFAULT_NORMAL_ON_TICKS,
            normal_off_ticks: DEFAULT_NORMAL_OFF_TICKS,
            error_toggle_ticks: DEFAULT_ERROR_TOGGLE_TICKS,
        }
    }
}

/// Status LED driven directly by a GPIO pin
pub struct StatusLed<P: OutputPin> {
    pin: P,
    mode: StatusLedMode,
    config: StatusLedConfig,
    tick_counter: u32,
    is_lit: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Create the LED in normal mode
    pub fn new(pin: P, config: StatusLedConfig) -> Self {
        Self {
            pin,
            mode: StatusLedMode::Normal,
            config,
            tick_counter: 0,
            is_lit: false,
        }
    }

    pub const fn mode(&self) -> StatusLedMode {
        self.mode
    }

    /// Whether the pin was last driven high
    pub const fn is_lit(&self) -> bool {
        self.is_lit
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Switch the blink pattern.
    ///
    /// The tick counter carries over, so a blip that is lit when an error
    /// arrives goes dark on the next tick.
    pub fn set_mode(&mut self, mode: StatusLedMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        match mode {
            StatusLedMode::On => self.drive(true),
            StatusLedMode::Off => self.drive(false),
            StatusLedMode::Normal | StatusLedMode::Error => {}
        }
    }

    /// Advance the blink pattern by one timer tick
    pub fn process_tick(&mut self) {
        match self.mode {
            StatusLedMode::Normal => {
                self.tick_counter += 1;
                if self.tick_counter > self.config.normal_on_ticks {
                    self.drive(true);
                }
                if self.tick_counter > self.config.normal_off_ticks {
                    self.drive(false);
                    self.tick_counter = 0;
                }
            }
            StatusLedMode::Error => {
                self.tick_counter += 1;
                if self.tick_counter > self.config.error_toggle_ticks {
                    self.drive(!self.is_lit);
                    self.tick_counter = 0;
                }
            }
            StatusLedMode::On | StatusLedMode::Off => {}
        }
    }

    fn drive(&mut self, lit: bool) {
        // Nothing left to report a status pin failure to.
        let _ = self.pin.set_state(lit.into());
        self.is_lit = lit;
    }
}
