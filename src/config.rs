use embassy_time::Duration;

use crate::status_led::StatusLedConfig;
use crate::tick_scheduler::DEFAULT_TICK_PERIOD;
use crate::transmitter::DEFAULT_LED_FLOOR;

/// Default number of ticks a switch change must settle for
pub const DEFAULT_DEBOUNCE_DELAY: u32 = 1;

/// Default number of ticks between RNG resets
pub const DEFAULT_RNG_RESET_INTERVAL: u32 = 1;

/// Configuration for the module core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Debounce threshold: the switches are read once the debounce counter
    /// exceeds this
    pub debounce_delay: u32,
    /// Timer ticks between RNG resets (0 disables the reset)
    pub rng_reset_interval: u32,
    /// Status LED blink thresholds
    pub status_led: StatusLedConfig,
    /// Lowest LED brightness code
    pub led_floor: u16,
    /// Timer tick period
    pub tick_period: Duration,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            rng_reset_interval: DEFAULT_RNG_RESET_INTERVAL,
            status_led: StatusLedConfig::default(),
            led_floor: DEFAULT_LED_FLOOR,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}
