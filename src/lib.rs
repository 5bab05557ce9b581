#![no_std]

pub mod animation;
pub mod buffer;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod mailbox;
pub mod output;
pub mod selector;
pub mod status_led;
pub mod switches;
pub mod tick_scheduler;
pub mod transmitter;
pub mod trigger;

pub use animation::{Animation, AnimationState, AnimationStatus};
pub use buffer::{POOL_CAPACITY, SampleBuffers, SamplePool};
pub use config::ModuleConfig;
pub use dispatcher::{DispatchState, Dispatcher, Peripherals};
pub use error::Error;
pub use generator::{EntropySource, Generator};
pub use mailbox::{Event, EventMailbox, EventSignal, PendingEvents};
pub use output::{Distribution, Led, OUTPUT_COUNT, Output};
pub use selector::DistributionSelector;
pub use status_led::{StatusLed, StatusLedConfig, StatusLedMode};
pub use switches::SwitchBank;
pub use tick_scheduler::{TickResult, TickScheduler};
pub use transmitter::{DacTransmitter, Transmitter, led_level};
pub use trigger::{Consumed, GateSet};

pub use embassy_time::{Duration, Instant};
