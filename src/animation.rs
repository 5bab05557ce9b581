//! Power-up LED chase
//!
//! One step per timer tick: LED1 on, then a single lit LED runs
//! 1 → 2 → 3 → 4 → 3 → 2 → 1, then LED1 goes off. Runs once per power cycle.

use crate::error::Error;
use crate::output::Led;
use crate::transmitter::Transmitter;

/// Brightness code of a lit LED during the chase
const LED_ON: u16 = 0xffff;

/// Brightness code of a dark LED during the chase
const LED_OFF: u16 = 0x0000;

/// Result of clocking the animation once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationStatus {
    /// More steps to go
    Ongoing,
    /// The chase has finished
    Completed,
    /// A transfer failed during this step; the animation still advanced
    Error,
}

/// Steps of the chase, strictly linear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationState {
    None,
    Step1,
    Step2,
    Step3,
    Step4,
    Step5,
    Step6,
    Step7,
    Complete,
}

/// What a step does to the LEDs
#[derive(Clone, Copy)]
enum StepAction {
    On(Led),
    Switch { on: Led, off: Led },
    Off(Led),
    Idle,
}

impl AnimationState {
    const fn action(self) -> StepAction {
        match self {
            Self::None => StepAction::On(Led::Led1),
            Self::Step1 => StepAction::Switch {
                on: Led::Led2,
                off: Led::Led1,
            },
            Self::Step2 => StepAction::Switch {
                on: Led::Led3,
                off: Led::Led2,
            },
            Self::Step3 => StepAction::Switch {
                on: Led::Led4,
                off: Led::Led3,
            },
            Self::Step4 => StepAction::Switch {
                on: Led::Led3,
                off: Led::Led4,
            },
            Self::Step5 => StepAction::Switch {
                on: Led::Led2,
                off: Led::Led3,
            },
            Self::Step6 => StepAction::Switch {
                on: Led::Led1,
                off: Led::Led2,
            },
            Self::Step7 => StepAction::Off(Led::Led1),
            Self::Complete => StepAction::Idle,
        }
    }

    /// Following state; `Complete` is terminal
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Step1,
            Self::Step1 => Self::Step2,
            Self::Step2 => Self::Step3,
            Self::Step3 => Self::Step4,
            Self::Step4 => Self::Step5,
            Self::Step5 => Self::Step6,
            Self::Step6 => Self::Step7,
            Self::Step7 | Self::Complete => Self::Complete,
        }
    }
}

/// One-shot power-up LED animation
#[derive(Debug, Clone)]
pub struct Animation {
    state: AnimationState,
}

impl Animation {
    pub const fn new() -> Self {
        Self {
            state: AnimationState::None,
        }
    }

    pub const fn state(&self) -> AnimationState {
        self.state
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self.state, AnimationState::Complete)
    }

    /// Perform the current step and advance.
    ///
    /// Reports `Completed` from the step that reaches the end onwards. Once
    /// complete, further calls touch no LED.
    pub fn clock<T: Transmitter>(&mut self, transmitter: &mut T) -> AnimationStatus {
        let result = match self.state.action() {
            StepAction::On(led) => transmitter.set_led_brightness(led, LED_ON),
            StepAction::Switch { on, off } => Self::switch(transmitter, on, off),
            StepAction::Off(led) => transmitter.set_led_brightness(led, LED_OFF),
            StepAction::Idle => Ok(()),
        };
        self.state = self.state.next();

        match result {
            Err(_) => AnimationStatus::Error,
            Ok(()) if self.is_complete() => AnimationStatus::Completed,
            Ok(()) => AnimationStatus::Ongoing,
        }
    }

    /// Light `on`, then darken `off` if that worked
    fn switch<T: Transmitter>(transmitter: &mut T, on: Led, off: Led) -> Result<(), Error> {
        transmitter.set_led_brightness(on, LED_ON)?;
        transmitter.set_led_brightness(off, LED_OFF)
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}
