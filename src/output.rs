//! Front panel channel identity
//!
//! Four voltage outputs and four LEDs, paired 1:1. The discriminants are the
//! DAC channel addresses and never change.

const OUTPUT_ADDRESS_1: u8 = 0;
const OUTPUT_ADDRESS_2: u8 = 1;
const OUTPUT_ADDRESS_3: u8 = 2;
const OUTPUT_ADDRESS_4: u8 = 3;

const LED_ADDRESS_1: u8 = 4;
const LED_ADDRESS_2: u8 = 5;
const LED_ADDRESS_3: u8 = 6;
const LED_ADDRESS_4: u8 = 7;

/// Number of voltage outputs (and LEDs) on the front panel
pub const OUTPUT_COUNT: usize = 4;

/// Front panel voltage output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Output {
    Output1 = OUTPUT_ADDRESS_1,
    Output2 = OUTPUT_ADDRESS_2,
    Output3 = OUTPUT_ADDRESS_3,
    Output4 = OUTPUT_ADDRESS_4,
}

/// Front panel LED, one above each output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Led {
    Led1 = LED_ADDRESS_1,
    Led2 = LED_ADDRESS_2,
    Led3 = LED_ADDRESS_3,
    Led4 = LED_ADDRESS_4,
}

/// Distribution an output draws its samples from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Distribution {
    #[default]
    Uniform,
    Normal,
}

impl Output {
    /// All outputs in panel order
    pub const ALL: [Self; OUTPUT_COUNT] =
        [Self::Output1, Self::Output2, Self::Output3, Self::Output4];

    /// DAC channel address
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Zero-based position on the panel
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// LED paired with this output
    pub const fn led(self) -> Led {
        match self {
            Self::Output1 => Led::Led1,
            Self::Output2 => Led::Led2,
            Self::Output3 => Led::Led3,
            Self::Output4 => Led::Led4,
        }
    }
}

impl Led {
    /// All LEDs in panel order
    pub const ALL: [Self; OUTPUT_COUNT] = [Self::Led1, Self::Led2, Self::Led3, Self::Led4];

    /// DAC channel address
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Output this LED sits above
    pub const fn output(self) -> Output {
        match self {
            Self::Led1 => Output::Output1,
            Self::Led2 => Output::Output2,
            Self::Led3 => Output::Output3,
            Self::Led4 => Output::Output4,
        }
    }
}

impl Distribution {
    /// Map a switch level to a distribution: high selects normal
    pub const fn from_switch(is_high: bool) -> Self {
        if is_high { Self::Normal } else { Self::Uniform }
    }
}
