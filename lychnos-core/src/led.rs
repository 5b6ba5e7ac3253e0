//! LED location descriptors
//!
//! Keyboards address LEDs by a logical index (0..LED_COUNT); the driver
//! chips address them by a register offset within a chip-internal page.
//! Board definitions provide one descriptor per logical LED to translate
//! between the two. The tables are plain `&'static` slices, fixed at
//! build time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Location of a single-color LED
///
/// `driver` selects the physical chip (index into the driver's address
/// list, not the I2C address itself); `offset` is the register index
/// within that chip's PWM page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Led {
    /// Driver chip index (0-3)
    pub driver: u8,
    /// Register offset within the chip's PWM page
    pub offset: u8,
}

impl Led {
    /// Create a new LED descriptor
    pub const fn new(driver: u8, offset: u8) -> Self {
        Self { driver, offset }
    }
}

/// Location of an RGB LED
///
/// Each color channel sinks through its own output pin, so one logical
/// LED owns three register offsets. The channels of one key routinely
/// land in different register banks; nothing requires them to be
/// adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RgbLed {
    /// Driver chip index (0-3)
    pub driver: u8,
    /// Red channel register offset
    pub r: u8,
    /// Green channel register offset
    pub g: u8,
    /// Blue channel register offset
    pub b: u8,
}

impl RgbLed {
    /// Create a new RGB LED descriptor
    pub const fn new(driver: u8, r: u8, g: u8, b: u8) -> Self {
        Self { driver, r, g, b }
    }
}
