//! I2C bus abstractions
//!
//! Provides the trait for I2C master writes that chip-specific HALs
//! implement. The LED matrix controllers Lychnos drives are configured
//! over a write-only control path, so no read operation is defined.

/// I2C bus master
///
/// A single blocking write primitive is all the LED drivers need: every
/// register access is "address the device, push a few bytes, stop".
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// Blocks until the transaction completes, fails (NACK), or the
    /// timeout elapses. Implementations that cannot bound a transaction
    /// in time may ignore `timeout_ms` and rely on bus-level recovery.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write (register address first, then payload)
    /// * `timeout_ms` - Upper bound on the transaction duration
    fn write(&mut self, address: u8, data: &[u8], timeout_ms: u32) -> Result<(), Self::Error>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}
