//! I2C LED matrix drivers
//!
//! Both supported chips follow the same shape: a command register selects
//! a page (an internal register bank), and the function-specific
//! registers are addressed within the selected page. The drivers keep a
//! shadow buffer per chip and page kind, mark it dirty on change, and
//! push dirty buffers with chunked burst writes on flush.
//!
//! Everything on this path is best-effort. A write that still fails
//! after the configured retries is dropped; the buffer stays dirty so
//! the next flush tries again.

pub mod is31fl3742a;
pub mod sled1734x;

pub use is31fl3742a::Is31fl3742a;
pub use sled1734x::Sled1734x;

use lychnos_core::config::TransportConfig;
use lychnos_hal::I2cBus;

/// Data bytes per burst transaction
///
/// The transport has a maximum transaction size; 16 data bytes plus the
/// start register keeps every transfer within it.
pub const BURST_CHUNK: usize = 16;

/// Settle time after releasing software shutdown, before the device is
/// guaranteed ready
pub(crate) const SETTLE_DELAY_MS: u32 = 10;

/// One write transaction, retried per the transport policy
///
/// Exhaustion returns the last error; callers on the LED path drop it
/// and leave the affected buffer dirty for the next flush.
pub(crate) fn write_with_retry<BUS: I2cBus>(
    bus: &mut BUS,
    transport: &TransportConfig,
    address: u8,
    data: &[u8],
) -> Result<(), BUS::Error> {
    let mut remaining = transport.retries;
    loop {
        match bus.write(address, data, transport.timeout_ms) {
            Ok(()) => return Ok(()),
            Err(err) => {
                if remaining == 0 {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("i2c write to {=u8:#x} dropped", address);
                    return Err(err);
                }
                remaining -= 1;
            }
        }
    }
}

/// Burst-write a consecutive register range in [`BURST_CHUNK`] pieces
///
/// The device auto-increments its internal register pointer after the
/// first byte of a transaction, so each chunk lands in consecutive
/// registers starting at its offset.
pub(crate) fn write_burst<BUS: I2cBus>(
    bus: &mut BUS,
    transport: &TransportConfig,
    address: u8,
    start_register: u8,
    data: &[u8],
) -> Result<(), BUS::Error> {
    let mut frame = [0u8; BURST_CHUNK + 1];
    for (i, chunk) in data.chunks(BURST_CHUNK).enumerate() {
        frame[0] = start_register + (i * BURST_CHUNK) as u8;
        frame[1..=chunk.len()].copy_from_slice(chunk);
        write_with_retry(bus, transport, address, &frame[..=chunk.len()])?;
    }
    Ok(())
}
