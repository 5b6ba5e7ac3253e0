//! Per-keyboard board definitions
//!
//! One module per supported keyboard: the LED driver chip addresses and
//! the static layout table translating logical LED indices into chip
//! register offsets. Tables are plain data; the tests below them check
//! the invariants the drivers rely on (driver indices in range, no two
//! LEDs sharing a register).

#![no_std]
#![deny(unsafe_code)]

pub mod k6_iso;
pub mod mk14;
