//! MagicRefiner MK14
//!
//! 68-key 65% ANSI board with single-color per-key backlight. One
//! IS31FL3742A at the GND address; offsets follow the SW row / CS
//! column wiring, one SW line per key row.

use lychnos_core::led::Led;
use lychnos_drivers::led::is31fl3742a::{sw_cs, I2C_ADDRESS_GND};

/// Driver chip bus addresses
pub const ADDRESSES: [u8; 1] = [I2C_ADDRESS_GND];

/// Number of logical LEDs
pub const LED_COUNT: usize = 68;

/// Logical LED index -> driver register offset
#[rustfmt::skip]
pub static LEDS: [Led; LED_COUNT] = [
    // Esc  1 .. =  Backspace  Pause
    Led::new(0, sw_cs(1, 1)),  Led::new(0, sw_cs(1, 2)),  Led::new(0, sw_cs(1, 3)),
    Led::new(0, sw_cs(1, 4)),  Led::new(0, sw_cs(1, 5)),  Led::new(0, sw_cs(1, 6)),
    Led::new(0, sw_cs(1, 7)),  Led::new(0, sw_cs(1, 8)),  Led::new(0, sw_cs(1, 9)),
    Led::new(0, sw_cs(1, 10)), Led::new(0, sw_cs(1, 11)), Led::new(0, sw_cs(1, 12)),
    Led::new(0, sw_cs(1, 13)), Led::new(0, sw_cs(1, 14)), Led::new(0, sw_cs(1, 15)),
    // Tab  Q .. ]  Backslash  PgUp
    Led::new(0, sw_cs(2, 1)),  Led::new(0, sw_cs(2, 2)),  Led::new(0, sw_cs(2, 3)),
    Led::new(0, sw_cs(2, 4)),  Led::new(0, sw_cs(2, 5)),  Led::new(0, sw_cs(2, 6)),
    Led::new(0, sw_cs(2, 7)),  Led::new(0, sw_cs(2, 8)),  Led::new(0, sw_cs(2, 9)),
    Led::new(0, sw_cs(2, 10)), Led::new(0, sw_cs(2, 11)), Led::new(0, sw_cs(2, 12)),
    Led::new(0, sw_cs(2, 13)), Led::new(0, sw_cs(2, 14)), Led::new(0, sw_cs(2, 15)),
    // Caps  A .. '  Enter  PgDn
    Led::new(0, sw_cs(3, 1)),  Led::new(0, sw_cs(3, 2)),  Led::new(0, sw_cs(3, 3)),
    Led::new(0, sw_cs(3, 4)),  Led::new(0, sw_cs(3, 5)),  Led::new(0, sw_cs(3, 6)),
    Led::new(0, sw_cs(3, 7)),  Led::new(0, sw_cs(3, 8)),  Led::new(0, sw_cs(3, 9)),
    Led::new(0, sw_cs(3, 10)), Led::new(0, sw_cs(3, 11)), Led::new(0, sw_cs(3, 12)),
    Led::new(0, sw_cs(3, 13)), Led::new(0, sw_cs(3, 14)),
    // LShift  Z .. /  RShift  Up  Del
    Led::new(0, sw_cs(4, 1)),  Led::new(0, sw_cs(4, 2)),  Led::new(0, sw_cs(4, 3)),
    Led::new(0, sw_cs(4, 4)),  Led::new(0, sw_cs(4, 5)),  Led::new(0, sw_cs(4, 6)),
    Led::new(0, sw_cs(4, 7)),  Led::new(0, sw_cs(4, 8)),  Led::new(0, sw_cs(4, 9)),
    Led::new(0, sw_cs(4, 10)), Led::new(0, sw_cs(4, 11)), Led::new(0, sw_cs(4, 12)),
    Led::new(0, sw_cs(4, 13)), Led::new(0, sw_cs(4, 14)),
    // LCtrl  LGui  LAlt  Space  RAlt  Fn  RGui  Left  Down  Right
    Led::new(0, sw_cs(5, 1)),  Led::new(0, sw_cs(5, 2)),  Led::new(0, sw_cs(5, 3)),
    Led::new(0, sw_cs(5, 4)),  Led::new(0, sw_cs(5, 5)),  Led::new(0, sw_cs(5, 6)),
    Led::new(0, sw_cs(5, 7)),  Led::new(0, sw_cs(5, 8)),  Led::new(0, sw_cs(5, 9)),
    Led::new(0, sw_cs(5, 10)),
];
