//! Keychron K6 (ISO)
//!
//! 65% RGB board with one SLED1734X at the GND address. The table is
//! laid out as five rows of sixteen positions matching the key matrix;
//! matrix positions without a key keep a slot so indices line up with
//! the scan. Channels are split across column banks: red sits in
//! CA1-CA5 (one bank per row), green in CA6-CA9/CB1, blue in CB2-CB6.

use lychnos_core::led::RgbLed;
use lychnos_drivers::led::sled1734x::{ca, cb, I2C_ADDRESS_GND};

/// Driver chip bus addresses
pub const ADDRESSES: [u8; 1] = [I2C_ADDRESS_GND];

/// Number of logical LEDs (matrix slots, including unpopulated ones)
pub const LED_COUNT: usize = 80;

/// Logical LED index -> driver channel offsets
#[rustfmt::skip]
pub static LEDS: [RgbLed; LED_COUNT] = [
    // Row 1: Esc 1 2 3 4 5 6 7 8 9 0 - = Backspace (gap) Home
    RgbLed::new(0, ca(1, 0),  ca(6, 0),  cb(2, 0)),
    RgbLed::new(0, ca(1, 1),  ca(6, 1),  cb(2, 1)),
    RgbLed::new(0, ca(1, 2),  ca(6, 2),  cb(2, 2)),
    RgbLed::new(0, ca(1, 3),  ca(6, 3),  cb(2, 3)),
    RgbLed::new(0, ca(1, 4),  ca(6, 4),  cb(2, 4)),
    RgbLed::new(0, ca(1, 5),  ca(6, 5),  cb(2, 5)),
    RgbLed::new(0, ca(1, 6),  ca(6, 6),  cb(2, 6)),
    RgbLed::new(0, ca(1, 7),  ca(6, 7),  cb(2, 7)),
    RgbLed::new(0, ca(1, 8),  ca(6, 8),  cb(2, 8)),
    RgbLed::new(0, ca(1, 9),  ca(6, 9),  cb(2, 9)),
    RgbLed::new(0, ca(1, 10), ca(6, 10), cb(2, 10)),
    RgbLed::new(0, ca(1, 11), ca(6, 11), cb(2, 11)),
    RgbLed::new(0, ca(1, 12), ca(6, 12), cb(2, 12)),
    RgbLed::new(0, ca(1, 13), ca(6, 13), cb(2, 13)),
    RgbLed::new(0, ca(1, 14), ca(6, 14), cb(2, 14)),
    RgbLed::new(0, ca(1, 15), ca(6, 15), cb(2, 15)),
    // Row 2: Tab Q W E R T Y U I O P [ ] (gap gap) PgUp
    RgbLed::new(0, ca(2, 0),  ca(7, 0),  cb(3, 0)),
    RgbLed::new(0, ca(2, 1),  ca(7, 1),  cb(3, 1)),
    RgbLed::new(0, ca(2, 2),  ca(7, 2),  cb(3, 2)),
    RgbLed::new(0, ca(2, 3),  ca(7, 3),  cb(3, 3)),
    RgbLed::new(0, ca(2, 4),  ca(7, 4),  cb(3, 4)),
    RgbLed::new(0, ca(2, 5),  ca(7, 5),  cb(3, 5)),
    RgbLed::new(0, ca(2, 6),  ca(7, 6),  cb(3, 6)),
    RgbLed::new(0, ca(2, 7),  ca(7, 7),  cb(3, 7)),
    RgbLed::new(0, ca(2, 8),  ca(7, 8),  cb(3, 8)),
    RgbLed::new(0, ca(2, 9),  ca(7, 9),  cb(3, 9)),
    RgbLed::new(0, ca(2, 10), ca(7, 10), cb(3, 10)),
    RgbLed::new(0, ca(2, 11), ca(7, 11), cb(3, 11)),
    RgbLed::new(0, ca(2, 12), ca(7, 12), cb(3, 12)),
    RgbLed::new(0, ca(2, 13), ca(7, 13), cb(3, 13)),
    RgbLed::new(0, ca(2, 14), ca(7, 14), cb(3, 14)),
    RgbLed::new(0, ca(2, 15), ca(7, 15), cb(3, 15)),
    // Row 3: Caps A S D F G H J K L ; ' # Enter (gap) PgDn
    RgbLed::new(0, ca(3, 0),  ca(8, 0),  cb(4, 0)),
    RgbLed::new(0, ca(3, 1),  ca(8, 1),  cb(4, 1)),
    RgbLed::new(0, ca(3, 2),  ca(8, 2),  cb(4, 2)),
    RgbLed::new(0, ca(3, 3),  ca(8, 3),  cb(4, 3)),
    RgbLed::new(0, ca(3, 4),  ca(8, 4),  cb(4, 4)),
    RgbLed::new(0, ca(3, 5),  ca(8, 5),  cb(4, 5)),
    RgbLed::new(0, ca(3, 6),  ca(8, 6),  cb(4, 6)),
    RgbLed::new(0, ca(3, 7),  ca(8, 7),  cb(4, 7)),
    RgbLed::new(0, ca(3, 8),  ca(8, 8),  cb(4, 8)),
    RgbLed::new(0, ca(3, 9),  ca(8, 9),  cb(4, 9)),
    RgbLed::new(0, ca(3, 10), ca(8, 10), cb(4, 10)),
    RgbLed::new(0, ca(3, 11), ca(8, 11), cb(4, 11)),
    RgbLed::new(0, ca(3, 12), ca(8, 12), cb(4, 12)),
    RgbLed::new(0, ca(3, 13), ca(8, 13), cb(4, 13)),
    RgbLed::new(0, ca(3, 14), ca(8, 14), cb(4, 14)),
    RgbLed::new(0, ca(3, 15), ca(8, 15), cb(4, 15)),
    // Row 4: LShift \ Z X C V B N M , . / RShift (gap) Up Del
    RgbLed::new(0, ca(4, 0),  ca(9, 0),  cb(5, 0)),
    RgbLed::new(0, ca(4, 1),  ca(9, 1),  cb(5, 1)),
    RgbLed::new(0, ca(4, 2),  ca(9, 2),  cb(5, 2)),
    RgbLed::new(0, ca(4, 3),  ca(9, 3),  cb(5, 3)),
    RgbLed::new(0, ca(4, 4),  ca(9, 4),  cb(5, 4)),
    RgbLed::new(0, ca(4, 5),  ca(9, 5),  cb(5, 5)),
    RgbLed::new(0, ca(4, 6),  ca(9, 6),  cb(5, 6)),
    RgbLed::new(0, ca(4, 7),  ca(9, 7),  cb(5, 7)),
    RgbLed::new(0, ca(4, 8),  ca(9, 8),  cb(5, 8)),
    RgbLed::new(0, ca(4, 9),  ca(9, 9),  cb(5, 9)),
    RgbLed::new(0, ca(4, 10), ca(9, 10), cb(5, 10)),
    RgbLed::new(0, ca(4, 11), ca(9, 11), cb(5, 11)),
    RgbLed::new(0, ca(4, 12), ca(9, 12), cb(5, 12)),
    RgbLed::new(0, ca(4, 13), ca(9, 13), cb(5, 13)),
    RgbLed::new(0, ca(4, 14), ca(9, 14), cb(5, 14)),
    RgbLed::new(0, ca(4, 15), ca(9, 15), cb(5, 15)),
    // Row 5: LCtrl LGui LAlt Space RAlt Fn1 Fn2 RCtrl (gaps) Left Down Right
    RgbLed::new(0, ca(5, 0),  cb(1, 0),  cb(6, 0)),
    RgbLed::new(0, ca(5, 1),  cb(1, 1),  cb(6, 1)),
    RgbLed::new(0, ca(5, 2),  cb(1, 2),  cb(6, 2)),
    RgbLed::new(0, ca(5, 3),  cb(1, 3),  cb(6, 3)),
    RgbLed::new(0, ca(5, 4),  cb(1, 4),  cb(6, 4)),
    RgbLed::new(0, ca(5, 5),  cb(1, 5),  cb(6, 5)),
    RgbLed::new(0, ca(5, 6),  cb(1, 6),  cb(6, 6)),
    RgbLed::new(0, ca(5, 7),  cb(1, 7),  cb(6, 7)),
    RgbLed::new(0, ca(5, 8),  cb(1, 8),  cb(6, 8)),
    RgbLed::new(0, ca(5, 9),  cb(1, 9),  cb(6, 9)),
    RgbLed::new(0, ca(5, 10), cb(1, 10), cb(6, 10)),
    RgbLed::new(0, ca(5, 11), cb(1, 11), cb(6, 11)),
    RgbLed::new(0, ca(5, 12), cb(1, 12), cb(6, 12)),
    RgbLed::new(0, ca(5, 13), cb(1, 13), cb(6, 13)),
    RgbLed::new(0, ca(5, 14), cb(1, 14), cb(6, 14)),
    RgbLed::new(0, ca(5, 15), cb(1, 15), cb(6, 15)),
];
