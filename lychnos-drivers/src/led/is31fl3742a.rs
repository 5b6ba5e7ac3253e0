//! IS31FL3742A matrix LED driver (single-color)
//!
//! Lumissil 30x6 matrix driver used for per-key white backlight. The
//! chip exposes three pages behind a command register:
//!
//! - PWM: 180 intensity registers, one per matrix crossing
//! - Scaling: 180 per-LED current scale registers
//! - Function: global configuration (pull resistors, current, frequency)
//!
//! Selecting a page is a two-step: the command register is write-locked
//! and must be unlocked with a magic byte immediately before each
//! select. Within a page the register pointer auto-increments, which is
//! what makes the chunked burst flush possible.
//!
//! Up to four chips share a bus, distinguished by the ADDR pin strapping.

use embedded_hal::delay::DelayNs;

use lychnos_core::config::TransportConfig;
use lychnos_core::led::Led;
use lychnos_core::state::{DriverEvent, DriverState};
use lychnos_core::traits::LedMatrix;
use lychnos_hal::I2cBus;

use super::{write_burst, write_with_retry, SETTLE_DELAY_MS};

/// Control register addresses (outside the paged area)
pub mod reg {
    /// Command register: selects the active page
    pub const COMMAND: u8 = 0xFD;
    /// Command register write lock
    pub const COMMAND_WRITE_LOCK: u8 = 0xFE;
}

/// Unlocks the command register for a single write
pub const COMMAND_WRITE_LOCK_MAGIC: u8 = 0xC5;

/// PWM intensity page
pub const PAGE_PWM: u8 = 0x00;
/// Current scaling page
pub const PAGE_SCALING: u8 = 0x02;
/// Function (global configuration) page
pub const PAGE_FUNCTION: u8 = 0x04;

/// Function page register addresses
pub mod function {
    /// Operating mode and open/short detection
    pub const CONFIGURATION: u8 = 0x00;
    /// Global current control
    pub const GLOBAL_CURRENT: u8 = 0x01;
    /// SWy pull-down / CSx pull-up strengths
    pub const PULLDOWNUP: u8 = 0x02;
    /// PWM frequency setting
    pub const PWM_FREQUENCY: u8 = 0x36;
    /// Reset register (read clears all registers)
    pub const RESET: u8 = 0x3F;
}

/// I2C address with ADDR strapped to GND
pub const I2C_ADDRESS_GND: u8 = 0x30;
/// I2C address with ADDR strapped to SCL
pub const I2C_ADDRESS_SCL: u8 = 0x31;
/// I2C address with ADDR strapped to SDA
pub const I2C_ADDRESS_SDA: u8 = 0x32;
/// I2C address with ADDR strapped to VCC
pub const I2C_ADDRESS_VCC: u8 = 0x33;

/// Registers in the PWM page
pub const PWM_REGISTER_COUNT: usize = 180;
/// Registers in the scaling page
pub const SCALING_REGISTER_COUNT: usize = 180;

/// Register offset for the SWx/CSy matrix crossing (1-based, as printed
/// in the datasheet wiring diagrams: SW1-SW6, CS1-CS30)
pub const fn sw_cs(sw: u8, cs: u8) -> u8 {
    (sw - 1) * 30 + (cs - 1)
}

/// Pull resistor strength for the matrix pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullStrength {
    /// No resistor
    None = 0b000,
    /// 0.5 kOhm
    R0k5 = 0b001,
    /// 1 kOhm
    R1k = 0b010,
    /// 2 kOhm
    R2k = 0b011,
    /// 4 kOhm
    R4k = 0b100,
    /// 8 kOhm
    #[default]
    R8k = 0b101,
    /// 16 kOhm
    R16k = 0b110,
    /// 32 kOhm
    R32k = 0b111,
}

impl PullStrength {
    /// Register bit pattern
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// PWM frequency setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmFrequency {
    /// 29 kHz
    #[default]
    F29kHz = 0b0000,
    /// 3.6 kHz
    F3k6Hz = 0b0011,
    /// 1.8 kHz
    F1k8Hz = 0b0111,
    /// 900 Hz
    F900Hz = 0b1011,
}

impl PwmFrequency {
    /// Register bit pattern (the low three bits select the divider)
    pub const fn bits(self) -> u8 {
        (self as u8) & 0b0111
    }
}

/// IS31FL3742A driver configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Is31fl3742aConfig {
    /// Configuration register value (normal operation, OSD off)
    pub configuration: u8,
    /// Global current control (0x00-0xFF)
    pub global_current: u8,
    /// SWy pull-down resistor strength
    pub sw_pulldown: PullStrength,
    /// CSx pull-up resistor strength
    pub cs_pullup: PullStrength,
    /// PWM frequency
    pub pwm_frequency: PwmFrequency,
    /// Transport timeout and retry policy
    pub transport: TransportConfig,
    /// Skip scaling-buffer writes when the value is unchanged
    ///
    /// PWM writes always skip; scaling writes historically do not.
    /// Off by default to keep the flush behavior of existing boards.
    pub dedup_scaling_writes: bool,
}

impl Default for Is31fl3742aConfig {
    fn default() -> Self {
        Self {
            configuration: 0x31,
            global_current: 0xFF,
            sw_pulldown: PullStrength::R8k,
            cs_pullup: PullStrength::R8k,
            pwm_frequency: PwmFrequency::F29kHz,
            transport: TransportConfig::default(),
            dedup_scaling_writes: false,
        }
    }
}

/// IS31FL3742A driver state
///
/// Owns the bus handle, the per-chip shadow buffers, and the dirty
/// flags. `N` is the number of chips on the bus (1-4).
pub struct Is31fl3742a<BUS, const N: usize> {
    bus: BUS,
    addresses: [u8; N],
    leds: &'static [Led],
    config: Is31fl3742aConfig,
    state: DriverState,
    pwm: [[u8; PWM_REGISTER_COUNT]; N],
    pwm_dirty: [bool; N],
    scaling: [[u8; SCALING_REGISTER_COUNT]; N],
    scaling_dirty: [bool; N],
}

impl<BUS: I2cBus, const N: usize> Is31fl3742a<BUS, N> {
    /// Create a driver with the default configuration
    pub fn new(bus: BUS, addresses: [u8; N], leds: &'static [Led]) -> Self {
        Self::with_config(bus, addresses, leds, Is31fl3742aConfig::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(
        bus: BUS,
        addresses: [u8; N],
        leds: &'static [Led],
        config: Is31fl3742aConfig,
    ) -> Self {
        Self {
            bus,
            addresses,
            leds,
            config,
            state: DriverState::Uninitialized,
            pwm: [[0; PWM_REGISTER_COUNT]; N],
            pwm_dirty: [false; N],
            scaling: [[0; SCALING_REGISTER_COUNT]; N],
            scaling_dirty: [false; N],
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Is31fl3742aConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Access the underlying bus
    pub fn bus(&self) -> &BUS {
        &self.bus
    }

    /// Mutable access to the underlying bus
    ///
    /// Safe at any point: every flush re-selects the page it writes to,
    /// so a perturbed page selection cannot corrupt later flushes.
    pub fn bus_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    /// Consume the driver and return the bus
    pub fn release(self) -> BUS {
        self.bus
    }

    /// Bring up every configured chip and open the scaling registers
    ///
    /// Per chip: zero the scaling page (nothing may light at an
    /// uncontrolled current), zero the PWM page, then write the global
    /// settings with software shutdown released last, and let the
    /// device settle. Afterwards all scaling registers are pushed to
    /// full so PWM alone decides brightness.
    ///
    /// Transport failures during bring-up abort that chip's sequence
    /// and are dropped; the chip will simply stay dark.
    pub fn init(&mut self, delay: &mut impl DelayNs) {
        if self.state != DriverState::Uninitialized {
            return;
        }
        self.state = self.state.transition(DriverEvent::ConfigureStart);

        for chip in 0..N {
            let _ = self.init_chip(self.addresses[chip], delay);
        }

        self.state = self.state.transition(DriverEvent::ConfigureDone);

        for index in 0..self.leds.len() {
            self.set_scaling_register(index, 0xFF);
        }
        self.flush();
    }

    fn init_chip(&mut self, addr: u8, delay: &mut impl DelayNs) -> Result<(), BUS::Error> {
        // Scaling first: a stray scaling value could drive an LED at
        // full current the moment shutdown is released.
        self.select_page(addr, PAGE_SCALING)?;
        for register in 0..SCALING_REGISTER_COUNT {
            self.write_register(addr, register as u8, 0x00)?;
        }

        self.select_page(addr, PAGE_PWM)?;
        for register in 0..PWM_REGISTER_COUNT {
            self.write_register(addr, register as u8, 0x00)?;
        }

        // Global settings last, releasing software shutdown at the end.
        self.select_page(addr, PAGE_FUNCTION)?;
        self.write_register(
            addr,
            function::PULLDOWNUP,
            (self.config.sw_pulldown.bits() << 4) | self.config.cs_pullup.bits(),
        )?;
        self.write_register(addr, function::GLOBAL_CURRENT, self.config.global_current)?;
        self.write_register(addr, function::PWM_FREQUENCY, self.config.pwm_frequency.bits())?;
        self.write_register(addr, function::CONFIGURATION, self.config.configuration)?;

        // Wait for the device to wake before the first real writes.
        delay.delay_ms(SETTLE_DELAY_MS);
        Ok(())
    }

    fn write_register(&mut self, addr: u8, register: u8, value: u8) -> Result<(), BUS::Error> {
        write_with_retry(
            &mut self.bus,
            &self.config.transport,
            addr,
            &[register, value],
        )
    }

    fn select_page(&mut self, addr: u8, page: u8) -> Result<(), BUS::Error> {
        self.write_register(addr, reg::COMMAND_WRITE_LOCK, COMMAND_WRITE_LOCK_MAGIC)?;
        self.write_register(addr, reg::COMMAND, page)
    }

    /// Request an intensity for one logical LED
    ///
    /// Buffered until [`flush`](Self::flush). Unchanged values do not
    /// mark the chip dirty, so an idle scan loop that keeps writing the
    /// same frame causes no bus traffic.
    pub fn set_value(&mut self, index: usize, value: u8) {
        if !self.state.accepts_writes() {
            return;
        }
        let led = match self.leds.get(index) {
            Some(led) => *led,
            None => return,
        };
        let chip = led.driver as usize;
        if chip >= N {
            return;
        }
        if self.pwm[chip][led.offset as usize] == value {
            return;
        }
        self.pwm[chip][led.offset as usize] = value;
        self.pwm_dirty[chip] = true;
    }

    /// Request the same intensity for every logical LED
    pub fn set_value_all(&mut self, value: u8) {
        for index in 0..self.leds.len() {
            self.set_value(index, value);
        }
    }

    /// Set the current scale for one logical LED
    ///
    /// Scaling changes are rare (usually once at bring-up), so by
    /// default they mark the chip dirty even when the value is
    /// unchanged; see [`Is31fl3742aConfig::dedup_scaling_writes`].
    pub fn set_scaling_register(&mut self, index: usize, value: u8) {
        if !self.state.accepts_writes() {
            return;
        }
        let led = match self.leds.get(index) {
            Some(led) => *led,
            None => return,
        };
        let chip = led.driver as usize;
        if chip >= N {
            return;
        }
        if self.config.dedup_scaling_writes && self.scaling[chip][led.offset as usize] == value {
            return;
        }
        self.scaling[chip][led.offset as usize] = value;
        self.scaling_dirty[chip] = true;
    }

    /// Push dirty buffers to the hardware
    ///
    /// Each chip and buffer kind flushes independently: a change on one
    /// chip causes no I/O on the others. A buffer whose burst fails
    /// stays dirty and is retried on the next flush.
    ///
    /// Blocking; call from an idle context, never from an interrupt.
    pub fn flush(&mut self) {
        if !self.state.accepts_writes() {
            return;
        }
        for chip in 0..N {
            if self.pwm_dirty[chip] && self.write_pwm_page(chip).is_ok() {
                self.pwm_dirty[chip] = false;
            }
            if self.scaling_dirty[chip] && self.write_scaling_page(chip).is_ok() {
                self.scaling_dirty[chip] = false;
            }
        }
    }

    fn write_pwm_page(&mut self, chip: usize) -> Result<(), BUS::Error> {
        let addr = self.addresses[chip];
        self.select_page(addr, PAGE_PWM)?;
        write_burst(
            &mut self.bus,
            &self.config.transport,
            addr,
            0x00,
            &self.pwm[chip],
        )
    }

    fn write_scaling_page(&mut self, chip: usize) -> Result<(), BUS::Error> {
        let addr = self.addresses[chip];
        self.select_page(addr, PAGE_SCALING)?;
        write_burst(
            &mut self.bus,
            &self.config.transport,
            addr,
            0x00,
            &self.scaling[chip],
        )
    }
}

impl<BUS: I2cBus, const N: usize> LedMatrix for Is31fl3742a<BUS, N> {
    fn led_count(&self) -> usize {
        self.leds.len()
    }

    fn set_value(&mut self, index: usize, value: u8) {
        Is31fl3742a::set_value(self, index, value);
    }

    fn set_value_all(&mut self, value: u8) {
        Is31fl3742a::set_value_all(self, value);
    }

    fn flush(&mut self) {
        Is31fl3742a::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::led::mockbus::{MockBus, MockDelay};
    use crate::led::BURST_CHUNK;

    const ADDR: u8 = I2C_ADDRESS_GND;

    static LEDS: [Led; 4] = [
        Led::new(0, sw_cs(1, 1)),
        Led::new(0, sw_cs(1, 2)),
        Led::new(0, sw_cs(2, 1)),
        Led::new(0, sw_cs(6, 30)),
    ];

    const fn full_layout() -> [Led; PWM_REGISTER_COUNT] {
        let mut leds = [Led::new(0, 0); PWM_REGISTER_COUNT];
        let mut i = 0;
        while i < PWM_REGISTER_COUNT {
            leds[i] = Led::new(0, i as u8);
            i += 1;
        }
        leds
    }

    static FULL_LEDS: [Led; PWM_REGISTER_COUNT] = full_layout();

    fn init_driver(leds: &'static [Led]) -> Is31fl3742a<MockBus<1>, 1> {
        let mut driver = Is31fl3742a::new(MockBus::new([ADDR], true), [ADDR], leds);
        driver.init(&mut MockDelay::default());
        driver
    }

    #[test]
    fn test_sw_cs_offsets() {
        assert_eq!(sw_cs(1, 1), 0);
        assert_eq!(sw_cs(1, 30), 29);
        assert_eq!(sw_cs(2, 1), 30);
        assert_eq!(sw_cs(6, 30), 179);
    }

    #[test]
    fn test_writes_before_init_are_ignored() {
        let mut driver = Is31fl3742a::new(MockBus::new([ADDR], true), [ADDR], &LEDS);

        driver.set_value(0, 128);
        driver.set_scaling_register(0, 0x80);
        driver.flush();

        assert_eq!(driver.bus().transactions, 0);
        assert!(!driver.pwm_dirty[0]);
        assert!(!driver.scaling_dirty[0]);
        assert_eq!(driver.pwm[0][0], 0);
    }

    #[test]
    fn test_init_page_order_and_device_state() {
        let driver = init_driver(&LEDS);
        let bus = driver.bus();

        // Bring-up touches scaling, then PWM, then function; the final
        // scaling entry is the post-activation full-scale flush.
        assert_eq!(
            bus.page_trace.as_slice(),
            &[
                (ADDR, PAGE_SCALING),
                (ADDR, PAGE_PWM),
                (ADDR, PAGE_FUNCTION),
                (ADDR, PAGE_SCALING),
            ]
        );

        let chip = bus.chip(ADDR);
        // Page selects while locked would be swallowed by the hardware.
        assert_eq!(chip.locked_page_writes, 0);

        for register in 0..PWM_REGISTER_COUNT as u8 {
            assert_eq!(chip.reg(PAGE_PWM, register), 0x00);
        }
        // Scaling opens to full scale for mapped LEDs; crossings with no
        // LED behind them stay at the zero written during bring-up.
        for led in &LEDS {
            assert_eq!(chip.reg(PAGE_SCALING, led.offset), 0xFF);
        }
        assert_eq!(chip.reg(PAGE_SCALING, sw_cs(1, 10)), 0x00);
        assert_eq!(chip.reg(PAGE_FUNCTION, function::CONFIGURATION), 0x31);
        assert_eq!(chip.reg(PAGE_FUNCTION, function::GLOBAL_CURRENT), 0xFF);
        assert_eq!(chip.reg(PAGE_FUNCTION, function::PULLDOWNUP), 0x55);
        assert_eq!(chip.reg(PAGE_FUNCTION, function::PWM_FREQUENCY), 0b000);

        assert_eq!(driver.state(), DriverState::Active);
    }

    #[test]
    fn test_set_value_roundtrip() {
        let mut driver = init_driver(&LEDS);
        driver.bus_mut().reset_counters();

        driver.set_value(3, 200);
        assert_eq!(driver.pwm[0][sw_cs(6, 30) as usize], 200);
        assert!(driver.pwm_dirty[0]);
        // Nothing on the bus until flush.
        assert_eq!(driver.bus().transactions, 0);

        driver.flush();
        assert!(!driver.pwm_dirty[0]);
        assert_eq!(driver.bus().chip(ADDR).reg(PAGE_PWM, sw_cs(6, 30)), 200);
    }

    #[test]
    fn test_unchanged_value_does_not_mark_dirty() {
        let mut driver = init_driver(&LEDS);

        driver.set_value(0, 128);
        driver.flush();
        assert!(!driver.pwm_dirty[0]);

        driver.bus_mut().reset_counters();
        driver.set_value(0, 128);
        assert!(!driver.pwm_dirty[0]);
        driver.flush();
        assert_eq!(driver.bus().transactions, 0);
    }

    #[test]
    fn test_flush_without_changes_is_free() {
        let mut driver = init_driver(&LEDS);
        driver.bus_mut().reset_counters();

        driver.flush();
        assert_eq!(driver.bus().attempts, 0);
    }

    #[test]
    fn test_out_of_range_index_is_a_noop() {
        let mut driver = init_driver(&LEDS);
        driver.bus_mut().reset_counters();

        driver.set_value(LEDS.len(), 77);
        driver.set_scaling_register(usize::MAX, 77);

        assert!(!driver.pwm_dirty[0]);
        assert!(!driver.scaling_dirty[0]);
        assert!(driver.pwm[0].iter().all(|&v| v == 0));
        driver.flush();
        assert_eq!(driver.bus().transactions, 0);
    }

    #[test]
    fn test_full_page_flush_transaction_count() {
        let mut driver = init_driver(&FULL_LEDS);
        driver.bus_mut().reset_counters();

        driver.set_value(0, 128);
        driver.flush();

        // Unlock + page select, then ceil(180 / 16) = 12 bursts.
        let bursts = PWM_REGISTER_COUNT.div_ceil(BURST_CHUNK);
        assert_eq!(bursts, 12);
        assert_eq!(driver.bus().transactions, 2 + bursts);

        let chip = driver.bus().chip(ADDR);
        assert_eq!(chip.reg(PAGE_PWM, 0), 128);
        assert!((1..PWM_REGISTER_COUNT as u8).all(|r| chip.reg(PAGE_PWM, r) == 0));
    }

    #[test]
    fn test_set_value_all() {
        let mut driver = init_driver(&FULL_LEDS);
        driver.set_value_all(42);
        driver.flush();

        let chip = driver.bus().chip(ADDR);
        assert!((0..PWM_REGISTER_COUNT as u8).all(|r| chip.reg(PAGE_PWM, r) == 42));
    }

    #[test]
    fn test_flush_touches_only_dirty_chips() {
        static TWO_CHIP_LEDS: [Led; 2] = [Led::new(0, 0), Led::new(1, 0)];
        let addrs = [I2C_ADDRESS_GND, I2C_ADDRESS_SCL];
        let mut driver: Is31fl3742a<MockBus<2>, 2> =
            Is31fl3742a::new(MockBus::new(addrs, true), addrs, &TWO_CHIP_LEDS);
        driver.init(&mut MockDelay::default());

        // Every chip got the full bring-up sequence, in address order.
        assert_eq!(
            driver.bus().page_trace.as_slice(),
            &[
                (I2C_ADDRESS_GND, PAGE_SCALING),
                (I2C_ADDRESS_GND, PAGE_PWM),
                (I2C_ADDRESS_GND, PAGE_FUNCTION),
                (I2C_ADDRESS_SCL, PAGE_SCALING),
                (I2C_ADDRESS_SCL, PAGE_PWM),
                (I2C_ADDRESS_SCL, PAGE_FUNCTION),
                (I2C_ADDRESS_GND, PAGE_SCALING),
                (I2C_ADDRESS_SCL, PAGE_SCALING),
            ]
        );
        driver.bus_mut().reset_counters();

        driver.set_value(1, 9);
        driver.flush();

        // Only the second chip saw traffic.
        assert!(driver
            .bus()
            .page_trace
            .iter()
            .all(|&(addr, _)| addr == I2C_ADDRESS_SCL));
        assert_eq!(driver.bus().chip(I2C_ADDRESS_SCL).reg(PAGE_PWM, 0), 9);
        assert_eq!(driver.bus().chip(I2C_ADDRESS_GND).reg(PAGE_PWM, 0), 0);
        assert_eq!(driver.pwm_dirty, [false, false]);
    }

    #[test]
    fn test_scaling_writes_do_not_dedup_by_default() {
        let mut driver = init_driver(&LEDS);

        // Init left every scaling register at 0xFF; writing 0xFF again
        // still marks the chip dirty.
        driver.set_scaling_register(0, 0xFF);
        assert!(driver.scaling_dirty[0]);
    }

    #[test]
    fn test_scaling_dedup_opt_in() {
        let config = Is31fl3742aConfig {
            dedup_scaling_writes: true,
            ..Default::default()
        };
        let mut driver =
            Is31fl3742a::with_config(MockBus::new([ADDR], true), [ADDR], &LEDS, config);
        driver.init(&mut MockDelay::default());

        driver.set_scaling_register(0, 0xFF);
        assert!(!driver.scaling_dirty[0]);

        driver.set_scaling_register(0, 0x80);
        assert!(driver.scaling_dirty[0]);
    }

    #[test]
    fn test_failed_flush_keeps_buffer_dirty() {
        let mut driver = init_driver(&LEDS);
        driver.set_value(0, 5);

        // First attempt dies at the page unlock; no retries configured.
        driver.bus_mut().fail_next = 1;
        driver.flush();
        assert!(driver.pwm_dirty[0]);
        assert_ne!(driver.bus().chip(ADDR).reg(PAGE_PWM, 0), 5);

        // Next flush goes through.
        driver.flush();
        assert!(!driver.pwm_dirty[0]);
        assert_eq!(driver.bus().chip(ADDR).reg(PAGE_PWM, 0), 5);
    }

    #[test]
    fn test_retries_absorb_transient_failures() {
        let config = Is31fl3742aConfig {
            transport: TransportConfig::with_retries(2),
            ..Default::default()
        };
        let mut driver =
            Is31fl3742a::with_config(MockBus::new([ADDR], true), [ADDR], &LEDS, config);
        driver.init(&mut MockDelay::default());

        driver.set_value(0, 5);
        driver.bus_mut().reset_counters();
        driver.bus_mut().fail_next = 2;
        driver.flush();

        assert!(!driver.pwm_dirty[0]);
        assert_eq!(driver.bus().chip(ADDR).reg(PAGE_PWM, 0), 5);
        assert_eq!(driver.bus().attempts, driver.bus().transactions + 2);
    }

    #[test]
    fn test_transport_timeout_reaches_the_bus() {
        let driver = init_driver(&LEDS);
        assert_eq!(driver.bus().last_timeout_ms, 100);
    }

    // The trait surface is what upper layers (indicator logic, host
    // lighting control) program against.
    fn dim_everything(matrix: &mut impl LedMatrix) {
        matrix.set_value_all(0x10);
        matrix.flush();
    }

    #[test]
    fn test_usable_through_trait() {
        let mut driver = init_driver(&LEDS);
        dim_everything(&mut driver);
        assert_eq!(driver.bus().chip(ADDR).reg(PAGE_PWM, sw_cs(1, 1)), 0x10);
        assert_eq!(LedMatrix::led_count(&driver), LEDS.len());
    }
}
