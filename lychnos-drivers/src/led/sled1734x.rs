//! SLED1734X matrix LED driver (RGB)
//!
//! Sonix RGB matrix driver. The register map is split into pages behind
//! a command register: two frame pages (on/off control, blink control,
//! and PWM for half the matrix each), a function page for global
//! configuration, and current/VAF tuning pages.
//!
//! The two frames are awkward to address from a layout table, so the
//! driver keeps a single 256-entry virtual PWM space: offsets 0x00-0x7F
//! live in frame 1, offsets 0x80-0xFF are the same registers in frame 2.
//! Channel helpers ([`ca`], [`cb`]) produce offsets in that space from
//! the column-bank naming used in the datasheet wiring diagrams.
//!
//! Unlike the IS31FL3742A, the command register is not write-locked;
//! selecting a page is a single register write.

use embedded_hal::delay::DelayNs;

use lychnos_core::config::TransportConfig;
use lychnos_core::led::RgbLed;
use lychnos_core::state::{DriverEvent, DriverState};
use lychnos_core::traits::RgbMatrix;
use lychnos_hal::I2cBus;

use super::{write_burst, write_with_retry, SETTLE_DELAY_MS};

/// Control register addresses (outside the paged area)
pub mod reg {
    /// Command register: selects the active page
    pub const COMMAND: u8 = 0xFD;
}

/// Frame 1 page (control + blink + PWM, matrix half A)
pub const PAGE_FRAME_1: u8 = 0x00;
/// Frame 2 page (control + blink + PWM, matrix half B)
pub const PAGE_FRAME_2: u8 = 0x01;
/// Function (global configuration) page
pub const PAGE_FUNCTION: u8 = 0x0B;
/// Per-bank current tuning page
pub const PAGE_CURRENT_TUNE: u8 = 0x0C;
/// VAF tuning page
pub const PAGE_VAF_TUNE: u8 = 0x0D;

/// Function page register addresses
pub mod function {
    /// Sync mode and matrix type
    pub const CONFIGURATION: u8 = 0x00;
    /// Picture display (active frame)
    pub const PICTURE_DISPLAY: u8 = 0x01;
    /// Display option (blink frame and enable)
    pub const DISPLAY_OPTION: u8 = 0x05;
    /// Audio sync enable
    pub const AUDIO_SYNC: u8 = 0x06;
    /// Fade in/out times
    pub const BREATH_CONTROL_1: u8 = 0x08;
    /// Breathe enable
    pub const BREATH_CONTROL_2: u8 = 0x09;
    /// Software shutdown
    pub const SOFTWARE_SHUTDOWN: u8 = 0x0A;
    /// Audio gain control
    pub const AUDIO_GAIN_CONTROL: u8 = 0x0B;
    /// Staggered delay timing
    pub const STAGGERED_DELAY: u8 = 0x0D;
    /// Slew rate control enable
    pub const SLEW_RATE_CONTROL: u8 = 0x0E;
    /// Current control enable
    pub const CURRENT_CONTROL: u8 = 0x0F;
    /// Open/short detection mode
    pub const OPEN_SHORT_1: u8 = 0x10;
    /// Open/short detection interrupt
    pub const OPEN_SHORT_2: u8 = 0x11;
    /// VAF fine tune
    pub const VAF_1: u8 = 0x14;
    /// VAF control
    pub const VAF_2: u8 = 0x15;
    /// Thermal detection
    pub const THERMAL_DETECTION: u8 = 0x17;
    /// Chip ID
    pub const ID: u8 = 0x1B;
}

/// Software shutdown register: shutdown mode
pub const SSD_SHUTDOWN: u8 = 0x00;
/// Software shutdown register: normal operation
pub const SSD_NORMAL: u8 = 0x01;

/// I2C address with AD strapped to GND
pub const I2C_ADDRESS_GND: u8 = 0x74;
/// I2C address with AD strapped to SCL
pub const I2C_ADDRESS_SCL: u8 = 0x75;
/// I2C address with AD strapped to SDA
pub const I2C_ADDRESS_SDA: u8 = 0x76;
/// I2C address with AD strapped to VDDIO
pub const I2C_ADDRESS_VDDIO: u8 = 0x77;

/// Second frame's share of the virtual register spaces
pub const FRAME_OFFSET: u8 = 0x80;
/// First PWM register within a frame page
pub const FRAME_PWM_OFFSET: u8 = 0x20;
/// PWM registers per frame page
pub const FRAME_PWM_COUNT: usize = 128;
/// On/off control registers per frame page
pub const FRAME_CONTROL_COUNT: usize = 16;
/// Registers zeroed per frame during bring-up (control + blink + PWM)
pub const FRAME_REGISTER_COUNT: usize = 0xA0;

/// Size of the virtual PWM space (both frames)
pub const PWM_REGISTER_COUNT: usize = 256;
/// Size of the virtual on/off control space (both frames)
pub const CONTROL_REGISTER_COUNT: usize = 32;
/// Registers in the current tune page (one per column bank)
pub const CURRENT_TUNE_COUNT: usize = 16;

/// Virtual PWM offset for column bank CA1-CA9, row pin A-P (0-15)
///
/// CA9 is the first bank of the second frame.
pub const fn ca(bank: u8, row: u8) -> u8 {
    if bank >= 9 {
        FRAME_OFFSET + (bank - 9) * 16 + row
    } else {
        (bank - 1) * 16 + row
    }
}

/// Virtual PWM offset for column bank CB1-CB7 (second frame, after CA9)
pub const fn cb(bank: u8, row: u8) -> u8 {
    FRAME_OFFSET + bank * 16 + row
}

/// SLED1734X driver configuration
///
/// Field defaults mirror the chip's documented power-on intent: blink,
/// breathe, audio sync and open/short detection off, slew rate control
/// on, current control at its reference value.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sled1734xConfig {
    /// Sync mode (high impedance / master / slave)
    pub sync_mode: u8,
    /// Matrix wiring type
    pub matrix_type: u8,
    /// Blink frame selection and enable
    pub blink_frame: u8,
    /// Audio sync enable
    pub audio_sync: u8,
    /// Fade in/out time
    pub fade_time: u8,
    /// Breathe enable
    pub breathe: u8,
    /// Audio gain mode
    pub audio_gain: u8,
    /// Staggered delay timing
    pub staggered_delay: u8,
    /// Slew rate control enable
    pub slew_rate: u8,
    /// Current control enable
    pub current_control: u8,
    /// Open/short detection mode
    pub open_short_1: u8,
    /// Open/short detection interrupt
    pub open_short_2: u8,
    /// VAF fine tune
    pub vaf_1: u8,
    /// VAF control
    pub vaf_2: u8,
    /// Per-bank current tune table
    pub current_tune: [u8; CURRENT_TUNE_COUNT],
    /// Transport timeout and retry policy
    pub transport: TransportConfig,
    /// Skip control-buffer writes when no bit actually changed
    ///
    /// Off by default: control updates are rare and existing boards
    /// flush them unconditionally.
    pub dedup_control_writes: bool,
}

impl Default for Sled1734xConfig {
    fn default() -> Self {
        Self {
            sync_mode: 0x00,
            matrix_type: 0x10,
            blink_frame: 0x00,
            audio_sync: 0x00,
            fade_time: 0x00,
            breathe: 0x00,
            audio_gain: 0x00,
            staggered_delay: 0x00,
            slew_rate: 0x01,
            current_control: 0xB0,
            open_short_1: 0x00,
            open_short_2: 0x00,
            vaf_1: 0x44,
            vaf_2: 0x04,
            current_tune: [0xFF; CURRENT_TUNE_COUNT],
            transport: TransportConfig::default(),
            dedup_control_writes: false,
        }
    }
}

/// SLED1734X driver state
///
/// Owns the bus handle, the virtual PWM and on/off control buffers, and
/// the dirty flags. `N` is the number of chips on the bus (1-4).
pub struct Sled1734x<BUS, const N: usize> {
    bus: BUS,
    addresses: [u8; N],
    leds: &'static [RgbLed],
    config: Sled1734xConfig,
    state: DriverState,
    pwm: [[u8; PWM_REGISTER_COUNT]; N],
    pwm_dirty: [bool; N],
    control: [[u8; CONTROL_REGISTER_COUNT]; N],
    control_dirty: [bool; N],
}

impl<BUS: I2cBus, const N: usize> Sled1734x<BUS, N> {
    /// Create a driver with the default configuration
    pub fn new(bus: BUS, addresses: [u8; N], leds: &'static [RgbLed]) -> Self {
        Self::with_config(bus, addresses, leds, Sled1734xConfig::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(
        bus: BUS,
        addresses: [u8; N],
        leds: &'static [RgbLed],
        config: Sled1734xConfig,
    ) -> Self {
        Self {
            bus,
            addresses,
            leds,
            config,
            state: DriverState::Uninitialized,
            pwm: [[0; PWM_REGISTER_COUNT]; N],
            pwm_dirty: [false; N],
            control: [[0; CONTROL_REGISTER_COUNT]; N],
            control_dirty: [false; N],
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Sled1734xConfig {
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
    pub fn bus_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    /// Consume the driver and return the bus
    pub fn release(self) -> BUS {
        self.bus
    }

    /// Bring up every configured chip and enable all mapped channels
    ///
    /// Per chip: zero both frame pages (so no channel can light with
    /// power-on garbage), write the function page with software shutdown
    /// released last, push the current tune table, and let the device
    /// settle. Afterwards every channel in the layout table is switched
    /// on in the control registers.
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
            self.set_led_control_register(index, true, true, true);
        }
        self.flush();
    }

    fn init_chip(&mut self, addr: u8, delay: &mut impl DelayNs) -> Result<(), BUS::Error> {
        // Both frames dark before anything global is touched.
        for page in [PAGE_FRAME_1, PAGE_FRAME_2] {
            self.select_page(addr, page)?;
            for register in 0..FRAME_REGISTER_COUNT {
                self.write_register(addr, register as u8, 0x00)?;
            }
        }

        self.select_page(addr, PAGE_FUNCTION)?;
        self.write_register(
            addr,
            function::CONFIGURATION,
            self.config.sync_mode | self.config.matrix_type,
        )?;
        self.write_register(addr, function::PICTURE_DISPLAY, 0x00)?;
        self.write_register(addr, function::DISPLAY_OPTION, self.config.blink_frame)?;
        self.write_register(addr, function::AUDIO_SYNC, self.config.audio_sync)?;
        self.write_register(addr, function::BREATH_CONTROL_1, self.config.fade_time)?;
        self.write_register(addr, function::BREATH_CONTROL_2, self.config.breathe)?;
        self.write_register(addr, function::AUDIO_GAIN_CONTROL, self.config.audio_gain)?;
        self.write_register(addr, function::STAGGERED_DELAY, self.config.staggered_delay)?;
        self.write_register(addr, function::SLEW_RATE_CONTROL, self.config.slew_rate)?;
        self.write_register(addr, function::CURRENT_CONTROL, self.config.current_control)?;
        self.write_register(addr, function::OPEN_SHORT_1, self.config.open_short_1)?;
        self.write_register(addr, function::OPEN_SHORT_2, self.config.open_short_2)?;
        self.write_register(addr, function::VAF_1, self.config.vaf_1)?;
        self.write_register(addr, function::VAF_2, self.config.vaf_2)?;

        self.select_page(addr, PAGE_CURRENT_TUNE)?;
        let tune = self.config.current_tune;
        write_burst(&mut self.bus, &self.config.transport, addr, 0x00, &tune)?;

        // Shutdown released only after everything above is in place.
        self.select_page(addr, PAGE_FUNCTION)?;
        self.write_register(addr, function::SOFTWARE_SHUTDOWN, SSD_NORMAL)?;

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
        self.write_register(addr, reg::COMMAND, page)
    }

    /// Request a color for one logical LED
    ///
    /// Buffered until [`flush`](Self::flush). A value identical on all
    /// three channels does not mark the chip dirty.
    pub fn set_color(&mut self, index: usize, red: u8, green: u8, blue: u8) {
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
        let pwm = &mut self.pwm[chip];
        if pwm[led.r as usize] == red && pwm[led.g as usize] == green && pwm[led.b as usize] == blue
        {
            return;
        }
        pwm[led.r as usize] = red;
        pwm[led.g as usize] = green;
        pwm[led.b as usize] = blue;
        self.pwm_dirty[chip] = true;
    }

    /// Request the same color for every logical LED
    pub fn set_color_all(&mut self, red: u8, green: u8, blue: u8) {
        for index in 0..self.leds.len() {
            self.set_color(index, red, green, blue);
        }
    }

    /// Switch individual channels of one logical LED on or off
    ///
    /// A channel switched off stays dark regardless of its PWM value.
    /// Control updates are rare, so by default they mark the chip dirty
    /// even when no bit changed; see
    /// [`Sled1734xConfig::dedup_control_writes`].
    pub fn set_led_control_register(&mut self, index: usize, red: bool, green: bool, blue: bool) {
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
        let mut changed = false;
        for (offset, on) in [(led.r, red), (led.g, green), (led.b, blue)] {
            let register = (offset / 8) as usize;
            let mask = 1 << (offset % 8);
            let old = self.control[chip][register];
            let new = if on { old | mask } else { old & !mask };
            changed |= new != old;
            self.control[chip][register] = new;
        }
        if changed || !self.config.dedup_control_writes {
            self.control_dirty[chip] = true;
        }
    }

    /// Push dirty buffers to the hardware
    ///
    /// Control registers flush before PWM so a newly enabled channel
    /// shows its current intensity rather than a stale one. Each chip
    /// and buffer kind flushes independently; a failed burst leaves the
    /// buffer dirty for the next flush.
    ///
    /// Blocking; call from an idle context, never from an interrupt.
    pub fn flush(&mut self) {
        if !self.state.accepts_writes() {
            return;
        }
        for chip in 0..N {
            if self.control_dirty[chip] && self.write_control_pages(chip).is_ok() {
                self.control_dirty[chip] = false;
            }
            if self.pwm_dirty[chip] && self.write_pwm_pages(chip).is_ok() {
                self.pwm_dirty[chip] = false;
            }
        }
    }

    /// Put every configured chip into software shutdown
    ///
    /// Register contents survive; [`return_normal`](Self::return_normal)
    /// picks up where the matrix left off.
    pub fn shutdown(&mut self) {
        if !self.state.accepts_writes() {
            return;
        }
        for chip in 0..N {
            let addr = self.addresses[chip];
            let _ = self.write_shutdown_register(addr, SSD_SHUTDOWN);
        }
    }

    /// Bring every configured chip back from software shutdown
    pub fn return_normal(&mut self) {
        if !self.state.accepts_writes() {
            return;
        }
        for chip in 0..N {
            let addr = self.addresses[chip];
            let _ = self.write_shutdown_register(addr, SSD_NORMAL);
        }
    }

    fn write_shutdown_register(&mut self, addr: u8, value: u8) -> Result<(), BUS::Error> {
        self.select_page(addr, PAGE_FUNCTION)?;
        self.write_register(addr, function::SOFTWARE_SHUTDOWN, value)
    }

    fn write_pwm_pages(&mut self, chip: usize) -> Result<(), BUS::Error> {
        let addr = self.addresses[chip];
        self.select_page(addr, PAGE_FRAME_1)?;
        write_burst(
            &mut self.bus,
            &self.config.transport,
            addr,
            FRAME_PWM_OFFSET,
            &self.pwm[chip][..FRAME_PWM_COUNT],
        )?;
        self.select_page(addr, PAGE_FRAME_2)?;
        write_burst(
            &mut self.bus,
            &self.config.transport,
            addr,
            FRAME_PWM_OFFSET,
            &self.pwm[chip][FRAME_PWM_COUNT..],
        )
    }

    fn write_control_pages(&mut self, chip: usize) -> Result<(), BUS::Error> {
        let addr = self.addresses[chip];
        self.select_page(addr, PAGE_FRAME_1)?;
        write_burst(
            &mut self.bus,
            &self.config.transport,
            addr,
            0x00,
            &self.control[chip][..FRAME_CONTROL_COUNT],
        )?;
        self.select_page(addr, PAGE_FRAME_2)?;
        write_burst(
            &mut self.bus,
            &self.config.transport,
            addr,
            0x00,
            &self.control[chip][FRAME_CONTROL_COUNT..],
        )
    }
}

impl<BUS: I2cBus, const N: usize> RgbMatrix for Sled1734x<BUS, N> {
    fn led_count(&self) -> usize {
        self.leds.len()
    }

    fn set_color(&mut self, index: usize, red: u8, green: u8, blue: u8) {
        Sled1734x::set_color(self, index, red, green, blue);
    }

    fn set_color_all(&mut self, red: u8, green: u8, blue: u8) {
        Sled1734x::set_color_all(self, red, green, blue);
    }

    fn flush(&mut self) {
        Sled1734x::flush(self);
    }
}
