//! Driver lifecycle state machine
//!
//! Every LED driver chip goes through the same bring-up: power on with
//! undefined register contents, a configuration pass that zeroes the
//! output registers before global settings are written, then normal
//! operation. Buffer writes and flushes are only meaningful in the last
//! state.

/// Driver lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Power-on state; register contents undefined, nothing accepted
    #[default]
    Uninitialized,
    /// Bring-up sequence in progress (pages being zeroed, function
    /// registers being written)
    Configuring,
    /// Normal operation; buffer mutations and flushes are effective
    Active,
}

/// Lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverEvent {
    /// Bring-up sequence started
    ConfigureStart,
    /// Bring-up sequence finished and the settle delay has elapsed
    ConfigureDone,
}

impl DriverState {
    /// Check if buffer mutations and flushes are accepted
    pub fn accepts_writes(&self) -> bool {
        matches!(self, DriverState::Active)
    }

    /// Check if the driver has completed bring-up
    pub fn is_active(&self) -> bool {
        matches!(self, DriverState::Active)
    }

    /// Process an event and return the next state
    ///
    /// `Active` is terminal: once reached it is only left by process
    /// reset. Events that do not apply to the current state are ignored.
    pub fn transition(self, event: DriverEvent) -> Self {
        use DriverEvent::*;
        use DriverState::*;

        match (self, event) {
            (Uninitialized, ConfigureStart) => Configuring,
            (Configuring, ConfigureDone) => Active,
            (state, _) => state,
        }
    }
}
