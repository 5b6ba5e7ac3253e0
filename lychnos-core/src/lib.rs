//! Board-agnostic core types for the keyboard LED firmware
//!
//! This crate contains everything the LED subsystem needs that does not
//! depend on a specific driver chip or keyboard:
//!
//! - LED location descriptors (logical index -> chip + register offset)
//! - LED matrix driver traits
//! - Driver lifecycle state machine
//! - Transport policy configuration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod led;
pub mod state;
pub mod traits;
