//! LED matrix controller drivers
//!
//! This crate provides concrete implementations of the lychnos-core LED
//! matrix traits for the I2C driver chips found on supported keyboards:
//!
//! - IS31FL3742A (Lumissil) - 30x6 single-color matrix, per-key backlight
//! - SLED1734X (Sonix) - two-frame RGB matrix
//!
//! All drivers are generic over [`lychnos_hal::I2cBus`] and keep shadow
//! buffers of the chip's output registers, so a flush only touches the
//! bus when something actually changed.

#![no_std]
#![deny(unsafe_code)]

pub mod led;
