//! Expansion-deck servo driver for Pico flight stacks.
//!
//! Converts a signed, center-relative angle command into the PWM pulse that
//! positions a hobby servo on one PWM slice channel. The driver plugs into a
//! larger firmware through two collaborators: a [`deck`] registry that runs
//! its one-time initialization when the expansion hardware is found, and a
//! [`param`] group that lets a ground-station host read the bring-up state
//! and command angles at runtime.
//!
//! See [`servo::ServoDeck`] for the main entry point and an example.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time checks: exactly one architecture must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "arm", feature = "riscv")), not(feature = "host")))]
compile_error!("Must enable exactly one architecture feature: 'arm' or 'riscv'");

#[cfg(all(feature = "arm", feature = "riscv"))]
compile_error!("Cannot enable both 'arm' and 'riscv' features simultaneously");

// Compile-time check: pico1 only supports ARM
#[cfg(all(feature = "pico1", feature = "riscv"))]
compile_error!("Pico 1 (RP2040) only supports ARM architecture, not RISC-V");

// This mod MUST go first so its macros are visible to the rest of the crate.
#[macro_use]
mod fmt;

pub mod deck;
mod error;
pub mod param;
pub mod pwm;
pub mod servo;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
