//! Lychnos platform contract
//!
//! This crate defines the small set of platform traits the Lychnos core
//! consumes. Chip-specific HALs (RP2040, AVR, STM32, ...) implement them;
//! the engine and input code stay board-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application main loop                  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────┐  ┌──────────────────────┐
//! │  lychnos-core        │  │  lychnos-display     │
//! │  (frame engine)      │  │  (window controller) │
//! └──────────────────────┘  └──────────────────────┘
//!            │                         │
//!            ▼                         ▼
//! ┌──────────────────────┐  ┌──────────────────────┐
//! │  lychnos-hal         │  │  embedded-hal 1.0    │
//! │  (this crate)        │  │  (SPI bus, pins)     │
//! └──────────────────────┘  └──────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`time::Clock`] - wrapping millisecond counter
//! - [`adc::AdcChannel`] - raw analog sample source
//! - [`gpio::InputPin`] - polled digital input
//!
//! The display transports are deliberately not abstracted here: they
//! program against `embedded-hal` 1.0 directly, since bus errors are
//! already part of those signatures.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::AdcChannel;
pub use gpio::InputPin;
pub use time::Clock;
