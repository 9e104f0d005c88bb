//! Addressing-window display drivers for Lychnos
//!
//! This crate drives small LCD/OLED controllers through their
//! addressable-window protocol: open a rectangular window in display
//! RAM, stream pixel bytes into it, close the bus session.
//!
//! # Architecture
//!
//! One controller type, [`WindowController`], covers both controller
//! families. Everything that differs between panels is data in a
//! [`ControllerProfile`]:
//!
//! - **Linear controllers** (ST7735 family): column/row ranges set with
//!   CASET/RASET, RAM writes auto-wrap rows, rotation remapped through
//!   the MADCTL register.
//! - **Paged controllers** (SH1106 family): RAM organized in
//!   fixed-height pages, the window advances page by page with
//!   [`WindowController::next_block`].
//!
//! The wire transport is the [`DisplayBus`] capability trait, with
//! implementations for 4-wire SPI (data/command select line) and I2C
//! (control-byte framing). Both sit on `embedded-hal` 1.0.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Drawing layer (application) │
//! └──────────────────────────────┘
//!        │ start_block / write_pixels / end_block
//!        ▼
//! ┌──────────────────────────────┐
//! │  WindowController + profile  │
//! └──────────────────────────────┘
//!        │ DisplayBus
//!        ▼
//! ┌──────────────┐  ┌────────────┐
//! │ SpiInterface │  │ I2cInterface│
//! └──────────────┘  └────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod command;
pub mod controller;
pub mod sh1106;
pub mod st7735;
pub mod window;

// Re-export key types
pub use bus::{DisplayBus, DisplayError, I2cInterface, SpiInterface};
pub use controller::{
    hard_reset, Addressing, ControllerProfile, InitStep, PixelFormat, RotationCommands,
    WindowController,
};
pub use window::{AddressWindow, Rotation};
