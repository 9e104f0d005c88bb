//! Board-agnostic frame engine for the Lychnos display stack
//!
//! This crate contains the cooperative main-loop support that does not
//! depend on any specific display hardware:
//!
//! - Fixed-period frame pacing with a wrapping millisecond clock
//! - Button mask queries against a pluggable input source
//! - Built-in input sources (custom handler, pin pad, analog keypad)
//!
//! The engine never blocks: the application polls [`FrameEngine::next_frame`]
//! from its main loop and renders when it returns true. There is no
//! threading and no locking; everything runs on the one logical thread
//! driving the loop.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod engine;
pub mod keys;

pub use engine::{FrameEngine, FrameStats, DEFAULT_FPS};
pub use keys::{
    AnalogKeypad, CustomKeys, KeySource, PinPad, BUTTON_A, BUTTON_B, BUTTON_DOWN, BUTTON_LEFT,
    BUTTON_NONE, BUTTON_RIGHT, BUTTON_UP,
};
