//! GPIO pin abstractions
//!
//! Polled, infallible digital input for directly wired buttons.
//! Anything that can actually fail (bus transfers, display control
//! lines) lives behind `embedded-hal` instead.

/// Digital input pin
///
/// Implementations handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}
