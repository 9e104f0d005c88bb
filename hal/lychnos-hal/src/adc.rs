//! ADC abstractions
//!
//! Provides the single-channel analog read used by resistor-ladder
//! keypads and similar analog inputs.

/// One analog input channel
///
/// Implementations return the raw converter sample. The usable range is
/// platform-defined (10-bit converters give 0-1023); threshold-based
/// consumers such as the analog keypad decoder assume that scale.
pub trait AdcChannel {
    /// Take one raw sample from the channel
    fn read(&mut self) -> u16;
}

impl<A: AdcChannel + ?Sized> AdcChannel for &mut A {
    fn read(&mut self) -> u16 {
        (**self).read()
    }
}
