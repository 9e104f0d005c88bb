//! Input sources
//!
//! Everything the engine knows about input is a button bitmask. A
//! [`KeySource`] produces the current mask; the engine tests masks
//! against it. Sources are interchangeable and the last connected one
//! wins (see [`crate::FrameEngine::connect_keys`]).

use lychnos_hal::{AdcChannel, InputPin};

/// No buttons pressed
pub const BUTTON_NONE: u8 = 0b0000_0000;
/// Down button bit
pub const BUTTON_DOWN: u8 = 0b0000_0001;
/// Left button bit
pub const BUTTON_LEFT: u8 = 0b0000_0010;
/// Right button bit
pub const BUTTON_RIGHT: u8 = 0b0000_0100;
/// Up button bit
pub const BUTTON_UP: u8 = 0b0000_1000;
/// A (primary action) button bit
pub const BUTTON_A: u8 = 0b0001_0000;
/// B (secondary action) button bit
pub const BUTTON_B: u8 = 0b0010_0000;

/// Source of the current button state
///
/// Implementations sample their hardware on every call; the engine does
/// no caching or debouncing at this layer.
pub trait KeySource {
    /// Current button bitmask (`BUTTON_*` constants OR'd together)
    fn buttons(&mut self) -> u8;
}

/// Application-provided key handler
///
/// Wraps a plain function so homegrown input schemes can plug into the
/// engine without implementing [`KeySource`] by hand.
pub struct CustomKeys(pub fn() -> u8);

impl KeySource for CustomKeys {
    fn buttons(&mut self) -> u8 {
        (self.0)()
    }
}

/// Six directly wired, active-low buttons
///
/// One input pin per button, pressed = pin low. This covers Arduboy-style
/// boards where every button has its own GPIO.
pub struct PinPad<P: InputPin> {
    down: P,
    left: P,
    right: P,
    up: P,
    a: P,
    b: P,
}

impl<P: InputPin> PinPad<P> {
    /// Create a pad from its six button pins
    pub fn new(down: P, left: P, right: P, up: P, a: P, b: P) -> Self {
        Self {
            down,
            left,
            right,
            up,
            a,
            b,
        }
    }
}

impl<P: InputPin> KeySource for PinPad<P> {
    fn buttons(&mut self) -> u8 {
        let mut mask = BUTTON_NONE;
        if self.down.is_low() {
            mask |= BUTTON_DOWN;
        }
        if self.left.is_low() {
            mask |= BUTTON_LEFT;
        }
        if self.right.is_low() {
            mask |= BUTTON_RIGHT;
        }
        if self.up.is_low() {
            mask |= BUTTON_UP;
        }
        if self.a.is_low() {
            mask |= BUTTON_A;
        }
        if self.b.is_low() {
            mask |= BUTTON_B;
        }
        mask
    }
}

/// Resistor-ladder keypad on a single analog input
///
/// Five buttons share one ADC channel; each closes the ladder at a
/// different resistance, so the sample falls into a distinct band.
pub struct AnalogKeypad<A: AdcChannel> {
    adc: A,
}

impl<A: AdcChannel> AnalogKeypad<A> {
    /// Create a keypad reading from the given channel
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Decode one raw sample into a button mask
    ///
    /// The bands are fixed hardware constants for the common 10-bit
    /// ladder keypad; do not make them configurable, existing boards
    /// depend on these exact values. The ladder has no B button.
    pub fn decode(sample: u16) -> u8 {
        if sample < 100 {
            return BUTTON_RIGHT;
        }
        if sample < 200 {
            return BUTTON_UP;
        }
        if sample < 400 {
            return BUTTON_DOWN;
        }
        if sample < 600 {
            return BUTTON_LEFT;
        }
        if sample < 800 {
            return BUTTON_A;
        }
        BUTTON_NONE
    }
}

impl<A: AdcChannel> KeySource for AnalogKeypad<A> {
    fn buttons(&mut self) -> u8 {
        Self::decode(self.adc.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeAdc {
        sample: u16,
    }

    impl AdcChannel for FakeAdc {
        fn read(&mut self) -> u16 {
            self.sample
        }
    }

    struct FakePin {
        high: bool,
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_keypad_bands() {
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(50), BUTTON_RIGHT);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(150), BUTTON_UP);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(350), BUTTON_DOWN);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(550), BUTTON_LEFT);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(750), BUTTON_A);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(900), BUTTON_NONE);
    }

    #[test]
    fn test_keypad_band_edges() {
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(0), BUTTON_RIGHT);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(99), BUTTON_RIGHT);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(100), BUTTON_UP);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(599), BUTTON_LEFT);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(799), BUTTON_A);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(800), BUTTON_NONE);
        assert_eq!(AnalogKeypad::<FakeAdc>::decode(u16::MAX), BUTTON_NONE);
    }

    #[test]
    fn test_keypad_reads_adc() {
        let mut keypad = AnalogKeypad::new(FakeAdc { sample: 550 });
        assert_eq!(keypad.buttons(), BUTTON_LEFT);
    }

    #[test]
    fn test_pin_pad_active_low() {
        let mut pad = PinPad::new(
            FakePin { high: false }, // down pressed
            FakePin { high: true },
            FakePin { high: true },
            FakePin { high: false }, // up pressed
            FakePin { high: true },
            FakePin { high: true },
        );
        assert_eq!(pad.buttons(), BUTTON_DOWN | BUTTON_UP);
    }

    #[test]
    fn test_pin_pad_idle() {
        let mut pad = PinPad::new(
            FakePin { high: true },
            FakePin { high: true },
            FakePin { high: true },
            FakePin { high: true },
            FakePin { high: true },
            FakePin { high: true },
        );
        assert_eq!(pad.buttons(), BUTTON_NONE);
    }

    #[test]
    fn test_custom_keys() {
        fn always_a() -> u8 {
            BUTTON_A
        }
        let mut keys = CustomKeys(always_a);
        assert_eq!(keys.buttons(), BUTTON_A);
    }
}
