//! Monotonic time abstraction
//!
//! Provides the wrapping millisecond counter the frame engine paces
//! itself against.

/// Monotonic millisecond clock
///
/// The counter wraps at 2^32 milliseconds (about 49.7 days). Consumers
/// must compare timestamps with `wrapping_sub` so pacing stays correct
/// across the overflow boundary.
pub trait Clock {
    /// Milliseconds since some fixed (arbitrary) epoch, wrapping at 2^32
    fn millis(&mut self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn millis(&mut self) -> u32 {
        (**self).millis()
    }
}
