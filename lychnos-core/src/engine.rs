//! Frame engine
//!
//! Fixed-period frame pacing for a cooperative main loop. The engine
//! owns a [`Clock`] and an optional input source; the application polls
//! [`FrameEngine::next_frame`] as often as it can and renders a frame
//! whenever it returns true, then reports completion with
//! [`FrameEngine::frame_presented`].
//!
//! All timestamp math uses `wrapping_sub`, so pacing stays correct when
//! the millisecond counter rolls over at 2^32.

use lychnos_hal::Clock;

use crate::keys::{KeySource, BUTTON_NONE};

/// Frame rate used until `set_frame_rate` is called
pub const DEFAULT_FPS: u8 = 30;

/// Snapshot of the engine's timing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    /// Configured frame rate in frames per second
    pub fps: u8,
    /// Duration of one frame in milliseconds (1000 / fps, truncated)
    pub frame_duration_ms: u32,
    /// Render time of the last presented frame as a percentage of the
    /// frame budget, clamped to 100
    pub cpu_load: u8,
}

/// Cooperative fixed-period frame scheduler
///
/// One engine instance drives one display loop. There are no globals:
/// the clock is injected at construction (which is also what makes the
/// timing logic testable against a fake clock), and the input source is
/// attached with [`connect_keys`](Self::connect_keys).
pub struct FrameEngine<'k, C: Clock> {
    clock: C,
    fps: u8,
    frame_duration_ms: u32,
    /// Timestamp the last presented frame was due at
    last_frame_ts: u32,
    /// Timestamp `next_frame` last reported a due frame
    frame_start_ts: u32,
    cpu_load: u8,
    on_loop: Option<fn()>,
    keys: Option<&'k mut dyn KeySource>,
}

impl<'k, C: Clock> FrameEngine<'k, C> {
    /// Create an engine at the default frame rate
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            fps: DEFAULT_FPS,
            frame_duration_ms: 1000 / DEFAULT_FPS as u32,
            last_frame_ts: 0,
            frame_start_ts: 0,
            cpu_load: 0,
            on_loop: None,
            keys: None,
        }
    }

    /// Start pacing from the current time
    ///
    /// Call once before entering the main loop.
    pub fn begin(&mut self) {
        self.last_frame_ts = self.clock.millis();
        self.frame_start_ts = self.last_frame_ts;
    }

    /// Set the target frame rate
    ///
    /// The frame budget is 1000 / fps with integer truncation, so the
    /// achieved rate can run slightly above the requested one at rates
    /// that do not divide 1000 (30 fps paces at 33 ms). This is an
    /// accepted approximation, not something to compensate for.
    pub fn set_frame_rate(&mut self, fps: u8) {
        debug_assert!(fps > 0);
        self.fps = fps;
        self.frame_duration_ms = 1000 / fps as u32;
    }

    /// Register a callback to run whenever a frame becomes due
    pub fn connect_loop(&mut self, callback: fn()) {
        self.on_loop = Some(callback);
    }

    /// Attach the input source button queries read from
    ///
    /// Sources are mutually exclusive; the last connected one wins.
    pub fn connect_keys(&mut self, source: &'k mut dyn KeySource) {
        self.keys = Some(source);
    }

    /// Poll whether the next frame is due
    ///
    /// Returns true (and runs the loop callback) once the frame budget
    /// has elapsed since the last presented frame. Polling alone never
    /// advances the schedule: without a matching
    /// [`frame_presented`](Self::frame_presented) call this keeps
    /// returning true on every poll once the threshold is crossed.
    pub fn next_frame(&mut self) -> bool {
        let now = self.clock.millis();
        let due = now.wrapping_sub(self.last_frame_ts) >= self.frame_duration_ms;
        if due {
            self.frame_start_ts = now;
            if let Some(callback) = self.on_loop {
                callback();
            }
        }
        due
    }

    /// Mark the due frame as rendered and shown
    ///
    /// Advances the schedule to the timestamp the frame became due at
    /// and updates the cpu load figure from the measured render time.
    pub fn frame_presented(&mut self) {
        let now = self.clock.millis();
        let render_ms = now.wrapping_sub(self.frame_start_ts);
        let load = render_ms.saturating_mul(100) / self.frame_duration_ms;
        self.cpu_load = load.min(100) as u8;
        self.last_frame_ts = self.frame_start_ts;
    }

    /// Current timing snapshot
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            fps: self.fps,
            frame_duration_ms: self.frame_duration_ms,
            cpu_load: self.cpu_load,
        }
    }

    /// Current button bitmask from the connected source
    ///
    /// Reads as no buttons when no source is connected.
    pub fn buttons(&mut self) -> u8 {
        match self.keys.as_mut() {
            Some(source) => source.buttons(),
            None => BUTTON_NONE,
        }
    }

    /// Check that every button in `mask` is currently held
    pub fn pressed(&mut self, mask: u8) -> bool {
        self.buttons() & mask == mask
    }

    /// Check that no button in `mask` is currently held
    ///
    /// Not the negation of [`pressed`](Self::pressed) for multi-bit
    /// masks: a partially held mask fails both checks.
    pub fn not_pressed(&mut self, mask: u8) -> bool {
        self.buttons() & mask == 0
    }
}
