//! Window controller
//!
//! One controller type for every supported panel. The things that vary
//! between controller families live in a [`ControllerProfile`] value:
//! panel dimensions, addressing mode, pixel format, the rotation remap
//! table, RAM offsets, and the init script. The wire transport is
//! injected as a [`DisplayBus`].
//!
//! A window transaction is strictly bracketed:
//!
//! ```text
//! {Idle} --start_block--> {SessionOpen}
//!        --write_pixels / next_block (repeat)-->
//!        --end_block--> {Idle}
//! ```
//!
//! Opening a session twice or closing/advancing an idle one is a caller
//! bug, checked with `debug_assert!` only; there is no recovery at this
//! layer.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::bus::{DisplayBus, DisplayError};
use crate::command::Instruction;
use crate::window::{AddressWindow, Rotation};

/// Page address set base command (paged controllers)
const PAGE_ADDR_BASE: u8 = 0xB0;
/// Column low-nibble base command (paged controllers)
const COL_LOW_BASE: u8 = 0x00;
/// Column high-nibble base command (paged controllers)
const COL_HIGH_BASE: u8 = 0x10;

/// How the controller's RAM is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Addressing {
    /// Linear RAM with auto-wrapping rows inside the set window
    Linear,
    /// RAM organized in fixed-height horizontal pages
    Paged {
        /// Rows per page (8 for the SH1106/SSD1306 family)
        page_height: u8,
    },
}

/// Pixel layout the panel is driven in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 1 bit per pixel, page-packed
    Mono,
    /// 16 bits per pixel, RGB565
    Rgb565,
}

impl PixelFormat {
    /// Bits one pixel occupies on the wire
    pub fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Mono => 1,
            PixelFormat::Rgb565 => 16,
        }
    }
}

/// Rotation remap for controllers with a MADCTL-equivalent register
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationCommands {
    /// The MADCTL-equivalent register
    pub command: u8,
    /// Register value per rotation index 0-3
    pub table: [u8; 4],
    /// Bit OR'd into the value when the panel wants BGR pixel order
    pub bgr_flag: u8,
}

/// One step of a controller init script
#[derive(Debug, Clone, Copy)]
pub struct InitStep {
    /// Command byte
    pub command: u8,
    /// Command arguments (sent in data mode on linear controllers, as
    /// further command bytes on paged ones)
    pub args: &'static [u8],
    /// Settle time after the command, zero for none
    pub delay_ms: u16,
}

/// Everything that differs between supported controllers
///
/// Profiles for concrete panels live in the [`crate::st7735`] and
/// [`crate::sh1106`] modules.
#[derive(Debug, Clone, Copy)]
pub struct ControllerProfile {
    /// Panel width in pixels at rotation 0
    pub width: u16,
    /// Panel height in pixels at rotation 0
    pub height: u16,
    /// RAM addressing family
    pub addressing: Addressing,
    /// Wire pixel layout
    pub pixel_format: PixelFormat,
    /// Rotation remap, None for controllers without one
    pub rotation: Option<RotationCommands>,
    /// Panel is wired for BGR subpixel order
    pub bgr: bool,
    /// RAM column the panel's first visible column maps to
    pub col_offset: u16,
    /// RAM row offset (rows for linear controllers, pages for paged)
    pub row_offset: u16,
    /// Power-up command script
    pub init: &'static [InitStep],
    /// Display-on command
    pub display_on: u8,
    /// Display-off command
    pub display_off: u8,
    /// Color inversion on command
    pub invert_on: u8,
    /// Color inversion off command
    pub invert_off: u8,
    /// Contrast command, None when the family has no contrast register
    pub contrast: Option<u8>,
}

/// Stream position inside an open paged session
#[derive(Debug, Clone, Copy, Default)]
struct PagedCursor {
    page: u8,
    col: u8,
}

/// Addressing-window display controller
///
/// Owns the transport for its lifetime; one controller per bus at a
/// time, driven from the single application loop.
pub struct WindowController<B: DisplayBus> {
    bus: B,
    profile: ControllerProfile,
    rotation: Rotation,
    /// Logical panel size, swapped relative to the profile under odd
    /// rotations
    width: u16,
    height: u16,
    session_open: bool,
    cursor: PagedCursor,
}

impl<B: DisplayBus> WindowController<B> {
    /// Create a controller for the given panel profile
    pub fn new(bus: B, profile: ControllerProfile) -> Self {
        Self {
            bus,
            profile,
            rotation: Rotation::Deg0,
            width: profile.width,
            height: profile.height,
            session_open: false,
            cursor: PagedCursor::default(),
        }
    }

    /// Run the profile's power-up script
    ///
    /// Call [`hard_reset`] first on boards with a wired reset pin; the
    /// controller can be in an arbitrary state after unstable power.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        debug_assert!(!self.session_open);
        let script = self.profile.init;
        for step in script {
            self.send_command(step.command, step.args)?;
            if step.delay_ms > 0 {
                delay.delay_ms(step.delay_ms as u32);
            }
        }
        Ok(())
    }

    /// Logical panel size under the current rotation
    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Shift the panel's origin inside controller RAM
    ///
    /// Some panels are bonded to RAM at an offset (ST7735 "green tab"
    /// variants, the SH1106's two-column inset already baked into its
    /// profile).
    pub fn set_offset(&mut self, dx: u16, dy: u16) {
        self.profile.col_offset = dx;
        self.profile.row_offset = dy;
    }

    /// Open a RAM window and leave the bus streaming pixel data
    ///
    /// The window starts at logical (x, y) and spans `w` columns;
    /// `w == 0` extends it to the right edge. Rows run to the bottom
    /// edge, the caller stops writing when its block is done. The bus
    /// session stays open in data mode: every call must be paired with
    /// exactly one [`end_block`](Self::end_block), on error paths too.
    pub fn start_block(&mut self, x: u16, y: u16, w: u16) -> Result<(), DisplayError> {
        debug_assert!(!self.session_open, "window session already open");
        let window = AddressWindow::for_block(x, y, w, self.width, self.height);

        self.bus.begin_session()?;
        let opened = match self.profile.addressing {
            Addressing::Linear => self.open_linear(&window),
            Addressing::Paged { page_height } => {
                self.cursor = PagedCursor {
                    page: (window.y0 / page_height as u16 + self.profile.row_offset) as u8,
                    col: (window.x0 + self.profile.col_offset) as u8,
                };
                self.open_page()
            }
        };
        if let Err(e) = opened {
            // Never leave chip-select asserted behind an error
            let _ = self.bus.end_session();
            return Err(e);
        }
        self.session_open = true;
        Ok(())
    }

    /// Advance the open window to its next RAM page
    ///
    /// Linear controllers wrap rows in hardware, so this is a no-op for
    /// them; paged controllers seek to the next page and re-issue the
    /// column start. Callers use it unconditionally between row bands
    /// and never see which family they are on.
    pub fn next_block(&mut self) -> Result<(), DisplayError> {
        debug_assert!(self.session_open, "no open window session");
        match self.profile.addressing {
            Addressing::Linear => Ok(()),
            Addressing::Paged { .. } => {
                self.cursor.page = self.cursor.page.wrapping_add(1);
                self.open_page()
            }
        }
    }

    /// Close the window transaction and release the bus
    pub fn end_block(&mut self) -> Result<(), DisplayError> {
        debug_assert!(self.session_open, "window session already closed");
        self.session_open = false;
        self.bus.end_session()
    }

    /// Stream pixel bytes into the open window
    pub fn write_pixels(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        debug_assert!(self.session_open, "no open window session");
        self.bus.write_all(bytes)
    }

    /// Toggle the transport's data/command mode directly
    ///
    /// Escape hatch for drawing layers that interleave their own
    /// commands into an open session. No-op on transports without a
    /// data/command distinction.
    pub fn set_data_mode(&mut self, data: bool) -> Result<(), DisplayError> {
        self.bus.set_data_mode(data)
    }

    /// Write one whole block and close the session
    ///
    /// Guarantees the session is released even when a mid-stream write
    /// fails.
    pub fn draw_block(&mut self, x: u16, y: u16, w: u16, bytes: &[u8]) -> Result<(), DisplayError> {
        self.start_block(x, y, w)?;
        let wrote = self.write_pixels(bytes);
        let closed = self.end_block();
        wrote.and(closed)
    }

    /// Set the screen rotation
    ///
    /// Stores the rotation, swaps the logical dimensions for odd
    /// rotations and writes the profile's remap register. Takes effect
    /// on the next [`start_block`](Self::start_block); an already open
    /// session is unaffected (and calling this mid-session is a bug).
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), DisplayError> {
        debug_assert!(!self.session_open);
        if rotation.swaps_axes() != self.rotation.swaps_axes() {
            core::mem::swap(&mut self.width, &mut self.height);
        }
        self.rotation = rotation;

        let Some(remap) = self.profile.rotation else {
            // Paged family: axis bookkeeping only, no remap register
            return Ok(());
        };
        let value = remap.table[rotation.index()]
            | if self.profile.bgr { remap.bgr_flag } else { 0 };

        self.bus.begin_session()?;
        let sent = self.send_rotation(remap.command, value);
        let closed = self.bus.end_session();
        sent.and(closed)
    }

    /// Switch the display output on or off
    pub fn display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        let command = if on {
            self.profile.display_on
        } else {
            self.profile.display_off
        };
        self.send_command(command, &[])
    }

    /// Invert the panel's colors
    pub fn invert(&mut self, inverted: bool) -> Result<(), DisplayError> {
        let command = if inverted {
            self.profile.invert_on
        } else {
            self.profile.invert_off
        };
        self.send_command(command, &[])
    }

    /// Set the panel contrast, where the controller family has one
    pub fn set_contrast(&mut self, value: u8) -> Result<(), DisplayError> {
        match self.profile.contrast {
            Some(command) => self.send_command(command, &[value]),
            None => Err(DisplayError::Unsupported),
        }
    }

    /// Release the transport
    pub fn release(self) -> B {
        self.bus
    }

    /// One self-contained command transaction
    fn send_command(&mut self, command: u8, args: &[u8]) -> Result<(), DisplayError> {
        debug_assert!(!self.session_open);
        let addressing = self.profile.addressing;
        self.bus.begin_session()?;
        let sent: Result<(), DisplayError> = (|| {
            self.bus.set_data_mode(false)?;
            self.bus.write(command)?;
            if !args.is_empty() {
                // Linear controllers take arguments as data bytes;
                // paged ones take them as further command bytes
                if matches!(addressing, Addressing::Linear) {
                    self.bus.set_data_mode(true)?;
                }
                self.bus.write_all(args)?;
            }
            Ok(())
        })();
        let closed = self.bus.end_session();
        sent.and(closed)
    }

    fn send_rotation(&mut self, command: u8, value: u8) -> Result<(), DisplayError> {
        self.bus.set_data_mode(false)?;
        self.bus.write(self.profile.display_off)?;
        self.bus.write(command)?;
        self.bus.set_data_mode(true)?;
        self.bus.write(value)?;
        self.bus.set_data_mode(false)?;
        self.bus.write(self.profile.display_on)
    }

    /// Column/row RAM offsets under the current rotation
    fn offsets(&self) -> (u16, u16) {
        if self.rotation.swaps_axes() {
            (self.profile.row_offset, self.profile.col_offset)
        } else {
            (self.profile.col_offset, self.profile.row_offset)
        }
    }

    fn write_u16(&mut self, value: u16) -> Result<(), DisplayError> {
        self.bus.write((value >> 8) as u8)?;
        self.bus.write(value as u8)
    }

    fn open_linear(&mut self, window: &AddressWindow) -> Result<(), DisplayError> {
        let (col_offset, row_offset) = self.offsets();

        self.bus.set_data_mode(false)?;
        self.bus.write(Instruction::CASET as u8)?;
        self.bus.set_data_mode(true)?;
        self.write_u16(window.x0 + col_offset)?;
        self.write_u16(window.x1 + col_offset)?;

        self.bus.set_data_mode(false)?;
        self.bus.write(Instruction::RASET as u8)?;
        self.bus.set_data_mode(true)?;
        self.write_u16(window.y0 + row_offset)?;
        self.write_u16(window.y1 + row_offset)?;

        self.bus.set_data_mode(false)?;
        self.bus.write(Instruction::RAMWR as u8)?;
        self.bus.set_data_mode(true)
    }

    fn open_page(&mut self) -> Result<(), DisplayError> {
        let PagedCursor { page, col } = self.cursor;
        self.bus.set_data_mode(false)?;
        self.bus.write(PAGE_ADDR_BASE | (page & 0x0F))?;
        self.bus.write(COL_LOW_BASE | (col & 0x0F))?;
        self.bus.write(COL_HIGH_BASE | (col >> 4))?;
        self.bus.set_data_mode(true)
    }
}

/// Pulse a wired reset pin with the conventional settle times
///
/// Brings the controller out of whatever state unstable supply voltage
/// left it in; run before [`WindowController::init`].
pub fn hard_reset<RST, D>(rst: &mut RST, delay: &mut D) -> Result<(), DisplayError>
where
    RST: OutputPin,
    D: DelayNs,
{
    rst.set_high().map_err(|_| DisplayError::ControlPin)?;
    delay.delay_ms(10);
    rst.set_low().map_err(|_| DisplayError::ControlPin)?;
    delay.delay_ms(10);
    rst.set_high().map_err(|_| DisplayError::ControlPin)
}
