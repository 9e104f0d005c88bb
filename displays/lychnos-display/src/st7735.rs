//! ST7735 panel profiles
//!
//! Linear-addressed 16-bit TFT panels. The init scripts are the
//! conventional power-up sequences from the controller datasheet;
//! values are hardware constants, not tunables.

use crate::command::Instruction;
use crate::controller::{
    Addressing, ControllerProfile, InitStep, PixelFormat, RotationCommands,
};

/// MADCTL values for rotations 0/90/180/270 (MY/MX/MV bits)
pub const MADCTL_TABLE: [u8; 4] = [0x00, 0x60, 0xC0, 0xA0];

/// MADCTL bit selecting BGR subpixel order
pub const MADCTL_BGR: u8 = 0x08;

const fn step(command: Instruction, args: &'static [u8], delay_ms: u16) -> InitStep {
    InitStep {
        command: command as u8,
        args,
        delay_ms,
    }
}

/// Shared ST7735 power-up script (16-bit color, normal orientation)
static INIT: &[InitStep] = &[
    step(Instruction::SWRESET, &[], 150),
    step(Instruction::SLPOUT, &[], 500),
    // Frame rate: fosc / (1 x 2 + 40) * (LINE + 2C + 2D)
    step(Instruction::FRMCTR1, &[0x01, 0x2C, 0x2D], 0),
    step(Instruction::FRMCTR2, &[0x01, 0x2C, 0x2D], 0),
    step(Instruction::FRMCTR3, &[0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D], 0),
    // No display inversion
    step(Instruction::INVCTR, &[0x07], 0),
    // Power: -4.6V, auto mode
    step(Instruction::PWCTR1, &[0xA2, 0x02, 0x84], 0),
    step(Instruction::PWCTR2, &[0xC5], 0),
    step(Instruction::PWCTR3, &[0x0A, 0x00], 0),
    step(Instruction::PWCTR4, &[0x8A, 0x2A], 0),
    step(Instruction::PWCTR5, &[0x8A, 0xEE], 0),
    step(Instruction::VMCTR1, &[0x0E], 0),
    step(Instruction::INVOFF, &[], 0),
    step(Instruction::MADCTL, &[MADCTL_TABLE[0]], 0),
    // 16-bit RGB565
    step(Instruction::COLMOD, &[0x05], 0),
    step(
        Instruction::GMCTRP1,
        &[
            0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01,
            0x03, 0x10,
        ],
        0,
    ),
    step(
        Instruction::GMCTRN1,
        &[
            0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00,
            0x02, 0x10,
        ],
        0,
    ),
    step(Instruction::NORON, &[], 10),
    step(Instruction::DISPON, &[], 100),
];

const fn base_profile(width: u16, height: u16) -> ControllerProfile {
    ControllerProfile {
        width,
        height,
        addressing: Addressing::Linear,
        pixel_format: PixelFormat::Rgb565,
        rotation: Some(RotationCommands {
            command: Instruction::MADCTL as u8,
            table: MADCTL_TABLE,
            bgr_flag: MADCTL_BGR,
        }),
        bgr: false,
        col_offset: 0,
        row_offset: 0,
        init: INIT,
        display_on: Instruction::DISPON as u8,
        display_off: Instruction::DISPOFF as u8,
        invert_on: Instruction::INVON as u8,
        invert_off: Instruction::INVOFF as u8,
        contrast: None,
    }
}

/// 128x128 square panel
pub fn profile_128x128() -> ControllerProfile {
    base_profile(128, 128)
}

/// 128x160 panel
pub fn profile_128x160() -> ControllerProfile {
    base_profile(128, 160)
}
