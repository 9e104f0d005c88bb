//! SH1106 panel profile
//!
//! Page-addressed 1-bit OLED, usually wired over I2C. The controller
//! RAM is 132 columns wide with the 128-column panel bonded 2 columns
//! in, hence the column offset.

use crate::controller::{Addressing, ControllerProfile, InitStep, PixelFormat};

/// SH1106 commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

const fn step(command: u8, args: &'static [u8]) -> InitStep {
    InitStep {
        command,
        args,
        delay_ms: 0,
    }
}

/// SH1106 power-up script for the common 128x64 module
static INIT: &[InitStep] = &[
    step(cmd::DISPLAY_OFF, &[]),
    step(cmd::SET_CLOCK_DIV, &[0x80]),
    step(cmd::SET_MUX_RATIO, &[0x3F]), // 64 lines
    step(cmd::SET_DISPLAY_OFFSET, &[0x00]),
    step(cmd::SET_START_LINE, &[]),
    step(cmd::SET_CHARGE_PUMP, &[0x14]),
    step(cmd::SET_SEG_REMAP, &[]),     // flip horizontally
    step(cmd::SET_COM_SCAN_DEC, &[]),  // flip vertically
    step(cmd::SET_COM_PINS, &[0x12]),
    step(cmd::SET_CONTRAST, &[0xCF]),
    step(cmd::SET_PRECHARGE, &[0xF1]),
    step(cmd::SET_VCOM_DETECT, &[0x40]),
    step(cmd::SET_NORMAL, &[]),
    step(cmd::DISPLAY_ON, &[]),
];

/// 128x64 OLED module
pub fn profile_128x64() -> ControllerProfile {
    ControllerProfile {
        width: 128,
        height: 64,
        addressing: Addressing::Paged { page_height: 8 },
        pixel_format: PixelFormat::Mono,
        // No MADCTL equivalent; rotation is axis bookkeeping only
        rotation: None,
        bgr: false,
        col_offset: 2,
        row_offset: 0,
        init: INIT,
        display_on: cmd::DISPLAY_ON,
        display_off: cmd::DISPLAY_OFF,
        invert_on: cmd::SET_INVERSE,
        invert_off: cmd::SET_NORMAL,
        contrast: Some(cmd::SET_CONTRAST),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_script_brackets() {
        assert_eq!(INIT.first().unwrap().command, cmd::DISPLAY_OFF);
        assert_eq!(INIT.last().unwrap().command, cmd::DISPLAY_ON);
    }

    #[test]
    fn test_profile_shape() {
        let profile = profile_128x64();
        assert_eq!(profile.addressing, Addressing::Paged { page_height: 8 });
        assert_eq!(profile.pixel_format, PixelFormat::Mono);
        assert_eq!(profile.col_offset, 2);
        assert!(profile.rotation.is_none());
        assert_eq!(profile.contrast, Some(cmd::SET_CONTRAST));
    }
}
