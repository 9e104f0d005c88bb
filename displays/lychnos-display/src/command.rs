//! ST7735-family instructions (MIPI DCS subset)

/// ST7735 instructions.
#[derive(Debug, Clone, Copy)]
pub enum Instruction {
    NOP = 0x00,
    /// Software Reset
    SWRESET = 0x01,
    /// Sleep In
    SLPIN = 0x10,
    /// Sleep Out
    SLPOUT = 0x11,
    /// Normal Display Mode On
    NORON = 0x13,
    /// Display Inversion Off
    INVOFF = 0x20,
    /// Display Inversion On
    INVON = 0x21,
    /// Display Off
    DISPOFF = 0x28,
    /// Display On
    DISPON = 0x29,
    /// Column Address Set
    CASET = 0x2A,
    /// Row Address Set
    RASET = 0x2B,
    /// Memory Write
    RAMWR = 0x2C,
    /// Memory Data Access Control
    MADCTL = 0x36,
    /// Interface Pixel Format
    COLMOD = 0x3A,
    /// Frame Rate Control (normal mode)
    FRMCTR1 = 0xB1,
    /// Frame Rate Control (idle mode)
    FRMCTR2 = 0xB2,
    /// Frame Rate Control (partial mode)
    FRMCTR3 = 0xB3,
    /// Display Inversion Control
    INVCTR = 0xB4,
    /// Power Control 1
    PWCTR1 = 0xC0,
    /// Power Control 2
    PWCTR2 = 0xC1,
    /// Power Control 3
    PWCTR3 = 0xC2,
    /// Power Control 4
    PWCTR4 = 0xC3,
    /// Power Control 5
    PWCTR5 = 0xC4,
    /// VCOM Control 1
    VMCTR1 = 0xC5,
    /// Positive Gamma Correction
    GMCTRP1 = 0xE0,
    /// Negative Gamma Correction
    GMCTRN1 = 0xE1,
}
