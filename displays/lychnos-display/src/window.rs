//! Address window computation
//!
//! Pure coordinate logic: how a logical (x, y, width) request maps onto
//! the rectangular RAM window the controller is told to open. Rotation
//! never bends the math here; it swaps the logical panel dimensions and
//! picks a different MADCTL value, both handled by the controller.

/// Screen rotation, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Normal orientation
    #[default]
    Deg0,
    /// 90 degrees clockwise
    Deg90,
    /// 180 degrees
    Deg180,
    /// 270 degrees clockwise
    Deg270,
}

impl Rotation {
    /// Rotation from the conventional 0-3 index (wraps modulo 4)
    pub fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Index into per-rotation remap tables
    pub fn index(self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Whether this rotation swaps the logical width and height
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Rectangular window in device RAM, both corners inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    /// Left column
    pub x0: u16,
    /// Top row
    pub y0: u16,
    /// Right column, inclusive
    pub x1: u16,
    /// Bottom row, inclusive
    pub y1: u16,
}

impl AddressWindow {
    /// Window for a block write starting at (x, y) spanning `w` columns
    ///
    /// `w == 0` means "extend to the right edge". A nonzero width is
    /// clamped at the right edge; rows always close at the bottom edge,
    /// letting the stream run until the caller stops. Coordinates
    /// outside the panel are passed through uncorrected (the controller
    /// defines what happens), matching the hardware-facing contract.
    pub fn for_block(x: u16, y: u16, w: u16, width: u16, height: u16) -> Self {
        let x1 = if w == 0 {
            width - 1
        } else {
            (x + w - 1).min(width - 1)
        };
        Self {
            x0: x,
            y0: y,
            x1,
            y1: height - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_window_basic() {
        let win = AddressWindow::for_block(10, 20, 30, 128, 160);
        assert_eq!(
            win,
            AddressWindow {
                x0: 10,
                y0: 20,
                x1: 39,
                y1: 159
            }
        );
    }

    #[test]
    fn test_zero_width_extends_to_edge() {
        let win = AddressWindow::for_block(100, 0, 0, 128, 160);
        assert_eq!(win.x1, 127);
        assert_eq!(win.x0, 100);
    }

    #[test]
    fn test_width_clamped_at_right_edge() {
        let win = AddressWindow::for_block(120, 0, 30, 128, 160);
        assert_eq!(win.x1, 127);
    }

    #[test]
    fn test_window_invariants_in_bounds() {
        for x in [0u16, 5, 64, 127] {
            for y in [0u16, 3, 159] {
                for w in [0u16, 1, 16, 128] {
                    let win = AddressWindow::for_block(x, y, w, 128, 160);
                    assert!(win.x1 >= win.x0, "x1 < x0 for ({x},{y},{w})");
                    assert!(win.y1 >= win.y0, "y1 < y0 for ({x},{y},{w})");
                    assert!(win.x1 < 128);
                    assert!(win.y1 < 160);
                }
            }
        }
    }

    #[test]
    fn test_rotation_index_round_trip() {
        for i in 0..4u8 {
            assert_eq!(Rotation::from_index(i).index(), i as usize);
        }
        // Indexes wrap modulo 4
        assert_eq!(Rotation::from_index(6), Rotation::Deg180);
    }

    #[test]
    fn test_axis_swap() {
        assert!(!Rotation::Deg0.swaps_axes());
        assert!(Rotation::Deg90.swaps_axes());
        assert!(!Rotation::Deg180.swaps_axes());
        assert!(Rotation::Deg270.swaps_axes());
    }
}
