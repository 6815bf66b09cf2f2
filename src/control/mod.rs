//! Steering control core — pure logic, zero I/O.
//!
//! Two interpretations of the same sensor snapshot are blended each cycle:
//! a continuous PD correction from the weighted line-position estimate, and
//! a discrete override from a table of empirically observed turn/junction
//! patterns.  The override wins on motor *direction*; the PD magnitude
//! always governs speed.

pub mod estimator;
pub mod mixer;
pub mod patterns;
pub mod pd;

// ---------------------------------------------------------------------------
// Line snapshot (read-only to the control core; produced by the sensor array)
// ---------------------------------------------------------------------------

/// One atomic reading of the five reflectance sensors, left to right.
///
/// Captured once per control cycle and shared by the estimator and the
/// pattern classifier, so both always interpret the same physical instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSnapshot {
    pub far_left: bool,
    pub mid_left: bool,
    pub center: bool,
    pub mid_right: bool,
    pub far_right: bool,
}

impl LineSnapshot {
    pub const fn new(
        far_left: bool,
        mid_left: bool,
        center: bool,
        mid_right: bool,
        far_right: bool,
    ) -> Self {
        Self {
            far_left,
            mid_left,
            center,
            mid_right,
            far_right,
        }
    }

    /// The five levels in left-to-right order.
    pub const fn levels(&self) -> [bool; 5] {
        [
            self.far_left,
            self.mid_left,
            self.center,
            self.mid_right,
            self.far_right,
        ]
    }

    /// 5-bit pattern key, far-left as the most significant bit, so the key
    /// reads like the physical sensor row (`0b10000` = far-left only).
    pub const fn key(&self) -> u8 {
        (self.far_left as u8) << 4
            | (self.mid_left as u8) << 3
            | (self.center as u8) << 2
            | (self.mid_right as u8) << 1
            | self.far_right as u8
    }

    /// Inverse of [`key`](Self::key); bits above the low five are ignored.
    pub const fn from_key(key: u8) -> Self {
        Self {
            far_left: key & 0b10000 != 0,
            mid_left: key & 0b01000 != 0,
            center: key & 0b00100 != 0,
            mid_right: key & 0b00010 != 0,
            far_right: key & 0b00001 != 0,
        }
    }

    /// Number of sensors currently seeing the line.
    pub const fn active_count(&self) -> u8 {
        self.far_left as u8
            + self.mid_left as u8
            + self.center as u8
            + self.mid_right as u8
            + self.far_right as u8
    }

    /// The snapshot reflected left-right.
    pub const fn mirrored(&self) -> Self {
        Self {
            far_left: self.far_right,
            mid_left: self.mid_right,
            center: self.center,
            mid_right: self.mid_left,
            far_right: self.far_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_reads_like_the_sensor_row() {
        assert_eq!(LineSnapshot::new(true, false, false, false, false).key(), 0b10000);
        assert_eq!(LineSnapshot::new(false, false, false, false, true).key(), 0b00001);
        assert_eq!(LineSnapshot::new(true, true, true, true, true).key(), 0b11111);
    }

    #[test]
    fn from_key_inverts_key() {
        for key in 0u8..32 {
            assert_eq!(LineSnapshot::from_key(key).key(), key);
        }
    }

    #[test]
    fn mirrored_swaps_outer_pairs_and_keeps_center() {
        let snap = LineSnapshot::from_key(0b11010);
        assert_eq!(snap.mirrored().key(), 0b01011);
        assert_eq!(snap.mirrored().mirrored(), snap);
    }
}
