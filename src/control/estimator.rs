//! Weighted line-position estimator.
//!
//! Converts a five-sensor snapshot into a signed position error relative to
//! the chassis centerline: each sensor slot carries a position weight, the
//! active weights are averaged, and the center offset is subtracted.  A
//! single active sensor at either extreme reads ±20; multi-sensor patterns
//! can exceed that.  No clamping happens here — saturation is the mixer's
//! job.

use crate::config::ControlConfig;

use super::LineSnapshot;

pub struct PositionEstimator {
    weights: [i16; 5],
    center_offset: f32,
}

impl PositionEstimator {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            weights: config.sensor_weights,
            center_offset: config.center_offset,
        }
    }

    /// Signed position error for one snapshot.
    ///
    /// Returns `0.0` when no sensor sees the line.  This coincides with the
    /// "perfectly centered" reading; the downstream pattern table maps the
    /// all-off snapshot to straight-ahead, so a lost line drives straight.
    pub fn estimate(&self, snapshot: &LineSnapshot) -> f32 {
        let levels = snapshot.levels();
        let active = snapshot.active_count();
        if active == 0 {
            return 0.0;
        }

        let weighted_sum: i32 = levels
            .iter()
            .zip(&self.weights)
            .filter(|(on, _)| **on)
            .map(|(_, w)| i32::from(*w))
            .sum();

        weighted_sum as f32 / f32::from(active) - self.center_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> PositionEstimator {
        PositionEstimator::new(&ControlConfig::default())
    }

    #[test]
    fn all_off_reads_zero() {
        assert_eq!(estimator().estimate(&LineSnapshot::default()), 0.0);
    }

    #[test]
    fn single_sensor_extremes() {
        let e = estimator();
        assert_eq!(e.estimate(&LineSnapshot::from_key(0b10000)), -20.0);
        assert_eq!(e.estimate(&LineSnapshot::from_key(0b00001)), 20.0);
        assert_eq!(e.estimate(&LineSnapshot::from_key(0b00100)), 0.0);
    }

    #[test]
    fn multi_sensor_averages() {
        let e = estimator();
        // mid-left + center: (10 + 20) / 2 - 20 = -5
        assert_eq!(e.estimate(&LineSnapshot::from_key(0b01100)), -5.0);
        // center + mid-right + far-right: (20 + 30 + 40) / 3 - 20 = 10
        assert_eq!(e.estimate(&LineSnapshot::from_key(0b00111)), 10.0);
        // all five: 100 / 5 - 20 = 0
        assert_eq!(e.estimate(&LineSnapshot::from_key(0b11111)), 0.0);
    }

    #[test]
    fn mirror_symmetry() {
        let e = estimator();
        for key in 0u8..32 {
            let snap = LineSnapshot::from_key(key);
            let err = e.estimate(&snap);
            let mirrored = e.estimate(&snap.mirrored());
            assert!(
                (err + mirrored).abs() < 1e-4,
                "key {key:#07b}: {err} vs mirrored {mirrored}"
            );
        }
    }
}
