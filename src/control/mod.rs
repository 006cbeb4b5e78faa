//! Control-voltage handling: range remapping, axis calibration, and the
//! accelerometer gesture classifier.

pub mod gesture;

pub use gesture::{AxisCalibration, Gesture, GestureClassifier, GestureThresholds};

/// Linearly remap `x` from one range to another. The workhorse for turning
/// raw control voltages into physical units and knob positions into
/// parameter values. No clamping: out-of-range inputs extrapolate.
#[inline]
pub fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_hits_endpoints_and_midpoint() {
        assert_eq!(map_range(0.0, 0.0, 1.0, 50.0, 1000.0), 50.0);
        assert_eq!(map_range(1.0, 0.0, 1.0, 50.0, 1000.0), 1000.0);
        assert_eq!(map_range(0.5, 0.0, 1.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn map_range_extrapolates_outside_input_range() {
        assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
        assert_eq!(map_range(-1.0, 0.0, 1.0, 0.0, 10.0), -10.0);
    }
}
