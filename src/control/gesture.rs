use super::map_range;

/*
Gesture Classifier
==================

Maps a 3-axis accelerometer reading to a pattern selection. Each axis
arrives as a raw voltage, is calibrated linearly into +-1.5 g, and is then
compared against a fixed pair of asymmetric thresholds. Six orientations of
the device partition the gesture space:

    flat (z up)        -> pattern 0
    on its left side   -> pattern 1
    on its right side  -> pattern 2
    on its front side  -> pattern 3
    on its back side   -> pattern 4
    upside down        -> pattern 1, and flips the playback direction

Classification is a pure function of a single reading: candidates are
evaluated in a fixed priority order with a logical AND across all three
axes, and a later match overrides an earlier one. There is no debounce
timer and no cross-frame hysteresis; the gap between each axis's high and
low thresholds is the only noise rejection.
*/

/// Full-scale acceleration after calibration, in g.
pub const ACCEL_RANGE_G: f32 = 1.5;

/// Per-axis linear calibration from raw sensor volts to +-1.5 g. The
/// endpoints are measured per deployment with the board held flat.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct AxisCalibration {
    pub volts_min: f32,
    pub volts_max: f32,
}

impl AxisCalibration {
    pub fn new(volts_min: f32, volts_max: f32) -> Self {
        Self {
            volts_min,
            volts_max,
        }
    }

    /// Remap a raw voltage into g. Linear, unclamped.
    #[inline]
    pub fn to_g(&self, volts: f32) -> f32 {
        map_range(
            volts,
            self.volts_min,
            self.volts_max,
            -ACCEL_RANGE_G,
            ACCEL_RANGE_G,
        )
    }
}

/// The six asymmetric threshold pairs partitioning the gesture space,
/// in g.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct GestureThresholds {
    pub x_high: f32,
    pub x_low: f32,
    pub y_high: f32,
    pub y_low: f32,
    pub z_high: f32,
    pub z_low: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            x_high: 0.2,
            x_low: -0.2,
            y_high: 0.3,
            y_low: -0.1,
            z_high: 0.3,
            z_low: -0.3,
        }
    }
}

/// A classified device orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Flat,
    OnLeftSide,
    OnRightSide,
    OnFrontSide,
    OnBackSide,
    /// Upside down: selects pattern 1 and flips the playback direction.
    Inverted,
}

impl Gesture {
    /// The pattern this gesture latches into the sequencer.
    pub fn pattern_index(self) -> usize {
        match self {
            Gesture::Flat => 0,
            Gesture::OnLeftSide | Gesture::Inverted => 1,
            Gesture::OnRightSide => 2,
            Gesture::OnFrontSide => 3,
            Gesture::OnBackSide => 4,
        }
    }

    pub fn toggles_direction(self) -> bool {
        matches!(self, Gesture::Inverted)
    }
}

/// Stateless per-frame classifier. The two pieces of latched state the
/// gestures drive (pattern index, play direction) live in the drum machine.
#[derive(Debug, Clone, Copy)]
pub struct GestureClassifier {
    pub thresholds: GestureThresholds,
    pub x_calibration: AxisCalibration,
    pub y_calibration: AxisCalibration,
    pub z_calibration: AxisCalibration,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        // Endpoint voltages measured with the stock sensor held flat
        Self {
            thresholds: GestureThresholds::default(),
            x_calibration: AxisCalibration::new(0.20, 0.60),
            y_calibration: AxisCalibration::new(0.24, 0.64),
            z_calibration: AxisCalibration::new(0.16, 0.56),
        }
    }
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calibrate raw voltages and classify. Called once per control frame.
    pub fn classify_volts(&self, vx: f32, vy: f32, vz: f32) -> Option<Gesture> {
        self.classify(
            self.x_calibration.to_g(vx),
            self.y_calibration.to_g(vy),
            self.z_calibration.to_g(vz),
        )
    }

    /// Classify a calibrated reading in g. Pure: the same reading always
    /// produces the same result. Later candidates override earlier ones.
    pub fn classify(&self, x: f32, y: f32, z: f32) -> Option<Gesture> {
        let t = self.thresholds;
        let x_mid = x > t.x_low && x < t.x_high;
        let y_mid = y > t.y_low && y < t.y_high;
        let z_mid = z > t.z_low && z < t.z_high;

        let mut gesture = None;

        if x_mid && y_mid && z > t.z_high {
            gesture = Some(Gesture::Flat);
        }
        if x < t.x_low && y_mid && z_mid {
            gesture = Some(Gesture::OnLeftSide);
        }
        if x > t.x_high && y_mid && z_mid {
            gesture = Some(Gesture::OnRightSide);
        }
        if x_mid && y < t.y_low && z_mid {
            gesture = Some(Gesture::OnFrontSide);
        }
        if x_mid && y > t.y_high && z_mid {
            gesture = Some(Gesture::OnBackSide);
        }
        if x_mid && y_mid && z < t.z_low {
            gesture = Some(Gesture::Inverted);
        }

        gesture
    }
}
