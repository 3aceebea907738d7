//! Radar system data report

use std::fmt;

/// Decoded radar system data (`RSD`) report
///
/// Positional decode of the `RSD` sentence. The distance scale has
/// already been validated against the legal vendor range scales
/// ([`DISTANCE_SCALES`](crate::DISTANCE_SCALES)); the categorical
/// single-character fields are passed through verbatim without
/// enumeration validation.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarSystemDataMessage {
    /// Distance of origin one, nautical miles
    pub initial_distance: f64,
    /// Bearing of origin one, degrees
    pub initial_bearing: f64,
    /// Variable range marker distance
    pub moving_circle_of_distance: f64,
    /// Bearing line, degrees
    pub bearing: f64,
    /// Range of the cursor from own ship
    pub distance_from_ship: f64,
    /// Bearing of the cursor, degrees
    pub bearing2: f64,
    /// Range scale in use; member of the legal vendor set
    pub distance_scale: f64,
    /// Range units flag (`K`/`N`/`S`)
    pub distance_unit: char,
    /// Display rotation flag
    pub display_orientation: char,
    /// Working mode flag
    pub working_mode: char,
}

impl fmt::Display for RadarSystemDataMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radar system data: scale {} {}, cursor {} NM at {}°, orientation {}, mode {}",
            self.distance_scale,
            self.distance_unit,
            self.distance_from_ship,
            self.bearing2,
            self.display_orientation,
            self.working_mode
        )
    }
}
