#![allow(dead_code)]

use hifitime::{Epoch, TimeScale};
use nalgebra::Vector3;
use solarwind::{GeometryProvider, SolarWindError, SunGeometry, Toa, Toas};

/// Geometry provider returning the same values for every call.
pub struct FixedGeometry(pub Vec<SunGeometry>);

impl GeometryProvider for FixedGeometry {
    fn sun_angle_and_distance(&self, _toas: &Toas) -> Result<Vec<SunGeometry>, SolarWindError> {
        Ok(self.0.clone())
    }
}

/// Geometry provider failing on every call.
pub struct FailingGeometry;

impl GeometryProvider for FailingGeometry {
    fn sun_angle_and_distance(&self, _toas: &Toas) -> Result<Vec<SunGeometry>, SolarWindError> {
        Err(SolarWindError::GeometryUnavailable(
            "geometry provider must not be called".into(),
        ))
    }
}

/// TOAs at MJD 58000 with the given topocentric frequencies and a fixed Sun vector.
pub fn toas_with_freqs(freqs: &[f64]) -> Toas {
    let epoch = Epoch::from_mjd_in_time_scale(58000.0, TimeScale::TT);
    freqs
        .iter()
        .map(|&f| Toa::new(epoch, f, Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 29.8)))
        .collect()
}

/// Weekly TOAs over one year, alternating between two observing bands.
pub fn yearly_toas(start_mjd: f64) -> Toas {
    (0..52)
        .map(|week| {
            let epoch = Epoch::from_mjd_in_time_scale(start_mjd + 7.0 * week as f64, TimeScale::UTC);
            let freq = if week % 2 == 0 { 1400.0 } else { 820.0 };
            Toa::from_epoch(epoch, freq)
        })
        .collect()
}
