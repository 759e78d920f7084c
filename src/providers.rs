//! # Geometry and frequency providers
//!
//! The solar-wind models do not know where the pulsar is or how the observer moves.
//! They ask two capabilities for it:
//!
//! - [`GeometryProvider`](crate::providers::GeometryProvider): per-TOA solar elongation θ
//!   (angle Sun–observer–pulsar) and observer–Sun distance r.
//! - [`FrequencyProvider`](crate::providers::FrequencyProvider): per-TOA barycentric radio
//!   frequency, or `None` when that frame is not available.
//!
//! Two concrete providers cover the usual case of a pulsar at a fixed sky position:
//! [`PulsarLineOfSight`](crate::providers::PulsarLineOfSight) for the geometry and
//! [`DopplerCorrected`](crate::providers::DopplerCorrected) for the frequencies.
//! [`TopocentricOnly`](crate::providers::TopocentricOnly) never offers barycentric
//! frequencies and forces the topocentric fallback.

use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{Au, MHz, Radian, VLIGHT};
use crate::solarwind_errors::SolarWindError;
use crate::toas::Toas;

/// Sun–observer geometry of one TOA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunGeometry {
    /// Solar elongation of the pulsar (radians)
    pub angle: Radian,
    /// Observer–Sun distance (AU)
    pub distance: Au,
}

pub trait GeometryProvider: Send + Sync {
    /// Elongation and distance for every TOA, in TOA order.
    fn sun_angle_and_distance(&self, toas: &Toas) -> Result<Vec<SunGeometry>, SolarWindError>;

    /// Elongation only.
    fn sun_angle(&self, toas: &Toas) -> Result<Vec<Radian>, SolarWindError> {
        Ok(self
            .sun_angle_and_distance(toas)?
            .into_iter()
            .map(|g| g.angle)
            .collect())
    }
}

pub trait FrequencyProvider: Send + Sync {
    /// Barycentric radio frequency of every TOA (MHz), `None` when unavailable.
    fn barycentric_radio_freq(&self, toas: &Toas) -> Option<Vec<MHz>>;
}

/// Unit vector towards a pulsar at right ascension `ra` and declination `dec` (radians).
pub fn pulsar_direction(ra: Radian, dec: Radian) -> Unit<Vector3<f64>> {
    Unit::new_normalize(Vector3::new(
        dec.cos() * ra.cos(),
        dec.cos() * ra.sin(),
        dec.sin(),
    ))
}

/// Geometry towards a pulsar at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct PulsarLineOfSight {
    direction: Unit<Vector3<f64>>,
}

impl PulsarLineOfSight {
    pub fn new(direction: Unit<Vector3<f64>>) -> Self {
        PulsarLineOfSight { direction }
    }

    pub fn from_equatorial(ra: Radian, dec: Radian) -> Self {
        PulsarLineOfSight::new(pulsar_direction(ra, dec))
    }

    pub fn direction(&self) -> &Unit<Vector3<f64>> {
        &self.direction
    }
}

impl GeometryProvider for PulsarLineOfSight {
    fn sun_angle_and_distance(&self, toas: &Toas) -> Result<Vec<SunGeometry>, SolarWindError> {
        toas.iter()
            .map(|toa| {
                let distance = toa.obs_sun_pos.norm();
                if distance == 0.0 {
                    return Err(SolarWindError::GeometryUnavailable(format!(
                        "observer at the Sun center for epoch {}",
                        toa.epoch
                    )));
                }
                Ok(SunGeometry {
                    angle: toa.obs_sun_pos.angle(&self.direction.into_inner()),
                    distance,
                })
            })
            .collect()
    }
}

/// Barycentric frequencies from the first-order Doppler shift of the observer motion.
///
/// `f_bary = f_topo · (1 − v·n̂ / c)`
#[derive(Debug, Clone, PartialEq)]
pub struct DopplerCorrected {
    direction: Unit<Vector3<f64>>,
}

impl DopplerCorrected {
    pub fn new(direction: Unit<Vector3<f64>>) -> Self {
        DopplerCorrected { direction }
    }
}

impl FrequencyProvider for DopplerCorrected {
    fn barycentric_radio_freq(&self, toas: &Toas) -> Option<Vec<MHz>> {
        Some(
            toas.iter()
                .map(|toa| toa.freq * (1.0 - toa.ssb_obs_vel.dot(&self.direction.into_inner()) / VLIGHT))
                .collect(),
        )
    }
}

/// Frequency provider without a barycentric frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopocentricOnly;

impl FrequencyProvider for TopocentricOnly {
    fn barycentric_radio_freq(&self, _toas: &Toas) -> Option<Vec<MHz>> {
        None
    }
}

#[cfg(test)]
mod providers_test {
    use super::*;
    use crate::toas::Toa;
    use approx::assert_relative_eq;
    use hifitime::{Epoch, TimeScale};
    use std::f64::consts::FRAC_PI_2;

    fn toa(sun: Vector3<f64>, vel: Vector3<f64>) -> Toa {
        Toa::new(
            Epoch::from_mjd_in_time_scale(58000.0, TimeScale::TT),
            1400.0,
            sun,
            vel,
        )
    }

    #[test]
    fn test_sun_angle_and_distance() {
        let los = PulsarLineOfSight::from_equatorial(0.0, 0.0);
        let toas = Toas::new(vec![
            toa(Vector3::new(1.0, 0.0, 0.0), Vector3::zeros()),
            toa(Vector3::new(0.0, 0.99, 0.0), Vector3::zeros()),
            toa(Vector3::new(-1.01, 0.0, 0.0), Vector3::zeros()),
        ]);
        let geom = los.sun_angle_and_distance(&toas).unwrap();
        assert_relative_eq!(geom[0].angle, 0.0, epsilon = 1e-12);
        assert_relative_eq!(geom[1].angle, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(geom[2].angle, std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(geom[1].distance, 0.99);
        assert_eq!(los.sun_angle(&toas).unwrap().len(), 3);
    }

    #[test]
    fn test_degenerate_observer() {
        let los = PulsarLineOfSight::from_equatorial(1.0, 0.2);
        let toas = Toas::new(vec![toa(Vector3::zeros(), Vector3::zeros())]);
        assert!(matches!(
            los.sun_angle_and_distance(&toas),
            Err(SolarWindError::GeometryUnavailable(_))
        ));
    }

    #[test]
    fn test_doppler_correction() {
        let dir = pulsar_direction(0.0, 0.0);
        let toas = Toas::new(vec![
            toa(Vector3::new(0.0, 1.0, 0.0), Vector3::new(30.0, 0.0, 0.0)),
            toa(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 30.0, 0.0)),
        ]);
        let freqs = DopplerCorrected::new(dir).barycentric_radio_freq(&toas).unwrap();
        assert_relative_eq!(freqs[0], 1400.0 * (1.0 - 30.0 / VLIGHT), max_relative = 1e-15);
        assert_relative_eq!(freqs[1], 1400.0, max_relative = 1e-15);
        assert_eq!(TopocentricOnly.barycentric_radio_freq(&toas), None);
    }
}
