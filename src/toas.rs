//! # Times of arrival
//!
//! [`Toa`](crate::toas::Toa) holds what the solar-wind models read from one observation:
//! its epoch, the topocentric radio frequency and the observer's position relative to the
//! Sun. [`Toas`](crate::toas::Toas) is the ordered, read-only collection handed to every
//! model call.
//!
//! The observer → Sun vector and the observer velocity are normally filled by the
//! enclosing timing package from a JPL ephemeris. [`Toa::from_epoch`](crate::toas::Toa::from_epoch)
//! uses the low-precision solar ephemeris instead and is meant for simulations and tests.

use hifitime::Epoch;
use nalgebra::Vector3;

use crate::constants::{Au, MHz};
use crate::sun_position::geocentric_sun;

/// A single time of arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct Toa {
    /// Arrival epoch at the observatory
    pub epoch: Epoch,
    /// Topocentric observing frequency (MHz)
    pub freq: MHz,
    /// Vector from the observer to the Sun (AU, equatorial frame)
    pub obs_sun_pos: Vector3<Au>,
    /// Observer velocity relative to the solar-system barycenter (km/s)
    pub ssb_obs_vel: Vector3<f64>,
}

impl Toa {
    pub fn new(epoch: Epoch, freq: MHz, obs_sun_pos: Vector3<Au>, ssb_obs_vel: Vector3<f64>) -> Self {
        Toa {
            epoch,
            freq,
            obs_sun_pos,
            ssb_obs_vel,
        }
    }

    /// Build a geocentric TOA whose Sun vector and velocity come from the
    /// low-precision solar ephemeris.
    pub fn from_epoch(epoch: Epoch, freq: MHz) -> Self {
        let (obs_sun_pos, ssb_obs_vel) = geocentric_sun(&epoch);
        Toa::new(epoch, freq, obs_sun_pos, ssb_obs_vel)
    }
}

/// Ordered set of TOAs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toas {
    toas: Vec<Toa>,
}

impl Toas {
    pub fn new(toas: Vec<Toa>) -> Self {
        Toas { toas }
    }

    pub fn len(&self) -> usize {
        self.toas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toa> {
        self.toas.iter()
    }

    /// Topocentric frequency column (MHz).
    pub fn freqs(&self) -> Vec<MHz> {
        self.toas.iter().map(|t| t.freq).collect()
    }
}

impl From<Vec<Toa>> for Toas {
    fn from(toas: Vec<Toa>) -> Self {
        Toas::new(toas)
    }
}

impl FromIterator<Toa> for Toas {
    fn from_iter<I: IntoIterator<Item = Toa>>(iter: I) -> Self {
        Toas::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Toas {
    type Item = &'a Toa;
    type IntoIter = std::slice::Iter<'a, Toa>;

    fn into_iter(self) -> Self::IntoIter {
        self.toas.iter()
    }
}

#[cfg(test)]
mod toas_test {
    use super::*;
    use hifitime::TimeScale;

    #[test]
    fn test_freq_column() {
        let epoch = Epoch::from_mjd_in_time_scale(58000.0, TimeScale::UTC);
        let toas: Toas = [1400.0, 820.0, 0.5]
            .into_iter()
            .map(|f| Toa::from_epoch(epoch, f))
            .collect();
        assert_eq!(toas.len(), 3);
        assert!(!toas.is_empty());
        assert_eq!(toas.freqs(), vec![1400.0, 820.0, 0.5]);
        assert!(Toas::default().is_empty());
    }
}
