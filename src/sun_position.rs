//! # Low-precision solar ephemeris
//!
//! Geocentric position of the Sun from the low-precision formula of the
//! *Astronomical Almanac* (section C, accurate to about 0.01° between 1950 and 2050),
//! rotated from ecliptic to equatorial coordinates with the IAU 1976 mean obliquity.
//! Coordinates refer to the equinox of date; the offset from J2000 axes stays below 0.5°
//! for the validity period.
//!
//! This is enough to build TOAs whose solar elongation is right to a few arcminutes,
//! which is far below what matters for solar-wind dispersion. Timing packages with a
//! JPL ephemeris should fill [`Toa::obs_sun_pos`](crate::toas::Toa::obs_sun_pos) themselves.

use hifitime::Epoch;
use nalgebra::Vector3;

use crate::constants::{Au, Radian, AU, MJD, RADEG, RADSEC, SECONDS_PER_DAY, T2000};

/// Half-width of the central difference used for the velocity, in days.
const VELOCITY_STEP: f64 = 0.01;

/// Mean obliquity of the ecliptic (IAU 1976), in radians.
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date (TT)
pub fn obleq(tjm: MJD) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    let t = (tjm - T2000) / 36525.0;

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Geocentric equatorial position of the Sun (equinox of date) in AU at a TT Modified Julian Date.
pub fn geocentric_sun_mjd(tjm: MJD) -> Vector3<Au> {
    let n = tjm - T2000;

    // Mean longitude and mean anomaly, degrees
    let mean_lon = (280.460 + 0.985_647_4 * n).rem_euclid(360.0);
    let g = ((357.528 + 0.985_600_3 * n).rem_euclid(360.0)) * RADEG;

    let lambda = (mean_lon + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()) * RADEG;
    let r = 1.000_14 - 0.016_71 * g.cos() - 0.000_14 * (2.0 * g).cos();

    let eps = obleq(tjm);
    Vector3::new(
        r * lambda.cos(),
        r * eps.cos() * lambda.sin(),
        r * eps.sin() * lambda.sin(),
    )
}

/// Geocentric observer → Sun vector (AU) and observer velocity (km/s) at `epoch`.
///
/// The observer is placed at the geocenter; its velocity is the opposite of the
/// apparent solar motion, from a central difference over ±0.01 day.
pub fn geocentric_sun(epoch: &Epoch) -> (Vector3<Au>, Vector3<f64>) {
    let tjm = epoch.to_mjd_tt_days();
    let pos = geocentric_sun_mjd(tjm);

    let ahead = geocentric_sun_mjd(tjm + VELOCITY_STEP);
    let behind = geocentric_sun_mjd(tjm - VELOCITY_STEP);
    let sun_rate = (ahead - behind) / (2.0 * VELOCITY_STEP);
    let velocity = -sun_rate * AU / SECONDS_PER_DAY;

    (pos, velocity)
}
