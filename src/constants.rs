//! # Constants and type definitions for solarwind
//!
//! This module centralizes the **physical constants**, **conversion factors** and
//! **type aliases** used by the solar-wind dispersion models.
//!
//! ## Overview
//!
//! - Astronomical lengths (AU, parsec) in centimeters and their ratio
//! - The cold-plasma dispersion constant
//! - Thresholds used by the models (1 MHz frequency floor, outer integration bound)
//! - Unit-carrying type aliases, so signatures document what they expect

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Astronomical Unit in centimeters
pub const AU_CM: f64 = AU * 1.0e5;

/// Parsec in centimeters (IAU 2015, 648000/π AU)
pub const PC_CM: f64 = AU_CM * 648_000.0 / std::f64::consts::PI;

/// One astronomical unit expressed in parsecs
pub const AU_PC: f64 = AU_CM / PC_CM;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Dispersion constant in s·MHz²·cm³/pc, using the conventional 1/2.41e-4 value
pub const DMCONST: f64 = 1.0 / 2.41e-4;

/// Frequencies strictly below this floor (MHz) get a zero delay derivative
pub const MIN_DISPERSION_FREQ: MHz = 1.0;

/// Outer line-of-sight bound for the power-law integral (10¹⁴ cm), in AU
pub const SOLAR_WIND_OUTER_DISTANCE: Au = 1.0e14 / AU_CM;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type Au = f64;
/// Radio frequency in MHz
pub type MHz = f64;
/// Time in seconds
pub type Second = f64;
/// Dispersion measure in pc/cm³
pub type DispersionMeasure = f64;
/// Electron density in cm⁻³
pub type ElectronDensity = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
