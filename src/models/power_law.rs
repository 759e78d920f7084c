//! # Power-law solar wind
//!
//! Spherically symmetric wind with n(r) = n₀ (1 AU / r)ᵖ, fitted in its amplitude `NE_SWP`
//! with a radial index `SWP` that need not be 2 (Hazboun et al. 2022, eq. 12):
//!
//! ```text
//! DM = n₀ · (1/b)ᵖ · b · [F(b, D, p) − F(b, −z, p)]
//! b = r sin θ     impact parameter (AU)
//! z = r cos θ     distance from the observer to the point of closest approach
//! D = 10¹⁴ cm     outer bound, effectively infinity
//! ```
//!
//! `F` is [`dm_p_int`](crate::hypergeometric::dm_p_int). The integral diverges for
//! p ≤ 1, which is rejected. For p = 2 the geometry equals the constant-density one.
//!
//! ## References
//!
//! * Hazboun et al. (2022, ApJ, 929, 39)
//! * You et al. (2012, MNRAS, 422, 1160)

use log::debug;
use serde::{Deserialize, Serialize};

use super::{geometry_to_parsec, parfile_format, SolarWindModel, TimingContext};
use crate::constants::{Au, DispersionMeasure, ElectronDensity, AU_PC, SOLAR_WIND_OUTER_DISTANCE};
use crate::hypergeometric::dm_p_int;
use crate::parameters::{select_parfile_lines, Parameter};
use crate::solarwind_errors::SolarWindError;
use crate::toas::Toas;

/// Geometry factor (AU) for one TOA.
///
/// Arguments
/// ---------
/// * `angle`: solar elongation θ (radians)
/// * `distance`: observer–Sun distance r (AU)
/// * `p`: power-law index, must exceed 1
pub fn power_law_geometry(angle: f64, distance: Au, p: f64) -> Result<Au, SolarWindError> {
    if p <= 1.0 {
        return Err(SolarWindError::InvalidPowerLawIndex(p));
    }
    let b = distance * angle.sin();
    let z_sun = distance * angle.cos();
    let column = dm_p_int(b, SOLAR_WIND_OUTER_DISTANCE, p)? - dm_p_int(b, -z_sun, p)?;
    Ok((1.0 / b).powf(p) * b * column)
}

/// Dispersion due to the solar wind (spherically symmetric power-law model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphericalSolarWindDispersion {
    /// Solar wind density at 1 AU (cm⁻³)
    pub ne_swp: Parameter<f64>,
    /// Radial power-law index
    pub swp: Parameter<f64>,
}

impl Default for SphericalSolarWindDispersion {
    fn default() -> Self {
        SphericalSolarWindDispersion {
            ne_swp: Parameter::new("NE_SWP", 0.0, "cm^-3", "Solar Wind density at 1 AU")
                .with_aliases(&["NE1AUp", "SOLARN0p"]),
            swp: Parameter::new("SWP", 2.0, "", "Solar Wind Model radial power-law index"),
        }
    }
}

impl SphericalSolarWindDispersion {
    /// Build the model, rejecting indices for which the integral diverges.
    pub fn new(ne_swp: ElectronDensity, p: f64) -> Result<Self, SolarWindError> {
        if p <= 1.0 {
            return Err(SolarWindError::InvalidPowerLawIndex(p));
        }
        let mut model = SphericalSolarWindDispersion::default();
        model.ne_swp.value = ne_swp;
        model.swp.value = p;
        Ok(model)
    }

    /// Read `NE_SWP` (or an alias) and `SWP` from parameter-file text.
    pub fn from_parfile(text: &str) -> Result<Self, SolarWindError> {
        let mut model = SphericalSolarWindDispersion::default();
        let known = model.clone();
        let wanted = move |name: &str| known.ne_swp.matches(name) || known.swp.matches(name);
        for line in select_parfile_lines(text, wanted) {
            let line = line?;
            if model.ne_swp.matches(&line.name) {
                model.ne_swp.apply(&line)?;
            } else if model.swp.matches(&line.name) {
                model.swp.apply(&line)?;
            }
        }
        Ok(model)
    }
}

impl SolarWindModel for SphericalSolarWindDispersion {
    fn amplitude(&self) -> ElectronDensity {
        self.ne_swp.value
    }

    fn geometry(&self, toas: &Toas, ctx: &TimingContext) -> Result<Vec<Au>, SolarWindError> {
        if self.ne_swp.value == 0.0 {
            debug!("NE_SWP is zero, solar-wind geometry skipped");
            return Ok(vec![0.0; toas.len()]);
        }
        let p = self.swp.value;
        if p <= 1.0 {
            return Err(SolarWindError::InvalidPowerLawIndex(p));
        }
        ctx.sun_angle_and_distance(toas)?
            .into_iter()
            .map(|g| power_law_geometry(g.angle, g.distance, p))
            .collect()
    }

    fn dispersion_measure(
        &self,
        toas: &Toas,
        ctx: &TimingContext,
    ) -> Result<Vec<DispersionMeasure>, SolarWindError> {
        let n0 = self.ne_swp.value;
        Ok(self
            .geometry(toas, ctx)?
            .into_iter()
            .map(|g| n0 * g * AU_PC)
            .collect())
    }

    fn d_dm_d_amplitude(&self, toas: &Toas, ctx: &TimingContext) -> Result<Vec<f64>, SolarWindError> {
        Ok(geometry_to_parsec(self.geometry(toas, ctx)?))
    }

    fn print_par(&self, format: &str) -> Result<String, SolarWindError> {
        // Same names in every dialect
        parfile_format(format)?;
        let mut result = self.ne_swp.as_parfile_line();
        result.push_str(&self.swp.as_parfile_line());
        Ok(result)
    }
}
