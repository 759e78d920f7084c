//! # Dispersion delay
//!
//! Converts a dispersion measure into a propagation delay at the observing frequency,
//! and a DM derivative into a delay derivative. The cold-plasma law is
//!
//! ```text
//! Δt = K · DM / f²,   K = 1 / 2.41e-4  s·MHz²·cm³/pc
//! ```
//!
//! Both operations are linear in their first argument, so the same law serves values
//! and chain-rule derivatives.

use itertools::izip;

use crate::constants::{DispersionMeasure, MHz, Second, DMCONST};
use crate::solarwind_errors::SolarWindError;

fn check_lengths(values: &[f64], freqs: &[MHz]) -> Result<(), SolarWindError> {
    if values.len() != freqs.len() {
        return Err(SolarWindError::LengthMismatch {
            expected: values.len(),
            got: freqs.len(),
        });
    }
    Ok(())
}

pub trait DispersionEvaluator: Send + Sync {
    /// Delay (s) of each DM value at the matching frequency.
    fn delay(&self, dm: &[DispersionMeasure], freqs: &[MHz]) -> Result<Vec<Second>, SolarWindError>;

    /// Delay derivative from the DM derivative with respect to one parameter.
    fn d_delay_d_dmparam(&self, d_dm: &[f64], freqs: &[MHz]) -> Result<Vec<f64>, SolarWindError>;
}

/// Cold-plasma dispersion with a fixed dispersion constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColdPlasma {
    pub dm_const: f64,
}

impl Default for ColdPlasma {
    fn default() -> Self {
        ColdPlasma { dm_const: DMCONST }
    }
}

impl DispersionEvaluator for ColdPlasma {
    fn delay(&self, dm: &[DispersionMeasure], freqs: &[MHz]) -> Result<Vec<Second>, SolarWindError> {
        check_lengths(dm, freqs)?;
        Ok(izip!(dm, freqs)
            .map(|(dm, f)| self.dm_const * dm / (f * f))
            .collect())
    }

    fn d_delay_d_dmparam(&self, d_dm: &[f64], freqs: &[MHz]) -> Result<Vec<f64>, SolarWindError> {
        self.delay(d_dm, freqs)
    }
}
