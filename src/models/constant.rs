//! # Constant-density solar wind
//!
//! Spherically symmetric wind with n(r) = n₀ (1 AU / r)², fitted only in its amplitude
//! `NE_SW`. Integrating along the line of sight gives (Edwards et al. 2006, eq. 29-30)
//!
//! ```text
//! DM = n₀ · AU² · ρ / (r · sin ρ),   ρ = π − θ
//! ```
//!
//! with θ the solar elongation of the pulsar and r the observer–Sun distance. The shape
//! selector `SWM` only knows the value 0; You et al. (2007) is the candidate for `SWM = 1`.
//!
//! ## References
//!
//! * Edwards et al. 2006, MNRAS, 372, 1549; section 2.5.4
//! * Madison et al. 2019, ApJ, 872, 150; section 3.1

use log::debug;
use serde::{Deserialize, Serialize};

use super::{geometry_to_parsec, parfile_format, SolarWindModel, TimingContext};
use crate::constants::{Au, DispersionMeasure, ElectronDensity, AU_PC};
use crate::parameters::{select_parfile_lines, ParfileFormat, Parameter};
use crate::solarwind_errors::SolarWindError;
use crate::toas::Toas;

/// Supported geometries of the constant-density model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolarWindShape {
    /// `SWM = 0`, Edwards et al. 2006
    #[default]
    Edwards2006,
}

impl SolarWindShape {
    pub fn code(&self) -> u32 {
        match self {
            SolarWindShape::Edwards2006 => 0,
        }
    }

    /// Geometry factor (AU) for elongation `angle` and distance `distance` (AU).
    ///
    /// No guard at θ = π: the factor becomes infinite or NaN there.
    pub fn geometry(&self, angle: f64, distance: Au) -> Au {
        match self {
            SolarWindShape::Edwards2006 => {
                let rho = std::f64::consts::PI - angle;
                rho / (distance * rho.sin())
            }
        }
    }
}

impl TryFrom<u32> for SolarWindShape {
    type Error = SolarWindError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SolarWindShape::Edwards2006),
            other => Err(SolarWindError::UnimplementedSolarWindModel(other)),
        }
    }
}

/// Dispersion due to the solar wind (basic model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarWindDispersion {
    /// Solar wind density at 1 AU (cm⁻³)
    pub ne_sw: Parameter<f64>,
    /// Solar wind model code
    pub swm: Parameter<u32>,
}

impl Default for SolarWindDispersion {
    fn default() -> Self {
        SolarWindDispersion {
            ne_sw: Parameter::new("NE_SW", 0.0, "cm^-3", "Solar Wind density at 1 AU")
                .with_aliases(&["NE1AU", "SOLARN0"]),
            swm: Parameter::new(
                "SWM",
                0,
                "",
                "Solar Wind Model (0 is from Edwards+ 2006, others to come)",
            ),
        }
    }
}

impl SolarWindDispersion {
    pub fn new(ne_sw: ElectronDensity, shape: SolarWindShape) -> Self {
        let mut model = SolarWindDispersion::default();
        model.ne_sw.value = ne_sw;
        model.swm.value = shape.code();
        model
    }

    /// Build the model from a raw `SWM` code, rejecting codes without an implementation.
    pub fn with_shape_code(ne_sw: ElectronDensity, code: u32) -> Result<Self, SolarWindError> {
        Ok(SolarWindDispersion::new(ne_sw, SolarWindShape::try_from(code)?))
    }

    /// Current shape, read from the `SWM` parameter.
    pub fn shape(&self) -> Result<SolarWindShape, SolarWindError> {
        SolarWindShape::try_from(self.swm.value)
    }

    /// Read `NE_SW` (or an alias) and `SWM` from parameter-file text.
    ///
    /// Lines naming other parameters are ignored; missing parameters keep their defaults.
    pub fn from_parfile(text: &str) -> Result<Self, SolarWindError> {
        let mut model = SolarWindDispersion::default();
        let known = model.clone();
        let wanted = move |name: &str| known.ne_sw.matches(name) || known.swm.matches(name);
        for line in select_parfile_lines(text, wanted) {
            let line = line?;
            if model.ne_sw.matches(&line.name) {
                model.ne_sw.apply(&line)?;
            } else if model.swm.matches(&line.name) {
                model.swm.apply(&line)?;
            }
        }
        Ok(model)
    }
}

impl SolarWindModel for SolarWindDispersion {
    fn amplitude(&self) -> ElectronDensity {
        self.ne_sw.value
    }

    /// Geometry of the Edwards et al. (2006) model, `AU² ρ / (r sin ρ)`, in AU.
    fn geometry(&self, toas: &Toas, ctx: &TimingContext) -> Result<Vec<Au>, SolarWindError> {
        let shape = SolarWindShape::Edwards2006;
        Ok(ctx
            .sun_angle_and_distance(toas)?
            .into_iter()
            .map(|g| shape.geometry(g.angle, g.distance))
            .collect())
    }

    fn dispersion_measure(
        &self,
        toas: &Toas,
        ctx: &TimingContext,
    ) -> Result<Vec<DispersionMeasure>, SolarWindError> {
        if self.ne_sw.value == 0.0 {
            debug!("NE_SW is zero, solar-wind DM skipped");
            return Ok(vec![0.0; toas.len()]);
        }
        self.shape()?;
        let n0 = self.ne_sw.value;
        Ok(self
            .geometry(toas, ctx)?
            .into_iter()
            .map(|g| n0 * g * AU_PC)
            .collect())
    }

    fn d_dm_d_amplitude(&self, toas: &Toas, ctx: &TimingContext) -> Result<Vec<f64>, SolarWindError> {
        self.shape()?;
        Ok(geometry_to_parsec(self.geometry(toas, ctx)?))
    }

    fn print_par(&self, format: &str) -> Result<String, SolarWindError> {
        let format = parfile_format(format)?;
        let ne_name = match format {
            ParfileFormat::Tempo => "SOLARN0",
            ParfileFormat::Pint | ParfileFormat::Tempo2 => self.ne_sw.name.as_str(),
        };
        let mut result = self.ne_sw.as_parfile_line_named(ne_name);
        result.push_str(&self.swm.as_parfile_line());
        Ok(result)
    }
}

#[cfg(test)]
mod constant_test {
    use super::*;
    use crate::constants::DMCONST;
    use crate::models::models_test_utils::{toas_at, FixedGeometry, NoGeometry, SameFrequency};
    use crate::providers::SunGeometry;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn ctx_with(angle: f64, distance: f64, n: usize) -> TimingContext {
        TimingContext::new(
            FixedGeometry(vec![SunGeometry { angle, distance }; n]),
            SameFrequency,
        )
    }

    #[test]
    fn test_shape_codes() {
        assert_eq!(SolarWindShape::try_from(0u32), Ok(SolarWindShape::Edwards2006));
        assert_eq!(
            SolarWindShape::try_from(1u32),
            Err(SolarWindError::UnimplementedSolarWindModel(1))
        );
        assert!(SolarWindDispersion::with_shape_code(3.0, 2).is_err());
        assert_eq!(SolarWindDispersion::with_shape_code(3.0, 0).unwrap().ne_sw.value, 3.0);
    }

    #[test]
    fn test_geometry_at_quadrature() {
        // θ = π/2 at 1 AU: ρ / sin ρ = π/2
        let model = SolarWindDispersion::new(1.0, SolarWindShape::Edwards2006);
        let toas = toas_at(&[1400.0]);
        let geom = model.geometry(&toas, &ctx_with(PI / 2.0, 1.0, 1)).unwrap();
        assert_relative_eq!(geom[0], PI / 2.0, max_relative = 1e-15);
    }

    #[test]
    fn test_dm_scenario() {
        let model = SolarWindDispersion::new(5.0, SolarWindShape::Edwards2006);
        let toas = toas_at(&[1400.0]);
        let ctx = ctx_with(1.2, 1.0, 1);

        let rho = PI - 1.2;
        let expected = 5.0 * rho / rho.sin() * AU_PC;
        let dm = model.dispersion_measure(&toas, &ctx).unwrap();
        assert_relative_eq!(dm[0], expected, max_relative = 1e-14);

        let delay = model.delay(&toas, &ctx).unwrap();
        assert_relative_eq!(delay[0], DMCONST * expected / (1400.0 * 1400.0), max_relative = 1e-14);
    }

    #[test]
    fn test_zero_amplitude_skips_geometry() {
        let model = SolarWindDispersion::default();
        let toas = toas_at(&[1400.0, 430.0]);
        let ctx = TimingContext::new(NoGeometry, SameFrequency);
        assert_eq!(model.dispersion_measure(&toas, &ctx).unwrap(), vec![0.0, 0.0]);
        assert_eq!(model.delay(&toas, &ctx).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_unimplemented_shape() {
        let mut model = SolarWindDispersion::new(4.0, SolarWindShape::Edwards2006);
        model.swm.value = 1;
        let toas = toas_at(&[1400.0]);
        let ctx = ctx_with(1.0, 1.0, 1);
        let err = SolarWindError::UnimplementedSolarWindModel(1);
        assert_eq!(model.dispersion_measure(&toas, &ctx), Err(err.clone()));
        assert_eq!(model.d_dm_d_amplitude(&toas, &ctx), Err(err));

        // Zero amplitude short-circuits before the shape check
        model.ne_sw.value = 0.0;
        assert_eq!(model.dispersion_measure(&toas, &ctx).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_derivative_is_linear_coefficient() {
        let model = SolarWindDispersion::new(2.5, SolarWindShape::Edwards2006);
        let toas = toas_at(&[1400.0, 0.8, 1.0]);
        let ctx = ctx_with(0.7, 0.99, 3);

        let d_dm = model.d_dm_d_amplitude(&toas, &ctx).unwrap();
        let dm = model.dispersion_measure(&toas, &ctx).unwrap();
        assert_relative_eq!(dm[0], 2.5 * d_dm[0], max_relative = 1e-15);

        let d_delay = model.d_delay_d_amplitude(&toas, &ctx).unwrap();
        assert_relative_eq!(d_delay[0], DMCONST * d_dm[0] / (1400.0 * 1400.0), max_relative = 1e-14);
        assert_eq!(d_delay[1], 0.0);
        assert_relative_eq!(d_delay[2], DMCONST * d_dm[2], max_relative = 1e-14);
    }

    #[test]
    fn test_print_par() {
        let mut model = SolarWindDispersion::new(7.9, SolarWindShape::Edwards2006);
        model.ne_sw.frozen = false;
        let text = model.print_par("pint").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("NE_SW "));
        assert!(lines[0].ends_with("7.9 1"));
        assert_eq!(lines[1], format!("{:<15} {:>25}", "SWM", "0"));

        let tempo = model.print_par("tempo").unwrap();
        assert!(tempo.starts_with("SOLARN0 "));
        assert_eq!(tempo.lines().count(), 2);

        assert_eq!(
            model.print_par("par"),
            Err(SolarWindError::UnknownParfileFormat("par".into()))
        );
    }

    #[test]
    fn test_from_parfile() {
        let text = "PSR J1909-3744\nF0 339.31 1\nJUMP -fe L-wide 0.1 1\nNE1AU 9.5 1 0.3\nSWM 0\n";
        let model = SolarWindDispersion::from_parfile(text).unwrap();
        assert_eq!(model.ne_sw.value, 9.5);
        assert!(!model.ne_sw.frozen);
        assert_eq!(model.ne_sw.uncertainty, Some(0.3));
        assert_eq!(model.shape(), Ok(SolarWindShape::Edwards2006));
    }
}
