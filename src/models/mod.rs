//! # Solar-wind dispersion models
//!
//! Free electrons of the solar wind add a dispersive delay to pulsar TOAs taken near
//! the Sun. Two spherically symmetric density models are available:
//!
//! | Model | Parameters | Density | Reference |
//! |-------|------------|---------|-----------|
//! | [`SolarWindDispersion`](crate::models::constant::SolarWindDispersion) | `NE_SW`, `SWM` | n₀ (1 AU / r)² | Edwards et al. 2006, eq. 29-30 |
//! | [`SphericalSolarWindDispersion`](crate::models::power_law::SphericalSolarWindDispersion) | `NE_SWP`, `SWP` | n₀ (1 AU / r)ᵖ | Hazboun et al. 2022, eq. 12 |
//!
//! Both implement [`SolarWindModel`](crate::models::SolarWindModel). Every computation
//! reads the current parameter values and the TOAs, and asks a
//! [`TimingContext`](crate::models::TimingContext) for Sun geometry, frequencies and the
//! DM → delay law. Nothing is cached between calls, so the fitting loop may change the
//! parameters freely between evaluations.
//!
//! ## Data flow
//!
//! ```text
//! Toas ─► geometry (AU) ─► × n₀ × AU/pc ─► DM (pc cm⁻³) ─► K·DM/f² ─► delay (s)
//!                     └──► × AU/pc ─► ∂DM/∂n₀ (pc) ─► K·∂DM/f² ─► ∂delay/∂n₀, zeroed below 1 MHz
//! ```
//!
//! ## Zero amplitude
//!
//! A zero amplitude yields exactly zero DM and delay without consulting the geometry
//! provider. The constant model checks it in `dispersion_measure`; the power-law model
//! checks it in `geometry`, which also makes its `d_dm_d_amplitude` vanish at n₀ = 0.
//!
//! ## Frequencies
//!
//! Barycentric frequencies are used when the context offers them. Otherwise the
//! topocentric column of the TOAs is used and one warning is logged per call.

pub mod constant;
pub mod power_law;

use log::{debug, warn};

use crate::constants::{Au, DispersionMeasure, ElectronDensity, MHz, Second, AU_PC, MIN_DISPERSION_FREQ};
use crate::dispersion::{ColdPlasma, DispersionEvaluator};
use crate::parameters::ParfileFormat;
use crate::providers::{FrequencyProvider, GeometryProvider, SunGeometry};
use crate::solarwind_errors::SolarWindError;
use crate::toas::Toas;

/// External capabilities consumed by the models.
pub struct TimingContext {
    geometry: Box<dyn GeometryProvider>,
    frequency: Box<dyn FrequencyProvider>,
    dispersion: Box<dyn DispersionEvaluator>,
}

impl TimingContext {
    /// Build a context with the cold-plasma dispersion law.
    pub fn new(
        geometry: impl GeometryProvider + 'static,
        frequency: impl FrequencyProvider + 'static,
    ) -> Self {
        TimingContext {
            geometry: Box::new(geometry),
            frequency: Box::new(frequency),
            dispersion: Box::new(ColdPlasma::default()),
        }
    }

    pub fn with_dispersion(mut self, dispersion: impl DispersionEvaluator + 'static) -> Self {
        self.dispersion = Box::new(dispersion);
        self
    }

    pub fn dispersion(&self) -> &dyn DispersionEvaluator {
        self.dispersion.as_ref()
    }

    /// Sun geometry for every TOA, checked against the TOA count.
    pub fn sun_angle_and_distance(&self, toas: &Toas) -> Result<Vec<SunGeometry>, SolarWindError> {
        let geometry = self.geometry.sun_angle_and_distance(toas)?;
        if geometry.len() != toas.len() {
            return Err(SolarWindError::LengthMismatch {
                expected: toas.len(),
                got: geometry.len(),
            });
        }
        Ok(geometry)
    }

    /// Frequencies used for dedispersion.
    ///
    /// Return
    /// ------
    /// * Barycentric frequencies when the provider has them, the topocentric
    ///   column otherwise (with a warning).
    pub fn radio_frequencies(&self, toas: &Toas) -> Result<Vec<MHz>, SolarWindError> {
        let freqs = match self.frequency.barycentric_radio_freq(toas) {
            Some(freqs) => freqs,
            None => {
                warn!("Using topocentric frequency for dedispersion!");
                toas.freqs()
            }
        };
        if freqs.len() != toas.len() {
            return Err(SolarWindError::LengthMismatch {
                expected: toas.len(),
                got: freqs.len(),
            });
        }
        Ok(freqs)
    }
}

/// Convert a geometry factor in AU to a DM derivative in pc.
pub(crate) fn geometry_to_parsec(geometry: Vec<Au>) -> Vec<f64> {
    geometry.into_iter().map(|g| g * AU_PC).collect()
}

pub trait SolarWindModel {
    /// Electron density at 1 AU (cm⁻³).
    fn amplitude(&self) -> ElectronDensity;

    /// Geometric factor of every TOA, in AU.
    fn geometry(&self, toas: &Toas, ctx: &TimingContext) -> Result<Vec<Au>, SolarWindError>;

    /// Solar-wind dispersion measure (pc/cm³).
    fn dispersion_measure(
        &self,
        toas: &Toas,
        ctx: &TimingContext,
    ) -> Result<Vec<DispersionMeasure>, SolarWindError>;

    /// Derivative of the DM with respect to the amplitude (pc).
    fn d_dm_d_amplitude(&self, toas: &Toas, ctx: &TimingContext) -> Result<Vec<f64>, SolarWindError>;

    /// Parameter-file lines of the model in the named dialect.
    fn print_par(&self, format: &str) -> Result<String, SolarWindError>;

    /// Solar-wind dispersion delay (s).
    fn delay(&self, toas: &Toas, ctx: &TimingContext) -> Result<Vec<Second>, SolarWindError> {
        if self.amplitude() == 0.0 {
            debug!("zero solar-wind amplitude, delay skipped for {} TOAs", toas.len());
            return Ok(vec![0.0; toas.len()]);
        }
        let freqs = ctx.radio_frequencies(toas)?;
        let dm = self.dispersion_measure(toas, ctx)?;
        ctx.dispersion().delay(&dm, &freqs)
    }

    /// Derivative of the delay with respect to the amplitude (s·cm³).
    ///
    /// Entries whose frequency is below 1 MHz are exactly zero.
    fn d_delay_d_amplitude(&self, toas: &Toas, ctx: &TimingContext) -> Result<Vec<f64>, SolarWindError> {
        let freqs = ctx.radio_frequencies(toas)?;
        let d_dm = self.d_dm_d_amplitude(toas, ctx)?;
        let deriv = ctx.dispersion().d_delay_d_dmparam(&d_dm, &freqs)?;
        Ok(deriv
            .into_iter()
            .zip(freqs)
            .map(|(d, f)| if f < MIN_DISPERSION_FREQ { 0.0 } else { d })
            .collect())
    }
}

/// Parse the dialect argument of `print_par`.
pub(crate) fn parfile_format(format: &str) -> Result<ParfileFormat, SolarWindError> {
    format.parse()
}
