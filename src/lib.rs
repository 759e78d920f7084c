//! # solarwind
//!
//! Solar-wind dispersion corrections for pulsar timing.
//!
//! The crate provides two dispersion models, a constant-density wind
//! ([`SolarWindDispersion`]) and a power-law wind ([`SphericalSolarWindDispersion`]).
//! Each computes the solar-wind DM, the resulting delay and their derivatives with
//! respect to the density amplitude for a set of [`Toas`].
//!
//! ```rust
//! use hifitime::Epoch;
//! use solarwind::{
//!     DopplerCorrected, PulsarLineOfSight, SolarWindDispersion, SolarWindModel,
//!     SolarWindShape, TimingContext, Toa, Toas,
//! };
//!
//! let los = PulsarLineOfSight::from_equatorial(5.0, -0.66);
//! let ctx = TimingContext::new(los.clone(), DopplerCorrected::new(*los.direction()));
//!
//! let epoch = Epoch::from_gregorian_utc_at_midnight(2023, 12, 1);
//! let toas: Toas = [1400.0, 820.0].into_iter().map(|f| Toa::from_epoch(epoch, f)).collect();
//!
//! let model = SolarWindDispersion::new(7.9, SolarWindShape::Edwards2006);
//! let delays = model.delay(&toas, &ctx)?;
//! assert!(delays[1] > delays[0]);
//! # Ok::<(), solarwind::solarwind_errors::SolarWindError>(())
//! ```

pub mod constants;
pub mod dispersion;
pub mod hypergeometric;
pub mod models;
pub mod parameters;
pub mod providers;
pub mod solarwind_errors;
pub mod sun_position;
pub mod toas;

pub use dispersion::{ColdPlasma, DispersionEvaluator};
pub use models::constant::{SolarWindDispersion, SolarWindShape};
pub use models::power_law::SphericalSolarWindDispersion;
pub use models::{SolarWindModel, TimingContext};
pub use parameters::{ParfileFormat, Parameter};
pub use providers::{
    DopplerCorrected, FrequencyProvider, GeometryProvider, PulsarLineOfSight, SunGeometry,
    TopocentricOnly,
};
pub use solarwind_errors::SolarWindError;
pub use toas::{Toa, Toas};
