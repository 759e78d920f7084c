//! # Line-of-sight integral for a power-law electron density
//!
//! For a radial density n(r) ∝ r⁻ᵖ the column along a straight line with impact
//! parameter `b` reduces to
//!
//! ```text
//! ∫ (b² + z²)^(-p/2) dz = b^(1-p) · F(b, z, p)
//! F(b, z, p) = (z/b) · ₂F₁(½, p/2; 3/2; −(z/b)²) = ∫₀^{z/b} (1 + t²)^(-p/2) dt
//! ```
//!
//! [`dm_p_int`] returns `F`. The hypergeometric function is only needed on the
//! negative real axis with `a = ½, c = 3/2`, so it is evaluated through the
//! integral representation on the right:
//!
//! * `u² ≤ 3`: Pfaff transformation, `₂F₁(½, β; 3/2; −u²) = (1+u²)^(−β) ₂F₁(1, β; 3/2; w)`
//!   with `w = u²/(1+u²) ≤ 3/4`, then a plain power series in `w`.
//! * `u² > 3` and `β > ½`: the complete integral `√π Γ(β−½) / (2Γ(β))` minus the tail
//!   `∫ᵤ^∞ (1+t²)^(−β) dt`, expanded as an alternating series in `1/u²`.
//!
//! Both series converge at least as fast as `(3/4)ⁿ`, including for the large
//! `z/b` ratios produced by the 10¹⁴ cm outer bound.
//!
//! ## References
//!
//! * Hazboun et al. (2022, ApJ, 929, 39), eq. 12
//! * Abramowitz & Stegun 15.3.5 (Pfaff transformation)

use statrs::function::gamma::ln_gamma;

use crate::solarwind_errors::SolarWindError;

/// Largest `u²` handled by the Pfaff series.
const PFAFF_LIMIT: f64 = 3.0;

/// Hard cap on series terms.
const MAX_TERMS: usize = 100_000;

/// Evaluate `∫₀ᵘ (1 + t²)^(−β) dt` for `u ≥ 0`.
fn column_integral(u: f64, beta: f64) -> Result<f64, SolarWindError> {
    let contr = f64::EPSILON;
    let u2 = u * u;

    if u2 <= PFAFF_LIMIT || beta <= 0.5 {
        let w = u2 / (1.0 + u2);
        let mut term = 1.0;
        let mut sum = 1.0;
        for n in 0..MAX_TERMS {
            let n = n as f64;
            term *= (beta + n) / (1.5 + n) * w;
            sum += term;
            if term.abs() <= contr * sum.abs() {
                return Ok(u * (1.0 + u2).powf(-beta) * sum);
            }
        }
        return Err(SolarWindError::SeriesNotConverged { beta, x: -u2 });
    }

    let complete =
        0.5 * std::f64::consts::PI.sqrt() * (ln_gamma(beta - 0.5) - ln_gamma(beta)).exp();

    // ∫ᵤ^∞ (1+t²)^(−β) dt = Σ (−1)ᵏ (β)ₖ/k! · v^(2β−1+2k) / (2β−1+2k),  v = 1/u
    let v2 = 1.0 / u2;
    let lead = u.powf(1.0 - 2.0 * beta);
    let mut coeff = 1.0;
    let mut vpow = 1.0;
    let mut tail = 0.0;
    for k in 0..MAX_TERMS {
        let kf = k as f64;
        let term = coeff * vpow / (2.0 * beta - 1.0 + 2.0 * kf);
        tail += term;
        if k > 0 && term.abs() <= contr * tail.abs() {
            return Ok(complete - lead * tail);
        }
        coeff *= -(beta + kf) / (kf + 1.0);
        vpow *= v2;
    }
    Err(SolarWindError::SeriesNotConverged { beta, x: -u2 })
}

/// Gauss hypergeometric function `₂F₁(½, β; 3/2; x)` on the non-positive real axis.
///
/// Arguments
/// ---------
/// * `beta`: second numerator parameter (half the power-law index)
/// * `x`: argument, must satisfy `x ≤ 0`
///
/// Return
/// ------
/// * The value of the function, or [`SolarWindError::SeriesNotConverged`] when
///   `x > 0` or a series fails to reach machine precision.
pub fn hyp2f1_line_of_sight(beta: f64, x: f64) -> Result<f64, SolarWindError> {
    if x > 0.0 || x.is_nan() {
        return Err(SolarWindError::SeriesNotConverged { beta, x });
    }
    if x == 0.0 {
        return Ok(1.0);
    }
    let u = (-x).sqrt();
    Ok(column_integral(u, beta)? / u)
}

/// Integral function for the power-law dispersion measure.
///
/// Computes `(z/b) · ₂F₁(½, p/2; 3/2; −(z/b)²)`, which is odd in `z`.
/// `b` and `z` must share a length unit; the result is dimensionless.
///
/// Arguments
/// ---------
/// * `b`: impact parameter
/// * `z`: signed distance along the line of sight from the point of closest approach
/// * `p`: power-law index of the radial density
///
/// Return
/// ------
/// * `Result<f64, SolarWindError>` – the integral value, or a convergence error.
pub fn dm_p_int(b: f64, z: f64, p: f64) -> Result<f64, SolarWindError> {
    let u = z / b;
    let value = column_integral(u.abs(), p / 2.0)?;
    Ok(value.copysign(u))
}
