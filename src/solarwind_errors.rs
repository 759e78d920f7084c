use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarWindError {
    #[error("Solar Dispersion Delay not implemented for SWM {0}")]
    UnimplementedSolarWindModel(u32),

    #[error("Spherical Solar Dispersion Delay not implemented for power-law index p <= 1 (got {0})")]
    InvalidPowerLawIndex(f64),

    #[error("Sun geometry unavailable: {0}")]
    GeometryUnavailable(String),

    #[error("Provider returned {got} values for {expected} TOAs")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Hypergeometric series did not converge (beta = {beta}, x = {x})")]
    SeriesNotConverged { beta: f64, x: f64 },

    #[error("Unknown parfile format: {0}")]
    UnknownParfileFormat(String),

    #[error("Error while parsing a parfile line: {0}")]
    ParfileParse(String),
}
