//! # Timing-model parameters and parfile lines
//!
//! A [`Parameter`](crate::parameters::Parameter) stores one fitted quantity of a solar-wind model
//! together with the bookkeeping a timing package writes to a parameter file: the
//! canonical name, accepted aliases, units, fit flag and optional uncertainty.
//!
//! ## Parfile line layout
//!
//! ```text
//! NE_SW                                 4.0 1 0.5
//! └ name, left-aligned on 15 ┘ └ value, right-aligned on 25 ┘ └ fit flag ┘ └ uncertainty ┘
//! ```
//!
//! The fit flag is written when an uncertainty is known (`0` frozen, `1` free) or
//! when the parameter is free without an uncertainty. Frozen parameters without
//! uncertainty are written as `NAME VALUE` only.
//!
//! Three dialects are understood, see [`ParfileFormat`](crate::parameters::ParfileFormat).
//! Reading uses [`parse_parfile_line`](crate::parameters::parse_parfile_line), which also
//! accepts Fortran `D` exponents (`1.5D-3`).

use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::solarwind_errors::SolarWindError;

static PARFILE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<name>[A-Za-z][A-Za-z0-9_]*)\s+(?P<value>\S+)(?:\s+(?P<fit>[01]))?(?:\s+(?P<unc>\S+))?\s*$")
        .expect("static parfile regex is valid")
});

/// Output dialect of a parameter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParfileFormat {
    #[default]
    Pint,
    Tempo,
    Tempo2,
}

impl FromStr for ParfileFormat {
    type Err = SolarWindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pint" => Ok(ParfileFormat::Pint),
            "tempo" => Ok(ParfileFormat::Tempo),
            "tempo2" => Ok(ParfileFormat::Tempo2),
            _ => Err(SolarWindError::UnknownParfileFormat(s.to_string())),
        }
    }
}

impl TryFrom<&str> for ParfileFormat {
    type Error = SolarWindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Value types a [`Parameter`] can hold.
pub trait ParValue: Copy + PartialEq {
    /// Text written in the value column.
    fn to_par_string(&self) -> String;

    /// Parse the value column.
    fn from_par_str(s: &str) -> Result<Self, SolarWindError>;
}

fn parse_fortran_float(s: &str) -> Result<f64, SolarWindError> {
    s.replace(['D', 'd'], "e")
        .parse::<f64>()
        .map_err(|_| SolarWindError::ParfileParse(format!("invalid number '{s}'")))
}

impl ParValue for f64 {
    fn to_par_string(&self) -> String {
        // Debug keeps a decimal point and the shortest round-trip representation
        format!("{self:?}")
    }

    fn from_par_str(s: &str) -> Result<Self, SolarWindError> {
        parse_fortran_float(s)
    }
}

impl ParValue for u32 {
    fn to_par_string(&self) -> String {
        self.to_string()
    }

    fn from_par_str(s: &str) -> Result<Self, SolarWindError> {
        // Integer selectors are written as floats by some packages ("0.0")
        let value = parse_fortran_float(s)?;
        if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(SolarWindError::ParfileParse(format!(
                "expected a non-negative integer, got '{s}'"
            )));
        }
        Ok(value as u32)
    }
}

/// A model parameter together with its parfile bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter<T> {
    pub name: String,
    pub aliases: Vec<String>,
    pub units: String,
    pub description: String,
    pub value: T,
    pub frozen: bool,
    pub uncertainty: Option<T>,
}

impl<T: ParValue> Parameter<T> {
    /// Create a frozen parameter without uncertainty.
    pub fn new(name: &str, value: T, units: &str, description: &str) -> Self {
        Parameter {
            name: name.to_string(),
            aliases: Vec::new(),
            units: units.to_string(),
            description: description.to_string(),
            value,
            frozen: true,
            uncertainty: None,
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// True when `name` is the canonical name or one of the aliases (case-insensitive).
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Render the parameter as one newline-terminated parfile line.
    ///
    /// Arguments
    /// ---------
    /// * `name`: the name to write, already translated for the target dialect
    pub fn as_parfile_line_named(&self, name: &str) -> String {
        let mut line = format!("{:<15} {:>25}", name, self.value.to_par_string());
        match &self.uncertainty {
            Some(unc) => {
                let fit = if self.frozen { 0 } else { 1 };
                line.push_str(&format!(" {fit} {}", unc.to_par_string()));
            }
            None if !self.frozen => line.push_str(" 1"),
            None => {}
        }
        line.push('\n');
        line
    }

    /// Render the parameter under its canonical name.
    pub fn as_parfile_line(&self) -> String {
        self.as_parfile_line_named(&self.name)
    }

    /// Update value, fit flag and uncertainty from a parsed line.
    pub fn apply(&mut self, line: &ParfileLine) -> Result<(), SolarWindError> {
        self.value = T::from_par_str(&line.value)?;
        if let Some(fit) = line.fit {
            self.frozen = !fit;
        }
        self.uncertainty = line.uncertainty.as_deref().map(T::from_par_str).transpose()?;
        Ok(())
    }
}

impl<T: ParValue> Display for Parameter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value.to_par_string())?;
        if !self.units.is_empty() {
            write!(f, " {}", self.units)?;
        }
        Ok(())
    }
}

/// One tokenized parfile line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParfileLine {
    pub name: String,
    pub value: String,
    pub fit: Option<bool>,
    pub uncertainty: Option<String>,
}

/// Split a parfile line into name, value, fit flag and uncertainty.
///
/// Return
/// ------
/// * `Ok(None)` for blank lines and `#` comments, `Ok(Some(line))` otherwise.
/// * [`SolarWindError::ParfileParse`] when the line does not follow `NAME VALUE [FIT] [UNC]`.
pub fn parse_parfile_line(line: &str) -> Result<Option<ParfileLine>, SolarWindError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let caps = PARFILE_LINE
        .captures(trimmed)
        .ok_or_else(|| SolarWindError::ParfileParse(trimmed.to_string()))?;

    Ok(Some(ParfileLine {
        name: caps["name"].to_string(),
        value: caps["value"].to_string(),
        fit: caps.name("fit").map(|m| m.as_str() == "1"),
        uncertainty: caps.name("unc").map(|m| m.as_str().to_string()),
    }))
}

/// Parse the lines of `text` whose leading name satisfies `wanted`.
///
/// Lines naming other parameters (`JUMP -fe L-wide 0.1 1`, `PSRJ J1909-3744`, …)
/// are skipped without being tokenized.
pub fn select_parfile_lines<'a>(
    text: &'a str,
    wanted: impl Fn(&str) -> bool + 'a,
) -> impl Iterator<Item = Result<ParfileLine, SolarWindError>> + 'a {
    text.lines()
        .filter(move |raw| raw.split_whitespace().next().is_some_and(|name| wanted(name)))
        .filter_map(|raw| parse_parfile_line(raw).transpose())
}
