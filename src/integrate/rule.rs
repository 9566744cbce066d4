use crate::error::RuleParseError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum QuadratureRule {
    #[default]
    Simpson,
    Trapezoidal,
}

impl QuadratureRule {
    /// Weight of the interior sample with 1-based index `i`.
    pub(crate) fn interior_weight(&self, i: usize) -> f64 {
        match self {
            QuadratureRule::Trapezoidal => 2.0,
            QuadratureRule::Simpson if i % 2 == 1 => 4.0,
            QuadratureRule::Simpson => 2.0,
        }
    }

    /// The factor applied to the weighted sum, `h/3` or `h/2`.
    pub(crate) fn scale(&self, h: f64) -> f64 {
        match self {
            QuadratureRule::Simpson => h / 3.0,
            QuadratureRule::Trapezoidal => h / 2.0,
        }
    }
}

impl FromStr for QuadratureRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simpson" | "simpsons" | "simpson's" => Ok(QuadratureRule::Simpson),
            "trapezoidal" | "trapezium" | "trapezoid" => Ok(QuadratureRule::Trapezoidal),
            _ => Err(RuleParseError(s.to_string())),
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadratureRule::Simpson => write!(f, "Simpson's rule"),
            QuadratureRule::Trapezoidal => write!(f, "trapezoidal rule"),
        }
    }
}
