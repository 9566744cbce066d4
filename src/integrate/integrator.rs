use crate::error::IntegrationError;
use crate::expr::{Evaluator, TokenSequence};
use crate::integrate::QuadratureRule;
use log::debug;

/// Ranges narrower than this integrate to exactly zero.
pub const DEGENERATE_WIDTH: f64 = 1e-7;

pub const DEFAULT_STRIPS: usize = 100;

/// Integrates a postfix expression over `[lower, upper]` with the default
/// settings of [`Integrator`] apart from `rule` and `strips`.
pub fn integrate(
    postfix: &TokenSequence,
    lower: f64,
    upper: f64,
    rule: QuadratureRule,
    strips: usize,
) -> Result<f64, IntegrationError> {
    Integrator::new()
        .rule(rule)
        .strips(strips)
        .integrate(postfix, lower, upper)
}

/// Quadrature settings.
///
/// A reversed range (`lower > upper`) is swapped before integrating and the
/// result is **not** negated, so `[1, 0]` gives the same value as `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Integrator {
    rule: QuadratureRule,
    strips: usize,
    tolerance: f64,
    require_even_strips: bool,
}

impl Integrator {
    pub fn new() -> Self {
        Self {
            rule: QuadratureRule::default(),
            strips: DEFAULT_STRIPS,
            tolerance: DEGENERATE_WIDTH,
            require_even_strips: true,
        }
    }

    pub fn rule(mut self, rule: QuadratureRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn strips(mut self, strips: usize) -> Self {
        self.strips = strips;
        self
    }

    /// Width below which a range counts as zero-width.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// With `false`, Simpson's rule accepts odd strip counts and applies the
    /// 4/2 alternation anyway. The last strip is then weighted as if it were
    /// half of a pair, so the result is only approximate.
    pub fn require_even_strips(mut self, require: bool) -> Self {
        self.require_even_strips = require;
        self
    }

    pub fn integrate(
        &self,
        postfix: &TokenSequence,
        lower: f64,
        upper: f64,
    ) -> Result<f64, IntegrationError> {
        let strips = self.strips;
        if strips < 1 {
            return Err(IntegrationError::InvalidStripCount(strips));
        }
        if self.rule == QuadratureRule::Simpson && self.require_even_strips && strips % 2 != 0 {
            return Err(IntegrationError::OddStripCount(strips));
        }

        let (lower, upper) = if lower > upper {
            debug!("Swapping reversed bounds [{lower}, {upper}]");
            (upper, lower)
        } else {
            (lower, upper)
        };
        if (upper - lower).abs() < self.tolerance {
            return Ok(0.0);
        }

        let h = (upper - lower) / strips as f64;
        debug!(
            "Integrating over [{lower}, {upper}] with {} and {strips} strips (h = {h})",
            self.rule
        );

        let mut evaluator = Evaluator::new();
        let mut sum = evaluator.evaluate(postfix, lower)? + evaluator.evaluate(postfix, upper)?;

        let mut x = lower;
        for i in 1..strips {
            x += h;
            sum += self.rule.interior_weight(i) * evaluator.evaluate(postfix, x)?;
        }

        let result = self.rule.scale(h) * sum;
        debug!("Integral = {result}");
        Ok(result)
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new()
    }
}
