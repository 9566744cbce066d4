pub mod error;
pub mod expr;
pub mod integrate;

pub use error::Error;
pub use expr::Expression;
pub use integrate::QuadratureRule;

/// Parses `expression` once and integrates it over `[lower, upper]`.
pub fn integrate_expression(
    expression: &str,
    lower: f64,
    upper: f64,
    rule: QuadratureRule,
    strips: usize,
) -> Result<f64, Error> {
    Expression::parse(expression)?.integrate(lower, upper, rule, strips)
}

/// Parses and evaluates `expression` at a single point.
pub fn evaluate_expression(expression: &str, x: f64) -> Result<f64, Error> {
    Expression::parse(expression)?.eval(x)
}
