use std::fmt;
use std::str::FromStr;

mod rpn;
mod shunting_yard;
mod stack;
mod token;
mod tokenizer;

pub use rpn::{evaluate, evaluate_many, Evaluator};
pub use shunting_yard::to_postfix;
pub use stack::Stack;
pub use token::{Associativity, FunctionKind, OperatorKind, Token, TokenSequence};
pub use tokenizer::{tokenize, Skipped, Tokenizer};

use crate::error::Error;
use crate::integrate::{integrate, QuadratureRule};
use log::debug;

/// A single-variable expression compiled once to postfix, ready to be
/// evaluated at as many points as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    infix: TokenSequence,
    postfix: TokenSequence,
}

impl Expression {
    /// Tokenizes (leniently) and converts to postfix.
    pub fn parse(source: &str) -> Result<Self, Error> {
        Self::parse_with(&Tokenizer::new(), source)
    }

    pub fn parse_with(tokenizer: &Tokenizer, source: &str) -> Result<Self, Error> {
        let infix = tokenizer.tokenize(source)?;
        let postfix = to_postfix(&infix)?;
        debug!("Compiled '{}' to {}", source, postfix);
        Ok(Self {
            source: source.to_string(),
            infix,
            postfix,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn infix(&self) -> &TokenSequence {
        &self.infix
    }

    pub fn postfix(&self) -> &TokenSequence {
        &self.postfix
    }

    /// True when the expression never reads `x`.
    pub fn is_constant(&self) -> bool {
        !self.postfix.contains_variable()
    }

    pub fn eval(&self, x: f64) -> Result<f64, Error> {
        Ok(evaluate(&self.postfix, x)?)
    }

    pub fn integrate(
        &self,
        lower: f64,
        upper: f64,
        rule: QuadratureRule,
        strips: usize,
    ) -> Result<f64, Error> {
        Ok(integrate(&self.postfix, lower, upper, rule, strips)?)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, ParseError, TokenizeError};
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_and_eval() {
        let expression = Expression::parse("3x^2 - 2x + 1").unwrap();
        assert_eq!(expression.eval(2.0).unwrap(), 9.0);
        assert_eq!(expression.source(), "3x^2 - 2x + 1");
        assert_eq!(expression.to_string(), "3x^2 - 2x + 1");
        assert!(!expression.is_constant());
    }

    #[test]
    fn test_from_str() {
        let expression: Expression = "2^10".parse().unwrap();
        assert!(expression.is_constant());
        assert_eq!(expression.eval(123.0).unwrap(), 1024.0);
    }

    #[test]
    fn test_infix_and_postfix_views() {
        let expression = Expression::parse("(x+1)(x+2)").unwrap();
        assert_eq!(expression.infix().len(), 11);
        assert_eq!(
            expression.postfix().to_string(),
            "['x', '1.00', '+', 'x', '2.00', '+', '*']"
        );
    }

    #[test]
    fn test_errors_are_wrapped() {
        assert_eq!(
            Expression::parse("(x+1"),
            Err(Error::Parse(ParseError::MismatchedParentheses))
        );
        assert_eq!(
            Expression::parse_with(&Tokenizer::new().strict(true), "x % 2"),
            Err(Error::Tokenize(TokenizeError::UnrecognizedCharacter {
                position: 2,
                character: '%'
            }))
        );
        let bare = Expression::parse("+").unwrap();
        assert!(matches!(
            bare.eval(0.0),
            Err(Error::Eval(EvalError::MalformedExpression(_)))
        ));
    }

    #[test]
    fn test_integrate_through_expression() {
        let expression = Expression::parse("x^2").unwrap();
        let area = expression
            .integrate(0.0, 1.0, QuadratureRule::Simpson, 2)
            .unwrap();
        assert_relative_eq!(area, 1.0 / 3.0, epsilon = 1e-12);
    }
}
