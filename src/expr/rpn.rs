use crate::error::EvalError;
use crate::expr::stack::Stack;
use crate::expr::token::{Token, TokenSequence};
use log::trace;

/// Evaluates a postfix sequence at `x`.
///
/// Division by zero, logs of non-positive numbers and the like are not
/// errors: they produce infinity or NaN, which the caller receives as-is.
pub fn evaluate(postfix: &TokenSequence, x: f64) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(postfix, x)
}

/// Evaluates `postfix` at every point of `xs`, stopping at the first error.
pub fn evaluate_many(postfix: &TokenSequence, xs: &[f64]) -> Result<Vec<f64>, EvalError> {
    let mut evaluator = Evaluator::new();
    xs.iter()
        .map(|&x| evaluator.evaluate(postfix, x))
        .collect()
}

/// Holds the operand stack between calls so repeated evaluation of the same
/// expression does not reallocate. Results depend only on `(postfix, x)`.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Stack<f64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
        }
    }

    pub fn evaluate(&mut self, postfix: &TokenSequence, x: f64) -> Result<f64, EvalError> {
        self.stack.clear();

        for token in postfix {
            match *token {
                Token::Number(value) => self.stack.push(value)?,
                Token::Variable => self.stack.push(x)?,
                Token::Operator { kind, .. } => {
                    let rhs = self.pop_operand(token)?;
                    let lhs = self.pop_operand(token)?;
                    let result = kind.apply(lhs, rhs);
                    trace!("{lhs} {} {rhs} = {result}", kind.symbol());
                    self.stack.push(result)?;
                }
                Token::Function(kind) => {
                    let value = self.pop_operand(token)?;
                    let result = kind.apply(value);
                    trace!("{}({value}) = {result}", kind.name());
                    self.stack.push(result)?;
                }
                Token::LeftBracket | Token::RightBracket => {
                    return Err(EvalError::MalformedExpression(
                        "bracket in postfix sequence".to_string(),
                    ))
                }
            }
        }

        match self.stack.len() {
            1 => self.stack.pop().ok_or_else(|| {
                EvalError::MalformedExpression("operand stack emptied unexpectedly".to_string())
            }),
            0 => Err(EvalError::MalformedExpression(
                "expression produced no value".to_string(),
            )),
            n => Err(EvalError::MalformedExpression(format!(
                "{} values left on the stack, expected 1",
                n
            ))),
        }
    }

    fn pop_operand(&mut self, token: &Token) -> Result<f64, EvalError> {
        self.stack.pop().ok_or_else(|| {
            EvalError::MalformedExpression(format!("not enough operands for '{}'", token))
        })
    }
}
