use thiserror::Error;

/// Raised by the tokenizer in strict mode. The lenient tokenizer only logs these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter { position: usize, character: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error(transparent)]
    Stack(#[from] StackError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    #[error(transparent)]
    Stack(#[from] StackError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack overflow: capacity of {capacity} exceeded")]
    Overflow { capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationError {
    #[error("strip count must be at least 1, got {0}")]
    InvalidStripCount(usize),

    #[error("Simpson's rule needs an even strip count, got {0}")]
    OddStripCount(usize),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quadrature rule '{0}' (expected simpson or trapezoidal)")]
pub struct RuleParseError(pub String);

/// Any failure along the string → tokens → postfix → value pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Integration(#[from] IntegrationError),
}
