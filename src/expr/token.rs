use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 5] = [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Divide,
        OperatorKind::Power,
    ];

    pub fn precedence(&self) -> u8 {
        match self {
            OperatorKind::Power => 4,
            OperatorKind::Multiply | OperatorKind::Divide => 3,
            OperatorKind::Add | OperatorKind::Subtract => 2,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            OperatorKind::Power => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            OperatorKind::Add => '+',
            OperatorKind::Subtract => '-',
            OperatorKind::Multiply => '*',
            OperatorKind::Divide => '/',
            OperatorKind::Power => '^',
        }
    }

    /// IEEE 754 semantics throughout: `1/0` is infinite, `0/0` is NaN.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            OperatorKind::Add => lhs + rhs,
            OperatorKind::Subtract => lhs - rhs,
            OperatorKind::Multiply => lhs * rhs,
            OperatorKind::Divide => lhs / rhs,
            OperatorKind::Power => lhs.powf(rhs),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl TryFrom<&str> for OperatorKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => None,
        };
        kind.ok_or_else(|| format!("Unknown operator: {}", value))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Sin,
    Cos,
    Tan,
    Ln,
    Exp,
    Log,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 6] = [
        FunctionKind::Sin,
        FunctionKind::Cos,
        FunctionKind::Tan,
        FunctionKind::Ln,
        FunctionKind::Exp,
        FunctionKind::Log,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::Sin => "sin",
            FunctionKind::Cos => "cos",
            FunctionKind::Tan => "tan",
            FunctionKind::Ln => "ln",
            FunctionKind::Exp => "exp",
            FunctionKind::Log => "log",
        }
    }

    /// Like the operators, domain errors come back as NaN or infinity.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            FunctionKind::Sin => value.sin(),
            FunctionKind::Cos => value.cos(),
            FunctionKind::Tan => value.tan(),
            FunctionKind::Ln => value.ln(),
            FunctionKind::Exp => value.exp(),
            FunctionKind::Log => value.log10(),
        }
    }
}

impl TryFrom<&str> for FunctionKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|function| function.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("Unknown function: {}", value))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Variable,
    Operator {
        kind: OperatorKind,
        precedence: u8,
        associativity: Associativity,
    },
    Function(FunctionKind),
    LeftBracket,
    RightBracket,
}

impl Token {
    /// Builds an operator token with its precedence and associativity filled in.
    pub fn operator(kind: OperatorKind) -> Self {
        Token::Operator {
            kind,
            precedence: kind.precedence(),
            associativity: kind.associativity(),
        }
    }

    /// The numeric value an operand token stands for at `x`.
    pub fn value(&self, x: f64) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            Token::Variable => Some(x),
            _ => None,
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Variable)
    }

    pub fn is_bracket(&self) -> bool {
        matches!(self, Token::LeftBracket | Token::RightBracket)
    }
}

impl From<OperatorKind> for Token {
    fn from(kind: OperatorKind) -> Self {
        Token::operator(kind)
    }
}

impl From<FunctionKind> for Token {
    fn from(kind: FunctionKind) -> Self {
        Token::Function(kind)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{:.2}", value),
            Token::Variable => write!(f, "x"),
            Token::Operator { kind, .. } => write!(f, "{}", kind.symbol()),
            Token::Function(kind) => write!(f, "{}", kind.name()),
            Token::LeftBracket => write!(f, "("),
            Token::RightBracket => write!(f, ")"),
        }
    }
}

/// An immutable, ordered run of tokens in reading (or evaluation) order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn contains_variable(&self) -> bool {
        self.tokens.iter().any(|token| *token == Token::Variable)
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", token)?;
        }
        write!(f, "]")
    }
}
