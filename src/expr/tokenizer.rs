use crate::error::TokenizeError;
use crate::expr::token::{FunctionKind, OperatorKind, Token, TokenSequence};
use log::{debug, trace, warn};

/// Tokenizes with the lenient policy: unrecognized characters are logged
/// and skipped.
pub fn tokenize(expression: &str) -> Result<TokenSequence, TokenizeError> {
    Tokenizer::new().tokenize(expression)
}

/// A character the tokenizer could not match, with its char offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipped {
    pub position: usize,
    pub character: char,
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    strict: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// In strict mode the first unrecognized character aborts tokenization.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn tokenize(&self, expression: &str) -> Result<TokenSequence, TokenizeError> {
        self.tokenize_with_report(expression)
            .map(|(sequence, _)| sequence)
    }

    /// Same as `tokenize`, also returning every character that was skipped.
    pub fn tokenize_with_report(
        &self,
        expression: &str,
    ) -> Result<(TokenSequence, Vec<Skipped>), TokenizeError> {
        debug!("Tokenizing expression: {}", expression);
        let chars: Vec<char> = expression.chars().collect();
        let mut output: Vec<Token> = Vec::with_capacity(chars.len());
        let mut skipped = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let ch = chars[pos];

            if ch.is_whitespace() {
                pos += 1;
                continue;
            }

            if let Some(token) = structural_token(ch) {
                if token == Token::LeftBracket {
                    insert_implicit_multiply(&mut output);
                }
                output.push(token);
                pos += 1;
                continue;
            }

            if ch == 'x' {
                insert_implicit_multiply(&mut output);
                output.push(Token::Variable);
                pos += 1;
                continue;
            }

            if let Some((value, len)) = match_number(&chars[pos..]) {
                output.push(Token::Number(value));
                pos += len;
                continue;
            }

            if let Some((function, len)) = match_function(&chars[pos..]) {
                insert_implicit_multiply(&mut output);
                output.push(Token::Function(function));
                pos += len;
                continue;
            }

            if self.strict {
                return Err(TokenizeError::UnrecognizedCharacter {
                    position: pos,
                    character: ch,
                });
            }
            warn!("Unrecognized character '{}' at position {}, skipping", ch, pos);
            skipped.push(Skipped {
                position: pos,
                character: ch,
            });
            pos += 1;
        }

        let sequence = TokenSequence::new(output);
        debug!("Tokenized: {}", sequence);
        Ok((sequence, skipped))
    }
}

fn structural_token(ch: char) -> Option<Token> {
    match ch {
        '(' => Some(Token::LeftBracket),
        ')' => Some(Token::RightBracket),
        _ => OperatorKind::from_symbol(ch).map(Token::operator),
    }
}

/// `4x`, `4(`, `)(`, `4sin` and `)sin` all multiply implicitly.
fn insert_implicit_multiply(output: &mut Vec<Token>) {
    if let Some(Token::Number(_) | Token::RightBracket) = output.last() {
        trace!("Inserting implicit multiplication");
        output.push(Token::operator(OperatorKind::Multiply));
    }
}

/// Matches `\d+(\.\d+)?` at the start of `chars`. A trailing `.` with no
/// digits after it is not part of the literal.
fn match_number(chars: &[char]) -> Option<(f64, usize)> {
    let integer_len = chars.iter().take_while(|c| c.is_ascii_digit()).count();
    if integer_len == 0 {
        return None;
    }

    let mut len = integer_len;
    if chars.get(len) == Some(&'.') {
        let fraction_len = chars[len + 1..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count();
        if fraction_len > 0 {
            len += 1 + fraction_len;
        }
    }

    let literal: String = chars[..len].iter().collect();
    literal.parse::<f64>().ok().map(|value| (value, len))
}

fn match_function(chars: &[char]) -> Option<(FunctionKind, usize)> {
    FunctionKind::ALL.into_iter().find_map(|function| {
        let name = function.name();
        let len = name.len();
        let candidate: String = chars.iter().take(len).collect();
        (candidate.chars().count() == len && candidate.eq_ignore_ascii_case(name))
            .then_some((function, len))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mul() -> Token {
        Token::operator(OperatorKind::Multiply)
    }

    fn op(kind: OperatorKind) -> Token {
        Token::operator(kind)
    }

    fn tokens(expression: &str) -> Vec<Token> {
        tokenize(expression).unwrap().tokens().to_vec()
    }

    #[test]
    fn test_implicit_multiplication_before_variable() {
        assert_eq!(
            tokens("4x"),
            vec![Token::Number(4.0), mul(), Token::Variable]
        );
    }

    #[test]
    fn test_no_implicit_multiplication_at_start_of_function() {
        assert_eq!(
            tokens("sin(4)"),
            vec![
                Token::Function(FunctionKind::Sin),
                Token::LeftBracket,
                Token::Number(4.0),
                Token::RightBracket,
            ]
        );
    }

    #[test]
    fn test_implicit_multiplication_before_bracket() {
        assert_eq!(
            tokens("4(x+1)"),
            vec![
                Token::Number(4.0),
                mul(),
                Token::LeftBracket,
                Token::Variable,
                op(OperatorKind::Add),
                Token::Number(1.0),
                Token::RightBracket,
            ]
        );
    }

    #[test]
    fn test_implicit_multiplication_between_groups() {
        let result = tokens("(x)(x)");
        assert_eq!(result[2], Token::RightBracket);
        assert_eq!(result[3], mul());
        assert_eq!(result[4], Token::LeftBracket);
    }

    #[test]
    fn test_implicit_multiplication_before_function() {
        assert_eq!(
            tokens("4sin(x)")[..3],
            [Token::Number(4.0), mul(), Token::Function(FunctionKind::Sin)]
        );
        assert_eq!(
            tokens("(2)cos(x)")[2..5],
            [
                Token::RightBracket,
                mul(),
                Token::Function(FunctionKind::Cos)
            ]
        );
    }

    #[test]
    fn test_no_implicit_multiplication_after_operator_or_variable() {
        assert_eq!(
            tokens("2*x"),
            vec![Token::Number(2.0), mul(), Token::Variable]
        );
        assert_eq!(
            tokens("x(1)"),
            vec![
                Token::Variable,
                Token::LeftBracket,
                Token::Number(1.0),
                Token::RightBracket,
            ]
        );
    }

    #[test]
    fn test_all_operators_and_functions() {
        assert_eq!(
            tokens("1+2-3*4/5^6"),
            vec![
                Token::Number(1.0),
                op(OperatorKind::Add),
                Token::Number(2.0),
                op(OperatorKind::Subtract),
                Token::Number(3.0),
                op(OperatorKind::Multiply),
                Token::Number(4.0),
                op(OperatorKind::Divide),
                Token::Number(5.0),
                op(OperatorKind::Power),
                Token::Number(6.0),
            ]
        );

        let functions: Vec<Token> = tokens("sin cos tan ln exp log");
        assert_eq!(
            functions,
            FunctionKind::ALL.map(Token::Function).to_vec()
        );
    }

    #[test]
    fn test_function_names_are_case_insensitive() {
        assert_eq!(
            tokens("SIN(x)")[0],
            Token::Function(FunctionKind::Sin)
        );
        assert_eq!(tokens("Ln(x)")[0], Token::Function(FunctionKind::Ln));
    }

    #[test]
    fn test_decimal_literals() {
        assert_eq!(tokens("3.25"), vec![Token::Number(3.25)]);
        assert_eq!(tokens("0.5x")[0], Token::Number(0.5));
        assert_eq!(tokens("12345"), vec![Token::Number(12345.0)]);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(tokens("  4 \t x\n"), tokens("4x"));
        assert!(tokens("   ").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_lenient_policy_skips_unknown_characters() {
        let (sequence, skipped) = Tokenizer::new()
            .tokenize_with_report("2 @ 3")
            .unwrap();
        assert_eq!(sequence.tokens(), &[Token::Number(2.0), Token::Number(3.0)]);
        assert_eq!(
            skipped,
            vec![Skipped {
                position: 2,
                character: '@'
            }]
        );
    }

    #[test]
    fn test_trailing_decimal_point_is_skipped() {
        let (sequence, skipped) = Tokenizer::new().tokenize_with_report("4.").unwrap();
        assert_eq!(sequence.tokens(), &[Token::Number(4.0)]);
        assert_eq!(skipped[0].character, '.');
    }

    #[test]
    fn test_strict_policy_aborts() {
        let result = Tokenizer::new().strict(true).tokenize("x + y");
        assert_eq!(
            result,
            Err(TokenizeError::UnrecognizedCharacter {
                position: 4,
                character: 'y'
            })
        );
    }

    #[test]
    fn test_partial_function_name_is_not_a_function() {
        let (sequence, skipped) = Tokenizer::new().tokenize_with_report("si(x)").unwrap();
        assert_eq!(skipped.len(), 2);
        assert_eq!(sequence.tokens()[0], Token::LeftBracket);
    }

    #[test]
    fn test_output_preserves_reading_order() {
        assert_eq!(
            tokenize("(x+1)(x+2)").unwrap().to_string(),
            "['(', 'x', '+', '1.00', ')', '*', '(', 'x', '+', '2.00', ')']"
        );
    }
}
