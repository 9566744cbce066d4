use crate::error::ParseError;
use crate::expr::stack::Stack;
use crate::expr::token::{Associativity, Token, TokenSequence};
use log::{debug, trace};

/// Converts an infix token sequence to postfix (evaluation order).
///
/// A leading operator is pushed without complaint; operand-count problems
/// surface later, in the evaluator.
pub fn to_postfix(infix: &TokenSequence) -> Result<TokenSequence, ParseError> {
    let mut operators: Stack<Token> = Stack::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix.len());

    for token in infix {
        trace!("shunting {token:?}");
        match *token {
            Token::Number(_) | Token::Variable => output.push(*token),

            Token::Function(_) | Token::LeftBracket => operators.push(*token)?,

            Token::RightBracket => {
                loop {
                    match operators.pop() {
                        Some(Token::LeftBracket) => break,
                        Some(top) => output.push(top),
                        None => return Err(ParseError::MismatchedParentheses),
                    }
                }
                if let Some(Token::Function(_)) = operators.peek() {
                    if let Some(function) = operators.pop() {
                        output.push(function);
                    }
                }
            }

            Token::Operator {
                precedence,
                associativity,
                ..
            } => {
                while let Some(top) = operators.peek() {
                    if !yields_to(top, precedence, associativity) {
                        break;
                    }
                    if let Some(top) = operators.pop() {
                        output.push(top);
                    }
                }
                operators.push(*token)?;
            }
        }
    }

    while let Some(top) = operators.pop() {
        if top.is_bracket() {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top);
    }

    let postfix = TokenSequence::new(output);
    debug!("Postfix: {}", postfix);
    Ok(postfix)
}

/// Whether the stack top must be emitted before pushing an operator with
/// the given precedence and associativity.
fn yields_to(top: &Token, precedence: u8, associativity: Associativity) -> bool {
    match *top {
        Token::Function(_) => true,
        Token::Operator {
            precedence: top_precedence,
            ..
        } => {
            top_precedence > precedence
                || (top_precedence == precedence && associativity == Associativity::Left)
        }
        _ => false,
    }
}
