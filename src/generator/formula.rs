//! 公式求值：对生成值绑定求值算术表达式
//!
//! Supports `+ - * / ( )`, unary minus, decimal literals and variable
//! identifiers. Standard precedence and associativity. Evaluation failure is
//! a recoverable per-formula condition and never aborts the process.

use thiserror::Error;

use crate::constants::NULL_FORMULA_SENTINEL;
use crate::types::GeneratedValues;

#[derive(Debug, Error)]
pub enum FormulaError {
    #[error("unexpected character '{0}' in formula")]
    UnexpectedChar(char),
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("unexpected end of formula")]
    UnexpectedEnd,
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("missing closing parenthesis")]
    UnbalancedParen,
    #[error("non-finite result")]
    NonFinite,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(formula: &str) -> Result<Vec<Token>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = formula.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| FormulaError::MalformedNumber(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_alphanumeric() || d == '_' {
                        ident.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(ident));
            }
            other => return Err(FormulaError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

struct Parser<'a> {
    tokens: Vec<Token>,
    index: usize,
    /// `None` puts the parser in syntax-check mode: identifiers resolve to a
    /// dummy value instead of failing, so template validation can accept
    /// formulas before any values exist.
    bindings: Option<&'a GeneratedValues>,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token>, bindings: Option<&'a GeneratedValues>) -> Self {
        Self {
            tokens,
            index: 0,
            bindings,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn evaluate(mut self) -> Result<f64, FormulaError> {
        let value = self.add_sub()?;
        if self.index != self.tokens.len() {
            return Err(FormulaError::UnexpectedToken);
        }
        Ok(value)
    }

    fn add_sub(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.mul_div()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.consume();
                    value += self.mul_div()?;
                }
                Some(Token::Minus) => {
                    self.consume();
                    value -= self.mul_div()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn mul_div(&mut self) -> Result<f64, FormulaError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.consume();
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.consume();
                    value /= self.unary()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, FormulaError> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.consume();
            return Ok(-self.unary()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<f64, FormulaError> {
        match self.consume() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Ident(name)) => match self.bindings {
                Some(bindings) => bindings
                    .get(&name)
                    .map(|&v| v as f64)
                    .ok_or(FormulaError::UnknownIdentifier(name)),
                None => Ok(1.0),
            },
            Some(Token::LParen) => {
                let value = self.add_sub()?;
                if !matches!(self.consume(), Some(Token::RParen)) {
                    return Err(FormulaError::UnbalancedParen);
                }
                Ok(value)
            }
            None => Err(FormulaError::UnexpectedEnd),
            Some(_) => Err(FormulaError::UnexpectedToken),
        }
    }
}

/// Whether a formula is the skip sentinel: empty or the literal `"null"`.
pub fn is_null_sentinel(formula: &str) -> bool {
    formula.is_empty() || formula == NULL_FORMULA_SENTINEL
}

/// Parse a formula without real bindings, for template pre-flight checks.
/// Identifier resolution is deferred to generation time, so any identifier
/// is accepted here.
pub fn check_syntax(formula: &str) -> Result<(), FormulaError> {
    let tokens = tokenize(formula)?;
    Parser::new(tokens, None).evaluate()?;
    Ok(())
}

fn evaluate_inner(formula: &str, bindings: &GeneratedValues) -> Result<f64, FormulaError> {
    let tokens = tokenize(formula)?;
    let value = Parser::new(tokens, Some(bindings)).evaluate()?;
    if !value.is_finite() {
        return Err(FormulaError::NonFinite);
    }
    // 保留两位小数
    Ok((value * 100.0).round() / 100.0)
}

/// Evaluate a formula against the generated values. Returns `None` for the
/// `"null"` sentinel and for any evaluation failure; the caller decides
/// whether a missing value is fatal (correct answer) or skippable
/// (distractor).
pub fn evaluate(formula: &str, bindings: &GeneratedValues) -> Option<f64> {
    if is_null_sentinel(formula) {
        return None;
    }
    match evaluate_inner(formula, bindings) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(formula, error = %e, "Formula evaluation failed");
            None
        }
    }
}
