//! Textual reader for tuple forms.
//!
//! Reads the compact textual encoding the printers emit, e.g.
//! `(:call, :sin, (:call, :/, :pi, 6))`. Symbols carry a `:` sigil (bare
//! words are accepted too, except `true`/`false`, which read as bools),
//! commas are separators on par with whitespace, and numbers follow the
//! usual int / float / `a/b` ratio classification.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::Error;
use crate::form::Form;
use crate::interner::Symbol;
use crate::numeric::Numeric;
use crate::tree::Atom;

// ============================================================================
// Tokens
// ============================================================================

#[derive(Debug)]
enum Token {
    LParen,
    RParen,
    Symbol(Symbol),
    Number(Numeric),
    Str(String),
    Bool(bool),
}

fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            // Commas separate elements but carry no structure
            ',' => {
                chars.next();
            }
            ch if ch.is_whitespace() => {
                chars.next();
            }
            '"' => {
                chars.next();
                tokens.push(Token::Str(read_string(&mut chars)?));
            }
            ':' => {
                chars.next();
                let word = read_word(&mut chars);
                if word.is_empty() {
                    return Err(Error::malformed("expected symbol name after ':'"));
                }
                tokens.push(Token::Symbol(Symbol::intern(&word)));
            }
            ch if ch.is_ascii_digit() => {
                tokens.push(Token::Number(read_number(&mut chars)?));
            }
            '-' => {
                chars.next();
                if chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                    let n = read_number(&mut chars)?;
                    tokens.push(Token::Number(
                        Numeric::Int(0).sub(&n).map_err(Error::malformed)?,
                    ));
                } else {
                    let rest = read_word(&mut chars);
                    tokens.push(Token::Symbol(Symbol::intern(&format!("-{rest}"))));
                }
            }
            _ => {
                let word = read_word(&mut chars);
                match word.as_str() {
                    "true" => tokens.push(Token::Bool(true)),
                    "false" => tokens.push(Token::Bool(false)),
                    _ => tokens.push(Token::Symbol(Symbol::intern(&word))),
                }
            }
        }
    }

    Ok(tokens)
}

fn read_word(chars: &mut Peekable<Chars>) -> String {
    let mut word = String::new();
    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() || ch == '(' || ch == ')' || ch == ',' || ch == '"' {
            break;
        }
        word.push(ch);
        chars.next();
    }
    word
}

fn read_string(chars: &mut Peekable<Chars>) -> Result<String, Error> {
    let mut s = String::new();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => return Ok(s),
            '\\' => match chars.next() {
                Some('n') => s.push('\n'),
                Some('t') => s.push('\t'),
                Some('r') => s.push('\r'),
                Some('\\') => s.push('\\'),
                Some('"') => s.push('"'),
                Some(other) => {
                    return Err(Error::malformed(format!("unknown escape '\\{other}'")));
                }
                None => break,
            },
            ch => s.push(ch),
        }
    }
    Err(Error::malformed("unterminated string"))
}

/// Classify a digit run as an integer, a float (dot or exponent), or an
/// `a/b` ratio.
fn read_number(chars: &mut Peekable<Chars>) -> Result<Numeric, Error> {
    let mut num = String::new();
    let mut has_dot = false;
    let mut has_slash = false;

    while let Some(&ch) = chars.peek() {
        if ch.is_ascii_digit() {
            num.push(ch);
            chars.next();
        } else if ch == '.' && !has_dot && !has_slash {
            has_dot = true;
            num.push(ch);
            chars.next();
        } else if ch == '/' && !has_dot && !has_slash {
            has_slash = true;
            num.push(ch);
            chars.next();
        } else if (ch == 'e' || ch == 'E') && !has_slash {
            num.push(ch);
            chars.next();
            if let Some(&sign) = chars.peek() {
                if sign == '+' || sign == '-' {
                    num.push(sign);
                    chars.next();
                }
            }
            has_dot = true;
        } else {
            break;
        }
    }

    if has_slash {
        let parts: Vec<&str> = num.split('/').collect();
        match (parts[0].parse::<i64>(), parts[1].parse::<i64>()) {
            (Ok(numer), Ok(denom)) => {
                Numeric::make_ratio(numer, denom).map_err(Error::malformed)
            }
            _ => Err(Error::malformed(format!("invalid ratio '{num}'"))),
        }
    } else if has_dot {
        num.parse::<f64>()
            .map(Numeric::Float)
            .map_err(|_| Error::malformed(format!("invalid float '{num}'")))
    } else {
        num.parse::<i64>()
            .map(Numeric::Int)
            .map_err(|_| Error::malformed(format!("integer out of range '{num}'")))
    }
}

// ============================================================================
// Reader
// ============================================================================

fn parse_tokens(tokens: &[Token]) -> Result<(Form, usize), Error> {
    match tokens.first() {
        None => Err(Error::malformed("unexpected end of input")),
        Some(Token::Number(n)) => Ok((Form::Atom(Atom::Number(n.clone())), 1)),
        Some(Token::Symbol(s)) => Ok((Form::Atom(Atom::Symbol(*s)), 1)),
        Some(Token::Str(s)) => Ok((Form::Atom(Atom::Str(s.clone())), 1)),
        Some(Token::Bool(b)) => Ok((Form::Atom(Atom::Bool(*b)), 1)),
        Some(Token::RParen) => Err(Error::malformed("unexpected ')'")),
        Some(Token::LParen) => {
            let mut items = Vec::new();
            let mut i = 1;
            while i < tokens.len() {
                if matches!(tokens[i], Token::RParen) {
                    return Ok((Form::List(items), i + 1));
                }
                let (item, consumed) = parse_tokens(&tokens[i..])?;
                items.push(item);
                i += consumed;
            }
            Err(Error::malformed("unclosed parenthesis"))
        }
    }
}

/// Read one tuple form from `input`. Trailing tokens after the form are
/// an error.
pub fn parse(input: &str) -> Result<Form, Error> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(Error::malformed("empty input"));
    }
    let (form, consumed) = parse_tokens(&tokens)?;
    if consumed != tokens.len() {
        return Err(Error::malformed("trailing tokens after form"));
    }
    Ok(form)
}
