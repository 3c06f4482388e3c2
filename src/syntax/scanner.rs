use crate::models::{Token, TokenType};
use crate::syntax::grammar::Grammar;
use regex::Regex;
use std::sync::OnceLock;

/// Characters emitted as single punctuation tokens
const PUNCTUATION: &[char] = &['(', ')', '[', ']', '{', '}', ',', ';', '.'];

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:0[xX][0-9a-fA-F]+|0[bB][01]+|0[oO][0-7]+|[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?)",
        )
        .unwrap()
    })
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*").unwrap())
}

/// Tokenize one line with a language grammar.
///
/// Rules are tried in fixed priority order at each cursor position:
/// whitespace, line comment, block comment, string, number, operator,
/// identifier, punctuation, then a single-character text fallback. Every
/// character is consumed by exactly one token, so concatenating the emitted
/// values reproduces the line.
pub fn scan_line(line: &str, grammar: &Grammar) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];
        let Some(c) = rest.chars().next() else { break };

        // Whitespace run
        if c.is_whitespace() {
            let end = rest
                .find(|ch: char| !ch.is_whitespace())
                .unwrap_or(rest.len());
            tokens.push(Token::new(TokenType::Text, &rest[..end]));
            i += end;
            continue;
        }

        // Line comment: rest of the line, terminal
        if let Some(marker) = grammar.line_comment {
            if rest.starts_with(marker) {
                tokens.push(Token::new(TokenType::Comment, rest));
                break;
            }
        }

        // Block comment, same-line only; unterminated extends to end of line
        if let Some((open, close)) = grammar.block_comment {
            if rest.starts_with(open) {
                match rest[open.len()..].find(close) {
                    Some(pos) => {
                        let span = open.len() + pos + close.len();
                        tokens.push(Token::new(TokenType::Comment, &rest[..span]));
                        i += span;
                    }
                    None => {
                        tokens.push(Token::new(TokenType::Comment, rest));
                        i = line.len();
                    }
                }
                continue;
            }
        }

        // String literal, first matching delimiter wins
        if let Some(delimiter) = grammar
            .string_delimiters
            .iter()
            .find(|d| rest.starts_with(**d))
        {
            let span = scan_string(rest, delimiter);
            tokens.push(Token::new(TokenType::String, &rest[..span]));
            i += span;
            continue;
        }

        // Number literal
        if c.is_ascii_digit() {
            if let Some(m) = number_pattern().find(rest) {
                tokens.push(Token::new(TokenType::Number, m.as_str()));
                i += m.end();
                continue;
            }
        }

        // Operator, longest alternative first
        if let Some(m) = grammar.operators.find(rest) {
            if !m.as_str().is_empty() {
                tokens.push(Token::new(TokenType::Operator, m.as_str()));
                i += m.end();
                continue;
            }
        }

        // Identifier: keyword > type > function-call > variable
        if let Some(m) = identifier_pattern().find(rest) {
            let word = m.as_str();
            let token_type = if grammar.keywords.contains(word) {
                TokenType::Keyword
            } else if grammar.types.contains(word) {
                TokenType::Type
            } else if rest[m.end()..].starts_with('(') {
                TokenType::Function
            } else {
                TokenType::Variable
            };
            tokens.push(Token::new(token_type, word));
            i += m.end();
            continue;
        }

        // Punctuation
        if PUNCTUATION.contains(&c) {
            tokens.push(Token::new(TokenType::Punctuation, &rest[..c.len_utf8()]));
            i += c.len_utf8();
            continue;
        }

        // Fallback: anything unmatched is a single text character
        tokens.push(Token::new(TokenType::Text, &rest[..c.len_utf8()]));
        i += c.len_utf8();
    }

    tokens
}

/// Length of the string token opened by `delimiter` at the start of `rest`.
/// A backslash absorbs the following character; an unterminated string runs
/// to end of line.
fn scan_string(rest: &str, delimiter: &str) -> usize {
    let mut pos = delimiter.len();
    while pos < rest.len() {
        if rest.as_bytes()[pos] == b'\\' {
            pos += 1;
            match rest[pos..].chars().next() {
                Some(c) => pos += c.len_utf8(),
                None => break,
            }
            continue;
        }
        if rest[pos..].starts_with(delimiter) {
            return pos + delimiter.len();
        }
        match rest[pos..].chars().next() {
            Some(c) => pos += c.len_utf8(),
            None => break,
        }
    }
    rest.len()
}
