pub mod colors;
pub mod detect;
pub mod grammar;
pub mod markup;
pub mod scanner;

pub use colors::*;
pub use detect::*;
pub use grammar::*;

use crate::models::{LanguageId, Token, TokenType};

/// Tokenize one line of source text.
///
/// Dispatches on the language: markup languages take the tag-aware scanner,
/// everything else goes through the generic grammar-driven scanner. With no
/// language the whole line becomes a single text token (or nothing, for an
/// empty line). Total over its inputs; concatenating the returned values
/// reproduces `line` exactly.
pub fn tokenize_line(line: &str, language: Option<LanguageId>) -> Vec<Token> {
    let Some(language) = language else {
        return plain_text(line);
    };

    if language.is_markup() {
        return markup::scan_markup_line(line);
    }

    match SyntaxRegistry::global().grammar(language) {
        Some(grammar) => scanner::scan_line(line, grammar),
        None => plain_text(line),
    }
}

fn plain_text(line: &str) -> Vec<Token> {
    if line.is_empty() {
        Vec::new()
    } else {
        vec![Token::new(TokenType::Text, line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_language_yields_single_text_token() {
        let tokens = tokenize_line("anything", None);
        assert_eq!(tokens, vec![Token::new(TokenType::Text, "anything")]);
    }

    #[test]
    fn test_empty_line_yields_no_tokens() {
        assert!(tokenize_line("", Some(LanguageId::JavaScript)).is_empty());
        assert!(tokenize_line("", None).is_empty());
        assert!(tokenize_line("", Some(LanguageId::Xml)).is_empty());
    }

    #[test]
    fn test_markup_dispatch() {
        let tokens = tokenize_line("<p>hi</p>", Some(LanguageId::Xml));
        assert_eq!(tokens[1], Token::new(TokenType::Keyword, "p"));
    }

    #[test]
    fn test_detect_then_tokenize() {
        let language = detect_language("src/main.rs");
        let tokens = tokenize_line("fn main() {}", language);
        assert_eq!(tokens[0], Token::new(TokenType::Keyword, "fn"));
        assert_eq!(tokens[2], Token::new(TokenType::Function, "main"));
    }
}
