use crate::models::{Token, TokenType};
use regex::Regex;
use std::sync::OnceLock;

fn entity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^&(?:#[xX][0-9a-fA-F]+|#[0-9]+|[A-Za-z][A-Za-z0-9]*);").unwrap()
    })
}

fn tag_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9._:-]*").unwrap())
}

/// Tokenize one line of an XML/HTML-family document.
///
/// Understands tag structure within a single line: comments and CDATA become
/// whole-span comment tokens, processing instructions become a single keyword
/// token, tag names are keywords, attribute names are types, attribute values
/// are strings, and entity references are emitted as number tokens (a
/// classification existing consumers depend on). Malformed markup never
/// errors; classification is best-effort and the line always round-trips.
pub fn scan_markup_line(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];

        if rest.starts_with("<!--") {
            i += emit_span(&mut tokens, rest, "<!--", "-->", TokenType::Comment);
            continue;
        }
        if rest.starts_with("<![CDATA[") {
            i += emit_span(&mut tokens, rest, "<![CDATA[", "]]>", TokenType::Comment);
            continue;
        }
        if rest.starts_with("<?") {
            i += emit_span(&mut tokens, rest, "<?", "?>", TokenType::Keyword);
            continue;
        }
        if rest.starts_with('<') {
            i += scan_tag(&mut tokens, rest);
            continue;
        }
        if let Some(m) = entity_pattern().find(rest) {
            tokens.push(Token::new(TokenType::Number, m.as_str()));
            i += m.end();
            continue;
        }

        // Plain text up to the next tag or entity reference
        let mut end = rest.len();
        for (off, c) in rest.char_indices() {
            if off == 0 {
                continue;
            }
            if c == '<' || (c == '&' && entity_pattern().is_match(&rest[off..])) {
                end = off;
                break;
            }
        }
        tokens.push(Token::new(TokenType::Text, &rest[..end]));
        i += end;
    }

    tokens
}

/// Emit one token spanning `open` through `close` inclusive, or to end of
/// line when the closer is absent.
fn emit_span(
    tokens: &mut Vec<Token>,
    rest: &str,
    open: &str,
    close: &str,
    token_type: TokenType,
) -> usize {
    let span = match rest[open.len()..].find(close) {
        Some(pos) => open.len() + pos + close.len(),
        None => rest.len(),
    };
    tokens.push(Token::new(token_type, &rest[..span]));
    span
}

/// Scan a tag starting at `<`: punctuation for the brackets, keyword for the
/// tag name, then attributes until the tag closes or the line ends.
fn scan_tag(tokens: &mut Vec<Token>, rest: &str) -> usize {
    tokens.push(Token::new(TokenType::Punctuation, "<"));
    let mut pos = 1;

    if rest[pos..].starts_with('/') {
        tokens.push(Token::new(TokenType::Punctuation, "/"));
        pos += 1;
    }

    if let Some(m) = tag_name_pattern().find(&rest[pos..]) {
        tokens.push(Token::new(TokenType::Keyword, m.as_str()));
        pos += m.end();
    }

    while pos < rest.len() {
        let tail = &rest[pos..];
        let Some(c) = tail.chars().next() else { break };

        if tail.starts_with("/>") {
            tokens.push(Token::new(TokenType::Punctuation, "/>"));
            pos += 2;
            break;
        }
        if c == '>' {
            tokens.push(Token::new(TokenType::Punctuation, ">"));
            pos += 1;
            break;
        }
        if c.is_whitespace() {
            let end = tail
                .find(|ch: char| !ch.is_whitespace())
                .unwrap_or(tail.len());
            tokens.push(Token::new(TokenType::Text, &tail[..end]));
            pos += end;
            continue;
        }
        if c == '=' {
            tokens.push(Token::new(TokenType::Operator, "="));
            pos += 1;
            continue;
        }
        if c == '"' || c == '\'' {
            let span = scan_quoted(tail, c);
            tokens.push(Token::new(TokenType::String, &tail[..span]));
            pos += span;
            continue;
        }

        // Attribute name: everything up to whitespace, a delimiter, or the
        // end of the tag
        let mut end = tail.len();
        for (off, ch) in tail.char_indices() {
            if ch.is_whitespace() || matches!(ch, '=' | '>' | '/' | '"' | '\'' | '<') {
                end = off;
                break;
            }
        }
        if end == 0 {
            // Stray character inside the tag
            tokens.push(Token::new(TokenType::Text, &tail[..c.len_utf8()]));
            pos += c.len_utf8();
            continue;
        }
        tokens.push(Token::new(TokenType::Type, &tail[..end]));
        pos += end;
    }

    pos
}

/// Simple quote-to-matching-quote scan; markup attribute values have no
/// backslash escapes. Unterminated values run to end of line.
fn scan_quoted(tail: &str, quote: char) -> usize {
    match tail[1..].find(quote) {
        Some(pos) => 1 + pos + quote.len_utf8(),
        None => tail.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(tokens: &[Token]) -> Vec<(TokenType, &str)> {
        tokens
            .iter()
            .map(|t| (t.token_type, t.value.as_str()))
            .collect()
    }

    #[test]
    fn test_simple_element_with_entity() {
        let tokens = scan_markup_line("<p>&amp;</p>");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenType::Punctuation, "<"),
                (TokenType::Keyword, "p"),
                (TokenType::Punctuation, ">"),
                (TokenType::Number, "&amp;"),
                (TokenType::Punctuation, "<"),
                (TokenType::Punctuation, "/"),
                (TokenType::Keyword, "p"),
                (TokenType::Punctuation, ">"),
            ]
        );
    }

    #[test]
    fn test_attributes() {
        let tokens = scan_markup_line(r#"<a href="x" class='y'>"#);
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenType::Punctuation, "<"),
                (TokenType::Keyword, "a"),
                (TokenType::Text, " "),
                (TokenType::Type, "href"),
                (TokenType::Operator, "="),
                (TokenType::String, "\"x\""),
                (TokenType::Text, " "),
                (TokenType::Type, "class"),
                (TokenType::Operator, "="),
                (TokenType::String, "'y'"),
                (TokenType::Punctuation, ">"),
            ]
        );
    }

    #[test]
    fn test_self_closing_tag() {
        let tokens = scan_markup_line("<br/>");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenType::Punctuation, "<"),
                (TokenType::Keyword, "br"),
                (TokenType::Punctuation, "/>"),
            ]
        );
    }

    #[test]
    fn test_comment_and_unterminated_comment() {
        let tokens = scan_markup_line("<!-- note -->x");
        assert_eq!(tokens[0], Token::new(TokenType::Comment, "<!-- note -->"));
        assert_eq!(tokens[1], Token::new(TokenType::Text, "x"));

        let tokens = scan_markup_line("<!-- never closes");
        assert_eq!(
            kinds(&tokens),
            vec![(TokenType::Comment, "<!-- never closes")]
        );
    }

    #[test]
    fn test_cdata_section() {
        let tokens = scan_markup_line("<![CDATA[raw <data>]]>");
        assert_eq!(
            kinds(&tokens),
            vec![(TokenType::Comment, "<![CDATA[raw <data>]]>")]
        );
    }

    #[test]
    fn test_processing_instruction() {
        let tokens = scan_markup_line(r#"<?xml version="1.0"?>"#);
        assert_eq!(
            kinds(&tokens),
            vec![(TokenType::Keyword, r#"<?xml version="1.0"?>"#)]
        );
    }

    #[test]
    fn test_numeric_and_hex_entities() {
        let tokens = scan_markup_line("&#169;&#x1F600;");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenType::Number, "&#169;"),
                (TokenType::Number, "&#x1F600;"),
            ]
        );
    }

    #[test]
    fn test_bare_ampersand_is_text() {
        let tokens = scan_markup_line("fish & chips");
        assert_eq!(kinds(&tokens), vec![(TokenType::Text, "fish & chips")]);
    }

    #[test]
    fn test_unterminated_attribute_value() {
        let tokens = scan_markup_line(r#"<a href="never closes"#);
        assert_eq!(
            tokens.last().unwrap(),
            &Token::new(TokenType::String, "\"never closes")
        );
    }

    #[test]
    fn test_malformed_markup_round_trips() {
        let lines = [
            "<<>>",
            "< />",
            "text <unclosed attr",
            "a & b &amp c",
            "<tag attr=value>",
        ];
        for line in lines {
            let tokens = scan_markup_line(line);
            assert_eq!(Token::joined(&tokens), line, "round-trip for {line:?}");
        }
    }
}
