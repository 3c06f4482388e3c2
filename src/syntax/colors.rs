use crate::models::TokenType;

/// Display color reference for a token kind.
///
/// Returns a CSS variable reference consumed by the rendering layer, or
/// `"inherit"` for plain text.
pub fn token_color(token_type: TokenType) -> &'static str {
    match token_type {
        TokenType::Keyword => "var(--syntax-keyword)",
        TokenType::String => "var(--syntax-string)",
        TokenType::Number => "var(--syntax-number)",
        TokenType::Comment => "var(--syntax-comment)",
        TokenType::Operator => "var(--syntax-operator)",
        TokenType::Function => "var(--syntax-function)",
        TokenType::Type => "var(--syntax-type)",
        TokenType::Variable => "var(--syntax-variable)",
        TokenType::Punctuation => "var(--syntax-punctuation)",
        TokenType::Text => "inherit",
    }
}

/// Resolve a color by kind name; unrecognized names inherit
pub fn color_for(name: &str) -> &'static str {
    match TokenType::from_name(name) {
        Some(token_type) => token_color(token_type),
        None => "inherit",
    }
}
