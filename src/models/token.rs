use serde::{Deserialize, Serialize};

/// Types of syntax tokens emitted by the line tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Keyword,
    String,
    Number,
    Comment,
    Operator,
    Function,
    Type,
    Variable,
    Punctuation,
    Text,
}

impl TokenType {
    /// Canonical lowercase name used on the wire and in color lookups
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Comment => "comment",
            TokenType::Operator => "operator",
            TokenType::Function => "function",
            TokenType::Type => "type",
            TokenType::Variable => "variable",
            TokenType::Punctuation => "punctuation",
            TokenType::Text => "text",
        }
    }

    /// Parse a kind name; `None` for anything unrecognized
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(TokenType::Keyword),
            "string" => Some(TokenType::String),
            "number" => Some(TokenType::Number),
            "comment" => Some(TokenType::Comment),
            "operator" => Some(TokenType::Operator),
            "function" => Some(TokenType::Function),
            "type" => Some(TokenType::Type),
            "variable" => Some(TokenType::Variable),
            "punctuation" => Some(TokenType::Punctuation),
            "text" => Some(TokenType::Text),
            _ => None,
        }
    }
}

/// A classified contiguous substring of a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>) -> Self {
        Self {
            token_type,
            value: value.into(),
        }
    }

    /// Reconstruct the original line from a token sequence
    pub fn joined(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.value.as_str()).collect()
    }
}
