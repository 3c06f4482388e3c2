use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported programming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    JavaScript,
    TypeScript,
    Python,
    Rust,
    Go,
    Java,
    C,
    Cpp,
    CSharp,
    Ruby,
    Php,
    Sql,
    Shell,
    Css,
    Json,
    Yaml,
    Toml,
    Xml,
}

/// Error returned when a language name does not match any supported language
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language: {0}")]
pub struct UnknownLanguageError(pub String);

impl LanguageId {
    /// Canonical lowercase identifier for this language
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Python => "python",
            LanguageId::Rust => "rust",
            LanguageId::Go => "go",
            LanguageId::Java => "java",
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::CSharp => "csharp",
            LanguageId::Ruby => "ruby",
            LanguageId::Php => "php",
            LanguageId::Sql => "sql",
            LanguageId::Shell => "shell",
            LanguageId::Css => "css",
            LanguageId::Json => "json",
            LanguageId::Yaml => "yaml",
            LanguageId::Toml => "toml",
            LanguageId::Xml => "xml",
        }
    }

    /// Markup languages take the tag-aware tokenizer path
    pub fn is_markup(&self) -> bool {
        matches!(self, LanguageId::Xml)
    }

    /// All supported languages, for table construction and tests
    pub fn all() -> &'static [LanguageId] {
        &[
            LanguageId::JavaScript,
            LanguageId::TypeScript,
            LanguageId::Python,
            LanguageId::Rust,
            LanguageId::Go,
            LanguageId::Java,
            LanguageId::C,
            LanguageId::Cpp,
            LanguageId::CSharp,
            LanguageId::Ruby,
            LanguageId::Php,
            LanguageId::Sql,
            LanguageId::Shell,
            LanguageId::Css,
            LanguageId::Json,
            LanguageId::Yaml,
            LanguageId::Toml,
            LanguageId::Xml,
        ]
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageId {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageId::all()
            .iter()
            .find(|lang| lang.name() == s)
            .copied()
            .ok_or_else(|| UnknownLanguageError(s.to_string()))
    }
}
