use crate::models::LanguageId;
use crate::syntax::grammar::SyntaxRegistry;

/// Map a file path to a language by its final extension.
///
/// The extension is the substring from the last `.` to the end of the path,
/// lowercased before lookup. Paths without a dot, and extensions absent from
/// the table, yield `None`. Multi-dot paths use only the final extension, so
/// `archive.tar.gz` resolves against `.gz`.
pub fn detect_language(file_path: &str) -> Option<LanguageId> {
    let dot = file_path.rfind('.')?;
    let extension = file_path[dot..].to_lowercase();
    SyntaxRegistry::global().language_for_extension(&extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("src/main.rs", Some(LanguageId::Rust); "rust source")]
    #[test_case("app.ts", Some(LanguageId::TypeScript); "typescript source")]
    #[test_case("App.TS", Some(LanguageId::TypeScript); "uppercase extension")]
    #[test_case("index.html", Some(LanguageId::Xml); "html maps to xml")]
    #[test_case("logo.svg", Some(LanguageId::Xml); "svg maps to xml")]
    #[test_case("schema.sql", Some(LanguageId::Sql); "sql source")]
    #[test_case("file.xyz", None; "unknown extension")]
    #[test_case("archive.tar.gz", None; "last extension wins")]
    #[test_case("Makefile", None; "no extension")]
    #[test_case("", None; "empty path")]
    fn test_detect_language(path: &str, expected: Option<LanguageId>) {
        assert_eq!(detect_language(path), expected);
    }

    #[test]
    fn test_case_insensitive_matches_lowercase() {
        assert_eq!(detect_language("App.TS"), detect_language("app.ts"));
    }

    #[test]
    fn test_multi_dot_uses_final_extension_only() {
        assert_eq!(detect_language("archive.tar.gz"), detect_language("x.gz"));
        assert_eq!(detect_language("component.test.js"), detect_language("a.js"));
    }

    #[test]
    fn test_hidden_file_with_extension() {
        assert_eq!(detect_language(".bashrc"), None);
        assert_eq!(detect_language(".config.json"), Some(LanguageId::Json));
    }
}
