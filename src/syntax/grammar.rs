use crate::models::LanguageId;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Static rule set governing tokenization for one language
#[derive(Debug, Clone)]
pub struct Grammar {
    pub keywords: HashSet<String>,
    pub types: HashSet<String>,
    pub operators: Regex,
    pub line_comment: Option<&'static str>,
    pub block_comment: Option<(&'static str, &'static str)>,
    pub string_delimiters: &'static [&'static str],
}

impl Grammar {
    fn new(
        keywords: &[&str],
        types: &[&str],
        operators: &[&str],
        line_comment: Option<&'static str>,
        block_comment: Option<(&'static str, &'static str)>,
        string_delimiters: &'static [&'static str],
    ) -> Self {
        Self {
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            types: types.iter().map(|s| s.to_string()).collect(),
            operators: operator_pattern(operators),
            line_comment,
            block_comment,
            string_delimiters,
        }
    }
}

/// Build an anchored alternation matching the longest operator at the cursor.
/// Alternatives are sorted longest-first so the regex crate's leftmost-first
/// semantics pick `=>` over `=`.
fn operator_pattern(operators: &[&str]) -> Regex {
    if operators.is_empty() {
        // Matches only a zero-length span at end of input, which the scanner
        // discards
        return Regex::new(r"^$").unwrap();
    }
    let mut ordered: Vec<&str> = operators.to_vec();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternatives: Vec<String> = ordered.iter().map(|op| regex::escape(op)).collect();
    Regex::new(&format!("^(?:{})", alternatives.join("|"))).unwrap()
}

/// Registry of grammar descriptors and the extension-to-language table.
/// Built once per process and treated as read-only afterwards.
pub struct SyntaxRegistry {
    grammars: HashMap<LanguageId, Grammar>,
    extensions: HashMap<&'static str, LanguageId>,
}

static REGISTRY: OnceLock<SyntaxRegistry> = OnceLock::new();

impl SyntaxRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            grammars: HashMap::new(),
            extensions: HashMap::new(),
        };

        registry.add_javascript();
        registry.add_python();
        registry.add_rust();
        registry.add_go();
        registry.add_c_family();
        registry.add_ruby();
        registry.add_php();
        registry.add_sql();
        registry.add_shell();
        registry.add_css();
        registry.add_data_formats();
        registry.add_xml();

        registry
    }

    /// Shared process-wide instance
    pub fn global() -> &'static SyntaxRegistry {
        REGISTRY.get_or_init(SyntaxRegistry::new)
    }

    pub fn grammar(&self, language: LanguageId) -> Option<&Grammar> {
        self.grammars.get(&language)
    }

    /// Lookup by lowercased extension including the leading dot (".rs")
    pub fn language_for_extension(&self, extension: &str) -> Option<LanguageId> {
        self.extensions.get(extension).copied()
    }

    fn register(&mut self, language: LanguageId, grammar: Grammar, extensions: &[&'static str]) {
        self.grammars.insert(language, grammar);
        for &ext in extensions {
            self.extensions.insert(ext, language);
        }
    }

    fn add_javascript(&mut self) {
        let keywords = [
            "abstract", "arguments", "async", "await", "break", "case", "catch", "class",
            "const", "continue", "debugger", "default", "delete", "do", "else", "enum",
            "export", "extends", "false", "finally", "for", "function", "get", "if",
            "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
            "of", "package", "private", "protected", "public", "return", "set", "static",
            "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
            "void", "while", "with", "yield",
        ];
        let types = [
            "Array", "BigInt", "Boolean", "Date", "Error", "Function", "JSON", "Map", "Math",
            "Number", "Object", "Promise", "Proxy", "Reflect", "RegExp", "Set", "String",
            "Symbol", "WeakMap", "WeakSet", "console", "document", "globalThis", "window",
        ];
        let operators = [
            ">>>=", "===", "!==", ">>>", "**=", "<<=", ">>=", "&&=", "||=", "??=", "...",
            "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=",
            "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "**", "+", "-", "*", "/", "%",
            "=", "<", ">", "!", "&", "|", "^", "~", "?", ":",
        ];
        let grammar = Grammar::new(
            &keywords,
            &types,
            &operators,
            Some("//"),
            Some(("/*", "*/")),
            &["\"", "'", "`"],
        );

        self.register(
            LanguageId::JavaScript,
            grammar.clone(),
            &[".js", ".mjs", ".cjs", ".jsx"],
        );

        // TypeScript extends the JavaScript grammar
        let mut ts = grammar;
        for kw in [
            "declare", "infer", "is", "keyof", "module", "namespace", "readonly", "satisfies",
            "type",
        ] {
            ts.keywords.insert(kw.to_string());
        }
        for ty in ["Partial", "Pick", "Omit", "Readonly", "Record", "Required"] {
            ts.types.insert(ty.to_string());
        }
        self.register(LanguageId::TypeScript, ts, &[".ts", ".tsx", ".mts", ".cts"]);
    }

    fn add_python(&mut self) {
        let keywords = [
            "False", "None", "True", "and", "as", "assert", "async", "await", "break",
            "class", "continue", "def", "del", "elif", "else", "except", "finally", "for",
            "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or",
            "pass", "raise", "return", "self", "try", "while", "with", "yield",
        ];
        let types = [
            "bool", "bytearray", "bytes", "complex", "dict", "float", "frozenset", "int",
            "list", "object", "range", "set", "str", "tuple", "type",
        ];
        let operators = [
            "**=", "//=", "<<=", ">>=", "->", ":=", "**", "//", "==", "!=", "<=", ">=",
            "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "@", "+", "-", "*",
            "/", "%", "=", "<", ">", "&", "|", "^", "~", ":",
        ];
        self.register(
            LanguageId::Python,
            Grammar::new(
                &keywords,
                &types,
                &operators,
                Some("#"),
                None,
                &["\"\"\"", "'''", "\"", "'"],
            ),
            &[".py", ".pyw", ".pyi"],
        );
    }

    fn add_rust(&mut self) {
        let keywords = [
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
            "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop",
            "match", "mod", "move", "mut", "pub", "ref", "return", "self", "Self", "static",
            "struct", "super", "trait", "true", "type", "unsafe", "use", "where", "while",
        ];
        let types = [
            "Arc", "Box", "Cell", "HashMap", "HashSet", "Option", "Rc", "RefCell", "Result",
            "String", "Vec", "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128",
            "isize", "str", "u8", "u16", "u32", "u64", "u128", "usize",
        ];
        let operators = [
            "..=", "<<=", ">>=", "::", "->", "=>", "..", "==", "!=", "<=", ">=", "&&", "||",
            "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "+", "-", "*", "/",
            "%", "=", "<", ">", "!", "&", "|", "^", "?", ":", "#",
        ];
        self.register(
            LanguageId::Rust,
            Grammar::new(
                &keywords,
                &types,
                &operators,
                Some("//"),
                Some(("/*", "*/")),
                &["\""],
            ),
            &[".rs"],
        );
    }

    fn add_go(&mut self) {
        let keywords = [
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "false", "for", "func", "go", "goto", "if", "import", "interface",
            "iota", "map", "nil", "package", "range", "return", "select", "struct", "switch",
            "true", "type", "var",
        ];
        let types = [
            "any", "bool", "byte", "complex64", "complex128", "error", "float32", "float64",
            "int", "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8",
            "uint16", "uint32", "uint64", "uintptr",
        ];
        let operators = [
            "&^=", "<<=", ">>=", ":=", "<-", "...", "&^", "&&", "||", "==", "!=", "<=",
            ">=", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>",
            "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", ":",
        ];
        self.register(
            LanguageId::Go,
            Grammar::new(
                &keywords,
                &types,
                &operators,
                Some("//"),
                Some(("/*", "*/")),
                &["\"", "'", "`"],
            ),
            &[".go"],
        );
    }

    fn add_c_family(&mut self) {
        let c_keywords = [
            "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
            "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long",
            "register", "restrict", "return", "short", "signed", "sizeof", "static",
            "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
        ];
        let c_types = [
            "FILE", "bool", "int8_t", "int16_t", "int32_t", "int64_t", "intptr_t",
            "ptrdiff_t", "size_t", "ssize_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
            "uintptr_t", "wchar_t",
        ];
        let c_operators = [
            "<<=", ">>=", "->", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=",
            "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "+", "-", "*", "/", "%", "=",
            "<", ">", "!", "&", "|", "^", "~", "?", ":", "#",
        ];
        self.register(
            LanguageId::C,
            Grammar::new(
                &c_keywords,
                &c_types,
                &c_operators,
                Some("//"),
                Some(("/*", "*/")),
                &["\"", "'"],
            ),
            &[".c", ".h"],
        );

        let mut cpp_keywords: Vec<&str> = c_keywords.to_vec();
        cpp_keywords.extend([
            "catch", "class", "constexpr", "delete", "explicit", "false", "friend",
            "mutable", "namespace", "new", "noexcept", "nullptr", "operator", "override",
            "private", "protected", "public", "template", "this", "throw", "true", "try",
            "typename", "using", "virtual",
        ]);
        let cpp_types = [
            "array", "deque", "map", "pair", "set", "shared_ptr", "size_t", "string",
            "string_view", "unique_ptr", "unordered_map", "unordered_set", "vector",
            "wstring",
        ];
        let mut cpp_operators: Vec<&str> = c_operators.to_vec();
        cpp_operators.extend(["::", "<=>"]);
        self.register(
            LanguageId::Cpp,
            Grammar::new(
                &cpp_keywords,
                &cpp_types,
                &cpp_operators,
                Some("//"),
                Some(("/*", "*/")),
                &["\"", "'"],
            ),
            &[".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx"],
        );

        let java_keywords = [
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
            "class", "const", "continue", "default", "do", "double", "else", "enum",
            "extends", "false", "final", "finally", "float", "for", "goto", "if",
            "implements", "import", "instanceof", "int", "interface", "long", "native",
            "new", "null", "package", "private", "protected", "public", "record", "return",
            "short", "static", "strictfp", "super", "switch", "synchronized", "this",
            "throw", "throws", "transient", "true", "try", "var", "void", "volatile",
            "while",
        ];
        let java_types = [
            "Boolean", "Byte", "Character", "Double", "Float", "Integer", "List", "Long",
            "Map", "Object", "Optional", "Set", "Short", "String", "StringBuilder", "System",
            "Thread",
        ];
        let java_operators = [
            ">>>=", ">>>", "<<=", ">>=", "->", "::", "==", "!=", "<=", ">=", "&&", "||",
            "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "+",
            "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ":", "@",
        ];
        self.register(
            LanguageId::Java,
            Grammar::new(
                &java_keywords,
                &java_types,
                &java_operators,
                Some("//"),
                Some(("/*", "*/")),
                &["\"", "'"],
            ),
            &[".java"],
        );

        let cs_keywords = [
            "abstract", "as", "async", "await", "base", "bool", "break", "byte", "case",
            "catch", "char", "checked", "class", "const", "continue", "decimal", "default",
            "delegate", "do", "double", "else", "enum", "event", "explicit", "extern",
            "false", "finally", "fixed", "float", "for", "foreach", "goto", "if",
            "implicit", "in", "int", "interface", "internal", "is", "lock", "long",
            "namespace", "new", "null", "object", "operator", "out", "override", "params",
            "private", "protected", "public", "readonly", "record", "ref", "return",
            "sbyte", "sealed", "short", "sizeof", "stackalloc", "static", "string",
            "struct", "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong",
            "unchecked", "unsafe", "ushort", "using", "var", "virtual", "void", "volatile",
            "when", "where", "while", "yield",
        ];
        let cs_types = [
            "Console", "DateTime", "Dictionary", "Exception", "Guid", "IEnumerable", "List",
            "String", "StringBuilder", "Task", "TimeSpan",
        ];
        let cs_operators = [
            "??=", "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=",
            "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "+", "-", "*", "/", "%",
            "=", "<", ">", "!", "&", "|", "^", "~", "?", ":",
        ];
        self.register(
            LanguageId::CSharp,
            Grammar::new(
                &cs_keywords,
                &cs_types,
                &cs_operators,
                Some("//"),
                Some(("/*", "*/")),
                &["\"", "'"],
            ),
            &[".cs"],
        );
    }

    fn add_ruby(&mut self) {
        let keywords = [
            "alias", "and", "begin", "break", "case", "class", "def", "do", "else", "elsif",
            "end", "ensure", "false", "for", "if", "in", "module", "next", "nil", "not",
            "or", "raise", "redo", "require", "rescue", "retry", "return", "self", "super",
            "then", "true", "undef", "unless", "until", "when", "while", "yield",
        ];
        let types = [
            "Array", "Float", "Hash", "Integer", "Object", "Proc", "Range", "Regexp",
            "String", "Struct", "Symbol", "Time",
        ];
        let operators = [
            "<=>", "===", "**=", "<<=", ">>=", "=~", "!~", "=>", "->", "::", "==", "!=",
            "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "**", "<<", ">>", "+",
            "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ":", "@",
        ];
        self.register(
            LanguageId::Ruby,
            Grammar::new(&keywords, &types, &operators, Some("#"), None, &["\"", "'"]),
            &[".rb", ".rake", ".gemspec"],
        );
    }

    fn add_php(&mut self) {
        let keywords = [
            "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class",
            "clone", "const", "continue", "declare", "default", "do", "echo", "else",
            "elseif", "empty", "extends", "false", "final", "finally", "fn", "for",
            "foreach", "function", "global", "goto", "if", "implements", "include",
            "include_once", "instanceof", "insteadof", "interface", "isset", "list",
            "match", "namespace", "new", "null", "or", "print", "private", "protected",
            "public", "readonly", "require", "require_once", "return", "static", "switch",
            "throw", "trait", "true", "try", "unset", "use", "var", "while", "xor", "yield",
        ];
        let types = [
            "bool", "float", "int", "iterable", "mixed", "object", "parent", "self",
            "string", "void",
        ];
        let operators = [
            "<=>", "===", "!==", "**=", ".=", "=>", "->", "::", "==", "!=", "<=", ">=",
            "&&", "||", "??", "++", "--", "+=", "-=", "*=", "/=", "%=", "**", "<<", ">>",
            "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ":",
        ];
        self.register(
            LanguageId::Php,
            Grammar::new(
                &keywords,
                &types,
                &operators,
                Some("//"),
                Some(("/*", "*/")),
                &["\"", "'"],
            ),
            &[".php"],
        );
    }

    fn add_sql(&mut self) {
        let keywords_upper = [
            "ALL", "ALTER", "AND", "AS", "ASC", "BEGIN", "BETWEEN", "BY", "CASE", "CHECK",
            "COMMIT", "CONSTRAINT", "CREATE", "CROSS", "DEFAULT", "DELETE", "DESC",
            "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FOREIGN", "FROM", "FULL",
            "GROUP", "HAVING", "IN", "INDEX", "INNER", "INSERT", "INTO", "IS", "JOIN",
            "KEY", "LEFT", "LIKE", "LIMIT", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER",
            "OUTER", "PRIMARY", "REFERENCES", "RIGHT", "ROLLBACK", "SELECT", "SET",
            "TABLE", "THEN", "TRANSACTION", "UNION", "UNIQUE", "UPDATE", "VALUES", "VIEW",
            "WHEN", "WHERE",
        ];
        let types_upper = [
            "BIGINT", "BLOB", "BOOLEAN", "CHAR", "DATE", "DECIMAL", "DOUBLE", "FLOAT",
            "INT", "INTEGER", "NUMERIC", "REAL", "SERIAL", "SMALLINT", "TEXT", "TIME",
            "TIMESTAMP", "VARCHAR",
        ];
        let operators = ["<>", "<=", ">=", "!=", "||", "=", "<", ">", "+", "-", "*", "/", "%"];

        // Exact-match semantics; both conventional casings are listed
        let mut grammar = Grammar::new(
            &keywords_upper,
            &types_upper,
            &operators,
            Some("--"),
            Some(("/*", "*/")),
            &["'", "\""],
        );
        for kw in keywords_upper {
            grammar.keywords.insert(kw.to_lowercase());
        }
        for ty in types_upper {
            grammar.types.insert(ty.to_lowercase());
        }

        self.register(LanguageId::Sql, grammar, &[".sql"]);
    }

    fn add_shell(&mut self) {
        let keywords = [
            "alias", "break", "case", "cd", "continue", "declare", "do", "done", "echo",
            "elif", "else", "esac", "eval", "exec", "exit", "export", "fi", "for",
            "function", "if", "in", "local", "printf", "read", "readonly", "return",
            "select", "set", "shift", "source", "test", "then", "trap", "unset", "until",
            "while",
        ];
        let operators = ["&&", "||", ">>", "<<", "|", "&", ">", "<", "=", "!"];
        self.register(
            LanguageId::Shell,
            Grammar::new(&keywords, &[], &operators, Some("#"), None, &["\"", "'"]),
            &[".sh", ".bash", ".zsh"],
        );
    }

    fn add_css(&mut self) {
        let keywords = [
            "absolute", "auto", "block", "bold", "center", "dashed", "dotted", "fixed",
            "flex", "grid", "hidden", "important", "inherit", "initial", "inline",
            "italic", "left", "none", "normal", "relative", "right", "solid", "static",
            "unset", "visible",
        ];
        // Unit suffixes read as types so "10px" colors as number + unit
        let types = [
            "ch", "cm", "deg", "em", "ex", "fr", "in", "mm", "ms", "pc", "pt", "px", "rad",
            "rem", "s", "vh", "vmax", "vmin", "vw",
        ];
        let operators = ["::", "^=", "$=", "*=", "|=", "~=", ":", "*", ">", "+", "~", "="];
        self.register(
            LanguageId::Css,
            Grammar::new(
                &keywords,
                &types,
                &operators,
                None,
                Some(("/*", "*/")),
                &["\"", "'"],
            ),
            &[".css", ".scss", ".less"],
        );
    }

    fn add_data_formats(&mut self) {
        // JSON
        self.register(
            LanguageId::Json,
            Grammar::new(
                &["false", "null", "true"],
                &[],
                &[":"],
                None,
                None,
                &["\""],
            ),
            &[".json"],
        );

        // YAML
        self.register(
            LanguageId::Yaml,
            Grammar::new(
                &[
                    "False", "No", "Null", "Off", "On", "True", "Yes", "false", "no",
                    "null", "off", "on", "true", "yes",
                ],
                &[],
                &[":", "-", "|", ">", "&", "*", "?"],
                Some("#"),
                None,
                &["\"", "'"],
            ),
            &[".yml", ".yaml"],
        );

        // TOML
        self.register(
            LanguageId::Toml,
            Grammar::new(
                &["false", "true"],
                &[],
                &["="],
                Some("#"),
                None,
                &["\"\"\"", "'''", "\"", "'"],
            ),
            &[".toml"],
        );
    }

    fn add_xml(&mut self) {
        // Markup languages use the tag-aware scanner; no grammar descriptor needed
        for ext in [".xml", ".html", ".htm", ".xhtml", ".svg", ".xsl", ".plist"] {
            self.extensions.insert(ext, LanguageId::Xml);
        }
    }
}

impl Default for SyntaxRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LanguageId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_non_markup_language_has_a_grammar() {
        let registry = SyntaxRegistry::new();
        for lang in LanguageId::all() {
            if !lang.is_markup() {
                assert!(
                    registry.grammar(*lang).is_some(),
                    "missing grammar for {}",
                    lang
                );
            }
        }
    }

    #[test]
    fn test_operator_pattern_prefers_longest_alternative() {
        let pattern = operator_pattern(&["=", "=>", "=="]);
        assert_eq!(pattern.find("=> x").unwrap().as_str(), "=>");
        assert_eq!(pattern.find("== x").unwrap().as_str(), "==");
        assert_eq!(pattern.find("= x").unwrap().as_str(), "=");
    }

    #[test]
    fn test_operator_pattern_is_anchored() {
        let pattern = operator_pattern(&["=>"]);
        assert!(pattern.find("x =>").is_none());
    }

    #[test]
    fn test_empty_operator_list_never_consumes() {
        let pattern = operator_pattern(&[]);
        assert!(pattern.find("anything + at all").is_none());
        // The only possible match is zero-length, which the scanner ignores
        assert!(pattern.find("").map_or(true, |m| m.as_str().is_empty()));
    }

    #[test]
    fn test_typescript_extends_javascript() {
        let registry = SyntaxRegistry::new();
        let js = registry.grammar(LanguageId::JavaScript).unwrap();
        let ts = registry.grammar(LanguageId::TypeScript).unwrap();
        assert!(!js.keywords.contains("keyof"));
        assert!(ts.keywords.contains("keyof"));
        assert!(ts.keywords.contains("const"));
    }

    #[test]
    fn test_sql_keywords_cover_both_casings() {
        let registry = SyntaxRegistry::new();
        let sql = registry.grammar(LanguageId::Sql).unwrap();
        assert!(sql.keywords.contains("SELECT"));
        assert!(sql.keywords.contains("select"));
        assert!(sql.types.contains("VARCHAR"));
        assert!(sql.types.contains("varchar"));
    }

    #[test]
    fn test_extension_table_aliases() {
        let registry = SyntaxRegistry::new();
        assert_eq!(
            registry.language_for_extension(".svg"),
            Some(LanguageId::Xml)
        );
        assert_eq!(
            registry.language_for_extension(".html"),
            Some(LanguageId::Xml)
        );
        assert_eq!(
            registry.language_for_extension(".mjs"),
            Some(LanguageId::JavaScript)
        );
        assert_eq!(registry.language_for_extension(".gz"), None);
    }
}
