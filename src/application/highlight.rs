//! Regex token coloring for the plain-code view.
//!
//! Each language gets one alternation of comment, string, number and keyword
//! patterns. The regex engine is leftmost-first, so the earliest match wins and
//! ties go to the alternative listed first.

use crate::domain::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

const MAX_HIGHLIGHT_LEN: usize = 200_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    Plain,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::String => write!(f, "string"),
            Self::Comment => write!(f, "comment"),
            Self::Number => write!(f, "number"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

fn keywords(language: Language) -> &'static [&'static str] {
    match language {
        Language::JavaScript => &[
            "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
            "delete", "do", "else", "export", "extends", "false", "finally", "for", "function",
            "if", "import", "in", "instanceof", "let", "new", "null", "of", "return", "static",
            "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
            "void", "while", "yield",
        ],
        Language::TypeScript => &[
            "abstract", "any", "as", "async", "await", "boolean", "break", "case", "catch",
            "class", "const", "continue", "declare", "default", "else", "enum", "export",
            "extends", "false", "finally", "for", "function", "if", "implements", "import", "in",
            "interface", "keyof", "let", "new", "null", "number", "of", "private", "protected",
            "public", "readonly", "return", "static", "string", "super", "switch", "this",
            "throw", "true", "try", "type", "typeof", "undefined", "var", "void", "while",
        ],
        Language::Python => &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "self", "try", "while", "with", "yield",
        ],
        Language::Java => &[
            "abstract", "boolean", "break", "case", "catch", "char", "class", "continue",
            "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
            "float", "for", "if", "implements", "import", "instanceof", "int", "interface",
            "long", "new", "null", "package", "private", "protected", "public", "return",
            "static", "super", "switch", "this", "throw", "throws", "true", "try", "var", "void",
            "while",
        ],
        Language::Cpp => &[
            "auto", "bool", "break", "case", "catch", "char", "class", "const", "constexpr",
            "continue", "default", "delete", "do", "double", "else", "enum", "false", "float",
            "for", "if", "include", "inline", "int", "long", "namespace", "new", "nullptr",
            "private", "protected", "public", "return", "static", "struct", "switch", "template",
            "this", "throw", "true", "try", "typename", "using", "virtual", "void", "while",
        ],
        Language::Go => &[
            "break", "case", "chan", "const", "continue", "default", "defer", "else", "false",
            "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map", "nil",
            "package", "range", "return", "select", "struct", "switch", "true", "type", "var",
        ],
        Language::Rust => &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
            "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
            "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
            "type", "unsafe", "use", "where", "while",
        ],
    }
}

fn build_pattern(language: Language) -> String {
    let comment = if language.uses_hash_comments() {
        r"#[^\n]*"
    } else {
        r"//[^\n]*|/\*[\s\S]*?(?:\*/|\z)"
    };

    let mut string = String::from(r#""(?:[^"\\\n]|\\.)*"?"#);
    if language.has_lifetimes() {
        // Char literals only; a bare `'a` is a lifetime and stays plain.
        string.push_str(r"|'(?:[^'\\\n]|\\(?:x[0-9a-fA-F]{2}|u\{[0-9a-fA-F]{1,6}\}|.))'");
    } else {
        string.push_str(r"|'(?:[^'\\\n]|\\.)*'?");
    }
    if language.has_template_strings() {
        string.push_str(r"|`(?:[^`\\]|\\[\s\S])*`?");
    }

    let number = r"\b(?:0[xX][0-9a-fA-F_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)\b";
    let keyword = format!(r"\b(?:{})\b", keywords(language).join("|"));

    format!(
        "(?P<comment>{comment})|(?P<string>{string})|(?P<number>{number})|(?P<keyword>{keyword})"
    )
}

static PATTERNS: Lazy<HashMap<Language, Regex>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .filter_map(|&language| match Regex::new(&build_pattern(language)) {
            Ok(re) => Some((language, re)),
            Err(err) => {
                log::warn!("Highlight pattern for {language} failed to compile: {err}");
                None
            }
        })
        .collect()
});

fn plain(text: &str) -> Token {
    Token {
        kind: TokenKind::Plain,
        text: text.to_string(),
    }
}

/// Split `code` into colored tokens. Concatenating the token texts gives back
/// `code` unchanged.
pub fn highlight(code: &str, language: Language) -> Vec<Token> {
    if code.is_empty() {
        return Vec::new();
    }

    let Some(re) = PATTERNS.get(&language) else {
        return vec![plain(code)];
    };
    if code.len() > MAX_HIGHLIGHT_LEN {
        return vec![plain(code)];
    }

    let mut tokens = Vec::new();
    let mut cursor = 0usize;

    for caps in re.captures_iter(code) {
        let (kind, m) = if let Some(m) = caps.name("comment") {
            (TokenKind::Comment, m)
        } else if let Some(m) = caps.name("string") {
            (TokenKind::String, m)
        } else if let Some(m) = caps.name("number") {
            (TokenKind::Number, m)
        } else if let Some(m) = caps.name("keyword") {
            (TokenKind::Keyword, m)
        } else {
            continue;
        };

        if m.start() > cursor {
            tokens.push(plain(&code[cursor..m.start()]));
        }
        tokens.push(Token {
            kind,
            text: m.as_str().to_string(),
        });
        cursor = m.end();
    }

    if cursor < code.len() {
        tokens.push(plain(&code[cursor..]));
    }

    tokens
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render tokens as HTML; plain text is escaped but not wrapped.
pub fn render_html(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t.kind {
            TokenKind::Plain => escape_html(&t.text),
            kind => format!(
                "<span class=\"token-{kind}\">{}</span>",
                escape_html(&t.text)
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Plain)
            .map(|t| (t.kind, t.text.as_str()))
            .collect()
    }

    #[test]
    fn test_every_language_pattern_compiles() {
        for language in Language::ALL {
            assert!(PATTERNS.contains_key(&language), "{language}");
        }
    }

    #[test]
    fn test_tokens_concatenate_to_input() {
        let code = "const total = items.reduce((sum, item) => sum + item.price, 0); // sum\n";
        let tokens = highlight(code, Language::JavaScript);
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, code);
    }

    #[test]
    fn test_javascript_tokens() {
        let tokens = highlight("let s = 'a // b'; return 42; // done", Language::JavaScript);
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "let"),
                (TokenKind::String, "'a // b'"),
                (TokenKind::Keyword, "return"),
                (TokenKind::Number, "42"),
                (TokenKind::Comment, "// done"),
            ]
        );
    }

    #[test]
    fn test_python_uses_hash_comments() {
        let tokens = highlight("def f(x):  # double\n    return x * 2", Language::Python);
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "def"),
                (TokenKind::Comment, "# double"),
                (TokenKind::Keyword, "return"),
                (TokenKind::Number, "2"),
            ]
        );
    }

    #[test]
    fn test_rust_lifetimes_are_not_strings() {
        let tokens = highlight(
            "fn f<'a>(x: &'a u8) -> bool { return true }",
            Language::Rust,
        );
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "fn"),
                (TokenKind::Keyword, "return"),
                (TokenKind::Keyword, "true"),
            ]
        );
    }

    #[test]
    fn test_rust_char_literals_are_strings() {
        let tokens = highlight(r"let c = '\n'; let q = 'x';", Language::Rust);
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "let"),
                (TokenKind::String, r"'\n'"),
                (TokenKind::Keyword, "let"),
                (TokenKind::String, "'x'"),
            ]
        );
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        let tokens = highlight("format letter", Language::Rust);
        assert_eq!(kinds(&tokens), vec![]);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let tokens = highlight("/* a\nb */ int x;", Language::Cpp);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "/* a\nb */");
    }

    #[test]
    fn test_empty_code_has_no_tokens() {
        assert!(highlight("", Language::Go).is_empty());
    }

    #[test]
    fn test_render_html_escapes_and_wraps() {
        let html = render_html(&highlight("if a < \"b\"", Language::Go));
        assert_eq!(
            html,
            "<span class=\"token-keyword\">if</span> a &lt; <span class=\"token-string\">&quot;b&quot;</span>"
        );
    }
}
