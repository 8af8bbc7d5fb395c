use super::error::LanguageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages offered by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Java,
    Cpp,
    Go,
    Rust,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Go,
        Language::Rust,
    ];

    /// Whether line comments start with `#` rather than `//`.
    pub fn uses_hash_comments(self) -> bool {
        matches!(self, Language::Python)
    }

    /// Whether `'ident` is a lifetime rather than the start of a string.
    pub fn has_lifetimes(self) -> bool {
        matches!(self, Language::Rust)
    }

    /// Whether backtick template strings are part of the syntax.
    pub fn has_template_strings(self) -> bool {
        matches!(self, Language::JavaScript | Language::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JavaScript => write!(f, "JavaScript"),
            Self::TypeScript => write!(f, "TypeScript"),
            Self::Python => write!(f, "Python"),
            Self::Java => write!(f, "Java"),
            Self::Cpp => write!(f, "C++"),
            Self::Go => write!(f, "Go"),
            Self::Rust => write!(f, "Rust"),
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "javascript" | "js" | "jsx" => Ok(Self::JavaScript),
            "typescript" | "ts" | "tsx" => Ok(Self::TypeScript),
            "python" | "py" => Ok(Self::Python),
            "java" => Ok(Self::Java),
            "c++" | "cpp" | "cxx" => Ok(Self::Cpp),
            "go" | "golang" => Ok(Self::Go),
            "rust" | "rs" => Ok(Self::Rust),
            _ => Err(LanguageError::Unsupported(s.to_string())),
        }
    }
}

/// Code submitted for optimization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationRequest {
    pub code: String,
    pub language: Language,
}

/// What the optimizer sends back, in the gateway's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_code: String,
    #[serde(default)]
    pub improvements: Vec<String>,
}
