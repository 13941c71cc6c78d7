//! The closed set of languages the editor understands.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;
use thiserror::Error;

/// A source language supported by the assistance engine.
///
/// Every per-language component (rule sets, keyword dictionaries, grammars)
/// dispatches on this enum with an exhaustive `match`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Python,
    JavaScript,
    Cpp,
    Java,
}

impl Language {
    /// All supported languages, in selector order.
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::JavaScript,
        Language::Cpp,
        Language::Java,
    ];

    /// The canonical language id used by the host (`"python"`, `"cpp"`, ...).
    pub const fn id(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }

    /// File extension for a buffer in this language.
    pub const fn extension(self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::JavaScript => "js",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }

    /// Name of the main buffer of a fresh playground (`main.py`, ...).
    pub fn file_name(self) -> String {
        format!("main.{}", self.extension())
    }

    /// The program a fresh playground buffer starts with.
    pub const fn starter_source(self) -> &'static str {
        match self {
            Language::Python => "print(\"Hello, World!\")",
            Language::JavaScript => "console.log(\"Hello, World!\")",
            Language::Cpp => {
                "#include <bits/stdc++.h>\nusing namespace std;\nint main(){ cout<<\"Hello, World!\"; }"
            }
            Language::Java => {
                "public class Main {\n  public static void main(String[] args){\n    System.out.println(\"Hello, World!\");\n  }\n}"
            }
        }
    }

    /// Whether the language uses C-style statement terminators.
    pub const fn is_c_family(self) -> bool {
        matches!(self, Language::JavaScript | Language::Cpp | Language::Java)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A language id the engine has no bindings for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language `{0}`")]
pub struct UnsupportedLanguage(pub SmolStr);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Parse a canonical id or a file extension.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            "cpp" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            other => Err(UnsupportedLanguage(SmolStr::new(other))),
        }
    }
}
