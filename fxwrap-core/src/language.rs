//! Output languages the generator can render.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for the generated wrapper class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    /// C#
    #[default]
    CSharp,
    /// Visual Basic .NET
    #[serde(rename = "vb")]
    VisualBasic,
}

impl OutputLanguage {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::CSharp => "csharp",
            OutputLanguage::VisualBasic => "vb",
        }
    }

    /// File extension of generated sources, without the dot.
    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputLanguage::CSharp => "cs",
            OutputLanguage::VisualBasic => "vb",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csharp" | "cs" | "c#" => Ok(OutputLanguage::CSharp),
            "vb" | "visualbasic" | "vbnet" => Ok(OutputLanguage::VisualBasic),
            _ => Err(format!(
                "unknown language '{}', expected 'csharp' or 'vb'",
                s
            )),
        }
    }
}
