//! Generator settings and their `fxwrap.toml` loader.

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Indent, OutputLanguage, Result, SourceContext};

/// Caller preferences for one generation run.
///
/// ```toml
/// language = "vb"
/// include_external_constructor = true
/// indent_using_tabs = false
/// indent_spaces = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Language to render the wrapper class in.
    pub language: OutputLanguage,
    /// Generate a constructor taking a precompiled `PixelShader` instead of
    /// one that loads the shader from a resource.
    pub include_external_constructor: bool,
    pub indent_using_tabs: bool,
    pub indent_spaces: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: OutputLanguage::default(),
            include_external_constructor: false,
            indent_using_tabs: false,
            indent_spaces: 4,
        }
    }
}

impl Settings {
    /// Parse settings from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse settings from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let settings: Settings = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        if !settings.indent_using_tabs && settings.indent_spaces == 0 {
            return Err(ctx.validation_error("indent_spaces", "indent_spaces must be at least 1"));
        }
        Ok(settings)
    }

    /// Resolve the indentation preference.
    pub fn indent(&self) -> Indent {
        if self.indent_using_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent_spaces)
        }
    }
}

impl FromStr for Settings {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "fxwrap.toml")
    }
}
