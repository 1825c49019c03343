use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result of loading settings. The error is boxed to keep `Result` small.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A settings document and the name it was loaded under.
///
/// Errors built from it carry the document so miette can render the
/// offending line.
#[derive(Debug, Clone)]
pub struct SourceContext {
    text: String,
    filename: String,
}

impl SourceContext {
    pub fn new(text: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Span of the first line assigning `key`, if the document has one.
    pub fn key_span(&self, key: &str) -> Option<SourceSpan> {
        let mut offset = 0;
        for line in self.text.split_inclusive('\n') {
            let trimmed = line.trim_start();
            let assigns = trimmed
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='));
            if assigns {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, trimmed.trim_end().len())));
            }
            offset += line.len();
        }
        None
    }

    /// Wrap a TOML deserialization failure.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(SourceSpan::from),
            src: self.document(),
            source,
        })
    }

    /// Report a rejected value, pointing at the line that sets `key`.
    pub fn validation_error(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            span: self.key_span(key),
            src: self.document(),
            message: message.into(),
        })
    }

    fn document(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.text.clone())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("could not read settings from '{path}'")]
    #[diagnostic(code(fxwrap::settings::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings document")]
    #[diagnostic(
        code(fxwrap::settings::parse),
        help("known keys: language, include_external_constructor, indent_using_tabs, indent_spaces")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(
        code(fxwrap::settings::invalid),
        help("set indent_using_tabs = true or give indent_spaces a width of at least 1")
    )]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("rejected value")]
        span: Option<SourceSpan>,
        message: String,
    },
}
