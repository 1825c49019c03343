use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("'{name}' is a reserved word in {language} and cannot be used as a {context} name")]
    #[diagnostic(
        code(fxwrap::reserved_keyword),
        help("rename the {context} in the shader source, e.g. '{name}Value'")
    )]
    ReservedKeyword {
        name: String,
        context: &'static str,
        language: &'static str,
    },
}
