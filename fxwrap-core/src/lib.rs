//! Core configuration types for the fxwrap effect class generator.
//!
//! This crate holds the knobs a caller can turn without touching the
//! shader model: which output language to render, how to indent it, and
//! which constructor shape the generated class gets.

mod error;
mod indent;
mod language;
mod settings;

pub use error::{Error, Result, SourceContext};
pub use indent::Indent;
pub use language::OutputLanguage;
pub use settings::Settings;
