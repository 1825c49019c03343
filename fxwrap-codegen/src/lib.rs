//! Class assembly and rendering contract for the fxwrap effect class generator.
//!
//! This crate turns a [`ShaderModel`](fxwrap_model::ShaderModel) into a small,
//! language-neutral syntax tree describing one `ShaderEffect` subclass, and
//! defines the [`Backend`](language::Backend) trait that output-language
//! crates implement to turn that tree into source text.
//!
//! # Module Organization
//!
//! - [`builder`] - Syntax tree nodes and the indented [`CodeBuilder`](builder::CodeBuilder)
//! - [`effect`] - Class, constructor and member builders, and default-value literal synthesis
//! - [`language`] - Backend trait and reserved-word checks

pub mod builder;
pub mod effect;
mod error;
pub mod language;

pub use error::{Error, Result};
pub use fxwrap_core::Indent;
