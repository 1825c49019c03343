//! Output-language abstractions.
//!
//! - [`Backend`] - Serializes a [`CodeUnit`](crate::builder::CodeUnit) to source text
//! - [`NamingConvention`] - Reserved words of a target language

mod backend;
mod naming;

pub use backend::{Backend, check_identifiers};
pub use naming::NamingConvention;
