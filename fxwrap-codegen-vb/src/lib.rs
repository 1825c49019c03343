//! Visual Basic backend for the fxwrap effect class generator.
//!
//! Same tree, same member order as the C# backend; only syntax differs.
//! Identifiers are compared against the reserved-word table
//! case-insensitively, as the language itself does.

mod backend;
mod naming;
mod post_process;
mod renderer;
mod structure_renderer;

pub use backend::VisualBasicBackend;
pub use naming::VB_NAMING;
pub use post_process::{promote_doc_comments, promote_readonly};
pub use renderer::VisualBasicRenderer;
