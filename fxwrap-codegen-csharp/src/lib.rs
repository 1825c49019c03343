//! C# backend for the fxwrap effect class generator.
//!
//! Renders the language-neutral [`CodeUnit`](fxwrap_codegen::builder::CodeUnit)
//! produced by [`fxwrap_codegen::effect::assemble`] as a C# source file.
//!
//! # Usage
//!
//! ```ignore
//! use fxwrap_codegen::effect::{ConstructorKind, assemble};
//! use fxwrap_codegen::language::Backend;
//! use fxwrap_codegen_csharp::CSharpBackend;
//!
//! let unit = assemble(&model, ConstructorKind::SelfLoading);
//! let source = CSharpBackend::new().render(&unit, Indent::default())?;
//! ```
//!
//! # Generated Output
//!
//! - an `// <auto-generated>` banner and `using` imports
//! - one namespace holding the `ShaderEffect` subclass, Allman braces
//! - `public static readonly DependencyProperty` descriptor fields
//! - `///` documentation comments for described classes and properties

mod backend;
mod naming;
mod post_process;
mod renderer;
mod structure_renderer;

pub use backend::CSharpBackend;
pub use naming::CSHARP_NAMING;
pub use post_process::{promote_doc_comments, promote_readonly};
pub use renderer::CSharpRenderer;
