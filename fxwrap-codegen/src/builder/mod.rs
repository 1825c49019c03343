//! Syntax tree building blocks.
//!
//! The generator never builds source text directly. Builders in
//! [`effect`](crate::effect) produce a [`CodeUnit`], and each output
//! language's backend serializes it with a [`CodeBuilder`].
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`TypeRef`], [`PrimitiveType`] - Language-neutral type references
//! - [`Expr`], [`Literal`] - Expression forms
//! - [`Statement`], [`Param`] - Constructor and accessor bodies
//! - [`CodeUnit`], [`NamespaceSpec`], [`ClassSpec`], [`Member`] - Declarations

mod code_builder;
mod expr;
mod statement;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use expr::{Expr, Literal};
pub use statement::{Param, Statement};
pub use structure::{
    ClassSpec, CodeUnit, ConstructorSpec, FieldSpec, Member, NamespaceSpec, PropertySpec,
};
pub use types::{PrimitiveType, TypeRef};
