//! Builders for the generated `ShaderEffect` subclass.
//!
//! [`assemble`] is the entry point. It asks [`build_constructor`] for the
//! constructor and, per register, [`build_descriptor_field`] and
//! [`build_accessor_property`] for the member pair; descriptor fields get
//! their default value from [`synthesize`].

mod assemble;
mod constructor;
pub mod framework;
mod literal;
mod members;

pub use assemble::assemble;
pub use constructor::{ConstructorKind, build_constructor};
pub use literal::synthesize;
pub use members::{build_accessor_property, build_descriptor_field, build_sampler_descriptor_field};
