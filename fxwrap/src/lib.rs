//! Generate strongly-typed WPF `ShaderEffect` wrapper classes.
//!
//! Given a [`ShaderModel`] describing a compiled pixel shader's constant
//! registers, fxwrap emits the C# or Visual Basic source of a class that
//! exposes every register as a dependency property.
//!
//! # Usage
//!
//! ```
//! use fxwrap::{ConstantRegister, DefaultValue, Indent, OutputLanguage, RegisterType, ShaderModel};
//!
//! let model = ShaderModel::new("Effects.Generated", "BlurEffect").with_register(
//!     ConstantRegister::new("Radius", RegisterType::Float, 1)
//!         .with_default(DefaultValue::Float(5.0)),
//! );
//!
//! let source = fxwrap::generate(&model, false, OutputLanguage::CSharp, Indent::default())?;
//! assert!(source.contains("public class BlurEffect : ShaderEffect"));
//! # Ok::<(), eyre::Report>(())
//! ```
//!
//! # Crates
//!
//! - `fxwrap-model` - the shader model
//! - `fxwrap-core` - settings, indentation and output language
//! - `fxwrap-codegen` - syntax tree, class assembly and the backend trait
//! - `fxwrap-codegen-csharp`, `fxwrap-codegen-vb` - output backends

mod generate;
mod language;

pub use fxwrap_codegen::{
    Indent,
    effect::{ConstructorKind, assemble},
    language::Backend,
};
pub use fxwrap_core::{OutputLanguage, Settings};
pub use fxwrap_model::{
    Color, ConstantRegister, DefaultValue, ModelError, Point, Point3D, Point4D, RegisterType,
    ShaderModel, Size, TargetFramework, Vector, Vector3D,
};
pub use generate::{Generator, generate};
pub use language::backend;
