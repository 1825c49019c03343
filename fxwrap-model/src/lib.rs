//! Shader model types for the fxwrap effect class generator.
//!
//! A [`ShaderModel`] describes the inputs of a compiled pixel shader: the
//! namespace and class name of the wrapper to generate, and the ordered
//! list of [`ConstantRegister`] slots with their declared types and
//! default values.
//!
//! # Architecture
//!
//! ```text
//! shader binary → (upstream parser) → ShaderModel → fxwrap-codegen → source text
//! ```
//!
//! The model is produced once and consumed read-only. Register order is
//! significant: it fixes member declaration order and the order in which
//! the generated constructor pushes values to the shader.

mod model;
mod types;
mod validate;
mod value;

pub use model::{ConstantRegister, ShaderModel, TargetFramework};
pub use types::{RegisterSpace, RegisterType, ScalarKind};
pub use validate::{ModelError, Result};
pub use value::{Color, DefaultValue, Point, Point3D, Point4D, Size, Vector, Vector3D};
