//! Language-neutral type references.

use fxwrap_model::ScalarKind;

/// A type reference in the syntax tree.
///
/// Primitives render with each language's keyword (`float` / `Single`);
/// named types render verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(PrimitiveType),
    Named(String),
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a primitive type reference.
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    /// Returns the name of a named type.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name.as_str()),
            Self::Primitive(_) => None,
        }
    }
}

impl From<ScalarKind> for TypeRef {
    fn from(kind: ScalarKind) -> Self {
        Self::Primitive(kind.into())
    }
}

/// Numeric primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// 32-bit float (C#: float, VB: Single).
    Float,
    /// 64-bit float (C#: double, VB: Double).
    Double,
    /// 32-bit signed integer (C#: int, VB: Integer).
    Int,
    /// 32-bit unsigned integer (C#: uint, VB: UInteger).
    UInt,
}

impl From<ScalarKind> for PrimitiveType {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Float => Self::Float,
            ScalarKind::Double => Self::Double,
            ScalarKind::Int => Self::Int,
            ScalarKind::UInt => Self::UInt,
        }
    }
}
