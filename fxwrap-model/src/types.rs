//! Declared register types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DefaultValue;

/// Primitive numeric kinds a scalar register can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UInt,
}

/// Register file a slot lives in.
///
/// Constant registers (`c0`, `c1`, ...) and sampler registers (`s0`, `s1`,
/// ...) are numbered independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterSpace {
    Constant,
    Sampler,
}

/// The declared type of a constant register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegisterType {
    Float,
    Double,
    Int,
    UInt,
    Point,
    Vector,
    Size,
    Point3D,
    Vector3D,
    Point4D,
    Color,
    /// Brush-like texture input bound by sampler index.
    Sampler,
}

impl RegisterType {
    /// Get the lowercase name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Point => "point",
            Self::Vector => "vector",
            Self::Size => "size",
            Self::Point3D => "point3d",
            Self::Vector3D => "vector3d",
            Self::Point4D => "point4d",
            Self::Color => "color",
            Self::Sampler => "sampler",
        }
    }

    /// Returns the scalar kind for numeric register types.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::Float => Some(ScalarKind::Float),
            Self::Double => Some(ScalarKind::Double),
            Self::Int => Some(ScalarKind::Int),
            Self::UInt => Some(ScalarKind::UInt),
            _ => None,
        }
    }

    /// Framework type name of the property a slot of this type is exposed as.
    pub fn clr_name(&self) -> &'static str {
        match self {
            Self::Float => "Single",
            Self::Double => "Double",
            Self::Int => "Int32",
            Self::UInt => "UInt32",
            Self::Point => "Point",
            Self::Vector => "Vector",
            Self::Size => "Size",
            Self::Point3D => "Point3D",
            Self::Vector3D => "Vector3D",
            Self::Point4D => "Point4D",
            Self::Color => "Color",
            Self::Sampler => "Brush",
        }
    }

    /// Returns true for the brush-like sampler category.
    pub fn is_sampler(&self) -> bool {
        matches!(self, Self::Sampler)
    }

    /// Register file this type is bound through.
    pub fn space(&self) -> RegisterSpace {
        if self.is_sampler() {
            RegisterSpace::Sampler
        } else {
            RegisterSpace::Constant
        }
    }

    /// Check whether a default value can be assigned to a slot of this type.
    ///
    /// Opaque values carry only a type name. A sampler takes any brush-like
    /// value; every other slot requires the name of its own property type.
    pub fn accepts(&self, value: &DefaultValue) -> bool {
        if let DefaultValue::Opaque { type_name } = value {
            return self.is_sampler() || type_name == self.clr_name();
        }
        matches!(
            (self, value),
            (Self::Float, DefaultValue::Float(_))
                | (Self::Double, DefaultValue::Double(_))
                | (Self::Int, DefaultValue::Int(_))
                | (Self::UInt, DefaultValue::UInt(_))
                | (Self::Point, DefaultValue::Point(_))
                | (Self::Vector, DefaultValue::Vector(_))
                | (Self::Size, DefaultValue::Size(_))
                | (Self::Point3D, DefaultValue::Point3D(_))
                | (Self::Vector3D, DefaultValue::Vector3D(_))
                | (Self::Point4D, DefaultValue::Point4D(_))
                | (Self::Color, DefaultValue::Color(_))
        )
    }
}

impl fmt::Display for RegisterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
