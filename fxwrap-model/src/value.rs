//! Default values carried by constant registers.
//!
//! Vector-like values come in several framework flavours (`Point`, `Vector`,
//! `Size`, ...). The `From` conversions below canonicalize the two- and
//! three-component flavours to [`Point`] and [`Point3D`], which is the
//! shape literal synthesis works with.

use serde::{Deserialize, Serialize};

/// A two-component point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A two-component displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A three-component point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A three-component displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A four-component point, the native shape of a `float4` register.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Point4D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Point4D {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}

/// An 8-bit-per-channel ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Size> for Point {
    fn from(s: Size) -> Self {
        Self::new(s.width, s.height)
    }
}

impl From<Vector3D> for Point3D {
    fn from(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// The default value of a register, as decoded from the shader binary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultValue {
    Float(f32),
    Double(f64),
    Int(i32),
    UInt(u32),
    Point(Point),
    Vector(Vector),
    Size(Size),
    Point3D(Point3D),
    Vector3D(Vector3D),
    Point4D(Point4D),
    Color(Color),
    /// A value with no literal form, identified by its runtime type name.
    Opaque { type_name: String },
}

impl DefaultValue {
    /// Create an opaque value of the named type.
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self::Opaque {
            type_name: type_name.into(),
        }
    }

    /// Short name of the value's shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Point(_) => "point",
            Self::Vector(_) => "vector",
            Self::Size(_) => "size",
            Self::Point3D(_) => "point3d",
            Self::Vector3D(_) => "vector3d",
            Self::Point4D(_) => "point4d",
            Self::Color(_) => "color",
            Self::Opaque { .. } => "opaque",
        }
    }
}
