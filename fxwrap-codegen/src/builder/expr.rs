//! Expression forms.
//!
//! Expressions describe *what* to construct, not how a language spells it:
//! `Expr::Cast` becomes `((float)(5F))` in C# and `CType(5!, Single)` in
//! Visual Basic.

use std::fmt;

use super::types::TypeRef;

/// Magnitudes outside this range are written in exponent form.
const POSITIONAL_RANGE: std::ops::Range<f64> = 1e-5..1e16;

/// A primitive literal.
///
/// Each variant pins the literal to an exact numeric type so backends can
/// emit the matching suffix instead of relying on literal type inference.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Float(f32),
    Double(f64),
    Int(i32),
    UInt(u32),
    /// String literal (will be quoted and escaped).
    String(String),
}

impl Literal {
    /// Digits of a finite floating-point literal, without a type suffix.
    ///
    /// The digits are the shortest form that parses back to the same bits.
    /// Very large and very small magnitudes use an exponent (`1E-45`).
    /// Returns `None` for non-float literals.
    pub fn real_digits(&self) -> Option<String> {
        match self {
            Self::Float(v) => Some(real_digits(*v, f64::from(v.abs()))),
            Self::Double(v) => Some(real_digits(*v, v.abs())),
            _ => None,
        }
    }
}

fn real_digits<T: fmt::Display + fmt::UpperExp>(value: T, magnitude: f64) -> String {
    if magnitude == 0.0 || POSITIONAL_RANGE.contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:E}")
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// Explicit conversion of `expr` to `ty`.
    Cast { ty: TypeRef, expr: Box<Expr> },
    /// The default value of a type (`default(T)`).
    DefaultOf(TypeRef),
    /// Object creation: `new T(args)`.
    New { ty: TypeRef, args: Vec<Expr> },
    /// Static method call: `T.Method(args)`.
    StaticCall {
        ty: TypeRef,
        method: String,
        args: Vec<Expr>,
    },
    /// Method call on a target, or an unqualified call when `target` is `None`.
    Call {
        target: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },
    /// Runtime type object of a type (`typeof(T)`).
    TypeOf(TypeRef),
    /// The current instance.
    This,
    /// A local, parameter or field reference by name.
    Var(String),
    /// Property access on a target.
    Member { target: Box<Expr>, name: String },
    /// Enumeration member: `T.Member`.
    EnumMember { ty: TypeRef, member: String },
}

impl Expr {
    pub fn literal(literal: Literal) -> Self {
        Self::Literal(literal)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    pub fn int(value: i32) -> Self {
        Self::Literal(Literal::Int(value))
    }

    pub fn double(value: f64) -> Self {
        Self::Literal(Literal::Double(value))
    }

    pub fn cast(ty: TypeRef, expr: Expr) -> Self {
        Self::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn default_of(ty: TypeRef) -> Self {
        Self::DefaultOf(ty)
    }

    pub fn new_object(ty: TypeRef, args: Vec<Expr>) -> Self {
        Self::New { ty, args }
    }

    pub fn static_call(ty: TypeRef, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::StaticCall {
            ty,
            method: method.into(),
            args,
        }
    }

    /// Call a method on `target`.
    pub fn call(target: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            target: Some(Box::new(target)),
            method: method.into(),
            args,
        }
    }

    /// Call a method in scope without qualification.
    pub fn call_unqualified(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            target: None,
            method: method.into(),
            args,
        }
    }

    pub fn type_of(ty: TypeRef) -> Self {
        Self::TypeOf(ty)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn member(target: Expr, name: impl Into<String>) -> Self {
        Self::Member {
            target: Box::new(target),
            name: name.into(),
        }
    }

    pub fn enum_member(ty: TypeRef, member: impl Into<String>) -> Self {
        Self::EnumMember {
            ty,
            member: member.into(),
        }
    }

    /// Returns the method name if this is a call of any kind.
    pub fn method_name(&self) -> Option<&str> {
        match self {
            Self::Call { method, .. } | Self::StaticCall { method, .. } => Some(method.as_str()),
            _ => None,
        }
    }

    /// Returns the arguments if this is a call or object creation.
    pub fn args(&self) -> &[Expr] {
        match self {
            Self::Call { args, .. } | Self::StaticCall { args, .. } | Self::New { args, .. } => {
                args
            }
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PrimitiveType;

    #[test]
    fn test_cast_boxes_inner() {
        let expr = Expr::cast(
            TypeRef::primitive(PrimitiveType::Float),
            Expr::literal(Literal::Float(5.0)),
        );
        match expr {
            Expr::Cast { ty, expr } => {
                assert_eq!(ty, TypeRef::Primitive(PrimitiveType::Float));
                assert_eq!(*expr, Expr::Literal(Literal::Float(5.0)));
            }
            other => panic!("expected cast, got {other:?}"),
        }
    }

    #[test]
    fn test_real_digits() {
        assert_eq!(Literal::Float(5.0).real_digits().as_deref(), Some("5"));
        assert_eq!(Literal::Double(0.1).real_digits().as_deref(), Some("0.1"));
        assert_eq!(Literal::Double(-0.0).real_digits().as_deref(), Some("-0"));
        assert_eq!(
            Literal::Double(f64::MAX).real_digits().as_deref(),
            Some("1.7976931348623157E308")
        );
        assert_eq!(Literal::Double(5e-324).real_digits().as_deref(), Some("5E-324"));
        assert_eq!(Literal::Float(1e-45).real_digits().as_deref(), Some("1E-45"));
        assert_eq!(Literal::Int(3).real_digits(), None);
    }

    #[test]
    fn test_call_accessors() {
        let call = Expr::call(Expr::This, "UpdateShaderValue", vec![Expr::var("InputProperty")]);
        assert_eq!(call.method_name(), Some("UpdateShaderValue"));
        assert_eq!(call.args(), &[Expr::var("InputProperty")]);

        let unqualified = Expr::call_unqualified("PixelShaderConstantCallback", vec![Expr::int(1)]);
        assert!(matches!(unqualified, Expr::Call { target: None, .. }));

        assert_eq!(Expr::This.method_name(), None);
        assert!(Expr::var("x").args().is_empty());
    }
}
