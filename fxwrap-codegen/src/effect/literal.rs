//! Default-value literal synthesis.
//!
//! A generated class must compile on its own, so every default value is
//! rebuilt as an expression that reconstructs it: a cast-pinned primitive
//! literal, a constructor call, or a `Color.FromArgb` factory call.

use fxwrap_model::{DefaultValue, Point, Point3D, RegisterType, ScalarKind};
use tracing::{trace, warn};

use super::framework;
use crate::builder::{Expr, Literal, TypeRef};

/// Build the expression that reconstructs `value`.
///
/// An absent default becomes the default of the declared type. Opaque
/// values, which have no literal form, become the default of their own
/// runtime type. Total over every [`DefaultValue`].
pub fn synthesize(value: Option<&DefaultValue>, declared: RegisterType) -> Expr {
    let Some(value) = value else {
        return Expr::default_of(framework::property_type(declared));
    };
    trace!(shape = value.shape(), declared = %declared, "synthesizing default value");

    match value {
        DefaultValue::Float(v) => pinned(ScalarKind::Float, Literal::Float(*v)),
        DefaultValue::Double(v) => pinned(ScalarKind::Double, Literal::Double(*v)),
        DefaultValue::Int(v) => pinned(ScalarKind::Int, Literal::Int(*v)),
        DefaultValue::UInt(v) => pinned(ScalarKind::UInt, Literal::UInt(*v)),
        DefaultValue::Point(p) => planar("Point", *p),
        DefaultValue::Vector(v) => planar("Vector", Point::from(*v)),
        DefaultValue::Size(s) => planar("Size", Point::from(*s)),
        DefaultValue::Point3D(p) => spatial("Point3D", *p),
        DefaultValue::Vector3D(v) => spatial("Vector3D", Point3D::from(*v)),
        DefaultValue::Point4D(p) => Expr::new_object(
            TypeRef::named("Point4D"),
            vec![
                Expr::double(p.x),
                Expr::double(p.y),
                Expr::double(p.z),
                Expr::double(p.w),
            ],
        ),
        DefaultValue::Color(c) => Expr::static_call(
            TypeRef::named("Color"),
            "FromArgb",
            [c.a, c.r, c.g, c.b]
                .into_iter()
                .map(|channel| Expr::int(i32::from(channel)))
                .collect(),
        ),
        DefaultValue::Opaque { type_name } => {
            warn!(
                type_name = %type_name,
                "default value has no literal form, using default of its type"
            );
            Expr::default_of(TypeRef::named(type_name.as_str()))
        }
    }
}

/// A primitive literal wrapped in a cast to its exact type.
fn pinned(kind: ScalarKind, literal: Literal) -> Expr {
    Expr::cast(TypeRef::from(kind), Expr::literal(literal))
}

fn planar(type_name: &str, point: Point) -> Expr {
    Expr::new_object(
        TypeRef::named(type_name),
        vec![Expr::double(point.x), Expr::double(point.y)],
    )
}

fn spatial(type_name: &str, point: Point3D) -> Expr {
    Expr::new_object(
        TypeRef::named(type_name),
        vec![
            Expr::double(point.x),
            Expr::double(point.y),
            Expr::double(point.z),
        ],
    )
}

#[cfg(test)]
mod tests {
    use fxwrap_model::{Color, Point4D, Size, Vector, Vector3D};

    use super::*;
    use crate::builder::PrimitiveType;

    #[test]
    fn test_absent_default_uses_declared_type() {
        assert_eq!(
            synthesize(None, RegisterType::Float),
            Expr::DefaultOf(TypeRef::Primitive(PrimitiveType::Float))
        );
        assert_eq!(
            synthesize(None, RegisterType::Point3D),
            Expr::DefaultOf(TypeRef::named("Point3D"))
        );
    }

    #[test]
    fn test_scalars_are_cast_pinned() {
        assert_eq!(
            synthesize(Some(&DefaultValue::Float(5.0)), RegisterType::Float),
            Expr::cast(
                TypeRef::primitive(PrimitiveType::Float),
                Expr::literal(Literal::Float(5.0))
            )
        );
        assert_eq!(
            synthesize(Some(&DefaultValue::UInt(7)), RegisterType::UInt),
            Expr::cast(
                TypeRef::primitive(PrimitiveType::UInt),
                Expr::literal(Literal::UInt(7))
            )
        );
    }

    #[test]
    fn test_planar_values_keep_their_type() {
        assert_eq!(
            synthesize(Some(&DefaultValue::Size(Size::new(3.0, 4.5))), RegisterType::Size),
            Expr::new_object(
                TypeRef::named("Size"),
                vec![Expr::double(3.0), Expr::double(4.5)]
            )
        );
        assert_eq!(
            synthesize(Some(&DefaultValue::Vector(Vector::new(-1.0, 0.5))), RegisterType::Vector),
            Expr::new_object(
                TypeRef::named("Vector"),
                vec![Expr::double(-1.0), Expr::double(0.5)]
            )
        );
    }

    #[test]
    fn test_spatial_values() {
        let expr = synthesize(
            Some(&DefaultValue::Vector3D(Vector3D::new(1.0, 2.0, 3.0))),
            RegisterType::Vector3D,
        );
        assert_eq!(
            expr,
            Expr::new_object(
                TypeRef::named("Vector3D"),
                vec![Expr::double(1.0), Expr::double(2.0), Expr::double(3.0)]
            )
        );
    }

    #[test]
    fn test_point4d_in_xyzw_order() {
        let expr = synthesize(
            Some(&DefaultValue::Point4D(Point4D::new(0.1, 0.2, 0.3, 0.4))),
            RegisterType::Point4D,
        );
        assert_eq!(
            expr.args(),
            &[
                Expr::double(0.1),
                Expr::double(0.2),
                Expr::double(0.3),
                Expr::double(0.4)
            ]
        );
    }

    #[test]
    fn test_color_in_argb_order() {
        let expr = synthesize(
            Some(&DefaultValue::Color(Color::from_argb(128, 255, 64, 0))),
            RegisterType::Color,
        );
        assert_eq!(
            expr,
            Expr::static_call(
                TypeRef::named("Color"),
                "FromArgb",
                vec![Expr::int(128), Expr::int(255), Expr::int(64), Expr::int(0)]
            )
        );
    }

    #[test]
    fn test_opaque_falls_back_to_default_of_its_type() {
        assert_eq!(
            synthesize(Some(&DefaultValue::opaque("ImageBrush")), RegisterType::Sampler),
            Expr::DefaultOf(TypeRef::named("ImageBrush"))
        );
    }

    #[test]
    fn test_precision_is_preserved() {
        let value = 0.1_f32 + 0.2_f32;
        match synthesize(Some(&DefaultValue::Float(value)), RegisterType::Float) {
            Expr::Cast { expr, .. } => {
                assert_eq!(*expr, Expr::Literal(Literal::Float(value)));
            }
            other => panic!("expected cast, got {other:?}"),
        }
    }
}
