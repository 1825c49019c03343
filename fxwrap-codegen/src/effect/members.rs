//! Binding-descriptor fields and typed accessor properties.

use fxwrap_model::{ConstantRegister, ShaderModel};
use tracing::trace;

use super::{framework, literal::synthesize};
use crate::builder::{Expr, FieldSpec, PropertySpec, Statement, TypeRef};

/// Build the static descriptor field registering `register` with the
/// property system.
///
/// Samplers register by index alone. Every other register gets property
/// metadata carrying its synthesized default and a callback that pushes
/// the value into the constant buffer at its index.
pub fn build_descriptor_field(model: &ShaderModel, register: &ConstantRegister) -> FieldSpec {
    trace!(
        register = %register.name,
        ty = %register.register_type,
        index = register.register,
        "building descriptor field"
    );

    if register.register_type.is_sampler() {
        return build_sampler_descriptor_field(
            &model.generated_class_name,
            &register.name,
            register.register,
        );
    }

    let metadata = Expr::new_object(
        TypeRef::named(framework::metadata_type(model.target_framework)),
        vec![
            synthesize(register.default_value.as_ref(), register.register_type),
            Expr::call_unqualified(
                framework::CONSTANT_CALLBACK,
                vec![Expr::int(i32::from(register.register))],
            ),
        ],
    );
    let init = Expr::static_call(
        TypeRef::named(framework::DESCRIPTOR_TYPE),
        framework::REGISTER,
        vec![
            Expr::string(register.name.as_str()),
            Expr::type_of(framework::property_type(register.register_type)),
            Expr::type_of(TypeRef::named(model.generated_class_name.as_str())),
            metadata,
        ],
    );

    descriptor_field(&register.name, init)
}

/// Build a descriptor field registered through the sampler entry point.
pub fn build_sampler_descriptor_field(class_name: &str, property: &str, index: u8) -> FieldSpec {
    let init = Expr::static_call(
        TypeRef::named(framework::EFFECT_BASE),
        framework::REGISTER_SAMPLER,
        vec![
            Expr::string(property),
            Expr::type_of(TypeRef::named(class_name)),
            Expr::int(i32::from(index)),
        ],
    );
    descriptor_field(property, init)
}

/// Build the typed get/set property over a descriptor field.
///
/// The getter casts the descriptor's current value to `ty`; the setter
/// forwards the assigned value unchanged.
pub fn build_accessor_property(name: &str, ty: TypeRef, description: Option<&str>) -> PropertySpec {
    let descriptor = Expr::var(framework::descriptor_name(name));

    let get = Statement::Return(Expr::cast(
        ty.clone(),
        Expr::call(Expr::This, framework::GET_VALUE, vec![descriptor.clone()]),
    ));
    let set = Statement::Expr(Expr::call(
        Expr::This,
        framework::SET_VALUE,
        vec![descriptor, Expr::var(framework::SETTER_VALUE)],
    ));

    let property = PropertySpec::new(name, ty).getter(get).setter(set);
    match description.filter(|d| !d.trim().is_empty()) {
        Some(description) => property.comment(framework::summary(description)),
        None => property,
    }
}

fn descriptor_field(property: &str, init: Expr) -> FieldSpec {
    FieldSpec::new(
        framework::descriptor_name(property),
        TypeRef::named(framework::DESCRIPTOR_TYPE),
    )
    .static_()
    .init(init)
}
