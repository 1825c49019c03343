//! Assembly of the complete effect class.

use fxwrap_model::{RegisterType, ShaderModel};
use tracing::debug;

use super::{
    ConstructorKind, build_accessor_property, build_constructor, build_descriptor_field,
    build_sampler_descriptor_field, framework,
};
use crate::builder::{ClassSpec, CodeUnit, Member, NamespaceSpec, TypeRef};

/// Assemble the complete code unit for `model`.
///
/// Member order is fixed: constructor, the `Input` sampler pair, then one
/// descriptor field and accessor property per register in model order.
pub fn assemble(model: &ShaderModel, kind: ConstructorKind) -> CodeUnit {
    let class_name = model.generated_class_name.as_str();

    let mut class = ClassSpec::new(class_name)
        .base(TypeRef::named(framework::EFFECT_BASE))
        .member(Member::Constructor(build_constructor(model, kind)))
        .member(Member::Field(build_sampler_descriptor_field(
            class_name,
            framework::INPUT,
            framework::INPUT_REGISTER,
        )))
        .member(Member::Property(build_accessor_property(
            framework::INPUT,
            framework::property_type(RegisterType::Sampler),
            None,
        )));

    if let Some(description) = model.description.as_deref().filter(|d| !d.trim().is_empty()) {
        class = class.comment(framework::summary(description));
    }

    for register in &model.registers {
        class = class
            .member(Member::Field(build_descriptor_field(model, register)))
            .member(Member::Property(build_accessor_property(
                &register.name,
                framework::property_type(register.register_type),
                register.description.as_deref(),
            )));
    }

    debug!(
        namespace = %model.generated_namespace,
        class = class_name,
        registers = model.registers.len(),
        ?kind,
        "assembled effect class"
    );

    CodeUnit::new(
        framework::IMPORTS.iter().map(|s| s.to_string()).collect(),
        NamespaceSpec {
            name: model.generated_namespace.clone(),
            class,
        },
    )
}
