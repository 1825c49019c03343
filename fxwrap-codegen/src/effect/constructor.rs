//! Constructor variants and the shader update sequence.

use fxwrap_model::ShaderModel;

use super::framework;
use crate::builder::{ConstructorSpec, Expr, Param, Statement, TypeRef};

/// Shape of the generated constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConstructorKind {
    /// Takes a precompiled `PixelShader` from the caller.
    ExternalInstance,
    /// Loads the shader from the assembly's embedded resource.
    #[default]
    SelfLoading,
}

impl ConstructorKind {
    /// Resolve the caller's `include_external_constructor` flag.
    pub fn from_flag(include_external_constructor: bool) -> Self {
        if include_external_constructor {
            Self::ExternalInstance
        } else {
            Self::SelfLoading
        }
    }
}

/// Build the constructor for `model`.
///
/// Both shapes end with the same update sequence: `Input` first, then every
/// register in model order. The sampler must be primed before per-register
/// constants are pushed.
pub fn build_constructor(model: &ShaderModel, kind: ConstructorKind) -> ConstructorSpec {
    let shader_slot = Expr::member(Expr::This, framework::SHADER_PROGRAM);
    let shader_type = TypeRef::named(framework::SHADER_PROGRAM);

    let ctor = match kind {
        ConstructorKind::ExternalInstance => ConstructorSpec::new()
            .param(Param::new(framework::SHADER_PARAM, shader_type))
            .statement(Statement::assign(
                shader_slot,
                Expr::var(framework::SHADER_PARAM),
            )),
        ConstructorKind::SelfLoading => {
            let uri = Expr::new_object(
                TypeRef::named(framework::URI),
                vec![
                    Expr::string(framework::resource_uri(
                        &model.generated_namespace,
                        &model.generated_class_name,
                    )),
                    Expr::enum_member(
                        TypeRef::named(framework::URI_KIND),
                        framework::URI_KIND_RELATIVE,
                    ),
                ],
            );
            ConstructorSpec::new()
                .statement(Statement::local(
                    shader_type.clone(),
                    framework::SHADER_LOCAL,
                    Expr::new_object(shader_type, Vec::new()),
                ))
                .statement(Statement::assign(
                    Expr::member(Expr::var(framework::SHADER_LOCAL), framework::URI_SOURCE),
                    uri,
                ))
                .statement(Statement::assign(
                    shader_slot,
                    Expr::var(framework::SHADER_LOCAL),
                ))
        }
    };

    ctor.statement(Statement::Blank)
        .statements(update_sequence(model))
}

/// One update call per bound property: `Input`, then registers in order.
fn update_sequence(model: &ShaderModel) -> impl Iterator<Item = Statement> + '_ {
    std::iter::once(framework::INPUT)
        .chain(model.registers.iter().map(|r| r.name.as_str()))
        .map(|property| {
            Statement::Expr(Expr::call(
                Expr::This,
                framework::UPDATE_SHADER_VALUE,
                vec![Expr::var(framework::descriptor_name(property))],
            ))
        })
}

#[cfg(test)]
mod tests {
    use fxwrap_model::{ConstantRegister, RegisterType};

    use super::*;

    fn model() -> ShaderModel {
        ShaderModel::new("Effects.Generated", "BlurEffect")
            .with_register(ConstantRegister::new("Radius", RegisterType::Float, 1))
            .with_register(ConstantRegister::new("Overlay", RegisterType::Sampler, 1))
            .with_register(ConstantRegister::new("Center", RegisterType::Point, 2))
    }

    /// Descriptor names passed to update calls, in order.
    fn updated(ctor: &ConstructorSpec) -> Vec<String> {
        ctor.body
            .iter()
            .filter_map(|s| match s {
                Statement::Expr(call) if call.method_name() == Some("UpdateShaderValue") => {
                    match call.args() {
                        [Expr::Var(name)] => Some(name.clone()),
                        _ => None,
                    }
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(ConstructorKind::from_flag(true), ConstructorKind::ExternalInstance);
        assert_eq!(ConstructorKind::from_flag(false), ConstructorKind::SelfLoading);
    }

    #[test]
    fn test_update_order_is_identical_for_both_shapes() {
        let expected = ["InputProperty", "RadiusProperty", "OverlayProperty", "CenterProperty"];
        for kind in [ConstructorKind::ExternalInstance, ConstructorKind::SelfLoading] {
            assert_eq!(updated(&build_constructor(&model(), kind)), expected);
        }
    }

    #[test]
    fn test_external_instance_shape() {
        let ctor = build_constructor(&model(), ConstructorKind::ExternalInstance);

        assert_eq!(ctor.params, vec![Param::new("shader", TypeRef::named("PixelShader"))]);
        assert_eq!(
            ctor.body[0],
            Statement::assign(
                Expr::member(Expr::This, "PixelShader"),
                Expr::var("shader")
            )
        );
        assert_eq!(ctor.body[1], Statement::Blank);
    }

    #[test]
    fn test_self_loading_shape() {
        let ctor = build_constructor(&model(), ConstructorKind::SelfLoading);

        assert!(ctor.params.is_empty());
        assert_eq!(
            ctor.body[0],
            Statement::local(
                TypeRef::named("PixelShader"),
                "pixelShader",
                Expr::new_object(TypeRef::named("PixelShader"), vec![])
            )
        );
        match &ctor.body[1] {
            Statement::Assign { target, value } => {
                assert_eq!(target, &Expr::member(Expr::var("pixelShader"), "UriSource"));
                assert_eq!(
                    value.args()[0],
                    Expr::string("/Effects.Generated;component/BlurEffect.ps")
                );
                assert_eq!(
                    value.args()[1],
                    Expr::enum_member(TypeRef::named("UriKind"), "Relative")
                );
            }
            other => panic!("expected uri assignment, got {other:?}"),
        }
        assert_eq!(
            ctor.body[2],
            Statement::assign(
                Expr::member(Expr::This, "PixelShader"),
                Expr::var("pixelShader")
            )
        );
        assert_eq!(ctor.body[3], Statement::Blank);
    }

    #[test]
    fn test_empty_model_updates_input_only() {
        let model = ShaderModel::new("Effects", "Plain");
        let ctor = build_constructor(&model, ConstructorKind::SelfLoading);
        assert_eq!(updated(&ctor), ["InputProperty"]);
    }
}
