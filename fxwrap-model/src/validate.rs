//! Upstream validation of model invariants.
//!
//! The generator itself never calls this; a malformed model is a caller
//! error. Producers of [`ShaderModel`] values can run it before handing
//! the model over.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{RegisterSpace, ShaderModel};

/// Result type for model validation.
pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("duplicate register name '{name}'")]
    DuplicateName { name: String },

    #[error("register '{second}' reuses index {index} already taken by '{first}'")]
    DuplicateIndex {
        index: u8,
        first: String,
        second: String,
    },

    #[error("sampler register '{name}' uses index 0, which is reserved for Input")]
    ReservedIndex { name: String },

    #[error("default value of '{name}' is a {shape}, which cannot be assigned to {declared}")]
    DefaultTypeMismatch {
        name: String,
        shape: &'static str,
        declared: &'static str,
    },
}

impl ShaderModel {
    /// Check the invariants the generator relies on.
    pub fn validate(&self) -> Result<()> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut indices: HashMap<(RegisterSpace, u8), &str> = HashMap::new();

        for register in &self.registers {
            if !names.insert(register.name.as_str()) {
                return Err(ModelError::DuplicateName {
                    name: register.name.clone(),
                });
            }

            let space = register.register_type.space();
            if space == RegisterSpace::Sampler && register.register == 0 {
                return Err(ModelError::ReservedIndex {
                    name: register.name.clone(),
                });
            }
            if let Some(first) =
                indices.insert((space, register.register), register.name.as_str())
            {
                return Err(ModelError::DuplicateIndex {
                    index: register.register,
                    first: first.to_string(),
                    second: register.name.clone(),
                });
            }

            match &register.default_value {
                Some(value) if !register.register_type.accepts(value) => {
                    return Err(ModelError::DefaultTypeMismatch {
                        name: register.name.clone(),
                        shape: value.shape(),
                        declared: register.register_type.as_str(),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstantRegister, DefaultValue, ModelError, RegisterType, ShaderModel};

    fn model() -> ShaderModel {
        ShaderModel::new("Effects", "TestEffect")
    }

    #[test]
    fn test_valid_model() {
        let model = model()
            .with_register(ConstantRegister::new("Amount", RegisterType::Float, 0))
            .with_register(ConstantRegister::new("Overlay", RegisterType::Sampler, 1))
            .with_register(
                ConstantRegister::new("Center", RegisterType::Point, 1)
                    .with_default(DefaultValue::Point(Default::default())),
            );
        assert_eq!(model.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_name() {
        let model = model()
            .with_register(ConstantRegister::new("Amount", RegisterType::Float, 1))
            .with_register(ConstantRegister::new("Amount", RegisterType::Double, 2));
        assert_eq!(
            model.validate(),
            Err(ModelError::DuplicateName {
                name: "Amount".into()
            })
        );
    }

    #[test]
    fn test_duplicate_index() {
        let model = model()
            .with_register(ConstantRegister::new("A", RegisterType::Float, 3))
            .with_register(ConstantRegister::new("B", RegisterType::Color, 3));
        let err = model.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "register 'B' reuses index 3 already taken by 'A'"
        );
    }

    #[test]
    fn test_sampler_index_zero_is_reserved() {
        let model = model().with_register(ConstantRegister::new("Tex", RegisterType::Sampler, 0));
        assert!(matches!(
            model.validate(),
            Err(ModelError::ReservedIndex { .. })
        ));
    }

    #[test]
    fn test_default_type_mismatch() {
        let model = model().with_register(
            ConstantRegister::new("Amount", RegisterType::Float, 1)
                .with_default(DefaultValue::Int(1)),
        );
        assert_eq!(
            model.validate(),
            Err(ModelError::DefaultTypeMismatch {
                name: "Amount".into(),
                shape: "int",
                declared: "float",
            })
        );
    }

    #[test]
    fn test_opaque_default_type_mismatch() {
        let model = model().with_register(
            ConstantRegister::new("Amount", RegisterType::Double, 1)
                .with_default(DefaultValue::opaque("SolidColorBrush")),
        );
        assert_eq!(
            model.validate(),
            Err(ModelError::DefaultTypeMismatch {
                name: "Amount".into(),
                shape: "opaque",
                declared: "double",
            })
        );
    }

    #[test]
    fn test_opaque_default_of_property_type() {
        let model = model()
            .with_register(
                ConstantRegister::new("Amount", RegisterType::Double, 1)
                    .with_default(DefaultValue::opaque("Double")),
            )
            .with_register(
                ConstantRegister::new("Overlay", RegisterType::Sampler, 1)
                    .with_default(DefaultValue::opaque("ImageBrush")),
            );
        assert_eq!(model.validate(), Ok(()));
    }
}
