//! The shader model and its constant registers.

use serde::{Deserialize, Serialize};

use crate::{DefaultValue, RegisterType};

/// Host framework flavour the wrapper is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFramework {
    /// Desktop WPF, which offers `UIPropertyMetadata`.
    #[default]
    Wpf,
    /// Silverlight, limited to plain `PropertyMetadata`.
    Silverlight,
}

impl TargetFramework {
    /// Returns true if the UI-specific property metadata type is available.
    pub fn has_ui_metadata(&self) -> bool {
        matches!(self, Self::Wpf)
    }
}

/// One named slot in the shader's constant buffer or sampler table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConstantRegister {
    /// Identifier-safe name, unique within the model.
    pub name: String,
    /// Declared type of the slot.
    pub register_type: RegisterType,
    /// Register index, unique within its register space.
    pub register: u8,
    /// Default value decoded from the shader, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConstantRegister {
    pub fn new(name: impl Into<String>, register_type: RegisterType, register: u8) -> Self {
        Self {
            name: name.into(),
            register_type,
            register,
            default_value: None,
            description: None,
        }
    }

    pub fn with_default(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Description of a compiled pixel shader's inputs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShaderModel {
    /// Namespace of the generated class.
    pub generated_namespace: String,
    /// Name of the generated class.
    pub generated_class_name: String,
    /// Description attached to the generated class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub target_framework: TargetFramework,
    /// Registers in declaration order.
    #[serde(default)]
    pub registers: Vec<ConstantRegister>,
}

impl ShaderModel {
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            generated_namespace: namespace.into(),
            generated_class_name: class_name.into(),
            description: None,
            target_framework: TargetFramework::default(),
            registers: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_target_framework(mut self, target_framework: TargetFramework) -> Self {
        self.target_framework = target_framework;
        self
    }

    pub fn with_register(mut self, register: ConstantRegister) -> Self {
        self.registers.push(register);
        self
    }
}
