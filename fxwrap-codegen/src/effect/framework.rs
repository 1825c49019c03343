//! Names from the host framework's effect and property system.
//!
//! The generated class compiles against these; nothing here is looked up
//! at generation time.

use fxwrap_model::{RegisterType, TargetFramework};

use crate::builder::TypeRef;

/// Namespaces imported by every generated wrapper.
pub const IMPORTS: &[&str] = &[
    "System",
    "System.Windows",
    "System.Windows.Media",
    "System.Windows.Media.Effects",
    "System.Windows.Media.Media3D",
];

pub const EFFECT_BASE: &str = "ShaderEffect";
pub const DESCRIPTOR_TYPE: &str = "DependencyProperty";
pub const DESCRIPTOR_SUFFIX: &str = "Property";

pub const REGISTER_SAMPLER: &str = "RegisterPixelShaderSamplerProperty";
pub const REGISTER: &str = "Register";
pub const CONSTANT_CALLBACK: &str = "PixelShaderConstantCallback";
pub const UPDATE_SHADER_VALUE: &str = "UpdateShaderValue";
pub const GET_VALUE: &str = "GetValue";
pub const SET_VALUE: &str = "SetValue";

/// Type of the compiled shader handle, and the base-class slot holding it.
pub const SHADER_PROGRAM: &str = "PixelShader";
pub const URI_SOURCE: &str = "UriSource";
pub const URI: &str = "Uri";
pub const URI_KIND: &str = "UriKind";
pub const URI_KIND_RELATIVE: &str = "Relative";
pub const SHADER_EXTENSION: &str = "ps";

/// Parameter of the external-instance constructor.
pub const SHADER_PARAM: &str = "shader";
/// Local of the self-loading constructor.
pub const SHADER_LOCAL: &str = "pixelShader";
/// Implicit setter parameter.
pub const SETTER_VALUE: &str = "value";

/// The primary sampler input every effect exposes.
pub const INPUT: &str = "Input";
pub const INPUT_REGISTER: u8 = 0;

/// Property metadata type available on the target framework.
pub fn metadata_type(target: TargetFramework) -> &'static str {
    if target.has_ui_metadata() {
        "UIPropertyMetadata"
    } else {
        "PropertyMetadata"
    }
}

/// Type the accessor property of a register is declared as.
///
/// Numeric registers use the language keyword; everything else is named
/// after its framework type.
pub fn property_type(ty: RegisterType) -> TypeRef {
    match ty.scalar_kind() {
        Some(kind) => TypeRef::from(kind),
        None => TypeRef::named(ty.clr_name()),
    }
}

/// Name of the binding-descriptor field for a property.
pub fn descriptor_name(property: &str) -> String {
    format!("{}{}", property, DESCRIPTOR_SUFFIX)
}

/// Relative pack URI of the compiled shader resource.
pub fn resource_uri(namespace: &str, class_name: &str) -> String {
    format!("/{namespace};component/{class_name}.{SHADER_EXTENSION}")
}

/// Wrap a description as an XML documentation summary.
///
/// Line breaks are folded so the summary stays on one comment line, and
/// markup characters are escaped.
pub fn summary(description: &str) -> String {
    let text = description.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("<summary>{}</summary>", escape_xml(&text))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
