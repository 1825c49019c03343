//! The generation pipeline.

use eyre::{Result, WrapErr};
use fxwrap_codegen::{
    Indent,
    effect::{ConstructorKind, assemble},
};
use fxwrap_core::{OutputLanguage, Settings};
use fxwrap_model::ShaderModel;
use tracing::debug;

use crate::language::backend;

/// Generate the wrapper class source for `model`.
///
/// Pure: the same inputs always produce the same text. The model is trusted
/// as-is; run [`ShaderModel::validate`] upstream to reject malformed input.
///
/// # Errors
///
/// Fails when a namespace segment, the class name or a register name is a
/// reserved word of `language`.
pub fn generate(
    model: &ShaderModel,
    include_external_constructor: bool,
    language: OutputLanguage,
    indent: Indent,
) -> Result<String> {
    let kind = ConstructorKind::from_flag(include_external_constructor);
    debug!(
        class = %model.generated_class_name,
        %language,
        ?kind,
        "generating effect class"
    );

    let unit = assemble(model, kind);
    let backend = backend(language);
    backend.render(&unit, indent).wrap_err_with(|| {
        format!(
            "Failed to generate {} class {}.{}",
            backend.language(),
            model.generated_namespace,
            model.generated_class_name
        )
    })
}

/// Settings-driven generator.
///
/// ```ignore
/// use fxwrap::{Generator, Settings};
///
/// let generator = Generator::new(Settings::from_file("fxwrap.toml")?);
/// let source = generator.generate(&model)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    settings: Settings,
}

impl Generator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Output language of this generator.
    pub fn language(&self) -> OutputLanguage {
        self.settings.language
    }

    /// File name the generated class is conventionally saved under.
    pub fn file_name(&self, model: &ShaderModel) -> String {
        format!(
            "{}.{}",
            model.generated_class_name,
            self.settings.language.file_extension()
        )
    }

    pub fn generate(&self, model: &ShaderModel) -> Result<String> {
        generate(
            model,
            self.settings.include_external_constructor,
            self.settings.language,
            self.settings.indent(),
        )
    }
}
