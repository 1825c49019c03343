use fxwrap_codegen::{
    Indent,
    builder::CodeUnit,
    language::{Backend, NamingConvention},
};

use crate::{naming::CSHARP_NAMING, post_process, structure_renderer::CSharpStructureRenderer};

/// C# output backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpBackend {
    structure: CSharpStructureRenderer,
}

impl CSharpBackend {
    pub fn new() -> Self {
        Self {
            structure: CSharpStructureRenderer::new(),
        }
    }
}

impl Backend for CSharpBackend {
    fn language(&self) -> &'static str {
        "C#"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn naming(&self) -> &NamingConvention {
        &CSHARP_NAMING
    }

    fn serialize(&self, unit: &CodeUnit, indent: Indent) -> String {
        self.structure.render_unit(unit, indent)
    }

    fn post_process(&self, text: String) -> String {
        post_process::post_process(text)
    }
}
