use fxwrap_codegen::{
    Indent,
    builder::CodeUnit,
    language::{Backend, NamingConvention},
};

use crate::{naming::VB_NAMING, post_process, structure_renderer::VisualBasicStructureRenderer};

/// Visual Basic output backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualBasicBackend {
    structure: VisualBasicStructureRenderer,
}

impl VisualBasicBackend {
    pub fn new() -> Self {
        Self {
            structure: VisualBasicStructureRenderer::new(),
        }
    }
}

impl Backend for VisualBasicBackend {
    fn language(&self) -> &'static str {
        "Visual Basic"
    }

    fn file_extension(&self) -> &'static str {
        "vb"
    }

    fn naming(&self) -> &NamingConvention {
        &VB_NAMING
    }

    fn serialize(&self, unit: &CodeUnit, indent: Indent) -> String {
        self.structure.render_unit(unit, indent)
    }

    fn post_process(&self, text: String) -> String {
        post_process::post_process(text)
    }
}
