//! Unified language dispatch.

use fxwrap_codegen::language::Backend;
use fxwrap_codegen_csharp::CSharpBackend;
use fxwrap_codegen_vb::VisualBasicBackend;
use fxwrap_core::OutputLanguage;

/// Create the backend rendering `language`.
pub fn backend(language: OutputLanguage) -> Box<dyn Backend> {
    match language {
        OutputLanguage::CSharp => Box::new(CSharpBackend::new()),
        OutputLanguage::VisualBasic => Box::new(VisualBasicBackend::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_matches_language() {
        for language in [OutputLanguage::CSharp, OutputLanguage::VisualBasic] {
            assert_eq!(backend(language).file_extension(), language.file_extension());
        }
        assert_eq!(backend(OutputLanguage::CSharp).language(), "C#");
        assert_eq!(backend(OutputLanguage::VisualBasic).language(), "Visual Basic");
    }
}
