//! The output-language backend contract.

use fxwrap_core::Indent;
use tracing::debug;

use super::NamingConvention;
use crate::{
    Error, Result,
    builder::{CodeUnit, Member, Statement},
};

/// Trait for output-language backends.
///
/// Implement this trait to render the generated class in a new language.
/// Serialization itself is infallible; the provided [`render`](Self::render)
/// rejects identifiers the language reserves before serializing, then runs
/// the backend's textual fixups.
pub trait Backend {
    /// Human-readable language name (e.g., "C#").
    fn language(&self) -> &'static str;

    /// File extension for generated sources, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Reserved words of the language.
    fn naming(&self) -> &NamingConvention;

    /// Serialize the unit to text.
    fn serialize(&self, unit: &CodeUnit, indent: Indent) -> String;

    /// Apply fixups the tree model cannot express. Must be idempotent.
    fn post_process(&self, text: String) -> String;

    /// Check identifiers, serialize and post-process.
    fn render(&self, unit: &CodeUnit, indent: Indent) -> Result<String> {
        check_identifiers(unit, self.naming(), self.language())?;
        let text = self.post_process(self.serialize(unit, indent));
        debug!(
            language = self.language(),
            class = %unit.class().name,
            bytes = text.len(),
            "rendered effect class"
        );
        Ok(text)
    }
}

/// Reject any declared identifier that is a reserved word of the language.
///
/// No renaming is attempted; the first collision is reported.
pub fn check_identifiers(
    unit: &CodeUnit,
    naming: &NamingConvention,
    language: &'static str,
) -> Result<()> {
    let check = |name: &str, context: &'static str| {
        if naming.is_reserved(name) {
            Err(Error::ReservedKeyword {
                name: name.to_string(),
                context,
                language,
            })
        } else {
            Ok(())
        }
    };

    for segment in unit.namespace.name.split('.') {
        check(segment, "namespace")?;
    }

    let class = unit.class();
    check(&class.name, "class")?;

    for member in &class.members {
        match member {
            Member::Constructor(ctor) => {
                for param in &ctor.params {
                    check(&param.name, "parameter")?;
                }
                for statement in &ctor.body {
                    if let Statement::Local { name, .. } = statement {
                        check(name, "local")?;
                    }
                }
            }
            Member::Field(field) => check(&field.name, "field")?,
            Member::Property(property) => check(&property.name, "property")?,
        }
    }
    Ok(())
}
