//! Visual Basic rendering of the class structure.

use fxwrap_codegen::{
    Indent,
    builder::{
        ClassSpec, CodeBuilder, CodeUnit, ConstructorSpec, FieldSpec, Member, PropertySpec,
        Statement,
    },
};

use crate::renderer::VisualBasicRenderer;

const BANNER: &[&str] = &[
    "'------------------------------------------------------------------------------",
    "' <auto-generated>",
    "'     This code was generated by fxwrap.",
    "'",
    "'     Changes to this file may cause incorrect behavior and will be lost if",
    "'     the code is regenerated.",
    "' </auto-generated>",
    "'------------------------------------------------------------------------------",
];

const OPTIONS: &[&str] = &["Option Strict Off", "Option Explicit On"];

/// Serializes a [`CodeUnit`] to Visual Basic.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualBasicStructureRenderer {
    renderer: VisualBasicRenderer,
}

impl VisualBasicStructureRenderer {
    pub fn new() -> Self {
        Self {
            renderer: VisualBasicRenderer::new(),
        }
    }

    pub fn render_unit(&self, unit: &CodeUnit, indent: Indent) -> String {
        let mut b = CodeBuilder::new(indent);

        for line in BANNER {
            b.push_line(line);
        }
        b.push_blank();
        for option in OPTIONS {
            b.push_line(option);
        }
        b.push_blank();
        for import in &unit.imports {
            b.push_line(&format!("Imports {import}"));
        }
        b.push_blank();

        b.push_block(
            &format!("Namespace {}", unit.namespace.name),
            "End Namespace",
            |b| self.write_class(b, unit.class()),
        );

        b.build()
    }

    fn write_class(&self, b: &mut CodeBuilder, class: &ClassSpec) {
        if let Some(comment) = &class.comment {
            b.push_comment("'", comment);
        }
        b.push_block(&format!("Public Class {}", class.name), "End Class", |b| {
            if let Some(base) = &class.base {
                b.push_line(&format!("Inherits {}", self.renderer.render_type(base)));
            }
            for member in &class.members {
                match member {
                    Member::Constructor(ctor) => self.write_constructor(b, ctor),
                    Member::Field(field) => self.write_field(b, field),
                    Member::Property(property) => self.write_property(b, property),
                }
            }
        });
    }

    fn write_constructor(&self, b: &mut CodeBuilder, ctor: &ConstructorSpec) {
        let params = ctor
            .params
            .iter()
            .map(|p| format!("ByVal {} As {}", p.name, self.renderer.render_type(&p.ty)))
            .collect::<Vec<_>>()
            .join(", ");
        b.push_block(&format!("Public Sub New({params})"), "End Sub", |b| {
            self.write_body(b, &ctor.body)
        });
    }

    fn write_field(&self, b: &mut CodeBuilder, field: &FieldSpec) {
        let modifiers = if field.is_static { "Public Shared" } else { "Public" };
        let mut line = format!(
            "{modifiers} {} As {}",
            field.name,
            self.renderer.render_type(&field.ty)
        );
        if let Some(init) = &field.init {
            line.push_str(" = ");
            line.push_str(&self.renderer.render_expr(init));
        }
        b.push_line(&line);
    }

    fn write_property(&self, b: &mut CodeBuilder, property: &PropertySpec) {
        if let Some(comment) = &property.comment {
            b.push_comment("'", comment);
        }
        let ty = self.renderer.render_type(&property.ty);
        let modifier = match (property.getter.is_empty(), property.setter.is_empty()) {
            (false, true) => "ReadOnly ",
            (true, false) => "WriteOnly ",
            _ => "",
        };
        let header = format!("Public {modifier}Property {}() As {ty}", property.name);
        b.push_block(&header, "End Property", |b| {
            if !property.getter.is_empty() {
                b.push_block("Get", "End Get", |b| self.write_body(b, &property.getter));
            }
            if !property.setter.is_empty() {
                b.push_block(&format!("Set(ByVal value As {ty})"), "End Set", |b| {
                    self.write_body(b, &property.setter)
                });
            }
        });
    }

    fn write_body(&self, b: &mut CodeBuilder, body: &[Statement]) {
        for statement in body {
            self.renderer.write_statement(b, statement);
        }
    }
}
