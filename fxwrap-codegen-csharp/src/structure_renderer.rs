//! C# rendering of the class structure.
//!
//! # C# Mapping
//!
//! - `CodeUnit` → banner, `using` directives, one `namespace` block
//! - `ClassSpec` → `public class Name : Base`
//! - `FieldSpec` → `public [static] Type Name = init;`
//! - `PropertySpec` → `public Type Name` with `get` and `set` blocks
//! - `ConstructorSpec` → `public Name(params)`

use fxwrap_codegen::{
    Indent,
    builder::{
        ClassSpec, CodeBuilder, CodeUnit, ConstructorSpec, FieldSpec, Member, PropertySpec,
        Statement,
    },
};

use crate::renderer::CSharpRenderer;

const BANNER: &[&str] = &[
    "//------------------------------------------------------------------------------",
    "// <auto-generated>",
    "//     This code was generated by fxwrap.",
    "//",
    "//     Changes to this file may cause incorrect behavior and will be lost if",
    "//     the code is regenerated.",
    "// </auto-generated>",
    "//------------------------------------------------------------------------------",
];

/// Plain comment marker. Summaries are promoted to `///` afterwards.
const COMMENT: &str = "// ";

/// Serializes a [`CodeUnit`] to C#.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpStructureRenderer {
    renderer: CSharpRenderer,
}

impl CSharpStructureRenderer {
    pub fn new() -> Self {
        Self {
            renderer: CSharpRenderer::new(),
        }
    }

    pub fn render_unit(&self, unit: &CodeUnit, indent: Indent) -> String {
        let mut b = CodeBuilder::new(indent);

        for line in BANNER {
            b.push_line(line);
        }
        b.push_blank();
        for import in &unit.imports {
            b.push_line(&format!("using {import};"));
        }
        b.push_blank();

        b.push_line(&format!("namespace {}", unit.namespace.name));
        b.push_block("{", "}", |b| self.write_class(b, unit.class()));

        b.build()
    }

    fn write_class(&self, b: &mut CodeBuilder, class: &ClassSpec) {
        if let Some(comment) = &class.comment {
            b.push_comment(COMMENT, comment);
        }
        let header = match &class.base {
            Some(base) => format!(
                "public class {} : {}",
                class.name,
                self.renderer.render_type(base)
            ),
            None => format!("public class {}", class.name),
        };
        b.push_line(&header);
        b.push_block("{", "}", |b| {
            for member in &class.members {
                match member {
                    Member::Constructor(ctor) => self.write_constructor(b, &class.name, ctor),
                    Member::Field(field) => self.write_field(b, field),
                    Member::Property(property) => self.write_property(b, property),
                }
            }
        });
    }

    fn write_constructor(&self, b: &mut CodeBuilder, class_name: &str, ctor: &ConstructorSpec) {
        let params = ctor
            .params
            .iter()
            .map(|p| format!("{} {}", self.renderer.render_type(&p.ty), p.name))
            .collect::<Vec<_>>()
            .join(", ");
        b.push_line(&format!("public {class_name}({params})"));
        b.push_block("{", "}", |b| self.write_body(b, &ctor.body));
    }

    fn write_field(&self, b: &mut CodeBuilder, field: &FieldSpec) {
        let modifiers = if field.is_static { "public static" } else { "public" };
        let ty = self.renderer.render_type(&field.ty);
        let line = match &field.init {
            Some(init) => format!(
                "{modifiers} {ty} {} = {};",
                field.name,
                self.renderer.render_expr(init)
            ),
            None => format!("{modifiers} {ty} {};", field.name),
        };
        b.push_line(&line);
    }

    fn write_property(&self, b: &mut CodeBuilder, property: &PropertySpec) {
        if let Some(comment) = &property.comment {
            b.push_comment(COMMENT, comment);
        }
        b.push_line(&format!(
            "public {} {}",
            self.renderer.render_type(&property.ty),
            property.name
        ));
        b.push_block("{", "}", |b| {
            for (accessor, body) in [("get", &property.getter), ("set", &property.setter)] {
                if !body.is_empty() {
                    b.push_line(accessor);
                    b.push_block("{", "}", |b| self.write_body(b, body));
                }
            }
        });
    }

    fn write_body(&self, b: &mut CodeBuilder, body: &[Statement]) {
        for statement in body {
            self.renderer.write_statement(b, statement);
        }
    }
}
