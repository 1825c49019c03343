//! C# rendering of syntax tree expressions and statements.

use fxwrap_codegen::builder::{CodeBuilder, Expr, Literal, PrimitiveType, Statement, TypeRef};

/// C# expression renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer;

impl CSharpRenderer {
    /// Create a new C# renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render a type reference.
    pub fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(primitive) => primitive_keyword(*primitive).to_string(),
            TypeRef::Named(name) => name.clone(),
        }
    }

    /// Render a literal with the suffix that pins its numeric type.
    pub fn render_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Float(v) if v.is_finite() => {
                format!("{}F", literal.real_digits().unwrap_or_default())
            }
            Literal::Float(v) => non_finite("float", v.is_nan(), v.is_sign_positive()),
            Literal::Double(v) if v.is_finite() => {
                format!("{}D", literal.real_digits().unwrap_or_default())
            }
            Literal::Double(v) => non_finite("double", v.is_nan(), v.is_sign_positive()),
            Literal::Int(v) => v.to_string(),
            Literal::UInt(v) => format!("{v}U"),
            Literal::String(v) => quote(v),
        }
    }

    /// Render an expression.
    pub fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => self.render_literal(literal),
            Expr::Cast { ty, expr } => {
                format!("(({})({}))", self.render_type(ty), self.render_expr(expr))
            }
            Expr::DefaultOf(ty) => format!("default({})", self.render_type(ty)),
            Expr::New { ty, args } => {
                format!("new {}({})", self.render_type(ty), self.render_args(args))
            }
            Expr::StaticCall { ty, method, args } => format!(
                "{}.{}({})",
                self.render_type(ty),
                method,
                self.render_args(args)
            ),
            Expr::Call {
                target: Some(target),
                method,
                args,
            } => format!(
                "{}.{}({})",
                self.render_expr(target),
                method,
                self.render_args(args)
            ),
            Expr::Call {
                target: None,
                method,
                args,
            } => format!("{}({})", method, self.render_args(args)),
            Expr::TypeOf(ty) => format!("typeof({})", self.render_type(ty)),
            Expr::This => "this".to_string(),
            Expr::Var(name) => name.clone(),
            Expr::Member { target, name } => format!("{}.{}", self.render_expr(target), name),
            Expr::EnumMember { ty, member } => format!("{}.{}", self.render_type(ty), member),
        }
    }

    /// Write one statement at the builder's current indentation.
    pub fn write_statement(&self, builder: &mut CodeBuilder, statement: &Statement) {
        match statement {
            Statement::Local { ty, name, init } => {
                builder.push_line(&format!(
                    "{} {} = {};",
                    self.render_type(ty),
                    name,
                    self.render_expr(init)
                ));
            }
            Statement::Assign { target, value } => {
                builder.push_line(&format!(
                    "{} = {};",
                    self.render_expr(target),
                    self.render_expr(value)
                ));
            }
            Statement::Expr(expr) => {
                builder.push_line(&format!("{};", self.render_expr(expr)));
            }
            Statement::Return(expr) => {
                builder.push_line(&format!("return {};", self.render_expr(expr)));
            }
            Statement::Blank => {
                builder.push_blank();
            }
        }
    }

    fn render_args(&self, args: &[Expr]) -> String {
        args.iter()
            .map(|arg| self.render_expr(arg))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn primitive_keyword(ty: PrimitiveType) -> &'static str {
    match ty {
        PrimitiveType::Float => "float",
        PrimitiveType::Double => "double",
        PrimitiveType::Int => "int",
        PrimitiveType::UInt => "uint",
    }
}

fn non_finite(keyword: &str, nan: bool, positive: bool) -> String {
    let member = match (nan, positive) {
        (true, _) => "NaN",
        (false, true) => "PositiveInfinity",
        (false, false) => "NegativeInfinity",
    };
    format!("{keyword}.{member}")
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
