//! Visual Basic rendering of syntax tree expressions and statements.

use fxwrap_codegen::builder::{CodeBuilder, Expr, Literal, PrimitiveType, Statement, TypeRef};

/// Visual Basic expression renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualBasicRenderer;

impl VisualBasicRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(primitive) => primitive_keyword(*primitive).to_string(),
            TypeRef::Named(name) => name.clone(),
        }
    }

    /// Render a literal with its type character or suffix.
    pub fn render_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Float(v) if v.is_finite() => {
                format!("{}!", literal.real_digits().unwrap_or_default())
            }
            Literal::Float(v) => non_finite("Single", v.is_nan(), v.is_sign_positive()),
            Literal::Double(v) if v.is_finite() => {
                format!("{}R", literal.real_digits().unwrap_or_default())
            }
            Literal::Double(v) => non_finite("Double", v.is_nan(), v.is_sign_positive()),
            Literal::Int(v) => v.to_string(),
            Literal::UInt(v) => format!("{v}UI"),
            Literal::String(v) => quote(v),
        }
    }

    pub fn render_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => self.render_literal(literal),
            Expr::Cast { ty, expr } => {
                format!("CType({}, {})", self.render_expr(expr), self.render_type(ty))
            }
            Expr::DefaultOf(ty) => format!("CType(Nothing, {})", self.render_type(ty)),
            Expr::New { ty, args } => {
                format!("New {}({})", self.render_type(ty), self.render_args(args))
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
            Expr::TypeOf(ty) => format!("GetType({})", self.render_type(ty)),
            Expr::This => "Me".to_string(),
            Expr::Var(name) => name.clone(),
            Expr::Member { target, name } => format!("{}.{}", self.render_expr(target), name),
            Expr::EnumMember { ty, member } => format!("{}.{}", self.render_type(ty), member),
        }
    }

    /// Write one statement at the builder's current indentation.
    pub fn write_statement(&self, builder: &mut CodeBuilder, statement: &Statement) {
        let line = match statement {
            Statement::Local { ty, name, init } => format!(
                "Dim {} As {} = {}",
                name,
                self.render_type(ty),
                self.render_expr(init)
            ),
            Statement::Assign { target, value } => format!(
                "{} = {}",
                self.render_expr(target),
                self.render_expr(value)
            ),
            Statement::Expr(expr) => self.render_expr(expr),
            Statement::Return(expr) => format!("Return {}", self.render_expr(expr)),
            Statement::Blank => {
                builder.push_blank();
                return;
            }
        };
        builder.push_line(&line);
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
        PrimitiveType::Float => "Single",
        PrimitiveType::Double => "Double",
        PrimitiveType::Int => "Integer",
        PrimitiveType::UInt => "UInteger",
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

/// Quote a string literal. Quotes are doubled; control characters have no
/// escape form and are spliced in with `ChrW`.
fn quote(value: &str) -> String {
    let mut out = String::from("\"");
    for c in value.chars() {
        match c {
            '"' => out.push_str("\"\""),
            c if c.is_control() => out.push_str(&format!("\" & ChrW({}) & \"", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
