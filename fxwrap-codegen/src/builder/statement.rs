//! Statements for constructor and accessor bodies.

use super::{expr::Expr, types::TypeRef};

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Typed local declaration with an initializer.
    Local { ty: TypeRef, name: String, init: Expr },
    Assign { target: Expr, value: Expr },
    /// Expression evaluated for its side effects.
    Expr(Expr),
    Return(Expr),
    /// An empty line separating groups of statements.
    Blank,
}

impl Statement {
    pub fn local(ty: TypeRef, name: impl Into<String>, init: Expr) -> Self {
        Self::Local {
            ty,
            name: name.into(),
            init,
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }
}
