//! Declarations: the compilation unit, its namespace and class, and members.
//!
//! All members are public. The unit always holds exactly one namespace with
//! exactly one class, which is the only shape the generator emits.

use super::{
    expr::Expr,
    statement::{Param, Statement},
    types::TypeRef,
};

/// A public field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeRef,
    pub is_static: bool,
    pub init: Option<Expr>,
}

impl FieldSpec {
    /// Create a new public instance field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
            init: None,
        }
    }

    /// Make this field static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the initializer expression.
    pub fn init(mut self, init: Expr) -> Self {
        self.init = Some(init);
        self
    }
}

/// A public, non-virtual property with a getter and a setter.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    pub name: String,
    pub ty: TypeRef,
    /// Comment text attached above the declaration.
    pub comment: Option<String>,
    pub getter: Vec<Statement>,
    pub setter: Vec<Statement>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            comment: None,
            getter: Vec::new(),
            setter: Vec::new(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn getter(mut self, statement: Statement) -> Self {
        self.getter.push(statement);
        self
    }

    pub fn setter(mut self, statement: Statement) -> Self {
        self.setter.push(statement);
        self
    }
}

/// A public instance constructor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstructorSpec {
    pub params: Vec<Param>,
    pub body: Vec<Statement>,
}

impl ConstructorSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn statements(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(statements);
        self
    }
}

/// A class member, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Constructor(ConstructorSpec),
    Field(FieldSpec),
    Property(PropertySpec),
}

/// A public class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    pub name: String,
    pub base: Option<TypeRef>,
    /// Comment text attached above the declaration.
    pub comment: Option<String>,
    pub members: Vec<Member>,
}

impl ClassSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            comment: None,
            members: Vec::new(),
        }
    }

    pub fn base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Iterate over field members.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Iterate over property members.
    pub fn properties(&self) -> impl Iterator<Item = &PropertySpec> {
        self.members.iter().filter_map(|m| match m {
            Member::Property(property) => Some(property),
            _ => None,
        })
    }

    /// Returns the first constructor, if any.
    pub fn constructor(&self) -> Option<&ConstructorSpec> {
        self.members.iter().find_map(|m| match m {
            Member::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }
}

/// A named namespace holding the generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceSpec {
    pub name: String,
    pub class: ClassSpec,
}

/// A compilation unit: global imports plus one namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeUnit {
    pub imports: Vec<String>,
    pub namespace: NamespaceSpec,
}

impl CodeUnit {
    pub fn new(imports: Vec<String>, namespace: NamespaceSpec) -> Self {
        Self { imports, namespace }
    }

    /// The generated class.
    pub fn class(&self) -> &ClassSpec {
        &self.namespace.class
    }
}
