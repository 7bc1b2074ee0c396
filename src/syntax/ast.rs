//! The syntax tree node model
//!
//! A document is one of three interchangeable shapes: a whole [`File`],
//! a [`StructLit`], or a bare [`Expr`]. Declarations and expressions are
//! closed sum types dispatched by exhaustive match; every node carries
//! [`Meta`] (layout class, span, attached comment groups).

use crate::syntax::meta::{HasMeta, Meta, RelPos};
use serde_json::Number;

/// Attachment rank for a comment group rendered above its node
pub const RANK_BEFORE: u8 = 0;

/// Attachment rank for a trailing comment group, rendered at the end of
/// its node's line
pub const RANK_TRAILING: u8 = 10;

/// A single comment line, marker included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
}

/// A group of adjacent comment lines
///
/// `doc` groups document the following node; `line` groups trail their
/// node on the same visual line. `position` is the attachment rank that
/// governs formatting order around the node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentGroup {
    pub meta: Meta,
    pub doc: bool,
    pub line: bool,
    pub position: u8,
    pub list: Vec<Comment>,
}

impl CommentGroup {
    /// The comment text without markers, one line per source comment
    pub fn text(&self) -> String {
        self.list
            .iter()
            .map(|c| c.text.trim_start_matches("//").trim_start())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An identifier
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ident {
    pub meta: Meta,
    pub name: String,
}

/// Literal payloads
#[derive(Debug, Clone, PartialEq)]
pub enum LitValue {
    Str(String),
    Num(Number),
    Bool(bool),
    Null,
}

/// A literal value node
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub meta: Meta,
    pub value: LitValue,
}

/// An attribute declaration, e.g. `@tag(name)`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attribute {
    pub meta: Meta,
    pub text: String,
}

/// A struct literal owning an ordered sequence of declarations
///
/// `lbrace` and `rbrace` are formatting hints for the layout immediately
/// after the opening brace and before the closing brace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructLit {
    pub meta: Meta,
    pub lbrace: RelPos,
    pub rbrace: RelPos,
    pub elts: Vec<Decl>,
}

/// A list literal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListLit {
    pub meta: Meta,
    pub elts: Vec<Expr>,
}

/// A "rest of fields" / "rest of elements" marker, optionally constrained
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ellipsis {
    pub meta: Meta,
    pub ty: Option<Box<Expr>>,
}

/// A declaration splicing an expression's value into the enclosing
/// structure without binding it to a name
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedDecl {
    pub meta: Meta,
    pub expr: Expr,
}

/// An alias binding a name to an expression, e.g. `X=foo`
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub meta: Meta,
    pub name: Ident,
    pub expr: Box<Expr>,
}

/// The package clause naming a file's package
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackageClause {
    pub meta: Meta,
    pub name: Option<Ident>,
}

/// An import declaration grouping one or more import specs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportDecl {
    pub meta: Meta,
    pub specs: Vec<ImportSpec>,
}

/// A single imported package path with an optional local alias
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub meta: Meta,
    pub alias: Option<Ident>,
    pub path: BasicLit,
}

/// The relation between a field's label and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relation {
    /// Ordinary value field (`:`)
    #[default]
    Colon,
    /// Type-constraint relation (`::`)
    IsA,
}

/// A field label
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    /// A bare identifier label
    Ident(Ident),
    /// An alias wrapping the effective label, e.g. `X=foo`
    Alias(Alias),
    /// A quoted string label
    Str(BasicLit),
    /// A bulk pattern label, e.g. `[string]`
    Pattern(ListLit),
    /// A computed label
    Dynamic(Box<Expr>),
}

impl Label {
    /// The effective identifier of the label, unwrapping an alias
    pub fn ident(&self) -> Option<&Ident> {
        match self {
            Label::Ident(id) => Some(id),
            Label::Alias(a) => match a.expr.as_ref() {
                Expr::Ident(id) => Some(id),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A field declaration: label, relation marker and value
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub meta: Meta,
    pub label: Label,
    pub relation: Relation,
    pub value: Expr,
    pub attrs: Vec<Attribute>,
}

/// A top-level or struct-level declaration
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Package(PackageClause),
    Import(ImportDecl),
    Comment(CommentGroup),
    Attribute(Attribute),
    Field(Field),
    Embed(EmbedDecl),
    Ellipsis(Ellipsis),
    Struct(StructLit),
}

impl Decl {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Decl::Package(_) => "package clause",
            Decl::Import(_) => "import declaration",
            Decl::Comment(_) => "comment group",
            Decl::Attribute(_) => "attribute",
            Decl::Field(_) => "field",
            Decl::Embed(_) => "embedding",
            Decl::Ellipsis(_) => "ellipsis",
            Decl::Struct(_) => "struct declaration",
        }
    }
}

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    Lit(BasicLit),
    Struct(StructLit),
    List(ListLit),
    Ellipsis(Ellipsis),
}

impl Expr {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Ident(_) => "identifier",
            Expr::Lit(_) => "literal",
            Expr::Struct(_) => "struct literal",
            Expr::List(_) => "list literal",
            Expr::Ellipsis(_) => "ellipsis",
        }
    }
}

/// A whole file: ordered declarations plus file-level header comments
/// (carried in the file's own metadata, distinct from any declaration)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub meta: Meta,
    pub decls: Vec<Decl>,
}

/// Any node a shape conversion can start from
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File(File),
    Decl(Decl),
    Expr(Expr),
}

impl Node {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::File(_) => "file",
            Node::Decl(d) => d.kind_name(),
            Node::Expr(e) => e.kind_name(),
        }
    }
}

impl From<File> for Node {
    fn from(f: File) -> Self {
        Node::File(f)
    }
}

impl From<Expr> for Node {
    fn from(e: Expr) -> Self {
        Node::Expr(e)
    }
}

impl From<Decl> for Node {
    fn from(d: Decl) -> Self {
        Node::Decl(d)
    }
}

impl From<StructLit> for Node {
    fn from(s: StructLit) -> Self {
        Node::Expr(Expr::Struct(s))
    }
}

// HasMeta for every node struct with a direct `meta` field
macro_rules! impl_has_meta {
    ($($t:ident),* $(,)?) => {
        $(impl HasMeta for $t {
            fn meta(&self) -> &Meta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut Meta {
                &mut self.meta
            }
        })*
    };
}

impl_has_meta!(
    File,
    PackageClause,
    ImportDecl,
    ImportSpec,
    Attribute,
    CommentGroup,
    Ident,
    BasicLit,
    StructLit,
    ListLit,
    Ellipsis,
    EmbedDecl,
    Alias,
    Field,
);

impl HasMeta for Decl {
    fn meta(&self) -> &Meta {
        match self {
            Decl::Package(n) => n.meta(),
            Decl::Import(n) => n.meta(),
            Decl::Comment(n) => n.meta(),
            Decl::Attribute(n) => n.meta(),
            Decl::Field(n) => n.meta(),
            Decl::Embed(n) => n.meta(),
            Decl::Ellipsis(n) => n.meta(),
            Decl::Struct(n) => n.meta(),
        }
    }

    fn meta_mut(&mut self) -> &mut Meta {
        match self {
            Decl::Package(n) => n.meta_mut(),
            Decl::Import(n) => n.meta_mut(),
            Decl::Comment(n) => n.meta_mut(),
            Decl::Attribute(n) => n.meta_mut(),
            Decl::Field(n) => n.meta_mut(),
            Decl::Embed(n) => n.meta_mut(),
            Decl::Ellipsis(n) => n.meta_mut(),
            Decl::Struct(n) => n.meta_mut(),
        }
    }
}

impl HasMeta for Expr {
    fn meta(&self) -> &Meta {
        match self {
            Expr::Ident(n) => n.meta(),
            Expr::Lit(n) => n.meta(),
            Expr::Struct(n) => n.meta(),
            Expr::List(n) => n.meta(),
            Expr::Ellipsis(n) => n.meta(),
        }
    }

    fn meta_mut(&mut self) -> &mut Meta {
        match self {
            Expr::Ident(n) => n.meta_mut(),
            Expr::Lit(n) => n.meta_mut(),
            Expr::Struct(n) => n.meta_mut(),
            Expr::List(n) => n.meta_mut(),
            Expr::Ellipsis(n) => n.meta_mut(),
        }
    }
}

impl HasMeta for Label {
    fn meta(&self) -> &Meta {
        match self {
            Label::Ident(n) => n.meta(),
            Label::Alias(n) => n.meta(),
            Label::Str(n) => n.meta(),
            Label::Pattern(n) => n.meta(),
            Label::Dynamic(e) => e.meta(),
        }
    }

    fn meta_mut(&mut self) -> &mut Meta {
        match self {
            Label::Ident(n) => n.meta_mut(),
            Label::Alias(n) => n.meta_mut(),
            Label::Str(n) => n.meta_mut(),
            Label::Pattern(n) => n.meta_mut(),
            Label::Dynamic(e) => e.meta_mut(),
        }
    }
}

impl HasMeta for Node {
    fn meta(&self) -> &Meta {
        match self {
            Node::File(n) => n.meta(),
            Node::Decl(n) => n.meta(),
            Node::Expr(n) => n.meta(),
        }
    }

    fn meta_mut(&mut self) -> &mut Meta {
        match self {
            Node::File(n) => n.meta_mut(),
            Node::Decl(n) => n.meta_mut(),
            Node::Expr(n) => n.meta_mut(),
        }
    }
}
