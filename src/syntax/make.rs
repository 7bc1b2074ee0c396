//! Helpers for constructing synthetic syntax nodes
//!
//! Used for trees generated by code other than the parser: installed
//! package clauses, generated attributes and synthesised documentation.

use crate::syntax::ast::{
    Attribute, BasicLit, Comment, CommentGroup, EmbedDecl, Expr, Field, Ident, ImportSpec, Label,
    LitValue, PackageClause, Relation, RANK_TRAILING,
};
use crate::syntax::meta::Meta;

/// Column budget for a re-wrapped comment line, marker included
const MAX_UNITS_PER_LINE: usize = 66;

/// Construct an identifier
pub fn ident<T: Into<String>>(name: T) -> Ident {
    Ident {
        meta: Meta::default(),
        name: name.into(),
    }
}

/// Construct a string literal
pub fn str_lit<T: Into<String>>(value: T) -> BasicLit {
    BasicLit {
        meta: Meta::default(),
        value: LitValue::Str(value.into()),
    }
}

/// Construct an ordinary value field
pub fn field(label: Label, value: Expr) -> Field {
    Field {
        meta: Meta::default(),
        label,
        relation: Relation::Colon,
        value,
        attrs: vec![],
    }
}

/// Construct an embedding declaration
pub fn embed(expr: Expr) -> EmbedDecl {
    EmbedDecl {
        meta: Meta::default(),
        expr,
    }
}

/// Construct a package clause for the given name
pub fn package<T: Into<String>>(name: T) -> PackageClause {
    PackageClause {
        meta: Meta::default(),
        name: Some(ident(name)),
    }
}

/// Construct an import spec for the given package path
pub fn import_spec<T: Into<String>>(path: T) -> ImportSpec {
    ImportSpec {
        meta: Meta::default(),
        alias: None,
        path: str_lit(path),
    }
}

/// Construct an attribute `@name(body)`
pub fn attribute<T: AsRef<str>>(name: T, body: T) -> Attribute {
    Attribute {
        meta: Meta::default(),
        text: format!("@{}({})", name.as_ref(), body.as_ref()),
    }
}

/// Construct a comment group from free text.
///
/// Each line of `text` is independently re-wrapped into `//`-prefixed
/// comment lines at most [`MAX_UNITS_PER_LINE`] columns wide, counted in
/// chars. A single word never splits across lines, so an over-long word
/// produces an over-budget line rather than a truncated word. Empty text
/// yields no group at all; a trailing marker-only line is dropped.
///
/// `is_doc` tags the group as documentation; otherwise it is a trailing
/// line comment ranked to render at the end of its node's line.
pub fn comment(is_doc: bool, text: &str) -> Option<CommentGroup> {
    if text.is_empty() {
        return None;
    }

    let mut group = CommentGroup {
        doc: is_doc,
        ..CommentGroup::default()
    };
    if !is_doc {
        group.line = true;
        group.position = RANK_TRAILING;
    }

    for line in text.lines() {
        let mut count = 2;
        let mut buf = String::from("//");
        for word in line.split_whitespace() {
            let n = word.chars().count() + 1;
            if count + n > MAX_UNITS_PER_LINE && count > 3 {
                group.list.push(Comment { text: buf });
                count = 3;
                buf = String::from("//");
            }
            buf.push(' ');
            buf.push_str(word);
            count += n;
        }
        group.list.push(Comment { text: buf });
    }

    if group.list.last().map(|c| c.text.as_str()) == Some("//") {
        group.list.pop();
    }

    Some(group)
}
