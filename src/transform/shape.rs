//! Conversion between the three top-level shapes of a document
//!
//! A document fragment is interchangeably a [`File`], a [`StructLit`] or
//! a bare [`Expr`]. The conversions move declaration sequences between
//! owners rather than copying them; a donor node is consumed by value
//! and cannot be read through afterwards.
//!
//! Callers passing a node outside a conversion's documented domain have
//! broken the contract: that is a panic, not a recoverable error.

use crate::syntax::ast::{Decl, Ellipsis, EmbedDecl, Expr, File, ListLit, Node, StructLit};
use crate::syntax::make;
use crate::syntax::meta::{HasMeta, Meta, RelPos};

/// Convert a node to an expression.
///
/// An expression passes through unchanged; a file loses its preamble and
/// becomes a struct literal of its body declarations, except that a body
/// of exactly one embedding yields the embedded expression directly (no
/// spurious one-element struct wrapper). The preamble scan advances past
/// package and import declarations within the leading run only,
/// tolerating interleaved comments and attributes, and stops at the
/// first declaration of any other kind.
pub fn to_expr(node: Option<Node>) -> Option<Expr> {
    match node? {
        Node::Expr(e) => Some(e),

        Node::File(f) => {
            let mut start = 0;
            for (i, d) in f.decls.iter().enumerate() {
                match d {
                    Decl::Package(_) | Decl::Import(_) => start = i + 1,
                    Decl::Comment(_) | Decl::Attribute(_) => (),
                    _ => break,
                }
            }
            let mut decls = f.decls;
            let mut body = decls.split_off(start);
            if body.len() == 1 && matches!(body[0], Decl::Embed(_)) {
                if let Some(Decl::Embed(e)) = body.pop() {
                    return Some(e.expr);
                }
            }
            Some(Expr::Struct(StructLit {
                elts: body,
                ..StructLit::default()
            }))
        }

        other => panic!("unsupported node kind: {}", other.kind_name()),
    }
}

/// Convert a node to a file.
///
/// A struct literal surrenders its element sequence to the new file; any
/// other expression is forced to a no-space leading position and wrapped
/// in a single embedding; a file passes through unchanged.
pub fn to_file(node: Option<Node>) -> Option<File> {
    match node? {
        Node::File(f) => Some(f),

        Node::Expr(Expr::Struct(s)) => Some(File {
            meta: Meta::default(),
            decls: s.elts,
        }),

        Node::Expr(mut e) => {
            e.set_rel_pos(RelPos::NoSpace);
            Some(File {
                meta: Meta::default(),
                decls: vec![Decl::Embed(make::embed(e))],
            })
        }

        other => panic!("unsupported node kind: {}", other.kind_name()),
    }
}

/// Move a file's non-preamble declarations into a struct literal.
///
/// Unlike [`to_expr`]'s leading-run scan, the cutoff here advances past
/// package and import declarations wherever they occur in the sequence;
/// downstream callers depend on each variant, so the two scans are kept
/// distinct.
pub fn to_struct(f: File) -> StructLit {
    let mut cutoff = 0;
    for (i, d) in f.decls.iter().enumerate() {
        if matches!(d, Decl::Package(_) | Decl::Import(_)) {
            cutoff = i + 1;
        }
    }
    let mut decls = f.decls;
    let elts = decls.split_off(cutoff);
    StructLit {
        elts,
        ..StructLit::default()
    }
}

/// Wrap a struct literal in an embedding declaration.
///
/// A single-element struct renders transparently: the element's position
/// and comments are hoisted onto the embedding, the element itself is
/// forced to a no-space position (its label too, for a field) and left
/// without comments of its own. The struct's brace hints are set to
/// break the line after the opening brace and suppress a blank line
/// before the closing one.
pub fn embed_struct(mut s: StructLit) -> EmbedDecl {
    let mut meta = Meta::default();
    if s.elts.len() == 1 {
        let d = &mut s.elts[0];
        meta.pos = d.pos();
        meta.comments = std::mem::take(&mut d.meta_mut().comments);
        d.set_rel_pos(RelPos::NoSpace);
        if let Decl::Field(f) = d {
            f.label.set_rel_pos(RelPos::NoSpace);
        }
    }
    s.lbrace = RelPos::Newline;
    s.rbrace = RelPos::NoSpace;
    EmbedDecl {
        meta,
        expr: Expr::Struct(s),
    }
}

/// Split a trailing ellipsis off a list literal's elements.
pub fn list_ellipsis(l: &ListLit) -> (&[Expr], Option<&Ellipsis>) {
    match l.elts.split_last() {
        Some((Expr::Ellipsis(e), front)) => (front, Some(e)),
        _ => (&l.elts, None),
    }
}
