//! Classification of declarations by structural convention
//!
//! Field kinds are read off identifier text: a leading `#` (optionally
//! after `_`) marks a definition, a leading `_` alone marks a hidden
//! field. The predicates here are pure and side-effect free; the
//! evaluator consults them to decide how a declaration participates in
//! unification.

use crate::syntax::ast::{Decl, Expr, Field, Label, Relation};

/// True if `name` names a definition (`#Foo` or `_#foo`)
pub fn is_definition_name(name: &str) -> bool {
    name.starts_with('#') || name.starts_with("_#")
}

/// True if `name` names a hidden field (`_foo`)
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('_')
}

/// True if `name` names either a definition or a hidden field
pub fn is_definition_or_hidden_name(name: &str) -> bool {
    name.starts_with('#') || name.starts_with('_')
}

/// True if the label names a definition
///
/// A bare identifier or an alias wrapping an identifier is judged by its
/// name; pattern, string and computed labels are never definitions.
pub fn is_definition_label(label: &Label) -> bool {
    match label {
        Label::Ident(id) => is_definition_name(&id.name),
        Label::Alias(a) => match a.expr.as_ref() {
            Expr::Ident(id) => is_definition_name(&id.name),
            _ => false,
        },
        _ => false,
    }
}

/// True if the field is an ordinary exported value field
///
/// Type-constraint relations are never regular. A label with no
/// resolvable identifier (pattern, string, computed) cannot be
/// structurally disqualified and defaults to regular.
pub fn is_regular_field(f: &Field) -> bool {
    if f.relation == Relation::IsA {
        return false;
    }
    match f.label.ident() {
        None => true,
        Some(id) => !id.name.starts_with('#') && !id.name.starts_with('_'),
    }
}

/// True if the declaration is a field with a bulk pattern label,
/// e.g. `[string]: int`
pub fn is_bulk_optional(d: &Decl) -> bool {
    matches!(
        d,
        Decl::Field(Field {
            label: Label::Pattern(_),
            ..
        })
    )
}

/// True if the declaration means "any remaining unconstrained fields".
///
/// Both the shorthand `...` and the long-hand spellings `[string]: _`
/// and `[_]: _` are recognised as equivalent.
pub fn is_rest_sentinel(d: &Decl) -> bool {
    // ...
    if matches!(d, Decl::Ellipsis(_)) {
        return true;
    }

    // [string]: _ or [_]: _
    let f = match d {
        Decl::Field(f) => f,
        _ => return false,
    };
    match &f.value {
        Expr::Ident(v) if v.name == "_" => (),
        _ => return false,
    }
    let l = match &f.label {
        Label::Pattern(l) if l.elts.len() == 1 => l,
        _ => return false,
    };
    match &l.elts[0] {
        Expr::Ident(i) => i.name == "string" || i.name == "_",
        _ => false,
    }
}
