//! Locating and installing the package clause and file header comment
//!
//! The scans here tolerate a leading run of comments and attributes but
//! stop at the first declaration of substance, so a clause buried below
//! content is never reported.

use crate::syntax::ast::{CommentGroup, Decl, File, PackageClause, RANK_BEFORE};
use crate::syntax::make;
use crate::syntax::meta::{copy_meta, HasMeta, Pos};

/// Index of the package clause, scanning past leading comments and
/// attributes only
fn clause_index(f: &File) -> Option<usize> {
    for (i, d) in f.decls.iter().enumerate() {
        match d {
            Decl::Comment(_) | Decl::Attribute(_) => continue,
            Decl::Package(_) => return Some(i),
            _ => return None,
        }
    }
    None
}

/// Locate the package clause.
///
/// Returns the clause, its declared name (empty when the clause carries
/// no identifier) and its position. When no clause precedes the file's
/// content the result is `(None, "", file-start position)`.
pub fn package_info(f: &File) -> (Option<&PackageClause>, &str, Pos) {
    match clause_index(f) {
        Some(i) => match &f.decls[i] {
            Decl::Package(clause) => match &clause.name {
                Some(id) => (Some(clause), id.name.as_str(), id.pos()),
                None => (Some(clause), "", clause.pos()),
            },
            _ => unreachable!("clause_index returned a non-package declaration"),
        },
        None => (None, "", f.pos()),
    }
}

/// Install or rename the package clause.
///
/// An existing clause is left alone unless `overwrite` is set and the
/// name actually changes; the replacement identifier carries the
/// original identifier's position and comments. When no clause exists
/// one is synthesised and inserted directly after the leading run of
/// comment declarations, ahead of imports, attributes and content.
pub fn set_package(f: &mut File, name: &str, overwrite: bool) {
    if let Some(i) = clause_index(f) {
        if let Decl::Package(clause) = &mut f.decls[i] {
            let current = clause.name.as_ref().map(|id| id.name.as_str()).unwrap_or("");
            if !overwrite || current == name {
                return;
            }
            let mut replacement = make::ident(name);
            if let Some(original) = &clause.name {
                copy_meta(&mut replacement, original);
            }
            clause.name = Some(replacement);
        }
        return;
    }

    let k = f
        .decls
        .iter()
        .take_while(|d| matches!(d, Decl::Comment(_)))
        .count();
    f.decls.insert(k, Decl::Package(make::package(name)));
}

/// The canonical header comment of a file.
///
/// Selection order: the package clause's attached comments; failing
/// that, the file's own header comments; failing that, comments found
/// in the leading comment/attribute run of declarations (a file whose
/// first declaration is itself a standalone comment group yields that
/// group directly). From the gathered groups, the one ranked before its
/// node wins; with several, the last.
pub fn file_comment(f: &File) -> Option<&CommentGroup> {
    let (clause, _, _) = package_info(f);

    let mut gathered: Vec<&CommentGroup> = Vec::new();
    if let Some(clause) = clause {
        gathered.extend(clause.comments());
    } else if !f.comments().is_empty() {
        gathered.extend(f.comments());
    } else {
        for (i, d) in f.decls.iter().enumerate() {
            match d {
                Decl::Comment(cg) => {
                    if i == 0 {
                        return Some(cg);
                    }
                    gathered.extend(d.comments());
                }
                Decl::Attribute(_) => gathered.extend(d.comments()),
                _ => break,
            }
        }
    }

    gathered
        .into_iter()
        .filter(|cg| cg.position == RANK_BEFORE)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ast::{Expr, Label};
    use crate::syntax::meta::{Meta, RelPos};

    fn field_decl(name: &str) -> Decl {
        Decl::Field(make::field(
            Label::Ident(make::ident(name)),
            Expr::Ident(make::ident("int")),
        ))
    }

    fn comment_decl(text: &str) -> Decl {
        Decl::Comment(make::comment(true, text).unwrap())
    }

    fn import_decl() -> Decl {
        Decl::Import(crate::syntax::ast::ImportDecl {
            specs: vec![make::import_spec("strings")],
            ..Default::default()
        })
    }

    fn file_of(decls: Vec<Decl>) -> File {
        File {
            meta: Meta::default(),
            decls,
        }
    }

    #[test]
    pub fn test_clause_found_past_comments_and_attributes() {
        let f = file_of(vec![
            comment_decl("header"),
            Decl::Attribute(make::attribute("tag", "v")),
            Decl::Package(make::package("kube")),
            field_decl("a"),
        ]);
        let (clause, name, _) = package_info(&f);
        assert!(clause.is_some());
        assert_eq!(name, "kube");
    }

    #[test]
    pub fn test_clause_not_found_after_content() {
        let f = file_of(vec![field_decl("a"), Decl::Package(make::package("kube"))]);
        let (clause, name, _) = package_info(&f);
        assert!(clause.is_none());
        assert_eq!(name, "");
    }

    #[test]
    pub fn test_unnamed_clause_still_reported() {
        let f = file_of(vec![Decl::Package(PackageClause::default())]);
        let (clause, name, _) = package_info(&f);
        assert!(clause.is_some());
        assert_eq!(name, "");
    }

    #[test]
    pub fn test_set_package_noop_without_overwrite() {
        let mut f = file_of(vec![
            Decl::Package(make::package("old")),
            field_decl("a"),
        ]);
        let before = f.clone();
        set_package(&mut f, "new", false);
        assert_eq!(f, before);
    }

    #[test]
    pub fn test_set_package_noop_when_name_unchanged() {
        let mut f = file_of(vec![Decl::Package(make::package("p")), field_decl("a")]);
        let before = f.clone();
        set_package(&mut f, "p", true);
        assert_eq!(f.decls.len(), before.decls.len());
        assert_eq!(f, before);
    }

    #[test]
    pub fn test_rename_installs_replacement_identifier() {
        // the replacement must actually land in the clause's name slot
        let mut clause = make::package("old");
        let original = clause.name.as_mut().unwrap();
        original.set_rel_pos(RelPos::NewSection);
        original.add_comment(make::comment(true, "package doc").unwrap());

        let mut f = file_of(vec![Decl::Package(clause), field_decl("a")]);
        set_package(&mut f, "new", true);

        let (clause, name, _) = package_info(&f);
        assert_eq!(name, "new");
        let id = clause.unwrap().name.as_ref().unwrap();
        assert_eq!(id.rel_pos(), RelPos::NewSection);
        assert_eq!(id.comments().len(), 1);
    }

    #[test]
    pub fn test_install_lands_after_leading_comments() {
        let mut f = file_of(vec![
            comment_decl("copyright"),
            comment_decl("header"),
            import_decl(),
            field_decl("a"),
        ]);
        set_package(&mut f, "fresh", false);

        assert_eq!(f.decls.len(), 5);
        assert!(matches!(f.decls[0], Decl::Comment(_)));
        assert!(matches!(f.decls[1], Decl::Comment(_)));
        assert!(matches!(f.decls[2], Decl::Package(_)));
        assert!(matches!(f.decls[3], Decl::Import(_)));
        let (_, name, _) = package_info(&f);
        assert_eq!(name, "fresh");
    }

    #[test]
    pub fn test_install_into_empty_file() {
        let mut f = file_of(vec![]);
        set_package(&mut f, "solo", false);
        assert_eq!(f.decls.len(), 1);
        assert!(matches!(f.decls[0], Decl::Package(_)));
    }

    #[test]
    pub fn test_file_comment_prefers_clause_comments() {
        let mut clause = make::package("p");
        clause.add_comment(make::comment(true, "before clause").unwrap());
        clause.add_comment(make::comment(false, "trailing").unwrap());

        let mut f = file_of(vec![Decl::Package(clause)]);
        f.add_comment(make::comment(true, "file header").unwrap());

        let cg = file_comment(&f).unwrap();
        assert_eq!(cg.text(), "before clause");
        assert_eq!(cg.position, RANK_BEFORE);
    }

    #[test]
    pub fn test_file_comment_falls_back_to_file_header() {
        let mut f = file_of(vec![field_decl("a")]);
        f.add_comment(make::comment(true, "file header").unwrap());
        assert_eq!(file_comment(&f).unwrap().text(), "file header");
    }

    #[test]
    pub fn test_file_comment_first_decl_standalone_group() {
        let f = file_of(vec![comment_decl("standalone"), field_decl("a")]);
        assert_eq!(file_comment(&f).unwrap().text(), "standalone");
    }

    #[test]
    pub fn test_file_comment_gathers_within_leading_run_only() {
        let mut attr = make::attribute("tag", "v");
        attr.add_comment(make::comment(true, "attr doc").unwrap());
        let mut field = field_decl("a");
        field.add_comment(make::comment(true, "field doc").unwrap());

        // attribute comments are gathered; the field stops the scan
        let f = file_of(vec![field_decl("z"), Decl::Attribute(attr), field]);
        assert!(file_comment(&f).is_none());

        let mut attr2 = make::attribute("tag", "v");
        attr2.add_comment(make::comment(true, "attr doc").unwrap());
        let g = file_of(vec![Decl::Attribute(attr2), field_decl("a")]);
        assert_eq!(file_comment(&g).unwrap().text(), "attr doc");
    }

    #[test]
    pub fn test_file_comment_last_before_rank_wins() {
        let mut clause = make::package("p");
        clause.add_comment(make::comment(true, "first").unwrap());
        clause.add_comment(make::comment(true, "second").unwrap());
        let f = file_of(vec![Decl::Package(clause)]);
        assert_eq!(file_comment(&f).unwrap().text(), "second");
    }
}
