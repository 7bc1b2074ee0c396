//! Layout and comment metadata attached to syntax nodes
use crate::syntax::ast::CommentGroup;
use codespan::Span;

/// Relative layout of a node with respect to the preceding token.
///
/// The formatter reads these classes back when rendering, so shape
/// conversions must preserve or deliberately rewrite them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelPos {
    /// No layout preference recorded
    #[default]
    Unset,
    /// Abuts the previous token with no intervening space
    NoSpace,
    /// Same line as the previous token, separated by a space
    Space,
    /// Starts on the next line
    Newline,
    /// Preceded by a blank line
    NewSection,
}

/// Position of a node: relative layout class plus absolute source span.
///
/// Synthetic nodes carry a default span; only the relative class matters
/// for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub rel: RelPos,
    pub span: Span,
}

impl Pos {
    pub fn new(rel: RelPos, span: Span) -> Self {
        Pos { rel, span }
    }
}

impl From<RelPos> for Pos {
    fn from(rel: RelPos) -> Self {
        Pos {
            rel,
            span: Span::default(),
        }
    }
}

/// Metadata common to every node: position and attached comment groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta {
    pub pos: Pos,
    pub comments: Vec<CommentGroup>,
}

/// Generic access to node metadata
pub trait HasMeta {
    fn meta(&self) -> &Meta;
    fn meta_mut(&mut self) -> &mut Meta;

    fn pos(&self) -> Pos {
        self.meta().pos
    }

    fn rel_pos(&self) -> RelPos {
        self.meta().pos.rel
    }

    fn set_rel_pos(&mut self, rel: RelPos) {
        self.meta_mut().pos.rel = rel;
    }

    fn comments(&self) -> &[CommentGroup] {
        &self.meta().comments
    }

    fn set_comments(&mut self, groups: Vec<CommentGroup>) {
        self.meta_mut().comments = groups;
    }

    fn add_comment(&mut self, group: CommentGroup) {
        self.meta_mut().comments.push(group);
    }
}

/// Copy position (layout class and span) from `src` onto `dst`.
pub fn copy_position<D, S>(dst: &mut D, src: &S)
where
    D: HasMeta + ?Sized,
    S: HasMeta + ?Sized,
{
    dst.meta_mut().pos = src.meta().pos;
}

/// Append clones of `src`'s comment groups onto `dst`.
pub fn copy_comments<D, S>(dst: &mut D, src: &S)
where
    D: HasMeta + ?Sized,
    S: HasMeta + ?Sized,
{
    let groups = src.meta().comments.clone();
    dst.meta_mut().comments.extend(groups);
}

/// Copy both position and comments from `src` onto `dst`.
pub fn copy_meta<D, S>(dst: &mut D, src: &S)
where
    D: HasMeta + ?Sized,
    S: HasMeta + ?Sized,
{
    copy_position(dst, src);
    copy_comments(dst, src);
}
