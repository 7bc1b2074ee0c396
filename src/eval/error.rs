//! Sentinel errors matched by identity through wrapping layers
use codespan_reporting::diagnostic::Diagnostic;
use std::error::Error;
use std::fmt::{self, Display};
use thiserror::Error;

/// Well-known conditions the evaluator signals and callers recognise by
/// identity rather than message text
#[derive(Eq, PartialEq, Debug, Clone, Error)]
pub enum EvalError {
    /// evaluation could not complete with the information available
    #[error("incomplete value")]
    Incomplete,
    /// a subsumption check succeeded only inexactly
    #[error("inexact subsumption")]
    Inexact,
}

impl EvalError {
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        Diagnostic::error().with_message(format!("{}", self))
    }
}

/// An error that formats and behaves as its primary error while staying
/// recognisable as the extra condition it was decorated with.
///
/// [`Decorated::is`] succeeds when the target matches either the
/// primary error or the decoration, walking both source chains, so a
/// sentinel survives wrapping in diagnostic context.
#[derive(Debug)]
pub struct Decorated {
    primary: Box<dyn Error + Send + Sync + 'static>,
    info: Box<dyn Error + Send + Sync + 'static>,
}

/// Wrap `primary` with the extra condition `info`
pub fn decorate<I, P>(info: I, primary: P) -> Decorated
where
    I: Error + Send + Sync + 'static,
    P: Error + Send + Sync + 'static,
{
    Decorated {
        primary: Box::new(primary),
        info: Box::new(info),
    }
}

impl Display for Decorated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)
    }
}

impl Error for Decorated {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.primary.source()
    }
}

impl Decorated {
    /// True when `target` matches either identity, directly or anywhere
    /// down its source chain
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        chain_matches(self.info.as_ref(), target) || chain_matches(self.primary.as_ref(), target)
    }
}

fn chain_matches<E>(err: &(dyn Error + 'static), target: &E) -> bool
where
    E: Error + PartialEq + 'static,
{
    let mut current: Option<&(dyn Error + 'static)> = Some(err);
    while let Some(e) = current {
        if e.downcast_ref::<E>() == Some(target) {
            return true;
        }
        current = e.source();
    }
    false
}
