//! Shape normalisation and classification for CUE syntax trees
//!
//! Converts a parsed document between its three interchangeable shapes
//! (file, struct literal, bare expression), classifies declarations
//! (definitions, hidden fields, bulk patterns, rest sentinels), locates
//! and installs the package clause and its header comment, and reflows
//! free text into width-bounded comment blocks. The formatter and
//! evaluator build on these transforms.
extern crate codespan;
extern crate codespan_reporting;
extern crate serde_json;
extern crate thiserror;
#[macro_use]
extern crate lazy_static;

pub mod eval;
pub mod project;
pub mod syntax;
pub mod transform;
