//! Normalisation passes over parsed trees: shape conversion, package
//! clause handling and declaration classification
pub mod classify;
pub mod package;
pub mod shape;
