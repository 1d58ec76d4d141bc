//! Tools for maintaining the translation resources of a lisan site.

pub mod check;
pub mod config;
