//! SIX EYES: AI-assisted code optimization with a line-by-line before/after view.
//!
//! The crate owns the text transforms (line diff, token highlighting), the
//! boundary to the hosted optimizer, and a small persisted history.

pub mod application;
pub mod domain;
pub mod infra;
pub mod prompts;
