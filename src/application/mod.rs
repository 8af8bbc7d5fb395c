//! Application layer (use-cases, policies).
//!
//! Diffing, highlighting and the optimize flow, independent of any front end
//! or storage format.

pub mod diff;
pub mod highlight;
pub mod optimize;
