//! Domain types for SIX EYES
//! Defines the values exchanged between the diff engine, the optimizer and the history log.

pub mod diff;
pub mod error;
pub mod history;
pub mod optimization;

pub use diff::*;
pub use error::*;
pub use history::*;
pub use optimization::*;
