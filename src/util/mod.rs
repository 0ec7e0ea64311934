//! Small formatting helpers shared by components.

pub mod format;
