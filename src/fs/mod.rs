//! Filesystem access: metadata probing and directory walking.

pub mod meta;
pub mod walker;
