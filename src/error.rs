// src/error.rs
//! Error handling for treeseek.

#![deny(missing_docs)]

/// SeekError is alias for anyhow
pub type SeekError<T> = anyhow::Result<T>;
