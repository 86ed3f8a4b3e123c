//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Shared by every feature crate, so it stays free of I/O: data types and small helpers only.

pub mod config;
pub mod field;
pub mod mask;
pub mod registry;
