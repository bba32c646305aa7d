//! Bounded integral generators with bisecting shrink search.
//!
//! This is the main entry point for the library, re-exporting the
//! generators, range configuration and shrink engine from `inrange-core`.

pub use inrange_core::*;
