//! Core functionality for bounded integral generation.
//!
//! This crate provides the building blocks of integral and character
//! generators: range configuration, seed-biased uniform sampling, per-type
//! width adapters, and the bisecting shrink engine that proposes smaller
//! candidates for a failing value.

pub mod data;
pub mod domain;
pub mod error;
pub mod gen;
pub mod integral;
pub mod shrink;

// Re-export the main types
pub use data::*;
pub use domain::*;
pub use error::*;
pub use gen::*;
pub use integral::*;
pub use shrink::{shrink, Bisection, WidthAdapter, MAX_BISECTION_STEPS};
