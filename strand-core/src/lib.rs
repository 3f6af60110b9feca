//! Shared primitives and traits for the strand sequence toolkit.
//!
//! `strand-core` provides the foundation the other strand crates build on:
//!
//! - **Error types** — [`StrandError`] and [`Result`] for structured error handling
//! - **Traits** — the [`BioSequence`] capability set that collections rely on,
//!   built from [`Sequence`] and [`Annotated`]

pub mod error;
pub mod traits;

pub use error::{Result, StrandError};
pub use traits::*;
