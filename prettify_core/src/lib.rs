//! `prettify_core` turns compiler errors produced by code that uses the C++
//! Actor Framework (CAF) into something a human can read. Typed actor
//! interfaces show up in diagnostics as deeply nested template instantiations
//! and message atoms show up as opaque 64-bit integers. This crate rewrites
//! both.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Input line
//!   → Substitutions (e.g. `std::__1::` → `std::`)
//!   → Rewriter (each `typed_mpi<...>` → `replies_to<...>::with<...>`, atoms decoded)
//!   → Qualifier removal (e.g. every `caf::`)
//! Output line
//! ```
//!
//! ## Modules
//!
//! - [`atom`] — Encoding and decoding of packed atom values.
//! - [`scanner`] — Angle bracket balancing and top-level comma splitting.
//! - [`config`] — Configuration loading from `caf-prettify.toml`.
//!
//! ## Key Types
//!
//! - [`Rewriter`] — Rewrites single lines according to a [`PrettifyConfig`].
//! - [`AtomValue`] — A packed atom that displays as its decoded text.
//! - [`StreamReport`] — Line counters produced by [`prettify_stream`].
//!
//! ## Quick Start
//!
//! ```rust
//! use prettify_core::rewrite_line;
//!
//! let line = "caf::typed_mpi<caf::detail::type_list<caf::atom_constant<4115129>>, \
//!             caf::detail::type_list<int>>";
//! assert_eq!(rewrite_line(line).unwrap(), "replies_to<'get'>::with<int>");
//! ```

pub use atom::AtomValue;
pub use config::*;
pub use error::*;
pub use rewriter::*;
pub use stream::*;

pub mod atom;
pub mod config;
#[allow(unused_assignments)]
mod error;
mod rewriter;
pub mod scanner;
mod stream;

#[cfg(test)]
mod __fixtures;
