//! Trove Types
//!
//! This crate defines the value types shared across the Trove workspace: the dense
//! identifiers handed out by the interners and the textual `Statement` that is read from
//! and written to statement files. Keeping them here lets `trove-core` and downstream
//! crates agree on identifiers without depending on the store internals.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]

mod types;
pub use types::{EntityId, InternId, PredicateId, STATEMENT_TERMINATOR, Statement};
