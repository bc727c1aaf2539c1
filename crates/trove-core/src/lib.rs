#![deny(warnings)]
#![allow(missing_docs)]
//! Core functionality for the Trove statement store.
//!
//! This crate loads subject-predicate-object statements into an interned, read-only
//! multigraph and answers a fixed catalogue of structural queries over it: lookups by
//! subject, predicate enumeration, canonical ordering, instance-of / subclass-of closure
//! and subject intersection across several stores.

/// Store configuration from TOML files and environment variables
pub mod config;
/// Well-known predicates and tuning constants
pub mod constants;
/// Error types and result aliases
pub mod error;
/// Directed multigraph with forward and reverse adjacency
pub mod graph;
/// Term interning into dense identifiers
pub mod interner;
/// Cross-store subject intersection
pub mod intersect;
/// Canonical lexicographic statement ordering
pub mod ordering;
/// Subject, predicate and entity queries
pub mod query;
/// Line-oriented statement reading and writing
pub mod statement_io;
/// Store construction, loading and saving
pub mod store;
/// Instance-of / subclass-of reasoning
pub mod taxonomy;

pub use config::{LoadingConfig, StoreConfig, VocabularyConfig};
pub use error::{ResultExt, TroveError, TroveResult};
pub use graph::{Edge, StatementGraph};
pub use interner::Interner;
pub use intersect::subjects_in_all;
pub use ordering::CanonicalOrdering;
pub use statement_io::{StatementReader, StatementWriter};
pub use store::{StoreBuilder, StoreStats, TripleStore};
pub use trove_types::{EntityId, InternId, PredicateId, Statement};
