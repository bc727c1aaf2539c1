//! Trove Prelude
//!
//! This crate re-exports the most frequently used public items from the Trove
//! workspace (currently `trove-core` and `trove-types`). Downstream applications can
//! depend on `trove-prelude` to avoid long import lists and to stay insulated from
//! internal module reshuffles.

#![deny(warnings)]
#![deny(missing_docs)]

// Store and its construction ---------------------------------------------------------------

pub use trove_core::{StoreBuilder, StoreConfig, StoreStats, TripleStore, subjects_in_all};

// Errors -----------------------------------------------------------------------------------

pub use trove_core::{TroveError, TroveResult};

// Value types ------------------------------------------------------------------------------

pub use trove_types::{EntityId, PredicateId, Statement};
