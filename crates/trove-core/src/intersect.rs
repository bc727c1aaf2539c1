//! Subjects shared by several stores

use crate::store::TripleStore;
use tracing::{debug, instrument};

/// Entities that are the subject of at least one statement in every store.
///
/// The store with the fewest subjects is probed and each of its subjects is looked up in
/// every store; the answer follows the probe store's first-seen order. No stores means no
/// subjects.
#[instrument(skip_all, fields(stores = stores.len()))]
pub fn subjects_in_all<'a>(stores: &[&'a TripleStore]) -> Vec<&'a str> {
    let Some((position, probe)) = stores
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|(_, store)| store.subject_count())
    else {
        return Vec::new();
    };
    debug!(probe = position, subjects = probe.subject_count(), "Selected probe store");

    let shared: Vec<&'a str> = probe
        .subjects()
        .into_iter()
        .filter(|subject| stores.iter().all(|store| store.has_subject(subject)))
        .collect();

    debug!(shared = shared.len(), "Intersected subjects");
    shared
}
