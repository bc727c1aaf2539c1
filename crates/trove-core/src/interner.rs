//! String interning for entity and predicate terms
//!
//! Each distinct term gets a dense identifier in first-seen order. The store keeps two
//! independent interners: one shared by subjects and objects, one for predicates.

use ahash::AHashMap;
use std::sync::Arc;
use trove_types::InternId;

/// Bidirectional term table: text → id through a hash index, id → text through an
/// append-only vector whose position is the id.
#[derive(Debug, Clone)]
pub struct Interner<I> {
    ids: AHashMap<Arc<str>, I>,
    texts: Vec<Arc<str>>,
}

impl<I: InternId> Default for Interner<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: InternId> Interner<I> {
    pub fn new() -> Self {
        Self { ids: AHashMap::new(), texts: Vec::new() }
    }

    /// Pre-size for roughly `capacity` distinct terms
    pub fn with_capacity(capacity: usize) -> Self {
        Self { ids: AHashMap::with_capacity(capacity), texts: Vec::with_capacity(capacity) }
    }

    /// Return the id of `text`, assigning the next sequential id if it is new
    pub fn intern(&mut self, text: &str) -> I {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }

        let id = I::from_index(self.texts.len());
        let text: Arc<str> = Arc::from(text);
        self.texts.push(Arc::clone(&text));
        self.ids.insert(text, id);
        id
    }

    /// Same as [`intern`](Self::intern), also reporting whether the term was new
    pub fn intern_new(&mut self, text: &str) -> (I, bool) {
        let before = self.texts.len();
        let id = self.intern(text);
        (id, self.texts.len() > before)
    }

    /// Id of a known term
    pub fn lookup(&self, text: &str) -> Option<I> {
        self.ids.get(text).copied()
    }

    /// Text of an assigned id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never handed out by this interner.
    pub fn resolve(&self, id: I) -> &str {
        match self.texts.get(id.index()) {
            Some(text) => &**text,
            None => panic!("id {id:?} was never assigned by this interner ({} terms)", self.len()),
        }
    }

    /// Text of an id, or `None` if it was never assigned
    pub fn try_resolve(&self, id: I) -> Option<&str> {
        self.texts.get(id.index()).map(|text| &**text)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Terms in id order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (I, &str)> + '_ {
        self.texts.iter().enumerate().map(|(index, text)| (I::from_index(index), &**text))
    }

    /// All ids ordered by their text.
    ///
    /// This is the order a depth-first walk of a prefix tree over the terms would produce:
    /// byte-wise lexicographic, with a term preceding every term it is a prefix of.
    pub fn sorted_ids(&self) -> Vec<I> {
        let mut ids: Vec<I> = (0..self.texts.len()).map(I::from_index).collect();
        ids.sort_unstable_by(|a, b| self.texts[a.index()].cmp(&self.texts[b.index()]));
        ids
    }
}
