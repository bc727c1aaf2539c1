//! Directed multigraph over entity ids
//!
//! Every entity owns two edge lists: outgoing edges (the entity is the subject) and
//! incoming edges (the entity is the object). An incoming edge stores the subject in its
//! `target` slot so both lists always name "the other endpoint". Repeated statements do not
//! add edges; they bump the multiplicity of the existing pair on both sides.

use trove_types::{EntityId, InternId, PredicateId};

/// One distinct (other endpoint, predicate) pair attached to an entity.
///
/// Equality ignores the multiplicity.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    target: EntityId,
    predicate: PredicateId,
    multiplicity: u32,
}

impl Edge {
    fn new(target: EntityId, predicate: PredicateId) -> Self {
        Self { target, predicate, multiplicity: 1 }
    }

    /// The other endpoint: the object for outgoing edges, the subject for incoming ones
    pub fn target(&self) -> EntityId {
        self.target
    }

    pub fn predicate(&self) -> PredicateId {
        self.predicate
    }

    /// How many times the statement behind this edge was loaded
    pub fn multiplicity(&self) -> u32 {
        self.multiplicity
    }

    fn links(&self, target: EntityId, predicate: PredicateId) -> bool {
        self.target == target && self.predicate == predicate
    }

    /// Count one more copy of the statement.
    ///
    /// # Panics
    ///
    /// Panics if the multiplicity would exceed `u32::MAX`.
    fn bump(&mut self) {
        self.multiplicity = match self.multiplicity.checked_add(1) {
            Some(multiplicity) => multiplicity,
            None => panic!("multiplicity of edge to {:?} overflowed", self.target),
        };
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.links(other.target, other.predicate)
    }
}

impl Eq for Edge {}

/// Forward and reverse adjacency for every entity
#[derive(Debug, Clone, Default)]
pub struct StatementGraph {
    outgoing: Vec<Vec<Edge>>,
    incoming: Vec<Vec<Edge>>,
}

impl StatementGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(entities: usize) -> Self {
        Self { outgoing: Vec::with_capacity(entities), incoming: Vec::with_capacity(entities) }
    }

    /// Record one statement.
    ///
    /// Returns `true` if the statement created a new edge and `false` if it only raised
    /// the multiplicity of an existing one.
    pub fn insert(&mut self, source: EntityId, predicate: PredicateId, target: EntityId) -> bool {
        self.ensure_entity(source);
        self.ensure_entity(target);

        let created = record(&mut self.outgoing[source.index()], target, predicate);
        let mirrored = record(&mut self.incoming[target.index()], source, predicate);
        debug_assert_eq!(created, mirrored, "outgoing and incoming edge lists diverged");
        created
    }

    /// Edges leaving `entity`, in insertion order; empty for unknown ids
    pub fn outgoing(&self, entity: EntityId) -> &[Edge] {
        self.outgoing.get(entity.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges arriving at `entity`, in insertion order; empty for unknown ids
    pub fn incoming(&self, entity: EntityId) -> &[Edge] {
        self.incoming.get(entity.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `entity` is the subject of at least one statement
    pub fn is_subject(&self, entity: EntityId) -> bool {
        !self.outgoing(entity).is_empty()
    }

    /// Whether `entity` is the object of at least one statement
    pub fn is_object(&self, entity: EntityId) -> bool {
        !self.incoming(entity).is_empty()
    }

    /// Entities with at least one outgoing edge, in ascending id order
    pub fn subjects(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .filter(|(_, edges)| !edges.is_empty())
            .map(|(index, _)| EntityId::from_index(index))
    }

    /// Number of entity slots (one per interned entity)
    pub fn entity_count(&self) -> usize {
        self.outgoing.len()
    }

    fn ensure_entity(&mut self, entity: EntityId) {
        let needed = entity.index() + 1;
        if self.outgoing.len() < needed {
            self.outgoing.resize_with(needed, Vec::new);
            self.incoming.resize_with(needed, Vec::new);
        }
    }
}

/// Bump the matching edge or append a new one; `true` when appended
fn record(edges: &mut Vec<Edge>, other: EntityId, predicate: PredicateId) -> bool {
    match edges.iter_mut().find(|edge| edge.links(other, predicate)) {
        Some(edge) => {
            edge.bump();
            false
        }
        None => {
            edges.push(Edge::new(other, predicate));
            true
        }
    }
}
