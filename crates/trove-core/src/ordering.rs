//! Canonical lexicographic ordering of statements
//!
//! Computed once, after the graph is fully populated. Entities are ordered by their text;
//! the outgoing edges of each entity are ordered by predicate text, then target text. The
//! edge lists themselves stay in insertion order; the ordering stores permutations of
//! their positions.

use crate::graph::{Edge, StatementGraph};
use crate::interner::Interner;
use std::cmp::Ordering;
use trove_types::{EntityId, InternId, PredicateId};

#[derive(Debug, Clone, Default)]
pub struct CanonicalOrdering {
    entity_order: Vec<EntityId>,
    edge_order: Vec<Box<[usize]>>,
}

impl CanonicalOrdering {
    /// Sort every entity's outgoing edges and the entities themselves
    pub fn build(
        graph: &StatementGraph,
        entities: &Interner<EntityId>,
        predicates: &Interner<PredicateId>,
    ) -> Self {
        let edge_order = (0..graph.entity_count())
            .map(|index| {
                let edges = graph.outgoing(EntityId::from_index(index));
                let mut positions: Vec<usize> = (0..edges.len()).collect();
                positions.sort_by(|&a, &b| compare_edges(&edges[a], &edges[b], entities, predicates));
                positions.into_boxed_slice()
            })
            .collect();

        Self { entity_order: entities.sorted_ids(), edge_order }
    }

    /// Every entity, ordered by text
    pub fn entity_order(&self) -> &[EntityId] {
        &self.entity_order
    }

    /// Positions into `graph.outgoing(entity)` in canonical order
    pub fn edge_order(&self, entity: EntityId) -> &[usize] {
        self.edge_order.get(entity.index()).map(|order| &**order).unwrap_or(&[])
    }

    /// All distinct edges in canonical order, paired with their source entity
    pub fn walk<'a>(
        &'a self,
        graph: &'a StatementGraph,
    ) -> impl Iterator<Item = (EntityId, &'a Edge)> + 'a {
        self.entity_order.iter().flat_map(move |&entity| {
            let edges = graph.outgoing(entity);
            self.edge_order(entity).iter().map(move |&position| (entity, &edges[position]))
        })
    }
}

/// Order two edges of the same source: predicate text first, then target text
pub fn compare_edges(
    a: &Edge,
    b: &Edge,
    entities: &Interner<EntityId>,
    predicates: &Interner<PredicateId>,
) -> Ordering {
    if a.predicate() == b.predicate() {
        entities.resolve(a.target()).cmp(entities.resolve(b.target()))
    } else {
        predicates.resolve(a.predicate()).cmp(predicates.resolve(b.predicate()))
    }
}
