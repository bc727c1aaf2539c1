//! Instance-of / subclass-of closure
//!
//! Both walks are depth-first over an explicit stack, so they visit entities in exactly the
//! order a recursive search would. An entity is marked visited the moment it is reached and
//! is reported at most once, which also keeps cyclic hierarchies finite. The start entity is
//! not marked up front: a cycle leading back to it reports it like any other entity.

use crate::store::TripleStore;
use roaring::RoaringBitmap;
use tracing::instrument;
use trove_types::{EntityId, PredicateId};

/// Pending position in one entity's edge list
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: EntityId,
    via: Option<PredicateId>,
    cursor: usize,
}

impl Frame {
    fn new(node: EntityId, via: Option<PredicateId>) -> Self {
        Self { node, via, cursor: 0 }
    }
}

impl TripleStore {
    /// Classes `subject` is an instance of, directly or through superclasses
    #[instrument(skip(self), level = "debug")]
    pub fn classes_of(&self, subject: &str) -> Vec<&str> {
        match self.entities.lookup(subject) {
            Some(id) => self.descend(id, self.instance_of),
            None => Vec::new(),
        }
    }

    /// Transitive superclasses of `class`
    #[instrument(skip(self), level = "debug")]
    pub fn superclasses_of(&self, class: &str) -> Vec<&str> {
        match self.entities.lookup(class) {
            Some(id) => self.descend(id, self.subclass_of),
            None => Vec::new(),
        }
    }

    /// Entities that are instances of `class` or of any of its transitive subclasses
    #[instrument(skip(self), level = "debug")]
    pub fn entities_of_class(&self, class: &str) -> Vec<&str> {
        match self.entities.lookup(class) {
            Some(id) => self.ascend(id),
            None => Vec::new(),
        }
    }

    /// Forward walk: `first_hop` edges out of `start`, then subclass-of edges only
    fn descend(&self, start: EntityId, first_hop: Option<PredicateId>) -> Vec<&str> {
        let mut result = Vec::new();
        if first_hop.is_none() {
            return result;
        }

        let mut visited = RoaringBitmap::new();
        let mut stack = vec![Frame::new(start, first_hop)];
        while let Some(frame) = stack.last_mut() {
            let Some(edge) = self.graph.outgoing(frame.node).get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            let target = edge.target();
            if Some(edge.predicate()) == frame.via && visited.insert(target.raw()) {
                result.push(self.entities.resolve(target));
                stack.push(Frame::new(target, self.subclass_of));
            }
        }
        result
    }

    /// Backward walk over incoming edges.
    ///
    /// An instance-of edge reports its subject and stops there; a subclass-of edge continues
    /// from the subclass without reporting it.
    fn ascend(&self, class: EntityId) -> Vec<&str> {
        let mut result = Vec::new();
        let mut visited = RoaringBitmap::new();
        let mut stack = vec![Frame::new(class, self.subclass_of)];
        while let Some(frame) = stack.last_mut() {
            let Some(edge) = self.graph.incoming(frame.node).get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            let source = edge.target();
            let predicate = Some(edge.predicate());
            if predicate == self.instance_of && visited.insert(source.raw()) {
                result.push(self.entities.resolve(source));
            } else if predicate == self.subclass_of && visited.insert(source.raw()) {
                stack.push(Frame::new(source, self.subclass_of));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StoreConfig;
    use crate::store::TripleStore;

    fn store(statements: &[(&str, &str, &str)]) -> TripleStore {
        let config = StoreConfig::with_vocabulary("type", "subClassOf");
        TripleStore::from_statements_with_config(statements.iter().copied(), &config).unwrap()
    }

    #[test]
    fn test_instance_and_superclass_chain() {
        let store = store(&[("x", "type", "C"), ("C", "subClassOf", "D")]);
        assert_eq!(store.classes_of("x"), vec!["C", "D"]);
        assert_eq!(store.superclasses_of("C"), vec!["D"]);
        assert_eq!(store.entities_of_class("D"), vec!["x"]);
        assert_eq!(store.entities_of_class("C"), vec!["x"]);
    }

    #[test]
    fn test_depth_first_order() {
        let store = store(&[
            ("x", "type", "A"),
            ("x", "type", "B"),
            ("A", "subClassOf", "A1"),
            ("A1", "subClassOf", "A2"),
            ("B", "subClassOf", "B1"),
        ]);
        assert_eq!(store.classes_of("x"), vec!["A", "A1", "A2", "B", "B1"]);
    }

    #[test]
    fn test_first_hop_is_instance_of_only() {
        let store = store(&[("x", "subClassOf", "Y"), ("x", "type", "C"), ("C", "type", "Meta")]);
        assert_eq!(store.classes_of("x"), vec!["C"]);
        assert_eq!(store.superclasses_of("x"), vec!["Y"]);
    }

    #[test]
    fn test_shared_superclass_reported_once() {
        let store = store(&[
            ("x", "type", "A"),
            ("x", "type", "B"),
            ("A", "subClassOf", "Top"),
            ("B", "subClassOf", "Top"),
        ]);
        assert_eq!(store.classes_of("x"), vec!["A", "Top", "B"]);
    }

    #[test]
    fn test_cyclic_hierarchy_terminates() {
        let store = store(&[
            ("x", "type", "C"),
            ("C", "subClassOf", "D"),
            ("D", "subClassOf", "C"),
            ("y", "type", "D"),
        ]);
        assert_eq!(store.classes_of("x"), vec!["C", "D"]);
        assert_eq!(store.superclasses_of("C"), vec!["D", "C"]);
        assert_eq!(store.entities_of_class("C"), vec!["x", "y"]);
    }

    #[test]
    fn test_entities_of_class_through_subclasses() {
        let store = store(&[
            ("x", "type", "A"),
            ("A", "subClassOf", "B"),
            ("y", "type", "B"),
            ("z", "type", "A"),
            ("w", "likes", "B"),
        ]);
        assert_eq!(store.entities_of_class("B"), vec!["x", "z", "y"]);
        assert!(store.entities_of_class("x").is_empty());
    }

    #[test]
    fn test_unknown_entity_is_empty() {
        let store = store(&[("x", "type", "C")]);
        assert!(store.classes_of("nobody").is_empty());
        assert!(store.superclasses_of("Nothing").is_empty());
        assert!(store.entities_of_class("Nothing").is_empty());
    }

    #[test]
    fn test_missing_vocabulary_predicates() {
        let store = store(&[("x", "p", "C"), ("C", "q", "D")]);
        assert_eq!(store.instance_of_predicate(), None);
        assert!(store.classes_of("x").is_empty());
        assert!(store.superclasses_of("C").is_empty());
        assert!(store.entities_of_class("C").is_empty());
    }

    #[test]
    fn test_instance_of_without_subclass_of() {
        let store = store(&[("x", "type", "C"), ("y", "type", "C")]);
        assert_eq!(store.classes_of("x"), vec!["C"]);
        assert_eq!(store.entities_of_class("C"), vec!["x", "y"]);
    }

    #[test]
    fn test_default_vocabulary_uses_rdf_terms() {
        use crate::constants::vocabulary::{RDF_TYPE, RDFS_SUB_CLASS_OF};

        let store = TripleStore::from_statements([
            ("<x>", RDF_TYPE, "<C>"),
            ("<C>", RDFS_SUB_CLASS_OF, "<D>"),
        ]);
        assert_eq!(store.classes_of("<x>"), vec!["<C>", "<D>"]);
        assert_eq!(store.entities_of_class("<D>"), vec!["<x>"]);
    }
}
