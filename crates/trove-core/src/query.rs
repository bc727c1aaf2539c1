//! Structural queries over a built store
//!
//! Every query takes terms as text and answers in text. A term the store has never seen is
//! an empty answer, never an error.

use crate::store::TripleStore;
use std::iter;

impl TripleStore {
    /// Statements whose subject is `subject`, in edge insertion order, repeats expanded
    pub fn statements_by_subject(&self, subject: &str) -> Vec<String> {
        let Some(source) = self.entities.lookup(subject) else {
            return Vec::new();
        };

        self.graph
            .outgoing(source)
            .iter()
            .flat_map(|edge| {
                let line = self.render(source, edge);
                iter::repeat_n(line, edge.multiplicity() as usize)
            })
            .collect()
    }

    /// Statements whose subject is `subject`, each distinct statement once
    pub fn distinct_statements_by_subject(&self, subject: &str) -> Vec<String> {
        let Some(source) = self.entities.lookup(subject) else {
            return Vec::new();
        };

        self.graph.outgoing(source).iter().map(|edge| self.render(source, edge)).collect()
    }

    /// Every predicate, once, in first-seen order
    pub fn distinct_predicates(&self) -> Vec<&str> {
        self.predicates.iter().map(|(_, text)| text).collect()
    }

    /// Entities appearing both as a subject and as an object, in first-seen order
    pub fn subject_object_entities(&self) -> Vec<&str> {
        self.entities
            .iter()
            .filter(|&(id, _)| self.graph.is_subject(id) && self.graph.is_object(id))
            .map(|(_, text)| text)
            .collect()
    }

    /// Entities that are the subject of at least one statement, in first-seen order
    pub fn subjects(&self) -> Vec<&str> {
        self.graph.subjects().map(|id| self.entities.resolve(id)).collect()
    }

    /// Whether `entity` is the subject of at least one statement
    pub fn has_subject(&self, entity: &str) -> bool {
        self.entities.lookup(entity).is_some_and(|id| self.graph.is_subject(id))
    }

    /// All statements sorted by subject, predicate and object text, repeats expanded.
    ///
    /// Two stores loaded from the same statements in any order produce the same list.
    pub fn sorted_statements(&self) -> Vec<String> {
        self.ordering
            .walk(&self.graph)
            .flat_map(|(source, edge)| {
                let line = self.render(source, edge);
                iter::repeat_n(line, edge.multiplicity() as usize)
            })
            .collect()
    }
}
