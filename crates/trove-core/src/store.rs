//! Store construction, loading and saving
//!
//! A [`StoreBuilder`] owns the mutable phase. Once finished, a [`TripleStore`] is read-only.

use crate::config::{StoreConfig, VocabularyConfig};
use crate::constants::capacity;
use crate::error::{ResultExt, TroveError, TroveResult};
use crate::graph::{Edge, StatementGraph};
use crate::interner::Interner;
use crate::ordering::CanonicalOrdering;
use crate::statement_io::{StatementReader, StatementWriter};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, instrument};
use trove_types::{EntityId, InternId, PredicateId, Statement};

/// Counters collected while a store is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Entities whose first appearance was in subject position
    pub subjects: usize,
    /// Entities whose first appearance was in object position
    pub objects: usize,
    /// Distinct predicates
    pub predicates: usize,
    /// Statements loaded, counting repeats
    pub statements: usize,
    /// Distinct (subject, predicate, object) edges
    pub edges: usize,
}

impl StoreStats {
    /// Distinct entities (subjects and objects share one id space)
    pub fn entities(&self) -> usize {
        self.subjects + self.objects
    }
}

/// Mutable construction phase of a [`TripleStore`].
///
/// Statements are interned and inserted one by one; [`finish`](Self::finish) computes the
/// canonical ordering, resolves the distinguished predicates and hands out the read-only
/// store.
#[derive(Debug)]
pub struct StoreBuilder {
    entities: Interner<EntityId>,
    predicates: Interner<PredicateId>,
    graph: StatementGraph,
    vocabulary: VocabularyConfig,
    stats: StoreStats,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::from_valid_config(&StoreConfig::default())
    }

    /// Builder using the configured vocabulary and capacity hint.
    ///
    /// Fails if the configuration does not validate, so that the instance-of and subclass-of
    /// predicates can never coincide in a built store.
    pub fn with_config(config: &StoreConfig) -> TroveResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &StoreConfig) -> Self {
        let statements = config.loading.capacity_hint.min(capacity::MAX_PREALLOCATED_STATEMENTS);
        let entities = statements * capacity::ENTITIES_PER_STATEMENT;

        Self {
            entities: Interner::with_capacity(entities),
            predicates: Interner::new(),
            graph: StatementGraph::with_capacity(entities),
            vocabulary: config.vocabulary.clone(),
            stats: StoreStats::default(),
        }
    }

    /// Intern the three terms and record the statement
    pub fn insert(&mut self, subject: &str, predicate: &str, object: &str) {
        let (subject_id, new_subject) = self.entities.intern_new(subject);
        let (predicate_id, new_predicate) = self.predicates.intern_new(predicate);
        let (object_id, new_object) = self.entities.intern_new(object);

        self.stats.subjects += usize::from(new_subject);
        self.stats.predicates += usize::from(new_predicate);
        self.stats.objects += usize::from(new_object);
        self.stats.statements += 1;

        if self.graph.insert(subject_id, predicate_id, object_id) {
            self.stats.edges += 1;
        }
    }

    pub fn insert_statement(&mut self, statement: &Statement) {
        self.insert(&statement.subject, &statement.predicate, &statement.object);
    }

    /// Statements inserted so far, counting repeats
    pub fn statement_count(&self) -> usize {
        self.stats.statements
    }

    /// Seal the store: compute the canonical ordering and resolve the taxonomy predicates
    #[instrument(skip(self))]
    pub fn finish(self) -> TripleStore {
        let ordering = CanonicalOrdering::build(&self.graph, &self.entities, &self.predicates);
        let instance_of = self.predicates.lookup(&self.vocabulary.instance_of);
        let subclass_of = self.predicates.lookup(&self.vocabulary.subclass_of);
        debug_assert!(
            instance_of.is_none() || instance_of != subclass_of,
            "instance-of and subclass-of resolved to the same predicate"
        );

        debug!(
            instance_of = ?instance_of,
            subclass_of = ?subclass_of,
            "Resolved taxonomy predicates"
        );
        info!(
            statements = self.stats.statements,
            entities = self.entities.len(),
            predicates = self.predicates.len(),
            edges = self.stats.edges,
            "Statement store built"
        );

        TripleStore {
            entities: self.entities,
            predicates: self.predicates,
            graph: self.graph,
            ordering,
            instance_of,
            subclass_of,
            stats: self.stats,
        }
    }
}

/// Read-only statement store.
///
/// Built once from a finite sequence of statements (see [`StoreBuilder`]) and never
/// mutated afterwards, so shared references can be queried from several threads.
#[derive(Debug, Clone)]
pub struct TripleStore {
    pub(crate) entities: Interner<EntityId>,
    pub(crate) predicates: Interner<PredicateId>,
    pub(crate) graph: StatementGraph,
    pub(crate) ordering: CanonicalOrdering,
    pub(crate) instance_of: Option<PredicateId>,
    pub(crate) subclass_of: Option<PredicateId>,
    stats: StoreStats,
}

impl Default for TripleStore {
    fn default() -> Self {
        StoreBuilder::new().finish()
    }
}

impl TripleStore {
    /// Build a store from in-memory statements with the default vocabulary
    pub fn from_statements<I>(statements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Statement>,
    {
        Self::build(StoreBuilder::new(), statements)
    }

    /// Build a store from in-memory statements; fails on an invalid configuration
    pub fn from_statements_with_config<I>(statements: I, config: &StoreConfig) -> TroveResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Statement>,
    {
        Ok(Self::build(StoreBuilder::with_config(config)?, statements))
    }

    #[instrument(skip_all)]
    fn build<I>(mut builder: StoreBuilder, statements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Statement>,
    {
        for statement in statements {
            builder.insert_statement(&statement.into());
        }
        builder.finish()
    }

    /// Load a statement file with the default configuration
    pub fn load(path: impl AsRef<Path>) -> TroveResult<Self> {
        Self::load_with_config(path, &StoreConfig::default())
    }

    /// Load a statement file.
    ///
    /// Either the whole file is loaded or an error is returned; no partially built store
    /// escapes.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_with_config(path: impl AsRef<Path>, config: &StoreConfig) -> TroveResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| TroveError::io(path, &err))?;
        let store = Self::from_reader(BufReader::new(file), config).with_path_context(path)?;

        info!(statements = store.stats.statements, "Loaded statement file");
        Ok(store)
    }

    /// Load statements from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R, config: &StoreConfig) -> TroveResult<Self> {
        let mut builder = StoreBuilder::with_config(config)?;
        let mut statements = StatementReader::new(reader).strict(config.loading.strict);
        while let Some(statement) = statements.next_statement()? {
            builder.insert_statement(&statement);
        }

        let skipped = statements.skipped_lines();
        if skipped > 0 {
            info!(skipped, "Skipped malformed statement lines");
        }
        Ok(builder.finish())
    }

    /// Write every statement to a file, one line per loaded statement
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> TroveResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|err| TroveError::io(path, &err))?;
        self.write_to(BufWriter::new(file)).with_path_context(path)?;

        info!(statements = self.stats.statements, "Saved statement file");
        Ok(())
    }

    /// Write every statement, repeats expanded, in entity-id then edge-insertion order.
    ///
    /// Reloading the output gives back the same statements and edges, but entities may be
    /// first seen in a different role, so the subject and object counters can differ.
    pub fn write_to<W: Write>(&self, writer: W) -> TroveResult<()> {
        let mut writer = StatementWriter::new(writer);
        for index in 0..self.graph.entity_count() {
            let source = EntityId::from_index(index);
            for edge in self.graph.outgoing(source) {
                for _ in 0..edge.multiplicity() {
                    writer.write_statement(
                        self.entities.resolve(source),
                        self.predicates.resolve(edge.predicate()),
                        self.entities.resolve(edge.target()),
                    )?;
                }
            }
        }
        writer.finish()?;
        Ok(())
    }

    pub fn stats(&self) -> StoreStats {
        self.stats
    }

    /// Statements loaded, counting repeats
    pub fn statement_count(&self) -> usize {
        self.stats.statements
    }

    pub fn is_empty(&self) -> bool {
        self.stats.statements == 0
    }

    /// Entities that are the subject of at least one statement
    pub fn subject_count(&self) -> usize {
        self.graph.subjects().count()
    }

    pub fn entities(&self) -> &Interner<EntityId> {
        &self.entities
    }

    pub fn predicates(&self) -> &Interner<PredicateId> {
        &self.predicates
    }

    pub fn graph(&self) -> &StatementGraph {
        &self.graph
    }

    pub fn ordering(&self) -> &CanonicalOrdering {
        &self.ordering
    }

    /// Id of the instance-of predicate, if any statement uses it
    pub fn instance_of_predicate(&self) -> Option<PredicateId> {
        self.instance_of
    }

    /// Id of the subclass-of predicate, if any statement uses it
    pub fn subclass_of_predicate(&self) -> Option<PredicateId> {
        self.subclass_of
    }

    /// Render one edge as a statement line
    pub(crate) fn render(&self, source: EntityId, edge: &Edge) -> String {
        Statement::render(
            self.entities.resolve(source),
            self.predicates.resolve(edge.predicate()),
            self.entities.resolve(edge.target()),
        )
    }
}
