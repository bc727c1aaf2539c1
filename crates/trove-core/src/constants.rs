//! Core constants used throughout the Trove statement store

/// Predicate texts the taxonomy reasoner recognises by default
pub mod vocabulary {
    /// `rdf:type`, the instance-of relation
    pub const RDF_TYPE: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>";

    /// `rdfs:subClassOf`, the subclass-of relation
    pub const RDFS_SUB_CLASS_OF: &str = "<http://www.w3.org/2000/01/rdf-schema#subClassOf>";
}

/// Configuration sources
pub mod config {
    /// Environment variable naming the configuration file
    pub const CONFIG_PATH_ENV: &str = "TROVE_CONFIG_PATH";

    /// Configuration file used when `CONFIG_PATH_ENV` is unset
    pub const DEFAULT_CONFIG_PATH: &str = "trove.toml";

    /// Overrides `vocabulary.instance_of`
    pub const INSTANCE_OF_ENV: &str = "TROVE_INSTANCE_OF_PREDICATE";

    /// Overrides `vocabulary.subclass_of`
    pub const SUBCLASS_OF_ENV: &str = "TROVE_SUBCLASS_OF_PREDICATE";

    /// Overrides `loading.capacity_hint`
    pub const CAPACITY_HINT_ENV: &str = "TROVE_CAPACITY_HINT";

    /// Overrides `loading.strict`
    pub const STRICT_LOADING_ENV: &str = "TROVE_STRICT_LOADING";
}

/// Capacity estimates used to pre-size tables during loading
pub mod capacity {
    /// Expected distinct entities per loaded statement
    pub const ENTITIES_PER_STATEMENT: usize = 2;

    /// Upper bound for any pre-allocation derived from a capacity hint
    pub const MAX_PREALLOCATED_STATEMENTS: usize = 1 << 24;
}
