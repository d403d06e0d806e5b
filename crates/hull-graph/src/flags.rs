use hull_core::SchemaVersion;

/// Configuration options that control the behaviour of [`SimpleGraph`](crate::SimpleGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether edges are oriented. Convexity computations reject directed graphs.
    pub directed: bool,
    /// Schema version stored alongside serialized payloads.
    pub schema_version: SchemaVersion,
}

impl GraphConfig {
    /// Configuration for an undirected graph.
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Configuration for a directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            schema_version: SchemaVersion::new(1, 0, 0),
        }
    }
}
