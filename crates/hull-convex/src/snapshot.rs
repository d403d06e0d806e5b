use std::fmt::Debug;

use hull_core::errors::HullError;
use hull_core::Graph;
use sha2::{Digest, Sha256};

use crate::index::VertexIndexer;

/// Structural SHA-256 digest of a graph in index space.
///
/// Covers the vertex count and, for each vertex in index order, its sorted
/// neighbour indices. Labels only matter through the order they induce.
pub fn structural_digest<G>(
    graph: &G,
    indexer: &VertexIndexer<G::Vertex>,
) -> Result<String, HullError>
where
    G: Graph,
    G::Vertex: Clone + Ord + Debug,
{
    let mut hasher = Sha256::new();
    hasher.update(b"undirected-simple");
    hasher.update((indexer.len() as u64).to_le_bytes());
    for label in indexer.labels() {
        let mut neighbours = graph
            .neighbours(label)?
            .iter()
            .map(|neighbour| indexer.index_of(neighbour))
            .collect::<Result<Vec<_>, _>>()?;
        neighbours.sort_unstable();
        update_slice(&neighbours, &mut hasher);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

fn update_slice(values: &[usize], hasher: &mut Sha256) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update((*value as u64).to_le_bytes());
    }
}
