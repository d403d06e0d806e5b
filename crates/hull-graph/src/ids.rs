use std::collections::BTreeSet;

use hull_core::VertexId;

/// Orders the endpoints of an undirected edge.
pub(crate) fn canonical_edge(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Ensures that the list of vertex identifiers is sorted and contains no duplicates.
pub(crate) fn canonicalize_vertices(vertices: &[VertexId]) -> Vec<VertexId> {
    let set: BTreeSet<VertexId> = vertices.iter().copied().collect();
    set.into_iter().collect()
}

/// Creates a [`VertexId`] from an index.
pub(crate) fn make_vertex(index: usize) -> VertexId {
    VertexId::from_raw(index as u64)
}
