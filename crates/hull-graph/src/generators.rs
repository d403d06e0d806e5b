use hull_core::errors::{ErrorInfo, HullError};
use hull_core::rng::RngHandle;

use crate::graph::SimpleGraph;
use crate::ids::make_vertex;

/// Path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: usize) -> Result<SimpleGraph, HullError> {
    let mut graph = with_vertices(n);
    for i in 1..n {
        graph.add_edge(make_vertex(i - 1), make_vertex(i))?;
    }
    Ok(graph)
}

/// Undirected cycle on `n >= 3` vertices.
pub fn cycle_graph(n: usize) -> Result<SimpleGraph, HullError> {
    if n < 3 {
        return Err(too_small("cycle", n, 3));
    }
    let mut graph = path_graph(n)?;
    graph.add_edge(make_vertex(n - 1), make_vertex(0))?;
    Ok(graph)
}

/// Directed cycle `0 -> 1 -> ... -> (n-1) -> 0` on `n >= 2` vertices.
pub fn directed_cycle_graph(n: usize) -> Result<SimpleGraph, HullError> {
    if n < 2 {
        return Err(too_small("directed-cycle", n, 2));
    }
    let mut graph = SimpleGraph::directed();
    for i in 0..n {
        graph.add_vertex(make_vertex(i))?;
    }
    for i in 0..n {
        graph.add_edge(make_vertex(i), make_vertex((i + 1) % n))?;
    }
    Ok(graph)
}

/// Complete graph on `n` vertices.
pub fn complete_graph(n: usize) -> Result<SimpleGraph, HullError> {
    let mut graph = with_vertices(n);
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(make_vertex(i), make_vertex(j))?;
        }
    }
    Ok(graph)
}

/// Star with centre `0` and leaves `1..=leaves`.
pub fn star_graph(leaves: usize) -> Result<SimpleGraph, HullError> {
    let mut graph = with_vertices(leaves + 1);
    for leaf in 1..=leaves {
        graph.add_edge(make_vertex(0), make_vertex(leaf))?;
    }
    Ok(graph)
}

/// `rows x cols` grid; vertex `(r, c)` is labelled `r * cols + c`.
pub fn grid_graph(rows: usize, cols: usize) -> Result<SimpleGraph, HullError> {
    let mut graph = with_vertices(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let here = make_vertex(r * cols + c);
            if c + 1 < cols {
                graph.add_edge(here, make_vertex(r * cols + c + 1))?;
            }
            if r + 1 < rows {
                graph.add_edge(here, make_vertex((r + 1) * cols + c))?;
            }
        }
    }
    Ok(graph)
}

/// Petersen graph: outer 5-cycle `0..5`, spokes `i - i+5`, inner pentagram on `5..10`.
pub fn petersen_graph() -> Result<SimpleGraph, HullError> {
    let mut graph = with_vertices(10);
    for i in 0..5 {
        graph.add_edge(make_vertex(i), make_vertex((i + 1) % 5))?;
        graph.add_edge(make_vertex(i), make_vertex(i + 5))?;
        graph.add_edge(make_vertex(5 + i), make_vertex(5 + (i + 2) % 5))?;
    }
    Ok(graph)
}

/// Random connected graph: a random spanning tree plus every other pair with
/// probability `extra_edge_probability`.
pub fn random_connected_graph(
    n: usize,
    extra_edge_probability: f64,
    rng: &mut RngHandle,
) -> Result<SimpleGraph, HullError> {
    let coin = RngHandle::coin(extra_edge_probability)?;
    let mut graph = with_vertices(n);
    for i in 1..n {
        if let Some(parent) = rng.index_below(i) {
            graph.add_edge(make_vertex(parent), make_vertex(i))?;
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let (u, v) = (make_vertex(i), make_vertex(j));
            if !graph.has_edge(u, v) && rng.flip(&coin) {
                graph.add_edge(u, v)?;
            }
        }
    }
    Ok(graph)
}

fn with_vertices(n: usize) -> SimpleGraph {
    let mut graph = SimpleGraph::undirected();
    for i in 0..n {
        graph.ensure_vertex(make_vertex(i));
    }
    graph
}

fn too_small(kind: &str, n: usize, minimum: usize) -> HullError {
    HullError::Graph(
        ErrorInfo::new("too-few-vertices", format!("{kind} generator needs more vertices"))
            .with_context("requested", n)
            .with_context("minimum", minimum),
    )
}
