use hull_convex::{ConvexityProperties, HullNumber};
use hull_core::errors::HullError;
use hull_core::VertexId;
use hull_graph::{
    complete_graph, cycle_graph, directed_cycle_graph, grid_graph, path_graph, petersen_graph,
    star_graph, SimpleGraph,
};

fn ids(raw: &[u64]) -> Vec<VertexId> {
    raw.iter().copied().map(VertexId::from_raw).collect()
}

#[test]
fn petersen_hull_and_hull_number() {
    let graph = petersen_graph().unwrap();
    let props = ConvexityProperties::new(&graph).unwrap();
    assert_eq!(props.hull(&ids(&[1, 3])).unwrap(), ids(&[1, 2, 3]));
    assert_eq!(props.hull_number(true, false).unwrap(), HullNumber::Value(3));

    let HullNumber::Generators(generators) = props.hull_number(false, false).unwrap() else {
        panic!("expected a generating set");
    };
    assert_eq!(generators.len(), 3);
    assert_eq!(props.hull(&generators).unwrap(), props.vertices().to_vec());
}

#[test]
fn path_endpoints_generate_the_path() {
    let graph = path_graph(5).unwrap();
    let props = ConvexityProperties::new(&graph).unwrap();
    assert_eq!(props.hull(&ids(&[0, 4])).unwrap(), ids(&[0, 1, 2, 3, 4]));
    assert_eq!(props.hull_number(true, false).unwrap().value(), 2);
    let generators = props.hull_number(false, false).unwrap();
    assert_eq!(generators, HullNumber::Generators(ids(&[0, 4])));
}

#[test]
fn tiny_graphs_need_every_vertex() {
    for n in 0..=2 {
        let graph = path_graph(n).unwrap();
        let props = ConvexityProperties::new(&graph).unwrap();
        assert_eq!(props.hull_number(true, false).unwrap(), HullNumber::Value(n));
        let all: Vec<u64> = (0..n as u64).collect();
        assert_eq!(
            props.hull_number(false, false).unwrap(),
            HullNumber::Generators(ids(&all))
        );
    }
}

#[test]
fn directed_cycle_is_rejected() {
    let graph = directed_cycle_graph(5).unwrap();
    let err = ConvexityProperties::new(&graph).unwrap_err();
    assert!(matches!(
        err,
        HullError::UnsupportedGraphKind(ref info) if info.code == "directed-graph"
    ));
}

#[test]
fn unknown_labels_are_rejected() {
    let graph = path_graph(3).unwrap();
    let props = ConvexityProperties::new(&graph).unwrap();
    let err = props.hull(&ids(&[0, 17])).unwrap_err();
    assert!(matches!(err, HullError::UnknownVertex(_)));
    assert!(props.is_convex(&ids(&[99])).is_err());
}

#[test]
fn hull_numbers_of_standard_families() {
    let cases: Vec<(&str, SimpleGraph, usize)> = vec![
        ("c5", cycle_graph(5).unwrap(), 3),
        ("c6", cycle_graph(6).unwrap(), 2),
        ("grid", grid_graph(3, 4).unwrap(), 2),
        ("star", star_graph(4).unwrap(), 4),
        ("k5", complete_graph(5).unwrap(), 5),
    ];
    for (name, graph, expected) in cases {
        let props = ConvexityProperties::new(&graph).unwrap();
        assert_eq!(
            props.hull_number(true, false).unwrap().value(),
            expected,
            "hull number of {name}"
        );
    }
}

#[test]
fn geodesic_intervals_come_from_the_cache() {
    let graph = cycle_graph(6).unwrap();
    let props = ConvexityProperties::new(&graph).unwrap();
    let (a, d) = (VertexId::from_raw(0), VertexId::from_raw(3));
    assert_eq!(props.geodesic_interval(&a, &d).unwrap(), ids(&[0, 1, 2, 3, 4, 5]));
    assert_eq!(props.geodesic_interval(&d, &a).unwrap(), ids(&[0, 1, 2, 3, 4, 5]));
    assert_eq!(props.geodesic_interval(&a, &a).unwrap(), ids(&[0]));
    assert_eq!(
        props
            .geodesic_interval(&a, &VertexId::from_raw(2))
            .unwrap(),
        ids(&[0, 1, 2])
    );
}

#[test]
fn convexity_checks_and_empty_hull() {
    let graph = petersen_graph().unwrap();
    let props = ConvexityProperties::new(&graph).unwrap();
    assert!(props.is_convex(&ids(&[1, 2, 3])).unwrap());
    assert!(!props.is_convex(&ids(&[1, 3])).unwrap());
    assert!(props.hull(&[]).unwrap().is_empty());
    assert_eq!(props.hull(&ids(&[3, 1, 3])).unwrap(), ids(&[1, 2, 3]));
    assert_eq!(props.cache().len(), 45);
}
