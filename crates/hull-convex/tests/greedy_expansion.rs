use hull_convex::{Bitset, ConvexityProperties, GreedyExpander};
use hull_core::{RngHandle, VertexId};
use hull_graph::{path_graph, petersen_graph, random_connected_graph};
use proptest::prelude::*;

fn subset(n: usize, mask: u64) -> Bitset {
    Bitset::from_indices(n, (0..n).filter(|i| mask & (1 << i) != 0))
}

proptest! {
    #[test]
    fn expansion_is_maximal_proper_and_convex(
        seed in any::<u64>(),
        n in 3usize..12,
        density in 0.0f64..0.5,
        mask in any::<u64>(),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = random_connected_graph(n, density, &mut rng).unwrap();
        let props = ConvexityProperties::new(&graph).unwrap();
        let engine = props.engine();
        let expander = GreedyExpander::new(engine);

        let start = subset(n, mask);
        let mut expanded = start.clone();
        let result = expander.expand_until_proper(&mut expanded);
        if engine.hull_of(&start).is_full() {
            let err = result.unwrap_err();
            prop_assert_eq!(err.code(), "closure-spans-graph");
            return Ok(());
        }
        result.unwrap();

        prop_assert!(start.is_subset(&expanded));
        prop_assert!(engine.is_convex(&expanded));
        prop_assert!(!expanded.is_full());
        for outside in expanded.complement().iter() {
            let mut grown = expanded.clone();
            grown.insert(outside);
            prop_assert!(engine.hull_of(&grown).is_full());
        }

        let mut again = start.clone();
        expander.expand_until_proper(&mut again).unwrap();
        prop_assert_eq!(again, expanded);
    }
}

#[test]
fn path_expansion_keeps_every_vertex_but_the_far_end() {
    let props = ConvexityProperties::new(&path_graph(5).unwrap()).unwrap();
    let expander = GreedyExpander::new(props.engine());
    let mut set = Bitset::from_indices(5, [0]);
    expander.expand_until_proper(&mut set).unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(props.indexer().label(3), &VertexId::from_raw(3));
}

#[test]
fn generating_input_is_rejected() {
    let props = ConvexityProperties::new(&petersen_graph().unwrap()).unwrap();
    let generators = props.hull_number(false, false).unwrap();
    let hull_convex::HullNumber::Generators(labels) = generators else {
        panic!("generators were requested");
    };
    let mut set = props.indexer().to_bitset(&labels).unwrap();
    let before = set.clone();
    let err = GreedyExpander::new(props.engine())
        .expand_until_proper(&mut set)
        .unwrap_err();
    assert_eq!(err.code(), "closure-spans-graph");
    assert_eq!(set, before);
}
