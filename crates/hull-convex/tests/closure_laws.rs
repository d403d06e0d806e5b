use hull_convex::{Bitset, ConvexityProperties};
use hull_core::{RngHandle, VertexId};
use hull_graph::random_connected_graph;
use proptest::prelude::*;

fn subset(n: usize, mask: u64) -> Bitset {
    Bitset::from_indices(n, (0..n).filter(|i| mask & (1 << i) != 0))
}

proptest! {
    #[test]
    fn hull_is_a_closure_operator(
        seed in any::<u64>(),
        n in 1usize..14,
        density in 0.0f64..0.5,
        mask_a in any::<u64>(),
        mask_b in any::<u64>(),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = random_connected_graph(n, density, &mut rng).unwrap();
        let props = ConvexityProperties::new(&graph).unwrap();
        let engine = props.engine();

        let small = subset(n, mask_a & mask_b);
        let large = subset(n, mask_a);
        let hull_small = engine.hull_of(&small);
        let hull_large = engine.hull_of(&large);

        prop_assert!(small.is_subset(&hull_small));
        prop_assert_eq!(engine.hull_of(&hull_small), hull_small.clone());
        prop_assert!(hull_small.is_subset(&hull_large));
        prop_assert!(engine.is_convex(&hull_large));
    }

    #[test]
    fn singletons_are_convex(seed in any::<u64>(), n in 1usize..14) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = random_connected_graph(n, 0.3, &mut rng).unwrap();
        let props = ConvexityProperties::new(&graph).unwrap();
        for raw in 0..n as u64 {
            let v = VertexId::from_raw(raw);
            prop_assert_eq!(props.hull(&[v]).unwrap(), vec![v]);
        }
    }

    #[test]
    fn hull_contains_every_geodesic_interval(
        seed in any::<u64>(),
        n in 2usize..12,
        mask in any::<u64>(),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = random_connected_graph(n, 0.25, &mut rng).unwrap();
        let props = ConvexityProperties::new(&graph).unwrap();
        let hull = props.engine().hull_of(&subset(n, mask));
        let members: Vec<usize> = hull.iter().collect();
        for &i in &members {
            for &j in &members {
                if i < j {
                    prop_assert!(props.cache().interval(i, j).is_subset(&hull));
                }
            }
        }
    }
}
