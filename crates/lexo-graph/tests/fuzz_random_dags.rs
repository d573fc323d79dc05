use lexo_core::TieBreak;
use lexo_graph::{topological_order, PrecedenceGraph};
use proptest::prelude::*;

proptest! {
    #[test]
    fn random_dags_are_fully_ordered(
        edges in proptest::collection::vec((0u8..20, 0u8..20), 0..60),
        first_seen in any::<bool>(),
    ) {
        let mut graph = PrecedenceGraph::new();
        for (x, y) in edges {
            if x == y {
                continue;
            }
            // orient every edge from the smaller to the larger value so the graph stays acyclic
            let (before, after) = if x < y { (x, y) } else { (y, x) };
            graph.add_precedence(&before, &after).unwrap();
        }
        let tie_break = if first_seen { TieBreak::FirstSeen } else { TieBreak::SymbolOrder };
        let order = topological_order(&graph, tie_break).unwrap();
        prop_assert_eq!(order.len(), graph.len());
        for (before, after) in graph.edges() {
            let b = order.iter().position(|s| *s == before).unwrap();
            let a = order.iter().position(|s| *s == after).unwrap();
            prop_assert!(b < a);
        }
    }
}
