use hamcycle::{
    solve_fork_join, solve_fork_join_with, solve_thread_budget, DirectedGraph, RayonExecutor,
    SequentialExecutor,
};
use proptest::prelude::*;

/// Plain recursive DFS, used as the ground truth for existence.
fn cycle_exists(graph: &DirectedGraph, start: usize) -> bool {
    fn walk(graph: &DirectedGraph, start: usize, path: &mut Vec<usize>) -> bool {
        let current = *path.last().unwrap();
        if path.len() == graph.vertex_count() {
            return graph.has_edge(current, start);
        }
        for &next in graph.neighbors(current) {
            if !path.contains(&next) {
                path.push(next);
                let found = walk(graph, start, path);
                path.pop();
                if found {
                    return true;
                }
            }
        }
        false
    }
    walk(graph, start, &mut vec![start])
}

fn check_cycle(graph: &DirectedGraph, start: usize, path: &[usize]) -> Result<(), TestCaseError> {
    let n = graph.vertex_count();
    prop_assert_eq!(path.len(), n);
    prop_assert_eq!(path[0], start);
    let mut seen = vec![false; n];
    for &v in path {
        prop_assert!(!seen[v], "vertex {} repeated in {:?}", v, path);
        seen[v] = true;
    }
    for w in path.windows(2) {
        prop_assert!(graph.has_edge(w[0], w[1]), "missing edge {}->{}", w[0], w[1]);
    }
    prop_assert!(graph.has_edge(path[n - 1], start), "no closing edge in {:?}", path);
    Ok(())
}

/// Small random digraphs with a start vertex and a thread budget.
fn arb_case() -> impl Strategy<Value = (DirectedGraph, usize, usize)> {
    (1usize..=7)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((0..n, 0..n), 0..=n * n),
                0..n,
                1usize..=9,
            )
        })
        .prop_map(|(n, edges, start, budget)| {
            let mut graph = DirectedGraph::new(n);
            for (u, v) in edges {
                graph.add_edge(u, v).unwrap();
            }
            (graph, start, budget)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn thread_budget_returns_valid_cycles((graph, start, budget) in arb_case()) {
        let expected = cycle_exists(&graph, start);
        let found = solve_thread_budget(&graph, start, budget).unwrap();
        prop_assert_eq!(found.is_some(), expected);
        if let Some(cycle) = found {
            check_cycle(&graph, start, cycle.vertices())?;
        }
    }

    #[test]
    fn fork_join_returns_valid_cycles((graph, start, _budget) in arb_case()) {
        let expected = cycle_exists(&graph, start);
        let found = solve_fork_join(&graph, start).unwrap();
        prop_assert_eq!(found.is_some(), expected);
        if let Some(cycle) = found {
            check_cycle(&graph, start, cycle.vertices())?;
        }
    }

    #[test]
    fn strategies_agree_on_existence((graph, start, budget) in arb_case()) {
        let before = graph.clone();
        let executor = RayonExecutor::with_threads(3).unwrap();

        let a = solve_thread_budget(&graph, start, budget).unwrap();
        let b = solve_fork_join_with(&graph, start, &executor).unwrap();
        let c = solve_fork_join_with(&graph, start, &SequentialExecutor).unwrap();

        prop_assert_eq!(a.is_some(), b.is_some());
        prop_assert_eq!(b.is_some(), c.is_some());
        prop_assert_eq!(&graph, &before);
    }

    #[test]
    fn budget_one_matches_sequential_fork_join((graph, start, _budget) in arb_case()) {
        let a = solve_thread_budget(&graph, start, 1).unwrap();
        let b = solve_fork_join_with(&graph, start, &SequentialExecutor).unwrap();
        prop_assert_eq!(a, b);
    }
}
