//! Unit tests for the graph container and the shortest-path engine.
//!
//! All tests use hand-crafted graphs with integer vertices and weights; the
//! engine is generic, so the map-level instantiation is exercised in
//! `campus-nav`.

#[cfg(test)]
mod helpers {
    use crate::WeightedGraph;

    /// The reference walking scenario:
    ///
    /// Vertices {1, 2, 3, 4}, undirected edges
    ///   1-2 (1), 2-3 (2), 1-3 (5), 3-4 (1)
    ///
    /// Shortest 1→3 is 3 (via 2), not the direct 5; shortest 1→4 is 4.
    pub fn campus_graph() -> WeightedGraph<i64, u32> {
        let mut g = WeightedGraph::new();
        for v in 1..=4 {
            g.add_vertex(v);
        }
        for (a, b, w) in [(1, 2, 1), (2, 3, 2), (1, 3, 5), (3, 4, 1)] {
            assert!(g.add_edge(a, b, w));
            assert!(g.add_edge(b, a, w));
        }
        g
    }

    /// Minimum path cost by exhaustive search over all simple paths —
    /// the oracle the engine is checked against on small graphs.
    pub fn brute_force_distance(g: &WeightedGraph<i64, u32>, from: i64, to: i64) -> Option<u32> {
        fn dfs(
            g: &WeightedGraph<i64, u32>,
            current: i64,
            to: i64,
            cost: u32,
            visited: &mut Vec<i64>,
            best: &mut Option<u32>,
        ) {
            if current == to {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
                return;
            }
            let successors: Vec<i64> = g.neighbors(current).collect();
            for n in successors {
                if visited.contains(&n) {
                    continue;
                }
                let Some(w) = g.weight(current, n) else { continue };
                visited.push(n);
                dfs(g, n, to, cost + w, visited, best);
                visited.pop();
            }
        }

        let mut best = None;
        dfs(g, from, to, 0, &mut vec![from], &mut best);
        best
    }
}

// ── Container invariants ──────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use crate::WeightedGraph;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g: WeightedGraph<i64, u32> = WeightedGraph::new();
        assert!(g.add_vertex(7));
        assert!(!g.add_vertex(7));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn add_edge_rejects_missing_endpoints() {
        let mut g: WeightedGraph<i64, u32> = WeightedGraph::new();
        g.add_vertex(1);

        // Neither endpoint auto-creates a vertex.
        assert!(!g.add_edge(1, 2, 10));
        assert!(!g.add_edge(2, 1, 10));
        assert!(!g.add_edge(3, 4, 10));

        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.weight(1, 2), None);
    }

    #[test]
    fn add_edge_overwrites_weight() {
        let mut g: WeightedGraph<i64, u32> = WeightedGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);

        assert!(g.add_edge(1, 2, 10));
        assert!(g.add_edge(1, 2, 3));

        // Last write wins; still exactly one directed edge.
        assert_eq!(g.weight(1, 2), Some(3));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn directed_edges_are_independent() {
        let mut g: WeightedGraph<i64, u32> = WeightedGraph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(1, 2, 5);

        assert_eq!(g.weight(1, 2), Some(5));
        assert_eq!(g.weight(2, 1), None);
    }

    #[test]
    fn neighbors_sorted_and_empty_for_absent() {
        let mut g: WeightedGraph<i64, u32> = WeightedGraph::new();
        for v in [5, 3, 9, 1] {
            g.add_vertex(v);
        }
        for to in [9, 3, 5] {
            g.add_edge(1, to, 1);
        }

        let ns: Vec<i64> = g.neighbors(1).collect();
        assert_eq!(ns, vec![3, 5, 9]);

        assert_eq!(g.neighbors(42).count(), 0);
        assert_eq!(g.neighbors(3).count(), 0);
    }

    #[test]
    fn edge_count_double_counts_reciprocal_pairs() {
        let g = super::helpers::campus_graph();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 8); // 4 undirected connections
    }

    #[test]
    fn vertices_in_key_order() {
        let mut g: WeightedGraph<i64, u32> = WeightedGraph::new();
        for v in [30, 10, 20] {
            g.add_vertex(v);
        }
        let vs: Vec<i64> = g.vertices().collect();
        assert_eq!(vs, vec![10, 20, 30]);
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use crate::{WeightedGraph, shortest_paths};

    #[test]
    fn campus_scenario_distances() {
        let g = super::helpers::campus_graph();
        let sp = shortest_paths(&g, 1);

        assert_eq!(sp.distance(1), Some(0));
        assert_eq!(sp.distance(2), Some(1));
        assert_eq!(sp.distance(3), Some(3)); // via 2, not the direct 5
        assert_eq!(sp.distance(4), Some(4));
    }

    #[test]
    fn source_has_no_predecessor() {
        let g = super::helpers::campus_graph();
        let sp = shortest_paths(&g, 1);
        assert_eq!(sp.predecessor(1), None);
        assert_eq!(sp.predecessor(3), Some(2));
    }

    #[test]
    fn isolated_vertex_is_unreachable() {
        let mut g = super::helpers::campus_graph();
        g.add_vertex(99);

        let sp = shortest_paths(&g, 1);
        assert_eq!(sp.distance(99), None);
        assert_eq!(sp.predecessor(99), None);
        assert!(!sp.is_reachable(99));
    }

    #[test]
    fn unreachable_kept_in_full_maps() {
        let mut g = super::helpers::campus_graph();
        g.add_vertex(99);

        let sp = shortest_paths(&g, 1);
        // Every vertex appears in the maps, reachable or not.
        assert_eq!(sp.distances().len(), 5);
        assert_eq!(sp.predecessors().len(), 5);
        assert_eq!(sp.distances().get(&99), Some(&u32::MAX));
        assert_eq!(sp.predecessors().get(&99), Some(&None));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = super::helpers::campus_graph();
        let a = shortest_paths(&g, 1);
        let b = shortest_paths(&g, 1);
        assert_eq!(a.distances(), b.distances());
        assert_eq!(a.predecessors(), b.predecessors());
    }

    #[test]
    fn equal_cost_tie_breaks_on_vertex_id() {
        // Diamond with equal-cost arms: 1→2→4 and 1→3→4, all weights 1.
        // Vertex 2 pops before vertex 3 at distance 1, so it claims 4 first
        // and 3's later relaxation finds no strict improvement.
        let mut g: WeightedGraph<i64, u32> = WeightedGraph::new();
        for v in 1..=4 {
            g.add_vertex(v);
        }
        for (a, b) in [(1, 2), (1, 3), (2, 4), (3, 4)] {
            g.add_edge(a, b, 1);
        }

        let sp = shortest_paths(&g, 1);
        assert_eq!(sp.distance(4), Some(2));
        assert_eq!(sp.predecessor(4), Some(2));
    }

    #[test]
    fn matches_brute_force_on_all_pairs() {
        // Denser mesh than the campus scenario, plus the isolated vertex 7
        // so the oracle also agrees on the unreachable case.
        let mut g: WeightedGraph<i64, u32> = WeightedGraph::new();
        for v in 1..=7 {
            g.add_vertex(v);
        }
        for (a, b, w) in [
            (1, 2, 4),
            (1, 3, 2),
            (2, 3, 1),
            (2, 4, 5),
            (3, 4, 8),
            (3, 5, 10),
            (4, 5, 2),
            (4, 6, 6),
            (5, 6, 3),
        ] {
            g.add_edge(a, b, w);
            g.add_edge(b, a, w);
        }

        for from in 1..=7 {
            let sp = shortest_paths(&g, from);
            for to in 1..=7 {
                let expected = super::helpers::brute_force_distance(&g, from, to);
                assert_eq!(sp.distance(to), expected, "pair {from}→{to}");
            }
        }
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use crate::shortest_paths;

    #[test]
    fn campus_scenario_path() {
        let g = super::helpers::campus_graph();
        let sp = shortest_paths(&g, 1);
        assert_eq!(sp.path_to(4), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn path_edges_exist_and_sum_to_distance() {
        let g = super::helpers::campus_graph();
        let sp = shortest_paths(&g, 1);

        let path = sp.path_to(4).unwrap();
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&4));

        let mut total = 0;
        for pair in path.windows(2) {
            let w = g.weight(pair[0], pair[1]);
            assert!(w.is_some(), "missing edge {}→{}", pair[0], pair[1]);
            total += w.unwrap();
        }
        assert_eq!(Some(total), sp.distance(4));
    }

    #[test]
    fn destination_equals_source() {
        let g = super::helpers::campus_graph();
        let sp = shortest_paths(&g, 2);
        assert_eq!(sp.path_to(2), Some(vec![2]));
    }

    #[test]
    fn unreachable_destination_has_no_path() {
        let mut g = super::helpers::campus_graph();
        g.add_vertex(99);
        let sp = shortest_paths(&g, 1);
        assert_eq!(sp.path_to(99), None);
    }
}
