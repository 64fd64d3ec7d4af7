/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use graphstat::graphs::random::{BarabasiAlbert, Gilbert};
use graphstat::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn path(n: usize) -> UndirectedGraph {
    UndirectedGraph::from_edges_bounded(n, (1..n).map(|i| (i - 1, i)))
}

fn cycle(n: usize) -> UndirectedGraph {
    UndirectedGraph::from_edges_bounded(n, (0..n).map(|i| (i, (i + 1) % n)))
}

fn clique(n: usize) -> UndirectedGraph {
    UndirectedGraph::from_edges_bounded(
        n,
        (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))),
    )
}

/// Returns a random forest: each node is linked to a random smaller node, or
/// starts a new tree with probability `new_tree`.
fn random_forest(n: usize, new_tree: f64, seed: u64) -> UndirectedGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::empty(n);
    for i in 1..n {
        if !rng.random_bool(new_tree) {
            graph.add_edge_bounded(i, rng.random_range(0..i));
        }
    }
    graph
}

#[test]
fn test_families() -> Result<()> {
    for n in 1..20 {
        assert_eq!(calc_distance(path(n), no_logging![]), Some(n - 1));
        assert_eq!(calc_distance(clique(n), no_logging![]), Some(n.min(2) - 1));
    }
    for n in 3..20 {
        assert_eq!(calc_distance(cycle(n), no_logging![]), Some(n / 2));
    }
    Ok(())
}

#[test]
fn test_path_needs_no_visits() -> Result<()> {
    let report = Diameter::run(path(1000), no_logging![]).unwrap();
    assert_eq!(report.diameter, 999);
    assert_eq!(report.pruned_longest, 999);
    assert_eq!(report.num_visits(), 0);
    Ok(())
}

#[test]
fn test_cycle_with_tails() -> Result<()> {
    // A cycle of length 6 with tails of length 3 and 2 on opposite nodes, and
    // a tail of length 4 on a node adjacent to the first one
    let mut graph = cycle(6);
    graph.add_edges([(0, 6), (6, 7), (7, 8)]);
    graph.add_edges([(3, 9), (9, 10)]);
    graph.add_edges([(1, 11), (11, 12), (12, 13), (13, 14)]);
    let report = Diameter::run(&graph, no_logging![]).unwrap();
    // 14 - 13 - 12 - 11 - 1 - 2 - 3 - 9 - 10
    assert_eq!(report.diameter, 8);
    assert_eq!(report.num_active, 6);
    assert_eq!(naive_diameter(&graph, no_logging![]), Some(8));
    Ok(())
}

#[test]
fn test_disconnected() -> Result<()> {
    // The diameter is the maximum over the components
    let mut graph = clique(4);
    graph.add_edges((10..16).map(|i| (i, i + 1)));
    graph.add_edges([(20, 21), (21, 22), (22, 20)]);
    assert_eq!(calc_distance(&graph, no_logging![]), Some(6));
    assert_eq!(naive_diameter(&graph, no_logging![]), Some(6));
    Ok(())
}

#[test]
fn test_parallel_edges_and_loops() -> Result<()> {
    let mut graph = cycle(5);
    graph.add_edges([(0, 1), (0, 1), (2, 2), (3, 3), (4, 5), (5, 5)]);
    assert_eq!(calc_distance(&graph, no_logging![]), Some(3));
    assert_eq!(naive_diameter(&graph, no_logging![]), Some(3));
    Ok(())
}

#[test]
fn test_agrees_with_naive() -> Result<()> {
    for seed in 0..100 {
        let n = 10 + seed as usize % 40;
        let p = [0.02, 0.05, 0.1, 0.3][seed as usize % 4];
        let graph = Gilbert::new(n, p, seed).generate();
        assert_eq!(
            calc_distance(&graph, no_logging![]),
            naive_diameter(&graph, no_logging![]),
            "Gilbert graph with {} nodes, p = {}, seed {}",
            n,
            p,
            seed
        );
    }
    for seed in 0..50 {
        let graph = BarabasiAlbert::new(80, 1 + seed as usize % 3, seed).generate();
        assert_eq!(
            calc_distance(&graph, no_logging![]),
            naive_diameter(&graph, no_logging![]),
            "Barabási–Albert graph with seed {}",
            seed
        );
    }
    Ok(())
}

#[test]
fn test_pruning_on_forests() -> Result<()> {
    for seed in 0..100 {
        let n = 1 + seed as usize * 3;
        let graph = random_forest(n, [0.0, 0.05, 0.3][seed as usize % 3], seed);
        let pruning = mark_tree(&graph, no_logging![]);
        assert_eq!(pruning.num_active(), 0, "seed {}", seed);
        assert_eq!(
            Some(pruning.longest),
            naive_diameter(&graph, no_logging![]),
            "seed {}",
            seed
        );
        let report = Diameter::run(&graph, no_logging![]).unwrap();
        assert_eq!(report.num_visits(), 0);
    }
    Ok(())
}

#[test]
fn test_pruning_is_a_lower_bound() -> Result<()> {
    let gilbert = (0..60).map(|seed| {
        let p = [0.03, 0.06, 0.15][seed as usize % 3];
        Gilbert::new(10 + seed as usize % 50, p, seed).generate()
    });
    let barabasi_albert =
        (0..40).map(|seed| BarabasiAlbert::new(60, 1 + seed as usize % 2, seed).generate());
    let graphs = gilbert.chain(barabasi_albert);
    for graph in graphs {
        let pruning = mark_tree(&graph, no_logging![]);
        let diameter = naive_diameter(&graph, no_logging![]);
        assert!(Some(pruning.longest) <= diameter);
        let report = Diameter::run(&graph, no_logging![]).unwrap();
        assert_eq!(report.pruned_longest, pruning.longest);
        assert_eq!(report.num_active, pruning.num_active());
        assert_eq!(Some(report.diameter), diameter);
    }
    Ok(())
}

#[cfg_attr(feature = "slow_tests", test)]
#[cfg_attr(not(feature = "slow_tests"), allow(dead_code))]
fn test_large() -> Result<()> {
    env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init()?;
    for seed in 0..5 {
        let graph = random_forest(5000, 0.001, seed);
        let report = Diameter::run(&graph, no_logging![]).unwrap();
        assert_eq!(report.num_visits(), 0);
        assert_eq!(Some(report.diameter), naive_diameter(&graph, no_logging![]));

        // Only the initial triangle survives pruning
        let graph = BarabasiAlbert::new(5000, 1, seed).generate();
        let report = Diameter::run(&graph, no_logging![]).unwrap();
        assert_eq!(report.num_active, 3);
        assert!(report.num_visits() <= 3);
        assert_eq!(Some(report.diameter), naive_diameter(&graph, no_logging![]));

        let graph = Gilbert::new(2000, 0.002, seed).generate();
        assert_eq!(
            calc_distance(&graph, no_logging![]),
            naive_diameter(&graph, no_logging![])
        );
    }
    Ok(())
}
