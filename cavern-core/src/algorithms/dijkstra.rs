#[cfg(test)]
#[path = "../../tests/unit/algorithms/dijkstra_test.rs"]
mod dijkstra_test;

use crate::models::{Distance, GraphView, NodeId, Route};
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Calculates shortest distances from the source to every reachable node.
pub fn shortest_distances<G: GraphView + ?Sized>(graph: &G, source: NodeId) -> FxHashMap<NodeId, Distance> {
    run_dijkstra(graph, source, None).0
}

/// Finds the shortest (by distance) route between two nodes.
pub fn shortest_path<G: GraphView + ?Sized>(graph: &G, from: NodeId, to: NodeId) -> Option<Route> {
    if !graph.contains(from) || !graph.contains(to) {
        return None;
    }

    let (distances, parents) = run_dijkstra(graph, from, Some(to));
    if !distances.contains_key(&to) {
        return None;
    }

    let mut nodes = vec![to];
    let mut current = to;
    while let Some(&parent) = parents.get(&current) {
        nodes.push(parent);
        current = parent;
    }
    nodes.reverse();

    Route::from_nodes(graph, nodes).ok()
}

type Parents = FxHashMap<NodeId, NodeId>;

fn run_dijkstra<G: GraphView + ?Sized>(
    graph: &G,
    source: NodeId,
    target: Option<NodeId>,
) -> (FxHashMap<NodeId, Distance>, Parents) {
    let mut distances = FxHashMap::<NodeId, Distance>::default();
    let mut parents = Parents::default();

    if !graph.contains(source) {
        return (distances, parents);
    }

    // NOTE node id is a part of the key to keep ties resolved deterministically
    let mut heap = BinaryHeap::<Reverse<(Distance, NodeId)>>::new();
    distances.insert(source, 0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((distance, node))) = heap.pop() {
        if distances.get(&node).is_some_and(|&best| distance > best) {
            continue;
        }

        if target == Some(node) {
            break;
        }

        for &neighbour in graph.neighbours(node) {
            let Some(length) = graph.edge_length(node, neighbour) else { continue };
            let candidate = distance.saturating_add(length);

            if distances.get(&neighbour).is_none_or(|&best| candidate < best) {
                distances.insert(neighbour, candidate);
                parents.insert(neighbour, node);
                heap.push(Reverse((candidate, neighbour)));
            }
        }
    }

    (distances, parents)
}
