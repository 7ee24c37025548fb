use bit_set::BitSet;
use log::debug;

use crate::color::{ColoringInstance, VertexId};
use crate::indexed::IndexedGraph;

/** implements a greedy algorithm that finds a "large" size clique.
The algorithm chooses the vertex with the largest degree. It marks as "candidates" its neighbors.
Then, while the set of candidates is not empty, choose the candidate with the largest degree
(break ties by the smallest identifier).
*/
pub fn greedy_clique(inst:&dyn ColoringInstance) -> Vec<VertexId> {
    let graph = IndexedGraph::new(inst);
    indexed_greedy_clique(&graph).into_iter().map(|v| graph.id(v)).collect()
}

/// greedy clique on a dense graph (returns indices)
pub(crate) fn indexed_greedy_clique(graph:&IndexedGraph) -> Vec<usize> {
    let mut candidates:BitSet = (0..graph.n()).collect();
    let mut res = Vec::new();
    loop {
        let next = candidates.iter()
            .max_by(|a,b| graph.degree(*a).cmp(&graph.degree(*b)).then_with(|| b.cmp(a)));
        let current_vertex = match next {
            None => break,
            Some(v) => v,
        };
        // insert the current vertex as part of the clique solution
        res.push(current_vertex);
        // only its neighbors remain candidates
        let neighbors:BitSet = graph.adj(current_vertex).iter().copied().collect();
        candidates.intersect_with(&neighbors);
    }
    debug!("greedy clique: {}", res.len());
    res
}
