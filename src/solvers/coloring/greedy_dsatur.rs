use std::cmp::Ordering;

use bit_set::BitSet;
use log::{debug, trace};
use priority_queue::PriorityQueue;

use crate::color::{Color, ColoringInstance, Coloring, Colored};
use crate::error::ColoringError;
use crate::indexed::{IndexedGraph, first_fit};
use crate::partial::new_partial;

#[derive(Debug, PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    v: usize,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| other.v.cmp(&self.v)) // smallest vertex first
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored vertex that sees the most colors (break ties by the largest degree,
       then by the smallest identifier)
    2. assign it the first color available
    3. mark all its uncolored neighbors seeing this color
    4. repeat until a proper coloring is found

Vertices colored by `partial` keep their color. Fails only if `partial` is invalid.
*/
pub fn greedy_dsatur(
    inst:&dyn ColoringInstance,
    partial:Option<&Coloring>
) -> Result<Colored, ColoringError> {
    let graph = IndexedGraph::new(inst);
    let (colors, palette) = new_partial(&graph, partial)?;
    let res = palette.to_colored(&graph, &dsatur_complete(&graph, colors));
    debug!("DSATUR: {} colors on {} vertices", res.k, graph.n());
    Ok(res)
}

/// colors every uncolored vertex of colors (colors[v] -> color assigned to vertex v)
pub(crate) fn dsatur_complete(graph:&IndexedGraph, mut colors:Vec<Option<Color>>) -> Vec<Option<Color>> {
    let n = graph.n();
    let mut adj_colors:Vec<BitSet> = (0..n) // adj_colors[v] -> colors v sees
        .map(|v| graph.neighbor_colors(&colors, v))
        .collect();
    let mut remaining_vertices:PriorityQueue<usize, DSatInfo> = PriorityQueue::new();
    for v in (0..n).filter(|v| colors[*v].is_none()) {
        remaining_vertices.push(v, DSatInfo { dsat:adj_colors[v].len(), degree:graph.degree(v), v });
    }
    let mut nb_colored = n - remaining_vertices.len();
    while let Some((current_vertex, _)) = remaining_vertices.pop() {
        let color = first_fit(&adj_colors[current_vertex]);
        colors[current_vertex] = Some(color);
        nb_colored += 1;
        if nb_colored % 1000 == 0 { trace!("colored {} / {}...", nb_colored, n); }
        // update saturation degree information
        for u in graph.adj(current_vertex) {
            if colors[*u].is_none() && adj_colors[*u].insert(color) {
                remaining_vertices.change_priority_by(u, |p| { p.dsat += 1; });
            }
        }
    }
    colors
}
