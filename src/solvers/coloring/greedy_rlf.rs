use bit_set::BitSet;
use log::{debug, trace};

use crate::color::{Color, ColoringInstance, Colored};
use crate::indexed::IndexedGraph;

/** implements a greedy RLF algorithm. That colors vertices one color at a time
    1. selects the uncolored vertex with the largest degree in the uncolored graph
    2. mark its neighbors unreachable
    3. select a reachable vertex that has the most unreachable neighbors
    4. when there are no reachable vertices, start over with a new color

ties are broken by the smallest identifier.
*/
pub fn greedy_rlf(inst:&dyn ColoringInstance) -> Colored {
    let graph = IndexedGraph::new(inst);
    let n:usize = graph.n();
    let mut colors:Vec<Option<Color>> = vec![None ; n];
    let mut colored:BitSet = BitSet::default();
    // uncolored_degree[v]: number of uncolored neighbors of v
    let mut uncolored_degree:Vec<usize> = (0..n).map(|u| graph.degree(u)).collect();
    let mut nb_colored:usize = 0;
    let mut current_color:Color = 0;
    while nb_colored < n { // add a new color until everything is colored
        let mut reachable:BitSet = (0..n).filter(|v| !colored.contains(*v)).collect();
        let mut unreachable:BitSet = BitSet::default();
        // nb_adj_unreachable[v]: number of unreachable neighbors of v
        let mut nb_adj_unreachable:Vec<usize> = vec![0 ; n];
        let mut next = reachable.iter()
            .max_by(|a,b| uncolored_degree[*a].cmp(&uncolored_degree[*b]).then_with(|| b.cmp(a)));
        while let Some(current_vertex) = next {
            colors[current_vertex] = Some(current_color);
            reachable.remove(current_vertex);
            // mark its neighbors unreachable
            for v in graph.adj(current_vertex) {
                if reachable.remove(*v) {
                    unreachable.insert(*v);
                    // every vertex that sees v sees an unreachable vertex more
                    for w in graph.adj(*v) {
                        nb_adj_unreachable[*w] += 1;
                    }
                }
            }
            next = reachable.iter()
                .max_by(|a,b| nb_adj_unreachable[*a].cmp(&nb_adj_unreachable[*b]).then_with(|| b.cmp(a)));
        }
        // commit the color class
        for v in (0..n).filter(|v| colors[*v] == Some(current_color)) {
            colored.insert(v);
            nb_colored += 1;
            for u in graph.adj(v) {
                uncolored_degree[*u] -= 1;
            }
        }
        trace!("color {}: {} / {} colored", current_color, nb_colored, n);
        current_color += 1;
    }
    let res = graph.to_colored(&colors);
    debug!("RLF: {} colors on {} vertices", res.k, n);
    res
}
