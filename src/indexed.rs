use std::collections::HashMap;

use bit_set::BitSet;
use log::warn;

use crate::color::{Color, ColoringInstance, Colored, Coloring, VertexId};

/**
dense view of an instance built once per call.

vertices are renumbered 0..n by increasing identifier, so breaking ties by the
smallest index is the same as breaking them by the smallest identifier.
Self-loops are dropped and adjacency lists are symmetric and deduplicated.
*/
#[derive(Debug)]
pub(crate) struct IndexedGraph {
    /// ids[i]: identifier of the vertex of index i
    ids: Vec<VertexId>,
    /// index of each identifier
    index: HashMap<VertexId, usize>,
    /// adj_list[i]: indices adjacent to i
    adj_list: Vec<Vec<usize>>,
}

impl IndexedGraph {
    pub fn new(inst:&dyn ColoringInstance) -> Self {
        let mut ids = inst.vertices();
        ids.sort_unstable();
        ids.dedup();
        let index:HashMap<VertexId, usize> = ids.iter().enumerate()
            .map(|(i,v)| (*v,i))
            .collect();
        let mut adj_list = vec![Vec::new() ; ids.len()];
        let mut nb_self_loops = 0;
        for (i,v) in ids.iter().enumerate() {
            for w in inst.neighbors(*v) {
                if w == *v {
                    nb_self_loops += 1;
                    continue;
                }
                // neighbors outside of the vertex list are not part of the graph
                if let Some(j) = index.get(&w) {
                    adj_list[i].push(*j);
                    adj_list[*j].push(i);
                }
            }
        }
        for l in adj_list.iter_mut() {
            l.sort_unstable();
            l.dedup();
        }
        if nb_self_loops > 0 {
            warn!("ignoring {} self-loop(s) while coloring", nb_self_loops);
        }
        Self { ids, index, adj_list }
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.ids.len() }

    /// identifier of the vertex of index i
    pub fn id(&self, i:usize) -> VertexId { self.ids[i] }

    /// index of a vertex identifier (None if not in the graph)
    pub fn index_of(&self, v:VertexId) -> Option<usize> { self.index.get(&v).copied() }

    /// indices adjacent to i
    pub fn adj(&self, i:usize) -> &[usize] { &self.adj_list[i] }

    pub fn degree(&self, i:usize) -> usize { self.adj_list[i].len() }

    /// adj_matrix[i] represents a bitset of the neighbors of i
    pub fn adj_matrix(&self) -> Vec<BitSet> {
        self.adj_list.iter()
            .map(|l| l.iter().copied().collect())
            .collect()
    }

    /// colors already used by the neighbors of i
    pub fn neighbor_colors(&self, colors:&[Option<Color>], i:usize) -> BitSet {
        self.adj_list[i].iter().filter_map(|u| colors[*u]).collect()
    }

    /// translates colors by index back to vertex identifiers
    pub fn to_colored(&self, colors:&[Option<Color>]) -> Colored {
        let coloring:Coloring = colors.iter().enumerate()
            .filter_map(|(i,c)| c.map(|c| (self.ids[i], c)))
            .collect();
        Colored::new(coloring)
    }
}

/// smallest color that is not in seen
pub(crate) fn first_fit(seen:&BitSet) -> Color {
    let mut color:Color = 0;
    while seen.contains(color) { color += 1; }
    color
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::compact_instance::CompactInstance;

    #[test]
    fn test_dense_renumbering() {
        let mut inst = CompactInstance::from_edges(vec![42, -3, 7], &[(42,-3), (7,42)]);
        inst.add_edge(7, 7);
        let graph = IndexedGraph::new(&inst);
        assert_eq!(graph.n(), 3);
        assert_eq!(graph.id(0), -3);
        assert_eq!(graph.index_of(42), Some(2));
        assert_eq!(graph.index_of(8), None);
        assert_eq!(graph.adj(2), &[0,1]);
        assert_eq!(graph.adj(1), &[2]); // self-loop dropped
        assert!(graph.adj_matrix()[0].contains(2));
    }

    #[test]
    fn test_first_fit() {
        let seen:BitSet = vec![0,1,3].into_iter().collect();
        assert_eq!(first_fit(&seen), 2);
        assert_eq!(first_fit(&BitSet::new()), 0);
    }
}
