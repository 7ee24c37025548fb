use bit_set::BitSet;
use log::debug;

use crate::color::{Color, ColoringInstance, Coloring, Colored};
use crate::error::ColoringError;
use crate::indexed::IndexedGraph;
use crate::partial::new_partial;

/**
bitset-based DSATUR with the PASS selection rule (San Segundo, doi:10.1016/j.cor.2011.10.008).

Keeps for every uncolored vertex its domain: the colors of the palette none of its
neighbors uses. The saturation degree is `nb_colors - |domain|` and the first
available color is the first element of the domain, so neither requires scanning
the neighborhood. Neighborhoods are adjacency-matrix rows intersected with the
uncolored set.

Ties between vertices of maximum saturation are broken by PASS: prefer the vertex
whose available colors (the next new color included) are shared the most by its
tied neighbors, then the largest degree, then the smallest identifier.
*/
#[derive(Debug)]
struct BitsetDsatur<'a> {
    graph: &'a IndexedGraph,
    /// adj_matrix[v]: neighbors of v
    adj_matrix: Vec<BitSet>,
    /// uncolored vertices
    uncolored: BitSet,
    /// domain[v]: colors in 0..nb_colors available to v
    domain: Vec<BitSet>,
    /// palette size (largest color used + 1)
    nb_colors: usize,
    /// colors[v] -> color assigned to vertex v
    colors: Vec<Option<Color>>,
}

impl<'a> BitsetDsatur<'a> {
    fn new(graph:&'a IndexedGraph, colors:Vec<Option<Color>>) -> Self {
        let n = graph.n();
        let nb_colors = colors.iter().flatten().max().map_or(0, |c| c + 1);
        let uncolored:BitSet = (0..n).filter(|v| colors[*v].is_none()).collect();
        let mut domain = vec![BitSet::default() ; n];
        for v in &uncolored {
            let seen = graph.neighbor_colors(&colors, v);
            domain[v] = (0..nb_colors).filter(|c| !seen.contains(*c)).collect();
        }
        Self { graph, adj_matrix: graph.adj_matrix(), uncolored, domain, nb_colors, colors }
    }

    fn saturation(&self, v:usize) -> usize { self.nb_colors - self.domain[v].len() }

    /// number of (tied neighbor, shared available color) pairs of v. The next new
    /// color is available to every uncolored vertex.
    fn same_available(&self, v:usize, tied:&BitSet) -> usize {
        self.adj_matrix[v].intersection(tied)
            .map(|u| self.domain[v].intersection(&self.domain[u]).count() + 1)
            .sum()
    }

    /// uncolored vertex with maximum saturation degree, ties broken by PASS
    fn next_vertex(&self) -> Option<usize> {
        let max_saturation = self.uncolored.iter().map(|v| self.saturation(v)).max()?;
        let tied:BitSet = self.uncolored.iter()
            .filter(|v| self.saturation(*v) == max_saturation)
            .collect();
        if tied.len() == 1 {
            return tied.iter().next();
        }
        tied.iter()
            .map(|v| (v, self.same_available(v, &tied)))
            .max_by(|(a,same_a),(b,same_b)| {
                same_a.cmp(same_b)
                    .then_with(|| self.graph.degree(*a).cmp(&self.graph.degree(*b)))
                    .then_with(|| b.cmp(a))
            })
            .map(|(v,_)| v)
    }

    fn assign(&mut self, v:usize) {
        let color = match self.domain[v].iter().next() {
            Some(c) => c,
            None => { // open a new color, available to every uncolored vertex for now
                let c = self.nb_colors;
                self.nb_colors += 1;
                for u in self.uncolored.iter() {
                    self.domain[u].insert(c);
                }
                c
            }
        };
        self.colors[v] = Some(color);
        self.uncolored.remove(v);
        for u in self.adj_matrix[v].intersection(&self.uncolored) {
            self.domain[u].remove(color);
        }
    }

    fn run(mut self) -> Vec<Option<Color>> {
        while let Some(v) = self.next_vertex() {
            self.assign(v);
        }
        self.colors
    }
}

/** San Segundo's bitset DSATUR: saturation and first-fit as in
[`greedy_dsatur`](super::greedy_dsatur::greedy_dsatur), ties broken by PASS.

Vertices colored by `partial` keep their color. Fails only if `partial` is invalid.
*/
pub fn san_segundo(
    inst:&dyn ColoringInstance,
    partial:Option<&Coloring>
) -> Result<Colored, ColoringError> {
    let graph = IndexedGraph::new(inst);
    let (colors, palette) = new_partial(&graph, partial)?;
    let res = palette.to_colored(&graph, &BitsetDsatur::new(&graph, colors).run());
    debug!("San Segundo: {} colors on {} vertices", res.k, graph.n());
    Ok(res)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::compact_instance::CompactInstance;

    #[test]
    fn test_domains_with_gap_in_partial() {
        // 0-1-2 path, 3 isolated. 1 has color 3: colors 0..3 are free for the others.
        let inst = CompactInstance::from_edges(vec![3], &[(0,1), (1,2)]);
        let partial:Coloring = vec![(1,3)].into_iter().collect();
        let graph = IndexedGraph::new(&inst);
        let (colors, _) = new_partial(&graph, Some(&partial)).unwrap();
        let space = BitsetDsatur::new(&graph, colors);
        assert_eq!(space.nb_colors, 4);
        assert_eq!(space.saturation(0), 1);
        assert_eq!(space.saturation(3), 0);
        let res = san_segundo(&inst, Some(&partial)).unwrap();
        let expected:Coloring = vec![(0,0), (1,3), (2,0), (3,0)].into_iter().collect();
        assert_eq!(res.colors, expected);
    }

    /// path 0-1-2-3 plus the triangle 1-4-5
    fn kite_tail() -> CompactInstance {
        CompactInstance::from_edges(vec![], &[(0,1), (1,2), (2,3), (1,4), (1,5), (4,5)])
    }

    #[test]
    fn test_pass_prefers_shared_colors() {
        // after 1 takes color 0, its neighbors 0, 2, 4, 5 are tied (saturation 1).
        // 4 and 5 are adjacent and share the new color: PASS picks 4, DSATUR picks 2.
        let inst = kite_tail();
        let graph = IndexedGraph::new(&inst);
        let mut space = BitsetDsatur::new(&graph, vec![None ; graph.n()]);
        assert_eq!(space.next_vertex(), Some(1));
        space.assign(1);
        let tied:BitSet = vec![0, 2, 4, 5].into_iter().collect();
        assert_eq!(space.same_available(4, &tied), 1);
        assert_eq!(space.same_available(2, &tied), 0);
        assert_eq!(space.next_vertex(), Some(4));
        let res = san_segundo(&inst, None).unwrap();
        assert_eq!(res.k, 3);
        assert_eq!(res.colors[&4], 1);
    }

    #[test]
    fn test_huge_partial_label() {
        let inst = kite_tail();
        for label in [Color::MAX, 1 << 40].iter() {
            let partial:Coloring = vec![(1,*label)].into_iter().collect();
            let res = san_segundo(&inst, Some(&partial)).unwrap();
            assert_eq!(res.colors[&1], *label);
            assert_eq!(res.colors[&0], 0);
            assert_eq!(res.k, 3);
        }
    }
}
