use std::collections::BTreeSet;

use crate::color::{Color, ColoringInstance, Coloring, Colored};
use crate::error::ColoringError;
use crate::indexed::IndexedGraph;

/**
order-preserving renumbering of the color labels a call may produce.

Holds the labels of the partial coloring plus the n+1 smallest other labels.
First-fit never needs a label outside of this set, so the algorithms work on
positions `0..len` (small bitset indices) whatever the caller's labels are, and
the smallest position available is also the smallest label available.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Palette {
    /// labels sorted by increasing value
    labels: Vec<Color>,
}

impl Palette {
    fn new(used:&BTreeSet<Color>, n:usize) -> Self {
        let mut labels = used.clone();
        labels.extend((0..).filter(|c| !used.contains(c)).take(n+1));
        Self { labels: labels.into_iter().collect() }
    }

    /// position of a label
    fn position(&self, label:Color) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }

    /// label at a given position
    pub fn label(&self, i:usize) -> Color {
        self.labels.get(i).copied().unwrap_or(i)
    }

    /// translates positions back to labels and vertex identifiers
    pub fn to_colored(&self, graph:&IndexedGraph, colors:&[Option<Color>]) -> Colored {
        let labels:Vec<Option<Color>> = colors.iter()
            .map(|c| c.map(|c| self.label(c)))
            .collect();
        graph.to_colored(&labels)
    }
}

/**
checks a caller-supplied partial coloring and returns the private copy the
algorithms start from (colors[i]: palette position of the color of the vertex of
index i) with the palette that translates positions back to labels.

The partial coloring is valid if every vertex it names is in the graph and no
two adjacent vertices share a color. None and an empty map are always valid.
*/
pub(crate) fn new_partial(
    graph:&IndexedGraph,
    partial:Option<&Coloring>
) -> Result<(Vec<Option<Color>>, Palette), ColoringError> {
    let mut colors = vec![None ; graph.n()];
    let partial = match partial {
        None => return Ok((colors, Palette::new(&BTreeSet::new(), graph.n()))),
        Some(p) => p,
    };
    for (v,c) in partial {
        match graph.index_of(*v) {
            None => return Err(ColoringError::UnknownVertex(*v)),
            Some(i) => colors[i] = Some(*c),
        }
    }
    for i in 0..graph.n() {
        let color = match colors[i] {
            None => continue,
            Some(c) => c,
        };
        if let Some(j) = graph.adj(i).iter().find(|j| **j > i && colors[**j] == Some(color)) {
            return Err(ColoringError::InvalidPartial { u: graph.id(i), v: graph.id(*j), color });
        }
    }
    let palette = Palette::new(&partial.values().copied().collect(), graph.n());
    let positions = colors.iter()
        .map(|c| c.and_then(|c| palette.position(c)))
        .collect();
    Ok((positions, palette))
}

/**
validates a partial coloring against an instance.
returns a copy of it if it is proper.
*/
pub fn validate_partial(
    inst:&dyn ColoringInstance,
    partial:Option<&Coloring>
) -> Result<Coloring, ColoringError> {
    let graph = IndexedGraph::new(inst);
    let (colors, palette) = new_partial(&graph, partial)?;
    Ok(palette.to_colored(&graph, &colors).colors)
}
