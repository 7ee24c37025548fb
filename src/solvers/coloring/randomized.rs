use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::color::{ColoringInstance, Coloring, Colored};
use crate::error::ColoringError;
use crate::indexed::{IndexedGraph, first_fit};
use crate::partial::new_partial;

/** greedy coloring following a random vertex order.
The order is a shuffle (by `rng`) of the uncolored vertices sorted by identifier:
the same graph, partial coloring and generator state give the same coloring.

Vertices colored by `partial` keep their color. Fails only if `partial` is invalid.
*/
pub fn randomized<R:Rng + ?Sized>(
    inst:&dyn ColoringInstance,
    partial:Option<&Coloring>,
    rng:&mut R,
) -> Result<Colored, ColoringError> {
    let graph = IndexedGraph::new(inst);
    let (mut colors, palette) = new_partial(&graph, partial)?;
    let mut order:Vec<usize> = (0..graph.n())
        .filter(|v| colors[*v].is_none())
        .collect();
    order.shuffle(rng);
    for v in order {
        colors[v] = Some(first_fit(&graph.neighbor_colors(&colors, v)));
    }
    let res = palette.to_colored(&graph, &colors);
    debug!("randomized greedy: {} colors on {} vertices", res.k, graph.n());
    Ok(res)
}
