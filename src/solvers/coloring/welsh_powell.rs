use log::debug;

use crate::color::{ColoringInstance, Coloring, Colored};
use crate::error::ColoringError;
use crate::indexed::{IndexedGraph, first_fit};
use crate::partial::new_partial;

/** Welsh-Powell greedy. Sorts the vertices once by decreasing degree (break ties by the
smallest identifier), then assigns to each uncolored vertex the first color available.
Unlike DSATUR, the order does not depend on the coloring built so far.

Vertices colored by `partial` keep their color. Fails only if `partial` is invalid.
*/
pub fn welsh_powell(
    inst:&dyn ColoringInstance,
    partial:Option<&Coloring>
) -> Result<Colored, ColoringError> {
    let graph = IndexedGraph::new(inst);
    let (mut colors, palette) = new_partial(&graph, partial)?;
    let mut ranked_vertices:Vec<usize> = (0..graph.n())
        .filter(|v| colors[*v].is_none())
        .collect();
    ranked_vertices.sort_by(|a,b| graph.degree(*b).cmp(&graph.degree(*a)).then_with(|| a.cmp(b)));
    for v in ranked_vertices {
        colors[v] = Some(first_fit(&graph.neighbor_colors(&colors, v)));
    }
    let res = palette.to_colored(&graph, &colors);
    debug!("Welsh-Powell: {} colors on {} vertices", res.k, graph.n());
    Ok(res)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::compact_instance::CompactInstance;

    #[test]
    fn test_star_and_path() {
        // star centered on 4 plus the path 5-6-7
        let inst = CompactInstance::from_edges(vec![], &[(4,0), (4,1), (4,2), (5,6), (6,7)]);
        let res = welsh_powell(&inst, None).unwrap();
        let expected:Coloring = vec![
            (0,1), (1,1), (2,1), (4,0), (5,1), (6,0), (7,1)
        ].into_iter().collect();
        assert_eq!(res.colors, expected);
        assert_eq!(res.k, 2);
    }

    #[test]
    fn test_order_is_static() {
        // crown graph on 3+3 vertices ordered so that first-fit needs 3 colors:
        // a_i adjacent to b_j iff i != j, ids a0=0,b0=1,a1=2,b1=3,a2=4,b2=5
        let inst = CompactInstance::from_edges(vec![], &[
            (0,3), (0,5), (2,1), (2,5), (4,1), (4,3),
        ]);
        let res = welsh_powell(&inst, None).unwrap();
        assert_eq!(res.k, 3);
    }

    #[test]
    fn test_invalid_partial() {
        let inst = CompactInstance::from_edges(vec![], &[(0,1)]);
        let partial:Coloring = vec![(0,2), (1,2)].into_iter().collect();
        assert_eq!(
            welsh_powell(&inst, Some(&partial)),
            Err(ColoringError::InvalidPartial { u:0, v:1, color:2 })
        );
    }
}
