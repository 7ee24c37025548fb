use std::collections::{BTreeMap, BTreeSet};

use log::info;
use serde::Serialize;

/** Vertex Id (opaque handle given by the instance) */
pub type VertexId = i64;

/** Color label. Only distinctness matters. */
pub type Color = usize;

/** maps every colored vertex to its color */
pub type Coloring = BTreeMap<VertexId, Color>;

/** read-only graph the algorithms color.

Only `vertices` and `neighbors` are required. Both must describe an undirected
graph that does not change during a call. Self-loops (`u` in `neighbors(u)`) are
ignored by every algorithm.
*/
pub trait ColoringInstance {
    /// every vertex of the graph (order is not meaningful)
    fn vertices(&self) -> Vec<VertexId>;

    /// list of vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> Vec<VertexId>;

    /// number of vertices
    fn nb_vertices(&self) -> usize { self.vertices().len() }

    /// number of distinct neighbors of u (self-loops excluded)
    fn degree(&self, u:VertexId) -> usize {
        let neighbors:BTreeSet<VertexId> = self.neighbors(u).into_iter()
            .filter(|v| *v != u)
            .collect();
        neighbors.len()
    }

    /// logs statistics of the instance
    fn display_statistics(&self) {
        let degrees:Vec<usize> = self.vertices().iter().map(|v| self.degree(*v)).collect();
        info!("\t{} \t vertices", degrees.len());
        info!("\t{} \t edges", degrees.iter().sum::<usize>() / 2);
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            info!("\t{} \t min degree", min);
            info!("\t{} \t max degree", max);
        }
    }
}

/** result of a coloring algorithm: a complete coloring and its number of colors */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Colored {
    /// number of distinct colors used
    pub k: usize,
    /// color of every vertex of the instance
    pub colors: Coloring,
}

impl Colored {
    /// builds a result and counts the distinct colors of the coloring
    pub fn new(colors:Coloring) -> Self {
        let k = color_classes(&colors).len();
        Self { k, colors }
    }
}

/** groups a coloring by color: color -> vertices holding it.
Its size is the number of colors actually used (labels need not be contiguous).
*/
pub fn color_classes(colors:&Coloring) -> BTreeMap<Color, BTreeSet<VertexId>> {
    let mut res:BTreeMap<Color, BTreeSet<VertexId>> = BTreeMap::new();
    for (v,c) in colors {
        res.entry(*c).or_default().insert(*v);
    }
    res
}

/// outcome of the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible coloring using this many colors
    Ok(usize),
    /// vertex of the instance without a color
    Missing(VertexId),
    /// colored vertex that does not belong to the instance
    Extra(VertexId),
    /// two adjacent vertices share a color
    Conflict(VertexId, VertexId),
}

/**
checks that a coloring is complete and proper.
returns the number of colors if it is the case
*/
pub fn checker(inst:&dyn ColoringInstance, colors:&Coloring) -> CheckerResult {
    let vertices:BTreeSet<VertexId> = inst.vertices().into_iter().collect();
    // check that all vertices are colored
    for v in &vertices {
        if !colors.contains_key(v) { return CheckerResult::Missing(*v); }
    }
    if let Some(v) = colors.keys().find(|v| !vertices.contains(v)) {
        return CheckerResult::Extra(*v);
    }
    // check conflicts
    for u in &vertices {
        for v in inst.neighbors(*u) {
            if v != *u && colors.get(&v) == colors.get(u) {
                return CheckerResult::Conflict(*u, v);
            }
        }
    }
    CheckerResult::Ok(color_classes(colors).len())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::compact_instance::CompactInstance;

    fn path() -> CompactInstance {
        CompactInstance::from_edges(vec![10, 20, 30], &[(10,20), (20,30)])
    }

    #[test]
    fn test_color_classes_non_contiguous() {
        let colors:Coloring = vec![(10, 4), (20, 0), (30, 4)].into_iter().collect();
        let classes = color_classes(&colors);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[&4], vec![10, 30].into_iter().collect());
        assert_eq!(Colored::new(colors).k, 2);
    }

    #[test]
    fn test_colored_to_json() {
        let colors:Coloring = vec![(-2, 1), (7, 0)].into_iter().collect();
        let value = serde_json::to_value(&Colored::new(colors)).unwrap();
        assert_eq!(value, serde_json::json!({"k": 2, "colors": {"-2": 1, "7": 0}}));
    }

    #[test]
    fn test_checker() {
        let inst = path();
        let ok:Coloring = vec![(10, 1), (20, 0), (30, 1)].into_iter().collect();
        assert_eq!(checker(&inst, &ok), CheckerResult::Ok(2));
        let conflict:Coloring = vec![(10, 0), (20, 0), (30, 1)].into_iter().collect();
        assert_eq!(checker(&inst, &conflict), CheckerResult::Conflict(10, 20));
        let missing:Coloring = vec![(10, 0), (20, 1)].into_iter().collect();
        assert_eq!(checker(&inst, &missing), CheckerResult::Missing(30));
        let extra:Coloring = vec![(10, 0), (20, 1), (30, 0), (40, 0)].into_iter().collect();
        assert_eq!(checker(&inst, &extra), CheckerResult::Extra(40));
    }

    #[test]
    fn test_degree_ignores_self_loops() {
        let mut inst = path();
        inst.add_edge(20, 20);
        assert_eq!(inst.degree(20), 2);
    }
}
