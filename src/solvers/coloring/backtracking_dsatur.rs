use bit_set::BitSet;
use log::{debug, info, warn};

use crate::color::{Color, ColoringInstance, Colored};
use crate::error::{ColoringError, TerminationReason};
use crate::indexed::IndexedGraph;
use crate::solvers::clique::greedy_clique::indexed_greedy_clique;
use crate::solvers::coloring::greedy_dsatur::dsatur_complete;
use crate::terminator::Terminator;


/** represents a decision (assigning color c to vertex v) */
#[derive(Debug, Clone, Copy)]
struct Decision {
    v: usize,
    c: Color,
}

/// either a decision, either a commit
#[derive(Debug)]
enum BacktrackEvent {
    Commit(Decision), // decision to commit
    Restore(Decision) // decision taken
}


/**
Implements a backtracking search space for DSATUR.
*/
#[derive(Debug)]
struct BacktrackingDsaturSpace<'a> {
    /// instance
    graph: &'a IndexedGraph,
    /// set of uncolored vertices
    uncolored: BitSet,
    /// dsat[v]: saturation degree of vertex v
    dsat: Vec<usize>,
    /// colors[i]: color assigned to vertex i
    colors: Vec<Option<Color>>,
    /// number of colors in the search state
    nb_colors: usize,
    /// nb_adj_colored[v][c]: number of vertices adjacent to v colored with c
    nb_adj_colored: Vec<Vec<usize>>,
    /// color_nb_vertices[c]: number of vertices using color c
    color_nb_vertices: Vec<usize>,
    /// number of colors of the best coloring found so far
    upper_bound: usize,
    /// size of the clique colored at the root
    lower_bound: usize,
    /// decision history
    decisions: Vec<BacktrackEvent>,
    /// number of colored vertices
    nb_vertices_colored: usize,
    /// best so far coloring
    best_so_far_coloring: Vec<Option<Color>>,
    /// number of nodes whose children were generated
    nb_expanded: usize,
}


impl<'a> BacktrackingDsaturSpace<'a> {
    /** creates a new backtracking Dsatur search space.
    `initial_clique` is colored 0..|clique| at the root, `best` is a complete coloring
    using `upper_bound` colors.
    */
    fn new(
        graph:&'a IndexedGraph,
        initial_clique:&[usize],
        best:Vec<Option<Color>>,
        upper_bound:usize
    ) -> Self {
        let n = graph.n();
        let mut res = Self {
            graph,
            uncolored: (0..n).collect(),
            dsat: vec![0 ; n],
            colors: vec![None ; n],
            nb_colors: 0,
            nb_adj_colored: vec![vec![0 ; upper_bound] ; n],
            color_nb_vertices: vec![0 ; upper_bound],
            upper_bound,
            lower_bound: initial_clique.len(),
            decisions: Vec::with_capacity(n),
            nb_vertices_colored: 0,
            best_so_far_coloring: best,
            nb_expanded: 0,
        };
        for (i,v) in initial_clique.iter().enumerate() { // color clique vertices
            res.commit(Decision { v:*v, c:i });
        }
        res
    }

    /// finds the next vertex to color (maximum saturation degree, break ties by degree,
    /// then by the smallest vertex)
    fn next_vertex(&self) -> Option<usize> {
        self.uncolored.iter().max_by(|a,b| {
            self.dsat[*a].cmp(&self.dsat[*b])
                .then_with(|| self.graph.degree(*a).cmp(&self.graph.degree(*b)))
                .then_with(|| b.cmp(a))
        })
    }

    /// applies a decision to the search space
    fn commit(&mut self, decision:Decision) {
        let graph = self.graph;
        self.color_nb_vertices[decision.c] += 1;
        self.nb_vertices_colored += 1;
        if decision.c == self.nb_colors {
            self.nb_colors += 1;
        }
        debug_assert!(self.colors[decision.v].is_none());
        self.colors[decision.v] = Some(decision.c);
        for u in graph.adj(decision.v) {
            self.nb_adj_colored[*u][decision.c] += 1;
            // update dsat value of u
            if self.nb_adj_colored[*u][decision.c] == 1 {
                self.dsat[*u] += 1;
            }
        }
        self.uncolored.remove(decision.v);
    }

    /// restores the search space from a decision (does not pop self.decisions)
    fn restore(&mut self, decision:Decision) {
        let graph = self.graph;
        self.color_nb_vertices[decision.c] -= 1;
        self.nb_vertices_colored -= 1;
        // change nb_colors if the last color is removed (c should be the last color)
        if self.color_nb_vertices[decision.c] == 0 {
            debug_assert_eq!(decision.c, self.nb_colors-1);
            self.nb_colors -= 1;
        }
        debug_assert!(self.colors[decision.v].is_some());
        self.colors[decision.v] = None;
        for u in graph.adj(decision.v) {
            self.nb_adj_colored[*u][decision.c] -= 1;
            if self.nb_adj_colored[*u][decision.c] == 0 {
                self.dsat[*u] -= 1;
            }
        }
        self.uncolored.insert(decision.v);
    }

    /// pushes the children of the current node: every used color available for the next
    /// vertex (smallest first), then a single new color if it may still improve the bound
    fn push_next_decisions(&mut self) {
        let v = match self.next_vertex() {
            None => return,
            Some(v) => v,
        };
        let mut candidate_colors:Vec<Color> = (0..self.nb_colors)
            .filter(|c| self.nb_adj_colored[v][*c] == 0).collect();
        if self.nb_colors + 1 < self.upper_bound {
            candidate_colors.push(self.nb_colors);
        }
        for c in candidate_colors.into_iter().rev() {
            let decision = Decision { v, c };
            self.decisions.push(BacktrackEvent::Restore(decision)); // prepare to backtrack
            self.decisions.push(BacktrackEvent::Commit(decision)); // decision to apply
        }
        self.nb_expanded += 1;
    }

    /// backtracking search
    ///
    /// Stores the decisions to be taken in a stack.
    /// pops each decision, try to apply it
    /// when all vertices are assigned, report a new solution.
    /// The terminator is polled before each decision. Returns why the search
    /// stopped early (None if the search space was exhausted or the clique bound reached).
    fn dfs_search(&mut self, terminator:Option<&dyn Terminator>) -> Option<TerminationReason> {
        let n = self.graph.n();
        // populate decisions with the root node children
        self.push_next_decisions();
        while let Some(event) = self.decisions.pop() {
            match event {
                BacktrackEvent::Restore(decision) => { // restore the state
                    self.restore(decision);
                },
                BacktrackEvent::Commit(decision) => { // apply the decision and generate children
                    if let Some(t) = terminator {
                        if t.is_finished() {
                            return Some(t.reason().unwrap_or(TerminationReason::Cancelled));
                        }
                    }
                    self.commit(decision);
                    if self.nb_colors >= self.upper_bound { continue; } // check bound
                    if self.nb_vertices_colored == n {
                        info!("feasible: {} colors", self.nb_colors);
                        self.upper_bound = self.nb_colors;
                        self.best_so_far_coloring = self.colors.clone();
                        if self.upper_bound <= self.lower_bound { return None; }
                    } else {
                        self.push_next_decisions();
                    }
                }
            }
        }
        None
    }
}

/**
exact coloring (DSATUR-based branch & bound).

1. a greedy DSATUR gives the initial upper bound and coloring
2. a greedy clique gives a lower bound and is colored at the root
3. depth-first search, branching on the most saturated vertex, over its available colors
   and at most one new color. Nodes using as many colors as the best coloring are pruned.

Without terminator, the search runs until optimality is proven. With a terminator that
fires, returns `ColoringError::Terminated` carrying the best complete coloring found.
*/
pub fn dsatur_exact(
    terminator:Option<&dyn Terminator>,
    inst:&dyn ColoringInstance
) -> Result<Colored, ColoringError> {
    let graph = IndexedGraph::new(inst);
    let n = graph.n();
    if n == 0 { return Ok(Colored::default()); }
    let initial = dsatur_complete(&graph, vec![None ; n]);
    let upper_bound = graph.to_colored(&initial).k;
    let clique = indexed_greedy_clique(&graph);
    info!("exact DSATUR: upper bound {} (DSATUR), lower bound {} (clique)", upper_bound, clique.len());
    if let Some(t) = terminator {
        if t.is_finished() {
            let reason = t.reason().unwrap_or(TerminationReason::Cancelled);
            warn!("exact DSATUR stopped before searching: {}", reason);
            return Err(ColoringError::Terminated { reason, best: graph.to_colored(&initial) });
        }
    }
    if clique.len() >= upper_bound {
        debug!("DSATUR coloring is optimal (matches the clique)");
        return Ok(graph.to_colored(&initial));
    }
    let mut space = BacktrackingDsaturSpace::new(&graph, &clique, initial, upper_bound);
    let stopped = space.dfs_search(terminator);
    info!("nb expanded: {}", space.nb_expanded);
    let best = graph.to_colored(&space.best_so_far_coloring);
    match stopped {
        None => Ok(best),
        Some(reason) => {
            warn!("exact DSATUR stopped: {} (best: {} colors)", reason, best.k);
            Err(ColoringError::Terminated { reason, best })
        }
    }
}
