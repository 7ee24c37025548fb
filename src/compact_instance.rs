use std::collections::BTreeMap;

use crate::color::{ColoringInstance, VertexId};

/** models a Graph Coloring instance (adjacency lists keyed by vertex id). */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactInstance {
    /// nb edges
    m: usize,
    /// adj_list[v]: list of vertices adjacent to v
    adj_list: BTreeMap<VertexId, Vec<VertexId>>,
}

/// error while decoding a graph6 string
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Graph6Error {
    /// character outside of the printable graph6 range
    #[error("invalid graph6 character {0:?}")]
    InvalidChar(char),
    /// not enough characters for the announced number of vertices
    #[error("graph6 string truncated")]
    Truncated,
}

impl ColoringInstance for CompactInstance {
    fn vertices(&self) -> Vec<VertexId> { self.adj_list.keys().copied().collect() }

    fn neighbors(&self, u:VertexId) -> Vec<VertexId> {
        self.adj_list.get(&u).cloned().unwrap_or_default()
    }

    fn nb_vertices(&self) -> usize { self.adj_list.len() }
}

impl CompactInstance {

    /// returns the number of edges in the graph
    pub fn nb_edges(&self) -> usize { self.m }

    /** constructor using an adjacency list (vertex i adjacent to adj_list[i]).
    lists do not need to be symmetric.
    */
    pub fn new(adj_list:Vec<Vec<usize>>) -> Self {
        let mut res = Self::default();
        for i in 0..adj_list.len() {
            res.add_vertex(i as VertexId);
        }
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                res.add_edge(i as VertexId, *j as VertexId);
            }
        }
        res
    }

    /** constructor using a vertex list and an edge list.
    endpoints missing from `vertices` are added.
    */
    pub fn from_edges(vertices:Vec<VertexId>, edges:&[(VertexId,VertexId)]) -> Self {
        let mut res = Self::default();
        for v in vertices { res.add_vertex(v); }
        for (u,v) in edges { res.add_edge(*u, *v); }
        res
    }

    /// adds an isolated vertex (no-op if it exists)
    pub fn add_vertex(&mut self, v:VertexId) {
        self.adj_list.entry(v).or_default();
    }

    /// adds the undirected edge {u,v} (no-op if it exists). u == v adds a self-loop.
    pub fn add_edge(&mut self, u:VertexId, v:VertexId) {
        let adj_u = self.adj_list.entry(u).or_default();
        if adj_u.contains(&v) { return; }
        adj_u.push(v);
        if u != v {
            self.adj_list.entry(v).or_default().push(u);
        }
        self.m += 1;
    }

    /** decodes a graph in the graph6 format (vertices 0..n-1).
    see <https://users.cecs.anu.edu.au/~bdm/data/formats.txt>
    */
    pub fn from_graph6(s:&str) -> Result<Self, Graph6Error> {
        let mut bytes = Vec::with_capacity(s.len());
        for ch in s.chars() {
            if !('?'..='~').contains(&ch) { return Err(Graph6Error::InvalidChar(ch)); }
            bytes.push(ch as u8 - 63);
        }
        // N(n): 1, 4 or 8 bytes
        let (n, offset) = match bytes.as_slice() {
            [] => return Err(Graph6Error::Truncated),
            [63, 63, rest @ ..] => (Self::big_endian(rest, 6)?, 8),
            [63, rest @ ..] => (Self::big_endian(rest, 3)?, 4),
            [b, ..] => (*b as usize, 1),
        };
        let data = &bytes[offset..];
        let nb_bits = n * n.saturating_sub(1) / 2;
        if data.len() * 6 < nb_bits { return Err(Graph6Error::Truncated); }
        let mut res = Self::default();
        for v in 0..n { res.add_vertex(v as VertexId); }
        let mut k = 0;
        for j in 1..n {
            for i in 0..j {
                if data[k / 6] & (1 << (5 - k % 6)) != 0 {
                    res.add_edge(i as VertexId, j as VertexId);
                }
                k += 1;
            }
        }
        Ok(res)
    }

    /// reads a number written on nb 6-bit bytes
    fn big_endian(bytes:&[u8], nb:usize) -> Result<usize, Graph6Error> {
        if bytes.len() < nb { return Err(Graph6Error::Truncated); }
        Ok(bytes[..nb].iter().fold(0, |acc, b| (acc << 6) | *b as usize))
    }
}
