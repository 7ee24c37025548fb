use std::fs;

use log::warn;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{preceded, terminated, tuple};

use crate::color::{Colored, VertexId, color_classes};
use crate::compact_instance::CompactInstance;

/// errors while reading a DIMACS file
#[derive(thiserror::Error, Debug)]
pub enum DimacsError {
    /// the file cannot be read
    #[error("unable to read the instance: {0}")]
    Io(#[from] std::io::Error),
    /// line that is neither a comment, a header nor an edge
    #[error("line {line}: unable to parse {content:?}")]
    Parse {
        /// line number (starting at 1)
        line: usize,
        /// content of the line
        content: String,
    },
    /// edge before the "p edge n m" line
    #[error("line {0}: edge before the problem line")]
    MissingHeader(usize),
    /// vertex outside of 1..=n
    #[error("line {line}: vertex {vertex} out of range [1, {n}]")]
    VertexOutOfRange {
        /// line number (starting at 1)
        line: usize,
        /// vertex read
        vertex: usize,
        /// number of vertices of the header
        n: usize,
    },
}

/// reads an unsigned integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    let (remaining, (n1, _, n2)) = tuple((read_integer, space1, read_integer))(s)?;
    Ok((remaining, (n1, n2)))
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    all_consuming(terminated(
        preceded(tuple((tag("p"), space1, alt((tag("edge"), tag("col"))), space1)), read_two_integers),
        space0,
    ))(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    all_consuming(terminated(
        preceded(tuple((tag("e"), space1)), read_two_integers),
        space0,
    ))(s)
}

/**
parses a DIMACS graph. Vertices are numbered 0..n-1 in the returned instance.
comment lines ("c ...") and empty lines are skipped.
*/
pub fn read_from_str(s:&str) -> Result<CompactInstance, DimacsError> {
    let mut res:Option<(CompactInstance, usize, usize)> = None; // instance, n, declared m
    for (i,raw_line) in s.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('c') { continue; }
        if let Ok((_,(n,m))) = read_header(line) {
            let inst = CompactInstance::from_edges((0..n as VertexId).collect(), &[]);
            res = Some((inst, n, m));
            continue;
        }
        let (a,b) = match read_edge(line) {
            Ok((_,e)) => e,
            Err(_) => return Err(DimacsError::Parse { line: i+1, content: line.to_string() }),
        };
        let (inst, n, _) = res.as_mut().ok_or(DimacsError::MissingHeader(i+1))?;
        for vertex in [a,b].iter() {
            if *vertex == 0 || *vertex > *n {
                return Err(DimacsError::VertexOutOfRange { line: i+1, vertex: *vertex, n: *n });
            }
        }
        inst.add_edge((a-1) as VertexId, (b-1) as VertexId);
    }
    let (inst, _, m) = res.ok_or(DimacsError::MissingHeader(0))?;
    // some generators count every edge twice
    if inst.nb_edges() != m && 2*inst.nb_edges() != m {
        warn!("DIMACS header declares {} edges, {} read", m, inst.nb_edges());
    }
    Ok(inst)
}

/// creates an instance from a DIMACS file
pub fn read_from_file(filename:&str) -> Result<CompactInstance, DimacsError> {
    let content = fs::read_to_string(filename)?;
    read_from_str(content.as_str())
}

/** writes a string encoding the solution. each line corresponds to a color
(vertices printed 1-based, as in the instance file).
*/
pub fn solution_to_string(solution:&Colored) -> String {
    let mut res = String::default();
    for class in color_classes(&solution.colors).values() {
        for v in class {
            res += format!("{} ", v.saturating_add(1)).as_str();
        }
        res += "\n";
    }
    res
}

/// writes a solution into a file
pub fn write_solution(filename:&str, solution:&Colored) -> Result<(), DimacsError> {
    fs::write(filename, solution_to_string(solution))?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{ColoringInstance, Coloring};

    #[test]
    fn test_read_instance() {
        let s = "c grid 2x2\nc\np edge 4 4\ne 1 2\ne 1 3\ne 2 4\r\ne 3 4\n";
        let inst = read_from_str(s).unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(0), vec![1,2]);
    }

    #[test]
    fn test_read_header() {
        assert_eq!(read_header("p edge 2 1").unwrap().1, (2,1));
        assert_eq!(read_header("p col  2 1 ").unwrap().1, (2,1));
        assert!(read_header("p edge 2").is_err());
    }

    #[test]
    fn test_read_edge() {
        assert_eq!(read_edge("e 1 2").unwrap().1, (1,2));
        assert!(read_edge("e 1 x").is_err());
    }

    #[test]
    fn test_isolated_vertices_are_kept() {
        let inst = read_from_str("p edge 5 1\ne 1 2\n").unwrap();
        assert_eq!(inst.nb_vertices(), 5);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(read_from_str("e 1 2\n"), Err(DimacsError::MissingHeader(1))));
        assert!(matches!(read_from_str(""), Err(DimacsError::MissingHeader(0))));
        assert!(matches!(
            read_from_str("p edge 2 1\ne 1 3\n"),
            Err(DimacsError::VertexOutOfRange { line:2, vertex:3, n:2 })
        ));
        assert!(matches!(
            read_from_str("p edge 2 1\nx 1 2\n"),
            Err(DimacsError::Parse { line:2, .. })
        ));
    }

    #[test]
    fn test_solution_to_string() {
        let colors:Coloring = vec![(0,1), (1,0), (2,1)].into_iter().collect();
        assert_eq!(solution_to_string(&Colored::new(colors)), "2 \n1 3 \n");
    }

    #[test]
    fn test_solution_to_string_large_ids() {
        let colors:Coloring = vec![(VertexId::MAX,0), (-1,0)].into_iter().collect();
        assert_eq!(solution_to_string(&Colored::new(colors)), format!("0 {} \n", VertexId::MAX));
    }
}
