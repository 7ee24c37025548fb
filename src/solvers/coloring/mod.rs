/// greedy DSATUR algorithm
pub mod greedy_dsatur;

/// bitset DSATUR with explicit color domains (San Segundo)
pub mod san_segundo;

/// Recursive Largest First algorithm (RLF)
pub mod greedy_rlf;

/// Welsh-Powell static order greedy
pub mod welsh_powell;

/// greedy over a random vertex order
pub mod randomized;

/// backtracking DSATUR for the vertex coloring problem (exact)
pub mod backtracking_dsatur;
