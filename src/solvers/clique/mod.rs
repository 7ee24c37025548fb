/// greedy that finds a clique of "large" size
pub mod greedy_clique;
