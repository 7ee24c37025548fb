use std::str::FromStr;

use clap::ArgMatches;
use log::{info, warn};
use serde_json::Value;

use crate::{
    color::{Colored, ColoringInstance, checker, CheckerResult},
    compact_instance::CompactInstance,
    dimacs::{DimacsError, read_from_file, write_solution},
    solvers::{Algorithm, UnknownAlgorithm},
};

/// errors while reading the command line
#[derive(thiserror::Error, Debug)]
pub enum ParamError {
    /// a numeric parameter cannot be parsed
    #[error("unable to parse the {name} given ({value:?})")]
    InvalidNumber {
        /// parameter name
        name: &'static str,
        /// value given
        value: String,
    },
    /// no algorithm subcommand
    #[error("no algorithm given (see --help)")]
    MissingAlgorithm,
    /// the subcommand is not an algorithm
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    /// the instance cannot be read
    #[error(transparent)]
    Dimacs(#[from] DimacsError),
}

/// parameters of a coloring run
#[derive(Debug)]
pub struct Params {
    /// instance file name
    pub inst_filename: String,
    /// instance read
    pub instance: CompactInstance,
    /// algorithm to run
    pub algorithm: Algorithm,
    /// time limit (seconds) of the exact search
    pub time: f32,
    /// seed of the randomized greedy
    pub seed: u64,
    /// number of randomized runs (seeds seed..seed+trials)
    pub trials: u64,
    /// file in which the solution is written
    pub sol_file: Option<String>,
    /// file in which the statistics are written
    pub perf_file: Option<String>,
}

/// parses a numeric argument (that has a default value)
fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&'static str) -> Result<T, ParamError> {
    let value = main_args.value_of(name).unwrap_or_default();
    value.parse::<T>().map_err(|_| ParamError::InvalidNumber { name, value: value.to_string() })
}

/** reads command line input and the instance */
pub fn read_params(main_args:&ArgMatches) -> Result<Params, ParamError> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default().to_string();
    let algorithm:Algorithm = main_args.subcommand_name()
        .ok_or(ParamError::MissingAlgorithm)?
        .parse()?;
    let time:f32 = parse_arg(main_args, "time")?;
    let seed:u64 = parse_arg(main_args, "seed")?;
    let trials:u64 = parse_arg(main_args, "trials")?;
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    // read instance file
    info!("reading instance: {}...", inst_filename);
    let instance = read_from_file(inst_filename.as_str())?;
    instance.display_statistics();
    Ok(Params { inst_filename, instance, algorithm, time, seed, trials, sol_file, perf_file })
}

/// seeds of the randomized runs: `trials` consecutive seeds from `seed` (wrapping around)
pub fn trial_seeds(seed:u64, trials:u64) -> impl Iterator<Item=u64> {
    (0..trials.max(1)).map(move |i| seed.wrapping_add(i))
}

/// exports search results to files (the solution is checked before being written)
pub fn export_results(
    params:&Params,
    solution:&Colored,
    stats:&Value,
) -> Result<(), DimacsError> {
    // export statistics
    if let Some(filename) = &params.perf_file {
        std::fs::write(filename, stats.to_string())?;
    }
    // export solution
    if let Some(filename) = &params.sol_file {
        match checker(&params.instance, &solution.colors) {
            CheckerResult::Ok(_) => {},
            checker_result => warn!("invalid solution (reason: {:?})", checker_result),
        };
        write_solution(filename.as_str(), solution)?;
    }
    Ok(())
}
