use std::time::Instant;

use clap::{App, load_yaml};
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use vertex_coloring::{Algorithm, Colored, ColoringError, TimeTerminator};
use vertex_coloring::util::{Params, read_params, export_results, trial_seeds};


/// runs the selected algorithm. Returns the coloring and whether it is proven optimal
fn solve(params:&Params) -> Result<(Colored, bool), ColoringError> {
    match params.algorithm {
        Algorithm::DsaturExact => {
            let terminator = TimeTerminator::new(params.time);
            match params.algorithm.color(&params.instance, None, Some(&terminator), &mut StdRng::seed_from_u64(params.seed)) {
                Ok(res) => Ok((res, true)),
                Err(ColoringError::Terminated { reason, best }) => {
                    warn!("{}, keeping the best coloring found", reason);
                    Ok((best, false))
                },
                Err(e) => Err(e),
            }
        },
        Algorithm::Randomized => {
            let mut best:Option<Colored> = None;
            for seed in trial_seeds(params.seed, params.trials) {
                let mut rng = StdRng::seed_from_u64(seed);
                let res = params.algorithm.color(&params.instance, None, None, &mut rng)?;
                info!("seed {}: {} colors", seed, res.k);
                if best.as_ref().map_or(true, |b| res.k < b.k) {
                    best = Some(res);
                }
            }
            Ok((best.unwrap_or_default(), false))
        },
        algorithm => {
            let res = algorithm.color(&params.instance, None, None, &mut StdRng::seed_from_u64(params.seed))?;
            Ok((res, false))
        },
    }
}

/** solves a coloring instance with the algorithm given as subcommand */
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // parse arguments
    let yaml = load_yaml!("color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = match read_params(&main_args) {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // solve it
    let t_start = Instant::now();
    let (solution, optimal) = match solve(&params) {
        Ok(res) => res,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let duration = t_start.elapsed().as_secs_f32();
    info!("{} took {:.3} seconds. Nb colors: {}", params.algorithm, duration, solution.k);
    let stats = json!({
        "algorithm": params.algorithm.name(),
        "primal_list": vec![solution.k],
        "optimal": optimal,
        "time_searched": duration,
        "inst_name": params.inst_filename,
        "solution": solution,
    });

    // export results
    if let Err(e) = export_results(&params, &solution, &stats) {
        error!("{}", e);
        std::process::exit(1);
    }
}
