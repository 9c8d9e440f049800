use std::error::Error;

use clap::Args;
use lfs_bench::run_trial;
use lfs_core::{Query, RngHandle};
use lfs_search::{verify, Strategy};
use lfs_shapes::{generate, Shape, ShapeParams};
use serde_json::json;
use tracing::warn;

#[derive(Args, Debug)]
pub struct TrialArgs {
    /// Sequence shape, e.g. `linear-outlier`.
    #[arg(long)]
    pub shape: Shape,
    /// Search strategy, e.g. `line-fit-blind`.
    #[arg(long)]
    pub strategy: Strategy,
    /// Sequence length.
    #[arg(long)]
    pub size: usize,
    /// Seed of the trial's random stream.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Fixed query; drawn from the stream when absent.
    #[arg(long)]
    pub query: Option<u64>,
}

pub fn run(args: &TrialArgs) -> Result<(), Box<dyn Error>> {
    let params = ShapeParams::default();
    let mut rng = RngHandle::from_seed(args.seed);
    let report = match args.query {
        None => {
            let outcome = run_trial(args.shape, args.strategy, args.size, &params, &mut rng)?;
            json!({
                "shape": args.shape,
                "strategy": args.strategy,
                "size": args.size,
                "seed": args.seed,
                "outcome": outcome,
            })
        }
        Some(value) => {
            let query = Query::new(value)?;
            let sequence = generate(args.shape, args.size, &params, &mut rng)?;
            let outcome = args.strategy.search(&sequence, query);
            if let Some(mismatch) = verify(&sequence, query, &outcome) {
                warn!(%mismatch, "outcome disagrees with the linear scan");
            }
            json!({
                "shape": args.shape,
                "strategy": args.strategy,
                "size": args.size,
                "seed": args.seed,
                "query": value,
                "outcome": outcome,
                "first": sequence.first(),
                "last": sequence.last(),
            })
        }
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
