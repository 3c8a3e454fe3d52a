//! Solves one order-picking instance and prints the run report as JSON.
//!
//! ```text
//! pick-sa <instance.json> [--seed N] [--max-pickers N]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::error::Error;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;
use u_picking::sa::AnnealingConfig;
use u_picking::search::{PickerCountSearch, SearchConfig};
use u_picking::{Instance, ProblemModel};

const USAGE: &str = "usage: pick-sa <instance.json> [--seed N] [--max-pickers N]";

struct Args {
    instance: String,
    seed: Option<u64>,
    max_pickers: Option<usize>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut instance = None;
    let mut seed = None;
    let mut max_pickers = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or(USAGE)?;
                seed = Some(value.parse()?);
            }
            "--max-pickers" => {
                let value = args.next().ok_or(USAGE)?;
                max_pickers = Some(value.parse()?);
            }
            "-h" | "--help" => return Err(USAGE.into()),
            _ if instance.is_none() => instance = Some(arg),
            _ => return Err(format!("unexpected argument {arg:?}\n{USAGE}").into()),
        }
    }

    Ok(Args {
        instance: instance.ok_or(USAGE)?,
        seed,
        max_pickers,
    })
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();
    let args = parse_args()?;

    let instance = Instance::from_path(&args.instance)?;
    let model = ProblemModel::new(instance)?;
    info!(
        instance = %args.instance,
        items = model.items().len(),
        pickers = model.num_pickers(),
        "loaded instance"
    );

    let mut annealing = AnnealingConfig::default()
        .with_initial_temperature(100.0)
        .with_alpha(0.95)
        .with_iterations_per_temperature(100)
        .with_stagnation_threshold(20);
    annealing.seed = args.seed;

    let mut config = SearchConfig::default().with_annealing(annealing);
    config.max_pickers = args.max_pickers;

    let start = Instant::now();
    let outcome = PickerCountSearch::new(&model, config)?.run();
    let runtime = start.elapsed().as_secs_f64() * 1000.0;

    for summary in model.route_summaries(&outcome.solution) {
        info!(
            picker = summary.picker_id,
            category = model.picker_category(summary.picker_id).unwrap_or("-"),
            round = summary.round,
            items = ?summary.items,
            locations = ?summary.locations,
            time = summary.time,
            within_capacity = summary.within_capacity,
            within_time = summary.within_time,
            "route"
        );
    }

    let report = outcome.report(runtime);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
