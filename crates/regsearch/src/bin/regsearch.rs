//! Best-subset regression search over a CSV file.
//!
//! Usage: `cargo run --features cli --bin regsearch -- FILE --dependent COLUMN [options]`
//! Example: `cargo run --features cli --bin regsearch -- crops.csv --dependent yield --ols`

use std::process;

use clap::Parser;
use log::{error, info};
use regsearch::{
    model::{FitMethod, SearchConfig, search},
    primitives::{Dataset, Ranking},
    utils::load_csv,
};

#[derive(Parser)]
#[command(
    name = "regsearch",
    about = "Rank variable combinations by standard error of the estimate",
    long_about = "Searches combinations of the independent columns of a CSV file for the \
                 regressions that best explain the dependent column. Every coefficient must be \
                 significant and agree in sign with its variable's simple correlation."
)]
struct Cli {
    /// Path to a CSV file with a header row
    data: String,

    /// Name of the dependent column; every other column is a candidate
    #[arg(long, short = 'd', value_name = "COLUMN")]
    dependent: String,

    /// Number of models to keep
    #[arg(long, default_value_t = regsearch::model::DEFAULT_MAX_COMBINATIONS)]
    max_combinations: usize,

    /// |t| below which a coefficient is not significant
    #[arg(long, default_value_t = regsearch::model::DEFAULT_CRITICAL_T)]
    critical_t: f64,

    /// Cap on retained principal components
    #[arg(long, value_name = "N")]
    max_components: Option<usize>,

    /// Fit multi-variable combinations directly instead of on principal components
    #[arg(long)]
    ols: bool,

    /// Sentinel written in place of empty cells
    #[arg(long, default_value_t = -999.0, allow_negative_numbers = true)]
    missing: f64,

    /// Log admissions as well as round summaries
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data = load_csv(&cli.data, &cli.dependent, cli.missing)?;
    info!(
        "loaded {} observations of {} candidate variables from {}",
        data.n_observations(),
        data.n_variables(),
        cli.data
    );

    let config = SearchConfig {
        max_combinations: cli.max_combinations,
        critical_t: cli.critical_t,
        max_components: cli.max_components,
        method: if cli.ols { FitMethod::OrdinaryLeastSquares } else { FitMethod::PrincipalComponents },
    };

    let ranking = search(&data, config)?;
    print_ranking(&data, &ranking);
    Ok(())
}

fn print_ranking(data: &Dataset, ranking: &Ranking) {
    println!();
    println!(
        "{:>4}  {:>12}  {:>8}  {:>5}  {:>5}  {:>12}  variables",
        "rank", "std error", "r", "n", "pcs", "intercept"
    );
    println!("{}", "-".repeat(72));

    for (rank, model) in ranking.iter() {
        println!(
            "{:>4}  {:>12.6}  {:>8.4}  {:>5}  {:>5}  {:>12.6}  {}",
            rank,
            model.standard_error,
            model.r,
            model.observation_count,
            model.retained_components,
            model.intercept,
            model.variables.describe(data.names())
        );
        for variable in model.variables.iter() {
            if let (Some(name), Some(b)) = (data.name(variable), model.coefficient(variable)) {
                println!("{:>54}{name:<16} {b:>14.6}", "");
            }
        }
    }
}
