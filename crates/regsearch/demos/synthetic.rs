//! Example: Searching Synthetic Data with Correlated Predictors
//!
//! This example walks through a complete search:
//! 1. Generate a dependent series driven by a shared factor
//! 2. Add a decoy variable and punch holes into the data
//! 3. Compare the principal-component search with direct least squares

use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::Normal;
use regsearch::{
    model::{FitMethod, SearchConfig, search},
    primitives::Dataset,
};

const MISSING: f64 = -999.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Subset Regression on Synthetic Data ===\n");

    // =========================================================================
    // GENERATE DATA
    // =========================================================================

    let mut rng = StdRng::seed_from_u64(42);
    let spread = Normal::new(0.0, 0.4)?;
    let noise = Normal::new(0.0, 0.5)?;
    let n = 60;

    let driver: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..10.0)).collect();
    let mut x = Array2::from_shape_fn((n, 4), |(i, j)| match j {
        0..=2 => driver[i] + rng.sample(spread),
        _ => rng.gen_range(-1.0..1.0),
    });
    let y = Array1::from_shape_fn(n, |i| 1.5 + 0.8 * x[[i, 0]] + 0.6 * x[[i, 1]] + rng.sample(noise));

    // Knock out a handful of values
    for i in (0..n).step_by(11) {
        x[[i, (i / 11) % 4]] = MISSING;
    }

    let names = ["rainfall", "irrigation", "soil_moisture", "moon_phase"];
    let data = Dataset::new(x, y, MISSING, MISSING)?
        .with_names(names.iter().map(|s| (*s).to_string()).collect())?;

    println!("{} observations, {} candidate variables\n", data.n_observations(), data.n_variables());

    // =========================================================================
    // SEARCH
    // =========================================================================

    for method in [FitMethod::PrincipalComponents, FitMethod::OrdinaryLeastSquares] {
        let config = SearchConfig { max_combinations: 5, method, ..SearchConfig::default() };
        let ranking = search(&data, config)?;

        println!("--- {method:?} ---");
        for (rank, model) in ranking.iter() {
            println!(
                "{rank}. {:<40} se={:.4} r={:.4} n={} pcs={}",
                model.variables.describe(data.names()),
                model.standard_error,
                model.r,
                model.observation_count,
                model.retained_components
            );
        }
        println!();
    }

    Ok(())
}
