//! Combination search over variable subsets.
//!
//! The search walks combination sizes breadth first. Size one evaluates every
//! variable; each later size only extends combinations that are still held in
//! the top-K table, one added variable at a time. The walk stops at the first
//! size that does not place a single model of that size into the table.
//!
//! Multi-variable combinations are fitted on their leading principal
//! components by default. Components are added one at a time until the
//! newest component's t-statistic is not significant, so a significant
//! component that follows an insignificant one is never reached.

use std::collections::HashSet;

use log::{debug, info, trace, warn};
use ndarray::{Array1, Array2, ArrayView1, s};
use regsearch_math::pearson;
use regsearch_primitives::{Dataset, Model, Ranking, SignVector, VariableSet};

use crate::{
    FitMethod, MIN_OBSERVATIONS, MIN_RESIDUAL_DF, ModelError, ModelTable, OlsFit,
    PrincipalComponents, SearchConfig, ordinary_least_squares, with_intercept,
};

/// Why a combination was skipped. Rejections are not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Same variables were already tried in this round.
    Duplicate,
    /// Fewer than [`MIN_OBSERVATIONS`] rows have every value present, or a
    /// direct fit would keep fewer than [`MIN_RESIDUAL_DF`] residual degrees
    /// of freedom.
    TooFewObservations {
        /// Rows with every value present.
        available: usize,
    },
    /// A t-statistic fell below the critical value.
    NotSignificant {
        /// The offending t-statistic.
        t: f64,
        /// Components in the fit, `0` for a direct fit.
        components: usize,
    },
    /// A coefficient contradicts the sign of its zero-order correlation.
    SignMismatch {
        /// Offending variable.
        variable: usize,
        /// Its fitted coefficient.
        coefficient: f64,
        /// Components in the fit, `0` for a direct fit.
        components: usize,
    },
}

/// Result of evaluating one combination.
#[derive(Debug, Clone)]
pub enum Evaluation {
    /// Passed screening.
    Accepted(Model),
    /// Skipped.
    Rejected(Rejection),
}

impl Evaluation {
    /// The accepted model, if any.
    #[must_use]
    pub const fn model(&self) -> Option<&Model> {
        match self {
            Self::Accepted(model) => Some(model),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Mutable state of one search invocation.
///
/// Holds the expected signs, the top-K table and scratch buffers reused
/// from one combination to the next.
#[derive(Debug)]
pub struct SearchContext {
    signs: SignVector,
    table: ModelTable,
    mask: Vec<bool>,
    rows: Vec<usize>,
    tried: HashSet<VariableSet>,
    rounds: usize,
}

impl SearchContext {
    /// Expected coefficient signs.
    #[must_use]
    pub const fn signs(&self) -> &SignVector {
        &self.signs
    }

    /// Current top-K table.
    #[must_use]
    pub const fn table(&self) -> &ModelTable {
        &self.table
    }

    /// Combination sizes processed so far.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Flag rows with the dependent value and every included variable present.
    fn compact(&mut self, data: &Dataset, variables: &VariableSet) -> usize {
        let n = data.n_observations();
        self.mask.clear();
        self.mask.resize(n, false);
        self.rows.clear();

        for row in 0..n {
            if data.is_missing_dependent(row)
                || variables.iter().any(|v| data.is_missing_independent(row, v))
            {
                continue;
            }
            self.mask[row] = true;
            self.rows.push(row);
        }

        self.rows.len()
    }
}

/// Best-subset search over the variables of a [`Dataset`].
#[derive(Debug, Clone)]
pub struct CombinationSearch<'a> {
    data: &'a Dataset,
    config: SearchConfig,
}

impl<'a> CombinationSearch<'a> {
    /// Create a search with default configuration.
    ///
    /// # Errors
    /// Never fails for the default configuration; kept fallible for symmetry
    /// with [`Self::with_config`].
    pub fn new(data: &'a Dataset) -> Result<Self, ModelError> {
        Self::with_config(data, SearchConfig::default())
    }

    /// Create a search with custom configuration.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfig` if the configuration is invalid.
    pub fn with_config(data: &'a Dataset, config: SearchConfig) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self { data, config })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Fresh per-invocation state, with signs taken from the zero-order
    /// correlation of each variable with the dependent series.
    ///
    /// # Errors
    /// Returns error if a correlation cannot be computed.
    pub fn context(&self) -> Result<SearchContext, ModelError> {
        let data = self.data;
        let mut correlations = Vec::with_capacity(data.n_variables());

        for variable in 0..data.n_variables() {
            let (x, y): (Vec<f64>, Vec<f64>) = (0..data.n_observations())
                .filter(|&row| {
                    !data.is_missing_dependent(row) && !data.is_missing_independent(row, variable)
                })
                .map(|row| (data.independent()[[row, variable]], data.dependent()[row]))
                .unzip();

            let r = if x.len() < 2 {
                None
            } else {
                pearson(ArrayView1::from(&x[..]), ArrayView1::from(&y[..]))?
            };
            correlations.push(r);
        }

        Ok(SearchContext {
            signs: SignVector::from_correlations(correlations),
            table: ModelTable::new(self.config.max_combinations),
            mask: Vec::with_capacity(data.n_observations()),
            rows: Vec::with_capacity(data.n_observations()),
            tried: HashSet::new(),
            rounds: 0,
        })
    }

    /// Run the full search and rank the surviving models.
    ///
    /// # Errors
    /// Returns `ModelError::Combination` for a numerical failure and
    /// `ModelError::NoModels` if nothing survives screening.
    pub fn run(&self) -> Result<Ranking, ModelError> {
        let mut ctx = self.context()?;
        self.run_in(&mut ctx)
    }

    /// Run the search in a caller-provided context.
    ///
    /// The context's table is drained into the returned ranking.
    ///
    /// # Errors
    /// See [`Self::run`].
    pub fn run_in(&self, ctx: &mut SearchContext) -> Result<Ranking, ModelError> {
        let k = self.data.n_variables();
        info!(
            "searching {k} variables over {} observations, keeping {} models",
            self.data.n_observations(),
            self.config.max_combinations
        );

        for size in 1..=k {
            ctx.tried.clear();
            ctx.rounds = size;

            let parents = if size == 1 {
                vec![VariableSet::default()]
            } else {
                ctx.table.combinations_of_size(size - 1)
            };

            let mut evaluated = 0;
            let mut admitted = 0;
            for parent in &parents {
                for variable in (0..k).filter(|&v| !parent.contains(v)) {
                    let candidate = parent.with(variable);
                    if !ctx.tried.insert(candidate.clone()) {
                        trace!("skip {candidate}: {:?}", Rejection::Duplicate);
                        continue;
                    }

                    evaluated += 1;
                    match self.evaluate(ctx, &candidate)? {
                        Evaluation::Accepted(model) => {
                            let se = model.standard_error;
                            let admission = ctx.table.admit(model);
                            if admission.is_admitted() {
                                admitted += 1;
                                debug!("admit {candidate} se={se:.6}: {admission:?}");
                            } else {
                                trace!("drop {candidate} se={se:.6}: {admission:?}");
                            }
                        }
                        Evaluation::Rejected(rejection) => {
                            trace!("reject {candidate}: {rejection:?}");
                        }
                    }
                }
            }

            info!("size {size}: evaluated {evaluated}, admitted {admitted}");
            if admitted == 0 {
                if size < k {
                    warn!("no {size}-variable model entered the table, stopping early");
                }
                break;
            }
        }

        let table =
            std::mem::replace(&mut ctx.table, ModelTable::new(self.config.max_combinations));
        if table.is_empty() {
            return Err(ModelError::NoModels);
        }
        let ranking = table.into_ranking();
        if let Some(best) = ranking.best() {
            info!("best of {}: {} se={:.6}", ranking.len(), best.variables, best.standard_error);
        }
        Ok(ranking)
    }

    /// Fit and screen one combination.
    ///
    /// # Errors
    /// Returns `ModelError::Combination` wrapping a singular inversion,
    /// constant column or eigen failure.
    pub fn evaluate(
        &self,
        ctx: &mut SearchContext,
        variables: &VariableSet,
    ) -> Result<Evaluation, ModelError> {
        let available = ctx.compact(self.data, variables);
        if available < MIN_OBSERVATIONS {
            return Ok(Evaluation::Rejected(Rejection::TooFewObservations { available }));
        }

        let independent = self.data.independent();
        let dependent = self.data.dependent();
        let columns = variables.indices();
        let x = Array2::from_shape_fn((available, columns.len()), |(r, c)| {
            independent[[ctx.rows[r], columns[c]]]
        });
        let y: Array1<f64> = ctx.rows.iter().map(|&row| dependent[row]).collect();

        let outcome = if variables.len() == 1 || self.config.method == FitMethod::OrdinaryLeastSquares
        {
            self.fit_direct(ctx, variables, &x, &y)
        } else {
            self.fit_components(ctx, variables, &x, &y)
        };
        outcome.map_err(|e| e.in_combination(variables))
    }

    fn fit_direct(
        &self,
        ctx: &SearchContext,
        variables: &VariableSet,
        x: &Array2<f64>,
        y: &Array1<f64>,
    ) -> Result<Evaluation, ModelError> {
        let available = x.nrows();
        if available < x.ncols() + 1 + MIN_RESIDUAL_DF {
            return Ok(Evaluation::Rejected(Rejection::TooFewObservations { available }));
        }

        let fit = ordinary_least_squares(&with_intercept(x), y)?;

        if let Some(&t) = fit.t_statistics.iter().skip(1).find(|t| !self.is_significant(**t)) {
            return Ok(Evaluation::Rejected(Rejection::NotSignificant { t, components: 0 }));
        }

        let coefficients = fit.slopes().to_vec();
        if let Some(rejection) = sign_rejection(&ctx.signs, variables, &coefficients, 0) {
            return Ok(Evaluation::Rejected(rejection));
        }

        let intercept = fit.intercept();
        Ok(Evaluation::Accepted(self.build_model(ctx, variables, intercept, &coefficients, fit, 0)))
    }

    fn fit_components(
        &self,
        ctx: &SearchContext,
        variables: &VariableSet,
        x: &Array2<f64>,
        y: &Array1<f64>,
    ) -> Result<Evaluation, ModelError> {
        let n = x.nrows();
        let k = x.ncols();
        let limit = self.config.max_components.map_or(k, |cap| cap.min(k));
        let pcs = PrincipalComponents::fit(x)?;

        let mut best: Option<(usize, f64, Vec<f64>, OlsFit)> = None;
        let mut last_rejection = None;

        for c in 1..=limit {
            if n < c + 1 + MIN_RESIDUAL_DF {
                break;
            }

            let fit = ordinary_least_squares(&with_intercept(&pcs.scores(c)), y)?;
            let t = fit.t_statistics[c];
            if !self.is_significant(t) {
                last_rejection = Some(Rejection::NotSignificant { t, components: c });
                break;
            }

            let (intercept, coefficients) =
                pcs.to_raw(fit.coefficients.slice(s![1..]), fit.intercept());
            if let Some(rejection) = sign_rejection(&ctx.signs, variables, &coefficients, c) {
                last_rejection = Some(rejection);
                continue;
            }

            best = Some((c, intercept, coefficients, fit));
        }

        Ok(match best {
            Some((c, intercept, coefficients, fit)) => Evaluation::Accepted(
                self.build_model(ctx, variables, intercept, &coefficients, fit, c),
            ),
            None => Evaluation::Rejected(
                last_rejection.unwrap_or(Rejection::TooFewObservations { available: n }),
            ),
        })
    }

    fn is_significant(&self, t: f64) -> bool {
        // NaN never counts as significant.
        t.abs() >= self.config.critical_t
    }

    fn build_model(
        &self,
        ctx: &SearchContext,
        variables: &VariableSet,
        intercept: f64,
        coefficients: &[f64],
        fit: OlsFit,
        retained_components: usize,
    ) -> Model {
        let missing = self.data.independent_missing();
        let mut full = vec![missing; self.data.n_variables()];
        for (variable, &b) in variables.iter().zip(coefficients) {
            full[variable] = b;
        }

        Model {
            variables: variables.clone(),
            intercept,
            coefficients: full,
            missing,
            r: fit.r,
            standard_error: fit.standard_error,
            observation_count: ctx.rows.len(),
            retained_components,
            fitted: fit.fitted.to_vec(),
            residuals: fit.residuals.to_vec(),
            observation_mask: ctx.mask.clone(),
        }
    }
}

fn sign_rejection(
    signs: &SignVector,
    variables: &VariableSet,
    coefficients: &[f64],
    components: usize,
) -> Option<Rejection> {
    signs.first_disagreement(variables, coefficients).map(|variable| {
        let position = variables.iter().position(|v| v == variable).unwrap_or_default();
        Rejection::SignMismatch { variable, coefficient: coefficients[position], components }
    })
}

/// Run a search with the given configuration.
///
/// # Errors
/// See [`CombinationSearch::run`].
pub fn search(data: &Dataset, config: SearchConfig) -> Result<Ranking, ModelError> {
    CombinationSearch::with_config(data, config)?.run()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rand_distr::Normal;
    use rstest::rstest;

    use super::*;

    const MISSING: f64 = -999.0;

    fn dataset(x: Array2<f64>, y: Array1<f64>) -> Dataset {
        Dataset::new(x, y, MISSING, MISSING).unwrap()
    }

    fn ols_config() -> SearchConfig {
        SearchConfig { method: FitMethod::OrdinaryLeastSquares, ..SearchConfig::default() }
    }

    /// `x2` tracks `x1` closely but enters `y` with a negative weight, so its
    /// direct coefficient contradicts its positive correlation with `y`.
    fn suppressor() -> Dataset {
        let noise = [0.3, -0.2, 0.5, -0.4, 0.1, -0.3, 0.2, -0.5, 0.4, -0.1, 0.3, -0.2];
        let x = Array2::from_shape_fn((12, 2), |(i, j)| {
            let t = (i + 1) as f64;
            if j == 0 { t } else { t + noise[i] }
        });
        let y = x.column(0).mapv(|v| 2.0 * v) - x.column(1).mapv(|v| 0.5 * v);
        dataset(x, y)
    }

    /// `y` follows `x1`; `x2` and `x3` are exactly orthogonal to it.
    fn orthogonal_noise() -> Dataset {
        let bumps = [1.0, 1.0, -1.0, -1.0];
        let x2 = [1.0, -1.0, -1.0, 1.0];
        let x3 = [-1.0, -1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, -1.0, -1.0];
        let x = Array2::from_shape_fn((12, 3), |(i, j)| match j {
            0 => (i + 1) as f64,
            1 => x2[i % 4],
            _ => x3[i],
        });
        let y = Array1::from_shape_fn(12, |i| 2.0 + 3.0 * (i + 1) as f64 + 0.1 * bumps[i % 4]);
        dataset(x, y)
    }

    #[test]
    fn recovers_noiseless_line() {
        let x = Array2::from_shape_fn((8, 1), |(i, _)| (i + 1) as f64);
        let y = x.column(0).mapv(|v| 2.0 + 3.0 * v);
        let data = dataset(x, y);

        let ranking = CombinationSearch::new(&data).unwrap().run().unwrap();
        let best = ranking.best().unwrap();

        assert_eq!(ranking.len(), 1);
        assert_eq!(best.variables, VariableSet::single(0));
        assert_relative_eq!(best.intercept, 2.0, epsilon = 1e-8);
        assert_relative_eq!(best.coefficient(0).unwrap(), 3.0, epsilon = 1e-8);
        assert_relative_eq!(best.r, 1.0, epsilon = 1e-9);
        assert_eq!(best.observation_count, 8);
        assert_eq!(best.retained_components, 0);
    }

    #[rstest]
    #[case(3, Some(5))]
    #[case(2, None)]
    fn requires_six_complete_rows(#[case] gaps: usize, #[case] expected: Option<usize>) {
        let mut x = Array2::from_shape_fn((8, 1), |(i, _)| (i + 1) as f64);
        let mut y = x.column(0).mapv(|v| 1.0 + 2.0 * v + if v as usize % 2 == 0 { 0.3 } else { -0.3 });
        for row in 0..gaps {
            if row == 0 {
                y[row] = f64::NAN;
            } else {
                x[[row, 0]] = MISSING;
            }
        }
        let data = dataset(x, y);
        let search = CombinationSearch::new(&data).unwrap();
        let mut ctx = search.context().unwrap();

        let evaluation = search.evaluate(&mut ctx, &VariableSet::single(0)).unwrap();
        match expected {
            Some(available) => assert_eq!(
                evaluation.rejection(),
                Some(&Rejection::TooFewObservations { available })
            ),
            None => {
                let model = evaluation.model().unwrap();
                assert_eq!(model.observation_count, 6);
                assert_eq!(model.observation_mask, vec![false, false, true, true, true, true, true, true]);
                assert_eq!(model.fitted.len(), 6);
            }
        }
    }

    #[test]
    fn direct_fit_rejects_contradicting_sign() {
        let data = suppressor();
        let search = CombinationSearch::with_config(&data, ols_config()).unwrap();
        let mut ctx = search.context().unwrap();
        assert!(ctx.signs().correlation(1).unwrap() > 0.0);

        let both: VariableSet = [0, 1].into_iter().collect();
        let evaluation = search.evaluate(&mut ctx, &both).unwrap();
        assert!(matches!(
            evaluation.rejection(),
            Some(Rejection::SignMismatch { variable: 1, components: 0, .. })
        ));
    }

    #[test]
    fn components_keep_signs_consistent() {
        let data = suppressor();
        let search = CombinationSearch::new(&data).unwrap();
        let mut ctx = search.context().unwrap();

        let both: VariableSet = [0, 1].into_iter().collect();
        let evaluation = search.evaluate(&mut ctx, &both).unwrap();
        let model = evaluation.model().unwrap();

        assert_eq!(model.retained_components, 1);
        assert!(model.coefficient(0).unwrap() > 0.0);
        assert!(model.coefficient(1).unwrap() > 0.0);
        for (i, row) in data.independent().rows().into_iter().enumerate() {
            let raw = model.intercept + row[0] * model.coefficients[0] + row[1] * model.coefficients[1];
            assert_relative_eq!(raw, model.fitted[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn component_cap_limits_retained_components() {
        let data = suppressor();
        let config = SearchConfig { max_components: Some(1), ..SearchConfig::default() };
        let search = CombinationSearch::with_config(&data, config).unwrap();
        let mut ctx = search.context().unwrap();

        let both: VariableSet = [0, 1].into_iter().collect();
        let model = search.evaluate(&mut ctx, &both).unwrap().model().cloned().unwrap();
        assert_eq!(model.retained_components, 1);
    }

    #[test]
    fn stops_when_no_larger_model_enters() {
        let data = orthogonal_noise();
        let search = CombinationSearch::with_config(&data, ols_config()).unwrap();
        let mut ctx = search.context().unwrap();

        let ranking = search.run_in(&mut ctx).unwrap();

        assert_eq!(ctx.rounds(), 2);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.best().unwrap().variables, VariableSet::single(0));
    }

    #[test]
    fn matches_exhaustive_top_models() {
        let mut rng = StdRng::seed_from_u64(17);
        let loading = Normal::new(0.0, 0.5).unwrap();
        let noise = Normal::new(0.0, 0.3).unwrap();
        let n = 40;

        let factor: Vec<f64> = (0..n).map(|_| rng.gen_range(-3.0..3.0)).collect();
        let x = Array2::from_shape_fn((n, 3), |(i, _)| factor[i] + rng.sample(loading));
        let y = Array1::from_shape_fn(n, |i| 2.0 + x.row(i).sum() + rng.sample(noise));
        let data = dataset(x, y);

        let config = SearchConfig { max_combinations: 3, ..SearchConfig::default() };
        let search = CombinationSearch::with_config(&data, config).unwrap();
        let ranking = search.run().unwrap();

        let mut ctx = search.context().unwrap();
        let mut exhaustive: Vec<f64> = Vec::new();
        for mask in 1_usize..8 {
            let vars: VariableSet = (0..3).filter(|v| mask & (1 << v) != 0).collect();
            if let Evaluation::Accepted(model) = search.evaluate(&mut ctx, &vars).unwrap() {
                exhaustive.push(model.standard_error);
            }
        }
        exhaustive.sort_by(f64::total_cmp);
        exhaustive.truncate(3);

        let ranked: Vec<f64> = ranking.models().iter().map(|m| m.standard_error).collect();
        assert_eq!(ranked.len(), exhaustive.len());
        for (a, b) in ranked.iter().zip(&exhaustive) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
        assert!(ranked.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn constant_column_aborts_the_search() {
        let x = Array2::from_shape_fn((8, 2), |(i, j)| if j == 0 { (i + 1) as f64 } else { 4.0 });
        let y = array![3.1, 4.9, 7.2, 8.8, 11.1, 13.0, 14.8, 17.2];
        let data = dataset(x, y);

        let err = CombinationSearch::new(&data).unwrap().run().unwrap_err();
        assert_eq!(err.combination(), Some(&VariableSet::single(1)));
        assert!(matches!(
            err,
            ModelError::Combination { ref source, .. } if matches!(**source, ModelError::SingularMatrix)
        ));
    }

    #[test]
    fn nothing_significant_is_no_models() {
        let data = orthogonal_noise();
        let x = data.independent().slice(s![.., 1..]).to_owned();
        let only_noise = dataset(x, data.dependent().clone());

        let result = search(&only_noise, ols_config());
        assert!(matches!(result, Err(ModelError::NoModels)));
    }

    /// `y = 3 x1 - x2` with nearly uncorrelated `x1` and `x2`. The first
    /// component loads both variables positively, contradicting the negative
    /// correlation of `x2` with `y`.
    fn opposed_loadings() -> Dataset {
        let x1 = [
            2.6, 6.9, 6.8, 8.5, 1.9, 2.3, 1.5, 2.3, 7.3, 1.3, 5.3, 2.1, 2.9, 4.3, 8.4, 6.1, 0.1,
            2.8, 1.5, 8.7, 8.1, 8.1, 8.3, 7.4, 9.5, 7.9, 2.6, 8.5, 4.9, 7.6,
        ];
        let x2 = [
            5.9, 5.0, 4.3, 5.1, 3.3, 1.4, 8.3, 8.2, 10.6, 7.0, 6.1, 7.7, 1.6, 7.2, 5.3, 2.4, 2.0,
            5.5, 2.7, 5.5, 6.9, 4.8, 2.1, 5.6, 3.3, 3.1, 2.2, 4.5, 1.2, 7.3,
        ];
        let x = Array2::from_shape_fn((30, 2), |(i, j)| if j == 0 { x1[i] } else { x2[i] });
        let y = Array1::from_shape_fn(30, |i| 3.0 * x1[i] - x2[i]);
        dataset(x, y)
    }

    #[test]
    fn components_reject_contradicting_sign() {
        let data = opposed_loadings();
        let config = SearchConfig { max_components: Some(1), ..SearchConfig::default() };
        let search = CombinationSearch::with_config(&data, config).unwrap();
        let mut ctx = search.context().unwrap();
        assert!(ctx.signs().correlation(1).unwrap() < 0.0);

        let both: VariableSet = [0, 1].into_iter().collect();
        let evaluation = search.evaluate(&mut ctx, &both).unwrap();
        match evaluation.rejection() {
            Some(Rejection::SignMismatch { variable: 1, coefficient, components: 1 }) => {
                assert!(*coefficient > 0.0);
            }
            other => panic!("expected a sign mismatch on x2, got {other:?}"),
        }
    }

    #[test]
    fn second_component_restores_signs() {
        let data = opposed_loadings();
        let search = CombinationSearch::new(&data).unwrap();
        let mut ctx = search.context().unwrap();

        let both: VariableSet = [0, 1].into_iter().collect();
        let model = search.evaluate(&mut ctx, &both).unwrap().model().cloned().unwrap();
        assert_eq!(model.retained_components, 2);
        assert_relative_eq!(model.coefficients[0], 3.0, epsilon = 1e-8);
        assert_relative_eq!(model.coefficients[1], -1.0, epsilon = 1e-8);
    }

    #[test]
    fn direct_fit_needs_residual_degrees_of_freedom() {
        let x = Array2::from_shape_fn((7, 6), |(i, j)| ((i + 1) * (j + 2) % 7) as f64 + 0.1 * j as f64);
        let y = Array1::from_shape_fn(7, |i| 1.0 + 0.5 * i as f64);
        let data = dataset(x, y);
        let search = CombinationSearch::with_config(&data, ols_config()).unwrap();
        let mut ctx = search.context().unwrap();

        let all: VariableSet = (0..6).collect();
        let evaluation = search.evaluate(&mut ctx, &all).unwrap();
        assert_eq!(evaluation.rejection(), Some(&Rejection::TooFewObservations { available: 7 }));

        let triple: VariableSet = [0, 1, 2].into_iter().collect();
        let evaluation = search.evaluate(&mut ctx, &triple).unwrap();
        assert_eq!(evaluation.rejection(), Some(&Rejection::TooFewObservations { available: 7 }));

        let single = search.evaluate(&mut ctx, &VariableSet::single(0)).unwrap();
        assert!(!matches!(single.rejection(), Some(Rejection::TooFewObservations { .. })));
    }

    #[test]
    fn invalid_config_rejected() {
        let data = suppressor();
        let config = SearchConfig { max_combinations: 0, ..SearchConfig::default() };
        assert!(matches!(
            CombinationSearch::with_config(&data, config),
            Err(ModelError::InvalidConfig(_))
        ));
    }
}
