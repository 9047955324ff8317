//! Cyclic Jacobi eigen decomposition for real symmetric matrices.

use ndarray::{Array1, Array2};

use crate::MathError;

/// Maximum number of sweeps before the decomposition is declared failed.
pub const MAX_SWEEPS: usize = 50;

/// Lifecycle of a [`JacobiEigen`] decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EigenStatus {
    /// [`JacobiEigen::solve`] has not been called.
    NotCalculated,
    /// All off-diagonal entries were annihilated.
    Converged,
    /// The sweep budget ran out.
    Failed,
}

/// Jacobi eigen solver.
///
/// Only the upper triangle of the input is read. Eigenvalues are returned in
/// descending order with eigenvectors as the matching columns. Outputs are
/// only exposed once the decomposition has converged.
#[derive(Debug, Clone)]
pub struct JacobiEigen {
    matrix: Array2<f64>,
    values: Array1<f64>,
    vectors: Array2<f64>,
    status: EigenStatus,
    sweeps: usize,
}

impl JacobiEigen {
    /// Prepare a decomposition of a symmetric matrix.
    ///
    /// # Errors
    /// Returns error if the matrix is empty or not square.
    pub fn new(matrix: &Array2<f64>) -> Result<Self, MathError> {
        let n = matrix.nrows();
        if n == 0 {
            return Err(MathError::EmptyData);
        }
        if matrix.ncols() != n {
            return Err(MathError::NotSquare { rows: n, cols: matrix.ncols() });
        }
        Ok(Self {
            matrix: matrix.to_owned(),
            values: Array1::zeros(n),
            vectors: Array2::eye(n),
            status: EigenStatus::NotCalculated,
            sweeps: 0,
        })
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> EigenStatus {
        self.status
    }

    /// Number of sweeps used by [`Self::solve`].
    #[must_use]
    pub const fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Eigenvalues in descending order, if converged.
    #[must_use]
    pub fn eigenvalues(&self) -> Option<&Array1<f64>> {
        (self.status == EigenStatus::Converged).then_some(&self.values)
    }

    /// Eigenvectors as columns matching [`Self::eigenvalues`], if converged.
    #[must_use]
    pub fn eigenvectors(&self) -> Option<&Array2<f64>> {
        (self.status == EigenStatus::Converged).then_some(&self.vectors)
    }

    /// Run the decomposition. Terminal: later calls return the first outcome.
    pub fn solve(&mut self) -> EigenStatus {
        if self.status != EigenStatus::NotCalculated {
            return self.status;
        }

        let n = self.matrix.nrows();
        let a = &mut self.matrix;
        let v = &mut self.vectors;
        let mut b: Array1<f64> = a.diag().to_owned();
        let mut d = b.clone();
        let mut z: Array1<f64> = Array1::zeros(n);

        for sweep in 1..=MAX_SWEEPS {
            self.sweeps = sweep;

            let mut off_diagonal = 0.0;
            for p in 0..n {
                for q in (p + 1)..n {
                    off_diagonal += a[[p, q]].abs();
                }
            }

            if off_diagonal == 0.0 {
                sort_descending(&mut d, v);
                self.values = d;
                self.status = EigenStatus::Converged;
                return self.status;
            }

            let threshold =
                if sweep < 4 { 0.2 * off_diagonal / (n * n) as f64 } else { 0.0 };

            for p in 0..n.saturating_sub(1) {
                for q in (p + 1)..n {
                    let apq = a[[p, q]];
                    let g = 100.0 * apq.abs();

                    if sweep > 4 && d[p].abs() + g == d[p].abs() && d[q].abs() + g == d[q].abs() {
                        a[[p, q]] = 0.0;
                    } else if apq.abs() > threshold {
                        let gap = d[q] - d[p];
                        let t = if gap.abs() + g == gap.abs() {
                            apq / gap
                        } else {
                            let theta = 0.5 * gap / apq;
                            let t = 1.0 / (theta.abs() + (1.0 + theta * theta).sqrt());
                            if theta < 0.0 { -t } else { t }
                        };
                        let c = 1.0 / (1.0 + t * t).sqrt();
                        let s = t * c;
                        let tau = s / (1.0 + c);
                        let h = t * apq;

                        z[p] -= h;
                        z[q] += h;
                        d[p] -= h;
                        d[q] += h;
                        a[[p, q]] = 0.0;

                        for j in 0..p {
                            rotate(a, s, tau, (j, p), (j, q));
                        }
                        for j in (p + 1)..q {
                            rotate(a, s, tau, (p, j), (j, q));
                        }
                        for j in (q + 1)..n {
                            rotate(a, s, tau, (p, j), (q, j));
                        }
                        for j in 0..n {
                            rotate(v, s, tau, (j, p), (j, q));
                        }
                    }
                }
            }

            b += &z;
            d.assign(&b);
            z.fill(0.0);
        }

        self.status = EigenStatus::Failed;
        self.status
    }
}

fn rotate(
    m: &mut Array2<f64>,
    s: f64,
    tau: f64,
    (i, j): (usize, usize),
    (k, l): (usize, usize),
) {
    let g = m[[i, j]];
    let h = m[[k, l]];
    m[[i, j]] = g - s * (h + g * tau);
    m[[k, l]] = h + s * (g - h * tau);
}

/// Straight insertion sort, descending, permuting eigenvector columns in step.
fn sort_descending(values: &mut Array1<f64>, vectors: &mut Array2<f64>) {
    for i in 1..values.len() {
        let value = values[i];
        let column = vectors.column(i).to_owned();
        let mut j = i;
        while j > 0 && values[j - 1] < value {
            values[j] = values[j - 1];
            let previous = vectors.column(j - 1).to_owned();
            vectors.column_mut(j).assign(&previous);
            j -= 1;
        }
        values[j] = value;
        vectors.column_mut(j).assign(&column);
    }
}
