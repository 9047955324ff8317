//! Dense matrix operations and maximal-pivot Gauss-Jordan elimination.

use ndarray::{Array1, Array2};

use crate::MathError;

/// Smallest pivot magnitude accepted by [`gauss_jordan`].
pub const EPS: f64 = 1e-10;

/// What [`gauss_jordan`] should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InversionMode {
    /// Inverse only.
    Inverse,
    /// Inverse and the solution of `A x = b`.
    InverseAndSolve,
    /// Solution only; the in-place inverse is never unscrambled.
    SolveOnly,
}

impl InversionMode {
    const fn wants_inverse(self) -> bool {
        matches!(self, Self::Inverse | Self::InverseAndSolve)
    }

    const fn wants_solution(self) -> bool {
        matches!(self, Self::InverseAndSolve | Self::SolveOnly)
    }
}

/// Result of a Gauss-Jordan elimination.
///
/// A singular matrix is reported with a determinant of exactly `0.0` and no
/// inverse or solution; partial results are never returned. A non-singular
/// matrix can still report a zero determinant when the pivot product
/// underflows.
#[derive(Debug, Clone)]
pub struct Inversion {
    /// Determinant of the input matrix.
    pub determinant: f64,
    /// Inverse of the input matrix, when requested and non-singular.
    pub inverse: Option<Array2<f64>>,
    /// Solution of the linear system, when requested and non-singular.
    pub solution: Option<Array1<f64>>,
}

impl Inversion {
    fn singular() -> Self {
        Self { determinant: 0.0, inverse: None, solution: None }
    }

    /// Whether elimination ran out of usable pivots.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        self.inverse.is_none() && self.solution.is_none()
    }
}

/// Multiply a matrix by a column vector.
///
/// # Errors
/// Returns error on empty input or when `a.ncols() != x.len()`.
pub fn multiply_vector(a: &Array2<f64>, x: &Array1<f64>) -> Result<Array1<f64>, MathError> {
    if a.is_empty() || x.is_empty() {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != x.len() {
        return Err(MathError::DimensionMismatch { expected: a.ncols(), actual: x.len() });
    }
    Ok(a.dot(x))
}

/// Multiply two matrices.
///
/// # Errors
/// Returns error on empty input or when `a.ncols() != b.nrows()`.
pub fn multiply(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>, MathError> {
    if a.is_empty() || b.is_empty() {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != b.nrows() {
        return Err(MathError::DimensionMismatch { expected: a.ncols(), actual: b.nrows() });
    }
    Ok(a.dot(b))
}

/// Owned transpose of a matrix.
///
/// # Errors
/// Returns error on empty input.
pub fn transpose(a: &Array2<f64>) -> Result<Array2<f64>, MathError> {
    if a.is_empty() {
        return Err(MathError::EmptyData);
    }
    Ok(a.t().to_owned())
}

/// Invert a square matrix.
///
/// # Errors
/// Returns error if the matrix is empty or not square.
pub fn inverse(a: &Array2<f64>) -> Result<Inversion, MathError> {
    gauss_jordan(a, None, InversionMode::Inverse)
}

/// Solve `A x = b` without materialising the inverse.
///
/// # Errors
/// Returns error if the matrix is empty, not square, or `b` has the wrong length.
pub fn solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Inversion, MathError> {
    gauss_jordan(a, Some(b), InversionMode::SolveOnly)
}

/// Gauss-Jordan elimination with full (maximal) pivoting.
///
/// Each of the `n` rounds picks the largest remaining entry whose row and
/// column have not yet been pivoted, normalizes that row and clears the pivot
/// column from every other row. The matrix is inverted in place; afterwards
/// the recorded pivot pairs are used to recover the determinant sign and to
/// unscramble rows and then columns of the inverse.
///
/// # Arguments
/// * `a` - Square matrix (n x n)
/// * `rhs` - Right-hand side (n,), required unless `mode` is [`InversionMode::Inverse`]
/// * `mode` - Which outputs to produce
///
/// # Errors
/// Returns error for empty or non-square input, or a missing/mis-sized right-hand side.
pub fn gauss_jordan(
    a: &Array2<f64>,
    rhs: Option<&Array1<f64>>,
    mode: InversionMode,
) -> Result<Inversion, MathError> {
    let n = a.nrows();
    if n == 0 || a.ncols() == 0 {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != n {
        return Err(MathError::NotSquare { rows: n, cols: a.ncols() });
    }

    let mut b = match rhs {
        Some(b) if b.len() != n => {
            return Err(MathError::DimensionMismatch { expected: n, actual: b.len() });
        }
        Some(b) => b.to_owned(),
        None if mode.wants_solution() => {
            return Err(MathError::DimensionMismatch { expected: n, actual: 0 });
        }
        None => Array1::zeros(n),
    };

    let mut m = a.to_owned();
    let mut row_used = vec![false; n];
    let mut col_used = vec![false; n];
    let mut pivots: Vec<(usize, usize)> = Vec::with_capacity(n);
    let mut product = 1.0;

    for _ in 0..n {
        let mut best = 0.0;
        let mut found = None;
        for i in (0..n).filter(|&i| !row_used[i]) {
            for j in (0..n).filter(|&j| !col_used[j]) {
                let magnitude = m[[i, j]].abs();
                if magnitude > best {
                    best = magnitude;
                    found = Some((i, j));
                }
            }
        }

        let Some((pr, pc)) = found else {
            return Ok(Inversion::singular());
        };
        if best <= EPS {
            return Ok(Inversion::singular());
        }

        row_used[pr] = true;
        col_used[pc] = true;

        let pivot = m[[pr, pc]];
        product *= pivot;

        // The pivot slot becomes the matching inverse entry.
        m[[pr, pc]] = 1.0;
        for j in 0..n {
            m[[pr, j]] /= pivot;
        }
        b[pr] /= pivot;

        for i in 0..n {
            if i == pr {
                continue;
            }
            let factor = m[[i, pc]];
            if factor == 0.0 {
                continue;
            }
            m[[i, pc]] = 0.0;
            for j in 0..n {
                m[[i, j]] -= factor * m[[pr, j]];
            }
            b[i] -= factor * b[pr];
        }

        pivots.push((pr, pc));
    }

    let mut permutation = vec![0; n];
    for &(row, col) in &pivots {
        permutation[row] = col;
    }
    let determinant = if count_inversions(&permutation) % 2 == 1 { -product } else { product };

    let inverse = if mode.wants_inverse() {
        let mut rows = Array2::zeros((n, n));
        for &(row, col) in &pivots {
            rows.row_mut(col).assign(&m.row(row));
        }
        let mut inv = Array2::zeros((n, n));
        for &(row, col) in &pivots {
            inv.column_mut(row).assign(&rows.column(col));
        }
        Some(inv)
    } else {
        None
    };

    let solution = if mode.wants_solution() {
        let mut x = Array1::zeros(n);
        for &(row, col) in &pivots {
            x[col] = b[row];
        }
        Some(x)
    } else {
        None
    };

    Ok(Inversion { determinant, inverse, solution })
}

fn count_inversions(permutation: &[usize]) -> usize {
    let mut count = 0;
    for i in 0..permutation.len() {
        for j in (i + 1)..permutation.len() {
            if permutation[i] > permutation[j] {
                count += 1;
            }
        }
    }
    count
}

/// Indirect heap sort.
///
/// Returns `index` such that `values[index[j]]` is ascending in `j`.
#[must_use]
pub fn sort_indices(values: &[f64]) -> Vec<usize> {
    let n = values.len();
    let mut index: Vec<usize> = (0..n).collect();
    if n < 2 {
        return index;
    }

    for start in (0..n / 2).rev() {
        sift_down(values, &mut index, start, n);
    }
    for end in (1..n).rev() {
        index.swap(0, end);
        sift_down(values, &mut index, 0, end);
    }

    index
}

fn sift_down(values: &[f64], index: &mut [usize], mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && values[index[child]].total_cmp(&values[index[child + 1]]).is_lt() {
            child += 1;
        }
        if values[index[root]].total_cmp(&values[index[child]]).is_ge() {
            break;
        }
        index.swap(root, child);
        root = child;
    }
}
