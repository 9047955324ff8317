//! Missing-value filling.

use polars::prelude::*;

/// Replace nulls in the given columns with a sentinel.
///
/// Columns are cast to float first. NaN values are left in place; the
/// search treats them as missing as well.
///
/// # Arguments
/// * `df` - Input LazyFrame
/// * `columns` - Column names to fill
/// * `sentinel` - Value written in place of nulls
///
/// # Returns
/// LazyFrame with filled columns.
pub fn fill_missing(df: LazyFrame, columns: &[&str], sentinel: f64) -> LazyFrame {
    let mut lf = df;

    for &name in columns {
        lf = lf.with_column(
            col(name).cast(DataType::Float64).fill_null(lit(sentinel)).alias(name),
        );
    }

    lf
}
