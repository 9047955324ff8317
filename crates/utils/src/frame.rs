//! Conversion of tabular data into a [`Dataset`].

use std::path::Path;

use ndarray::{Array1, Array2};
use polars::prelude::*;
use regsearch_primitives::Dataset;

use crate::{UtilsError, fill_missing};

/// Build a dataset from a frame.
///
/// `dependent` names the dependent column; every other numeric column becomes
/// an independent variable, in frame order, named after its column. Text and
/// other non-numeric columns are skipped. Nulls are replaced by `missing`,
/// which serves as the sentinel for both sides.
///
/// # Errors
/// Returns `UtilsError::MissingColumn` if `dependent` is absent,
/// `UtilsError::InvalidParameter` if it is not numeric or no numeric column
/// remains besides it, and a polars error if a column cannot be cast to float.
pub fn dataset_from_frame(
    df: &DataFrame,
    dependent: &str,
    missing: f64,
) -> Result<Dataset, UtilsError> {
    let dependent_dtype = df
        .column(dependent)
        .map_err(|_| UtilsError::MissingColumn(dependent.to_string()))?
        .dtype();
    if !dependent_dtype.is_primitive_numeric() {
        return Err(UtilsError::InvalidParameter(format!(
            "dependent column '{dependent}' is not numeric ({dependent_dtype})"
        )));
    }

    let independent: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| column.name().as_str() != dependent && column.dtype().is_primitive_numeric())
        .map(|column| column.name().to_string())
        .collect();
    if independent.is_empty() {
        return Err(UtilsError::InvalidParameter(format!(
            "no numeric independent columns besides '{dependent}'"
        )));
    }

    let mut all: Vec<&str> = independent.iter().map(String::as_str).collect();
    all.push(dependent);
    let filled = fill_missing(df.clone().lazy(), &all, missing).collect()?;

    let y: Array1<f64> = filled.column(dependent)?.f64()?.into_no_null_iter().collect();
    let mut x = Array2::zeros((filled.height(), independent.len()));
    for (j, name) in independent.iter().enumerate() {
        let values = filled.column(name)?.f64()?;
        for (i, value) in values.into_no_null_iter().enumerate() {
            x[[i, j]] = value;
        }
    }

    let dataset = Dataset::new(x, y, missing, missing)?.with_names(independent)?;
    Ok(dataset)
}

/// Read a CSV file with a header row into a dataset.
///
/// # Errors
/// See [`dataset_from_frame`]; also fails if the file cannot be read.
pub fn load_csv(
    path: impl AsRef<Path>,
    dependent: &str,
    missing: f64,
) -> Result<Dataset, UtilsError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    dataset_from_frame(&df, dependent, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df! {
            "rainfall" => &[Some(1.0), Some(2.0), None, Some(4.0)],
            "yield" => &[Some(10.5), Some(12.0), Some(13.5), None],
            "sunshine" => &[3, 1, 4, 1],
        }
        .unwrap()
    }

    #[test]
    fn splits_dependent_from_independent() {
        let data = dataset_from_frame(&frame(), "yield", -999.0).unwrap();

        assert_eq!(data.n_observations(), 4);
        assert_eq!(data.n_variables(), 2);
        assert_eq!(data.names(), &["rainfall".to_string(), "sunshine".to_string()]);
        assert_eq!(data.variable(1).to_vec(), vec![3.0, 1.0, 4.0, 1.0]);
        assert_eq!(data.dependent()[1], 12.0);
    }

    #[test]
    fn nulls_are_missing() {
        let data = dataset_from_frame(&frame(), "yield", -999.0).unwrap();

        assert!(data.is_missing_independent(2, 0));
        assert!(!data.is_missing_independent(2, 1));
        assert!(data.is_missing_dependent(3));
        assert_eq!(data.independent_missing(), -999.0);
    }

    #[test]
    fn unknown_dependent_column() {
        let result = dataset_from_frame(&frame(), "price", -999.0);
        assert!(matches!(result, Err(UtilsError::MissingColumn(name)) if name == "price"));
    }

    #[test]
    fn needs_an_independent_column() {
        let df = df! { "y" => &[1.0, 2.0] }.unwrap();
        let result = dataset_from_frame(&df, "y", -999.0);
        assert!(matches!(result, Err(UtilsError::InvalidParameter(_))));
    }

    #[test]
    fn text_columns_are_skipped() {
        let df = df! {
            "site" => &["north", "south", "east", "west"],
            "rain" => &[1.0, 2.0, 3.0, 4.0],
            "yield" => &[2.5, 3.1, 4.2, 4.8],
        }
        .unwrap();

        let data = dataset_from_frame(&df, "yield", -999.0).unwrap();

        assert_eq!(data.n_variables(), 1);
        assert_eq!(data.names(), &["rain".to_string()]);
        assert_eq!(data.variable(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn text_dependent_is_rejected() {
        let df = df! {
            "site" => &["north", "south"],
            "rain" => &[1.0, 2.0],
        }
        .unwrap();

        let result = dataset_from_frame(&df, "site", -999.0);
        assert!(matches!(result, Err(UtilsError::InvalidParameter(msg)) if msg.contains("site")));
    }

    #[test]
    fn reads_csv_with_header() {
        let path = std::env::temp_dir().join(format!("regsearch-utils-{}.csv", std::process::id()));
        std::fs::write(&path, "a,b,y\n1,2,3\n4,,6\n7,8,9\n").unwrap();

        let data = load_csv(&path, "y", -1.0).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(data.n_variables(), 2);
        assert_eq!(data.dependent().to_vec(), vec![3.0, 6.0, 9.0]);
        assert!(data.is_missing_independent(1, 1));
    }
}
