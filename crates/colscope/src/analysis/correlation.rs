//! Pearson correlation across numeric columns.

use tracing::debug;

use super::type_inference::TypeInferencer;
use crate::input::{Cell, Dataset};
use crate::schema::{ColumnType, CorrelationMatrix};

/// Computes the correlation matrix of a dataset's numeric columns.
#[derive(Debug, Clone, Default)]
pub struct CorrelationCalculator {
    inferencer: TypeInferencer,
}

impl CorrelationCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom inferencer to decide which columns are numeric.
    pub fn with_inferencer(inferencer: TypeInferencer) -> Self {
        Self { inferencer }
    }

    /// Correlate every numeric column, or `None` when there are none.
    pub fn compute(&self, dataset: &Dataset) -> Option<CorrelationMatrix> {
        let types: Vec<ColumnType> = dataset
            .columns()
            .iter()
            .map(|c| self.inferencer.infer(c).inferred_type)
            .collect();
        self.compute_with_types(dataset, &types)
    }

    /// Correlate using already inferred column types, one per column.
    pub fn compute_with_types(
        &self,
        dataset: &Dataset,
        types: &[ColumnType],
    ) -> Option<CorrelationMatrix> {
        let (names, series): (Vec<String>, Vec<Vec<Option<f64>>>) = dataset
            .columns()
            .iter()
            .zip(types)
            .filter(|(_, column_type)| column_type.is_numeric())
            .map(|(column, _)| {
                let values: Vec<Option<f64>> = column.cells.iter().map(Cell::as_f64).collect();
                (column.name.clone(), values)
            })
            .unzip();

        if names.is_empty() {
            debug!("no numeric columns to correlate");
            return None;
        }

        let n = series.len();
        let mut values = vec![vec![f64::NAN; n]; n];
        for i in 0..n {
            for j in i..n {
                let r = if i == j {
                    // Exactly 1.0 unless the column has no variance
                    if pearson(&series[i], &series[i]).is_nan() {
                        f64::NAN
                    } else {
                        1.0
                    }
                } else {
                    pearson(&series[i], &series[j])
                };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        debug!(columns = n, "computed correlation matrix");
        Some(CorrelationMatrix::new(names, values))
    }
}

/// Pearson coefficient over rows where both values are present.
fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let count = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / count;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / count;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }

    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}
