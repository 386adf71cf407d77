//! Pairwise correlation matrix over numeric columns.

use serde::Serialize;

/// Square, symmetric matrix of Pearson coefficients.
///
/// Entries are NaN where the coefficient is undefined: fewer than two rows
/// with both values present, or a column with zero variance (including its
/// own diagonal entry). NaN serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub(crate) fn new(columns: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Numeric column names indexing both axes.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows of the matrix, in `columns()` order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coefficient between two columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.values[i][j])
    }

    /// Coefficient by position.
    pub fn get_by_index(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i)?.get(j).copied()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
