//! Columnar numeric table read from CSV.

use std::path::Path;

use hk_core::{Error, Result};

/// A table of named, equal-length `f64` columns.
///
/// The backing file is CSV with one header row; every field must parse as a
/// number. Rows are read once into memory — histogram filling then runs over
/// the owned columns.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ColumnTable {
    /// Read a CSV file with a header row into named columns.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path.as_ref())
            .map_err(|e| Error::Csv(e.to_string()))?;

        let names: Vec<String> = rdr
            .headers()
            .map_err(|e| Error::Csv(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
        for (row, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| Error::Csv(e.to_string()))?;
            if record.len() != names.len() {
                return Err(Error::Csv(format!(
                    "row {} has {} fields, expected {}",
                    row + 1,
                    record.len(),
                    names.len()
                )));
            }
            for (col, field) in record.iter().enumerate() {
                let v: f64 = field.parse().map_err(|_| {
                    Error::Parse(format!("row {}, column '{}': '{}'", row + 1, names[col], field))
                })?;
                columns[col].push(v);
            }
        }

        Ok(Self { names, columns })
    }

    /// Build a table directly from named columns (testing and programmatic use).
    pub fn from_columns(cols: Vec<(String, Vec<f64>)>) -> Self {
        let (names, columns) = cols.into_iter().unzip();
        Self { names, columns }
    }

    /// Column by name.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Column names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }
}
