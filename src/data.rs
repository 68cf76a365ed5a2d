//! Sales table handling and series preparation

use crate::error::{ForecastError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Sales table backing a forecasting run
#[derive(Debug, Clone)]
pub struct SalesTable {
    /// Data frame containing the raw records
    df: DataFrame,
    /// Name of the numeric sales column
    sales_column: String,
    /// Name of the categorical item-type column
    category_column: String,
}

/// Data loader for sales tables
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a sales table from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<SalesTable> {
        let file = File::open(path)?;
        // Use polars DataFrame reader directly
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::detect_and_create_table(df)
    }

    /// Create a sales table from an existing DataFrame
    pub fn from_dataframe(df: DataFrame) -> Result<SalesTable> {
        Self::detect_and_create_table(df)
    }

    /// Detect sales and category columns in a DataFrame and create SalesTable
    fn detect_and_create_table(df: DataFrame) -> Result<SalesTable> {
        if df.height() == 0 {
            return Err(ForecastError::InputError(
                "Input table has no rows".to_string(),
            ));
        }

        let sales_column = Self::detect_sales_column(&df)?;
        let category_column = Self::detect_category_column(&df)?;

        Ok(SalesTable {
            df,
            sales_column,
            category_column,
        })
    }

    /// Detect the numeric sales column in a DataFrame
    fn detect_sales_column(df: &DataFrame) -> Result<String> {
        let column_names = df.get_column_names();

        // Look for common sales column names
        for name in &column_names {
            let lower_name = name.to_lowercase();
            if lower_name.contains("sales")
                || lower_name.contains("value")
                || lower_name.contains("amount")
            {
                return Ok(name.to_string());
            }
        }

        // If not found, use the first numeric column
        for col in df.get_columns() {
            if col.dtype().is_numeric() {
                return Ok(col.name().to_string());
            }
        }

        Err(ForecastError::InputError(
            "No numeric sales column found in data".to_string(),
        ))
    }

    /// Detect the categorical item-type column in a DataFrame
    fn detect_category_column(df: &DataFrame) -> Result<String> {
        let column_names = df.get_column_names();

        // Look for common category column names
        for name in &column_names {
            let lower_name = name.to_lowercase();
            if lower_name.contains("item")
                || lower_name.contains("type")
                || lower_name.contains("category")
            {
                return Ok(name.to_string());
            }
        }

        // If not found, use the first string column
        for col in df.get_columns() {
            if col.dtype() == &DataType::Utf8 {
                return Ok(col.name().to_string());
            }
        }

        Err(ForecastError::InputError(
            "No categorical item-type column found in data".to_string(),
        ))
    }
}

impl SalesTable {
    /// Create a new SalesTable from parallel category and value vectors (for testing)
    pub fn from_records(categories: Vec<&str>, values: Vec<f64>) -> Result<Self> {
        if categories.len() != values.len() {
            return Err(ForecastError::InputError(format!(
                "Category count ({}) doesn't match value count ({})",
                categories.len(),
                values.len()
            )));
        }

        let category_series = Series::new("Item_Type", categories);
        let sales_series = Series::new("Sales", values);
        let df = DataFrame::new(vec![category_series, sales_series])?;

        DataLoader::from_dataframe(df)
    }

    /// Get the DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get the sales column name
    pub fn sales_column(&self) -> &str {
        &self.sales_column
    }

    /// Get the category column name
    pub fn category_column(&self) -> &str {
        &self.category_column
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.df.height()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Order the records by category and split them into parallel
    /// value/category sequences ready for forecasting.
    pub fn prepare(&self) -> Result<PreparedSeries> {
        let values = self.column_as_f64(&self.sales_column)?;
        let categories = self.column_as_strings(&self.category_column)?;

        PreparedSeries::from_records(
            categories
                .into_iter()
                .zip(values)
                .collect::<Vec<(String, f64)>>(),
        )
    }

    /// Helper method to get a column as f64 values, rejecting nulls
    fn column_as_f64(&self, column_name: &str) -> Result<Vec<f64>> {
        let col = self.df.column(column_name).map_err(|e| {
            ForecastError::InputError(format!("Column '{}' not found: {}", column_name, e))
        })?;

        let cast = match col.dtype() {
            DataType::Float64 => col.clone(),
            DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::UInt64
            | DataType::UInt32 => col.cast(&DataType::Float64)?,
            other => {
                return Err(ForecastError::InputError(format!(
                    "Column '{}' is not numeric (found {})",
                    column_name, other
                )))
            }
        };

        let mut values = Vec::with_capacity(cast.len());
        for (row, value) in cast.f64().unwrap().into_iter().enumerate() {
            match value {
                Some(v) => values.push(v),
                None => {
                    return Err(ForecastError::InputError(format!(
                        "Column '{}' has a non-numeric value at row {}",
                        column_name, row
                    )))
                }
            }
        }

        Ok(values)
    }

    /// Helper method to get a column as strings, rejecting nulls
    fn column_as_strings(&self, column_name: &str) -> Result<Vec<String>> {
        let col = self.df.column(column_name).map_err(|e| {
            ForecastError::InputError(format!("Column '{}' not found: {}", column_name, e))
        })?;

        let ca = col.utf8().map_err(|_| {
            ForecastError::InputError(format!(
                "Column '{}' is not categorical (found {})",
                column_name,
                col.dtype()
            ))
        })?;

        let mut labels = Vec::with_capacity(ca.len());
        for (row, label) in ca.into_iter().enumerate() {
            match label {
                Some(l) => labels.push(l.to_string()),
                None => {
                    return Err(ForecastError::InputError(format!(
                        "Column '{}' has a missing label at row {}",
                        column_name, row
                    )))
                }
            }
        }

        Ok(labels)
    }
}

/// Category-ordered value sequence produced by [`SalesTable::prepare`].
///
/// Index position is the time axis for forecasting; `values[i]` and
/// `categories[i]` refer to the same original record.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    values: Vec<f64>,
    categories: Vec<String>,
}

impl PreparedSeries {
    /// Build a prepared series from (category, value) records.
    ///
    /// Records are sorted by category ascending; records sharing a category
    /// keep their original relative order. No filtering, no deduplication.
    pub fn from_records(mut records: Vec<(String, f64)>) -> Result<Self> {
        if records.is_empty() {
            return Err(ForecastError::InputError(
                "Input table has no rows".to_string(),
            ));
        }

        // Vec::sort_by is stable
        records.sort_by(|a, b| a.0.cmp(&b.0));

        let (categories, values) = records.into_iter().unzip();

        Ok(Self { values, categories })
    }

    /// Get the ordered sales values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the category labels parallel to the values
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
