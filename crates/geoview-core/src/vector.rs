use std::collections::HashMap;
use std::path::PathBuf;

/// One cell of a feature's attribute row.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

impl AttributeValue {
    /// Numeric value for charting. Null charts as zero; text has no numeric value.
    pub fn as_bar_height(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Real(v) => Some(*v),
            Self::Null => Some(0.0),
            Self::Text(_) => None,
        }
    }
}

/// A single feature's attribute row plus the name of its geometry type.
#[derive(Clone, Debug, Default)]
pub struct FeatureRow {
    pub values: HashMap<String, AttributeValue>,
    pub geometry_type: Option<String>,
}

/// An attribute table loaded from a vector file. Immutable after load.
#[derive(Clone, Debug, Default)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    pub fn new(columns: Vec<String>, rows: Vec<FeatureRow>) -> Self {
        Self { columns, rows }
    }

    /// Column names in layer order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Feature rows in load order.
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Values of one column in row order, or `None` if the column does not exist.
    /// A row missing the key yields `Null`.
    pub fn column_values(&self, name: &str) -> Option<Vec<AttributeValue>> {
        if !self.has_column(name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.values.get(name).cloned().unwrap_or(AttributeValue::Null))
                .collect(),
        )
    }

    /// Distinct geometry type names, in first-seen order.
    pub fn geometry_types(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for ty in self.rows.iter().filter_map(|r| r.geometry_type.as_ref()) {
            if !seen.contains(ty) {
                seen.push(ty.clone());
            }
        }
        seen
    }
}

/// Summary of the currently loaded vector file.
#[derive(Clone, Debug)]
pub struct VectorInfo {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub row_count: usize,
}
