use crate::consts::FEATURE_INDEX_LABEL;
use crate::error::{Result, ViewerError};
use crate::vector::FeatureTable;

/// One bar of an attribute chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBar {
    /// Row index in load order.
    pub x: f64,
    pub value: f64,
}

/// Bar chart of a single attribute column, one bar per feature.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeChart {
    pub attribute: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<ChartBar>,
}

impl AttributeChart {
    /// Build the chart for column `attribute` of `table`.
    pub fn from_table(table: &FeatureTable, attribute: &str) -> Result<Self> {
        let values = table
            .column_values(attribute)
            .ok_or_else(|| ViewerError::AttributeNotFound {
                name: attribute.to_string(),
            })?;

        let bars = values
            .iter()
            .enumerate()
            .map(|(row, value)| {
                value.as_bar_height().map(|height| ChartBar {
                    x: row as f64,
                    value: height,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ViewerError::AttributeNotNumeric {
                name: attribute.to_string(),
            })?;

        Ok(Self {
            attribute: attribute.to_string(),
            x_label: FEATURE_INDEX_LABEL.to_string(),
            y_label: attribute.to_string(),
            bars,
        })
    }
}
