//! Grid coordinate to cell mapping.
//!
//! Rows are visual indexes. Removed rows disappear from the grid, so a
//! visual row is first mapped to its data row; data rows past the end of
//! the variant list are rows added in this editing session. Pending edits
//! are keyed by column id and data row and the latest one wins.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::columns::{AvailableColumn, ColumnRef, parse_column_id};
use super::{ChannelData, Choice, ProductVariant};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { value: String },
    Money { amount: Option<f64>, currency: String },
    Availability { available: bool },
    Stock { quantity: Option<i64> },
    Dropdown { attribute_id: String, values: Vec<Choice> },
    Empty,
}

/// One pending edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellChange {
    pub column: String,
    pub row: usize,
    pub data: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatagridChanges {
    #[serde(default)]
    pub updates: Vec<CellChange>,
    /// Removed data rows, ascending and unique.
    #[serde(default, deserialize_with = "sorted_rows")]
    removed_rows: Vec<usize>,
    /// Data row indexes of rows added in this session.
    #[serde(default)]
    pub added_rows: Vec<usize>,
}

impl DatagridChanges {
    #[must_use]
    pub fn with_removed_rows(mut self, rows: impl IntoIterator<Item = usize>) -> Self {
        for row in rows {
            self.remove_row(row);
        }
        self
    }

    /// Mark a data row removed.
    pub fn remove_row(&mut self, row: usize) {
        if let Err(pos) = self.removed_rows.binary_search(&row) {
            self.removed_rows.insert(pos, row);
        }
    }

    #[must_use]
    pub fn removed_rows(&self) -> &[usize] {
        &self.removed_rows
    }

    fn latest(&self, column: &str, data_row: usize) -> Option<&Value> {
        self.updates
            .iter()
            .rev()
            .find(|c| c.column == column && c.row == data_row)
            .map(|c| &c.data)
    }
}

fn sorted_rows<'de, D>(deserializer: D) -> Result<Vec<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut rows = Vec::<usize>::deserialize(deserializer)?;
    rows.sort_unstable();
    rows.dedup();
    Ok(rows)
}

#[derive(Debug, Clone, Copy)]
pub struct GridContext<'a> {
    pub channels: &'a [ChannelData],
    pub variants: &'a [ProductVariant],
    pub changes: &'a DatagridChanges,
}

impl GridContext<'_> {
    fn currency(&self, channel_id: &str, variant: Option<&ProductVariant>) -> String {
        self.channels
            .iter()
            .find(|c| c.id == channel_id)
            .map(|c| c.currency.clone())
            .or_else(|| variant.and_then(|v| v.listing(channel_id)).map(|l| l.currency.clone()))
            .unwrap_or_default()
    }
}

/// Map a visual row to its data row by skipping removed rows.
/// `removed` must be ascending and unique, as [`DatagridChanges`] keeps it.
#[must_use]
pub fn row_data_index(row: usize, removed: &[usize]) -> usize {
    removed
        .iter()
        .fold(row, |acc, &r| if r <= acc { acc + 1 } else { acc })
}

/// Variant id behind a visual row, for the "Edit Variant" row action.
#[must_use]
pub fn row_variant_id<'a>(row: usize, ctx: &GridContext<'a>) -> Option<&'a str> {
    let data_row = row_data_index(row, ctx.changes.removed_rows());
    ctx.variants.get(data_row).map(|v| v.id.as_str())
}

#[must_use]
pub fn cell_content(columns: &[AvailableColumn], column: usize, row: usize, ctx: &GridContext<'_>) -> Cell {
    let Some(column) = columns.get(column) else {
        return Cell::Empty;
    };
    let data_row = row_data_index(row, ctx.changes.removed_rows());
    let variant = ctx.variants.get(data_row);
    let change = ctx.changes.latest(&column.id, data_row);

    match parse_column_id(&column.id) {
        ColumnRef::Name => Cell::Text {
            value: change
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| variant.map(|v| v.name.clone()))
                .unwrap_or_default(),
        },
        ColumnRef::Sku => Cell::Text {
            value: change
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| variant.and_then(|v| v.sku.clone()))
                .unwrap_or_default(),
        },
        ColumnRef::ChannelPrice(channel_id) => Cell::Money {
            amount: match change {
                Some(data) => data.as_f64(),
                None => variant
                    .and_then(|v| v.listing(channel_id))
                    .and_then(|l| l.price),
            },
            currency: ctx.currency(channel_id, variant),
        },
        ColumnRef::ChannelAvailability(channel_id) => Cell::Availability {
            available: change
                .and_then(Value::as_bool)
                .unwrap_or_else(|| variant.is_some_and(|v| v.listing(channel_id).is_some())),
        },
        ColumnRef::Warehouse(warehouse_id) => Cell::Stock {
            quantity: match change {
                Some(data) => data.as_i64(),
                None => variant
                    .and_then(|v| v.stock(warehouse_id))
                    .map(|s| s.quantity),
            },
        },
        ColumnRef::Attribute(attribute_id) => {
            let values = change
                .and_then(|data| serde_json::from_value::<Vec<Choice>>(data.clone()).ok())
                .unwrap_or_else(|| variant.map(|v| v.attribute_values(attribute_id).to_vec()).unwrap_or_default());
            Cell::Dropdown { attribute_id: attribute_id.to_string(), values }
        }
        ColumnRef::Unknown => Cell::Empty,
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Server-side validation failure from a bulk variant save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum VariantListError {
    /// `field` is `name` or `sku`; attribute errors list attribute ids.
    VariantData {
        variant_id: String,
        #[serde(default)]
        field: Option<String>,
        #[serde(default)]
        attribute_ids: Vec<String>,
    },
    ChannelListing { variant_id: String, channel_ids: Vec<String> },
    Stock { variant_id: String, warehouse_id: String },
    /// Failure creating the `index`-th added row. No field marks the whole row.
    Create {
        index: usize,
        #[serde(default)]
        field: Option<String>,
    },
}

#[must_use]
pub fn cell_error(
    errors: &[VariantListError],
    columns: &[AvailableColumn],
    column: usize,
    row: usize,
    ctx: &GridContext<'_>,
) -> bool {
    let Some(column) = columns.get(column) else {
        return false;
    };
    let column = parse_column_id(&column.id);
    let data_row = row_data_index(row, ctx.changes.removed_rows());

    if let Some(variant) = ctx.variants.get(data_row) {
        return errors
            .iter()
            .any(|err| existing_row_error(err, &variant.id, column));
    }

    let Some(added_index) = ctx
        .changes
        .added_rows
        .iter()
        .position(|r| *r == data_row)
    else {
        return false;
    };
    errors.iter().any(|err| match err {
        VariantListError::Create { index, field } => {
            *index == added_index && field.as_deref().is_none_or(|f| field_matches(f, column))
        }
        _ => false,
    })
}

fn existing_row_error(err: &VariantListError, id: &str, column: ColumnRef<'_>) -> bool {
    match (err, column) {
        (VariantListError::VariantData { variant_id, field, attribute_ids }, _) if variant_id == id => match column {
            ColumnRef::Attribute(attr) => attribute_ids.iter().any(|a| a == attr),
            _ => field.as_deref().is_some_and(|f| field_matches(f, column)),
        },
        (
            VariantListError::ChannelListing { variant_id, channel_ids },
            ColumnRef::ChannelPrice(ch) | ColumnRef::ChannelAvailability(ch),
        ) if variant_id == id => channel_ids.iter().any(|c| c == ch),
        (VariantListError::Stock { variant_id, warehouse_id }, ColumnRef::Warehouse(wh)) if variant_id == id => {
            warehouse_id == wh
        }
        _ => false,
    }
}

fn field_matches(field: &str, column: ColumnRef<'_>) -> bool {
    matches!((field, column), ("name", ColumnRef::Name) | ("sku", ColumnRef::Sku))
}

#[cfg(test)]
#[path = "cells_test.rs"]
mod tests;
