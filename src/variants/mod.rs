//! Variants — plumbing behind the product-variant editing grid.
//!
//! ARCHITECTURE
//! ============
//! The grid renderer asks two questions: which columns exist, and what is
//! in cell `(column, row)`. `columns` answers the first by composing static
//! columns with dynamic ones derived from channels, attributes, and
//! warehouses, and tracks the user's selection. `cells` answers the second
//! by mapping coordinates onto variants plus pending edits. `media` orders
//! the variant media gallery.

pub mod cells;
pub mod columns;
pub mod media;

use serde::{Deserialize, Serialize};

/// A channel the product is listed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelData {
    pub id: String,
    pub name: String,
    pub currency: String,
}

/// An attribute assignable on variants of the product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAttribute {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub input_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,
    pub name: String,
}

/// A selectable attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantChannelListing {
    pub channel_id: String,
    #[serde(default)]
    pub price: Option<f64>,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantStock {
    pub warehouse_id: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAttributeValues {
    pub attribute_id: String,
    pub values: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub channel_listings: Vec<VariantChannelListing>,
    #[serde(default)]
    pub stocks: Vec<VariantStock>,
    #[serde(default)]
    pub attributes: Vec<VariantAttributeValues>,
}

impl ProductVariant {
    #[must_use]
    pub fn listing(&self, channel_id: &str) -> Option<&VariantChannelListing> {
        self.channel_listings
            .iter()
            .find(|l| l.channel_id == channel_id)
    }

    #[must_use]
    pub fn stock(&self, warehouse_id: &str) -> Option<&VariantStock> {
        self.stocks
            .iter()
            .find(|s| s.warehouse_id == warehouse_id)
    }

    #[must_use]
    pub fn attribute_values(&self, attribute_id: &str) -> &[Choice] {
        self.attributes
            .iter()
            .find(|a| a.attribute_id == attribute_id)
            .map(|a| a.values.as_slice())
            .unwrap_or_default()
    }
}
