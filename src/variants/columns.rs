//! Column composition and selection for the variant grid.
//!
//! DESIGN
//! ======
//! Column ids are `name`, `sku`, or `<prefix>:<id>` for dynamic columns.
//! A [`ColumnSet`] starts from the persisted selection: static columns
//! first, then dynamic ones in selection order. After that the visible
//! order is authoritative; every mutation returns the selection to persist.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChannelData, VariantAttribute, Warehouse};

pub const NAME_COLUMN: &str = "name";
pub const SKU_COLUMN: &str = "sku";

pub const CHANNEL_PREFIX: &str = "channel";
pub const AVAILABILITY_PREFIX: &str = "availableInChannel";
pub const ATTRIBUTE_PREFIX: &str = "attribute";
pub const WAREHOUSE_PREFIX: &str = "warehouse";

pub const DEFAULT_COLUMN_WIDTH: u32 = 200;
pub const MIN_COLUMN_WIDTH: u32 = 50;

// =============================================================================
// COLUMNS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableColumn {
    pub id: String,
    pub title: String,
    pub width: u32,
}

impl AvailableColumn {
    fn new(id: impl Into<String>, title: impl Into<String>, width: u32) -> Self {
        Self { id: id.into(), title: title.into(), width }
    }
}

/// What a column id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef<'a> {
    Name,
    Sku,
    ChannelPrice(&'a str),
    ChannelAvailability(&'a str),
    Attribute(&'a str),
    Warehouse(&'a str),
    Unknown,
}

#[must_use]
pub fn column_id(prefix: &str, id: &str) -> String {
    format!("{prefix}:{id}")
}

#[must_use]
pub fn parse_column_id(column: &str) -> ColumnRef<'_> {
    match column {
        NAME_COLUMN => return ColumnRef::Name,
        SKU_COLUMN => return ColumnRef::Sku,
        _ => {}
    }
    let Some((prefix, id)) = column.split_once(':') else {
        return ColumnRef::Unknown;
    };
    if id.is_empty() {
        return ColumnRef::Unknown;
    }
    match prefix {
        CHANNEL_PREFIX => ColumnRef::ChannelPrice(id),
        AVAILABILITY_PREFIX => ColumnRef::ChannelAvailability(id),
        ATTRIBUTE_PREFIX => ColumnRef::Attribute(id),
        WAREHOUSE_PREFIX => ColumnRef::Warehouse(id),
        _ => ColumnRef::Unknown,
    }
}

#[must_use]
pub fn static_columns() -> Vec<AvailableColumn> {
    vec![AvailableColumn::new(NAME_COLUMN, "Variant name", 200), AvailableColumn::new(SKU_COLUMN, "SKU", 150)]
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// A group of dynamic columns offered by the column picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnCategory {
    pub name: String,
    pub prefix: String,
    pub available_nodes: Vec<AvailableColumn>,
    pub selected_nodes: Vec<AvailableColumn>,
}

impl ColumnCategory {
    fn new(name: &str, prefix: &str, available_nodes: Vec<AvailableColumn>, selected: &[String]) -> Self {
        let mut category = Self { name: name.into(), prefix: prefix.into(), available_nodes, selected_nodes: Vec::new() };
        category.select(selected);
        category
    }

    fn select(&mut self, selected: &[String]) {
        self.selected_nodes = selected
            .iter()
            .filter_map(|id| self.available_nodes.iter().find(|c| &c.id == id).cloned())
            .collect();
    }

    fn find(&self, id: &str) -> Option<&AvailableColumn> {
        self.available_nodes.iter().find(|c| c.id == id)
    }
}

#[must_use]
pub fn channel_category(listings: &[ChannelData], selected: &[String]) -> ColumnCategory {
    let nodes = listings
        .iter()
        .map(|ch| AvailableColumn::new(column_id(CHANNEL_PREFIX, &ch.id), &ch.name, DEFAULT_COLUMN_WIDTH))
        .collect();
    ColumnCategory::new("Channels", CHANNEL_PREFIX, nodes, selected)
}

#[must_use]
pub fn availability_category(listings: &[ChannelData], selected: &[String]) -> ColumnCategory {
    let nodes = listings
        .iter()
        .map(|ch| {
            AvailableColumn::new(
                column_id(AVAILABILITY_PREFIX, &ch.id),
                format!("Available in {}", ch.name),
                DEFAULT_COLUMN_WIDTH,
            )
        })
        .collect();
    ColumnCategory::new("Availability", AVAILABILITY_PREFIX, nodes, selected)
}

#[must_use]
pub fn attribute_category(attributes: &[VariantAttribute], selected: &[String]) -> ColumnCategory {
    let nodes = attributes
        .iter()
        .map(|a| AvailableColumn::new(column_id(ATTRIBUTE_PREFIX, &a.id), &a.name, DEFAULT_COLUMN_WIDTH))
        .collect();
    ColumnCategory::new("Attributes", ATTRIBUTE_PREFIX, nodes, selected)
}

#[must_use]
pub fn warehouse_category(warehouses: &[Warehouse], selected: &[String]) -> ColumnCategory {
    let nodes = warehouses
        .iter()
        .map(|w| AvailableColumn::new(column_id(WAREHOUSE_PREFIX, &w.id), &w.name, DEFAULT_COLUMN_WIDTH))
        .collect();
    ColumnCategory::new("Warehouses", WAREHOUSE_PREFIX, nodes, selected)
}

// =============================================================================
// COLUMN SET
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    static_columns: Vec<AvailableColumn>,
    categories: Vec<ColumnCategory>,
    visible: Vec<AvailableColumn>,
    recently_added: Option<String>,
}

impl ColumnSet {
    /// Build from the persisted selection. An empty selection shows every
    /// static column; unknown and repeated ids are dropped.
    #[must_use]
    pub fn new(static_columns: Vec<AvailableColumn>, categories: Vec<ColumnCategory>, selected: &[String]) -> Self {
        let mut unique: Vec<&String> = Vec::with_capacity(selected.len());
        for id in selected {
            if !id.trim().is_empty() && !unique.contains(&id) {
                unique.push(id);
            }
        }
        let selected = unique;

        let visible_static: Vec<AvailableColumn> = if selected.is_empty() {
            static_columns.clone()
        } else {
            static_columns
                .iter()
                .filter(|c| selected.contains(&&c.id))
                .cloned()
                .collect()
        };
        let visible_dynamic = selected
            .iter()
            .filter_map(|id| categories.iter().find_map(|cat| cat.find(id)).cloned());

        let mut set = Self {
            visible: visible_static.into_iter().chain(visible_dynamic).collect(),
            static_columns,
            categories,
            recently_added: None,
        };
        set.sync_categories();
        set
    }

    #[must_use]
    pub fn static_columns(&self) -> &[AvailableColumn] {
        &self.static_columns
    }

    #[must_use]
    pub fn categories(&self) -> &[ColumnCategory] {
        &self.categories
    }

    /// Columns handed to the grid, in display order.
    #[must_use]
    pub fn visible(&self) -> &[AvailableColumn] {
        &self.visible
    }

    /// Visible columns that come from a category.
    #[must_use]
    pub fn dynamic_columns(&self) -> Vec<&AvailableColumn> {
        self.visible
            .iter()
            .filter(|c| !self.is_static(&c.id))
            .collect()
    }

    /// Ids to persist, in display order.
    #[must_use]
    pub fn selected(&self) -> Vec<String> {
        self.visible.iter().map(|c| c.id.clone()).collect()
    }

    /// Column most recently toggled on, so the grid can scroll to it.
    #[must_use]
    pub fn recently_added(&self) -> Option<&str> {
        self.recently_added.as_deref()
    }

    #[must_use]
    pub fn column_at(&self, index: usize) -> Option<&AvailableColumn> {
        self.visible.get(index)
    }

    /// Show or hide a column. Unknown ids leave the set unchanged.
    pub fn toggle(&mut self, id: &str) -> Vec<String> {
        if let Some(pos) = self.visible.iter().position(|c| c.id == id) {
            self.visible.remove(pos);
            if self.recently_added.as_deref() == Some(id) {
                self.recently_added = None;
            }
        } else if let Some(column) = self.lookup(id).cloned() {
            self.visible.push(column);
            self.recently_added = Some(id.to_string());
        } else {
            debug!(column = id, "variants: toggle of unknown column ignored");
        }
        self.sync_categories();
        self.selected()
    }

    /// Move the column at `from` to `to`. Out-of-range indexes are ignored.
    pub fn move_column(&mut self, from: usize, to: usize) -> Vec<String> {
        if from < self.visible.len() && to < self.visible.len() && from != to {
            let column = self.visible.remove(from);
            self.visible.insert(to, column);
            self.sync_categories();
        }
        self.selected()
    }

    /// Set a column's width, clamped to [`MIN_COLUMN_WIDTH`].
    pub fn resize(&mut self, id: &str, width: u32) {
        if let Some(column) = self.visible.iter_mut().find(|c| c.id == id) {
            column.width = width.max(MIN_COLUMN_WIDTH);
        }
    }

    fn is_static(&self, id: &str) -> bool {
        self.static_columns.iter().any(|c| c.id == id)
    }

    fn lookup(&self, id: &str) -> Option<&AvailableColumn> {
        self.static_columns
            .iter()
            .find(|c| c.id == id)
            .or_else(|| self.categories.iter().find_map(|cat| cat.find(id)))
    }

    fn sync_categories(&mut self) {
        let selected = self.selected();
        for category in &mut self.categories {
            category.select(&selected);
        }
    }
}

#[cfg(test)]
#[path = "columns_test.rs"]
mod tests;
