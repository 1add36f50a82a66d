//! Filter requests — the identifiers a user has selected per dimension.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of query keys carrying attribute choices, e.g. `attribute.color=<id>`.
pub const ATTRIBUTE_KEY_PREFIX: &str = "attribute.";

// =============================================================================
// DIMENSION
// =============================================================================

/// One independent filterable facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Collection,
    Channel,
    ProductType,
    Attribute,
}

impl Dimension {
    pub const ALL: [Dimension; 5] =
        [Self::Channel, Self::Collection, Self::Category, Self::ProductType, Self::Attribute];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Collection => "collection",
            Self::Channel => "channel",
            Self::ProductType => "producttype",
            Self::Attribute => "attribute",
        }
    }

    /// Top-level field of the GraphQL `data` object answering this dimension.
    #[must_use]
    pub fn marker_field(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Collection => "collections",
            Self::Channel => "channels",
            Self::ProductType => "productTypes",
            Self::Attribute => "attributes",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// Identifiers requested per dimension.
///
/// Sequences keep first-occurrence order with duplicates and blank entries
/// dropped. Attributes map slug to choice ids, iterated in slug order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterRequest {
    category: Vec<String>,
    collection: Vec<String>,
    channel: Vec<String>,
    producttype: Vec<String>,
    attribute: BTreeMap<String, Vec<String>>,
}

impl FilterRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.category, ids);
        self
    }

    #[must_use]
    pub fn with_collection<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.collection, ids);
        self
    }

    #[must_use]
    pub fn with_channel<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.channel, ids);
        self
    }

    #[must_use]
    pub fn with_product_type<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.producttype, ids);
        self
    }

    /// Add choices for one attribute. A blank slug is ignored; an attribute
    /// with no choices is still requested.
    #[must_use]
    pub fn with_attribute<I, S>(mut self, slug: impl Into<String>, choice_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slug = slug.into().trim().to_string();
        if slug.is_empty() {
            return self;
        }
        let choices = self.attribute.entry(slug).or_default();
        extend_unique(choices, choice_ids);
        self
    }

    /// Build a request from URL query pairs.
    ///
    /// Recognised keys: `category`, `collection`, `channel`, `producttype`,
    /// and `attribute.<slug>`. Each key may repeat.
    #[must_use]
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            request = match key {
                "category" => request.with_category([value]),
                "collection" => request.with_collection([value]),
                "channel" => request.with_channel([value]),
                "producttype" => request.with_product_type([value]),
                _ => match key.strip_prefix(ATTRIBUTE_KEY_PREFIX) {
                    Some(slug) => request.with_attribute(slug, [value]),
                    None => {
                        debug!(key, "filters: ignoring unknown query key");
                        request
                    }
                },
            };
        }
        request
    }

    #[must_use]
    pub fn category(&self) -> &[String] {
        &self.category
    }

    #[must_use]
    pub fn collection(&self) -> &[String] {
        &self.collection
    }

    #[must_use]
    pub fn channel(&self) -> &[String] {
        &self.channel
    }

    #[must_use]
    pub fn product_type(&self) -> &[String] {
        &self.producttype
    }

    #[must_use]
    pub fn attribute(&self) -> &BTreeMap<String, Vec<String>> {
        &self.attribute
    }

    /// Attribute slugs in iteration order.
    #[must_use]
    pub fn attribute_slugs(&self) -> Vec<String> {
        self.attribute.keys().cloned().collect()
    }

    /// Every requested choice id across all attributes, flattened in order.
    #[must_use]
    pub fn attribute_choice_ids(&self) -> Vec<String> {
        self.attribute.values().flatten().cloned().collect()
    }

    /// Whether `dimension` needs a query.
    #[must_use]
    pub fn requests(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Category => !self.category.is_empty(),
            Dimension::Collection => !self.collection.is_empty(),
            Dimension::Channel => !self.channel.is_empty(),
            Dimension::ProductType => !self.producttype.is_empty(),
            Dimension::Attribute => !self.attribute.is_empty(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Dimension::ALL.iter().all(|d| !self.requests(*d))
    }
}

fn extend_unique<I, S>(target: &mut Vec<String>, ids: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for id in ids {
        let id = id.into().trim().to_string();
        if !id.is_empty() && !target.contains(&id) {
            target.push(id);
        }
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
