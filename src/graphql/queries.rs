//! The five operand queries used to resolve filter identifiers.
//!
//! Documents mirror the shop API schema. Every search query takes the
//! requested slugs plus a `first` page-size hint equal to the slug count so
//! all requested items fit in one page.

use serde_json::{Value, json};

pub const CHANNEL_OPERANDS: &str = r"
query _GetChannelOperands {
  channels {
    id
    name
    slug
  }
}";

pub const COLLECTION_OPERANDS: &str = r"
query _SearchCollectionsOperands($first: Int!, $collectionsSlugs: [String!]) {
  collections(first: $first, filter: { slugs: $collectionsSlugs }) {
    edges {
      node {
        id
        name
        slug
      }
    }
  }
}";

pub const CATEGORY_OPERANDS: &str = r"
query _SearchCategoriesOperands($first: Int!, $categoriesSlugs: [String!]) {
  categories(first: $first, filter: { slugs: $categoriesSlugs }) {
    edges {
      node {
        id
        name
        slug
      }
    }
  }
}";

pub const PRODUCT_TYPE_OPERANDS: &str = r"
query _SearchProductTypesOperands($first: Int!, $productTypesSlugs: [String!]) {
  productTypes(first: $first, filter: { slugs: $productTypesSlugs }) {
    edges {
      node {
        id
        name
        slug
      }
    }
  }
}";

pub const ATTRIBUTE_OPERANDS: &str = r"
query _SearchAttributeOperands(
  $attributesSlugs: [String!]
  $choicesIds: [ID!]
  $first: Int!
  $choicesFirst: Int
) {
  attributes(first: $first, filter: { slugs: $attributesSlugs }) {
    edges {
      node {
        id
        name
        inputType
        slug
        choices(first: $choicesFirst, filter: { ids: $choicesIds }) {
          edges {
            node {
              id
              name
              slug
            }
          }
        }
      }
    }
  }
}";

/// One operand query with its variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Channels,
    Collections { slugs: Vec<String> },
    Categories { slugs: Vec<String> },
    ProductTypes { slugs: Vec<String> },
    Attributes { slugs: Vec<String>, choice_ids: Vec<String> },
}

impl Operation {
    /// GraphQL operation name, sent as `operationName`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Channels => "_GetChannelOperands",
            Self::Collections { .. } => "_SearchCollectionsOperands",
            Self::Categories { .. } => "_SearchCategoriesOperands",
            Self::ProductTypes { .. } => "_SearchProductTypesOperands",
            Self::Attributes { .. } => "_SearchAttributeOperands",
        }
    }

    #[must_use]
    pub fn document(&self) -> &'static str {
        match self {
            Self::Channels => CHANNEL_OPERANDS,
            Self::Collections { .. } => COLLECTION_OPERANDS,
            Self::Categories { .. } => CATEGORY_OPERANDS,
            Self::ProductTypes { .. } => PRODUCT_TYPE_OPERANDS,
            Self::Attributes { .. } => ATTRIBUTE_OPERANDS,
        }
    }

    #[must_use]
    pub fn variables(&self) -> Value {
        match self {
            Self::Channels => json!({}),
            Self::Collections { slugs } => json!({ "collectionsSlugs": slugs, "first": slugs.len() }),
            Self::Categories { slugs } => json!({ "categoriesSlugs": slugs, "first": slugs.len() }),
            Self::ProductTypes { slugs } => json!({ "productTypesSlugs": slugs, "first": slugs.len() }),
            Self::Attributes { slugs, choice_ids } => json!({
                "attributesSlugs": slugs,
                "choicesIds": choice_ids,
                "first": slugs.len(),
                "choicesFirst": choice_ids.len().max(1),
            }),
        }
    }
}
