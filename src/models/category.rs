//! Affiliate category records.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A category from `aliexpress.affiliate.category.get`.
///
/// Top-level categories carry no `parent_category_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "lenient::integer")]
    pub category_id: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub category_name: String,
    #[serde(deserialize_with = "lenient::opt_integer")]
    pub parent_category_id: Option<i64>,
}

impl Category {
    /// Returns `true` if this category has no parent.
    #[must_use]
    pub const fn is_parent(&self) -> bool {
        self.parent_category_id.is_none()
    }
}

/// A category known to sit under a parent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChildCategory {
    pub category_id: i64,
    pub category_name: String,
    pub parent_category_id: i64,
}

/// Result of `aliexpress.affiliate.category.get`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CategoriesResponse {
    #[serde(deserialize_with = "lenient::integer")]
    pub total_result_count: i64,
    #[serde(deserialize_with = "lenient::list")]
    pub categories: Vec<Category>,
}

/// Keeps only the top-level categories.
#[must_use]
pub fn filter_parent_categories(categories: &[Category]) -> Vec<Category> {
    categories.iter().filter(|c| c.is_parent()).cloned().collect()
}

/// Keeps the categories whose parent is `parent_category_id`.
#[must_use]
pub fn filter_child_categories(
    categories: &[Category],
    parent_category_id: i64,
) -> Vec<ChildCategory> {
    categories
        .iter()
        .filter(|c| c.parent_category_id == Some(parent_category_id))
        .map(|c| ChildCategory {
            category_id: c.category_id,
            category_name: c.category_name.clone(),
            parent_category_id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FromPayload;
    use serde_json::json;

    fn sample() -> Vec<Category> {
        CategoriesResponse::from_payload(&json!({
            "total_result_count": 3,
            "categories": {"category": [
                {"category_id": 2, "category_name": "Food"},
                {"category_id": "100001", "category_name": "Snacks", "parent_category_id": 2},
                {"category_id": 3, "category_name": "Apparel"}
            ]}
        }))
        .categories
    }

    #[test]
    fn test_filter_parent_categories() {
        let parents = filter_parent_categories(&sample());
        let ids: Vec<i64> = parents.iter().map(|c| c.category_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_filter_child_categories() {
        let children = filter_child_categories(&sample(), 2);
        assert_eq!(
            children,
            vec![ChildCategory {
                category_id: 100_001,
                category_name: "Snacks".to_string(),
                parent_category_id: 2,
            }]
        );
        assert!(filter_child_categories(&sample(), 3).is_empty());
    }
}
