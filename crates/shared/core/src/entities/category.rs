use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;
use crate::values::{CategoryId, ProductId};

/// Caller-supplied fields of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "must not be blank");
        }
        errors.into_result()
    }
}

/// A category and the products it currently owns
///
/// `product_ids` is read from the same store snapshot as the category itself;
/// the product side holds the authoritative back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub product_ids: Vec<ProductId>,
}

impl Category {
    pub fn create(id: CategoryId, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            product_ids: Vec::new(),
        }
    }

    /// Replace the caller-owned fields, keeping identity
    pub fn revise(&mut self, draft: CategoryDraft) {
        self.name = draft.name;
        self.description = draft.description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let draft = CategoryDraft::new("   ", None);
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.violations()[0].field, "name");
    }

    #[test]
    fn test_revise_keeps_id() {
        let mut category = Category::create(
            CategoryId(3),
            CategoryDraft::new("Electronics", Some("Gadgets".into())),
        );
        category.revise(CategoryDraft::new("Devices", None));

        assert_eq!(category.id, CategoryId(3));
        assert_eq!(category.name, "Devices");
        assert_eq!(category.description, None);
    }
}
