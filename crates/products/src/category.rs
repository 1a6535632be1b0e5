use serde::{Deserialize, Serialize};

use stockline_core::{CategoryId, ValidationError, form};

/// Product category as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Raw category form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub parent_id: String,
}

impl CategoryDraft {
    pub fn parse(&self) -> Result<NewCategory, ValidationError> {
        Ok(NewCategory {
            name: form::require_text("name", &self.name)?,
            description: form::optional_text(&self.description),
            parent_id: form::optional_text(&self.parent_id).map(CategoryId::new),
        })
    }
}

/// Typed create payload for a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
}
