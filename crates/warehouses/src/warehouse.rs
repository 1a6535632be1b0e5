use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use stockline_core::{EntityFilter, UserId, ValidationError, WarehouseId, form};

/// Warehouse as served by the backend.
///
/// Location fields default to empty strings: older backend rows predate the
/// address split and the search box still has to run over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub manager_id: Option<UserId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}

/// Raw warehouse form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseDraft {
    pub name: String,
    pub code: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub capacity: String,
    pub manager_id: String,
}

impl WarehouseDraft {
    /// Coerce the draft into a typed create payload. Name and code are
    /// required; capacity must be a non-negative whole number when present.
    pub fn parse(&self) -> Result<NewWarehouse, ValidationError> {
        Ok(NewWarehouse {
            name: form::require_text("name", &self.name)?,
            code: form::require_text("code", &self.code)?,
            address: form::optional_text(&self.address),
            city: form::optional_text(&self.city),
            state: form::optional_text(&self.state),
            postal_code: form::optional_text(&self.postal_code),
            country: form::optional_text(&self.country),
            phone: form::optional_text(&self.phone),
            capacity: form::optional_count("capacity", &self.capacity)?,
            manager_id: form::optional_text(&self.manager_id).map(UserId::new),
        })
    }
}

/// Typed create payload for a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWarehouse {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<UserId>,
}

/// Filter for the warehouse list: free text over name, code and city.
/// Warehouses have no selector key.
pub fn warehouse_filter() -> EntityFilter<Warehouse> {
    EntityFilter::new()
        .field(|w: &Warehouse| Some(w.name.as_str()))
        .field(|w: &Warehouse| Some(w.code.as_str()))
        .field(|w: &Warehouse| Some(w.city.as_str()))
}
