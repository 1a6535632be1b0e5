use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use stockline_core::{EntityId, ProductId, ValidationError, WarehouseId, form};
use stockline_products::Product;
use stockline_warehouses::Warehouse;

/// Direction/kind of an inventory movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    In,
    Out,
    Adjustment,
    Transfer,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::In => "in",
            MovementKind::Out => "out",
            MovementKind::Adjustment => "adjustment",
            MovementKind::Transfer => "transfer",
        }
    }

    /// Badge color for this kind.
    pub fn color(&self) -> &'static str {
        match self {
            MovementKind::In => "green",
            MovementKind::Out => "red",
            MovementKind::Adjustment => "blue",
            MovementKind::Transfer => "purple",
        }
    }

    /// Parse the wire form; unknown kinds are a validation failure.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "in" => Ok(MovementKind::In),
            "out" => Ok(MovementKind::Out),
            "adjustment" => Ok(MovementKind::Adjustment),
            "transfer" => Ok(MovementKind::Transfer),
            _ => Err(ValidationError::new("movement_type", "unknown movement type")),
        }
    }
}

/// A recorded movement, as returned by the backend history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: EntityId,
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub warehouse: Option<Warehouse>,
    pub movement_type: MovementKind,
    pub quantity: i64,
    #[serde(default)]
    pub unit_cost: Option<f64>,
    #[serde(default)]
    pub reference_type: Option<String>,
    #[serde(default)]
    pub reference_id: Option<EntityId>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub movement_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Raw movement form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementDraft {
    pub product_id: String,
    pub warehouse_id: String,
    pub movement_type: String,
    pub quantity: String,
    pub unit_cost: String,
    pub reference_id: String,
    pub notes: String,
}

impl MovementDraft {
    /// Coerce the draft into a typed submission.
    ///
    /// Product, warehouse, a known movement type and a positive quantity are
    /// required before anything is sent.
    pub fn parse(&self) -> Result<NewMovement, ValidationError> {
        Ok(NewMovement {
            product_id: ProductId::new(form::require_text("product_id", &self.product_id)?),
            warehouse_id: WarehouseId::new(form::require_text("warehouse_id", &self.warehouse_id)?),
            movement_type: MovementKind::parse(self.movement_type.trim())?,
            quantity: form::require_positive_count("quantity", &self.quantity)?,
            unit_cost: form::optional_decimal("unit_cost", &self.unit_cost)?,
            reference_id: form::optional_text(&self.reference_id).map(EntityId::from),
            notes: form::optional_text(&self.notes),
        })
    }
}

/// Submitted intent to change on-hand quantity.
///
/// The client never applies this locally; it submits and re-fetches the
/// affected inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMovement {
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub movement_type: MovementKind,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
