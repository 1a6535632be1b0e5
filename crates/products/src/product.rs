use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use stockline_core::{CategoryId, EntityFilter, ProductId, ValidationError, form};

use crate::category::Category;

/// Product as served by the backend catalog.
///
/// Everything beyond `sku` and `name` is optional on the wire; timestamps
/// arrive as naive UTC strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default = "default_unit")]
    pub unit_of_measure: String,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub selling_price: Option<f64>,
    #[serde(default)]
    pub minimum_stock_level: i64,
    #[serde(default)]
    pub maximum_stock_level: Option<i64>,
    #[serde(default)]
    pub reorder_point: i64,
    #[serde(default)]
    pub reorder_quantity: i64,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_unit() -> String {
    "piece".to_string()
}

fn default_true() -> bool {
    true
}

/// Raw product form state: every field a string, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub brand: String,
    pub unit_of_measure: String,
    pub cost_price: String,
    pub selling_price: String,
    pub minimum_stock_level: String,
    pub maximum_stock_level: String,
    pub reorder_point: String,
    pub reorder_quantity: String,
    pub barcode: String,
}

impl ProductDraft {
    /// Coerce the draft into a typed create/update payload.
    ///
    /// Empty numerics become `None` (or the documented default); anything
    /// unparseable is a `ValidationError` naming the field. Nothing leaves
    /// the client as a raw string-typed number.
    pub fn parse(&self) -> Result<NewProduct, ValidationError> {
        Ok(NewProduct {
            sku: form::require_text("sku", &self.sku)?,
            name: form::require_text("name", &self.name)?,
            description: form::optional_text(&self.description),
            category_id: form::optional_text(&self.category_id).map(CategoryId::new),
            brand: form::optional_text(&self.brand),
            unit_of_measure: form::optional_text(&self.unit_of_measure)
                .unwrap_or_else(default_unit),
            cost_price: form::optional_decimal("cost_price", &self.cost_price)?,
            selling_price: form::optional_decimal("selling_price", &self.selling_price)?,
            minimum_stock_level: form::count_or("minimum_stock_level", &self.minimum_stock_level, 0)?,
            maximum_stock_level: form::optional_count("maximum_stock_level", &self.maximum_stock_level)?,
            reorder_point: form::count_or("reorder_point", &self.reorder_point, 0)?,
            reorder_quantity: form::count_or("reorder_quantity", &self.reorder_quantity, 0)?,
            barcode: form::optional_text(&self.barcode),
        })
    }
}

/// Typed create/update payload for a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub unit_of_measure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    pub minimum_stock_level: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_stock_level: Option<i64>,
    pub reorder_point: i64,
    pub reorder_quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

/// Filter for the product list: free text over name and SKU, keyed by
/// category.
pub fn product_filter() -> EntityFilter<Product> {
    EntityFilter::new()
        .field(|p: &Product| Some(p.name.as_str()))
        .field(|p: &Product| Some(p.sku.as_str()))
        .key(|p: &Product| p.category_id.as_ref().map(|id| &id.0))
}
