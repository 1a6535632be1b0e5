use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use stockline_core::{EntityFilter, EntityId, ProductId, WarehouseId};
use stockline_products::Product;
use stockline_warehouses::Warehouse;

use crate::stock::{StockStatus, classify};

/// On-hand stock for one (product, warehouse) pair.
///
/// A read-through copy of backend state: after submitting a movement the
/// client re-fetches, it never adjusts `quantity_on_hand` locally.
/// `quantity_available` is backend-computed (on hand minus reserved) and is
/// carried, not derived here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: EntityId,
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub warehouse: Option<Warehouse>,
    pub quantity_on_hand: i64,
    #[serde(default)]
    pub quantity_reserved: i64,
    #[serde(default)]
    pub quantity_available: i64,
    #[serde(default)]
    pub last_movement_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl InventoryRecord {
    /// Current stock status, recomputed from source values on every call.
    ///
    /// A record without an embedded product classifies against a minimum of
    /// zero (only the hard zero-quantity case can trigger).
    pub fn status(&self) -> StockStatus {
        let minimum = self
            .product
            .as_ref()
            .map(|product| product.minimum_stock_level)
            .unwrap_or(0);
        classify(self.quantity_on_hand, minimum)
    }
}

/// Filter for the inventory list: free text over the embedded product's name
/// and SKU, keyed by warehouse.
pub fn inventory_filter() -> EntityFilter<InventoryRecord> {
    EntityFilter::new()
        .field(|r: &InventoryRecord| r.product.as_ref().map(|p| p.name.as_str()))
        .field(|r: &InventoryRecord| r.product.as_ref().map(|p| p.sku.as_str()))
        .key(|r: &InventoryRecord| Some(&r.warehouse_id.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quantity: i64, minimum: i64) -> InventoryRecord {
        serde_json::from_value(serde_json::json!({
            "id": 10,
            "product_id": 1,
            "warehouse_id": 2,
            "quantity_on_hand": quantity,
            "quantity_reserved": 0,
            "quantity_available": quantity,
            "product": {
                "id": 1,
                "sku": "W-1",
                "name": "Widget",
                "minimum_stock_level": minimum
            }
        }))
        .unwrap()
    }

    #[test]
    fn status_is_a_projection_of_current_values() {
        let mut rec = record(0, 5);
        assert_eq!(rec.status(), StockStatus::OutOfStock);

        // A re-fetch that changes quantity changes the status; nothing was
        // cached from the first call.
        rec.quantity_on_hand = 4;
        assert_eq!(rec.status(), StockStatus::LowStock);
        rec.quantity_on_hand = 9;
        assert_eq!(rec.status(), StockStatus::MediumStock);
        rec.quantity_on_hand = 11;
        assert_eq!(rec.status(), StockStatus::InStock);
    }

    #[test]
    fn record_without_product_uses_zero_minimum() {
        let mut rec = record(3, 5);
        rec.product = None;
        assert_eq!(rec.status(), StockStatus::InStock);
        rec.quantity_on_hand = 0;
        assert_eq!(rec.status(), StockStatus::OutOfStock);
    }

    #[test]
    fn filter_searches_embedded_product_and_keys_on_warehouse() {
        let records = vec![record(3, 5)];
        let filter = inventory_filter();

        assert_eq!(filter.apply(&records, "wid", None).len(), 1);
        assert_eq!(filter.apply(&records, "w-1", None).len(), 1);

        let same_warehouse = EntityId::from("2");
        assert_eq!(filter.apply(&records, "", Some(&same_warehouse)).len(), 1);

        let other_warehouse = EntityId::from("9");
        assert!(filter.apply(&records, "", Some(&other_warehouse)).is_empty());
    }

    #[test]
    fn record_without_product_fails_text_search() {
        let mut rec = record(3, 5);
        rec.product = None;
        let records = vec![rec];
        assert!(inventory_filter().apply(&records, "wid", None).is_empty());
    }
}
