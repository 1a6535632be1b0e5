use serde::{Deserialize, Serialize};

use stockline_inventory::Criticality;

/// Inventory summary report: totals plus category/warehouse breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub summary: InventoryTotals,
    #[serde(default)]
    pub by_category: Vec<CategoryTotals>,
    #[serde(default)]
    pub by_warehouse: Vec<WarehouseTotals>,
    #[serde(default)]
    pub detailed_items: Vec<SummaryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTotals {
    pub total_items: i64,
    pub total_quantity: i64,
    pub total_cost_value: f64,
    pub total_selling_value: f64,
    pub potential_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub category: String,
    pub items: i64,
    pub total_quantity: i64,
    pub total_cost_value: f64,
    pub total_selling_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseTotals {
    pub warehouse: String,
    pub items: i64,
    pub total_quantity: i64,
    pub total_cost_value: f64,
    pub total_selling_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub product_name: String,
    pub sku: String,
    pub category: String,
    pub warehouse: String,
    pub quantity_on_hand: i64,
    pub quantity_reserved: i64,
    pub quantity_available: i64,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub selling_price: Option<f64>,
    pub total_cost_value: f64,
    pub total_selling_value: f64,
}

/// Low-stock report: rows at or below their minimum level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockReport {
    pub summary: LowStockSummary,
    #[serde(default)]
    pub low_stock_items: Vec<LowStockItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockSummary {
    pub total_low_stock_items: i64,
    pub critical_items: i64,
    pub warning_items: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub product_name: String,
    pub sku: String,
    pub category: String,
    pub warehouse: String,
    pub quantity_on_hand: i64,
    pub quantity_available: i64,
    pub minimum_stock_level: i64,
    pub reorder_point: i64,
    pub reorder_quantity: i64,
    pub stock_ratio: f64,
    pub criticality: Criticality,
}

/// Valuation report: stock value at cost and at selling price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub summary: ValuationSummary,
    #[serde(default)]
    pub top_valued_items: Vec<ValuedItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub total_cost_value: f64,
    pub total_selling_value: f64,
    pub total_potential_profit: f64,
    pub profit_margin_percentage: f64,
    pub total_items_valued: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuedItem {
    pub product_name: String,
    pub sku: String,
    pub category: String,
    pub warehouse: String,
    pub quantity_on_hand: i64,
    pub cost_price: f64,
    pub selling_price: f64,
    pub cost_value: f64,
    pub selling_value: f64,
    pub potential_profit: f64,
}
