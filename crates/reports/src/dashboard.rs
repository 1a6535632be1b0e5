use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_inventory::{Movement, MovementKind};

/// Landing-page dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub summary: DashboardSummary,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub recent_activity: Vec<Movement>,
    #[serde(default)]
    pub movement_trends: Vec<MovementTrend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: i64,
    pub total_warehouses: i64,
    pub low_stock_items: i64,
    pub total_inventory_value: f64,
    pub recent_movements: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sku: String,
    pub total_quantity: i64,
}

/// One (day, movement kind) bucket over the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementTrend {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub movement_type: MovementKind,
    pub count: i64,
}
