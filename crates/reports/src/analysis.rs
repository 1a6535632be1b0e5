use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_inventory::MovementKind;

/// Movement-analysis report over a date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementAnalysis {
    pub analysis: AnalysisWindow,
    #[serde(default)]
    pub top_products: Vec<ProductActivity>,
    #[serde(default)]
    pub daily_trends: Vec<DailyTrend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisWindow {
    pub date_range: DateRange,
    pub total_movements: i64,
    /// Per-kind totals, keyed by the lowercase wire name.
    #[serde(default)]
    pub movement_summary: HashMap<String, MovementTotals>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementTotals {
    pub count: i64,
    pub total_quantity: i64,
    #[serde(default)]
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductActivity {
    pub name: String,
    pub sku: String,
    pub movement_count: i64,
    pub total_quantity_moved: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrend {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub movement_type: MovementKind,
    pub count: i64,
    pub total_quantity: i64,
}
