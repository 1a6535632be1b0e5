//! Query-string filters for list endpoints.
//!
//! Each filter renders to flat key/value pairs with empty values omitted —
//! an unset filter never appears in the outgoing URL. Percent-encoding is
//! the HTTP layer's job.

use chrono::NaiveDate;

use stockline_core::{CategoryId, ProductId, WarehouseId};
use stockline_inventory::MovementKind;
use stockline_reports::AlertSeverity;

/// Filters for the product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    pub search: String,
    pub category_id: Option<CategoryId>,
    pub low_stock: bool,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProductFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "search", &self.search);
        if let Some(category_id) = &self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        if self.low_stock {
            pairs.push(("low_stock", "true".to_string()));
        }
        push_paging(&mut pairs, self.page, self.limit);
        pairs
    }
}

/// Filters for the inventory list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilters {
    pub search: String,
    pub warehouse_id: Option<WarehouseId>,
    pub product_id: Option<ProductId>,
    pub low_stock: bool,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl InventoryFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "search", &self.search);
        if let Some(warehouse_id) = &self.warehouse_id {
            pairs.push(("warehouse_id", warehouse_id.to_string()));
        }
        if let Some(product_id) = &self.product_id {
            pairs.push(("product_id", product_id.to_string()));
        }
        if self.low_stock {
            pairs.push(("low_stock", "true".to_string()));
        }
        push_paging(&mut pairs, self.page, self.limit);
        pairs
    }
}

/// Filters for the movement history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementFilters {
    pub product_id: Option<ProductId>,
    pub warehouse_id: Option<WarehouseId>,
    pub movement_type: Option<MovementKind>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl MovementFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(product_id) = &self.product_id {
            pairs.push(("product_id", product_id.to_string()));
        }
        if let Some(warehouse_id) = &self.warehouse_id {
            pairs.push(("warehouse_id", warehouse_id.to_string()));
        }
        if let Some(kind) = self.movement_type {
            pairs.push(("movement_type", kind.as_str().to_string()));
        }
        if let Some(from) = self.date_from {
            pairs.push(("date_from", from.to_string()));
        }
        if let Some(to) = self.date_to {
            pairs.push(("date_to", to.to_string()));
        }
        push_paging(&mut pairs, self.page, self.limit);
        pairs
    }
}

/// Filters shared by the report endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilters {
    pub warehouse_id: Option<WarehouseId>,
    pub category_id: Option<CategoryId>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl ReportFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(warehouse_id) = &self.warehouse_id {
            pairs.push(("warehouse_id", warehouse_id.to_string()));
        }
        if let Some(category_id) = &self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        if let Some(from) = self.date_from {
            pairs.push(("date_from", from.to_string()));
        }
        if let Some(to) = self.date_to {
            pairs.push(("date_to", to.to_string()));
        }
        pairs
    }
}

/// Filters for the alert feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertFilters {
    pub severity: Option<AlertSeverity>,
    pub unread_only: bool,
}

impl AlertFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(severity) = self.severity {
            let name = match severity {
                AlertSeverity::Info => "info",
                AlertSeverity::Warning => "warning",
                AlertSeverity::Error => "error",
                AlertSeverity::Critical => "critical",
            };
            pairs.push(("severity", name.to_string()));
        }
        if self.unread_only {
            pairs.push(("unread_only", "true".to_string()));
        }
        pairs
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    if !value.is_empty() {
        pairs.push((key, value.to_string()));
    }
}

fn push_paging(pairs: &mut Vec<(&'static str, String)>, page: Option<u32>, limit: Option<u32>) {
    if let Some(page) = page {
        pairs.push(("page", page.to_string()));
    }
    if let Some(limit) = limit {
        pairs.push(("limit", limit.to_string()));
    }
}
