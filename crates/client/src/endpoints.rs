//! Typed endpoint wrappers.
//!
//! Each wrapper builds a path, picks a method/body, and delegates to the
//! core request. The contract is pass-through: no business logic here, and
//! nothing inspects or rewrites what the backend returned.

use serde::Deserialize;

use stockline_core::{AlertId, ClientResult, ProductId};
use stockline_inventory::{InventoryRecord, Movement, NewMovement};
use stockline_products::{Category, NewCategory, NewProduct, Product};
use stockline_reports::{
    Alert, DashboardStats, InventorySummary, LowStockReport, MovementAnalysis, ValuationReport,
};
use stockline_warehouses::{NewWarehouse, Warehouse};

use crate::auth::{AuthResponse, CurrentUser, LoginRequest, RegisterRequest, RegisterResponse};
use crate::client::ApiClient;
use crate::query::{AlertFilters, InventoryFilters, MovementFilters, ProductFilters, ReportFilters};

/// One page of the product list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub pages: i64,
}

/// One page of inventory rows plus the backend's side counters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryPage {
    pub inventory: Vec<InventoryRecord>,
    pub total: i64,
    pub page: i64,
    pub pages: i64,
    pub summary: InventoryPageSummary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryPageSummary {
    pub total_products: i64,
    pub low_stock_count: i64,
}

/// One page of the movement history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovementPage {
    pub movements: Vec<Movement>,
    pub total: i64,
    pub page: i64,
    pub pages: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WarehouseList {
    pub warehouses: Vec<Warehouse>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertList {
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductSaved {
    pub product: Product,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WarehouseSaved {
    pub warehouse: Warehouse,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySaved {
    pub category: Category,
    pub message: String,
}

/// A recorded movement plus the inventory row it changed. The client treats
/// the row as fresh backend state, same as a re-fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovementRecorded {
    pub movement: Movement,
    pub updated_inventory: InventoryRecord,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl ApiClient {
    // Authentication

    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<AuthResponse> {
        self.post("/auth/login", credentials).await
    }

    pub async fn register(&self, registration: &RegisterRequest) -> ClientResult<RegisterResponse> {
        self.post("/auth/register", registration).await
    }

    pub async fn current_user(&self) -> ClientResult<CurrentUser> {
        self.get("/auth/me", &[]).await
    }

    // Products

    pub async fn products(&self, filters: &ProductFilters) -> ClientResult<ProductPage> {
        self.get("/products", &filters.pairs()).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> ClientResult<ProductSaved> {
        self.post("/products", product).await
    }

    pub async fn update_product(
        &self,
        id: &ProductId,
        product: &NewProduct,
    ) -> ClientResult<ProductSaved> {
        self.put(&format!("/products/{id}"), product).await
    }

    // Inventory

    pub async fn inventory(&self, filters: &InventoryFilters) -> ClientResult<InventoryPage> {
        self.get("/inventory", &filters.pairs()).await
    }

    pub async fn create_movement(&self, movement: &NewMovement) -> ClientResult<MovementRecorded> {
        self.post("/inventory/movements", movement).await
    }

    pub async fn movements(&self, filters: &MovementFilters) -> ClientResult<MovementPage> {
        self.get("/inventory/movements", &filters.pairs()).await
    }

    // Warehouses

    pub async fn warehouses(&self) -> ClientResult<WarehouseList> {
        self.get("/warehouses", &[]).await
    }

    pub async fn create_warehouse(&self, warehouse: &NewWarehouse) -> ClientResult<WarehouseSaved> {
        self.post("/warehouses", warehouse).await
    }

    // Categories

    pub async fn categories(&self) -> ClientResult<CategoryList> {
        self.get("/categories", &[]).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> ClientResult<CategorySaved> {
        self.post("/categories", category).await
    }

    // Reports

    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get("/reports/dashboard", &[]).await
    }

    pub async fn inventory_summary(&self, filters: &ReportFilters) -> ClientResult<InventorySummary> {
        self.get("/reports/inventory-summary", &filters.pairs()).await
    }

    pub async fn low_stock_report(&self, filters: &ReportFilters) -> ClientResult<LowStockReport> {
        self.get("/reports/low-stock", &filters.pairs()).await
    }

    pub async fn movement_analysis(
        &self,
        filters: &ReportFilters,
    ) -> ClientResult<MovementAnalysis> {
        self.get("/reports/movement-analysis", &filters.pairs()).await
    }

    pub async fn valuation(&self, filters: &ReportFilters) -> ClientResult<ValuationReport> {
        self.get("/reports/valuation", &filters.pairs()).await
    }

    // Alerts

    pub async fn alerts(&self, filters: &AlertFilters) -> ClientResult<AlertList> {
        self.get("/alerts", &filters.pairs()).await
    }

    pub async fn mark_alert_read(&self, id: &AlertId) -> ClientResult<MessageResponse> {
        self.put_empty(&format!("/alerts/{id}/read")).await
    }
}
