//! `stockline-client` — session/API client for the backend REST service.
//!
//! One `ApiClient` per running frontend. It holds the HTTP connection pool
//! and the shared `Session` credential, normalizes transport and application
//! failures into one error shape, and exposes a typed wrapper per backend
//! operation. Screens never build requests themselves.

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod format;
pub mod query;

pub use auth::{
    AuthResponse, CurrentUser, LoginForm, LoginRequest, Organization, RegisterForm,
    RegisterRequest, RegisterResponse, User,
};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use endpoints::{
    AlertList, CategoryList, CategorySaved, InventoryPage, InventoryPageSummary, MessageResponse,
    MovementPage, MovementRecorded, ProductPage, ProductSaved, WarehouseList, WarehouseSaved,
};
pub use query::{AlertFilters, InventoryFilters, MovementFilters, ProductFilters, ReportFilters};
