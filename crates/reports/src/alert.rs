use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use stockline_core::{AlertId, EntityId};

/// Alert severity, in escalating order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl AlertSeverity {
    /// Badge color for this severity.
    pub fn color(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "blue",
            AlertSeverity::Warning => "orange",
            AlertSeverity::Error | AlertSeverity::Critical => "red",
        }
    }
}

/// A server-raised alert (low stock, failed jobs, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    #[serde(default)]
    pub alert_type: Option<String>,
    pub severity: AlertSeverity,
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<EntityId>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
