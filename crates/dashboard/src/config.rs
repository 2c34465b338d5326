use serde::{Deserialize, Serialize};

use crate::panels::PanelId;

/// Element ids, storage key and style values the widgets are wired to.
///
/// Every field has a default matching the stock dashboard markup, so a page
/// only needs to override what it renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub search_panel_id: String,
    pub map_panel_id: String,
    pub notification_panel_id: String,
    pub overlay_id: String,
    pub overlay_class: String,

    pub search_input_id: String,
    pub search_results_id: String,
    pub recent_searches_id: String,
    pub storage_key: String,
    pub max_recent_searches: usize,

    pub notifications_list_id: String,
    pub notification_count_id: String,
    /// Inline opacity applied to read notifications.
    pub read_opacity: String,
    /// `display` value of a notification that passes the filter.
    pub visible_display: String,

    pub active_class: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            search_panel_id: "search-panel".to_string(),
            map_panel_id: "map-panel".to_string(),
            notification_panel_id: "notification-panel".to_string(),
            overlay_id: "panel-overlay".to_string(),
            overlay_class: "modal-panel-overlay".to_string(),

            search_input_id: "search-input-field".to_string(),
            search_results_id: "search-results".to_string(),
            recent_searches_id: "recent-searches-list".to_string(),
            storage_key: history::RECENT_SEARCHES_KEY.to_string(),
            max_recent_searches: history::MAX_RECENT_SEARCHES,

            notifications_list_id: "notifications-list".to_string(),
            notification_count_id: "notification-count".to_string(),
            read_opacity: "0.5".to_string(),
            visible_display: "flex".to_string(),

            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid dashboard config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl DashboardConfig {
    /// Parses a JSON override. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn panel_element_id(&self, panel: PanelId) -> &str {
        match panel {
            PanelId::Search => &self.search_panel_id,
            PanelId::Map => &self.map_panel_id,
            PanelId::Notification => &self.notification_panel_id,
        }
    }
}
