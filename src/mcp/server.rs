//! Hydration MCP Server Implementation
//!
//! Exposes the settings edits and calculations as MCP tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::settings::Settings;
use crate::store::SqliteStore;
use crate::tools::settings;
use crate::tools::status::{StatusTracker, SETTINGS_INSTRUCTIONS};

/// Hydration MCP Service
#[derive(Clone)]
pub struct HydrationService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    settings: Arc<Mutex<Settings<SqliteStore>>>,
    tool_router: ToolRouter<HydrationService>,
}

impl HydrationService {
    pub fn new(database_path: PathBuf, settings: Settings<SqliteStore>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            settings: Arc::new(Mutex::new(settings)),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetUnitParams {
    /// "metric" or "imperial"
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetActivityParams {
    /// "sedentary", "active" or "athlete"
    pub activity: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetHeightParams {
    /// Height in the current unit (cm or inches), or "" to clear
    pub height: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetWeightParams {
    /// Weight in the current unit (kg or lbs), or "" to clear
    pub weight: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateHydrationParams {
    /// Body weight in kg (metric) or lbs (imperial)
    pub weight: String,
    #[serde(default = "default_activity")]
    pub activity: String,
    #[serde(default = "default_unit")]
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Body weight in kg (metric) or lbs (imperial)
    pub weight: String,
    /// Height in cm (metric) or inches (imperial)
    pub height: String,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_activity() -> String { "active".to_string() }
fn default_unit() -> String { "metric".to_string() }

#[derive(Debug, Serialize)]
struct InstructionsResponse {
    instructions: &'static str,
}

fn to_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl HydrationService {
    #[tool(description = "Get the current status of the hydration service including build info, database status, and process information")]
    async fn hydration_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for using the hydration settings tools. Call this when unsure which units or values to use.")]
    fn settings_instructions(&self) -> Result<CallToolResult, McpError> {
        to_result(&InstructionsResponse {
            instructions: SETTINGS_INSTRUCTIONS,
        })
    }

    #[tool(description = "Get the current settings: unit, activity level, height, weight, daily hydration goal and BMI")]
    async fn get_settings(&self) -> Result<CallToolResult, McpError> {
        let state = self.settings.lock().await;
        to_result(&settings::get_settings(&*state))
    }

    #[tool(description = "Switch the measurement system. Height and weight are converted from the values last entered.")]
    async fn set_unit(&self, Parameters(p): Parameters<SetUnitParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.settings.lock().await;
        let result = settings::set_unit(&mut *state, &p.unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_result(&result)
    }

    #[tool(description = "Set the activity level (sedentary, active, athlete)")]
    async fn set_activity(&self, Parameters(p): Parameters<SetActivityParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.settings.lock().await;
        let result = settings::set_activity(&mut *state, &p.activity)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_result(&result)
    }

    #[tool(description = "Set height in the current unit (cm or inches)")]
    async fn set_height(&self, Parameters(p): Parameters<SetHeightParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.settings.lock().await;
        let result = settings::set_height(&mut *state, &p.height)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_result(&result)
    }

    #[tool(description = "Set weight in the current unit (kg or lbs)")]
    async fn set_weight(&self, Parameters(p): Parameters<SetWeightParams>) -> Result<CallToolResult, McpError> {
        let mut state = self.settings.lock().await;
        let result = settings::set_weight(&mut *state, &p.weight)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_result(&result)
    }

    #[tool(description = "Restore all settings to their defaults")]
    async fn reset_settings(&self) -> Result<CallToolResult, McpError> {
        let mut state = self.settings.lock().await;
        let result = settings::reset_settings(&mut *state)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_result(&result)
    }

    #[tool(description = "List the supported measurement units")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        to_result(&settings::list_units())
    }

    #[tool(description = "List the supported activity levels")]
    fn list_activity_levels(&self) -> Result<CallToolResult, McpError> {
        to_result(&settings::list_activity_levels())
    }

    #[tool(description = "Calculate a daily hydration goal for the given weight, activity and unit without changing settings")]
    fn calculate_hydration(&self, Parameters(p): Parameters<CalculateHydrationParams>) -> Result<CallToolResult, McpError> {
        let result = settings::calculate_hydration(&p.weight, &p.activity, &p.unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_result(&result)
    }

    #[tool(description = "Calculate BMI for the given weight, height and unit without changing settings")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        let result = settings::calculate_bmi(&p.weight, &p.height, &p.unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for HydrationService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "hydration".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Hydration Tracker".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Hydration Tracker - body metrics, daily hydration goal and BMI. \
                 Call settings_instructions first if unsure about units. \
                 Settings: get_settings, set_unit, set_activity, set_height, set_weight, reset_settings. \
                 Options: list_units, list_activity_levels. \
                 One-off: calculate_hydration, calculate_bmi. \
                 Status: hydration_status."
                    .into(),
            ),
        }
    }
}
