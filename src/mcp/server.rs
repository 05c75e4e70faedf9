//! Pantry MCP Server Implementation
//!
//! Implements the MCP server with all availability tools. Every tool takes
//! its pantry and recipe snapshots as parameters; the service itself only
//! holds configuration and runtime counters.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::{Recipe, RequiredIngredient, ShoppingListItem, StockEntry};
use crate::quantity::Amount;
use crate::tools::availability;
use crate::tools::status::StatusTracker;

/// Pantry MCP Service
#[derive(Clone)]
pub struct PantryService {
    config: Arc<Config>,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<PantryService>,
}

impl PantryService {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NormalizeQuantityParams {
    /// Amount as a number or text, e.g. 1.5 or "1.5"
    pub amount: Amount,
    /// Unit: g, kg, lb, oz, ml, l, cup, tbsp, tsp, or any count unit
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeCheckParams {
    /// Recipe ingredients: bare names or {name, amount, unit} records
    pub ingredients: Vec<RequiredIngredient>,
    /// Current pantry snapshot
    #[serde(default)]
    pub pantry: Vec<StockEntry>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckRecipesParams {
    /// Recipes to badge, each with a name and ingredient list
    pub recipes: Vec<Recipe>,
    /// Current pantry snapshot
    #[serde(default)]
    pub pantry: Vec<StockEntry>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckExpiryParams {
    /// Expiry date in YYYY-MM-DD; empty or absent never expires
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PantryReportParams {
    /// Current pantry snapshot
    pub pantry: Vec<StockEntry>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ShoppingListParams {
    /// Recipe ingredients: bare names or {name, amount, unit} records
    pub ingredients: Vec<RequiredIngredient>,
    /// Current pantry snapshot
    #[serde(default)]
    pub pantry: Vec<StockEntry>,
    /// Category for the new items (defaults to the configured category)
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PurchasedToPantryParams {
    /// Shopping-list items that were bought
    pub items: Vec<ShoppingListItem>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PantryService {
    // --- Status ---

    #[tool(description = "Get the current status of the pantry service including build info, effective configuration, and process information")]
    fn pantry_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status(&self.config))
    }

    #[tool(description = "Get instructions for checking recipes against the pantry. Call this when unsure about data shapes, units, or matching rules.")]
    fn availability_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::AVAILABILITY_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(AVAILABILITY_INSTRUCTIONS)]))
    }

    // --- Quantities ---

    #[tool(description = "Convert an amount and unit to its base unit (g, ml, or pcs) and measurement axis")]
    fn normalize_quantity(&self, Parameters(p): Parameters<NormalizeQuantityParams>) -> Result<CallToolResult, McpError> {
        json_result(&availability::normalize_quantity(p.amount, p.unit))
    }

    // --- Recipe Checks ---

    #[tool(description = "List the recipe ingredients the pantry cannot cover, in recipe order")]
    fn find_missing_ingredients(&self, Parameters(p): Parameters<RecipeCheckParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_check();
        let result = availability::find_missing_ingredients(&self.config, &p.ingredients, &p.pantry);
        tracing::info!("find_missing_ingredients: {} of {} missing", result.missing_count, p.ingredients.len());
        json_result(&result)
    }

    #[tool(description = "Check whether a recipe is ready to cook with the current pantry")]
    fn can_make_recipe(&self, Parameters(p): Parameters<RecipeCheckParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_check();
        json_result(&availability::can_make_recipe(&self.config, &p.ingredients, &p.pantry))
    }

    #[tool(description = "Show required vs available quantity for every recipe ingredient, with counts of matched, expired, and incompatible pantry entries")]
    fn assess_recipe(&self, Parameters(p): Parameters<RecipeCheckParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_check();
        json_result(&availability::assess_recipe(&self.config, &p.ingredients, &p.pantry))
    }

    #[tool(description = "Badge several recipes as ready to cook or missing ingredients against one pantry snapshot")]
    fn check_recipes(&self, Parameters(p): Parameters<CheckRecipesParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_check();
        let result = availability::check_recipes(&self.config, &p.recipes, &p.pantry);
        tracing::info!("check_recipes: {} of {} ready", result.ready_count, result.recipes.len());
        json_result(&result)
    }

    #[tool(description = "Turn the ingredients a recipe is missing into shopping-list records (not yet acquired, with a category)")]
    fn missing_to_shopping_list(&self, Parameters(p): Parameters<ShoppingListParams>) -> Result<CallToolResult, McpError> {
        self.status_tracker.record_check();
        json_result(&availability::missing_to_shopping_list(
            &self.config,
            &p.ingredients,
            &p.pantry,
            p.category.as_deref(),
        ))
    }

    #[tool(description = "Turn purchased shopping-list items into pantry records with today's date as the expiry date")]
    fn purchased_to_pantry(&self, Parameters(p): Parameters<PurchasedToPantryParams>) -> Result<CallToolResult, McpError> {
        let result = availability::purchased_to_pantry(&self.config, p.items);
        tracing::info!("purchased_to_pantry: {} items restocked", result.count);
        json_result(&result)
    }

    // --- Expiry ---

    #[tool(description = "Check whether a date is expired and how close it is to expiring")]
    fn check_expiry(&self, Parameters(p): Parameters<CheckExpiryParams>) -> Result<CallToolResult, McpError> {
        json_result(&availability::check_expiry(&self.config, p.date.as_deref().unwrap_or("")))
    }

    #[tool(description = "List pantry entries by soonest expiry with an expiry badge for each")]
    fn pantry_expiry_report(&self, Parameters(p): Parameters<PantryReportParams>) -> Result<CallToolResult, McpError> {
        json_result(&availability::pantry_expiry_report(&self.config, &p.pantry))
    }
}

#[tool_handler]
impl ServerHandler for PantryService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pantry".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Pantry Availability Engine".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Pantry Availability Engine - checks recipes against a household pantry snapshot. \
                 Call availability_instructions first for data shapes and matching rules. \
                 The server stores nothing: pass the pantry and recipe with every call. \
                 Recipes: find_missing_ingredients, can_make_recipe, assess_recipe, check_recipes. \
                 Shopping: missing_to_shopping_list, purchased_to_pantry. \
                 Expiry: check_expiry, pantry_expiry_report. \
                 Units: normalize_quantity. Status: pantry_status."
                    .into(),
            ),
        }
    }
}
