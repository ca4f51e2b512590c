//! Pocket Battle MCP server
//!
//! A Model Context Protocol server over stdio (rmcp) exposing one battle
//! session at a time as text-returning tools. Logs go to stderr.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pocket_battle::battle_service::BattleService;
use pocket_battle::game_data::GameData;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct BattleServer {
    tool_router: ToolRouter<BattleServer>,
    service: Arc<Mutex<BattleService>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct StartBattleRequest {
    #[schemars(description = "Species of your Pokemon (default Charmander)")]
    pub species: Option<String>,
    #[schemars(description = "Level of your Pokemon (default 5)")]
    pub level: Option<u8>,
    #[schemars(description = "Seed for the encounter roll, for reproducible battles")]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UseMoveRequest {
    #[schemars(description = "Name or slot number (1-4) of the move to use")]
    pub move_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupMoveRequest {
    #[schemars(description = "Name of the move to look up")]
    pub move_name: String,
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl BattleServer {
    pub fn new(data: GameData) -> Self {
        Self {
            tool_router: Self::tool_router(),
            service: Arc::new(Mutex::new(BattleService::new(data))),
        }
    }

    fn service(&self) -> MutexGuard<'_, BattleService> {
        self.service.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[tool(description = "Start a battle against a random wild Pokemon")]
    async fn start_battle(
        &self,
        Parameters(request): Parameters<StartBattleRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .service()
            .start_battle(request.species.as_deref(), request.level, request.seed);
        match result {
            Ok(intro_text) => text_result(intro_text),
            Err(e) => Err(McpError {
                code: ErrorCode(-32603),
                message: Cow::from(format!("Error starting battle: {}", e)),
                data: None,
            }),
        }
    }

    #[tool(description = "Get the current battle state, health bars and move menu")]
    async fn get_battle_state(&self) -> Result<CallToolResult, McpError> {
        text_result(self.service().battle_state())
    }

    #[tool(description = "Use a move by name or slot number (1-4)")]
    async fn use_move(
        &self,
        Parameters(request): Parameters<UseMoveRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(self.service().use_move(&request.move_name))
    }

    #[tool(description = "Check on your Pokemon without using a turn")]
    async fn status(&self) -> Result<CallToolResult, McpError> {
        text_result(self.service().status())
    }

    #[tool(description = "Run away from the current battle")]
    async fn run(&self) -> Result<CallToolResult, McpError> {
        text_result(self.service().run())
    }

    #[tool(description = "Get every event of the last move or run as JSON")]
    async fn get_last_turn_events(&self) -> Result<CallToolResult, McpError> {
        text_result(self.service().last_turn_events())
    }

    #[tool(description = "Look up the type and power of a move")]
    async fn lookup_move(
        &self,
        Parameters(request): Parameters<LookupMoveRequest>,
    ) -> Result<CallToolResult, McpError> {
        text_result(self.service().lookup_move(&request.move_name))
    }
}

#[tool_handler]
impl ServerHandler for BattleServer {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let data = GameData::builtin()?;
    let server = BattleServer::new(data).serve((stdin(), stdout())).await?;
    info!("battle server running");

    let quit_reason = server.waiting().await?;
    info!(?quit_reason, "battle server exiting");
    Ok(())
}
