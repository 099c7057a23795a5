//! MCP server implementation.

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde_json::Value;

use crate::{
    dexpaprika::DexPaprikaClient,
    error::ApiError,
    types::{default_interval, default_limit, default_ohlcv_limit, OrderBy, SortOrder},
};

/// Upper bound on OHLCV data points per request, per the API contract.
const MAX_OHLCV_LIMIT: u32 = 366;

/// DexPaprika MCP Server.
///
/// Exposes the DexPaprika market-data API (networks, DEXes, liquidity pools,
/// tokens, OHLCV, transactions, search, stats) as MCP tools. The tool catalog
/// is built once here and never mutated afterwards; each invocation performs
/// exactly one outbound HTTP call and forwards the JSON body verbatim.
#[derive(Clone)]
pub struct DexPaprikaServer {
    client: DexPaprikaClient,
    tool_router: ToolRouter<Self>,
}

impl DexPaprikaServer {
    /// Create a new DexPaprika MCP server against the production API.
    pub fn new() -> Result<Self, ApiError> {
        tracing::info!("Initializing DexPaprika MCP server");
        Ok(Self::with_client(DexPaprikaClient::new()?))
    }

    /// Create a server around an existing gateway client.
    ///
    /// Lets tests point every tool at a stub API.
    pub fn with_client(client: DexPaprikaClient) -> Self {
        Self { client, tool_router: Self::tool_router() }
    }
}

/// Input parameters for the get_network_dexes tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetNetworkDexesInput {
    /// Network id from get_networks (e.g., "ethereum", "solana").
    pub network: String,
    /// Page number for pagination.
    #[serde(default)]
    pub page: u32,
    /// Number of items per page (max 100).
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Input parameters for the get_network_pools tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetNetworkPoolsInput {
    /// Network id from get_networks (e.g., "ethereum", "solana").
    pub network: String,
    /// Page number for pagination.
    #[serde(default)]
    pub page: u32,
    /// Number of items per page (max 100).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Sort order.
    #[serde(default)]
    pub sort: SortOrder,
    /// Field to order results by.
    #[serde(default)]
    pub order_by: OrderBy,
}

/// Input parameters for the get_dex_pools tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetDexPoolsInput {
    /// Network id from get_networks (e.g., "ethereum", "solana").
    pub network: String,
    /// DEX identifier from get_network_dexes (e.g., "uniswap_v3").
    pub dex: String,
    /// Page number for pagination.
    #[serde(default)]
    pub page: u32,
    /// Number of items per page (max 100).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Sort order.
    #[serde(default)]
    pub sort: SortOrder,
    /// Field to order results by.
    #[serde(default)]
    pub order_by: OrderBy,
}

/// Input parameters for the get_pool_details tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetPoolDetailsInput {
    /// Network id from get_networks (e.g., "ethereum", "solana").
    pub network: String,
    /// Pool address or identifier.
    pub pool_address: String,
    /// Whether to invert the price ratio.
    #[serde(default)]
    pub inversed: bool,
}

/// Input parameters for the get_token_details tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetTokenDetailsInput {
    /// Network id from get_networks (e.g., "ethereum", "solana").
    pub network: String,
    /// Token address or identifier.
    pub token_address: String,
}

/// Input parameters for the get_token_pools tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetTokenPoolsInput {
    /// Network id from get_networks (e.g., "ethereum", "solana").
    pub network: String,
    /// Token address or identifier.
    pub token_address: String,
    /// Page number for pagination.
    #[serde(default)]
    pub page: u32,
    /// Number of items per page (max 100).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Sort order.
    #[serde(default)]
    pub sort: SortOrder,
    /// Field to order results by.
    #[serde(default)]
    pub order_by: OrderBy,
    /// When true, reorders the pool so the queried token becomes the primary
    /// token for all metrics.
    #[serde(default)]
    pub reorder: Option<bool>,
    /// Only return pools that also contain this token address.
    #[serde(default)]
    pub address: Option<String>,
}

/// Input parameters for the get_pool_ohlcv tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetPoolOhlcvInput {
    /// Network id from get_networks (e.g., "ethereum", "solana").
    pub network: String,
    /// Pool address or identifier.
    pub pool_address: String,
    /// Start time for historical data (Unix timestamp, RFC3339, or
    /// yyyy-mm-dd).
    pub start: String,
    /// End time for historical data (max 1 year from start).
    #[serde(default)]
    pub end: Option<String>,
    /// Number of data points to retrieve (1 to 366).
    #[serde(default = "default_ohlcv_limit")]
    pub limit: u32,
    /// Interval granularity: 1m, 5m, 10m, 15m, 30m, 1h, 6h, 12h, 24h.
    #[serde(default = "default_interval")]
    pub interval: String,
    /// Whether to invert the price ratio for the alternative pair
    /// perspective (e.g., USDC/ETH instead of ETH/USDC).
    #[serde(default)]
    pub inversed: bool,
}

/// Input parameters for the get_pool_transactions tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetPoolTransactionsInput {
    /// Network id from get_networks (e.g., "ethereum", "solana").
    pub network: String,
    /// Pool address or identifier.
    pub pool_address: String,
    /// Page number for pagination (up to 100 pages).
    #[serde(default)]
    pub page: u32,
    /// Number of items per page (max 100).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Transaction id used for cursor-based pagination.
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Input parameters for the search tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchInput {
    /// Search term (e.g., "uniswap", "bitcoin", or a token address).
    pub query: String,
}

/// Wrap a JSON payload as the single text content item of a successful call.
///
/// The payload is forwarded verbatim: no reshaping, filtering, or
/// aggregation happens on this side of the proxy.
fn text_result(data: &Value) -> Result<CallToolResult, McpError> {
    let text =
        serde_json::to_string(data).map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl DexPaprikaServer {
    /// List every blockchain network the API knows about.
    #[tool(
        description = "REQUIRED FIRST STEP: Get all supported blockchain networks. Always call this before any network-scoped tool to see the valid network ids, such as \"ethereum\" or \"solana\"."
    )]
    pub async fn get_networks(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("get_networks called");

        let data = self.client.fetch(&["networks"], &[]).await?;
        text_result(&data)
    }

    /// List the DEXes available on one network.
    #[tool(
        description = "Get available DEXes on a specific network. Call get_networks first to see valid network ids."
    )]
    pub async fn get_network_dexes(
        &self,
        Parameters(input): Parameters<GetNetworkDexesInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(network = %input.network, "get_network_dexes called");

        let data = self
            .client
            .fetch(
                &["networks", &input.network, "dexes"],
                &[("page", input.page.to_string()), ("limit", input.limit.to_string())],
            )
            .await?;
        text_result(&data)
    }

    /// List the top pools on one network.
    #[tool(
        description = "PRIMARY POOL TOOL: Get top liquidity pools on a specific network. This is the main way to get pool data; there is no global pools tool, so always scope the query with a network id from get_networks."
    )]
    pub async fn get_network_pools(
        &self,
        Parameters(input): Parameters<GetNetworkPoolsInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(network = %input.network, "get_network_pools called");

        let data = self
            .client
            .fetch(
                &["networks", &input.network, "pools"],
                &[
                    ("page", input.page.to_string()),
                    ("limit", input.limit.to_string()),
                    ("sort", input.sort.as_str().to_string()),
                    ("order_by", input.order_by.as_str().to_string()),
                ],
            )
            .await?;
        text_result(&data)
    }

    /// List the pools of one DEX on one network.
    #[tool(
        description = "Get pools from a specific DEX on a network. Use get_networks and then get_network_dexes to find valid DEX ids."
    )]
    pub async fn get_dex_pools(
        &self,
        Parameters(input): Parameters<GetDexPoolsInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(network = %input.network, dex = %input.dex, "get_dex_pools called");

        let data = self
            .client
            .fetch(
                &["networks", &input.network, "dexes", &input.dex, "pools"],
                &[
                    ("page", input.page.to_string()),
                    ("limit", input.limit.to_string()),
                    ("sort", input.sort.as_str().to_string()),
                    ("order_by", input.order_by.as_str().to_string()),
                ],
            )
            .await?;
        text_result(&data)
    }

    /// Fetch full details for one pool.
    #[tool(
        description = "Get detailed information about a specific pool. Requires a network id from get_networks and a pool address."
    )]
    pub async fn get_pool_details(
        &self,
        Parameters(input): Parameters<GetPoolDetailsInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            network = %input.network,
            pool = %input.pool_address,
            "get_pool_details called"
        );

        let data = self
            .client
            .fetch(
                &["networks", &input.network, "pools", &input.pool_address],
                &[("inversed", input.inversed.to_string())],
            )
            .await?;
        text_result(&data)
    }

    /// Fetch full details for one token.
    #[tool(
        description = "Get detailed information about a specific token on a network. Call get_networks first to see valid network ids."
    )]
    pub async fn get_token_details(
        &self,
        Parameters(input): Parameters<GetTokenDetailsInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            network = %input.network,
            token = %input.token_address,
            "get_token_details called"
        );

        let data = self
            .client
            .fetch(&["networks", &input.network, "tokens", &input.token_address], &[])
            .await?;
        text_result(&data)
    }

    /// List the pools that contain one token.
    #[tool(
        description = "Get liquidity pools containing a specific token on a network. Useful for finding where a token is traded."
    )]
    pub async fn get_token_pools(
        &self,
        Parameters(input): Parameters<GetTokenPoolsInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            network = %input.network,
            token = %input.token_address,
            "get_token_pools called"
        );

        let mut query = vec![
            ("page", input.page.to_string()),
            ("limit", input.limit.to_string()),
            ("sort", input.sort.as_str().to_string()),
            ("order_by", input.order_by.as_str().to_string()),
        ];
        if let Some(reorder) = input.reorder {
            query.push(("reorder", reorder.to_string()));
        }
        // An empty filter means unset.
        if let Some(address) = input.address.as_deref().filter(|a| !a.is_empty()) {
            query.push(("address", address.to_string()));
        }

        let data = self
            .client
            .fetch(
                &["networks", &input.network, "tokens", &input.token_address, "pools"],
                &query,
            )
            .await?;
        text_result(&data)
    }

    /// Fetch OHLCV history for one pool.
    #[tool(
        description = "Get historical price data (OHLCV) for a pool, for price analysis, backtesting, and charting. Requires a network id, pool address, and start time."
    )]
    pub async fn get_pool_ohlcv(
        &self,
        Parameters(input): Parameters<GetPoolOhlcvInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            network = %input.network,
            pool = %input.pool_address,
            start = %input.start,
            "get_pool_ohlcv called"
        );

        if input.limit == 0 || input.limit > MAX_OHLCV_LIMIT {
            let err = ApiError::Validation(format!(
                "limit must be between 1 and {}, got {}",
                MAX_OHLCV_LIMIT, input.limit
            ));
            tracing::error!(error = %err, "get_pool_ohlcv rejected");
            return Err(err.into());
        }

        let mut query = vec![("start", input.start.clone())];
        if let Some(end) = input.end.as_deref().filter(|e| !e.is_empty()) {
            query.push(("end", end.to_string()));
        }
        query.push(("limit", input.limit.to_string()));
        query.push(("interval", input.interval.clone()));
        query.push(("inversed", input.inversed.to_string()));

        let data = self
            .client
            .fetch(&["networks", &input.network, "pools", &input.pool_address, "ohlcv"], &query)
            .await?;
        text_result(&data)
    }

    /// List recent transactions of one pool.
    #[tool(
        description = "Get recent transactions for a specific pool: swaps, liquidity adds and removes. Requires a network id and pool address."
    )]
    pub async fn get_pool_transactions(
        &self,
        Parameters(input): Parameters<GetPoolTransactionsInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            network = %input.network,
            pool = %input.pool_address,
            "get_pool_transactions called"
        );

        let mut query =
            vec![("page", input.page.to_string()), ("limit", input.limit.to_string())];
        if let Some(cursor) = input.cursor.as_deref().filter(|c| !c.is_empty()) {
            query.push(("cursor", cursor.to_string()));
        }

        let data = self
            .client
            .fetch(
                &["networks", &input.network, "pools", &input.pool_address, "transactions"],
                &query,
            )
            .await?;
        text_result(&data)
    }

    /// Cross-network search for tokens, pools, and DEXes.
    #[tool(
        description = "Search across ALL networks for tokens, pools, and DEXes by name, symbol, or address. A good starting point when the network is unknown."
    )]
    pub async fn search(
        &self,
        Parameters(input): Parameters<SearchInput>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(query = %input.query, "search called");

        let query = input.query.trim();
        if query.is_empty() {
            let err = ApiError::Validation("Search query cannot be empty".to_string());
            tracing::error!(error = %err, "search rejected");
            return Err(err.into());
        }

        let data = self.client.fetch(&["search"], &[("query", query.to_string())]).await?;
        text_result(&data)
    }

    /// Ecosystem-wide totals.
    #[tool(
        description = "Get high-level statistics about the DexPaprika ecosystem: total networks, DEXes, pools, and tokens."
    )]
    pub async fn get_stats(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("get_stats called");

        let data = self.client.fetch(&["stats"], &[]).await?;
        text_result(&data)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for DexPaprikaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dexpaprika-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "DexPaprika MCP server for decentralized exchange market data. Workflow: \
                 call get_networks first to see the valid network ids, then use \
                 get_network_pools for pool data on a specific network (there is no \
                 global pools tool), and search when the network is unknown."
                    .to_string(),
            ),
        }
    }
}
