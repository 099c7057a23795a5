//! DexPaprika MCP Server Library
//!
//! A Model Context Protocol server for DexPaprika decentralized exchange
//! market data. Exposes the remote REST API as MCP tools: networks, DEXes,
//! liquidity pools, tokens, OHLCV history, transactions, search, and stats.
//!
//! # Architecture
//!
//! - **Gateway** ([`dexpaprika::DexPaprikaClient`]): builds a percent-encoded
//!   URL for one logical request, performs a single HTTP GET, and classifies
//!   the outcome (410 and 429 carry guidance text for the calling assistant).
//! - **Tool registry** ([`mcp::DexPaprikaServer`]): declares the eleven
//!   operations with their parameter schemas, validates and defaults
//!   arguments, and wraps each JSON result as a single text content item.
//!
//! # Example
//!
//! ```rust,ignore
//! use dexpaprika_mcp::DexPaprikaServer;
//! use rmcp::ServiceExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = DexPaprikaServer::new()?;
//!     let running = server.serve(rmcp::transport::stdio()).await?;
//!     running.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dexpaprika;
pub mod error;
pub mod mcp;
pub mod types;

pub use config::Config;
pub use dexpaprika::{DexPaprikaClient, API_BASE_URL};
pub use error::{ApiError, Result};
pub use mcp::DexPaprikaServer;
