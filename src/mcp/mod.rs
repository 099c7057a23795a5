//! MCP server module.
//!
//! Contains the MCP server implementation with tool handlers.

pub mod server;

pub use server::DexPaprikaServer;
pub use server::{
    GetDexPoolsInput, GetNetworkDexesInput, GetNetworkPoolsInput, GetPoolDetailsInput,
    GetPoolOhlcvInput, GetPoolTransactionsInput, GetTokenDetailsInput, GetTokenPoolsInput,
    SearchInput,
};
