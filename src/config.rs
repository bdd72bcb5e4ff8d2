//! Service configuration.
//!
//! Everything is read once at startup from environment variables (with
//! `.env` support) or a TOML file; nothing is reloaded at runtime. The
//! per-chain RPC endpoints default to the registry's public nodes and can
//! be overridden per chain for operators with dedicated providers.

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::registry;

/// Main configuration for the metrics service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // ========== Network Settings ==========
    /// Address the HTTP listener binds to.
    pub bind_addr: String,

    /// Per-chain RPC endpoint overrides as (chain id, url) pairs.
    /// Chains without an override use the registry's default endpoint.
    pub rpc_overrides: Vec<(u64, String)>,
}

impl Config {
    /// Load configuration from environment variables and a `.env` file.
    ///
    /// `RPC_URLS` is a comma-separated list of `chainid=url` entries, e.g.
    /// `RPC_URLS=43114=https://my-node/rpc,43113=https://my-fuji/rpc`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            rpc_overrides: env::var("RPC_URLS")
                .map(|s| Self::parse_rpc_overrides(&s))
                .unwrap_or_default(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn parse_rpc_overrides(raw: &str) -> Vec<(u64, String)> {
        raw.split(',')
            .filter_map(|entry| {
                let (chain, url) = entry.split_once('=')?;
                let chain: u64 = chain.trim().parse().ok()?;
                let url = url.trim();
                if url.is_empty() {
                    return None;
                }
                Some((chain, url.to_string()))
            })
            .collect()
    }

    /// RPC endpoint for a chain: the operator override if present, the
    /// registry default otherwise.
    pub fn rpc_url_for(&self, ctx: &registry::ChainContext) -> String {
        self.rpc_overrides
            .iter()
            .find(|(chain, _)| *chain == ctx.chain_id)
            .map(|(_, url)| url.clone())
            .unwrap_or_else(|| ctx.rpc_url.to_string())
    }

    /// Sanity checks before serving.
    pub fn validate(&self) -> Result<()> {
        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(eyre::eyre!("invalid BIND_ADDR '{}'", self.bind_addr));
        }
        for (chain, url) in &self.rpc_overrides {
            if registry::resolve(*chain).is_none() {
                return Err(eyre::eyre!("RPC override for unsupported chain {chain}"));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(eyre::eyre!(
                    "RPC override for chain {chain} is not an http(s) url"
                ));
            }
        }
        Ok(())
    }

    /// Log the effective configuration at startup.
    pub fn print_summary(&self) {
        tracing::info!("listening on {}", self.bind_addr);
        for chain in registry::supported_chains() {
            if let Some(ctx) = registry::resolve(chain) {
                let overridden = self.rpc_overrides.iter().any(|(id, _)| *id == chain);
                tracing::info!(
                    "chain {chain}: rpc {} ({})",
                    self.rpc_url_for(ctx),
                    if overridden { "override" } else { "default" }
                );
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            rpc_overrides: vec![],
        }
    }
}
