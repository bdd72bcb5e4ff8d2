//! Valuation engine - the core of the service
//!
//! Turns raw on-chain reads into normalized financial figures:
//! - staking APR as an integer percentage
//! - locked-value statistics in native and stablecoin denominations
//! - circulating supply net of treasury and genesis accounts
//!
//! Every computation is a fresh, request-scoped read-and-compute cycle;
//! nothing is cached and no state survives the request.

mod base_asset;
mod engine;
mod reserves;

pub use base_asset::{classify_base_asset, BaseAsset};
pub use engine::{LockedStats, ValuationEngine, SECONDS_PER_YEAR};
pub use reserves::{reserves_of, PoolReserves};
