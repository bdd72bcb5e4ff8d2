//! Base-asset classification for staking pools.
//!
//! Only three pool shapes are valuation-compatible: pools holding the
//! wrapped native coin, the reward token, or the reference stablecoin.
//! A pool could hold more than one recognized asset, so classification
//! uses a fixed precedence and the first match wins. Keeping the
//! precedence in one function keeps it auditable; use sites never re-test
//! membership.

use alloy_primitives::Address;

use crate::error::MetricsError;

/// The recognized asset a pool's value is expressed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseAsset {
    Native,
    Reward,
    Stable,
}

/// Decide the base asset for a pool holding `token0`/`token1`.
///
/// Precedence: native, then reward, then stable. `reward` is the
/// program-specific reward-token address (standard or boosted). Matching
/// none of the three is a permanent configuration mismatch.
pub fn classify_base_asset(
    (token0, token1): (Address, Address),
    native: Address,
    reward: Address,
    stable: Address,
) -> Result<BaseAsset, MetricsError> {
    let holds = |asset: Address| token0 == asset || token1 == asset;

    if holds(native) {
        Ok(BaseAsset::Native)
    } else if holds(reward) {
        Ok(BaseAsset::Reward)
    } else if holds(stable) {
        Ok(BaseAsset::Stable)
    } else {
        Err(MetricsError::UnsupportedPoolComposition)
    }
}
