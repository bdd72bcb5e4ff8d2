//! APR, locked-value and circulating-supply computations.
//!
//! All reads with no data dependency are issued as one concurrent batch
//! and joined together; the first failure fails the request. Dependent
//! reads (anything keyed on the staking-token address) are sequenced
//! strictly after their dependency resolves.

use alloy_primitives::Address;
use tracing::debug;

use crate::accessor::ContractAccessor;
use crate::amount::Amount;
use crate::error::MetricsError;
use crate::registry::ChainContext;
use crate::rpc::ReadTransport;

use super::base_asset::{classify_base_asset, BaseAsset};
use super::reserves::reserves_of;

/// Reward seconds in the annualization window: 52 whole weeks.
pub const SECONDS_PER_YEAR: u64 = 60 * 60 * 24 * 7 * 52;

/// Locked-value statistics in all three denominations.
#[derive(Debug, Clone, Copy)]
pub struct LockedStats {
    /// Reward-token balance of the lock account, 18-decimal scale.
    pub locked_raw: Amount,
    /// The same position expressed in the wrapped native coin.
    pub locked_in_native: Amount,
    /// The same position expressed in the reference stablecoin.
    pub locked_in_stable: Amount,
}

/// The valuation engine. Stateless: each call is an independent unit of
/// work, so one engine value can serve any number of concurrent requests.
pub struct ValuationEngine<T> {
    accessor: ContractAccessor<T>,
}

impl<T: ReadTransport> ValuationEngine<T> {
    pub fn new(transport: T) -> Self {
        Self {
            accessor: ContractAccessor::new(transport),
        }
    }

    pub fn accessor(&self) -> &ContractAccessor<T> {
        &self.accessor
    }

    /// Annualized staking yield as an integer percentage.
    ///
    /// The integer result is an accepted precision loss: on-chain consumers
    /// display the same truncated figure. `boosted` selects the alternate
    /// reward-token/pair address table.
    pub async fn compute_apr(
        &self,
        staking: Address,
        ctx: &ChainContext,
        boosted: bool,
    ) -> Result<Amount, MetricsError> {
        let (reward_token, reward_pair) = ctx.reward_pair_for(boosted);

        // Phase 1: the only dependent lookup.
        let lp = self.accessor.staking_token_of(staking).await?;

        // Phase 2: everything else is independent once the LP address is
        // known, and goes out as a single batch.
        let (staked_lp, lp_supply, pool_tokens, reward_reserves, stable_reserves, reward_rate) =
            tokio::try_join!(
                self.accessor.balance_of(lp, staking),
                self.accessor.total_supply_of(lp),
                self.accessor.pair_tokens_of(lp),
                reserves_of(&self.accessor, reward_pair, ctx.wrapped_native, reward_token),
                reserves_of(
                    &self.accessor,
                    ctx.native_stable_pair,
                    ctx.wrapped_native,
                    ctx.stablecoin
                ),
                self.accessor.reward_rate_of(staking),
            )?;

        // An unseeded LP or an unseeded reference pair means there is
        // nothing to annualize against; that is a valid zero, not an error.
        if lp_supply.is_zero() || reward_reserves.reserve_b.is_zero() {
            debug!("apr {staking}: unseeded pool, returning 0");
            return Ok(Amount::ZERO);
        }

        let base = classify_base_asset(pool_tokens, ctx.wrapped_native, reward_token, ctx.stablecoin)?;
        debug!("apr {staking}: lp {lp} base asset {base:?}");

        let two = Amount::from_u64(2);
        // Both sides of a balanced pool hold equal value, hence the factor
        // of 2. Division order is load-bearing: each step floors.
        let staked_value_in_native = match base {
            BaseAsset::Native => self
                .accessor
                .balance_of(ctx.wrapped_native, lp)
                .await?
                .mul(two)?
                .mul(staked_lp)?
                .div(lp_supply)?,
            BaseAsset::Reward => self
                .accessor
                .balance_of(reward_token, lp)
                .await?
                .mul(two)?
                .mul(reward_reserves.reserve_a)?
                .div(reward_reserves.reserve_b)?
                .mul(staked_lp)?
                .div(lp_supply)?,
            BaseAsset::Stable => self
                .accessor
                .balance_of(ctx.stablecoin, lp)
                .await?
                .mul(two)?
                .mul(stable_reserves.reserve_a)?
                .div(stable_reserves.reserve_b)
                .map_err(MetricsError::surface_empty_pool)?
                .mul(staked_lp)?
                .div(lp_supply)?,
        };

        if staked_value_in_native.is_zero() {
            debug!("apr {staking}: nothing of value staked, returning 0");
            return Ok(Amount::ZERO);
        }

        reward_rate
            .mul(Amount::from_u64(SECONDS_PER_YEAR))?
            .mul(reward_reserves.reserve_a)?
            .div(reward_reserves.reserve_b)?
            .mul(Amount::from_u64(100))?
            .div(staked_value_in_native)
    }

    /// Locked-value statistics for a lock account, in reward-token, native
    /// and stablecoin denominations.
    ///
    /// Deliberately no zero-guards: an empty reference pair is a hard
    /// [`MetricsError::EmptyReferencePool`] failure, unlike the APR path's
    /// zero short-circuits.
    pub async fn compute_locked_stats(
        &self,
        lock_account: Address,
        ctx: &ChainContext,
    ) -> Result<LockedStats, MetricsError> {
        let (locked_raw, stable_reserves, native_reserves) = tokio::try_join!(
            self.accessor.balance_of(ctx.reward_token, lock_account),
            reserves_of(
                &self.accessor,
                ctx.reward_stable_pair,
                ctx.stablecoin,
                ctx.reward_token
            ),
            reserves_of(
                &self.accessor,
                ctx.native_reward_pair,
                ctx.wrapped_native,
                ctx.reward_token
            ),
        )?;

        let locked_in_native = locked_raw
            .mul(native_reserves.reserve_a)?
            .div(native_reserves.reserve_b)
            .map_err(MetricsError::surface_empty_pool)?;
        let locked_in_stable = locked_raw
            .mul(stable_reserves.reserve_a)?
            .div(stable_reserves.reserve_b)
            .map_err(MetricsError::surface_empty_pool)?;

        debug!("locked {lock_account}: raw {locked_raw} native {locked_in_native} stable {locked_in_stable}");

        Ok(LockedStats {
            locked_raw,
            locked_in_native,
            locked_in_stable,
        })
    }

    /// Reward-token supply net of the treasury vester, treasury lock and
    /// genesis allocation accounts. `scaled` drops the 18-decimal scale
    /// for a human-readable figure; otherwise the raw integer is returned.
    pub async fn compute_circulating_supply(
        &self,
        ctx: &ChainContext,
        scaled: bool,
    ) -> Result<Amount, MetricsError> {
        let (total, vester, lock, genesis) = tokio::try_join!(
            self.accessor.total_supply_of(ctx.reward_token),
            self.accessor.balance_of(ctx.reward_token, ctx.treasury_vester),
            self.accessor.balance_of(ctx.reward_token, ctx.treasury_lock),
            self.accessor.balance_of(ctx.reward_token, ctx.genesis_account),
        )?;

        let circulating = total.sub(vester)?.sub(lock)?.sub(genesis)?;
        Ok(if scaled {
            circulating.scale_down()
        } else {
            circulating
        })
    }
}
