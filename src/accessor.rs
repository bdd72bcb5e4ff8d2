//! Contract accessor - typed read helpers over the RPC transport
//!
//! One function selector per helper, encoded with compile-time Solidity
//! bindings. Results are decoded here and nowhere else: integer words
//! become [`Amount`]s, address words are normalized to canonical 20-byte
//! form so every downstream equality check is reliable regardless of the
//! zero-padding the node returned.

use alloy_primitives::Address;
use alloy_sol_types::{sol, SolCall};

use crate::amount::Amount;
use crate::error::MetricsError;
use crate::rpc::ReadTransport;

// ============================================
// CONTRACT INTERFACES
// ============================================

sol! {
    interface IERC20 {
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
    }

    interface IStakingRewards {
        function stakingToken() external view returns (address);
        function rewardRate() external view returns (uint256);
    }

    interface IPair {
        function token0() external view returns (address);
        function token1() external view returns (address);
    }
}

// ============================================
// ADDRESS NORMALIZATION
// ============================================

/// Canonicalize an address-shaped call result.
///
/// Strips leading zero bytes and left-pads back to 20, accepting both full
/// 32-byte words and already-stripped encodings. A value wider than 20
/// bytes is a malformed result.
pub fn normalize_address(raw: &[u8]) -> Result<Address, MetricsError> {
    if raw.is_empty() {
        return Err(MetricsError::NodeRead("empty call result".into()));
    }
    let stripped: &[u8] = {
        let first = raw.iter().position(|b| *b != 0).unwrap_or(raw.len());
        &raw[first..]
    };
    if stripped.len() > 20 {
        return Err(MetricsError::NodeRead(format!(
            "address result wider than 20 bytes ({} significant)",
            stripped.len()
        )));
    }
    let mut addr = [0u8; 20];
    addr[20 - stripped.len()..].copy_from_slice(stripped);
    Ok(Address::from(addr))
}

// ============================================
// ACCESSOR
// ============================================

/// Typed reads against the chain, generic over the transport seam.
pub struct ContractAccessor<T> {
    transport: T,
}

impl<T: ReadTransport> ContractAccessor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn read(&self, to: Address, calldata: Vec<u8>) -> Result<Vec<u8>, MetricsError> {
        Ok(self.transport.call(to, calldata).await?.to_vec())
    }

    /// Address of the LP token a staking contract accepts.
    pub async fn staking_token_of(&self, staking: Address) -> Result<Address, MetricsError> {
        let raw = self
            .read(staking, IStakingRewards::stakingTokenCall {}.abi_encode())
            .await?;
        normalize_address(&raw)
    }

    /// Reward emission per second of a staking contract.
    pub async fn reward_rate_of(&self, staking: Address) -> Result<Amount, MetricsError> {
        let raw = self
            .read(staking, IStakingRewards::rewardRateCall {}.abi_encode())
            .await?;
        Amount::from_be_bytes(&raw)
    }

    pub async fn total_supply_of(&self, token: Address) -> Result<Amount, MetricsError> {
        let raw = self.read(token, IERC20::totalSupplyCall {}.abi_encode()).await?;
        Amount::from_be_bytes(&raw)
    }

    pub async fn balance_of(&self, token: Address, holder: Address) -> Result<Amount, MetricsError> {
        let raw = self
            .read(token, IERC20::balanceOfCall { owner: holder }.abi_encode())
            .await?;
        Amount::from_be_bytes(&raw)
    }

    /// The two constituent tokens of a pair contract, token0 then token1.
    /// The reads have no mutual dependency and run concurrently.
    pub async fn pair_tokens_of(&self, pair: Address) -> Result<(Address, Address), MetricsError> {
        let (raw0, raw1) = tokio::try_join!(
            self.read(pair, IPair::token0Call {}.abi_encode()),
            self.read(pair, IPair::token1Call {}.abi_encode()),
        )?;
        Ok((normalize_address(&raw0)?, normalize_address(&raw1)?))
    }
}
