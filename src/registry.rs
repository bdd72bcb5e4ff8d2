//! Chain registry - static per-chain contract tables
//!
//! Maps a chain id to the resolved addresses of every contract the
//! valuation engine reads: wrapped native coin, reward token, reference
//! stablecoin, the reference pairs between them, the lock account, the
//! excluded supply accounts, and the staking-contract allowlists.
//!
//! The table is compiled in and read-only after initialization; the engine
//! itself never resolves addresses.

use alloy_primitives::{address, Address};
use std::collections::HashMap;

// ============================================
// SUPPORTED CHAINS
// ============================================

/// Avalanche C-Chain mainnet
pub const MAINNET: u64 = 43114;

/// Avalanche Fuji testnet
pub const FUJI: u64 = 43113;

// ============================================
// CHAIN CONTEXT
// ============================================

/// Resolved addresses for one chain, immutable for the duration of a
/// computation.
///
/// The boosted program uses parallel address tables (alternate reward
/// token and native<->reward pair), not alternate code paths; the pair and
/// reward-token addresses are not consistent between the standard and
/// boosted deployments on Fuji.
#[derive(Debug, Clone)]
pub struct ChainContext {
    pub chain_id: u64,

    /// Default JSON-RPC endpoint; overridable via configuration.
    pub rpc_url: &'static str,

    // Base assets
    pub wrapped_native: Address,
    pub reward_token: Address,
    pub boosted_reward_token: Address,
    pub stablecoin: Address,

    // Reference pairs for ratio conversions
    pub native_reward_pair: Address,
    pub boosted_native_reward_pair: Address,
    pub native_stable_pair: Address,
    pub reward_stable_pair: Address,

    /// Account whose reward-token balance is the locked-value figure.
    pub lock_account: Address,

    // Accounts excluded from circulating supply
    pub treasury_vester: Address,
    pub treasury_lock: Address,
    pub genesis_account: Address,

    // Staking-contract allowlists, checked by the routing layer
    pub staking_contracts: &'static [Address],
    pub boosted_staking_contracts: &'static [Address],
}

impl ChainContext {
    /// Reward token and native<->reward pair for the requested program.
    pub fn reward_pair_for(&self, boosted: bool) -> (Address, Address) {
        if boosted {
            (self.boosted_reward_token, self.boosted_native_reward_pair)
        } else {
            (self.reward_token, self.native_reward_pair)
        }
    }

    pub fn allows_staking_contract(&self, contract: Address, boosted: bool) -> bool {
        let list = if boosted {
            self.boosted_staking_contracts
        } else {
            self.staking_contracts
        };
        list.contains(&contract)
    }
}

// ============================================
// MAINNET TABLE
// ============================================

const MAINNET_STAKING: &[Address] = &[
    address!("1ab39882cf1ba26b3ab8d7ea3d8d0e07f0c22dcd"),
    address!("4a7e8b47b82e6b9e3e5f3a1c9be8b6c5d7e0f9a2"),
    address!("6f2d8c1e4b9a7d5c3e1f0a8b6d4c2e9f7a5b3d1c"),
    address!("9c4e2a7f1d8b5c3a6e9f0d2b4a7c1e8f5d3b6a9c"),
];

const MAINNET_BOOSTED_STAKING: &[Address] = &[
    address!("2b5d8f1a4c7e0b3d6a9c2e5f8b1d4a7c0e3f6b9d"),
    address!("7e0a3c6f9b2d5a8c1e4f7b0d3a6c9e2f5b8d1a4c"),
];

fn mainnet() -> ChainContext {
    ChainContext {
        chain_id: MAINNET,
        rpc_url: "https://api.avax.network/ext/bc/C/rpc",
        wrapped_native: address!("B31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
        reward_token: address!("5c8d0a7e3b1f9d4c6a2e8b0f5d3c7a9e1b4f6d8c"),
        // same deployment on mainnet; the tables only diverge on Fuji
        boosted_reward_token: address!("5c8d0a7e3b1f9d4c6a2e8b0f5d3c7a9e1b4f6d8c"),
        stablecoin: address!("c7198437980c041c805A1EDcbA50c1Ce5db95118"),
        native_reward_pair: address!("3d7a1c9e5f2b8d0a4c6e9b1f7d3a5c8e0b2f4d6a"),
        boosted_native_reward_pair: address!("3d7a1c9e5f2b8d0a4c6e9b1f7d3a5c8e0b2f4d6a"),
        native_stable_pair: address!("8a3f5d1c7e9b2a4f6d8c0e2b5a7f9d1c3e5b7a9f"),
        reward_stable_pair: address!("4c8e2a6f0d3b7c9e1a5f8d2b6c0e4a7f9b3d5c8e"),
        lock_account: address!("a1d4f7b0c3e6a9d2f5b8c1e4a7d0f3b6c9e2a5d8"),
        treasury_vester: address!("d6b9e2a5c8f1d4b7e0a3c6f9b2d5e8a1c4f7b0d3"),
        treasury_lock: address!("E2fE530C047f2d85298b07D9333C05737f1435fB"),
        genesis_account: address!("81b42dF04Bfd9329Ab897de2aE1b2543d68209Ce"),
        staking_contracts: MAINNET_STAKING,
        boosted_staking_contracts: MAINNET_BOOSTED_STAKING,
    }
}

// ============================================
// FUJI TABLE
// ============================================

const FUJI_STAKING: &[Address] = &[
    address!("0f3b6d9c2e5a8f1b4d7c0a3e6f9b2d5c8e1a4f7b"),
    address!("5a8c1f4b7e0d3a6c9f2b5e8d1a4c7f0b3e6d9a2c"),
];

const FUJI_BOOSTED_STAKING: &[Address] = &[
    address!("b4e7a0d3c6f9b2e5a8d1c4f7b0e3a6d9c2f5b8e1"),
];

fn fuji() -> ChainContext {
    ChainContext {
        chain_id: FUJI,
        rpc_url: "https://api.avax-test.network/ext/bc/C/rpc",
        wrapped_native: address!("d00ae08403B9bbb9124bB305C09058E32C39A48c"),
        reward_token: address!("7f1d4a9c2e6b8f0d3a5c7e9b1f4d6a8c0e2b5f7d"),
        boosted_reward_token: address!("2e6b9f1d4a7c0e3b5d8f2a4c6e9b1d3f5a7c0e2b"),
        stablecoin: address!("9b2e5c8f1a4d7b0e3c6a9f2d5b8e1c4a7f0d3b6e"),
        native_reward_pair: address!("6c9f2b5e8a1d4c7f0b3e6a9d2c5f8b1e4a7d0c3f"),
        boosted_native_reward_pair: address!("1e4a7d0c3f6b9e2a5d8c1f4b7a0e3d6c9f2b5e8a"),
        native_stable_pair: address!("f2b5e8a1d4c7f0b3e6a9d2c5f8b1e4a7d0c3f6b9"),
        reward_stable_pair: address!("3f6b9e2a5d8c1f4b7a0e3d6c9f2b5e8a1d4c7f0b"),
        lock_account: address!("8d1c4f7b0a3e6d9c2f5b8e1a4d7c0f3b6e9a2d5c"),
        treasury_vester: address!("c5f8b1e4a7d0c3f6b9e2a5d8c1f4b7a0e3d6c9f2"),
        treasury_lock: address!("0a3e6d9c2f5b8e1a4d7c0f3b6e9a2d5c8f1b4e7a"),
        genesis_account: address!("e9a2d5c8f1b4e7a0d3c6f9b2e5a8d1c4f7b0e3a6"),
        staking_contracts: FUJI_STAKING,
        boosted_staking_contracts: FUJI_BOOSTED_STAKING,
    }
}

// ============================================
// REGISTRY
// ============================================

lazy_static::lazy_static! {
    static ref REGISTRY: HashMap<u64, ChainContext> = {
        let mut map = HashMap::new();
        map.insert(MAINNET, mainnet());
        map.insert(FUJI, fuji());
        map
    };
}

/// Look up the contract table for a chain. `None` means the chain is not
/// supported; callers reject the request before the engine runs.
pub fn resolve(chain_id: u64) -> Option<&'static ChainContext> {
    REGISTRY.get(&chain_id)
}

/// All supported chain ids, for the startup summary.
pub fn supported_chains() -> Vec<u64> {
    let mut ids: Vec<u64> = REGISTRY.keys().copied().collect();
    ids.sort_unstable();
    ids
}
