//! Pool reserve resolution.
//!
//! A pair contract's reserves are its own balances of its two constituent
//! tokens. The resolver returns raw reserves, position-correlated with the
//! tokens it was asked about; interpreting which side is the "base" is the
//! classifier's job, not this one's.

use alloy_primitives::Address;

use crate::accessor::ContractAccessor;
use crate::amount::Amount;
use crate::error::MetricsError;
use crate::rpc::ReadTransport;

/// Reserves of a pair contract. `token_a`'s reserve is `reserve_a`.
#[derive(Debug, Clone, Copy)]
pub struct PoolReserves {
    pub token_a: Address,
    pub token_b: Address,
    pub reserve_a: Amount,
    pub reserve_b: Amount,
}

/// Read both reserves of `pair`. The two balance reads have no data
/// dependency on each other and run concurrently.
pub async fn reserves_of<T: ReadTransport>(
    accessor: &ContractAccessor<T>,
    pair: Address,
    token_a: Address,
    token_b: Address,
) -> Result<PoolReserves, MetricsError> {
    let (reserve_a, reserve_b) = tokio::try_join!(
        accessor.balance_of(token_a, pair),
        accessor.balance_of(token_b, pair),
    )?;
    Ok(PoolReserves {
        token_a,
        token_b,
        reserve_a,
        reserve_b,
    })
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use alloy_sol_types::SolCall;

    use crate::accessor::IERC20;
    use crate::rpc::testing::{uint_word, ScriptedTransport};

    use super::*;

    const PAIR: Address = Address::repeat_byte(0xaa);
    const TOKEN_A: Address = Address::repeat_byte(0xbb);
    const TOKEN_B: Address = Address::repeat_byte(0xcc);

    #[test]
    fn reserves_stay_position_correlated() {
        let transport = ScriptedTransport::new()
            .stub(
                TOKEN_A,
                IERC20::balanceOfCall { owner: PAIR }.abi_encode(),
                uint_word(U256::from(500u64)),
            )
            .stub(
                TOKEN_B,
                IERC20::balanceOfCall { owner: PAIR }.abi_encode(),
                uint_word(U256::from(700u64)),
            );
        let accessor = ContractAccessor::new(transport);

        let reserves =
            tokio_test::block_on(reserves_of(&accessor, PAIR, TOKEN_A, TOKEN_B)).unwrap();
        assert_eq!(reserves.token_a, TOKEN_A);
        assert_eq!(reserves.reserve_a, Amount::from_u64(500));
        assert_eq!(reserves.token_b, TOKEN_B);
        assert_eq!(reserves.reserve_b, Amount::from_u64(700));
    }
}
