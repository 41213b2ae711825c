use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};
use cw20::BalanceResponse;

use crate::cw20_blocklist::{BlockedResponse, QueryMsg};

/// Checks the blocklist of the token at `contract_addr`.
pub fn query_is_blocked(
    querier: &QuerierWrapper,
    contract_addr: &Addr,
    address: impl Into<String>,
) -> StdResult<bool> {
    let res: BlockedResponse = querier.query_wasm_smart(
        contract_addr,
        &QueryMsg::IsBlocked {
            address: address.into(),
        },
    )?;

    Ok(res.blocked)
}

pub fn query_blocklist_balance(
    querier: &QuerierWrapper,
    contract_addr: &Addr,
    address: impl Into<String>,
) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        contract_addr,
        &QueryMsg::Balance {
            address: address.into(),
        },
    )?;

    Ok(res.balance)
}
