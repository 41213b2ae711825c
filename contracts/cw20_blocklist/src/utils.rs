use cosmwasm_std::{ensure, Addr, Deps, Storage, Uint128};
use cw20_base::state::TOKEN_INFO;

use crate::error::ContractError;
use crate::state::BLOCKED;

/// Ensures `sender` is the current token minter.
pub fn ensure_minter(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let token_info = TOKEN_INFO.load(storage)?;
    match token_info.mint {
        Some(minter_data) if &minter_data.minter == sender => Ok(()),
        _ => Err(ContractError::Unauthorized {}),
    }
}

/// An address that fails validation can't hold funds, so it is never blocked.
pub fn is_blocked(deps: Deps, address: &str) -> bool {
    match deps.api.addr_validate(address) {
        Ok(addr) => BLOCKED
            .may_load(deps.storage, &addr)
            .ok()
            .flatten()
            .unwrap_or_default(),
        Err(_) => false,
    }
}

pub fn ensure_not_blocked(deps: Deps, address: &str) -> Result<(), ContractError> {
    ensure!(!is_blocked(deps, address), ContractError::Blocked {});
    Ok(())
}

pub fn ensure_nonzero(amount: Uint128) -> Result<(), ContractError> {
    ensure!(!amount.is_zero(), ContractError::InvalidZeroAmount {});
    Ok(())
}
