use std::ops::RangeInclusive;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, StdError, StdResult, Uint128};
use cw20::{
    AllAccountsResponse, AllAllowancesResponse, AllowanceResponse, BalanceResponse, Expiration,
    MinterResponse, TokenInfoResponse,
};

/// Allowed token name length in bytes
pub const NAME_LENGTH_LIMITS: RangeInclusive<usize> = 3..=50;
/// Allowed ticker symbol length in bytes
pub const SYMBOL_LENGTH_LIMITS: RangeInclusive<usize> = 3..=12;
/// Maximum number of decimal places
pub const MAX_DECIMALS: u8 = 18;

/// This structure describes the parameters used for creating a blocklist token.
#[cw_serde]
pub struct InstantiateMsg {
    /// Name of the token
    pub name: String,
    /// Symbol / ticker of the token
    pub symbol: String,
    /// Decimal places of the token (for UI)
    pub decimals: u8,
}

impl InstantiateMsg {
    pub fn validate(&self) -> StdResult<()> {
        if !is_valid_name(&self.name) {
            return Err(StdError::generic_err(
                "Name is not in the expected format (3-50 UTF-8 bytes)",
            ));
        }
        if !is_valid_symbol(&self.symbol) {
            return Err(StdError::generic_err(
                "Ticker symbol is not in expected format [a-zA-Z\\-]{3,12}",
            ));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(StdError::generic_err("Decimals must not exceed 18"));
        }
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    NAME_LENGTH_LIMITS.contains(&name.len())
}

fn is_valid_symbol(symbol: &str) -> bool {
    SYMBOL_LENGTH_LIMITS.contains(&symbol.len())
        && symbol
            .bytes()
            .all(|byte| byte == b'-' || byte.is_ascii_alphabetic())
}

/// This enum describes the execute messages available in the blocklist token.
#[cw_serde]
pub enum ExecuteMsg {
    /// Put an address on the blocklist. Minter only.
    AddToBlockedList { address: String },
    /// Take an address off the blocklist. Minter only.
    RemoveFromBlockedList { address: String },
    /// Mint new tokens to `recipient`. Minter only.
    Mint { recipient: String, amount: Uint128 },
    /// Burn the whole balance of a blocked address. Minter only.
    DestroyBlockedFunds { address: String },
    /// Hand minting rights over to another address. Minter only.
    UpdateMinter { address: String },
    /// Implements CW20. Transfer is a base message to move tokens to another account without triggering actions
    Transfer { recipient: String, amount: Uint128 },
    /// Redeem is a message to destroy tokens forever
    Redeem { amount: Uint128 },
    /// Implements CW20. Send is a base message to transfer tokens to a contract and trigger an action
    /// on the receiving contract.
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    /// Implements CW20 "approval" extension. Allows spender to access an additional amount tokens
    /// from the owner's (env.sender) account. If expires is Some(), overwrites current allowance
    /// expiration with this one.
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Implements CW20 "approval" extension. Lowers the spender's access of tokens
    /// from the owner's (env.sender) account by amount.
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Implements CW20 "approval" extension. Transfers amount tokens from owner -> recipient
    /// if `env.sender` has sufficient pre-approval.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Implements CW20 "approval" extension. Sends amount tokens from owner -> contract
    /// if `env.sender` has sufficient pre-approval.
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
}

/// This enum describes the query messages available in the blocklist token.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Whether the given address is on the blocklist
    #[returns(BlockedResponse)]
    IsBlocked { address: String },
    /// Implements CW20. Returns the current balance of the given address, 0 if unset.
    #[returns(BalanceResponse)]
    Balance { address: String },
    /// Implements CW20 "enumerable" extension. Lists all accounts holding tokens.
    #[returns(AllAccountsResponse)]
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Implements CW20. Returns metadata on the contract - name, decimals, supply, etc.
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    /// Implements CW20 "allowance" extension.
    /// Returns how much spender can use from owner account, 0 if unset.
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    /// Implements CW20 "enumerable" extension.
    /// Returns all allowances this owner has approved. Supports pagination.
    #[returns(AllAllowancesResponse)]
    AllAllowances {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Implements CW20 "mintable" extension.
    /// Returns who can mint and the hard cap on maximum tokens after minting.
    #[returns(Option<MinterResponse>)]
    Minter {},
}

#[cw_serde]
pub struct BlockedResponse {
    pub blocked: bool,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cfg(test)]
mod tests {
    use cosmwasm_std::to_json_string;

    use super::*;

    fn instantiate_msg(name: &str, symbol: &str, decimals: u8) -> InstantiateMsg {
        InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
        }
    }

    #[test]
    fn validate_instantiate_msg() {
        instantiate_msg("Auto Gen", "AUTO", 6).validate().unwrap();
        instantiate_msg("Gen", "a-Z", 18).validate().unwrap();

        let err = instantiate_msg("ab", "AUTO", 6).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Generic error: Name is not in the expected format (3-50 UTF-8 bytes)"
        );
        instantiate_msg(&"a".repeat(51), "AUTO", 6)
            .validate()
            .unwrap_err();

        for symbol in ["AU", "AUTOAUTOAUTOA", "AUT0", "AU_TO"] {
            let err = instantiate_msg("Auto Gen", symbol, 6)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("Ticker symbol"), "{symbol}");
        }

        let err = instantiate_msg("Auto Gen", "AUTO", 19)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Generic error: Decimals must not exceed 18");
    }

    #[test]
    fn messages_use_snake_case_tags() {
        assert_eq!(
            to_json_string(&ExecuteMsg::AddToBlockedList {
                address: "addr2".to_string()
            })
            .unwrap(),
            r#"{"add_to_blocked_list":{"address":"addr2"}}"#
        );
        assert_eq!(
            to_json_string(&ExecuteMsg::DestroyBlockedFunds {
                address: "addr2".to_string()
            })
            .unwrap(),
            r#"{"destroy_blocked_funds":{"address":"addr2"}}"#
        );
        assert_eq!(
            to_json_string(&QueryMsg::IsBlocked {
                address: "addr1".to_string()
            })
            .unwrap(),
            r#"{"is_blocked":{"address":"addr1"}}"#
        );
    }
}
