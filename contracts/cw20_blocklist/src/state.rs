use cosmwasm_std::Addr;
use cw_storage_plus::Map;

/// Blocklist flags. Key (account) -> blocked. Token info, balances and
/// allowances live in the cw20-base storage layout.
pub const BLOCKED: Map<&Addr, bool> = Map::new("blocked");
