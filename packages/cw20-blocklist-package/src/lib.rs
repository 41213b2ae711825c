pub mod client;
pub mod cw20_blocklist;
pub mod keys;
pub mod querier;

pub use client::{bind, BindingContext, ContractClient, Cw20Blocklist, Wallets, CW20_BLOCKLIST};
