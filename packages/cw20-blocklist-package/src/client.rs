//! Client-side binding table for a deployed cw20-blocklist token.
//!
//! [`bind`] turns a [`BindingContext`] into a [`Cw20Blocklist`] whose methods map
//! one-to-one onto contract messages. Each method performs exactly one
//! [`ContractClient`] dispatch against [`CW20_BLOCKLIST`]; the client owns
//! transport, signing and retries, and its errors are returned untouched.

use std::collections::BTreeMap;

use cosmwasm_schema::serde::de::DeserializeOwned;
use cosmwasm_schema::serde::Serialize;
use cosmwasm_std::Uint128;
use cw20::BalanceResponse;

use crate::cw20_blocklist::{BlockedResponse, ExecuteMsg, QueryMsg};

/// Identifier every binding dispatch targets.
pub const CW20_BLOCKLIST: &str = "cw20-blocklist";
/// Role used when a mutating call does not name a signer.
pub const VALIDATOR_ROLE: &str = "validator";

/// Generic query/execute client the binding table forwards to.
pub trait ContractClient {
    /// Identity allowed to sign execute calls.
    type Signer;
    /// Result of a successful execute call.
    type Response;
    type Error;

    fn query<M, T>(&self, contract: &str, msg: &M) -> Result<T, Self::Error>
    where
        M: Serialize + ?Sized,
        T: DeserializeOwned;

    fn execute<M>(
        &mut self,
        signer: &Self::Signer,
        contract: &str,
        msg: &M,
    ) -> Result<Self::Response, Self::Error>
    where
        M: Serialize + ?Sized;
}

/// Role name -> signer identity. The validator role always exists.
#[derive(Clone, Debug, PartialEq)]
pub struct Wallets<S> {
    validator: S,
    others: BTreeMap<String, S>,
}

impl<S> Wallets<S> {
    pub fn new(validator: S) -> Self {
        Self {
            validator,
            others: BTreeMap::new(),
        }
    }

    /// Registers `signer` under `role`. Registering [`VALIDATOR_ROLE`] replaces
    /// the default signer.
    pub fn with(mut self, role: impl Into<String>, signer: S) -> Self {
        let role = role.into();
        if role == VALIDATOR_ROLE {
            self.validator = signer;
        } else {
            self.others.insert(role, signer);
        }
        self
    }

    pub fn validator(&self) -> &S {
        &self.validator
    }

    pub fn get(&self, role: &str) -> Option<&S> {
        if role == VALIDATOR_ROLE {
            Some(&self.validator)
        } else {
            self.others.get(role)
        }
    }
}

/// Everything a binding needs. `refs` and `config` are carried for the caller
/// and never read by any operation.
pub struct BindingContext<C: ContractClient, R = (), K = ()> {
    pub wallets: Wallets<C::Signer>,
    pub refs: R,
    pub config: K,
    pub client: C,
}

impl<C: ContractClient> BindingContext<C> {
    pub fn new(wallets: Wallets<C::Signer>, client: C) -> Self {
        Self {
            wallets,
            refs: (),
            config: (),
            client,
        }
    }
}

impl<C: ContractClient, R, K> BindingContext<C, R, K> {
    pub fn with_refs<R2>(self, refs: R2) -> BindingContext<C, R2, K> {
        BindingContext {
            wallets: self.wallets,
            refs,
            config: self.config,
            client: self.client,
        }
    }

    pub fn with_config<K2>(self, config: K2) -> BindingContext<C, R, K2> {
        BindingContext {
            wallets: self.wallets,
            refs: self.refs,
            config,
            client: self.client,
        }
    }

    fn query<T: DeserializeOwned>(&self, operation: &str, msg: &QueryMsg) -> Result<T, C::Error> {
        tracing::debug!(contract = CW20_BLOCKLIST, operation, "dispatching query");
        self.client.query(CW20_BLOCKLIST, msg)
    }

    fn execute(
        &mut self,
        operation: &str,
        signer: Option<&C::Signer>,
        msg: &ExecuteMsg,
    ) -> Result<C::Response, C::Error> {
        tracing::debug!(
            contract = CW20_BLOCKLIST,
            operation,
            default_signer = signer.is_none(),
            "dispatching execute"
        );
        let signer = signer.unwrap_or(&self.wallets.validator);
        self.client.execute(signer, CW20_BLOCKLIST, msg)
    }
}

/// Builds the cw20-blocklist operation set over `ctx`.
pub fn bind<C: ContractClient, R, K>(
    ctx: &mut BindingContext<C, R, K>,
) -> Cw20Blocklist<'_, C, R, K> {
    Cw20Blocklist { ctx }
}

/// Named cw20-blocklist operations. Mutating operations sign with the given
/// signer, or with the validator wallet when `signer` is `None`.
pub struct Cw20Blocklist<'a, C: ContractClient, R = (), K = ()> {
    ctx: &'a mut BindingContext<C, R, K>,
}

impl<'a, C: ContractClient, R, K> Cw20Blocklist<'a, C, R, K> {
    pub fn context(&self) -> &BindingContext<C, R, K> {
        self.ctx
    }

    /// Whether `address` is on the blocklist.
    pub fn blocked(&self, address: impl Into<String>) -> Result<BlockedResponse, C::Error> {
        self.ctx.query(
            "blocked",
            &QueryMsg::IsBlocked {
                address: address.into(),
            },
        )
    }

    pub fn balance(&self, address: impl Into<String>) -> Result<BalanceResponse, C::Error> {
        self.ctx.query(
            "balance",
            &QueryMsg::Balance {
                address: address.into(),
            },
        )
    }

    pub fn mint(
        &mut self,
        recipient: impl Into<String>,
        amount: impl Into<Uint128>,
        signer: Option<&C::Signer>,
    ) -> Result<C::Response, C::Error> {
        self.ctx.execute(
            "mint",
            signer,
            &ExecuteMsg::Mint {
                recipient: recipient.into(),
                amount: amount.into(),
            },
        )
    }

    pub fn block(
        &mut self,
        address: impl Into<String>,
        signer: Option<&C::Signer>,
    ) -> Result<C::Response, C::Error> {
        self.ctx.execute(
            "block",
            signer,
            &ExecuteMsg::AddToBlockedList {
                address: address.into(),
            },
        )
    }

    pub fn redeem(
        &mut self,
        amount: impl Into<Uint128>,
        signer: Option<&C::Signer>,
    ) -> Result<C::Response, C::Error> {
        self.ctx.execute(
            "redeem",
            signer,
            &ExecuteMsg::Redeem {
                amount: amount.into(),
            },
        )
    }

    /// Burns the balance of a blocked address.
    pub fn destroy_blocked_funds(
        &mut self,
        address: impl Into<String>,
        signer: Option<&C::Signer>,
    ) -> Result<C::Response, C::Error> {
        self.ctx.execute(
            "destroy_blocked_funds",
            signer,
            &ExecuteMsg::DestroyBlockedFunds {
                address: address.into(),
            },
        )
    }

    pub fn unblock(
        &mut self,
        address: impl Into<String>,
        signer: Option<&C::Signer>,
    ) -> Result<C::Response, C::Error> {
        self.ctx.execute(
            "unblock",
            signer,
            &ExecuteMsg::RemoveFromBlockedList {
                address: address.into(),
            },
        )
    }

    pub fn transfer(
        &mut self,
        recipient: impl Into<String>,
        amount: impl Into<Uint128>,
        signer: Option<&C::Signer>,
    ) -> Result<C::Response, C::Error> {
        self.ctx.execute(
            "transfer",
            signer,
            &ExecuteMsg::Transfer {
                recipient: recipient.into(),
                amount: amount.into(),
            },
        )
    }
}
