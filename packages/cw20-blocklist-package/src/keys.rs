//! Signer secrets for deployment and scripting.
//!
//! Secrets come from an explicit lookup function so that callers decide where
//! they live. [`Keys::from_env`] is the usual choice in CI, where the mnemonic
//! is injected as `SECRET_MNEMONIC` instead of being hardcoded.

use std::collections::BTreeMap;
use std::fmt;

/// Environment variable holding the mnemonic of the "bombay" key set.
pub const SECRET_MNEMONIC: &str = "SECRET_MNEMONIC";
/// Environment variable holding a raw private key. Read by external signers
/// only, it is not part of [`SecretRecord`].
pub const SECRET_PRIV_KEY: &str = "SECRET_PRIV_KEY";

/// Label of the Terra bombay testnet key set.
pub const BOMBAY: &str = "bombay";

/// Secret material of a single network.
///
/// A missing mnemonic is passed through untouched; whoever builds a signer
/// from this record decides how to handle it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretRecord {
    pub mnemonic: Option<String>,
}

impl fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretRecord")
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Network label -> secret record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keys {
    entries: BTreeMap<String, SecretRecord>,
}

impl Keys {
    /// Builds the key sets from `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut entries = BTreeMap::new();
        entries.insert(
            BOMBAY.to_string(),
            SecretRecord {
                mnemonic: lookup(SECRET_MNEMONIC),
            },
        );

        Self { entries }
    }

    /// Reads the process environment once. Unset or non-unicode variables are
    /// treated as absent.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn get(&self, label: &str) -> Option<&SecretRecord> {
        self.entries.get(label)
    }

    pub fn bombay(&self) -> &SecretRecord {
        // Always inserted by the constructors
        self.entries.get(BOMBAY).unwrap_or(&EMPTY_RECORD)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

static EMPTY_RECORD: SecretRecord = SecretRecord { mnemonic: None };
