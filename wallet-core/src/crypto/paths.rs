// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - BIP-44 / SLIP-0010 (all levels hardened)
// Template cố định: m/44'/<coin_type>'/0'/<account>'

use crate::error::{DerivationError, DerivationResult};
use crate::network::NetworkKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const ETHEREUM: u32 = 60;
    pub const SOLANA: u32 = 501;
}

/// BIP-44 purpose level
pub const PURPOSE: u32 = 44;

/// Change level, luôn cố định = 0
pub const CHANGE: u32 = 0;

/// Offset cho hardened index (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Largest account index that can still be hardened without overflow.
pub const MAX_ACCOUNT_INDEX: u32 = HARDENED_OFFSET - 1;

/// Hardened derivation path `m/44'/<coin>'/0'/<account>'`.
///
/// Built only from a (network, account index) pair, so the path string is
/// always reproducible from those two values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    network: NetworkKind,
    account_index: u32,
    path: String,
}

impl DerivationPath {
    /// Build the canonical path for `network` / `account_index`.
    ///
    /// Fails with [`DerivationError::InvalidAccountIndex`] when the index is
    /// already in the hardened range, instead of wrapping around.
    pub fn new(network: NetworkKind, account_index: u32) -> DerivationResult<Self> {
        if account_index > MAX_ACCOUNT_INDEX {
            return Err(DerivationError::InvalidAccountIndex(account_index));
        }

        let path = format!(
            "m/{}'/{}'/{}'/{}'",
            PURPOSE,
            network.coin_type(),
            CHANGE,
            account_index
        );

        Ok(Self {
            network,
            account_index,
            path,
        })
    }

    #[inline]
    pub fn network(&self) -> NetworkKind {
        self.network
    }

    #[inline]
    pub fn account_index(&self) -> u32 {
        self.account_index
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Unhardened level indices, in order from the root.
    ///
    /// Input: "m/44'/501'/0'/3'"
    /// Output: [44, 501, 0, 3]
    pub fn indices(&self) -> [u32; 4] {
        [
            PURPOSE,
            self.network.coin_type(),
            CHANGE,
            self.account_index,
        ]
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for DerivationPath {
    type Err = DerivationError;

    /// Parse a persisted path string. Only the canonical template with a
    /// supported coin type is accepted.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DerivationError::InvalidPath(format!("'{}': {}", path, reason));

        let segments = path
            .strip_prefix("m/")
            .ok_or_else(|| invalid("path must start with 'm/'"))?;

        let mut indices = Vec::with_capacity(4);
        for segment in segments.split('/') {
            // SLIP-0010 ed25519: tất cả phải hardened
            let digits = segment
                .strip_suffix('\'')
                .ok_or_else(|| invalid("every level must be hardened"))?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("level is not a decimal index"));
            }
            let index: u32 = digits
                .parse()
                .map_err(|_| invalid("level index out of range"))?;
            indices.push(index);
        }

        let &[purpose, coin, change, account] = indices.as_slice() else {
            return Err(invalid("expected exactly four levels"));
        };
        if purpose != PURPOSE {
            return Err(invalid("purpose level must be 44'"));
        }
        if change != CHANGE {
            return Err(invalid("change level must be 0'"));
        }
        let network = NetworkKind::from_coin_type(coin)
            .ok_or_else(|| DerivationError::UnsupportedNetwork(coin.to_string()))?;

        let parsed = Self::new(network, account)?;
        // Chặn các dạng như "0007'" - chuỗi phải khớp chính xác template
        if parsed.path != path {
            return Err(invalid("non-canonical index formatting"));
        }
        Ok(parsed)
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
